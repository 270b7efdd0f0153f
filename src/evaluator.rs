//! Permission evaluation facade.
//!
//! [`AclPermissionEvaluator`] is a stateless front end over an
//! [`AclService`]: it resolves the object identity, the caller's sids, and
//! the requested permission set, then delegates the grant decision to the
//! ACL the service returns. It holds no ACL state of its own and is safe to
//! share across tasks.

use std::sync::Arc;

use tracing::debug;

use crate::error::{AclError, AclResult};
use crate::model::{
    Authentication, DefaultPermissionFactory, ObjectIdentity, Permission, PermissionFactory,
    PermissionSpec,
};
use crate::service::{
    AclService, ObjectIdentityGenerator, ObjectIdentityRetrievalStrategy, SecuredObject,
    SidRetrievalStrategy,
};

/// Evaluates permission checks against ACLs supplied by an [`AclService`].
///
/// By default the evaluator uses the strategies configured on the service;
/// each one can be overridden per evaluator with the `with_*` builders.
pub struct AclPermissionEvaluator<S> {
    acl_service: Arc<S>,
    permission_factory: Arc<dyn PermissionFactory>,
    object_identity_retrieval_strategy: Option<Arc<dyn ObjectIdentityRetrievalStrategy>>,
    object_identity_generator: Option<Arc<dyn ObjectIdentityGenerator>>,
    sid_retrieval_strategy: Option<Arc<dyn SidRetrievalStrategy>>,
}

impl<S: AclService> AclPermissionEvaluator<S> {
    /// Creates an evaluator over the given ACL service.
    pub fn new(acl_service: Arc<S>) -> Self {
        Self {
            acl_service,
            permission_factory: Arc::new(DefaultPermissionFactory::new()),
            object_identity_retrieval_strategy: None,
            object_identity_generator: None,
            sid_retrieval_strategy: None,
        }
    }

    /// Replaces the permission factory.
    pub fn with_permission_factory(mut self, factory: Arc<dyn PermissionFactory>) -> Self {
        self.permission_factory = factory;
        self
    }

    /// Overrides the service-configured identity-retrieval strategy.
    pub fn with_object_identity_retrieval_strategy(
        mut self,
        strategy: Arc<dyn ObjectIdentityRetrievalStrategy>,
    ) -> Self {
        self.object_identity_retrieval_strategy = Some(strategy);
        self
    }

    /// Overrides the service-configured object-identity generator.
    pub fn with_object_identity_generator(
        mut self,
        generator: Arc<dyn ObjectIdentityGenerator>,
    ) -> Self {
        self.object_identity_generator = Some(generator);
        self
    }

    /// Overrides the service-configured sid-retrieval strategy.
    pub fn with_sid_retrieval_strategy(mut self, strategy: Arc<dyn SidRetrievalStrategy>) -> Self {
        self.sid_retrieval_strategy = Some(strategy);
        self
    }

    /// Checks whether `authentication` holds `permission` on `domain_object`.
    ///
    /// A domain object that resolves to no identity is denied, not an
    /// error. Service and permission-resolution failures propagate.
    pub async fn has_permission(
        &self,
        authentication: &Authentication,
        domain_object: &dyn SecuredObject,
        permission: impl Into<PermissionSpec>,
    ) -> AclResult<bool> {
        let strategy = match &self.object_identity_retrieval_strategy {
            Some(strategy) => Arc::clone(strategy),
            None => self.acl_service.object_identity_retrieval_strategy(),
        };

        let Some(object_identity) = strategy.object_identity(domain_object) else {
            debug!("denying access: domain object resolves to no identity");
            return Ok(false);
        };

        self.check_permission(authentication, object_identity, permission.into())
            .await
    }

    /// Checks a permission for an (id, type) pair instead of a live domain
    /// object, routing identity construction through the configured
    /// generator.
    pub async fn has_permission_by_id(
        &self,
        authentication: &Authentication,
        id: &str,
        object_type: &str,
        permission: impl Into<PermissionSpec>,
    ) -> AclResult<bool> {
        let generator = match &self.object_identity_generator {
            Some(generator) => Arc::clone(generator),
            None => self.acl_service.object_identity_generator(),
        };

        let object_identity = generator.create_object_identity(id, object_type)?;

        self.check_permission(authentication, object_identity, permission.into())
            .await
    }

    async fn check_permission(
        &self,
        authentication: &Authentication,
        object_identity: ObjectIdentity,
        spec: PermissionSpec,
    ) -> AclResult<bool> {
        let permissions = self.resolve_permissions(spec)?;

        let sid_strategy = match &self.sid_retrieval_strategy {
            Some(strategy) => Arc::clone(strategy),
            None => self.acl_service.sid_retrieval_strategy(),
        };
        let sids = sid_strategy.sids(authentication);

        let acl = self
            .acl_service
            .read_acl_by_id(&object_identity, &sids)
            .await?;

        // Administrative mode stays off: this is an access decision, not an
        // audit/administration read.
        let granted = acl.is_granted(&permissions, &sids, false);
        debug!(object_identity = %object_identity, granted, "acl decision");
        Ok(granted)
    }

    /// Resolves a permission spec into concrete permissions.
    ///
    /// Name specs may carry several comma-delimited names; each is trimmed
    /// and resolved through the factory.
    fn resolve_permissions(&self, spec: PermissionSpec) -> AclResult<Vec<Permission>> {
        match spec {
            PermissionSpec::Permissions(permissions) => Ok(permissions),
            PermissionSpec::Mask(mask) => {
                Ok(vec![self.permission_factory.permission_from_mask(mask)?])
            }
            PermissionSpec::Name(name) => {
                let mut permissions = Vec::new();
                for part in name.split(',') {
                    let part = part.trim();
                    if part.is_empty() {
                        continue;
                    }
                    permissions.push(self.permission_factory.permission_from_name(part)?);
                }
                if permissions.is_empty() {
                    return Err(AclError::UnknownPermission { name });
                }
                Ok(permissions)
            }
        }
    }
}
