//! Batched ACL cache warming.
//!
//! [`AclPermissionCacheOptimizer`] turns a collection of domain objects into
//! a single batched read on the ACL service so that subsequent per-object
//! permission checks hit the service's cache. The optimizer caches nothing
//! itself.

use std::sync::Arc;

use tracing::debug;

use crate::error::AclResult;
use crate::model::Authentication;
use crate::service::{AclService, SecuredObject};

/// Warms the ACL service's cache for a batch of domain objects.
pub struct AclPermissionCacheOptimizer<S> {
    acl_service: Arc<S>,
}

impl<S: AclService> AclPermissionCacheOptimizer<S> {
    /// Creates an optimizer over the given ACL service.
    pub fn new(acl_service: Arc<S>) -> Self {
        Self { acl_service }
    }

    /// Resolves identities for the batch and issues at most one batched
    /// read against the service.
    ///
    /// Absent elements and objects the identity-retrieval strategy cannot
    /// resolve are skipped. An empty batch returns without touching the
    /// service or either strategy; a batch where nothing resolves performs
    /// no read.
    pub async fn cache_permissions_for(
        &self,
        authentication: &Authentication,
        domain_objects: &[Option<&dyn SecuredObject>],
    ) -> AclResult<()> {
        if domain_objects.is_empty() {
            return Ok(());
        }

        let oid_strategy = self.acl_service.object_identity_retrieval_strategy();
        let mut object_identities = Vec::with_capacity(domain_objects.len());
        for domain_object in domain_objects.iter().flatten() {
            if let Some(object_identity) = oid_strategy.object_identity(*domain_object) {
                object_identities.push(object_identity);
            }
        }

        if object_identities.is_empty() {
            return Ok(());
        }

        let sids = self
            .acl_service
            .sid_retrieval_strategy()
            .sids(authentication);

        debug!(count = object_identities.len(), "eagerly loading acls for batch");
        self.acl_service
            .read_acls_by_id(&object_identities, &sids)
            .await?;
        Ok(())
    }
}
