//! Pluggable strategies for identity and sid derivation.

use crate::error::{AclError, AclResult};
use crate::model::{Authentication, ObjectIdentity, Sid};

/// Domain objects that can be mapped to an ACL object identity.
pub trait SecuredObject: Send + Sync {
    /// Type name used for the object identity (e.g., "document").
    fn object_type(&self) -> &str;

    /// Primary key of this instance, or `None` if it has no identity yet
    /// (e.g., unsaved).
    fn object_id(&self) -> Option<String>;
}

/// Strategy deriving an object identity from a domain object.
pub trait ObjectIdentityRetrievalStrategy: Send + Sync {
    /// Returns the identity of the given domain object, or `None` when the
    /// object cannot be resolved to one. Absence is not an error: callers
    /// skip (batching) or deny (evaluation).
    fn object_identity(&self, domain_object: &dyn SecuredObject) -> Option<ObjectIdentity>;
}

/// Default identity-retrieval strategy: reads type and id straight off the
/// [`SecuredObject`] accessors.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultObjectIdentityRetrievalStrategy;

impl ObjectIdentityRetrievalStrategy for DefaultObjectIdentityRetrievalStrategy {
    fn object_identity(&self, domain_object: &dyn SecuredObject) -> Option<ObjectIdentity> {
        let object_id = domain_object.object_id()?;
        Some(ObjectIdentity::new(domain_object.object_type(), object_id))
    }
}

/// Strategy constructing an object identity from an (id, type) pair when no
/// domain object instance is at hand.
pub trait ObjectIdentityGenerator: Send + Sync {
    /// Builds the identity for the given primary key and type name.
    fn create_object_identity(&self, id: &str, object_type: &str) -> AclResult<ObjectIdentity>;
}

/// Default generator: validates both parts are non-empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultObjectIdentityGenerator;

impl ObjectIdentityGenerator for DefaultObjectIdentityGenerator {
    fn create_object_identity(&self, id: &str, object_type: &str) -> AclResult<ObjectIdentity> {
        if id.is_empty() || object_type.is_empty() {
            return Err(AclError::InvalidObjectIdentity {
                value: format!("{object_type}:{id}"),
            });
        }
        Ok(ObjectIdentity::new(object_type, id))
    }
}

/// Strategy deriving the sid list for a credential.
pub trait SidRetrievalStrategy: Send + Sync {
    /// Returns the sids for the given authentication, ordered most-specific
    /// first.
    fn sids(&self, authentication: &Authentication) -> Vec<Sid>;
}

/// Default sid-retrieval strategy: the principal sid first, then one
/// granted-authority sid per authority in grant order.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSidRetrievalStrategy;

impl SidRetrievalStrategy for DefaultSidRetrievalStrategy {
    fn sids(&self, authentication: &Authentication) -> Vec<Sid> {
        let mut sids = Vec::with_capacity(authentication.authorities.len() + 1);
        sids.push(Sid::principal(&authentication.principal));
        for authority in &authentication.authorities {
            sids.push(Sid::granted_authority(authority));
        }
        sids
    }
}
