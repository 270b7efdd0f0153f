//! Collaborator contracts consumed by the ACL facades.
//!
//! The facades never compute grants themselves: the ACL engine lives behind
//! the [`AclService`] and [`Acl`] traits, and identity/sid derivation behind
//! the strategy traits in [`strategies`]. Implementations are injected at
//! construction, which is also how the tests substitute doubles.

mod strategies;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AclResult;
use crate::model::{ObjectIdentity, Permission, Sid};

pub use strategies::{
    DefaultObjectIdentityGenerator, DefaultObjectIdentityRetrievalStrategy,
    DefaultSidRetrievalStrategy, ObjectIdentityGenerator, ObjectIdentityRetrievalStrategy,
    SecuredObject, SidRetrievalStrategy,
};

/// An access control list for one object identity.
///
/// Opaque aggregate answering whether a permission set is granted to a sid
/// set. How entries are stored, inherited, or matched is the
/// implementation's concern.
pub trait Acl: Send + Sync {
    /// Returns whether any of the given permissions is granted to any of
    /// the given sids. `administrative_mode` suppresses audit side effects
    /// in implementations that have them.
    fn is_granted(&self, permissions: &[Permission], sids: &[Sid], administrative_mode: bool)
        -> bool;
}

/// The ACL lookup service behind both facades.
///
/// Implementations own retrieval, caching, and consistency of ACL data. The
/// strategy accessors let an implementation carry its own identity and sid
/// derivation rules; the provided defaults are the crate's standard
/// strategies.
#[async_trait]
pub trait AclService: Send + Sync {
    /// Reads the ACL for a single object identity, on behalf of the given
    /// sids.
    async fn read_acl_by_id(
        &self,
        object_identity: &ObjectIdentity,
        sids: &[Sid],
    ) -> AclResult<Arc<dyn Acl>>;

    /// Reads ACLs for a batch of object identities in one call, on behalf
    /// of the given sids. Implementations backed by a cache are expected to
    /// use this as their warm path.
    async fn read_acls_by_id(
        &self,
        object_identities: &[ObjectIdentity],
        sids: &[Sid],
    ) -> AclResult<HashMap<ObjectIdentity, Arc<dyn Acl>>>;

    /// The identity-retrieval strategy configured for this service.
    fn object_identity_retrieval_strategy(&self) -> Arc<dyn ObjectIdentityRetrievalStrategy> {
        Arc::new(DefaultObjectIdentityRetrievalStrategy)
    }

    /// The object-identity generator configured for this service.
    fn object_identity_generator(&self) -> Arc<dyn ObjectIdentityGenerator> {
        Arc::new(DefaultObjectIdentityGenerator)
    }

    /// The sid-retrieval strategy configured for this service.
    fn sid_retrieval_strategy(&self) -> Arc<dyn SidRetrievalStrategy> {
        Arc::new(DefaultSidRetrievalStrategy)
    }
}
