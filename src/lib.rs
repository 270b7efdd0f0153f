//! rsacl: ACL permission evaluation facades
//!
//! This crate contains the delegation layer of an access-control-list
//! system:
//! - Permission evaluation against service-supplied ACLs
//! - Batched ACL cache warming
//! - Pluggable identity, sid, and permission resolution
//! - An opt-in read-through ACL cache
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   rsacl                      │
//! ├─────────────────────────────────────────────┤
//! │  model/      - Identity, sid & permission   │
//! │                value types                  │
//! │  service/    - AclService & strategy traits │
//! │  evaluator/  - Permission check facade      │
//! │  optimizer/  - Batched cache warming        │
//! │  cache/      - Read-through ACL cache       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The facades are stateless and thread-safe; every ACL retrieval, caching,
//! and consistency concern lives behind the [`service::AclService`] trait.

pub mod cache;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod optimizer;
pub mod service;

#[cfg(test)]
pub(crate) mod mocks;

// Re-export commonly used types at the crate root
pub use cache::{AclCacheConfig, CachingAclService};
pub use error::{AclError, AclResult};
pub use evaluator::AclPermissionEvaluator;
pub use model::{
    Authentication, DefaultPermissionFactory, ObjectIdentity, Permission, PermissionFactory,
    PermissionSpec, Sid,
};
pub use optimizer::AclPermissionCacheOptimizer;
pub use service::{Acl, AclService, SecuredObject};
