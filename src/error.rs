//! Error types for ACL operations.

use thiserror::Error;

/// Errors raised by ACL evaluation and the collaborating service contracts.
#[derive(Debug, Error)]
pub enum AclError {
    /// No ACL could be located for the given object identity.
    #[error("acl not found for object identity: {object_identity}")]
    AclNotFound { object_identity: String },

    /// Permission name not registered with the permission factory.
    #[error("unknown permission: {name}")]
    UnknownPermission { name: String },

    /// Permission mask not registered with the permission factory.
    #[error("unknown permission mask: {mask}")]
    UnknownPermissionMask { mask: u32 },

    /// Malformed object identity input.
    #[error("invalid object identity: {value}")]
    InvalidObjectIdentity { value: String },

    /// Failure inside an `AclService` implementation.
    #[error("acl service error: {message}")]
    Service { message: String },
}

/// Result type for ACL operations.
pub type AclResult<T> = Result<T, AclError>;
