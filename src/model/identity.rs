//! Object identity naming securable domain object instances.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AclError, AclResult};

/// An object identity (e.g., "document:readme").
///
/// Names one securable domain object instance by type and primary key.
/// Immutable and value-equal, so it is usable directly as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectIdentity {
    /// The type portion (e.g., "document").
    pub object_type: String,
    /// The primary-key portion (e.g., "readme").
    pub object_id: String,
}

impl ObjectIdentity {
    /// Creates a new ObjectIdentity from type and id.
    pub fn new(object_type: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            object_id: object_id.into(),
        }
    }

    /// Parses an object identity from "type:id" format.
    pub fn parse(value: &str) -> AclResult<Self> {
        let parts: Vec<&str> = value.splitn(2, ':').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(AclError::InvalidObjectIdentity {
                value: value.to_string(),
            });
        }
        Ok(Self::new(parts[0], parts[1]))
    }
}

impl fmt::Display for ObjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.object_type, self.object_id)
    }
}
