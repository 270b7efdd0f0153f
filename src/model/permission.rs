//! Permissions and the factory resolving them from names and masks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AclError, AclResult};

/// A bit-mask-backed capability checked against an ACL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    mask: u32,
}

impl Permission {
    pub const READ: Permission = Permission { mask: 1 << 0 };
    pub const WRITE: Permission = Permission { mask: 1 << 1 };
    pub const CREATE: Permission = Permission { mask: 1 << 2 };
    pub const DELETE: Permission = Permission { mask: 1 << 3 };
    pub const ADMINISTRATION: Permission = Permission { mask: 1 << 4 };

    /// Creates a permission from a raw mask.
    pub const fn from_mask(mask: u32) -> Self {
        Self { mask }
    }

    /// Returns the bit mask of this permission.
    pub const fn mask(&self) -> u32 {
        self.mask
    }
}

/// Evaluator input naming the permission(s) to check.
///
/// Accepts a raw mask, a permission name (optionally a comma-delimited
/// list of names), or already-resolved permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionSpec {
    /// A raw permission mask.
    Mask(u32),
    /// A permission name, or comma-delimited list of names (e.g., "READ,WRITE").
    Name(String),
    /// Already-resolved permissions, passed through unchanged.
    Permissions(Vec<Permission>),
}

impl From<u32> for PermissionSpec {
    fn from(mask: u32) -> Self {
        Self::Mask(mask)
    }
}

impl From<&str> for PermissionSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PermissionSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Permission> for PermissionSpec {
    fn from(permission: Permission) -> Self {
        Self::Permissions(vec![permission])
    }
}

impl From<Vec<Permission>> for PermissionSpec {
    fn from(permissions: Vec<Permission>) -> Self {
        Self::Permissions(permissions)
    }
}

/// Trait for resolving permissions from names and masks.
pub trait PermissionFactory: Send + Sync {
    /// Resolves a single permission name.
    ///
    /// Name matching must be locale-independent: implementations fold case
    /// with ASCII rules only, so lookup results never vary with the host
    /// locale's case conventions (e.g., dotless-i alphabets).
    fn permission_from_name(&self, name: &str) -> AclResult<Permission>;

    /// Resolves a permission from its registered mask.
    fn permission_from_mask(&self, mask: u32) -> AclResult<Permission>;
}

/// Registry-based permission factory.
///
/// Ships with the standard READ / WRITE / CREATE / DELETE / ADMINISTRATION
/// permissions registered; additional permissions can be registered per
/// deployment.
#[derive(Debug, Clone)]
pub struct DefaultPermissionFactory {
    by_name: HashMap<String, Permission>,
    by_mask: HashMap<u32, Permission>,
}

impl Default for DefaultPermissionFactory {
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register("READ", Permission::READ);
        factory.register("WRITE", Permission::WRITE);
        factory.register("CREATE", Permission::CREATE);
        factory.register("DELETE", Permission::DELETE);
        factory.register("ADMINISTRATION", Permission::ADMINISTRATION);
        factory
    }
}

impl DefaultPermissionFactory {
    /// Creates a factory with the standard permissions registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory with no registered permissions.
    pub fn empty() -> Self {
        Self {
            by_name: HashMap::new(),
            by_mask: HashMap::new(),
        }
    }

    /// Registers a permission under the given name.
    ///
    /// Names are stored ASCII-uppercased, so registration and lookup agree
    /// regardless of the case the caller used.
    pub fn register(&mut self, name: impl AsRef<str>, permission: Permission) {
        self.by_name
            .insert(name.as_ref().to_ascii_uppercase(), permission);
        self.by_mask.insert(permission.mask(), permission);
    }
}

impl PermissionFactory for DefaultPermissionFactory {
    fn permission_from_name(&self, name: &str) -> AclResult<Permission> {
        // ASCII folding only. to_uppercase() would apply Unicode mappings,
        // which reintroduces the locale-shaped lookups this must avoid.
        self.by_name
            .get(&name.to_ascii_uppercase())
            .copied()
            .ok_or_else(|| AclError::UnknownPermission {
                name: name.to_string(),
            })
    }

    fn permission_from_mask(&self, mask: u32) -> AclResult<Permission> {
        self.by_mask
            .get(&mask)
            .copied()
            .ok_or(AclError::UnknownPermissionMask { mask })
    }
}
