//! Value types shared by the ACL facades and collaborator contracts.

mod identity;
mod permission;
mod sid;

pub use identity::ObjectIdentity;
pub use permission::{DefaultPermissionFactory, Permission, PermissionFactory, PermissionSpec};
pub use sid::{Authentication, Sid};
