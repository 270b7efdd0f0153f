//! Security identities and the credential value they are derived from.

use serde::{Deserialize, Serialize};

/// A security identity (sid) that permissions can be granted to.
///
/// Either the authenticated principal itself or one of the authorities
/// granted to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sid {
    /// The principal's own identity (e.g., "alice").
    Principal(String),
    /// A granted authority (e.g., "ROLE_ADMIN").
    GrantedAuthority(String),
}

impl Sid {
    /// Creates a principal sid.
    pub fn principal(name: impl Into<String>) -> Self {
        Self::Principal(name.into())
    }

    /// Creates a granted-authority sid.
    pub fn granted_authority(authority: impl Into<String>) -> Self {
        Self::GrantedAuthority(authority.into())
    }
}

/// A plain credential value: the principal and its granted authorities.
///
/// Authentication itself (token validation, session handling) happens
/// outside this crate; the facades only ever read from this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    /// The authenticated principal name.
    pub principal: String,
    /// Granted authorities, in grant order.
    pub authorities: Vec<String>,
}

impl Authentication {
    /// Creates a new Authentication.
    pub fn new(
        principal: impl Into<String>,
        authorities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            principal: principal.into(),
            authorities: authorities.into_iter().map(Into::into).collect(),
        }
    }
}
