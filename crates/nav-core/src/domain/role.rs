// ============================================================================
// Navigation Core - Role Model
// File: crates/nav-core/src/domain/role.rs
// Description: Closed role enumeration and flat-set access checks
// ============================================================================

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Role enumeration. Flat: no role implies another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    ServiceProvider,
    ReferralPartner,
    Client,
}

/// Set of roles allowed to see an item
pub type RoleSet = BTreeSet<Role>;

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::ServiceProvider,
        Role::ReferralPartner,
        Role::Client,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::ServiceProvider => "service_provider",
            Role::ReferralPartner => "referral_partner",
            Role::Client => "client",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "service_provider" => Some(Role::ServiceProvider),
            "referral_partner" => Some(Role::ReferralPartner),
            "client" => Some(Role::Client),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::ServiceProvider => "Service Provider",
            Role::ReferralPartner => "Referral Partner",
            Role::Client => "Client",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership check; `admin` gets nothing it is not explicitly listed for.
pub fn has_access(role: Role, allowed: &RoleSet) -> bool {
    allowed.contains(&role)
}

/// Same check for a role that may not have been recognized. Unknown denies.
pub fn has_access_opt(role: Option<Role>, allowed: &RoleSet) -> bool {
    role.is_some_and(|r| has_access(r, allowed))
}

/// Build a [`RoleSet`] from a slice
pub fn roles(list: &[Role]) -> RoleSet {
    list.iter().copied().collect()
}
