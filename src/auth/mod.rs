//! Console role check.
//!
//! Enforcement is out of scope for this store: the check is a stub that
//! admits every role, kept so call sites in the UI layer have a single
//! place to gate management actions once real rules land.

use serde::{Deserialize, Serialize};

/// Console role of the signed-in user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Volunteer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Volunteer => "volunteer",
        }
    }
}

/// Whether `role` may manage console records. Currently a stub: every
/// role is admitted.
pub fn can_manage(_role: &Role) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_admits_every_role() {
        assert!(can_manage(&Role::Admin));
        assert!(can_manage(&Role::Staff));
        assert!(can_manage(&Role::Volunteer));
    }
}
