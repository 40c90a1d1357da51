//! Role policy: a total privilege order and a single authorization
//! entry point.
//!
//! Roles are stored as strings in the `profiles` table; the values here
//! must match its CHECK constraint.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Global actor role, ordered by privilege rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl Role {
    /// Privilege rank: admin(3) > manager(2) > member(1).
    pub fn rank(self) -> u8 {
        match self {
            Role::Admin => 3,
            Role::Manager => 2,
            Role::Member => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Member => "member",
        }
    }

    /// Parse a stored role value. Returns `None` for anything outside the
    /// known set; the caller decides whether that is a policy error.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "member" => Some(Role::Member),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether `role` satisfies at least one of `required`.
///
/// Access is granted when the actor's rank is greater than or equal to
/// the rank of any required role, so `&[Role::Manager]` admits managers
/// and admins, and `&[Role::Member]` admits everyone. An empty
/// requirement list always allows.
pub fn authorize(role: Role, required: &[Role]) -> Result<(), CoreError> {
    if required.is_empty() {
        return Ok(());
    }
    if required.iter().any(|req| role.rank() >= req.rank()) {
        Ok(())
    } else {
        Err(CoreError::PermissionDenied(format!(
            "role {role} does not satisfy the required minimum",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_total_order() {
        assert!(Role::Admin.rank() > Role::Manager.rank());
        assert!(Role::Manager.rank() > Role::Member.rank());
    }

    #[test]
    fn test_authorize_rank_at_or_above_required() {
        for role in [Role::Admin, Role::Manager, Role::Member] {
            for required in [Role::Admin, Role::Manager, Role::Member] {
                let allowed = authorize(role, &[required]).is_ok();
                assert_eq!(
                    allowed,
                    role.rank() >= required.rank(),
                    "{role} vs required {required}"
                );
            }
        }
    }

    #[test]
    fn test_authorize_empty_requirement_always_allows() {
        assert!(authorize(Role::Member, &[]).is_ok());
    }

    #[test]
    fn test_authorize_any_of_multiple_requirements() {
        // Manager fails [Admin] but passes [Admin, Member].
        assert!(authorize(Role::Manager, &[Role::Admin]).is_err());
        assert!(authorize(Role::Manager, &[Role::Admin, Role::Member]).is_ok());
    }

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("manager"), Some(Role::Manager));
        assert_eq!(Role::parse("member"), Some(Role::Member));
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
    }
}
