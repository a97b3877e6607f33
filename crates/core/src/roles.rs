//! Well-known role name constants.
//!
//! These must match the `chk_users_role` constraint in the users migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Every role value the `users.role` column accepts.
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

/// Returns `true` if `role` is one of [`VALID_ROLES`].
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        assert!(is_valid_role("user"));
        assert!(is_valid_role("admin"));
    }

    #[test]
    fn unknown_and_cased_roles_are_rejected() {
        assert!(!is_valid_role("Admin"));
        assert!(!is_valid_role("superuser"));
        assert!(!is_valid_role(""));
    }
}
