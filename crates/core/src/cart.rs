//! Cart identity and quantity rules.
//!
//! Cart rows are partitioned by a *cart key*. An authenticated caller always
//! shops under `user:{user_id}`; a guest shops under `guest:{token}` where the
//! token comes from the [`CART_SESSION_HEADER`] request header. There is no
//! shared fallback cart.

use crate::error::CoreError;

/// Request header carrying a guest's client-generated cart token.
pub const CART_SESSION_HEADER: &str = "x-session-id";

pub const MIN_TOKEN_LEN: usize = 8;
pub const MAX_TOKEN_LEN: usize = 128;

pub const MIN_QUANTITY: i32 = 1;
pub const MAX_QUANTITY: i32 = 99;

/// Cart key for an authenticated user.
pub fn user_cart_key(user_id: &str) -> String {
    format!("user:{user_id}")
}

/// Cart key for a guest token, validating the token first.
pub fn guest_cart_key(token: &str) -> Result<String, CoreError> {
    validate_guest_token(token)?;
    Ok(format!("guest:{token}"))
}

/// A guest token is 8..=128 characters of `[A-Za-z0-9_-]`.
pub fn validate_guest_token(token: &str) -> Result<(), CoreError> {
    if token.len() < MIN_TOKEN_LEN || token.len() > MAX_TOKEN_LEN {
        return Err(CoreError::Validation(format!(
            "Cart session token must be between {MIN_TOKEN_LEN} and {MAX_TOKEN_LEN} characters"
        )));
    }
    if !token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(
            "Cart session token may only contain letters, digits, '-' and '_'".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_quantity(quantity: i32) -> Result<(), CoreError> {
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        return Err(CoreError::Validation(format!(
            "Invalid quantity. Must be between {MIN_QUANTITY} and {MAX_QUANTITY}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_keys_are_namespaced() {
        assert_eq!(user_cart_key("abc"), "user:abc");
        assert_eq!(guest_cart_key("k3x9q2m7a1").unwrap(), "guest:k3x9q2m7a1");
    }

    #[test]
    fn guest_token_length_bounds() {
        assert!(validate_guest_token("short").is_err());
        assert!(validate_guest_token("exactly8").is_ok());
        assert!(validate_guest_token(&"a".repeat(MAX_TOKEN_LEN)).is_ok());
        assert!(validate_guest_token(&"a".repeat(MAX_TOKEN_LEN + 1)).is_err());
    }

    #[test]
    fn guest_token_rejects_separators() {
        // A colon would let a guest forge a `user:` key.
        assert!(guest_cart_key("user:abcdefgh").is_err());
        assert!(validate_guest_token("abc def gh").is_err());
    }

    #[test]
    fn quantity_bounds() {
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(99).is_ok());
        assert!(validate_quantity(100).is_err());
        assert!(validate_quantity(-3).is_err());
    }
}
