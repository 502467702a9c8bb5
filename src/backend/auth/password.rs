/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Hashes are salted, so hashing the same
 * password twice yields two different strings; `verify_password` is the only
 * valid way to compare.
 */

use crate::backend::auth::AuthError;

/// Hash a plaintext password with the given bcrypt cost
pub fn hash_password(plain: &str, cost: u32) -> Result<String, AuthError> {
    Ok(bcrypt::hash(plain, cost)?)
}

/// Check a plaintext password against a stored bcrypt hash
///
/// A malformed stored hash never matches.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    match bcrypt::verify(plain, hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!("Password verification error: {:?}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("pw123", TEST_COST).unwrap();
        assert!(verify_password("pw123", &hash));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("pw123", TEST_COST).unwrap();
        assert!(!verify_password("pw124", &hash));
        assert!(!verify_password("", &hash));
        assert!(!verify_password("PW123", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("same-password", TEST_COST).unwrap();
        let second = hash_password("same-password", TEST_COST).unwrap();
        assert_ne!(first, second);
        assert!(verify_password("same-password", &first));
        assert!(verify_password("same-password", &second));
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = hash_password("hunter2hunter2", TEST_COST).unwrap();
        assert!(!hash.contains("hunter2hunter2"));
    }

    #[test]
    fn test_malformed_hash_does_not_match() {
        assert!(!verify_password("pw123", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        assert!(matches!(
            hash_password("pw123", 2),
            Err(AuthError::Hashing(_))
        ));
    }
}
