use sha2::{Digest, Sha256};

use crate::builtins::USER_NAME_HASH_LENGTH;

/// Hash a human-readable username into the fixed-length value bound to accounts
pub fn hash_username(name: &str) -> [u8; USER_NAME_HASH_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.finalize().into()
}

/// Hex form of [`hash_username`]
pub fn hash_username_hex(name: &str) -> String {
    hex::encode(hash_username(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_username() {
        // SHA-256("abc")
        assert_eq!(
            hash_username_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(hash_username("alice.compass").len(), USER_NAME_HASH_LENGTH);
        assert_ne!(hash_username("alice"), hash_username("bob"));
    }
}
