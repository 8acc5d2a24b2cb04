//! Addresses allowed to call privileged built-in functions

use std::collections::HashSet;

use crate::account::Address;

/// Immutable set of authorized caller addresses.
///
/// Built by copying, so later changes to the source collection have no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationSet {
    addresses: HashSet<Address>,
}

impl AuthorizationSet {
    pub fn from_addresses<I, A>(addresses: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[u8]>,
    {
        Self {
            addresses: addresses.into_iter().map(|a| a.as_ref().to_vec()).collect(),
        }
    }

    pub fn contains(&self, address: &[u8]) -> bool {
        self.addresses.contains(address)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let set = AuthorizationSet::from_addresses([vec![1u8, 2], vec![3u8]]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&[1, 2]));
        assert!(set.contains(&[3]));
        assert!(!set.contains(&[1]));
        assert!(!set.contains(&[]));
    }

    #[test]
    fn test_copy_is_independent() {
        let mut source: HashSet<Address> = HashSet::new();
        source.insert(vec![9]);

        let set = AuthorizationSet::from_addresses(&source);
        source.clear();
        source.insert(vec![8]);

        assert!(set.contains(&[9]));
        assert!(!set.contains(&[8]));
    }
}
