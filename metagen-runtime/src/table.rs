//! Index-chain keyed storage used by generated in-memory stores.

use std::collections::{BTreeMap, BTreeSet};

/// Property values keyed by their full index chain.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedTable<T> {
    values: BTreeMap<Vec<usize>, T>,
}

impl<T> Default for IndexedTable<T> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<T> IndexedTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, chain: &[usize]) -> Option<&T> {
        self.values.get(chain)
    }

    /// Store a value, replacing any previous one at the same chain.
    pub fn set(&mut self, chain: &[usize], value: T) {
        self.values.insert(chain.to_vec(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[usize], &T)> {
        self.values.iter().map(|(k, v)| (k.as_slice(), v))
    }
}

/// The set of index chains at which one accessor family has entries.
///
/// Counts are derived from the highest recorded index under a given chain
/// of ancestors, so recording index 2 alone makes the count 3.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    chains: BTreeSet<Vec<usize>>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry. Returns true if it was not already present.
    pub fn insert(&mut self, chain: &[usize]) -> bool {
        if self.chains.contains(chain) {
            return false;
        }
        self.chains.insert(chain.to_vec())
    }

    pub fn contains(&self, chain: &[usize]) -> bool {
        self.chains.contains(chain)
    }

    /// Number of entries directly under `ancestors`, or `None` if nothing
    /// has been recorded there.
    pub fn count(&self, ancestors: &[usize]) -> Option<usize> {
        let depth = ancestors.len() + 1;
        self.chains
            .range(ancestors.to_vec()..)
            .take_while(|chain| chain.starts_with(ancestors))
            .filter(|chain| chain.len() == depth)
            .map(|chain| chain[ancestors.len()] + 1)
            .max()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_table_set_replaces() {
        let mut table = IndexedTable::new();
        table.set(&[0, 1], "a".to_string());
        table.set(&[0, 1], "b".to_string());
        assert_eq!(table.get(&[0, 1]).map(String::as_str), Some("b"));
        assert_eq!(table.get(&[1, 0]), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_occupancy_count_under_ancestors() {
        let mut wells = Occupancy::new();
        assert!(wells.insert(&[0, 0]));
        assert!(wells.insert(&[0, 2]));
        assert!(!wells.insert(&[0, 2]));
        assert!(wells.insert(&[1, 0]));

        assert_eq!(wells.count(&[0]), Some(3));
        assert_eq!(wells.count(&[1]), Some(1));
        assert_eq!(wells.count(&[2]), None);
    }

    #[test]
    fn test_occupancy_root_level_count() {
        let mut plates = Occupancy::new();
        assert_eq!(plates.count(&[]), None);
        plates.insert(&[4]);
        assert_eq!(plates.count(&[]), Some(5));
        assert!(plates.contains(&[4]));
    }
}
