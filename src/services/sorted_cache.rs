use std::collections::HashMap;
use std::sync::Arc;

use crate::models::SortBy;

/// Sorted color lists, keyed by sort kind and direction.
///
/// Ascending and descending results live in separate tables and are
/// never derived from each other.
#[derive(Debug, Default)]
pub struct SortedCache {
    ascending: HashMap<SortBy, Arc<[String]>>,
    descending: HashMap<SortBy, Arc<[String]>>,
}

impl SortedCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, ascending: bool) -> &HashMap<SortBy, Arc<[String]>> {
        if ascending {
            &self.ascending
        } else {
            &self.descending
        }
    }

    /// Retrieve a cached ordering
    pub fn get(&self, sort_by: SortBy, ascending: bool) -> Option<Arc<[String]>> {
        self.table(ascending).get(&sort_by).cloned()
    }

    /// Store an ordering
    pub fn store(&mut self, sort_by: SortBy, ascending: bool, colors: Arc<[String]>) {
        let table = if ascending {
            &mut self.ascending
        } else {
            &mut self.descending
        };
        table.insert(sort_by, colors);
    }

    /// Drop both directions of one sort kind
    pub fn remove(&mut self, sort_by: SortBy) {
        self.ascending.remove(&sort_by);
        self.descending.remove(&sort_by);
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.ascending.clear();
        self.descending.clear();
    }

    pub fn contains(&self, sort_by: SortBy, ascending: bool) -> bool {
        self.table(ascending).contains_key(&sort_by)
    }

    /// Number of cached orderings across both directions
    pub fn len(&self) -> usize {
        self.ascending.len() + self.descending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
