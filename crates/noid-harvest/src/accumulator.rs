use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Deduplicating collection keyed by an extraction function.
///
/// The first item inserted under a key is kept; later items with the same
/// key are dropped whatever their other fields hold.
pub struct Accumulator<T, K = String> {
    items: HashMap<K, T>,
    key: fn(&T) -> K,
}

impl<T, K: Eq + Hash> Accumulator<T, K> {
    pub fn new(key: fn(&T) -> K) -> Self {
        Self {
            items: HashMap::new(),
            key,
        }
    }

    /// Returns true if the item was new
    pub fn insert(&mut self, item: T) -> bool {
        match self.items.entry((self.key)(&item)) {
            Entry::Vacant(slot) => {
                slot.insert(item);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Insert all items, returning how many were new
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        let mut added = 0;
        for item in items {
            if self.insert(item) {
                added += 1;
            }
        }
        added
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        self.items.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in no particular order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }
}
