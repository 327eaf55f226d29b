//! Utility functions and traits shared by the map implementations

use crate::{ChainedHashMap, OpenHashMap};
use std::hash::{BuildHasher, Hash};

/// Extension trait for map implementations that provides additional utility
/// methods on top of the core table operations
pub trait HashMapExtensions<K, V> {
    /// Returns the values of the hash map as a Vec, in bucket-index order
    fn values(&self) -> Vec<V>;

    /// Returns the key-value pairs of the hash map as a Vec, in
    /// bucket-index order
    fn entries(&self) -> Vec<(K, V)>;
}

impl<K, V, S> HashMapExtensions<K, V> for OpenHashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K, V, S> HashMapExtensions<K, V> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// Creates a `ChainedHashMap` from an iterator of key-value pairs
pub fn from_iter<K, V, I>(iter: I) -> ChainedHashMap<K, V>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = ChainedHashMap::new();

    for (key, value) in iter {
        map.put(key, value);
    }

    map
}
