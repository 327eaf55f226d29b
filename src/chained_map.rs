use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash},
    mem, slice,
};

use crate::linked_list::{self, LinkedList};

/// Bucket capacity used when none is given
const DEFAULT_CAPACITY: usize = 16;

/// A hash table using separate chaining.
///
/// Every bucket owns an independent singly linked chain of key-value nodes.
/// A colliding insert goes to the front of the target bucket's chain, and a
/// removal physically unlinks the node, so the table never needs tombstones.
/// Chains have no fixed slot limit; the table only grows when the caller
/// asks for it through [`resize_table`](Self::resize_table).
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<K, V, S = RandomState> {
    /// The bucket chains, one per slot
    buckets: Vec<LinkedList<K, V>>,
    /// Total number of nodes across all chains
    size: usize,
    /// Hasher factory injected at construction
    build_hasher: S,
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a new `ChainedHashMap` with the default initial capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new `ChainedHashMap` with the specified initial capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Creates a new `ChainedHashMap` with the given capacity and hasher
    /// factory. The capacity is clamped to at least 1.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        let capacity = capacity.max(1);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, LinkedList::new);

        Self { buckets, size: 0, build_hasher }
    }

    /// Returns the bucket index for a key: `hash mod capacity`
    #[allow(clippy::cast_possible_truncation)]
    fn bucket_index<Q: ?Sized + Hash>(&self, key: &Q) -> usize {
        (self.build_hasher.hash_one(key) % (self.buckets.len() as u64)) as usize
    }

    /// Inserts a key-value pair into the table.
    ///
    /// If the target bucket's chain already holds the key, the node's value
    /// is replaced and the old value returned; otherwise a new node is
    /// inserted at the front of the chain.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let chain = self.buckets.get_mut(index)?;

        if let Some(existing) = chain.find_mut(&key) {
            return Some(mem::replace(existing, value));
        }

        chain.push_front(key, value);
        self.size = self.size.saturating_add(1);
        None
    }

    /// Returns a reference to the value stored under `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets.get(self.bucket_index(key))?.find(key)
    }

    /// Returns true if the table holds an entry for `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets.get(self.bucket_index(key)).is_some_and(|chain| chain.contains(key))
    }

    /// Unlinks the node stored under `key` and returns its value
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let value = self.buckets.get_mut(index)?.remove(key)?;
        self.size = self.size.saturating_sub(1);
        Some(value)
    }

    /// Rebuilds the table at `new_capacity`, rehashing every entry through
    /// the ordinary insert path. Chains are consumed front-to-back in
    /// bucket order. Does nothing if `new_capacity` is below 1; unlike the
    /// open-addressing table there is no minimum-vs-size constraint, since
    /// chains have no fixed slot limit.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            return;
        }

        let old_buckets = mem::take(&mut self.buckets);
        self.buckets.resize_with(new_capacity, LinkedList::new);
        self.size = 0;

        for chain in old_buckets {
            for (key, value) in chain {
                self.put(key, value);
            }
        }
    }

    /// Returns the current load factor, entries over capacity
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the number of buckets whose chain is empty
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Discards every chain, keeping the capacity
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            *chain = LinkedList::new();
        }
        self.size = 0;
    }

    /// Returns all keys in bucket-index order, each chain front-to-back
    #[must_use]
    pub fn get_keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Returns an iterator over the key-value pairs in bucket-index order,
    /// each chain front-to-back
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut buckets = self.buckets.iter();
        let current = buckets.next().map(LinkedList::iter);
        Iter { buckets, current }
    }
}

impl<K, S> ChainedHashMap<K, usize, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Inserts `key` as an occurrence counter.
    ///
    /// A key already present has its count incremented by 1; an absent key
    /// starts a new node with a count of 1. Used by
    /// [`find_mode`](crate::find_mode) to build an occurrence-count map.
    pub fn put_mode(&mut self, key: K) {
        let index = self.bucket_index(&key);
        let Some(chain) = self.buckets.get_mut(index) else {
            return;
        };

        if let Some(count) = chain.find_mut(&key) {
            *count = count.saturating_add(1);
            return;
        }

        chain.push_front(key, 1);
        self.size = self.size.saturating_add(1);
    }
}

/// Iterator over the key-value pairs of a `ChainedHashMap`
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Chains not yet entered
    buckets: slice::Iter<'a, LinkedList<K, V>>,
    /// Walk through the chain currently being visited
    current: Option<linked_list::Iter<'a, K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.current.as_mut()?.next() {
                return Some(pair);
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::hash::{BuildHasherDefault, Hasher};

    /// Hasher mapping every key to 0, so all keys share one bucket
    #[derive(Debug, Default, Clone)]
    struct ZeroHasher;

    impl Hasher for ZeroHasher {
        fn finish(&self) -> u64 {
            0
        }

        fn write(&mut self, _bytes: &[u8]) {}
    }

    /// Map with fully colliding keys, for deterministic chain tests
    fn colliding_map(
        capacity: usize,
    ) -> ChainedHashMap<String, i32, BuildHasherDefault<ZeroHasher>> {
        ChainedHashMap::with_capacity_and_hasher(capacity, BuildHasherDefault::default())
    }

    #[test]
    fn test_put_get_and_remove() {
        // capacity=10, three keys, remove one, others unaffected
        let mut map = ChainedHashMap::with_capacity(10);
        map.put("key1".to_string(), 10);
        map.put("key2".to_string(), 20);
        map.put("key3".to_string(), 30);

        assert!(map.contains_key("key1"));
        assert!(map.contains_key("key2"));
        assert!(map.contains_key("key3"));
        assert_eq!(map.len(), 3);

        assert_eq!(map.remove("key3"), Some(30));
        assert!(!map.contains_key("key3"));
        assert_eq!(map.get("key1"), Some(&10));
        assert_eq!(map.get("key2"), Some(&20));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_size() {
        let mut map = ChainedHashMap::new();
        assert_eq!(map.put("key1".to_string(), 1), None);
        assert_eq!(map.put("key1".to_string(), 1), Some(1));
        assert_eq!(map.put("key1".to_string(), 10), Some(1));

        assert_eq!(map.get("key1"), Some(&10));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_collisions_chain_in_one_bucket() {
        let mut map = colliding_map(5);
        map.put("a".to_string(), 1);
        map.put("b".to_string(), 2);
        map.put("c".to_string(), 3);

        assert_eq!(map.len(), 3);
        assert_eq!(map.empty_buckets(), 4);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.get("c"), Some(&3));

        // unlink from the middle of the chain
        assert_eq!(map.remove("b"), Some(2));
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("c"), Some(&3));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_get_keys_walks_chains_front_to_back() {
        let mut map = colliding_map(5);
        map.put("a".to_string(), 1);
        map.put("b".to_string(), 2);
        map.put("c".to_string(), 3);

        // front insertion reverses the put order within the chain
        assert_eq!(map.get_keys(), ["c".to_string(), "b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_resize_preserves_entries() {
        let mut map = ChainedHashMap::with_capacity(10);
        for i in 0..20 {
            map.put(format!("key{i}"), i);
        }

        map.resize_table(50);
        assert_eq!(map.capacity(), 50);
        assert_eq!(map.len(), 20);
        for i in 0..20 {
            assert_eq!(map.get(&format!("key{i}")), Some(&i));
        }

        // shrinking below the entry count is legal for chaining
        map.resize_table(1);
        assert_eq!(map.capacity(), 1);
        assert_eq!(map.len(), 20);
        assert_eq!(map.empty_buckets(), 0);
        for i in 0..20 {
            assert_eq!(map.get(&format!("key{i}")), Some(&i));
        }
    }

    #[test]
    fn test_resize_rejects_zero_capacity() {
        let mut map = ChainedHashMap::with_capacity(10);
        map.put("key1".to_string(), 1);

        map.resize_table(0);
        assert_eq!(map.capacity(), 10);
        assert_eq!(map.get("key1"), Some(&1));
    }

    #[test]
    fn test_table_load_and_empty_buckets() {
        let mut map = ChainedHashMap::with_capacity(10);
        assert_eq!(map.empty_buckets(), 10);
        assert!((map.table_load() - 0.0).abs() < 1e-9);

        map.put("key1".to_string(), 1);
        map.put("key2".to_string(), 2);
        assert!((map.table_load() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut map = ChainedHashMap::with_capacity(10);
        map.put("key1".to_string(), 1);
        map.put("key2".to_string(), 2);

        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.capacity(), 10);
        assert_eq!(map.empty_buckets(), 10);
        assert_eq!(map.get("key1"), None);
    }

    #[test]
    fn test_put_mode_counts_occurrences() {
        let mut map: ChainedHashMap<String, usize> = ChainedHashMap::with_capacity(4);
        map.put_mode("apple".to_string());
        map.put_mode("apple".to_string());
        map.put_mode("grape".to_string());

        assert_eq!(map.get("apple"), Some(&2));
        assert_eq!(map.get("grape"), Some(&1));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_iter_visits_all_entries_once() {
        let mut map = ChainedHashMap::with_capacity(4);
        map.put("key1".to_string(), 1);
        map.put("key2".to_string(), 2);
        map.put("key3".to_string(), 3);

        let mut seen: Vec<i32> = map.iter().map(|(_, &v)| v).collect();
        seen.sort_unstable();
        assert_eq!(seen, [1, 2, 3]);
    }

    proptest! {
        #[test]
        fn random_ops_match_std(ops in proptest::collection::vec(
            (any::<u8>(), 0usize..40, any::<i32>()), 1..300,
        )) {
            let mut map = ChainedHashMap::with_capacity(8);
            let mut reference = std::collections::HashMap::new();

            for (op, key_num, value) in ops {
                let key = format!("{key_num}");
                match op % 3 {
                    0 => prop_assert_eq!(
                        map.put(key.clone(), value),
                        reference.insert(key, value)
                    ),
                    1 => prop_assert_eq!(map.get(&key), reference.get(&key)),
                    _ => prop_assert_eq!(map.remove(&key), reference.remove(&key)),
                }
            }

            prop_assert_eq!(map.len(), reference.len());
            for (key, value) in &reference {
                prop_assert_eq!(map.get(key), Some(value));
            }
        }
    }
}
