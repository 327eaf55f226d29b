use std::{
    borrow::Borrow,
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash},
    mem,
};

/// Bucket capacity used when none is given
const DEFAULT_CAPACITY: usize = 16;

/// An entry occupying a slot of the bucket array
#[derive(Debug, Clone)]
struct Entry<K, V> {
    /// The key in the key-value pair
    key: K,
    /// The value associated with the key
    value: V,
    /// Tombstone flag for logical deletion
    deleted: bool,
}

/// A hash table using open addressing with quadratic probing.
///
/// Collisions are resolved within a single bucket array by walking the probe
/// sequence `(hash + i²) mod capacity` for `i = 0, 1, 2, ...`. Removal marks
/// the slot with a tombstone instead of emptying it, which keeps the probe
/// sequence intact for other keys that collided past the removed one.
/// Whenever the load factor reaches 0.5 before an insert, the table doubles
/// its capacity and rehashes every live entry.
///
/// The probe polynomial does not guarantee full-table coverage for arbitrary
/// capacities, so every probe walk is capped at `capacity` iterations and a
/// walk that exhausts the cap reports the key as absent (or abandons the
/// insert). The load factor discipline keeps walks far from the cap.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct OpenHashMap<K, V, S = RandomState> {
    /// The buckets storing the key-value entries
    buckets: Vec<Option<Entry<K, V>>>,
    /// Number of live (non-tombstone) entries in the table
    size: usize,
    /// Hasher factory injected at construction
    build_hasher: S,
}

impl<K, V> Default for OpenHashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Extend<(K, V)> for OpenHashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V> OpenHashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a new `OpenHashMap` with the default initial capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new `OpenHashMap` with the specified initial capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> OpenHashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Creates a new `OpenHashMap` with the given capacity and hasher
    /// factory. The capacity is clamped to at least 1.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        let capacity = capacity.max(1);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);

        Self { buckets, size: 0, build_hasher }
    }

    /// Computes the hash for a key
    fn hash_of<Q: ?Sized + Hash>(&self, key: &Q) -> u64 {
        self.build_hasher.hash_one(key)
    }

    /// Returns the slot index probed at iteration `i` for a key with the
    /// given hash: `(hash + i²) mod capacity`
    #[allow(clippy::cast_possible_truncation)]
    fn probe_index(&self, hash: u64, i: usize) -> usize {
        let i = i as u64;
        let spread = hash.wrapping_add(i.wrapping_mul(i));
        (spread % (self.buckets.len() as u64)) as usize
    }

    /// Inserts a key-value pair into the table.
    ///
    /// If a live entry already holds the key, its value is replaced and the
    /// old value returned. A tombstoned slot found on the probe walk is
    /// claimed for the new entry. If the walk visits `capacity` slots
    /// without resolving, the insert is abandoned and `None` returned.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.table_load() >= 0.5 {
            self.resize_table(self.capacity().saturating_mul(2));
        }

        let hash = self.hash_of(&key);
        let entry = Entry { key, value, deleted: false };

        for i in 0..self.buckets.len() {
            let index = self.probe_index(hash, i);

            // Only a live entry under a different key keeps the walk going;
            // an empty slot, a tombstone, or a live key match all resolve
            // the insert at this slot.
            let live_match = match self.buckets.get(index) {
                Some(Some(occupant)) if !occupant.deleted => {
                    if occupant.key == entry.key {
                        true
                    } else {
                        continue;
                    }
                }
                _ => false,
            };

            let Some(slot) = self.buckets.get_mut(index) else {
                return None;
            };
            if live_match {
                return slot.replace(entry).map(|old| old.value);
            }
            // A claimed tombstone was not counted in the size, so the size
            // grows here exactly as it does for a truly empty slot.
            *slot = Some(entry);
            self.size = self.size.saturating_add(1);
            return None;
        }

        None
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// The probe walk stops on the first empty slot, on a tombstone carrying
    /// the key, or after `capacity` probes, all of which report the key as
    /// absent.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);

        for i in 0..self.buckets.len() {
            let index = self.probe_index(hash, i);
            match self.buckets.get(index) {
                None | Some(None) => return None,
                Some(Some(entry)) if entry.key.borrow() == key => {
                    if entry.deleted {
                        return None;
                    }
                    return Some(&entry.value);
                }
                Some(Some(_)) => {}
            }
        }

        None
    }

    /// Returns true if the table holds a live entry for `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry stored under `key` and returns its value.
    ///
    /// The entry is tombstoned in place rather than emptied, so the probe
    /// sequences of other keys that collided past this slot stay intact.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_of(key);

        for i in 0..self.buckets.len() {
            let index = self.probe_index(hash, i);
            match self.buckets.get_mut(index) {
                None | Some(None) => return None,
                Some(Some(entry)) if entry.key.borrow() == key => {
                    if entry.deleted {
                        return None;
                    }
                    entry.deleted = true;
                    self.size = self.size.saturating_sub(1);
                    return Some(entry.value.clone());
                }
                Some(Some(_)) => {}
            }
        }

        None
    }

    /// Rebuilds the table at `new_capacity`, rehashing every live entry
    /// through the ordinary insert path and discarding tombstones.
    ///
    /// Does nothing if `new_capacity` is below 1 or below the current
    /// number of live entries. A reinsert may itself trigger doubling when
    /// the target capacity leaves the load factor at or above 0.5.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 || new_capacity < self.size {
            return;
        }

        let old_buckets = mem::take(&mut self.buckets);
        self.buckets.resize_with(new_capacity, || None);
        self.size = 0;

        for entry in old_buckets.into_iter().flatten() {
            if !entry.deleted {
                self.put(entry.key, entry.value);
            }
        }
    }

    /// Returns the current load factor, live entries over capacity
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn table_load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the capacity available for new distinct keys, defined as
    /// `capacity - size`. Tombstoned slots occupy storage but count as
    /// available here, consistent with the size excluding them.
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.len().saturating_sub(self.size)
    }

    /// Returns the number of live entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Empties every slot, keeping the capacity
    pub fn clear(&mut self) {
        for slot in &mut self.buckets {
            *slot = None;
        }
        self.size = 0;
    }

    /// Returns all live keys in bucket-index order
    #[must_use]
    pub fn get_keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Returns an iterator over the live key-value pairs in bucket-index
    /// order
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: &self.buckets, index: 0 }
    }
}

/// Iterator over the live key-value pairs of an `OpenHashMap`
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The bucket slice being walked
    buckets: &'a [Option<Entry<K, V>>],
    /// Current position in the walk
    index: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.buckets.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Some(entry) = slot {
                if !entry.deleted {
                    return Some((&entry.key, &entry.value));
                }
            }
        }
        None
    }
}
