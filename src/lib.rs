//! # probemap
//!
//! Hash maps built from first principles on top of a resizable array, with
//! two independent collision-resolution strategies:
//!
//! - [`OpenHashMap`]: open addressing with quadratic probing and
//!   tombstone-based deletion
//! - [`ChainedHashMap`]: separate chaining with singly linked bucket chains
//!
//! plus [`find_mode`], a derived utility that finds the most frequent
//! elements of a sequence using the chaining map as an occurrence counter.
//!
//! Both maps share the same surface: construct with an initial capacity
//! (and optionally a hasher factory), then `put`, `get`, `remove`,
//! `contains_key`, `clear`, `resize_table`, and inspect the table through
//! `table_load`, `empty_buckets`, `len`, `capacity`, and `get_keys`.
//!
//! ## Open addressing
//!
//! ```rust
//! use probemap::OpenHashMap;
//!
//! let mut map = OpenHashMap::with_capacity(20);
//! map.put("key1".to_string(), 10);
//! assert_eq!(map.get("key1"), Some(&10));
//! assert_eq!(map.len(), 1);
//!
//! // growing the table rehashes every live entry
//! map.resize_table(30);
//! assert_eq!(map.capacity(), 30);
//! assert_eq!(map.get("key1"), Some(&10));
//!
//! // removal tombstones the slot; the key reads as absent
//! map.remove("key1");
//! assert_eq!(map.get("key1"), None);
//! ```
//!
//! ## Separate chaining
//!
//! ```rust
//! use probemap::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::with_capacity(10);
//! map.put("key1".to_string(), 10);
//! map.put("key2".to_string(), 20);
//! map.put("key3".to_string(), 30);
//!
//! map.remove("key3");
//! assert!(!map.contains_key("key3"));
//! assert!(map.contains_key("key1"));
//! assert_eq!(map.len(), 2);
//! ```
//!
//! ## Mode finding
//!
//! ```rust
//! use probemap::find_mode;
//!
//! let values = ["apple", "apple", "grape", "melon", "melon", "peach"];
//! let (mut modes, count) = find_mode(&values);
//! modes.sort_unstable();
//!
//! assert_eq!(modes, ["apple", "melon"]);
//! assert_eq!(count, 2);
//! ```

/// Module implementing a hash map with separate chaining
mod chained_map;
/// Module implementing the singly linked list backing the bucket chains
mod linked_list;
/// Module implementing mode finding over a sequence
mod mode;
/// Module implementing a hash map with open addressing and quadratic probing
mod open_map;
/// Utility functions and traits for the hash maps
mod utils;

pub use chained_map::ChainedHashMap;
pub use mode::find_mode;
pub use open_map::OpenHashMap;
pub use utils::{HashMapExtensions, from_iter};
