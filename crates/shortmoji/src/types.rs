//! # Common Types and Traits

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type SMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> SMHashMap<K, V> {
            SMHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> SMHashMap<K, V> {
            SMHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type SMHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type SMHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> SMHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> SMHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type SMHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type SMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> SMHashMap<K, V> {
            SMHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> SMHashMap<K, V> {
            SMHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type SMHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Compile-time check that a value is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: S) {}

/// Compile-time check that a value is `Sync`.
#[cfg(test)]
pub(crate) fn check_is_sync<S: Sync>(_: S) {}
