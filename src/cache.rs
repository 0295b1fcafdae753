//! Memoization of expensive lookups.
//!
//! A [`LookupCache`] remembers results per key in insertion order, so the
//! cache contents can be written out directly as the step's output file and
//! loaded again to seed the next run.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::coordinate::{Coordinate, RouteKey};
use crate::polyline::Polyline;

#[derive(Debug, Clone)]
pub struct LookupCache<K, V> {
    entries: IndexMap<K, V>,
    hits: usize,
    misses: usize,
}

pub type GeocodeCache = LookupCache<String, Coordinate>;
pub type RouteCache = LookupCache<RouteKey, Polyline>;

impl<K: Hash + Eq, V> Default for LookupCache<K, V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: Hash + Eq, V> LookupCache<K, V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the cache with results from an earlier run.
    pub fn seeded(entries: IndexMap<K, V>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Whether `key` already has a result.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the cached value for `key`, calling `fetch` only on a miss.
    ///
    /// Errors from `fetch` are returned as-is and nothing is cached.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: K,
        fetch: impl FnOnce(&K) -> Result<V, E>,
    ) -> Result<&V, E> {
        use indexmap::map::Entry;

        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                let value = fetch(entry.key())?;
                Ok(entry.insert(value))
            }
        }
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that called `fetch`, successful or not.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GeocodeCache {
    /// Seeds from a previously written `geocoded_locations.json`.
    pub fn from_geocoded(geocoded: IndexMap<String, Coordinate>) -> Self {
        Self::seeded(
            geocoded
                .into_iter()
                .map(|(name, coord)| (normalize_place_name(&name), coord))
                .collect(),
        )
    }
}

/// Cache key for a place name. Surrounding whitespace is not significant.
pub fn normalize_place_name(name: &str) -> String {
    name.trim().to_string()
}
