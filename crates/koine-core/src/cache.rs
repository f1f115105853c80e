//! Fixed-capacity least-recently-used cache for chapter content and search
//! results.

use heapless::{String, Vec};
use log::debug;

pub const VERSION_CODE_BYTES: usize = 16;

/// Cache key for one chapter of one Bible version.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerseKey {
    pub version: String<VERSION_CODE_BYTES>,
    pub book_number: u16,
    pub chapter: u16,
}

impl VerseKey {
    /// Returns `None` when `version` exceeds [`VERSION_CODE_BYTES`].
    pub fn new(version: &str, book_number: u16, chapter: u16) -> Option<Self> {
        let mut code = String::new();
        code.push_str(version).ok()?;
        Some(Self {
            version: code,
            book_number,
            chapter,
        })
    }
}

/// Least-recently-used map with at most `N` entries. Entries are kept in
/// recency order, least recent first.
#[derive(Clone, Debug)]
pub struct LruCache<K, V, const N: usize> {
    entries: Vec<(K, V), N>,
}

impl<K, V, const N: usize> Default for LruCache<K, V, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, const N: usize> LruCache<K, V, N> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry, e.g. on memory pressure.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!("verse-cache: evict all entries={}", self.entries.len());
        }
        self.entries.clear();
    }
}

impl<K: Eq, V, const N: usize> LruCache<K, V, N> {
    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Looks up `key` without touching its recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.position(key).map(|pos| &self.entries[pos].1)
    }

    /// Looks up `key` and marks it most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let pos = self.position(key)?;
        let last = self.entries.len() - 1;
        if pos != last {
            // rotate the hit to the back, keeping the order of the rest
            self.entries[pos..].rotate_left(1);
        }
        self.entries.last().map(|(_, value)| value)
    }

    /// Inserts or replaces `key`, making it most recently used. Returns the
    /// displaced entry: the previous value for `key`, or the least recently
    /// used entry when the cache was full.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        let displaced = match self.position(&key) {
            Some(pos) => Some(self.entries.remove(pos)),
            None if self.entries.is_full() && !self.entries.is_empty() => {
                debug!("verse-cache: full capacity={} evicting least recent", N);
                Some(self.entries.remove(0))
            }
            None => None,
        };

        // Only rejected when N == 0.
        if let Err(rejected) = self.entries.push((key, value)) {
            return Some(rejected);
        }
        displaced
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let pos = self.position(key)?;
        Some(self.entries.remove(pos).1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_least_recently_used() {
        let mut cache: LruCache<u8, &str, 2> = LruCache::new();
        assert_eq!(cache.insert(1, "uno"), None);
        assert_eq!(cache.insert(2, "dos"), None);

        // Touch 1 so 2 becomes the eviction candidate.
        assert_eq!(cache.get(&1), Some(&"uno"));
        assert_eq!(cache.insert(3, "tres"), Some((2, "dos")));

        assert!(cache.contains(&1));
        assert!(!cache.contains(&2));
        assert!(cache.contains(&3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn peek_does_not_promote() {
        let mut cache: LruCache<u8, u8, 2> = LruCache::new();
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert_eq!(cache.peek(&1), Some(&10));
        assert_eq!(cache.insert(3, 30), Some((1, 10)));
    }

    #[test]
    fn replacing_returns_previous_value() {
        let mut cache: LruCache<u8, u8, 2> = LruCache::new();
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert_eq!(cache.insert(1, 11), Some((1, 10)));
        assert_eq!(cache.len(), 2);
        // 1 is now most recent.
        assert_eq!(cache.insert(3, 30), Some((2, 20)));
        assert_eq!(cache.peek(&1), Some(&11));
    }

    #[test]
    fn remove_and_clear() {
        let mut cache: LruCache<u8, u8, 4> = LruCache::new();
        cache.insert(1, 10);
        cache.insert(2, 20);
        assert_eq!(cache.remove(&1), Some(10));
        assert_eq!(cache.remove(&1), None);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 4);
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut cache: LruCache<u8, u8, 0> = LruCache::new();
        assert_eq!(cache.insert(1, 10), Some((1, 10)));
        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn verse_keys_distinguish_versions() {
        let mut cache: LruCache<VerseKey, u16, 4> = LruCache::new();
        let rvr = VerseKey::new("RVR1960", 43, 3).unwrap();
        let nvi = VerseKey::new("NVI", 43, 3).unwrap();
        cache.insert(rvr.clone(), 36);
        assert_eq!(cache.get(&rvr), Some(&36));
        assert_eq!(cache.get(&nvi), None);

        assert!(VerseKey::new("A-VERSION-CODE-TOO-LONG", 1, 1).is_none());
    }
}
