// SPDX-License-Identifier: MPL-2.0
//! In-memory LRU cache of decoded images, keyed by URL.

use super::Fetched;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default capacity; generous for a dummy feed, bounded for a real one.
const DEFAULT_CAPACITY: usize = 256;

/// URL-keyed cache of decoded image handles.
#[derive(Debug)]
pub struct ImageCache {
    entries: LruCache<String, Fetched>,
}

impl ImageCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a cache holding at most `capacity` images (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Stores a decoded image, evicting the least recently inserted entry
    /// when full.
    pub fn insert(&mut self, url: String, fetched: Fetched) {
        self.entries.put(url, fetched);
    }

    /// Looks up a decoded image without disturbing recency order, so views
    /// can read the cache through a shared reference.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Fetched> {
        self.entries.peek(url)
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;
    use iced::Color;

    fn fetched() -> Fetched {
        Fetched {
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width: 1,
            height: 1,
            average: Color::BLACK,
        }
    }

    #[test]
    fn insert_then_get() {
        let mut cache = ImageCache::new();
        assert!(cache.get("a").is_none());

        cache.insert("a".to_string(), fetched());
        assert!(cache.get("a").is_some());
        assert!(cache.contains("a"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut cache = ImageCache::with_capacity(2);
        cache.insert("a".to_string(), fetched());
        cache.insert("b".to_string(), fetched());
        cache.insert("c".to_string(), fetched());

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains("a"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut cache = ImageCache::with_capacity(0);
        cache.insert("a".to_string(), fetched());
        assert!(cache.contains("a"));
    }
}
