use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Default number of rendered messages kept by a [`RenderCache`].
pub const DEFAULT_CACHE_CAPACITY: usize = 200;

/// Bounded memo of sanitized HTML keyed by parser input and widget mode.
///
/// Eviction is by insertion order: once the entry count exceeds the
/// capacity the oldest inserted key goes, regardless of how recently it was
/// read. Re-inserting an existing key replaces its value in place.
#[derive(Debug)]
pub struct RenderCache {
    plain: HashMap<String, String>,
    with_widgets: HashMap<String, String>,
    order: VecDeque<(String, bool)>,
    capacity: usize,
}

impl RenderCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            plain: HashMap::new(),
            with_widgets: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    fn map(&self, widgets: bool) -> &HashMap<String, String> {
        if widgets {
            &self.with_widgets
        } else {
            &self.plain
        }
    }

    fn map_mut(&mut self, widgets: bool) -> &mut HashMap<String, String> {
        if widgets {
            &mut self.with_widgets
        } else {
            &mut self.plain
        }
    }

    pub fn get(&self, text: &str, widgets: bool) -> Option<&str> {
        self.map(widgets).get(text).map(String::as_str)
    }

    pub fn insert(&mut self, text: &str, widgets: bool, html: String) {
        if self.capacity == 0 {
            return;
        }
        if let Some(existing) = self.map_mut(widgets).get_mut(text) {
            *existing = html;
            return;
        }
        self.map_mut(widgets).insert(text.to_string(), html);
        self.order.push_back((text.to_string(), widgets));
        while self.len() > self.capacity {
            let Some((oldest, oldest_widgets)) = self.order.pop_front() else {
                break;
            };
            self.map_mut(oldest_widgets).remove(&oldest);
            debug!(capacity = self.capacity, "render cache evicted oldest entry");
        }
    }

    pub fn len(&self) -> usize {
        self.plain.len() + self.with_widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty() && self.with_widgets.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.plain.clear();
        self.with_widgets.clear();
        self.order.clear();
    }
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_mode_is_part_of_the_key() {
        let mut cache = RenderCache::new(4);
        cache.insert("text", false, "<p>plain</p>".into());
        assert_eq!(cache.get("text", false), Some("<p>plain</p>"));
        assert_eq!(cache.get("text", true), None);
    }

    #[test]
    fn eviction_spans_both_widget_modes() {
        let mut cache = RenderCache::new(2);
        cache.insert("a", true, "1".into());
        cache.insert("a", false, "2".into());
        cache.insert("b", false, "3".into());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a", true), None);
        assert_eq!(cache.get("a", false), Some("2"));
        assert_eq!(cache.get("b", false), Some("3"));
    }

    #[test]
    fn reinsert_replaces_value_without_growing() {
        let mut cache = RenderCache::new(2);
        cache.insert("a", false, "1".into());
        cache.insert("a", false, "2".into());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a", false), Some("2"));
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache = RenderCache::new(0);
        cache.insert("a", false, "1".into());
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let mut cache = RenderCache::new(2);
        cache.insert("a", false, "1".into());
        cache.insert("b", true, "2".into());
        cache.clear();
        assert!(cache.is_empty());
        cache.insert("c", false, "3".into());
        cache.insert("d", false, "4".into());
        cache.insert("e", false, "5".into());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("c", false), None);
    }
}
