/// Like flags live in browser storage with no expiry and no server
/// sync. The storage sits behind a small key-value seam so the page
/// logic can be exercised against an in-memory backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Every accessor degrades to a no-op when the
/// browser refuses storage access (private mode, disabled cookies).
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
}

/// Per-content-type like flag and counter, keyed
/// `{content_type}_like_{id}` / `{content_type}_count_{id}`.
pub struct LikeStore<S: KeyValueStore> {
    store: S,
    content_type: &'static str,
}

impl LikeStore<BrowserStore> {
    pub fn browser(content_type: &'static str) -> Self {
        LikeStore::new(BrowserStore, content_type)
    }
}

impl<S: KeyValueStore> LikeStore<S> {
    pub fn new(store: S, content_type: &'static str) -> Self {
        LikeStore {
            store,
            content_type,
        }
    }

    fn like_key(&self, id: &str) -> String {
        format!("{}_like_{}", self.content_type, id)
    }

    fn count_key(&self, id: &str) -> String {
        format!("{}_count_{}", self.content_type, id)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.store
            .get(&self.like_key(id))
            .map(|v| v == "true")
            .unwrap_or(false)
    }

    pub fn count(&self, id: &str) -> u32 {
        self.store
            .get(&self.count_key(id))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Flip the flag and adjust the counter, returning the new state.
    pub fn toggle(&self, id: &str) -> (bool, u32) {
        let liked = !self.is_liked(id);
        let count = if liked {
            self.count(id) + 1
        } else {
            self.count(id).saturating_sub(1)
        };
        self.store
            .set(&self.like_key(id), if liked { "true" } else { "false" });
        self.store.set(&self.count_key(id), &count.to_string());
        (liked, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.items.borrow_mut().remove(key);
        }
    }

    #[test]
    fn double_toggle_returns_to_the_original_state() {
        let likes = LikeStore::new(MemoryStore::default(), "blog");
        assert!(!likes.is_liked("99"));
        assert_eq!(likes.count("99"), 0);

        let (liked, count) = likes.toggle("99");
        assert!(liked);
        assert_eq!(count, 1);

        let (liked, count) = likes.toggle("99");
        assert!(!liked);
        assert_eq!(count, 0);

        // Raw stored values after the round trip
        assert_eq!(likes.store.get("blog_like_99").as_deref(), Some("false"));
        assert_eq!(likes.store.get("blog_count_99").as_deref(), Some("0"));
    }

    #[test]
    fn liked_flag_implies_a_positive_count() {
        let likes = LikeStore::new(MemoryStore::default(), "portfolio");
        likes.toggle("7");
        assert!(likes.is_liked("7"));
        assert!(likes.count("7") >= 1);
    }

    #[test]
    fn counter_never_goes_below_zero() {
        let likes = LikeStore::new(MemoryStore::default(), "blog");
        likes.store.set("blog_like_3", "true");
        // Counter was lost but the flag survived; untoggling must not underflow
        let (liked, count) = likes.toggle("3");
        assert!(!liked);
        assert_eq!(count, 0);
    }

    #[test]
    fn keys_are_scoped_per_content_type() {
        let blog = LikeStore::new(MemoryStore::default(), "blog");
        blog.toggle("1");
        assert!(blog.store.get("blog_like_1").is_some());
        assert!(blog.store.get("portfolio_like_1").is_none());
    }

    #[test]
    fn garbage_count_values_read_as_zero() {
        let likes = LikeStore::new(MemoryStore::default(), "blog");
        likes.store.set("blog_count_5", "banyak");
        assert_eq!(likes.count("5"), 0);
        likes.store.remove("blog_count_5");
        assert_eq!(likes.count("5"), 0);
    }
}
