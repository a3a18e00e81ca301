use std::collections::HashSet;

use crate::error::StoreError;
use crate::model::Post;

/// Ordered, read-only collection of posts. Insertion order is display order.
#[derive(Clone, Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> Result<PostStore, StoreError> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.id()) {
                return Err(StoreError::DuplicateId(post.id()));
            }
        }
        Ok(PostStore { posts })
    }

    /// The posts served at startup.
    pub fn seeded() -> Result<PostStore, StoreError> {
        let author = "Akshay Satasiya";
        PostStore::new(vec![
            Post::new(1,
                      author,
                      "FastAPI is Awesome",
                      "This framework is really eassy to use and super fast.",
                      "Jan 13, 2026"),
            Post::new(2, author, "LLMs", "Large Language Models!", "Jan 14, 2026"),
        ])
    }

    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn first(&self) -> Result<&Post, StoreError> {
        self.posts.first().ok_or(StoreError::EmptyStore)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seed_set_is_in_display_order() {
        let store = PostStore::seeded().unwrap();
        let titles: Vec<&str> = store.all().iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["FastAPI is Awesome", "LLMs"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn reads_are_stable_and_do_not_mutate() {
        let store = PostStore::seeded().unwrap();
        let before = store.all().to_vec();
        for _ in 0..5 {
            let _ = store.first();
            let _ = store.all();
        }
        assert_eq!(store.all(), &before[..]);
        assert_eq!(store.all(), store.all());
    }

    #[test]
    fn ids_are_unique() {
        let store = PostStore::seeded().unwrap();
        let ids: HashSet<u32> = store.all().iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let posts = vec![Post::new(1, "a", "one", "", "today"),
                         Post::new(2, "a", "two", "", "today"),
                         Post::new(1, "b", "again", "", "today")];
        assert_eq!(PostStore::new(posts).unwrap_err(), StoreError::DuplicateId(1));
    }

    #[test]
    fn json_round_trip_keeps_every_field() {
        let store = PostStore::seeded().unwrap();
        let payload = serde_json::to_string(store.all()).unwrap();
        let decoded: Vec<Post> = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, store.all());
    }

    #[test]
    fn seed_set_passes_construction_checks() {
        let store = PostStore::seeded().expect("seed ids are unique");
        assert!(!store.is_empty());
    }

    #[test]
    fn first_returns_head_of_sequence() {
        let store = PostStore::seeded().unwrap();
        assert_eq!(store.first().unwrap().id(), 1);
    }

    #[test]
    fn first_on_empty_store_is_an_error() {
        let store = PostStore::new(vec![]).unwrap();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
        assert_eq!(store.first(), Err(StoreError::EmptyStore));
    }
}
