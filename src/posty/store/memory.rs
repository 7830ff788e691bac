use super::DataStore;
use crate::error::Result;
use crate::model::{seed_posts, Post};

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// A fresh store starts with the same seed collection a `FileStore` writes
/// on first load, so both backends look identical to the command layer.
pub struct InMemoryStore {
    posts: Vec<Post>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            posts: seed_posts(),
        }
    }

    /// Start from an explicit collection instead of the seed.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

impl DataStore for InMemoryStore {
    fn load_posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts.clone())
    }

    fn save_posts(&mut self, posts: &[Post]) -> Result<()> {
        self.posts = posts.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Collection with a gap in the id sequence, for allocation tests.
    pub fn gapped_posts() -> Vec<Post> {
        vec![
            Post::new(1, "One".to_string(), "Content one".to_string()),
            Post::new(2, "Two".to_string(), "Content two".to_string()),
            Post::new(5, "Five".to_string(), "Content five".to_string()),
        ]
    }

    /// Store preloaded with [`gapped_posts`].
    pub fn gapped_store() -> InMemoryStore {
        InMemoryStore::with_posts(gapped_posts())
    }
}
