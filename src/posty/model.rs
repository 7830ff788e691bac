use serde::{Deserialize, Serialize};

/// A stored post. Ids are positive, unique within a collection, and never
/// change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(id: u64, title: String, content: String) -> Self {
        Self { id, title, content }
    }
}

/// The collection a fresh store starts with. Both storage backends return
/// this on the first load against uninitialized backing storage.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(
            1,
            "First post".to_string(),
            "This is the first post.".to_string(),
        ),
        Post::new(
            2,
            "Second post".to_string(),
            "This is the second post.".to_string(),
        ),
    ]
}
