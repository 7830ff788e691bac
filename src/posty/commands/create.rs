use crate::error::{PostyError, Result};
use crate::model::Post;
use crate::store::DataStore;

use super::helpers::next_id;

pub fn run<S: DataStore>(store: &mut S, title: &str, content: &str) -> Result<Post> {
    let title = title.trim();
    let content = content.trim();

    if title.is_empty() || content.is_empty() {
        return Err(PostyError::InvalidInput(
            "Both title and content are required".to_string(),
        ));
    }

    let mut posts = store.load_posts()?;
    let post = Post::new(next_id(&posts), title.to_string(), content.to_string());
    posts.push(post.clone());
    store.save_posts(&posts)?;

    Ok(post)
}
