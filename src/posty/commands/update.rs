use crate::commands::PostUpdate;
use crate::error::{PostyError, Result};
use crate::model::Post;
use crate::store::DataStore;

use super::helpers::find_post;

pub fn run<S: DataStore>(store: &mut S, id: u64, update: &PostUpdate) -> Result<Post> {
    let mut posts = store.load_posts()?;
    let pos = find_post(&posts, id).ok_or(PostyError::PostNotFound(id))?;

    // Validate every supplied field (title first) before touching the post,
    // so a failed update applies nothing and persists nothing.
    let title = match update.title.as_deref().map(str::trim) {
        Some("") => {
            return Err(PostyError::InvalidInput(
                "Title cannot be empty".to_string(),
            ))
        }
        other => other.map(str::to_string),
    };
    let content = match update.content.as_deref().map(str::trim) {
        Some("") => {
            return Err(PostyError::InvalidInput(
                "Content cannot be empty".to_string(),
            ))
        }
        other => other.map(str::to_string),
    };

    let post = &mut posts[pos];
    if let Some(title) = title {
        post.title = title;
    }
    if let Some(content) = content {
        post.content = content;
    }
    let updated = post.clone();

    store.save_posts(&posts)?;
    Ok(updated)
}
