use crate::error::{PostyError, Result};
use crate::store::DataStore;

use super::helpers::find_post;

pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<()> {
    let mut posts = store.load_posts()?;
    let pos = find_post(&posts, id).ok_or(PostyError::PostNotFound(id))?;

    posts.remove(pos);
    store.save_posts(&posts)?;
    Ok(())
}
