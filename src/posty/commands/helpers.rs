use crate::model::Post;

/// Next id is max existing id + 1, or 1 for an empty collection.
///
/// This is NOT a running counter: deleting the current maximum makes its id
/// available to the next create. Observable contract, do not "fix" it.
pub fn next_id(posts: &[Post]) -> u64 {
    posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

/// Position of the post with the given id, if any.
pub fn find_post(posts: &[Post], id: u64) -> Option<usize> {
    posts.iter().position(|p| p.id == id)
}
