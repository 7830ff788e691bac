use crate::error::{PostyError, Result};
use crate::model::Post;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: u64) -> Result<Post> {
    let posts = store.load_posts()?;
    posts
        .into_iter()
        .find(|p| p.id == id)
        .ok_or(PostyError::PostNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn returns_the_matching_post() {
        let store = InMemoryStore::new();
        let post = run(&store, 2).unwrap();
        assert_eq!(post.title, "Second post");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = InMemoryStore::new();
        let err = run(&store, 99).unwrap_err();
        assert!(matches!(err, PostyError::PostNotFound(99)));
    }
}
