use crate::error::Result;
use crate::model::Post;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<Vec<Post>> {
    store.load_posts()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn returns_the_collection_in_insertion_order() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "Third post", "This is the third post.").unwrap();

        let posts = run(&store).unwrap();
        assert_eq!(posts.len(), 3);
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["First post", "Second post", "Third post"]);
    }
}
