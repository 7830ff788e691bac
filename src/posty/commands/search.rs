use crate::commands::SearchQuery;
use crate::error::Result;
use crate::model::Post;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, query: &SearchQuery) -> Result<Vec<Post>> {
    let title_q = query.title.as_deref().unwrap_or("").trim().to_lowercase();
    let content_q = query.content.as_deref().unwrap_or("").trim().to_lowercase();

    // No query means no results, not the whole collection
    if title_q.is_empty() && content_q.is_empty() {
        return Ok(Vec::new());
    }

    let mut results = store.load_posts()?;
    if !title_q.is_empty() {
        results.retain(|p| p.title.to_lowercase().contains(&title_q));
    }
    if !content_q.is_empty() {
        results.retain(|p| p.content.to_lowercase().contains(&content_q));
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn no_query_returns_nothing_even_when_posts_exist() {
        let store = InMemoryStore::new();
        assert!(run(&store, &SearchQuery::default()).unwrap().is_empty());

        let whitespace = SearchQuery::new(Some("   ".into()), Some("\t".into()));
        assert!(run(&store, &whitespace).unwrap().is_empty());
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let store = InMemoryStore::new();
        let query = SearchQuery::new(Some("POST".into()), None);

        let results = run(&store, &query).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn content_only_query_filters_on_content() {
        let store = InMemoryStore::new();
        let query = SearchQuery::new(None, Some("second".into()));

        let results = run(&store, &query).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 2);
    }

    #[test]
    fn both_queries_must_match_the_same_post() {
        let store = InMemoryStore::new();

        // "first" matches one title, "second" matches another post's content,
        // but no single post satisfies both
        let query = SearchQuery::new(Some("first".into()), Some("second".into()));
        assert!(run(&store, &query).unwrap().is_empty());

        let query = SearchQuery::new(Some("first".into()), Some("the first".into()));
        let results = run(&store, &query).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn results_keep_collection_order() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "Another post", "More words here.").unwrap();

        let query = SearchQuery::new(Some("post".into()), None);
        let ids: Vec<_> = run(&store, &query).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }
}
