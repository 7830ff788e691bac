pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;

/// Partial update: fields left as `None` are not touched.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self { title, content }
    }
}

/// Substring query over title and/or content. When both are given a post
/// must match both; when neither is given the search returns nothing.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl SearchQuery {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self { title, content }
    }
}
