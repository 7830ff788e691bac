//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all posty operations, regardless of the UI
//! being used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<Post>`, `Result<Vec<Post>>`)
//!
//! It explicitly avoids business logic (that belongs in `commands/*.rs`)
//! and any presentation concerns.
//!
//! ## Generic Over DataStore
//!
//! `PostApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PostApi<FileStore>`
//! - Testing: `PostApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::commands::{PostUpdate, SearchQuery};
use crate::error::Result;
use crate::model::Post;
use crate::store::DataStore;

/// The main API facade for posty operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct PostApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> PostApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The full collection, in insertion order.
    pub fn list_posts(&self) -> Result<Vec<Post>> {
        commands::list::run(&self.store)
    }

    pub fn get_post(&self, id: u64) -> Result<Post> {
        commands::get::run(&self.store, id)
    }

    pub fn create_post(&mut self, title: &str, content: &str) -> Result<Post> {
        commands::create::run(&mut self.store, title, content)
    }

    pub fn update_post(&mut self, id: u64, update: &PostUpdate) -> Result<Post> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_post(&mut self, id: u64) -> Result<()> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn search_posts(&self, query: &SearchQuery) -> Result<Vec<Post>> {
        commands::search::run(&self.store, query)
    }
}
