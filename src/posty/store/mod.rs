//! # Storage Layer
//!
//! This module defines the storage abstraction for posty. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! The trait is deliberately narrow: the whole collection goes in, the whole
//! collection comes out. There is no per-post I/O. Command logic owns every
//! read-modify-write cycle, so a backend only has to round-trip an ordered
//! sequence faithfully.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The collection lives in a single JSON file (`posts.json` by default)
//!   - Seeded with two starter posts on first load
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`, a pretty-printed JSON array in creation order:
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "title": "First post",
//!     "content": "This is the first post."
//!   }
//! ]
//! ```
//!
//! Non-ASCII text is written verbatim, not `\u`-escaped.

use crate::error::Result;
use crate::model::Post;

pub mod fs;
pub mod memory;

/// Abstract interface for post storage.
///
/// Implementations must reproduce a saved collection field-for-field on the
/// next load, order included, and must return the seed collection the first
/// time they are asked to load from uninitialized backing storage.
///
/// No locking happens at this level. Concurrent writers against the same
/// backing storage will overwrite each other; callers are expected to be the
/// single logical writer.
pub trait DataStore {
    /// Load the full ordered collection
    fn load_posts(&self) -> Result<Vec<Post>>;

    /// Persist the full ordered collection, replacing what was there
    fn save_posts(&mut self, posts: &[Post]) -> Result<()>;
}
