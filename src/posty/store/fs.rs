use super::DataStore;
use crate::error::Result;
use crate::model::{seed_posts, Post};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_DATA_FILE: &str = "posts.json";

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        if name.contains('.') {
            self.data_file = name.to_string();
        } else {
            self.data_file = format!("{}.json", name);
        }
        self
    }

    /// Full path of the collection file.
    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    fn write_posts(&self, posts: &[Post]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(posts)?;
        fs::write(self.data_path(), content)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_posts(&self) -> Result<Vec<Post>> {
        let path = self.data_path();
        if !path.exists() {
            // First load against an empty store: write and return the seed
            let seed = seed_posts();
            self.write_posts(&seed)?;
            return Ok(seed);
        }

        let content = fs::read_to_string(&path)?;
        let posts: Vec<Post> = serde_json::from_str(&content)?;
        Ok(posts)
    }

    fn save_posts(&mut self, posts: &[Post]) -> Result<()> {
        self.write_posts(posts)
    }
}
