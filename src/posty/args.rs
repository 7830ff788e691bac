use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for dev
/// builds. Format: "0.3.2" or "0.3.2@abc1234 2026-01-15 14:30".
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "posty", version = get_version())]
#[command(about = "File-backed blog post store for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Store directory (defaults to the user data dir, or $POSTY_HOME)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all posts
    #[command(alias = "ls")]
    List,

    /// Show a single post
    Get {
        /// Id of the post
        id: u64,
    },

    /// Create a new post
    #[command(alias = "new")]
    Create {
        /// Title of the post
        title: String,

        /// Content of the post
        content: String,
    },

    /// Update a post's title and/or content
    Update {
        /// Id of the post
        id: u64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a post
    #[command(alias = "rm")]
    Delete {
        /// Id of the post
        id: u64,
    },

    /// Search posts by substring (title and content conditions must both hold)
    Search {
        /// Substring to look for in titles
        #[arg(short, long)]
        title: Option<String>,

        /// Substring to look for in contents
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the data file
    Path,
}
