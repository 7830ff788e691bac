use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use posty::api::PostApi;
use posty::commands::{PostUpdate, SearchQuery};
use posty::config::PostyConfig;
use posty::error::Result;
use posty::model::Post;
use posty::store::fs::FileStore;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PostApi<FileStore>,
    data_path: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let dir = store_dir(&cli);
    let mut ctx = init_context(dir.clone())?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Get { id }) => handle_get(&ctx, id),
        Some(Commands::Create { title, content }) => handle_create(&mut ctx, &title, &content),
        Some(Commands::Update { id, title, content }) => {
            handle_update(&mut ctx, id, title, content)
        }
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Search { title, content }) => handle_search(&ctx, title, content),
        Some(Commands::Config { key, value }) => handle_config(&dir, key, value),
        Some(Commands::Path) => handle_path(&ctx),
    }
}

fn store_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.dir {
        return dir.clone();
    }
    if let Ok(home) = std::env::var("POSTY_HOME") {
        return PathBuf::from(home);
    }
    match ProjectDirs::from("com", "posty", "posty") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from(".posty"),
    }
}

fn init_context(dir: PathBuf) -> Result<AppContext> {
    let config = PostyConfig::load(&dir).unwrap_or_default();

    let store = FileStore::new(dir).with_data_file(config.get_data_file());
    let data_path = store.data_path();
    let api = PostApi::new(store);

    Ok(AppContext { api, data_path })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let posts = ctx.api.list_posts()?;
    print_posts(&posts);
    Ok(())
}

fn handle_get(ctx: &AppContext, id: u64) -> Result<()> {
    let post = ctx.api.get_post(id)?;
    print_full_post(&post);
    Ok(())
}

fn handle_create(ctx: &mut AppContext, title: &str, content: &str) -> Result<()> {
    let post = ctx.api.create_post(title, content)?;
    println!(
        "{}",
        format!("Post created ({}): {}", post.id, post.title).green()
    );
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: u64,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let post = ctx.api.update_post(id, &PostUpdate::new(title, content))?;
    println!(
        "{}",
        format!("Post updated ({}): {}", post.id, post.title).green()
    );
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    ctx.api.delete_post(id)?;
    println!("{}", format!("Post deleted ({})", id).green());
    Ok(())
}

fn handle_search(ctx: &AppContext, title: Option<String>, content: Option<String>) -> Result<()> {
    let posts = ctx.api.search_posts(&SearchQuery::new(title, content))?;
    print_posts(&posts);
    Ok(())
}

fn handle_config(dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            let config = PostyConfig::load(dir)?;
            println!("data-file = {}", config.get_data_file());
        }
        (Some(key), None) => {
            let config = PostyConfig::load(dir)?;
            match config.get(&key) {
                Some(val) => println!("{}", val),
                None => println!("{}", format!("Unknown config key: {}", key).red()),
            }
        }
        (Some(key), Some(value)) => {
            let mut config = PostyConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                println!("{}", e.red());
                return Ok(());
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            println!("{}", format!("{} set to {}", key, display_val).green());
        }
    }
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.data_path.display());
    Ok(())
}

const LINE_WIDTH: usize = 100;

fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }

    for post in posts {
        let idx_str = format!("{}. ", post.id);

        let preview: String = post
            .content
            .chars()
            .take(60)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = format!("{} {}", post.title, preview);

        let available = LINE_WIDTH.saturating_sub(idx_str.width());
        println!("{}{}", idx_str, truncate_to_width(&line, available));
    }
}

fn print_full_post(post: &Post) {
    println!("{} {}", format!("#{}", post.id).yellow(), post.title.bold());
    println!("--------------------------------");
    println!("{}", post.content);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    // Reserve one column for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;

    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            out.push('…');
            break;
        }
        out.push(c);
        used += w;
    }

    out
}
