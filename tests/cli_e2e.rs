use assert_cmd::Command;
use predicates::prelude::*;

fn posty(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("posty").unwrap();
    cmd.arg("--dir").arg(dir);
    cmd
}

#[test]
fn fresh_store_lists_the_seed_posts() {
    let temp_dir = tempfile::tempdir().unwrap();

    posty(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("First post"))
        .stdout(predicate::str::contains("Second post"));

    assert!(temp_dir.path().join("posts.json").exists());
}

#[test]
fn create_then_list_shows_the_new_post() {
    let temp_dir = tempfile::tempdir().unwrap();

    posty(temp_dir.path())
        .args(["create", "Release notes", "Everything shipped."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post created (3)"));

    posty(temp_dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Release notes"));
}

#[test]
fn update_replaces_only_supplied_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    posty(temp_dir.path())
        .args(["update", "1", "--title", "Renamed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post updated (1): Renamed"));

    posty(temp_dir.path())
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed"))
        .stdout(predicate::str::contains("This is the first post."));
}

#[test]
fn search_is_case_insensitive_and_anded() {
    let temp_dir = tempfile::tempdir().unwrap();

    posty(temp_dir.path())
        .args(["search", "--title", "POST"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First post"))
        .stdout(predicate::str::contains("Second post"));

    // No single seed post matches both conditions
    posty(temp_dir.path())
        .args(["search", "--title", "first", "--content", "second"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found."));
}

#[test]
fn delete_missing_post_fails_with_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();

    posty(temp_dir.path())
        .args(["delete", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post not found: 99"));

    posty(temp_dir.path())
        .args(["rm", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Post deleted (2)"));
}

#[test]
fn posty_home_env_selects_the_store_directory() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("posty").unwrap();
    cmd.env("POSTY_HOME", temp_dir.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("posts.json"));
}

#[test]
fn config_data_file_changes_where_posts_land() {
    let temp_dir = tempfile::tempdir().unwrap();

    posty(temp_dir.path())
        .args(["config", "data-file", "notes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file set to notes.json"));

    posty(temp_dir.path())
        .arg("list")
        .assert()
        .success();

    assert!(temp_dir.path().join("notes.json").exists());
    assert!(!temp_dir.path().join("posts.json").exists());
}

#[test]
fn empty_title_is_rejected_via_the_cli() {
    let temp_dir = tempfile::tempdir().unwrap();

    posty(temp_dir.path())
        .args(["create", "   ", "some content"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}
