use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_feed_args_default_to_no_offset_preset() {
    let args = FeedArgs {
        preset: None,
        config: None,
    };
    let (name, feed) = args.load().unwrap();
    assert_eq!(name, "no-offset");
    assert_eq!(feed, Preset::NoOffset.feed());
}

#[test]
fn test_feed_args_load_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("feed.toml");
    fs::write(
        &path,
        r#"
offset = 10

[[tabs]]
title = "All"
start = 0
end = 9

[[items]]
view_type = 1
height = 80
repeat = 5
"#,
    )
    .unwrap();

    let args = FeedArgs {
        preset: None,
        config: Some(path),
    };
    let (name, feed) = args.load().unwrap();
    assert!(name.ends_with("feed.toml"));
    assert_eq!(feed.offset, 10);
    assert_eq!(feed.items().len(), 5);
}

#[test]
fn test_feed_args_report_path_on_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("feed.ini");
    fs::write(&path, "").unwrap();

    let args = FeedArgs {
        preset: None,
        config: Some(path),
    };
    let err = args.load().unwrap_err();
    assert!(err.contains("feed.ini"));
    assert!(err.contains("Unsupported config format"));
}
