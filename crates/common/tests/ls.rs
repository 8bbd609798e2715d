//! Integration tests for directory listing

mod common;

use ::common::vfs::TreeFsError;

#[tokio::test]
async fn test_ls_counts_children() {
    let (fs, root, dir, _temp) = common::setup_test_env().await;

    std::fs::write(dir.join("a.org"), "one").unwrap();
    std::fs::write(dir.join("b.org"), "two").unwrap();
    std::fs::create_dir(dir.join("sub")).unwrap();

    let records = fs.list_directory(&root, "").await.unwrap();
    assert_eq!(records.len(), 3);

    // every record is exactly one of file or directory
    for record in &records {
        assert!(record.is_file() ^ record.is_dir(), "{}", record.name);
    }

    let mut names: Vec<_> = records.iter().map(|r| r.name.clone()).collect();
    names.sort();
    assert_eq!(names, ["a.org", "b.org", "sub"]);
}

#[tokio::test]
async fn test_ls_subdirectory() {
    let (fs, root, dir, _temp) = common::setup_test_env().await;

    std::fs::create_dir(dir.join("sub")).unwrap();
    std::fs::write(dir.join("sub").join("inner.org"), "x").unwrap();

    let records = fs.list_directory(&root, "sub").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "inner.org");
    assert_eq!(records[0].path, "sub/inner.org");
    assert!(records[0].is_file());
    assert_eq!(records[0].size, Some(1));
}

#[tokio::test]
async fn test_ls_on_file_is_not_a_directory() {
    let (fs, root, dir, _temp) = common::setup_test_env().await;

    std::fs::write(dir.join("plain.txt"), "text").unwrap();

    let result = fs.list_directory(&root, "plain.txt").await;
    assert!(matches!(result, Err(TreeFsError::NotADirectory(_))));
}

#[tokio::test]
async fn test_ls_missing_path_is_not_found() {
    let (fs, root, _dir, _temp) = common::setup_test_env().await;

    let result = fs.list_directory(&root, "nope").await;
    assert!(matches!(result, Err(TreeFsError::NotFound(_))));
}

#[tokio::test]
async fn test_ls_empty_root_is_empty() {
    let (fs, root, _dir, _temp) = common::setup_test_env().await;
    assert!(fs.list_directory(&root, "").await.unwrap().is_empty());
}
