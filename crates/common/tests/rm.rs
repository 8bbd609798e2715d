//! Integration tests for file deletion

mod common;

use ::common::vfs::TreeFsError;

#[tokio::test]
async fn test_rm_then_read_is_not_found() {
    let (fs, root, _dir, _temp) = common::setup_test_env().await;

    fs.create_file(&root, "", "gone.org", "soon").await.unwrap();
    fs.delete_file(&root, "gone.org").await.unwrap();

    let result = fs.read_file(&root, "gone.org").await;
    assert!(matches!(result, Err(TreeFsError::NotFound(_))));
}

#[tokio::test]
async fn test_rm_shrinks_listing() {
    let (fs, root, _dir, _temp) = common::setup_test_env().await;

    fs.create_file(&root, "", "a.org", "1").await.unwrap();
    fs.create_file(&root, "", "b.org", "2").await.unwrap();
    assert_eq!(fs.list_directory(&root, "").await.unwrap().len(), 2);

    fs.delete_file(&root, "a.org").await.unwrap();

    let records = fs.list_directory(&root, "").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "b.org");
}

#[tokio::test]
async fn test_rm_missing_file_is_not_found() {
    let (fs, root, _dir, _temp) = common::setup_test_env().await;

    let result = fs.delete_file(&root, "never-there.org").await;
    assert!(matches!(result, Err(TreeFsError::NotFound(_))));
}
