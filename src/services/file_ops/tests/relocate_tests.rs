use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_moves_matching_files_recursively() {
    let root = TempDir::new().unwrap();
    let source = root.path().join("staging");
    let dest = root.path().join("anims");
    fs::create_dir_all(source.join("pack/deep")).unwrap();
    fs::write(source.join("pack/top.ycd"), b"a").unwrap();
    fs::write(source.join("pack/deep/nested.ycd"), b"b").unwrap();
    fs::write(source.join("pack/readme.txt"), b"keep").unwrap();

    let moved = relocate_assets(&source, &dest, "ycd").unwrap();

    assert_eq!(moved, 2);
    assert!(dest.join("top.ycd").is_file());
    assert!(dest.join("nested.ycd").is_file());
    // Non-matching files stay where they are.
    assert!(source.join("pack/readme.txt").is_file());
    assert!(!source.join("pack/top.ycd").exists());
}

#[test]
fn test_collision_appends_numeric_suffix() {
    let root = TempDir::new().unwrap();
    let source = root.path().join("staging");
    let dest = root.path().join("anims");
    fs::create_dir_all(source.join("one")).unwrap();
    fs::create_dir_all(source.join("two")).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("clip.ycd"), b"original").unwrap();
    fs::write(source.join("one/clip.ycd"), b"first").unwrap();
    fs::write(source.join("two/clip.ycd"), b"second").unwrap();

    let moved = relocate_assets(&source, &dest, "ycd").unwrap();

    assert_eq!(moved, 2);
    // The pre-existing destination file is never overwritten.
    assert_eq!(fs::read(dest.join("clip.ycd")).unwrap(), b"original");

    let mut suffixed: Vec<Vec<u8>> = vec![
        fs::read(dest.join("clip_1.ycd")).unwrap(),
        fs::read(dest.join("clip_2.ycd")).unwrap(),
    ];
    suffixed.sort();
    assert_eq!(suffixed, vec![b"first".to_vec(), b"second".to_vec()]);
}

#[test]
fn test_second_run_is_idempotent() {
    let root = TempDir::new().unwrap();
    let source = root.path().join("staging");
    let dest = root.path().join("anims");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("clip.ycd"), b"a").unwrap();

    assert_eq!(relocate_assets(&source, &dest, "ycd").unwrap(), 1);
    assert_eq!(relocate_assets(&source, &dest, "ycd").unwrap(), 0);
    assert_eq!(fs::read(dest.join("clip.ycd")).unwrap(), b"a");
}

#[test]
fn test_extension_match_is_case_insensitive() {
    let root = TempDir::new().unwrap();
    let source = root.path().join("staging");
    let dest = root.path().join("anims");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("SHOUTY.YCD"), b"x").unwrap();

    let moved = relocate_assets(&source, &dest, "ycd").unwrap();
    assert_eq!(moved, 1);
    assert!(dest.join("SHOUTY.YCD").is_file());
}

#[test]
fn test_empty_source_moves_nothing() {
    let root = TempDir::new().unwrap();
    let source = root.path().join("staging");
    let dest = root.path().join("anims");
    fs::create_dir_all(&source).unwrap();

    assert_eq!(relocate_assets(&source, &dest, "ycd").unwrap(), 0);
    assert!(dest.is_dir());
}
