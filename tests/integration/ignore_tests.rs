use dupescan::duplicates::{DuplicateFinder, FinderConfig};
use dupescan::scanner::{IgnoreSet, WalkerConfig};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn finder_ignoring<P: AsRef<Path>>(dirs: &[P]) -> DuplicateFinder {
    let ignore: IgnoreSet = dirs.iter().collect();
    DuplicateFinder::new(FinderConfig::default().with_walker_config(WalkerConfig::new(ignore)))
}

#[test]
fn test_ignored_subtree_hides_its_copy() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("skip")).unwrap();
    fs::write(dir.path().join("skip/a.txt"), "identical").unwrap();
    fs::write(dir.path().join("b.txt"), "identical").unwrap();

    let finder = finder_ignoring(&[dir.path().join("skip")]);
    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 1);
}

#[test]
fn test_ignore_is_component_wise() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("b")).unwrap();
    fs::create_dir_all(dir.path().join("bc")).unwrap();
    fs::write(dir.path().join("b/1.txt"), "x").unwrap();
    fs::write(dir.path().join("bc/1.txt"), "x").unwrap();
    fs::write(dir.path().join("bc/2.txt"), "x").unwrap();

    let finder = finder_ignoring(&[dir.path().join("b")]);
    let (groups, _) = finder.find_duplicates(dir.path()).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[0].paths(),
        vec![dir.path().join("bc/1.txt"), dir.path().join("bc/2.txt")]
    );
}

#[test]
fn test_ignore_nested_directory_only() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("keep/drop")).unwrap();
    fs::write(dir.path().join("keep/1.txt"), "x").unwrap();
    fs::write(dir.path().join("keep/drop/2.txt"), "x").unwrap();
    fs::write(dir.path().join("3.txt"), "x").unwrap();

    let finder = finder_ignoring(&[dir.path().join("keep/drop")]);
    let (groups, _) = finder.find_duplicates(dir.path()).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[0].paths(),
        vec![dir.path().join("3.txt"), dir.path().join("keep/1.txt")]
    );
}

#[test]
fn test_ignore_spelled_with_dot_segments() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("skip")).unwrap();
    fs::write(dir.path().join("skip/a"), "x").unwrap();
    fs::write(dir.path().join("b"), "x").unwrap();

    let odd_spelling = dir.path().join("skip/../skip/./");
    let finder = finder_ignoring(&[odd_spelling]);
    let (groups, _) = finder.find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
}

#[test]
fn test_ignore_outside_root_has_no_effect() {
    let dir = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    fs::write(dir.path().join("a"), "x").unwrap();
    fs::write(dir.path().join("b"), "x").unwrap();

    let finder = finder_ignoring(&[elsewhere.path()]);
    let (groups, _) = finder.find_duplicates(dir.path()).unwrap();

    assert_eq!(groups.len(), 1);
}

#[test]
fn test_ignoring_root_finds_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), "x").unwrap();
    fs::write(dir.path().join("b"), "x").unwrap();

    let finder = finder_ignoring(&[dir.path()]);
    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 0);
}
