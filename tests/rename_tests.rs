//! ディレクトリ単位の拡張子一括変更の結合テスト

use chext::{change_extensions, RenameError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn setup(files: &[&str], dirs: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for dir in dirs {
        fs::create_dir(temp_dir.path().join(dir)).unwrap();
    }
    for file in files {
        fs::write(temp_dir.path().join(file), format!("content of {}", file)).unwrap();
    }
    temp_dir
}

fn sorted_names(paths: &[PathBuf]) -> Vec<String> {
    let mut names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_renames_only_matching_files() {
    let temp_dir = setup(&["a.txt", "b.txt", "c.png"], &["d"]);

    let report = change_extensions("txt", "log", temp_dir.path()).unwrap();

    assert!(report.is_clean());
    assert_eq!(sorted_names(report.renamed()), vec!["a.log", "b.log"]);
    assert_eq!(dir_listing(temp_dir.path()), vec!["a.log", "b.log", "c.png", "d"]);
    assert!(temp_dir.path().join("d").is_dir());

    // 内容は移動後も保持される
    let content = fs::read_to_string(temp_dir.path().join("a.log")).unwrap();
    assert_eq!(content, "content of a.txt");
}

#[test]
fn test_renamed_paths_are_inside_the_directory() {
    let temp_dir = setup(&["a.txt"], &[]);

    let report = change_extensions(".txt", ".log", temp_dir.path()).unwrap();

    assert_eq!(report.renamed(), &[temp_dir.path().join("a.log")]);
}

#[test]
fn test_bare_and_dotted_source_extension_match_the_same_files() {
    let files = ["one.txt", "two.txt", "three.md", "txt"];
    let bare = setup(&files, &["sub.txt"]);
    let dotted = setup(&files, &["sub.txt"]);

    let bare_report = change_extensions("txt", "log", bare.path()).unwrap();
    let dotted_report = change_extensions(".txt", "log", dotted.path()).unwrap();

    assert_eq!(
        sorted_names(bare_report.renamed()),
        sorted_names(dotted_report.renamed())
    );
    assert_eq!(bare_report.errors().len(), dotted_report.errors().len());
    assert_eq!(dir_listing(bare.path()), dir_listing(dotted.path()));
}

#[test]
fn test_directory_with_matching_name_is_untouched() {
    let temp_dir = setup(&[], &["x.txt"]);

    let report = change_extensions("txt", "log", temp_dir.path()).unwrap();

    assert!(report.renamed().is_empty());
    assert!(report.is_clean());
    assert!(temp_dir.path().join("x.txt").is_dir());
    assert!(!temp_dir.path().join("x.log").exists());
}

#[test]
fn test_missing_directory_reports_single_listing_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("non_existent_dir_for_test");

    let report = change_extensions("txt", "log", &missing).unwrap();

    assert!(report.renamed().is_empty());
    assert_eq!(report.errors().len(), 1);
    assert!(report.has_fatal_error());
    let message = report.errors()[0].to_string();
    assert!(message.contains(&format!("Error reading directory {}", missing.display())));
}

#[test]
fn test_file_path_instead_of_directory_is_listing_error() {
    let temp_dir = setup(&["plain.txt"], &[]);
    let file_path = temp_dir.path().join("plain.txt");

    let report = change_extensions("txt", "log", &file_path).unwrap();

    assert!(report.renamed().is_empty());
    assert_eq!(report.errors().len(), 1);
    assert!(matches!(report.errors()[0], RenameError::Listing { .. }));
    assert!(file_path.exists());
}

#[test]
fn test_directory_at_destination_fails_that_file_only() {
    let temp_dir = setup(&["file.txt", "other.txt"], &["file.log"]);

    let report = change_extensions("txt", "log", temp_dir.path()).unwrap();

    assert_eq!(report.errors().len(), 1);
    match &report.errors()[0] {
        RenameError::Rename { from, to, .. } => {
            assert_eq!(from, &temp_dir.path().join("file.txt"));
            assert_eq!(to, &temp_dir.path().join("file.log"));
        }
        other => panic!("Expected Rename error, got {:?}", other),
    }
    assert!(!report.has_fatal_error());
    assert!(report.errors()[0].to_string().starts_with("Failed to rename"));

    assert_eq!(sorted_names(report.renamed()), vec!["other.log"]);
    assert!(temp_dir.path().join("file.txt").exists());
    assert!(temp_dir.path().join("file.log").is_dir());
    assert!(temp_dir.path().join("other.log").exists());
}

#[test]
fn test_second_run_renames_nothing() {
    let temp_dir = setup(&["a.txt", "b.txt"], &[]);

    let first = change_extensions("txt", "log", temp_dir.path()).unwrap();
    assert_eq!(first.renamed_count(), 2);

    let second = change_extensions("txt", "log", temp_dir.path()).unwrap();
    assert!(second.renamed().is_empty());
    assert!(second.is_clean());
}

#[test]
fn test_mid_name_and_case_variants_do_not_match() {
    let temp_dir = setup(&["a.txt.bak", "txtfile", "UPPER.TXT", "mixed.Txt", "real.txt"], &[]);

    let report = change_extensions("txt", "log", temp_dir.path()).unwrap();

    assert_eq!(sorted_names(report.renamed()), vec!["real.log"]);
    assert_eq!(
        dir_listing(temp_dir.path()),
        vec!["UPPER.TXT", "a.txt.bak", "mixed.Txt", "real.log", "txtfile"]
    );
}

#[test]
fn test_only_trailing_occurrence_is_replaced() {
    let temp_dir = setup(&["archive.txt.txt"], &[]);

    let report = change_extensions("txt", "log", temp_dir.path()).unwrap();

    assert_eq!(sorted_names(report.renamed()), vec!["archive.txt.log"]);
}

#[test]
fn test_same_source_and_target_renames_in_place() {
    let temp_dir = setup(&["keep.txt"], &[]);

    let report = change_extensions("txt", ".txt", temp_dir.path()).unwrap();

    assert!(report.is_clean());
    assert_eq!(sorted_names(report.renamed()), vec!["keep.txt"]);
    assert!(temp_dir.path().join("keep.txt").exists());
}

#[test]
fn test_file_named_after_extension_loses_base_name() {
    let temp_dir = setup(&[".txt"], &[]);

    let report = change_extensions("txt", "log", temp_dir.path()).unwrap();

    assert_eq!(sorted_names(report.renamed()), vec![".log"]);
    assert!(temp_dir.path().join(".log").exists());
}

#[test]
fn test_multi_part_extension() {
    let temp_dir = setup(&["backup.tar.gz", "other.gz"], &[]);

    let report = change_extensions("tar.gz", "tgz", temp_dir.path()).unwrap();

    assert_eq!(sorted_names(report.renamed()), vec!["backup.tgz"]);
    assert!(temp_dir.path().join("other.gz").exists());
}

#[cfg(unix)]
#[test]
fn test_symlink_to_directory_is_renamed_as_link() {
    let temp_dir = setup(&[], &["target"]);
    std::os::unix::fs::symlink(temp_dir.path().join("target"), temp_dir.path().join("link.txt"))
        .unwrap();

    let report = change_extensions("txt", "log", temp_dir.path()).unwrap();

    assert_eq!(sorted_names(report.renamed()), vec!["link.log"]);
    let link = temp_dir.path().join("link.log");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert!(temp_dir.path().join("target").is_dir());
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_are_renamed() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = setup(&["ok.txt"], &[]);
    let odd = temp_dir.path().join(OsStr::from_bytes(b"odd\xff.txt"));
    fs::write(&odd, "x").unwrap();

    let report = change_extensions("txt", "log", temp_dir.path()).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.renamed_count(), 2);
    let renamed_odd = temp_dir.path().join(OsStr::from_bytes(b"odd\xff.log"));
    assert!(report.renamed().contains(&renamed_odd));
    assert!(renamed_odd.exists());
    assert!(!odd.exists());
    assert!(temp_dir.path().join("ok.log").exists());
}
