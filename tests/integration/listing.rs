//! Integration tests for candidate file listing.

use pdfmerge::config::Config;
use pdfmerge::error::PdfMergeError;
use pdfmerge::walker::{FileLister, GlobLister};
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{write_garbage, write_pdf};

#[test]
fn test_lists_only_top_level_pdfs() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "one.pdf", 1);
    write_pdf(dir.path(), "two.pdf", 1);
    write_garbage(dir.path(), "notes.txt");
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    write_pdf(&dir.path().join("nested"), "deep.pdf", 1);

    let mut names = GlobLister::default().list(dir.path(), "*.pdf").unwrap();
    names.sort();

    assert_eq!(names, vec!["one.pdf", "two.pdf"]);
}

#[rstest]
#[case(false, vec!["B.PDF", "a.pdf"])]
#[case(true, vec!["a.pdf"])]
fn test_case_sensitivity_follows_config(#[case] case_sensitive: bool, #[case] expected: Vec<&str>) {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", 1);
    write_pdf(dir.path(), "B.PDF", 1);

    let config = Config {
        case_sensitive,
        ..Config::default()
    };
    let mut names = GlobLister::from_config(&config)
        .list(dir.path(), &config.pattern)
        .unwrap();
    names.sort();

    assert_eq!(names, expected);
}

#[test]
fn test_hidden_pdfs_are_candidates() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), ".draft.pdf", 1);
    write_pdf(dir.path(), "a.pdf", 1);

    let mut names = GlobLister::default().list(dir.path(), "*.pdf").unwrap();
    names.sort();

    assert_eq!(names, vec![".draft.pdf", "a.pdf"]);
}

#[test]
fn test_custom_pattern() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "scan-01.pdf", 1);
    write_pdf(dir.path(), "scan-02.pdf", 1);
    write_pdf(dir.path(), "cover.pdf", 1);

    let mut names = GlobLister::default().list(dir.path(), "scan-*.pdf").unwrap();
    names.sort();

    assert_eq!(names, vec!["scan-01.pdf", "scan-02.pdf"]);
}

#[test]
fn test_missing_folder_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    let result = GlobLister::default().list(&missing, "*.pdf");

    assert!(matches!(result, Err(PdfMergeError::FolderNotReadable { .. })));
}
