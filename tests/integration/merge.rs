//! Integration tests for merging with lopdf.

use pdfmerge::config::CompressionLevel;
use pdfmerge::error::PdfMergeError;
use pdfmerge::merge::{DocumentMerger, Merger};
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{page_count, write_garbage, write_pdf};

#[test]
fn test_merge_preserves_every_page() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        write_pdf(dir.path(), "a.pdf", 2),
        write_pdf(dir.path(), "b.pdf", 3),
        write_pdf(dir.path(), "c.pdf", 1),
    ];
    let output = dir.path().join("merged.pdf");

    let summary = Merger::new().merge(&inputs, &output).unwrap();

    assert_eq!(summary.files_merged, 3);
    assert_eq!(summary.total_pages, 6);
    assert_eq!(page_count(&output), 6);
    assert_eq!(summary.output_size, std::fs::metadata(&output).unwrap().len());
}

#[rstest]
#[case(CompressionLevel::None)]
#[case(CompressionLevel::Standard)]
#[case(CompressionLevel::Maximum)]
fn test_merge_at_every_compression_level(#[case] level: CompressionLevel) {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        write_pdf(dir.path(), "a.pdf", 1),
        write_pdf(dir.path(), "b.pdf", 2),
    ];
    let output = dir.path().join("merged.pdf");

    Merger::new()
        .with_compression(level)
        .merge(&inputs, &output)
        .unwrap();

    assert_eq!(page_count(&output), 3);
}

#[test]
fn test_unreadable_input_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        write_pdf(dir.path(), "a.pdf", 1),
        write_garbage(dir.path(), "b.pdf"),
    ];
    let output = dir.path().join("merged.pdf");

    let result = Merger::new().merge(&inputs, &output);

    assert!(matches!(
        result,
        Err(PdfMergeError::FailedToLoadPdf { .. }) | Err(PdfMergeError::CorruptedPdf { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![dir.path().join("nope.pdf")];

    let result = Merger::new().merge(&inputs, &dir.path().join("merged.pdf"));

    assert!(matches!(result, Err(PdfMergeError::FileNotFound { .. })));
}
