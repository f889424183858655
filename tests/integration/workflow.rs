//! End-to-end runs of the workflow controller with real listing and merging.

use pdfmerge::config::Config;
use pdfmerge::controller::{Controller, Flow, Intent, MERGE_FAILED, NO_FOLDER_CHOSEN, NOTHING_TO_DELETE};
use pdfmerge::output::MessageLevel;
use pdfmerge::session::{Outcome, WorkflowState};
use tempfile::TempDir;

use crate::common::{Scripted, page_count, write_garbage, write_pdf};

fn controller(script: &Scripted) -> Controller {
    Controller::with_defaults(
        &Config::default(),
        Box::new(script.clone()),
        Box::new(script.clone()),
    )
}

#[test]
fn test_merge_open_delete_clear() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "02-body.pdf", 3);
    write_pdf(dir.path(), "01-cover.pdf", 1);
    write_pdf(dir.path(), "03-index.pdf", 2);
    let script = Scripted::answering(&[true, true]);
    let mut controller = controller(&script);
    let output = dir.path().join("book.pdf");

    controller.dispatch(Intent::ChoosePath(dir.path().join("book")));
    assert_eq!(controller.session().state, WorkflowState::Ready);

    controller.dispatch(Intent::Merge);
    assert_eq!(
        controller.board().file_list.text,
        "01-cover.pdf\n02-body.pdf\n03-index.pdf"
    );
    assert_eq!(controller.session().last_outcome, Outcome::Success);
    assert!(controller.board().open_enabled);
    assert_eq!(page_count(&output), 6);
    assert!(
        controller
            .board()
            .result
            .text
            .starts_with("Nice! the file - book.pdf - was created")
    );

    controller.dispatch(Intent::Open);
    assert_eq!(script.opened(), vec![output.clone()]);

    controller.dispatch(Intent::Delete);
    assert!(!output.exists());
    assert_eq!(controller.board().result.text, "\"book.pdf\" deleted");
    assert!(!controller.board().open_enabled);
    assert_eq!(script.questions(), vec!["Confirm Merge", "Delete"]);

    controller.dispatch(Intent::Clear);
    assert_eq!(controller.session().state, WorkflowState::Idle);
    assert!(controller.board().result.is_empty());
    assert!(controller.board().target.is_empty());
}

#[test]
fn test_second_merge_overwrites_and_ignores_previous_output() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", 1);
    write_pdf(dir.path(), "b.pdf", 1);
    let script = Scripted::answering(&[true, true]);
    let mut controller = controller(&script);

    controller.dispatch(Intent::ChoosePath(dir.path().join("all")));
    controller.dispatch(Intent::Merge);
    controller.dispatch(Intent::Merge);

    assert_eq!(controller.session().candidate_files, vec!["a.pdf", "b.pdf"]);
    assert_eq!(page_count(&dir.path().join("all.pdf")), 2);
}

#[test]
fn test_merge_before_choosing() {
    let script = Scripted::default();
    let mut controller = controller(&script);

    controller.dispatch(Intent::Merge);

    assert_eq!(controller.board().info.text, NO_FOLDER_CHOSEN);
    assert!(script.questions().is_empty());
}

#[test]
fn test_empty_folder_never_prompts() {
    let dir = TempDir::new().unwrap();
    write_garbage(dir.path(), "readme.txt");
    let script = Scripted::answering(&[true]);
    let mut controller = controller(&script);

    controller.dispatch(Intent::ChoosePath(dir.path().join("out")));
    controller.dispatch(Intent::Merge);

    assert_eq!(
        controller.board().file_list.text,
        "There are no files in that folder"
    );
    assert!(script.questions().is_empty());
    assert!(!dir.path().join("out.pdf").exists());
}

#[test]
fn test_declined_merge_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", 1);
    let script = Scripted::answering(&[false]);
    let mut controller = controller(&script);

    controller.dispatch(Intent::ChoosePath(dir.path().join("out")));
    controller.dispatch(Intent::Merge);

    assert!(!dir.path().join("out.pdf").exists());
    assert_eq!(controller.board().result.text, "Merge cancelled");
    assert!(!controller.board().open_enabled);
}

#[test]
fn test_corrupt_input_reports_failure() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", 1);
    write_garbage(dir.path(), "b.pdf");
    let script = Scripted::answering(&[true]);
    let mut controller = controller(&script);

    controller.dispatch(Intent::ChoosePath(dir.path().join("out")));
    assert_eq!(controller.dispatch(Intent::Merge), Flow::Continue);

    assert!(controller.board().result.text.starts_with(MERGE_FAILED));
    assert_eq!(controller.board().result.level, MessageLevel::Error);
    assert_eq!(controller.session().last_outcome, Outcome::Failure);
    assert!(!controller.board().open_enabled);
    assert!(!dir.path().join("out.pdf").exists());
}

#[test]
fn test_delete_without_output() {
    let dir = TempDir::new().unwrap();
    let script = Scripted::default();
    let mut controller = controller(&script);

    controller.dispatch(Intent::ChoosePath(dir.path().join("out")));
    controller.dispatch(Intent::Delete);

    assert_eq!(script.notices(), vec![NOTHING_TO_DELETE]);
    assert_eq!(controller.session().state, WorkflowState::Ready);
}

#[test]
fn test_declined_delete_keeps_file() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", 1);
    let script = Scripted::answering(&[true, false]);
    let mut controller = controller(&script);

    controller.dispatch(Intent::ChoosePath(dir.path().join("out")));
    controller.dispatch(Intent::Merge);
    controller.dispatch(Intent::Delete);

    assert!(dir.path().join("out.pdf").exists());
    assert_eq!(controller.board().result.text, "out.pdf not deleted");
    assert!(controller.board().open_enabled);
}

#[test]
fn test_exit_stops_dispatch() {
    let script = Scripted::default();
    let mut controller = controller(&script);

    assert_eq!(controller.dispatch(Intent::Exit), Flow::Exit);
    assert_eq!(controller.dispatch(Intent::Help), Flow::Exit);
    assert!(script.notices().is_empty());
}
