//! Shared helpers for the integration tests.
//!
//! Fixtures are generated on the fly with lopdf, so the tests need nothing
//! checked in besides themselves.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use pdfmerge::controller::{Prompter, Viewer};
use pdfmerge::error::Result;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Write a valid PDF with `pages` text pages to `dir/name`.
pub fn write_pdf(dir: &Path, name: &str, pages: usize) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages);
    for number in 1..=pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 18.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("{name} / {number}"))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).expect("Failed to write sample PDF");
    path
}

/// Write a file that is not a PDF at all.
pub fn write_garbage(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"this is not a pdf").expect("Failed to write file");
    path
}

/// Page count of a PDF on disk.
pub fn page_count(path: &Path) -> usize {
    Document::load(path)
        .expect("Failed to reload PDF")
        .get_pages()
        .len()
}

/// What the scripted dialogs and viewer saw.
#[derive(Debug, Default)]
pub struct Transcript {
    pub answers: VecDeque<bool>,
    pub questions: Vec<(String, String)>,
    pub notices: Vec<(String, String)>,
    pub opened: Vec<PathBuf>,
}

/// Prompter and viewer that answer from a script and record everything.
#[derive(Debug, Clone, Default)]
pub struct Scripted(pub Rc<RefCell<Transcript>>);

impl Scripted {
    /// A script that answers `answers` in order, then Cancel.
    pub fn answering(answers: &[bool]) -> Self {
        let scripted = Self::default();
        scripted.0.borrow_mut().answers.extend(answers.iter().copied());
        scripted
    }

    pub fn questions(&self) -> Vec<String> {
        self.0
            .borrow()
            .questions
            .iter()
            .map(|(title, _)| title.clone())
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.0
            .borrow()
            .notices
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.0.borrow().opened.clone()
    }
}

impl Prompter for Scripted {
    fn confirm(&mut self, title: &str, message: &str) -> bool {
        let mut transcript = self.0.borrow_mut();
        transcript
            .questions
            .push((title.to_string(), message.to_string()));
        transcript.answers.pop_front().unwrap_or(false)
    }

    fn notify(&mut self, title: &str, message: &str) {
        self.0
            .borrow_mut()
            .notices
            .push((title.to_string(), message.to_string()));
    }
}

impl Viewer for Scripted {
    fn open(&self, path: &Path) -> Result<()> {
        self.0.borrow_mut().opened.push(path.to_path_buf());
        Ok(())
    }
}
