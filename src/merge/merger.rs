//! Core PDF merging implementation.
//!
//! The first input is the base document; every following input is
//! renumbered past the base's highest object id, its objects are copied in,
//! and its pages are appended to the base page tree. The appended document's
//! own catalog and page tree nodes are not carried over.

use lopdf::{Document, Object, ObjectId};
use std::path::{Path, PathBuf};

use crate::config::{CompressionLevel, Config};
use crate::error::{PdfMergeError, Result};
use crate::io::{LoadedPdf, PdfReader, PdfWriter};
use crate::merge::{DocumentMerger, MergeSummary};

/// Page attributes a page may inherit from its ancestors.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guards the parent walk against malformed, cyclic trees.
const MAX_TREE_DEPTH: usize = 64;

/// lopdf-backed [`DocumentMerger`].
#[derive(Debug, Clone, Default)]
pub struct Merger {
    /// Reader for loading PDFs.
    reader: PdfReader,

    /// Writer for the merged output.
    writer: PdfWriter,

    /// Compression applied before writing.
    compression: CompressionLevel,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a merger using the configured compression level.
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_compression(config.compression)
    }

    /// Set the compression level.
    pub fn with_compression(mut self, compression: CompressionLevel) -> Self {
        self.compression = compression;
        self
    }

    /// Load `inputs` and combine them into one in-memory document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `inputs` is empty
    /// - An input cannot be loaded
    /// - The base document has no usable page tree
    pub fn merge_documents(&self, inputs: &[PathBuf]) -> Result<Document> {
        if inputs.is_empty() {
            return Err(PdfMergeError::NoFilesToMerge);
        }

        let loaded = self.reader.load_all(inputs)?;
        let mut loaded = loaded.into_iter();

        let Some(LoadedPdf {
            document: mut merged,
            ..
        }) = loaded.next()
        else {
            return Err(PdfMergeError::NoFilesToMerge);
        };

        let mut max_id = merged.max_id;

        for LoadedPdf {
            document: mut doc,
            path,
            ..
        } in loaded
        {
            // Renumber objects to avoid ID conflicts
            doc.renumber_objects_with(max_id + 1);
            max_id = doc.max_id;

            let doc_pages: Vec<ObjectId> = doc.get_pages().into_values().collect();

            // Pages are re-parented under the base tree, so they must carry
            // what they used to inherit before their own tree is dropped.
            for &page_id in &doc_pages {
                inherit_page_attributes(&mut doc, page_id)?;
            }
            drop_document_structure(&mut doc);

            merged.objects.extend(doc.objects);

            add_pages_to_tree(&mut merged, &doc_pages)?;

            tracing::debug!(path = %path.display(), pages = doc_pages.len(), "appended document");
        }

        merged.max_id = max_id;

        match self.compression {
            CompressionLevel::None => {}
            CompressionLevel::Standard => {
                merged.compress();
            }
            CompressionLevel::Maximum => {
                merged.compress();
                merged.prune_objects();
            }
        }

        merged.renumber_objects();

        Ok(merged)
    }
}

impl DocumentMerger for Merger {
    fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<MergeSummary> {
        let mut document = self.merge_documents(inputs)?;
        let total_pages = document.get_pages().len();

        let output_size = self.writer.save(&mut document, output)?;

        tracing::info!(
            output = %output.display(),
            files = inputs.len(),
            pages = total_pages,
            "merged documents"
        );

        Ok(MergeSummary {
            files_merged: inputs.len(),
            total_pages,
            output_size,
        })
    }
}

/// Append `page_ids` to the base document's root page tree.
fn add_pages_to_tree(merged: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    let catalog = merged
        .catalog()
        .map_err(|e| PdfMergeError::merge_failed(format!("Failed to get catalog: {e}")))?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(|p| p.as_reference())
        .map_err(|e| PdfMergeError::merge_failed(format!("Failed to get pages reference: {e}")))?;

    let pages_dict = merged
        .get_object_mut(pages_id)
        .map_err(|e| PdfMergeError::merge_failed(format!("Failed to get pages object: {e}")))?;

    let Object::Dictionary(dict) = pages_dict else {
        return Err(PdfMergeError::merge_failed(
            "Pages object is not a dictionary",
        ));
    };

    let kids = dict
        .get_mut(b"Kids")
        .map_err(|_| PdfMergeError::merge_failed("Pages dictionary missing Kids array"))?;

    let Object::Array(kids_array) = kids else {
        return Err(PdfMergeError::merge_failed("Kids is not an array"));
    };

    kids_array.extend(page_ids.iter().map(|&id| Object::Reference(id)));

    let current_count = dict.get(b"Count").and_then(|c| c.as_i64()).unwrap_or(0);
    dict.set("Count", Object::Integer(current_count + page_ids.len() as i64));

    for &page_id in page_ids {
        let page = merged
            .get_object_mut(page_id)
            .and_then(Object::as_dict_mut)
            .map_err(|e| PdfMergeError::merge_failed(format!("Failed to get page {page_id:?}: {e}")))?;
        page.set("Parent", Object::Reference(pages_id));
    }

    Ok(())
}

/// Copy inherited attributes the page does not set itself onto the page.
fn inherit_page_attributes(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    let mut inherited = Vec::new();
    {
        let page = doc.get_dictionary(page_id)?;
        for key in INHERITABLE_KEYS {
            if page.has(key) {
                continue;
            }

            let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
            for _ in 0..MAX_TREE_DEPTH {
                let Some(node) = parent.and_then(|id| doc.get_dictionary(id).ok()) else {
                    break;
                };
                if let Ok(value) = node.get(key) {
                    inherited.push((key, value.clone()));
                    break;
                }
                parent = node.get(b"Parent").and_then(Object::as_reference).ok();
            }
        }
    }

    if inherited.is_empty() {
        return Ok(());
    }

    let page = doc.get_object_mut(page_id).and_then(Object::as_dict_mut)?;
    for (key, value) in inherited {
        page.set(key, value);
    }

    Ok(())
}

/// Remove the catalog and every page tree node, keeping pages and content.
fn drop_document_structure(doc: &mut Document) {
    let structure: Vec<ObjectId> = doc
        .objects
        .iter()
        .filter(|(_, object)| matches!(type_name(object), Some(b"Catalog" | b"Pages")))
        .map(|(&id, _)| id)
        .chain(doc.trailer.get(b"Root").and_then(Object::as_reference).ok())
        .collect();

    for id in structure {
        doc.objects.remove(&id);
    }
}

fn type_name(object: &Object) -> Option<&[u8]> {
    object
        .as_dict()
        .ok()?
        .get(b"Type")
        .and_then(Object::as_name)
        .ok()
}
