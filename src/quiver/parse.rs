//! The per-file JSON decoders.
//!
//! Each `parse_*` function decodes one fixed-shape metadata/content document;
//! the matching `read_*` wrapper loads it from disk and tags failures with
//! the file path. Unknown fields are ignored everywhere so newer Quiver
//! versions can add fields without breaking the loader.

use crate::error::{QuiverError, Result};
use crate::model::{LibraryMetadata, NoteContent, NoteMetadata, NotebookMetadata};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Parse a library `meta.json` document: the declared notebook hierarchy.
pub fn parse_library_metadata(json: &str) -> serde_json::Result<LibraryMetadata> {
    serde_json::from_str(json)
}

/// Parse a notebook `meta.json` document.
pub fn parse_notebook_metadata(json: &str) -> serde_json::Result<NotebookMetadata> {
    serde_json::from_str(json)
}

/// Parse a note `meta.json` document.
pub fn parse_note_metadata(json: &str) -> serde_json::Result<NoteMetadata> {
    serde_json::from_str(json)
}

/// Parse a note `content.json` document.
pub fn parse_note_content(json: &str) -> serde_json::Result<NoteContent> {
    serde_json::from_str(json)
}

/// Load the library `meta.json` at the given path.
pub fn read_library_metadata(path: &Path) -> Result<LibraryMetadata> {
    read_json(path)
}

/// Load the notebook `meta.json` at the given path.
pub fn read_notebook_metadata(path: &Path) -> Result<NotebookMetadata> {
    read_json(path)
}

/// Load the note `meta.json` at the given path.
pub fn read_note_metadata(path: &Path) -> Result<NoteMetadata> {
    read_json(path)
}

/// Load the note `content.json` at the given path.
pub fn read_note_content(path: &Path) -> Result<NoteContent> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path).map_err(|e| QuiverError::io(path, e))?;
    serde_json::from_str(&json).map_err(|source| QuiverError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}
