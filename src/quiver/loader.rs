//! The tree loader: turns an on-disk library into a [`Library`] graph.
//!
//! Loading is all-or-nothing: any validator, parser or I/O failure aborts the
//! whole load and bubbles up with the offending path. The one exception is a
//! note without a `resources/` directory, which loads with zero resources.
//!
//! Directory entries are enumerated in sorted name order at every level, so
//! repeated loads of the same library produce identical graphs on every
//! platform.

use crate::error::{QuiverError, Result};
use crate::model::{Library, Note, Notebook};
use crate::parse;
use crate::resource;
use crate::validate;
use std::fs;
use std::path::Path;

/// Load the Quiver library at the given path.
///
/// `load_resources` tells the loader whether note resources should be read
/// too; when `false` the `resources/` folders are not touched at all.
pub fn read_library(path: impl AsRef<Path>, load_resources: bool) -> Result<Library> {
    let path = path.as_ref();
    validate::check_library(path)?;

    let mut meta = None;
    let mut notebooks = Vec::new();
    for name in sorted_entries(path)? {
        let entry_path = path.join(&name);
        if name == "meta.json" {
            meta = Some(parse::read_library_metadata(&entry_path)?);
        } else {
            // every other entry must be a notebook
            notebooks.push(read_notebook(&entry_path, load_resources)?);
        }
    }

    let meta = meta.ok_or_else(|| QuiverError::MissingRequiredFile(path.join("meta.json")))?;
    Ok(Library { meta, notebooks })
}

/// Load the Quiver notebook at the given path.
pub fn read_notebook(path: impl AsRef<Path>, load_resources: bool) -> Result<Notebook> {
    let path = path.as_ref();
    validate::check_notebook(path)?;

    let mut meta = None;
    let mut notes = Vec::new();
    for name in sorted_entries(path)? {
        let entry_path = path.join(&name);
        if name == "meta.json" {
            meta = Some(parse::read_notebook_metadata(&entry_path)?);
        } else {
            notes.push(read_note(&entry_path, load_resources)?);
        }
    }

    let meta = meta.ok_or_else(|| QuiverError::MissingRequiredFile(path.join("meta.json")))?;
    Ok(Notebook { meta, notes })
}

/// Load the Quiver note at the given path.
///
/// Both `meta.json` and `content.json` are required; a note missing either
/// fails with [`QuiverError::MissingRequiredFile`].
pub fn read_note(path: impl AsRef<Path>, load_resources: bool) -> Result<Note> {
    let path = path.as_ref();
    validate::check_note(path)?;

    let meta_path = path.join("meta.json");
    if !meta_path.exists() {
        return Err(QuiverError::MissingRequiredFile(meta_path));
    }
    let meta = parse::read_note_metadata(&meta_path)?;

    let content_path = path.join("content.json");
    if !content_path.exists() {
        return Err(QuiverError::MissingRequiredFile(content_path));
    }
    let content = parse::read_note_content(&content_path)?;

    let resources = if load_resources {
        match resource::read_note_resources(&path.join("resources"), "") {
            Ok(resources) => Some(resources),
            // a note without resources simply has none
            Err(QuiverError::NotFound(_)) => None,
            Err(e) => return Err(e),
        }
    } else {
        None
    };

    Ok(Note {
        meta,
        content,
        resources,
    })
}

/// Immediate children of a directory, sorted by file name.
fn sorted_entries(path: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(path)
        .map_err(|e| QuiverError::io(path, e))?
        .map(|entry| {
            entry
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .map_err(|e| QuiverError::io(path, e))
        })
        .collect::<Result<_>>()?;
    names.sort();
    Ok(names)
}
