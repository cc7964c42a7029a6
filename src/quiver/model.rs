//! The data tree: holds all the data of a loaded library.
//!
//! Field names and JSON shapes match the Quiver on-disk format bit-exactly,
//! so the same types serve both the loader and the JSON exporter. Timestamps
//! cross the wire as integer Unix seconds.

use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The contents of a Quiver library (`.qvlibrary`) directory.
///
/// `notebooks` follows filesystem enumeration order (sorted by directory
/// name), which is unrelated to the declared hierarchy in `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(flatten)]
    pub meta: LibraryMetadata,
    /// The list of notebooks found inside the library.
    pub notebooks: Vec<Notebook>,
}

/// The contents of a library metadata (`meta.json`) file: the declared
/// notebook hierarchy, a forest of UUID nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryMetadata {
    /// The roots of the notebook hierarchy.
    pub children: Vec<NotebookHierarchyInfo>,
}

/// A node in the declared notebook hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookHierarchyInfo {
    /// The UUID of the notebook.
    pub uuid: String,
    /// The list of its children.
    #[serde(default)]
    pub children: Vec<NotebookHierarchyInfo>,
}

/// The contents of a Quiver notebook (`.qvnotebook`) directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    #[serde(flatten)]
    pub meta: NotebookMetadata,
    /// The list of notes found inside the notebook.
    pub notes: Vec<Note>,
}

/// The contents of a notebook metadata (`meta.json`) file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    /// The name of the notebook.
    pub name: String,
    /// The UUID of the notebook.
    pub uuid: String,
}

/// The contents of a Quiver note (`.qvnote`) directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(flatten)]
    pub meta: NoteMetadata,
    #[serde(flatten)]
    pub content: NoteContent,
    /// The resources attached to this note, present only when the library
    /// was loaded with resources enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<NoteResource>>,
}

/// The contents of a note metadata (`meta.json`) file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteMetadata {
    /// The time the note was created.
    #[serde(with = "ts_seconds")]
    pub created_at: DateTime<Utc>,
    /// The tags attached to the note, in source order.
    pub tags: Vec<String>,
    /// The title of the note.
    pub title: String,
    /// The time the note was last updated.
    #[serde(with = "ts_seconds")]
    pub updated_at: DateTime<Utc>,
    /// The UUID of the note.
    pub uuid: String,
}

/// The contents of a note content (`content.json`) file.
///
/// The note title is not repeated here; it lives in [`NoteMetadata`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteContent {
    /// The ordered list of cells in the note.
    pub cells: Vec<Cell>,
}

/// A cell inside a Quiver note, discriminated by its `type` tag.
///
/// `language` exists only on code cells and `diagramType` only on diagram
/// cells; the other combinations cannot be represented. `data` holds the raw
/// textual payload and is never reinterpreted at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Cell {
    Code {
        /// The language of the cell, as named by the Quiver editor.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        data: String,
    },
    Text {
        data: String,
    },
    Markdown {
        data: String,
    },
    Latex {
        data: String,
    },
    Diagram {
        /// The kind of diagram (e.g. "sequence" or "flow").
        #[serde(
            rename = "diagramType",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        diagram_type: Option<String>,
        data: String,
    },
}

impl Cell {
    /// The raw textual payload of the cell, whatever its type.
    pub fn data(&self) -> &str {
        match self {
            Cell::Code { data, .. }
            | Cell::Text { data }
            | Cell::Markdown { data }
            | Cell::Latex { data }
            | Cell::Diagram { data, .. } => data,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Cell::Code { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text { .. })
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self, Cell::Markdown { .. })
    }

    pub fn is_latex(&self) -> bool {
        matches!(self, Cell::Latex { .. })
    }

    pub fn is_diagram(&self) -> bool {
        matches!(self, Cell::Diagram { .. })
    }
}

/// A note resource: any file found under the `resources/` folder of a note.
///
/// Identity is `(name, rel)`; resources have no UUID. In JSON a resource
/// serializes as `{"Name": ..., "Data": "data:<mime>,<base64>"}` (see the
/// codec in [`crate::resource`]).
#[derive(Debug, Clone, PartialEq)]
pub struct NoteResource {
    /// The file name.
    pub name: String,
    /// The directory path relative to the resource root, `""` for files
    /// sitting directly under it. Components are joined with `/`.
    pub rel: String,
    /// The raw file contents.
    pub data: Vec<u8>,
}
