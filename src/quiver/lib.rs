//! # Quiver library reader
//!
//! This crate parses [Quiver](https://happenapps.com/#quiver) libraries,
//! notebooks and notes into a plain Rust object graph.
//!
//! A Quiver library is a directory tree on disk: a `.qvlibrary` directory
//! holding one `meta.json` (the declared notebook hierarchy) and a flat set of
//! `.qvnotebook` directories, each of which holds its own `meta.json` and a
//! set of `.qvnote` directories. Every note carries a `meta.json`, a
//! `content.json` with its typed cells, and optionally a `resources/` folder
//! of binary attachments.
//!
//! The most straightforward way to use it is to load a library from disk and
//! then iterate the tree:
//!
//! ```no_run
//! use quiver::loader::read_library;
//!
//! let lib = read_library("/path/to/Quiver.qvlibrary", false)?;
//!
//! // Print the title of all the notes in all the notebooks
//! for notebook in &lib.notebooks {
//!     for note in &notebook.notes {
//!         println!("{}", note.meta.title);
//!     }
//! }
//! # Ok::<(), quiver::error::QuiverError>(())
//! ```
//!
//! Notebooks are stored flat on disk; the logical nesting lives in the
//! library's `meta.json`. [`Library::walk_hierarchy`](model::Library::walk_hierarchy)
//! traverses that declared forest, handing each notebook to a visitor along
//! with its chain of ancestors.
//!
//! ## Module Overview
//!
//! - [`model`]: the data tree (`Library`, `Notebook`, `Note`, `Cell`, ...)
//! - [`loader`]: loads a library/notebook/note directory into the tree
//! - [`parse`]: the per-file JSON decoders used by the loader
//! - [`validate`]: directory-role checks (`.qvlibrary` etc. suffixes)
//! - [`resource`]: resource-folder walking and the data-URI codec
//! - [`hierarchy`]: the declared-hierarchy walker
//! - [`error`]: error types

pub mod error;
pub mod hierarchy;
pub mod loader;
pub mod model;
pub mod parse;
pub mod resource;
pub mod validate;

/// The version of the quiver crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
