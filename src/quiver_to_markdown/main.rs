//! Converts a Quiver library into a tree of Markdown files.
//!
//! The output follows the library's declared hierarchy: one directory per
//! notebook (nested under its ancestors), one `<title>.md` per note, and the
//! note attachments copied into a sibling `resources/` folder.
//!
//! ```text
//! $ quiver-to-markdown /path/to/Quiver.qvlibrary output_path
//! ```

use clap::Parser;
use quiver::error::{QuiverError, Result};
use quiver::loader::read_library;
use quiver::model::{Library, Note, Notebook};
use std::fs;
use std::path::{Path, PathBuf};

mod render;
use render::{clean_path_element, note_file_name, LinkIndex, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "quiver-to-markdown", version)]
#[command(about = "Export a Quiver library as a tree of Markdown files")]
struct Cli {
    /// Path to the .qvlibrary directory
    library: PathBuf,

    /// Directory to write the Markdown tree into
    output: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // resources are always needed, they get copied next to the notes
    let library = read_library(&cli.library, true)?;
    write_library(&cli.output, &library, &RenderOptions::default())
}

fn write_library(out: &Path, library: &Library, opts: &RenderOptions) -> Result<()> {
    ensure_directory(out)?;

    // first pass: decide where every note lands, so cross-note links can be
    // rewritten to relative paths during the second pass
    let links = index_links(library);

    library.walk_hierarchy(|nb, ancestors| {
        let Some(nb) = nb else { return Ok(()) };
        let dir = notebook_dir(ancestors, nb);
        write_notebook(out, &dir, nb, &links, opts)
    })
}

fn index_links(library: &Library) -> LinkIndex {
    let mut links = LinkIndex::default();
    let _ = library.walk_hierarchy::<(), _>(|nb, ancestors| {
        if let Some(nb) = nb {
            let dir = notebook_dir(ancestors, nb);
            for note in &nb.notes {
                if let Some(file) = note_file_name(&note.meta.title) {
                    let path = if dir.is_empty() {
                        file
                    } else {
                        format!("{}/{}", dir, file)
                    };
                    links.insert(&note.meta.uuid, path);
                }
            }
        }
        Ok(())
    });
    links
}

/// Output directory for a notebook, relative to the output root and joined
/// with `/`. Ancestors missing from the flat notebook list contribute no
/// path component.
fn notebook_dir(ancestors: &[Option<&Notebook>], nb: &Notebook) -> String {
    let mut parts: Vec<String> = ancestors
        .iter()
        .flatten()
        .map(|a| clean_path_element(&a.meta.name))
        .collect();
    parts.push(clean_path_element(&nb.meta.name));
    parts.retain(|p| !p.is_empty());
    parts.join("/")
}

fn write_notebook(
    out: &Path,
    dir: &str,
    nb: &Notebook,
    links: &LinkIndex,
    opts: &RenderOptions,
) -> Result<()> {
    let nb_path = if dir.is_empty() {
        out.to_path_buf()
    } else {
        out.join(dir)
    };
    ensure_directory(&nb_path)?;

    for note in &nb.notes {
        write_note(&nb_path, dir, note, links, opts)?;
    }
    Ok(())
}

fn write_note(
    nb_path: &Path,
    dir: &str,
    note: &Note,
    links: &LinkIndex,
    opts: &RenderOptions,
) -> Result<()> {
    let Some(file) = note_file_name(&note.meta.title) else {
        // nothing sensible to name the file after
        return Ok(());
    };

    let body = render::render_note(note, dir, links, opts);
    let note_path = nb_path.join(&file);
    fs::write(&note_path, body).map_err(|e| io_error(&note_path, e))?;

    if let Some(resources) = &note.resources {
        for r in resources {
            let res_dir = if r.rel.is_empty() {
                nb_path.join("resources")
            } else {
                nb_path.join("resources").join(&r.rel)
            };
            ensure_directory(&res_dir)?;
            let target = res_dir.join(&r.name);
            fs::write(&target, &r.data).map_err(|e| io_error(&target, e))?;
        }
    }

    Ok(())
}

fn ensure_directory(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(QuiverError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, source: std::io::Error) -> QuiverError {
    QuiverError::Io {
        path: path.to_path_buf(),
        source,
    }
}
