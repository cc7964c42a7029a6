//! Markdown rendering for notes: cell formatting, path cleaning, and the
//! rewriting of Quiver-internal link markers.
//!
//! Quiver markdown cells reference attachments as `quiver-image-url/<name>`
//! and other notes as `quiver-note-url/<uuid>`. On export those become plain
//! relative paths: images point into the notebook's `resources/` folder and
//! note links point at the target note's exported file.

use quiver::model::{Cell, Note};
use std::collections::HashMap;

const IMAGE_MARKER: &str = "quiver-image-url/";
const NOTE_MARKER: &str = "quiver-note-url/";

/// Rendering knobs for the exporter.
pub struct RenderOptions {
    /// Quiver editor language names rewritten for fenced code blocks
    /// (e.g. `c_cpp` -> `cpp`). Names not in the map pass through untouched.
    pub language_aliases: HashMap<String, String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        let mut language_aliases = HashMap::new();
        for (from, to) in [
            ("c_cpp", "cpp"),
            ("golang", "go"),
            ("objectivec", "objc"),
            ("plain_text", "text"),
        ] {
            language_aliases.insert(from.to_string(), to.to_string());
        }
        Self { language_aliases }
    }
}

/// Where every note will land in the output tree, keyed by note UUID.
/// Paths are relative to the output root and joined with `/`.
#[derive(Debug, Default)]
pub struct LinkIndex {
    notes: HashMap<String, String>,
}

impl LinkIndex {
    pub fn insert(&mut self, uuid: &str, path: String) {
        self.notes.insert(uuid.to_string(), path);
    }

    pub fn note_path(&self, uuid: &str) -> Option<&str> {
        self.notes.get(uuid).map(String::as_str)
    }
}

/// Make a title safe as a single path component: `/` becomes `|`, `:`
/// becomes `-`, surrounding whitespace is dropped.
pub fn clean_path_element(name: &str) -> String {
    name.replace('/', "|").replace(':', "-").trim().to_string()
}

/// Output file name for a note, `None` when the cleaned title is empty
/// (such notes are skipped).
pub fn note_file_name(title: &str) -> Option<String> {
    let cleaned = clean_path_element(title);
    if cleaned.is_empty() {
        None
    } else {
        Some(format!("{}.md", cleaned))
    }
}

/// Render a whole note as Markdown. `note_dir` is the note's directory
/// relative to the output root (`""` at the root), used to relativize
/// cross-note links.
pub fn render_note(note: &Note, note_dir: &str, links: &LinkIndex, opts: &RenderOptions) -> String {
    let mut out = String::new();
    for (i, cell) in note.content.cells.iter().enumerate() {
        if i != 0 {
            out.push('\n');
        }
        match cell {
            Cell::Code { language, data } => {
                let lang = language.as_deref().unwrap_or("");
                let lang = opts
                    .language_aliases
                    .get(lang)
                    .map(String::as_str)
                    .unwrap_or(lang);
                out.push_str("```");
                out.push_str(lang);
                out.push('\n');
                out.push_str(data);
                out.push_str("\n```\n");
            }
            Cell::Latex { data } => {
                out.push_str("```latex\n");
                out.push_str(data);
                out.push_str("\n```\n");
            }
            Cell::Diagram { diagram_type, data } => {
                out.push_str("```");
                out.push_str(diagram_type.as_deref().unwrap_or("diagram"));
                out.push('\n');
                out.push_str(data);
                out.push_str("\n```\n");
            }
            Cell::Markdown { data } | Cell::Text { data } => {
                out.push_str(&rewrite_markers(data, note_dir, links));
                out.push('\n');
            }
        }
    }
    out
}

/// Rewrite Quiver-internal markers in a cell payload.
///
/// Image markers always resolve to the sibling `resources/` folder. Note
/// markers resolve through the [`LinkIndex`]; markers pointing at unknown
/// UUIDs are left untouched.
pub fn rewrite_markers(data: &str, note_dir: &str, links: &LinkIndex) -> String {
    let rewritten = rewrite(data, IMAGE_MARKER, |name| Some(format!("resources/{}", name)));
    rewrite(&rewritten, NOTE_MARKER, |uuid| {
        links
            .note_path(uuid)
            .map(|target| relative_path(note_dir, target))
    })
}

fn rewrite(data: &str, marker: &str, resolve: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(data.len());
    let mut rest = data;
    while let Some(pos) = rest.find(marker) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + marker.len()..];
        let end = after
            .find(|c: char| c == ')' || c == '"' || c == '\'' || c.is_whitespace())
            .unwrap_or(after.len());
        let target = &after[..end];
        match resolve(target) {
            Some(replacement) => out.push_str(&replacement),
            None => {
                out.push_str(marker);
                out.push_str(target);
            }
        }
        rest = &after[end..];
    }
    out.push_str(rest);
    out
}

/// Relative path from a directory to a file, both expressed as `/`-joined
/// paths under the same root (`""` meaning the root itself).
pub fn relative_path(from_dir: &str, to: &str) -> String {
    let from: Vec<&str> = from_dir.split('/').filter(|c| !c.is_empty()).collect();
    let to: Vec<&str> = to.split('/').filter(|c| !c.is_empty()).collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from.len() - common];
    parts.extend(&to[common..]);
    parts.join("/")
}
