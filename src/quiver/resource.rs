//! Resource loading and the data-URI codec.
//!
//! On disk a resource is any file under a note's `resources/` folder,
//! possibly nested in subdirectories. In JSON a resource travels as a data
//! URI: `data:<mime-type>,<base64>` with the URL-safe unpadded alphabet.
//! MIME inference goes through an explicit [`MimeTable`] so tests (and
//! embedders) can substitute their own extension mappings.

use crate::error::{QuiverError, Result};
use crate::model::NoteResource;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// An extension-to-MIME-type lookup table.
///
/// Overrides are consulted first, then `mime_guess`'s registry; unknown
/// extensions map to the empty type, which still forms a valid data URI
/// (`data:,<payload>`).
#[derive(Debug, Clone, Default)]
pub struct MimeTable {
    overrides: HashMap<String, String>,
}

impl MimeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map the given extension (without the dot) to a fixed MIME type.
    pub fn with_override(mut self, ext: &str, mime: &str) -> Self {
        self.overrides.insert(ext.to_string(), mime.to_string());
        self
    }

    /// Best-effort MIME type for a file name, `""` when unknown.
    pub fn lookup(&self, name: &str) -> String {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        if let Some(mime) = self.overrides.get(ext) {
            return mime.clone();
        }
        mime_guess::from_path(name)
            .first_raw()
            .unwrap_or_default()
            .to_string()
    }
}

/// Encode a resource payload as a data URI, inferring the MIME type from the
/// file name.
pub fn encode_data_uri(name: &str, data: &[u8], mimes: &MimeTable) -> String {
    format!("data:{},{}", mimes.lookup(name), URL_SAFE_NO_PAD.encode(data))
}

/// Decode a `data:<mime>,<base64url-nopad>` string back into raw bytes.
///
/// The MIME type is informative only and is discarded.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| QuiverError::InvalidDataUri(uri.to_string()))?;
    let (_mime, payload) = rest
        .split_once(',')
        .ok_or_else(|| QuiverError::InvalidDataUri(uri.to_string()))?;
    Ok(URL_SAFE_NO_PAD.decode(payload)?)
}

/// Load every file under `path` as a [`NoteResource`], depth-first.
///
/// `rel` is the accumulated relative path from the resource root; pass `""`
/// at the top level. Entries are visited in sorted name order, directories
/// recursed into in place. Hidden files are not excluded.
pub fn read_note_resources(path: &Path, rel: &str) -> Result<Vec<NoteResource>> {
    let meta = fs::metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            QuiverError::NotFound(path.to_path_buf())
        } else {
            QuiverError::io(path, e)
        }
    })?;
    if !meta.is_dir() {
        return Err(QuiverError::NotADirectory(path.to_path_buf()));
    }

    let mut names: Vec<String> = fs::read_dir(path)
        .map_err(|e| QuiverError::io(path, e))?
        .map(|entry| {
            entry
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .map_err(|e| QuiverError::io(path, e))
        })
        .collect::<Result<_>>()?;
    names.sort();

    let mut resources = Vec::new();
    for name in names {
        let file_path = path.join(&name);
        let file_meta = fs::metadata(&file_path).map_err(|e| QuiverError::io(&file_path, e))?;

        if file_meta.is_dir() {
            let child_rel = if rel.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", rel, name)
            };
            resources.extend(read_note_resources(&file_path, &child_rel)?);
        } else {
            let data = fs::read(&file_path).map_err(|e| QuiverError::io(&file_path, e))?;
            resources.push(NoteResource {
                name,
                rel: rel.to_string(),
                data,
            });
        }
    }

    Ok(resources)
}

impl Serialize for NoteResource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let uri = encode_data_uri(&self.name, &self.data, &MimeTable::default());
        let mut state = serializer.serialize_struct("NoteResource", 2)?;
        state.serialize_field("Name", &self.name)?;
        state.serialize_field("Data", &uri)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for NoteResource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            #[serde(rename = "Name")]
            name: String,
            #[serde(rename = "Data")]
            data: String,
        }

        let wire = Wire::deserialize(deserializer)?;
        let data = decode_data_uri(&wire.data).map_err(de::Error::custom)?;
        Ok(NoteResource {
            name: wire.name,
            rel: String::new(),
            data,
        })
    }
}
