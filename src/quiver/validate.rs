//! Directory-role validators.
//!
//! Each Quiver entity lives in a directory whose name carries a role-specific
//! suffix. These checks are pure preconditions: they confirm the path exists,
//! is a directory, and has the right suffix, and nothing else. Callers invoke
//! them before treating a path as a library, notebook or note.

use crate::error::{QuiverError, Result};
use std::io;
use std::path::Path;

/// Directory suffix of a Quiver library.
pub const LIBRARY_EXT: &str = ".qvlibrary";
/// Directory suffix of a Quiver notebook.
pub const NOTEBOOK_EXT: &str = ".qvnotebook";
/// Directory suffix of a Quiver note.
pub const NOTE_EXT: &str = ".qvnote";

/// Check that the given path is a Quiver library directory.
pub fn check_library(path: &Path) -> Result<()> {
    check_role(path, "library", LIBRARY_EXT)
}

/// Check that the given path is a Quiver notebook directory.
pub fn check_notebook(path: &Path) -> Result<()> {
    check_role(path, "notebook", NOTEBOOK_EXT)
}

/// Check that the given path is a Quiver note directory.
pub fn check_note(path: &Path) -> Result<()> {
    check_role(path, "note", NOTE_EXT)
}

fn check_role(path: &Path, role: &'static str, expected: &'static str) -> Result<()> {
    let meta = std::fs::metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            QuiverError::NotFound(path.to_path_buf())
        } else {
            QuiverError::io(path, e)
        }
    })?;

    if !meta.is_dir() {
        return Err(QuiverError::NotADirectory(path.to_path_buf()));
    }

    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if !name.ends_with(expected) {
        return Err(QuiverError::WrongExtension {
            path: path.to_path_buf(),
            role,
            expected,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_path_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.qvlibrary");
        match check_library(&missing) {
            Err(QuiverError::NotFound(p)) => assert_eq!(p, missing),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_file_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("note.qvnote");
        fs::write(&file, "not a dir").unwrap();
        assert!(matches!(
            check_note(&file),
            Err(QuiverError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_wrong_suffix_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("plain-directory");
        fs::create_dir(&dir).unwrap();
        match check_library(&dir) {
            Err(QuiverError::WrongExtension { expected, .. }) => {
                assert_eq!(expected, LIBRARY_EXT);
            }
            other => panic!("expected WrongExtension, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_roles_pass() {
        let tmp = TempDir::new().unwrap();
        for name in ["l.qvlibrary", "n.qvnotebook", "x.qvnote"] {
            fs::create_dir(tmp.path().join(name)).unwrap();
        }
        assert!(check_library(&tmp.path().join("l.qvlibrary")).is_ok());
        assert!(check_notebook(&tmp.path().join("n.qvnotebook")).is_ok());
        assert!(check_note(&tmp.path().join("x.qvnote")).is_ok());
    }
}
