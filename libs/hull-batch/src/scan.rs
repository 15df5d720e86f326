//! # Directory Scanner
//!
//! Enumerates mesh files in a directory by extension.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lists the files in `dir` whose extension matches `extension`
/// (case-insensitive, without the dot), sorted lexicographically.
///
/// An empty result is not an error; the caller decides whether to warn.
/// A missing or unreadable directory surfaces as the underlying
/// [`io::Error`].
///
/// # Example
///
/// ```rust,ignore
/// use hull_batch::scan_mesh_files;
///
/// let files = scan_mesh_files(Path::new("assets/meshes"), "stl")?;
/// ```
pub fn scan_mesh_files(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.stl"), b"").unwrap();
        fs::write(dir.path().join("b.obj"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let files = scan_mesh_files(dir.path(), "stl").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "a.stl");
    }

    #[test]
    fn test_scan_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("upper.STL"), b"").unwrap();
        fs::write(dir.path().join("lower.stl"), b"").unwrap();

        let files = scan_mesh_files(dir.path(), "stl").unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_scan_returns_sorted_paths() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.stl", "a.stl", "b.stl"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let files = scan_mesh_files(dir.path(), "stl").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.stl", "b.stl", "c.stl"]);
    }

    #[test]
    fn test_scan_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.stl")).unwrap();
        fs::write(dir.path().join("mesh.stl"), b"").unwrap();

        let files = scan_mesh_files(dir.path(), "stl").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "mesh.stl");
    }

    #[test]
    fn test_scan_empty_directory_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_mesh_files(dir.path(), "stl").unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(scan_mesh_files(&missing, "stl").is_err());
    }
}
