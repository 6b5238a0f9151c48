// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility functions.

use std::{
    error::Error,
    fs,
    io::{self, Write},
    path::Path,
};

/// Formats an error followed by each of its sources, separated by `: `.
///
/// Template errors keep the useful part (line, column, what was expected) in their sources.
pub fn describe(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(e) = source {
        out.push_str(": ");
        out.push_str(&e.to_string());
        source = e.source();
    }
    out
}

/// Returns the directory `path` will be written into. A bare file name lives in `.`.
pub fn output_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Writes `contents` to `path` all at once.
///
/// The data goes to a temporary file in the same directory first, which is then linked into
/// place. If anything fails, `path` is left untouched and the temporary file is removed.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created or written, or if `path` already
/// exists when the file is moved into place.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), io::Error> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".relgen-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    let mut tmp = builder.tempfile_in(output_dir(path))?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist_noclobber(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_source_chain() {
        let err = tera::Tera::one_off("{{ cwd", &tera::Context::new(), false).unwrap_err();
        let described = describe(&err);
        assert!(described.starts_with(&err.to_string()));
        assert!(described.len() > err.to_string().len());
    }

    #[test]
    fn bare_name_writes_to_current_dir() {
        assert_eq!(output_dir(Path::new(".goreleaser.yaml")), Path::new("."));
        assert_eq!(output_dir(Path::new("a/b.yaml")), Path::new("a"));
    }

    #[test]
    fn writes_full_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.yaml");

        write_atomic(&path, b"hello\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn never_clobbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.yaml");
        fs::write(&path, "mine").unwrap();

        let err = write_atomic(&path, b"theirs").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "mine");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.yaml");

        assert!(write_atomic(&path, b"x").is_err());
        assert!(!path.exists());
    }
}
