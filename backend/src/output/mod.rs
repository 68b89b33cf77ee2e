//! JSON document writer.
//!
//! The document is staged in a temporary file next to the target and renamed
//! over it once fully written, so a failed run never leaves a truncated file.

use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{OutputError, OutputResult};

/// Default output path used when the caller does not pass one.
pub const DEFAULT_OUTPUT_PATH: &str = "out.json";

/// Write `document` as pretty-printed JSON to `path`, replacing any existing
/// file.
///
/// # Example
/// ```no_run
/// use recordshape::write_document;
/// use serde_json::json;
/// use std::path::Path;
///
/// write_document(&json!({ "key": "value" }), Path::new("test.json")).unwrap();
/// ```
pub fn write_document<T>(document: &T, path: &Path) -> OutputResult<()>
where
    T: Serialize + ?Sized,
{
    let staged = staging_file(path).map_err(|e| OutputError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(staged);
    write_pretty(&mut writer, document, path)?;
    let staged = writer
        .into_inner()
        .map_err(|e| write_error(path, e.into_error()))?;
    staged
        .as_file()
        .sync_all()
        .map_err(|e| write_error(path, e))?;

    staged.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(path = %path.display(), "document written");
    Ok(())
}

/// Temporary file in the target's directory, carrying the mode the target
/// would get from a plain create: the existing target's mode when replacing
/// it, `0o666` minus the umask otherwise.
fn staging_file(path: &Path) -> std::io::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let staged = builder.tempfile_in(dir)?;

    if let Ok(existing) = std::fs::metadata(path) {
        staged.as_file().set_permissions(existing.permissions())?;
    }
    Ok(staged)
}

/// Pretty JSON followed by a newline.
fn write_pretty<W, T>(writer: &mut W, document: &T, path: &Path) -> OutputResult<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *writer, document).map_err(|e| {
        if e.is_io() {
            write_error(path, e.into())
        } else {
            OutputError::Serialize(e)
        }
    })?;
    writer.write_all(b"\n").map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, source: std::io::Error) -> OutputError {
    OutputError::Write {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_writes_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.json");

        write_document(&json!({ "key": "value" }), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, json!({ "key": "value" }));
    }

    #[test]
    fn test_pretty_printed_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pretty.json");

        write_document(&json!([{ "a": "1" }]), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[\n  {\n    \"a\": \"1\"\n  }\n]\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "this is a much longer previous content that must disappear").unwrap();

        write_document(&json!([]), &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = write_document(&json!([]), &path).unwrap_err();
        assert!(matches!(err, OutputError::Create { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_no_staging_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_document(&json!({ "key": "value" }), &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_failure_reported_as_write_error() {
        let err = write_pretty(&mut FullDisk, &json!([{ "a": "1" }]), Path::new("out.json"))
            .unwrap_err();

        assert!(matches!(err, OutputError::Write { .. }));
        assert!(err.to_string().contains("no space left on device"));
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "old").unwrap();

        for mode in [0o644, 0o640] {
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
            write_document(&json!([]), &path).unwrap();
            assert_eq!(mode_of(&path), mode);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode_follows_umask() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.json");
        let path = dir.path().join("out.json");
        std::fs::write(&plain, "[]").unwrap();

        write_document(&json!([]), &path).unwrap();

        assert_eq!(mode_of(&path), mode_of(&plain));
    }
}
