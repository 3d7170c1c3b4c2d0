//! Writing the rendered record

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{OsInfoError, OsInfoResult};

/// Write `content` to `path`, or to stdout followed by a newline
pub fn write_output(content: &str, path: Option<&Path>) -> OsInfoResult<()> {
    match path {
        Some(path) => write_file(content, path),
        None => write_stdout(content),
    }
}

fn write_file(content: &str, path: &Path) -> OsInfoResult<()> {
    let to_io = |source| OsInfoError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_io)?;
    file.write_all(content.as_bytes()).map_err(to_io)?;
    file.flush().map_err(to_io)?;

    debug!(path = %path.display(), bytes = content.len(), "Wrote output file");
    Ok(())
}

fn write_stdout(content: &str) -> OsInfoResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    out.write_all(content.as_bytes())
        .map_err(OsInfoError::Stdout)?;
    if !content.ends_with('\n') {
        out.write_all(b"\n").map_err(OsInfoError::Stdout)?;
    }
    out.flush().map_err(OsInfoError::Stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");

        write_output("{\"system\":{}}", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"system\":{}}");
    }

    #[test]
    fn test_write_file_preserves_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.yaml");

        write_output("hostname: höst\n", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hostname: höst\n");
    }

    #[test]
    fn test_write_file_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("record.json");

        let err = write_output("{}", Some(&path)).unwrap_err();
        assert!(matches!(err, OsInfoError::Io { path: ref p, .. } if p == &path));
    }
}
