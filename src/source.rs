use crate::error::AppError;

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Where the animated text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Reads the whole source into a string. `stdin` is only consumed for
    /// [`Source::Stdin`]; files are opened and closed within this call.
    pub fn load<R: Read>(&self, mut stdin: R) -> Result<String, AppError> {
        let mut buf = Vec::new();
        match self {
            Source::Stdin => {
                stdin.read_to_end(&mut buf).map_err(AppError::Stdin)?;
            }
            Source::File(path) => {
                let to_load_err = |source| AppError::Load {
                    path: path.clone(),
                    source,
                };
                let mut file = File::open(path).map_err(to_load_err)?;
                file.read_to_end(&mut buf).map_err(to_load_err)?;
            }
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl From<Option<&str>> for Source {
    fn from(value: Option<&str>) -> Self {
        match value {
            None | Some("") => Source::Stdin,
            Some(path) => Source::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "standard input"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    #[test]
    fn empty_path_means_stdin() {
        assert_eq!(Source::from(None), Source::Stdin);
        assert_eq!(Source::from(Some("")), Source::Stdin);
        assert_eq!(
            Source::from(Some("a.txt")),
            Source::File(PathBuf::from("a.txt"))
        );
    }

    #[test]
    fn stdin_is_read_to_end() {
        let content = Source::Stdin.load("line one\nline two".as_bytes()).unwrap();

        assert_eq!(content, "line one\nline two");
    }

    #[test]
    fn file_content_is_kept_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.txt");
        std::fs::write(&path, "hello").unwrap();

        let content = Source::File(path).load(io::empty()).unwrap();

        assert_eq!(content, "hello");
    }

    #[test]
    fn file_source_ignores_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "from file").unwrap();

        let content = Source::File(path).load("from stdin".as_bytes()).unwrap();

        assert_eq!(content, "from file");
    }

    #[test]
    fn missing_file_reports_os_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.txt");

        let err = Source::File(path).load(io::empty()).unwrap_err();

        match &err {
            AppError::Load { source, .. } => assert_eq!(source.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("nonexistent.txt"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let content = Source::Stdin.load(&b"ok \xff"[..]).unwrap();

        assert_eq!(content, "ok \u{fffd}");
    }
}
