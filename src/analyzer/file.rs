//! The file chosen for upload and the picker's accept filter.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons the picker refuses a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("No path entered")]
    Empty,

    #[error("'{0}' does not exist")]
    NotFound(PathBuf),

    #[error("'{0}' is not a regular file")]
    NotAFile(PathBuf),

    #[error("Only {accept} files are accepted")]
    Rejected { accept: String },
}

/// A file reference chosen by the user.
///
/// Only the path is stored; bytes are read when the upload starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

impl SelectedFile {
    /// Validate `input` against the accept filter and resolve it to a file.
    ///
    /// An empty `accept` list lets every extension through.
    pub fn pick(input: &str, accept: &[String]) -> Result<Self, PickError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PickError::Empty);
        }

        let path = expand_home(trimmed);

        if !accepts(&path, accept) {
            return Err(PickError::Rejected {
                accept: accept.join(", "),
            });
        }

        let meta = std::fs::metadata(&path).map_err(|_| PickError::NotFound(path.clone()))?;
        if !meta.is_file() {
            return Err(PickError::NotAFile(path));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| trimmed.to_string());

        Ok(Self { name, path })
    }

    /// MIME type sent with the multipart part.
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Some("txt") => "text/plain",
            _ => "application/octet-stream",
        }
    }
}

fn accepts(path: &Path, accept: &[String]) -> bool {
    if accept.is_empty() {
        return true;
    }
    let Some(ext) = path.extension() else {
        return false;
    };
    let ext = format!(".{}", ext.to_string_lossy());
    accept.iter().any(|a| a.eq_ignore_ascii_case(&ext))
}

fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn pdf_only() -> Vec<String> {
        vec![".pdf".to_string()]
    }

    #[test]
    fn picks_existing_pdf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let file = SelectedFile::pick(path.to_str().unwrap(), &pdf_only()).unwrap();
        assert_eq!(file.name, "cv.pdf");
        assert_eq!(file.path, path);
        assert_eq!(file.mime_type(), "application/pdf");
    }

    #[test]
    fn extension_check_ignores_case() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CV.PDF");
        std::fs::write(&path, b"%PDF").unwrap();

        assert!(SelectedFile::pick(path.to_str().unwrap(), &pdf_only()).is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cv.docx");
        std::fs::write(&path, b"PK").unwrap();

        let err = SelectedFile::pick(path.to_str().unwrap(), &pdf_only()).unwrap_err();
        assert_eq!(
            err,
            PickError::Rejected {
                accept: ".pdf".into()
            }
        );
    }

    #[test]
    fn rejects_missing_and_directories() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.pdf");
        assert!(matches!(
            SelectedFile::pick(missing.to_str().unwrap(), &pdf_only()),
            Err(PickError::NotFound(_))
        ));

        let folder = dir.path().join("folder.pdf");
        std::fs::create_dir(&folder).unwrap();
        assert!(matches!(
            SelectedFile::pick(folder.to_str().unwrap(), &pdf_only()),
            Err(PickError::NotAFile(_))
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(SelectedFile::pick("   ", &pdf_only()), Err(PickError::Empty));
    }

    #[test]
    fn empty_accept_list_allows_anything() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes");
        std::fs::write(&path, b"text").unwrap();

        let file = SelectedFile::pick(path.to_str().unwrap(), &[]).unwrap();
        assert_eq!(file.mime_type(), "application/octet-stream");
    }
}
