//! Input resolution: validate the user-supplied path and pick a strategy.
//!
//! ## Why classify by extension?
//!
//! The contract is deliberately dumb: the lowercased extension alone decides
//! the strategy, and exactly one strategy runs — no content sniffing, no
//! fallback from one strategy to the other. A scanned PDF with no text layer
//! therefore yields empty text rather than a surprise OCR attempt; the
//! caller named `.pdf`, the caller gets the PDF strategy.

use crate::error::ExtractError;
use std::path::Path;
use tracing::debug;

/// Which extraction strategy a path maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Embedded-text extraction from a paginated document.
    Pdf,
    /// Optical character recognition over a raster image.
    Image,
}

/// Validate that `path` refers to an existing regular file.
///
/// Reads filesystem metadata only; directories and dangling paths both fail
/// with [`ExtractError::FileNotFound`].
pub fn resolve_file(path: &Path) -> Result<(), ExtractError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ExtractError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Classify a path by its lowercased extension.
///
/// `.pdf` maps to [`FileKind::Pdf`]; `.png`, `.jpg`, and `.jpeg` map to
/// [`FileKind::Image`]; anything else — including a missing extension — is
/// [`ExtractError::UnsupportedType`].
pub fn classify(path: &Path) -> Result<FileKind, ExtractError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let kind = match extension.as_str() {
        "pdf" => FileKind::Pdf,
        "png" | "jpg" | "jpeg" => FileKind::Image,
        _ => {
            return Err(ExtractError::UnsupportedType {
                path: path.to_path_buf(),
                extension,
            })
        }
    };

    debug!("Classified {} as {:?}", path.display(), kind);
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_classify_pdf_case_insensitive() {
        assert_eq!(classify(Path::new("report.pdf")).unwrap(), FileKind::Pdf);
        assert_eq!(classify(Path::new("REPORT.PDF")).unwrap(), FileKind::Pdf);
        assert_eq!(classify(Path::new("mixed.Pdf")).unwrap(), FileKind::Pdf);
    }

    #[test]
    fn test_classify_image_variants() {
        for name in ["scan.png", "photo.jpg", "photo.jpeg", "SCAN.PNG", "p.JpEg"] {
            assert_eq!(classify(Path::new(name)).unwrap(), FileKind::Image, "{name}");
        }
    }

    #[test]
    fn test_classify_rejects_unknown_extension() {
        let err = classify(Path::new("notes.txt")).unwrap_err();
        match err {
            ExtractError::UnsupportedType { extension, .. } => assert_eq!(extension, "txt"),
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_rejects_missing_extension() {
        let err = classify(Path::new("/tmp/no_extension")).unwrap_err();
        match err {
            ExtractError::UnsupportedType { extension, .. } => assert_eq!(extension, ""),
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(resolve_file(file.path()).is_ok());
    }

    #[test]
    fn test_resolve_missing_file() {
        let err = resolve_file(Path::new("/definitely/not/here.pdf")).unwrap_err();
        match err {
            ExtractError::FileNotFound { path } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.pdf"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            resolve_file(dir.path()),
            Err(ExtractError::FileNotFound { .. })
        ));
    }
}
