//! Top-level orchestration: one document in, cleaned text out.
//!
//! This module owns the stage wiring and the error policy. The stages
//! themselves (in [`crate::pipeline`]) are policy-free; only here is a
//! recoverable failure allowed to degrade into empty output.

use crate::config::{ErrorPolicy, ExtractionConfig};
use crate::error::ExtractError;
use crate::pipeline::input::FileKind;
use crate::pipeline::{cleanup, input, ocr, pdf};
use std::path::Path;
use tracing::{debug, info, warn};

/// Extract and clean the text of a single document.
///
/// The path is validated and classified by extension, exactly one
/// extraction strategy runs (embedded PDF text or image OCR), and the raw
/// text is passed through the cleanup rules. An empty result is a valid
/// result: a PDF with no text layer or a blank image yields `Ok("")`.
///
/// # Errors
///
/// Path and classification failures ([`ExtractError::FileNotFound`],
/// [`ExtractError::UnsupportedType`]) and PDF failures are returned under
/// both policies. Image-stage failures ([`ExtractError::ImageLoad`],
/// [`ExtractError::OcrEngineUnavailable`], [`ExtractError::OcrFailure`])
/// are returned under [`ErrorPolicy::Strict`] and degrade to a warning plus
/// empty output under [`ErrorPolicy::Lenient`].
///
/// # Examples
///
/// ```rust,no_run
/// use doc2text::{extract, ExtractionConfig};
///
/// # fn main() -> Result<(), doc2text::ExtractError> {
/// let text = extract("report.pdf", &ExtractionConfig::default())?;
/// print!("{text}");
/// # Ok(())
/// # }
/// ```
pub fn extract(path: impl AsRef<Path>, config: &ExtractionConfig) -> Result<String, ExtractError> {
    let path = path.as_ref();

    // ── Stage 1: Input ───────────────────────────────────────────────────
    input::resolve_file(path)?;
    let kind = input::classify(path)?;

    // ── Stage 2: Extraction (exactly one strategy) ───────────────────────
    let raw = match kind {
        FileKind::Pdf => pdf::extract_pdf_text(path)?,
        FileKind::Image => match ocr::extract_image_text(path, config) {
            Ok(text) => text,
            Err(e) if config.policy == ErrorPolicy::Lenient && e.recoverable() => {
                warn!("{e}; continuing with empty output");
                String::new()
            }
            Err(e) => return Err(e),
        },
    };
    debug!(
        "Extracted {} raw chars from {}",
        raw.chars().count(),
        path.display()
    );

    // ── Stage 3: Cleanup ─────────────────────────────────────────────────
    Ok(cleanup::clean_text(&raw))
}

/// Extract and clean, writing the result to `output_path` instead of
/// returning it.
///
/// The write goes to a sibling temp file first and is renamed into place,
/// so a failed run never leaves a truncated output file behind. Parent
/// directories are created as needed. The file carries exactly the cleaned
/// bytes, with no added trailing newline.
pub fn extract_to_file(
    path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<(), ExtractError> {
    let text = extract(path, config)?;
    let output_path = output_path.as_ref();

    let write_err = |source: std::io::Error| ExtractError::OutputWrite {
        path: output_path.to_path_buf(),
        source,
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let tmp_path = output_path.with_extension("txt.tmp");
    std::fs::write(&tmp_path, text.as_bytes()).map_err(write_err)?;
    std::fs::rename(&tmp_path, output_path).map_err(write_err)?;

    info!(
        "Wrote {} bytes to {}",
        text.len(),
        output_path.display()
    );
    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_is_not_found() {
        let config = ExtractionConfig::default();
        let err = extract("/no/such/place/report.pdf", &config).unwrap_err();
        assert!(matches!(err, ExtractError::FileNotFound { .. }));
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "plain text").unwrap();

        let config = ExtractionConfig::default();
        let err = extract(&path, &config).unwrap_err();
        match err {
            ExtractError::UnsupportedType { extension, .. } => assert_eq!(extension, "txt"),
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_resolution_precedes_classification() {
        // A missing file with a bad extension reports the missing file,
        // not the extension.
        let config = ExtractionConfig::default();
        let err = extract("/no/such/place/notes.txt", &config).unwrap_err();
        assert!(matches!(err, ExtractError::FileNotFound { .. }));
    }

    #[test]
    fn test_failed_extraction_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("deep/nested/out.txt");

        let config = ExtractionConfig::default();
        let err = extract_to_file("/no/such/input.pdf", &output, &config).unwrap_err();
        assert!(matches!(err, ExtractError::FileNotFound { .. }));
        assert!(!output.exists(), "no output file on a failed run");
    }
}
