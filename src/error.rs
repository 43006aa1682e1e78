//! Error types for the doc2text library.
//!
//! Every failure is terminal for the invocation — nothing is retried. What a
//! caller controls is *how* a failure surfaces: under
//! [`crate::config::ErrorPolicy::Strict`] every variant propagates, while
//! [`crate::config::ErrorPolicy::Lenient`] downgrades the image-recognition
//! variants (see [`ExtractError::recoverable`]) to a warning plus empty
//! output, so a parent process reading stdout still gets a well-formed
//! (empty) result and exit code 0.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the doc2text library.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input path does not refer to an existing regular file.
    #[error("Document not found: '{path}'\nCheck the path exists and is a regular file.")]
    FileNotFound { path: PathBuf },

    /// The file extension maps to no extraction strategy.
    #[error(
        "Unsupported file type '{extension}' for '{path}'\nSupported extensions: .pdf, .png, .jpg, .jpeg"
    )]
    UnsupportedType { path: PathBuf, extension: String },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// The file could not be opened or parsed as a PDF document.
    #[error("Failed to open PDF '{path}': {detail}\nThe file may be corrupt, truncated, or not a PDF at all.")]
    DocumentOpen { path: PathBuf, detail: String },

    /// Could not bind to a pdfium shared library at startup.
    #[error(
        "Failed to bind to the pdfium library: {0}\n\n\
The PDF engine is loaded at runtime. Either:\n\
  • Install libpdfium where the dynamic linker can find it, or\n\
  • Set PDFIUM_LIB_PATH=/path/to/libpdfium, or\n\
  • Place the pdfium shared library next to the doc2text executable.\n"
    )]
    PdfiumUnavailable(String),

    // ── Image / OCR errors ────────────────────────────────────────────────
    /// The input image could not be decoded.
    #[error("Failed to decode image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// No usable OCR engine binary was found.
    #[error(
        "OCR engine unavailable: {detail}\nInstall tesseract (e.g. apt install tesseract-ocr) or pass an explicit binary with --tesseract."
    )]
    OcrEngineUnavailable { detail: String },

    /// The OCR engine ran but recognition failed.
    #[error("OCR failed: {detail}")]
    OcrFailure { detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output file requested with `--output`.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// Whether the lenient policy may downgrade this failure to empty output.
    ///
    /// True only for failures of the image-recognition stage. Input errors,
    /// unreadable PDFs, and a missing pdfium library are terminal under both
    /// policies.
    pub fn recoverable(&self) -> bool {
        matches!(
            self,
            ExtractError::ImageLoad { .. }
                | ExtractError::OcrEngineUnavailable { .. }
                | ExtractError::OcrFailure { .. }
        )
    }
}
