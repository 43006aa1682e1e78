//! Configuration for a text-extraction run.
//!
//! Everything that varies between invocations lives in
//! [`ExtractionConfig`], chosen once before [`crate::extract`] is called and
//! never mutated afterwards. The most consequential knob is the error
//! [`ErrorPolicy`]: the extraction stages themselves are policy-free pure
//! functions, and the orchestrator applies the policy in exactly one place,
//! so strict and lenient runs share every line of extraction code.

use std::path::PathBuf;

/// How extraction failures surface to the caller.
///
/// The policy applies to failures of the image-recognition stage only
/// (decode errors, a missing OCR engine, a failed recognition run — see
/// [`crate::error::ExtractError::recoverable`]). Errors before extraction
/// (bad path, unsupported extension) and PDF open failures are terminal
/// under both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Every failure aborts the run and maps to a non-zero exit code.
    ///
    /// The right choice when a parent process detects failure via the exit
    /// code, which is how this tool is meant to be invoked. Default.
    #[default]
    Strict,

    /// Image-recognition failures degrade to a `warn!` diagnostic and empty
    /// extracted text; the run continues to cleanup and exits 0.
    ///
    /// The right choice when an empty result is more useful to the caller
    /// than no result, e.g. best-effort indexing of mixed document batches.
    Lenient,
}

/// Configuration for a single extraction run.
///
/// # Example
/// ```rust
/// use doc2text::{ErrorPolicy, ExtractionConfig};
///
/// let config = ExtractionConfig::new(ErrorPolicy::Lenient)
///     .with_tesseract_path("/opt/tesseract/bin/tesseract");
/// assert_eq!(config.policy, ErrorPolicy::Lenient);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractionConfig {
    /// Error-handling policy, applied once by the orchestrator.
    pub policy: ErrorPolicy,

    /// Explicit path to the tesseract binary.
    ///
    /// When unset, the engine is located on `PATH`. The recognition
    /// *language* is deliberately not configurable here: tesseract uses
    /// whatever language data the host system has installed
    /// (`TESSDATA_PREFIX`), and that external dependency is documented
    /// rather than wrapped.
    pub tesseract_path: Option<PathBuf>,
}

impl ExtractionConfig {
    /// Config with the given policy and engine discovery on `PATH`.
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            tesseract_path: None,
        }
    }

    /// Use an explicit tesseract binary instead of searching `PATH`.
    pub fn with_tesseract_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tesseract_path = Some(path.into());
        self
    }
}
