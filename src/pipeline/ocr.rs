//! Image OCR: recognise text in a raster image with the system tesseract.
//!
//! ## Why shell out?
//!
//! Linking the tesseract C API drags leptonica headers into the build and
//! pins a specific soname; the `tesseract` CLI is stable across versions,
//! ships with every distro package, and prints recognised text straight to
//! stdout. Running the binary also makes "engine availability" well defined:
//! the engine is unavailable exactly when the binary cannot be found.
//!
//! The recognition language is whatever language data the host installation
//! provides. It is deliberately not a parameter here; set `TESSDATA_PREFIX`
//! or install the relevant traineddata instead.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Recognise text in the image at `path`.
///
/// Stage order: announce the attempt on the diagnostic channel, decode the
/// image, re-encode it to a scratch PNG, resolve the engine binary, run it
/// with its default language and segmentation. The scratch file is removed
/// when this function returns.
pub fn extract_image_text(path: &Path, config: &ExtractionConfig) -> Result<String, ExtractError> {
    info!("Attempting OCR on image: {}", path.display());

    let img = image::open(path).map_err(|e| ExtractError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(
        "Decoded image {} ({}x{} px)",
        path.display(),
        img.width(),
        img.height()
    );

    // tesseract reads files, not pixel buffers; hand it a freshly encoded
    // PNG so the engine never sees an exotic container.
    let scratch = tempfile::Builder::new()
        .prefix("doc2text-ocr-")
        .suffix(".png")
        .tempfile()
        .map_err(|e| ExtractError::OcrFailure {
            detail: format!("could not create scratch image: {e}"),
        })?;
    img.save_with_format(scratch.path(), image::ImageFormat::Png)
        .map_err(|e| ExtractError::OcrFailure {
            detail: format!("could not write scratch image: {e}"),
        })?;

    let engine = resolve_engine(config)?;
    run_engine(&engine, scratch.path())
}

/// Locate the tesseract binary: explicit override first, then `PATH`.
///
/// An override that points at nothing is an error rather than a silent
/// fallback, so a misconfigured path never masquerades as "engine found".
fn resolve_engine(config: &ExtractionConfig) -> Result<PathBuf, ExtractError> {
    if let Some(configured) = &config.tesseract_path {
        if configured.is_file() {
            return Ok(configured.clone());
        }
        return Err(ExtractError::OcrEngineUnavailable {
            detail: format!("configured binary '{}' does not exist", configured.display()),
        });
    }

    which::which("tesseract").map_err(|e| ExtractError::OcrEngineUnavailable {
        detail: format!("tesseract not found on PATH ({e})"),
    })
}

/// Run `tesseract <image> stdout` and capture the recognised text.
///
/// No `-l` and no `--psm`: the engine's default language data and automatic
/// page segmentation apply to the whole image.
fn run_engine(engine: &Path, image_path: &Path) -> Result<String, ExtractError> {
    debug!("Running {} on {}", engine.display(), image_path.display());

    let output = Command::new(engine)
        .arg(image_path)
        .arg("stdout")
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExtractError::OcrEngineUnavailable {
                detail: format!("'{}' could not be executed: {e}", engine.display()),
            },
            _ => ExtractError::OcrFailure {
                detail: format!("failed to run '{}': {e}", engine.display()),
            },
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExtractError::OcrFailure {
            detail: format!("engine exited with {}: {}", output.status, stderr.trim()),
        });
    }

    // tesseract prints resolution estimates and dictionary warnings to
    // stderr even on success; that is chatter, not failure.
    if !output.stderr.is_empty() {
        debug!(
            "Engine stderr: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

// ── Tests ────────────────────────────────────────────────────────────────────
