//! PDF extraction: embedded text, page by page, via pdfium.
//!
//! ## Why pdfium?
//!
//! Real-world PDFs are a zoo of encodings, broken xref tables, and partial
//! standards compliance; pdfium (the Chromium PDF engine) copes with more of
//! it than any pure-Rust parser currently does. The cost is a shared library
//! loaded at runtime — see [`bind_pdfium`] for the search order.
//!
//! This stage reads the text *layer* only. A scanned PDF with no text layer
//! legitimately produces an empty string; there is no rasterise-and-OCR
//! fallback here, by contract.

use crate::error::ExtractError;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::debug;

/// Bind to a pdfium shared library.
///
/// Search order: the exact file named by `PDFIUM_LIB_PATH`, then a
/// platform-named library in the current directory, then the system
/// library path.
fn bind_pdfium() -> Result<Pdfium, ExtractError> {
    if let Ok(env_path) = std::env::var("PDFIUM_LIB_PATH") {
        return Pdfium::bind_to_library(&env_path)
            .map(Pdfium::new)
            .map_err(|e| {
                ExtractError::PdfiumUnavailable(format!("PDFIUM_LIB_PATH='{env_path}': {e:?}"))
            });
    }

    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| ExtractError::PdfiumUnavailable(format!("{e:?}")))
}

/// Extract the embedded text of every page, concatenated in page order.
///
/// No separator is inserted between pages beyond whatever each page's own
/// text ends with. The document handle lives only within this function and
/// is released when it returns, on success and failure alike.
pub fn extract_pdf_text(path: &Path) -> Result<String, ExtractError> {
    let pdfium = bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_file(path, None)
        .map_err(|e| ExtractError::DocumentOpen {
            path: path.to_path_buf(),
            detail: format!("{e:?}"),
        })?;

    let pages = document.pages();
    debug!("Opened PDF {} ({} pages)", path.display(), pages.len());

    let mut text = String::new();
    for (index, page) in pages.iter().enumerate() {
        let page_text = page.text().map_err(|e| ExtractError::DocumentOpen {
            path: path.to_path_buf(),
            detail: format!("text layer of page {} unreadable: {e:?}", index + 1),
        })?;
        let chunk = page_text.all();
        debug!("Page {} → {} chars", index + 1, chunk.chars().count());
        text.push_str(&chunk);
    }

    Ok(text)
}
