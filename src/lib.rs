//! # doc2text
//!
//! Extract the text of a single document (PDF or raster image) and return a
//! lightly cleaned version of it.
//!
//! ## Why this crate?
//!
//! Document ingestion pipelines keep re-growing the same shim: take a file a
//! user uploaded, figure out what it is, pull the text out, tidy the
//! whitespace, hand the result to the next stage. This crate is that shim
//! done once — PDFs yield their embedded text layer via pdfium, PNG/JPEG
//! images go through the system tesseract OCR engine, and one set of cleanup
//! rules normalises whatever comes out. The `doc2text` binary wraps the
//! library for callers that would rather spawn a subprocess and read stdout.
//!
//! ## Pipeline Overview
//!
//! ```text
//! document
//!  │
//!  ├─ 1. Input    validate the path, classify by extension
//!  ├─ 2. Extract  embedded PDF text (pdfium) or image OCR (tesseract)
//!  ├─ 3. Cleanup  ordered rewrite rules: blank lines, spaces, sentences
//!  └─ 4. Output   cleaned UTF-8 text, possibly empty, never decorated
//! ```
//!
//! Exactly one extraction strategy runs per document; a scanned PDF is *not*
//! re-routed through OCR.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doc2text::{extract, ExtractionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractionConfig::default();
//!     let text = extract("report.pdf", &config)?;
//!     print!("{text}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Policy
//!
//! | Policy    | Image decode / OCR failure        | Everything else |
//! |-----------|-----------------------------------|-----------------|
//! | `Strict`  | returned as an error              | returned as an error |
//! | `Lenient` | logged warning, empty text result | returned as an error |
//!
//! [`ErrorPolicy::Lenient`] exists for batch callers that prefer a blank
//! entry over a halted run when a host has no OCR engine. Missing files,
//! unsupported extensions, and unreadable PDFs fail under both policies.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `doc2text` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! doc2text = { version = "0.2", default-features = false }
//! ```
//!
//! ## External Engines
//!
//! PDF extraction binds the pdfium shared library at runtime; set
//! `PDFIUM_LIB_PATH` to point at a specific build, otherwise the current
//! directory and then the system library path are searched. OCR shells out
//! to the `tesseract` binary found on `PATH` (or named explicitly via
//! [`ExtractionConfig::with_tesseract_path`]); the recognition language is
//! whatever language data that installation provides.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ErrorPolicy, ExtractionConfig};
pub use error::ExtractError;
pub use extract::{extract, extract_to_file};
pub use pipeline::cleanup::clean_text;
pub use pipeline::input::FileKind;
