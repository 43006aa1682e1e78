//! Pipeline stages for document text extraction.
//!
//! Each submodule implements exactly one stage. Stages know nothing about
//! the error policy or the output channel; the orchestrator in
//! [`crate::extract`] wires them together.
//!
//! ```text
//! path ──▶ input ──┬─▶ pdf (embedded text) ──┬─▶ cleanup ──▶ caller
//!      (classify)  └─▶ ocr (tesseract) ──────┘
//! ```
//!
//! 1. [`input`] — validate the path exists, classify it by extension
//! 2. [`pdf`] — concatenate per-page embedded text via pdfium
//! 3. [`ocr`] — recognise text in a raster image with the system tesseract
//! 4. [`cleanup`] — ordered, pure rewrite rules over the raw text
//!
//! A document runs through exactly one of [`pdf`] and [`ocr`], never both.

pub mod cleanup;
pub mod input;
pub mod ocr;
pub mod pdf;
