//! End-to-end integration tests for doc2text.
//!
//! The policy and error-taxonomy tests run everywhere: they synthesise
//! their own fixtures and never need an extraction engine. Tests that do
//! need a real pdfium library or tesseract binary are gated behind the
//! `E2E_ENABLED` environment variable plus fixture presence, so a plain
//! `cargo test` passes on machines without either engine.
//!
//! Run the full suite with:
//!   E2E_ENABLED=1 cargo test --test e2e -- --nocapture

use doc2text::{extract, extract_to_file, ErrorPolicy, ExtractError, ExtractionConfig};
use std::fs;
use std::path::{Path, PathBuf};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_cases")
}

/// Route library diagnostics to the test harness for `--nocapture` runs.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// Skip this test if E2E_ENABLED is not set *or* no fixture at `path`.
macro_rules! e2e_skip_unless_ready {
    ($path:expr) => {{
        if std::env::var("E2E_ENABLED").is_err() {
            println!("SKIP — set E2E_ENABLED=1 to run engine-backed tests");
            return;
        }
        let p: PathBuf = $path;
        if !p.exists() {
            println!("SKIP — fixture not found: {}", p.display());
            println!("       Add a text-bearing fixture there to exercise the real engine");
            return;
        }
        p
    }};
}

/// A config whose OCR engine lookup is guaranteed to fail.
fn config_without_engine(policy: ErrorPolicy) -> ExtractionConfig {
    ExtractionConfig::new(policy).with_tesseract_path("/definitely/not/a/tesseract")
}

/// Write a small white PNG the image decoder accepts.
fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    image::RgbaImage::from_pixel(32, 32, image::Rgba([255, 255, 255, 255]))
        .save(&path)
        .expect("writing test PNG");
    path
}

/// Assert the cleanup invariants hold for extractor output.
fn assert_cleaned(text: &str, context: &str) {
    assert_eq!(
        text,
        text.trim(),
        "[{context}] output must carry no leading/trailing whitespace"
    );
    assert!(
        !text.contains("  "),
        "[{context}] output must not contain runs of spaces"
    );
    assert!(
        !text.contains("\n\n\n"),
        "[{context}] output must not contain runs of blank lines"
    );
    assert_eq!(
        doc2text::clean_text(text),
        text,
        "[{context}] cleanup must be idempotent over its own output"
    );
}

// ── Error taxonomy (no engines needed) ───────────────────────────────────────

#[test]
fn test_missing_file_reports_not_found() {
    let err = extract("/no/such/place/report.pdf", &ExtractionConfig::default()).unwrap_err();
    assert!(matches!(err, ExtractError::FileNotFound { .. }));
    assert!(err.to_string().contains("/no/such/place/report.pdf"));
}

#[test]
fn test_missing_file_wins_over_unsupported_extension() {
    let err = extract("/no/such/place/report.docx", &ExtractionConfig::default()).unwrap_err();
    assert!(matches!(err, ExtractError::FileNotFound { .. }));
}

#[test]
fn test_unsupported_type_names_the_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.docx");
    fs::write(&path, b"PK\x03\x04").unwrap();

    let err = extract(&path, &ExtractionConfig::default()).unwrap_err();
    match err {
        ExtractError::UnsupportedType { extension, .. } => assert_eq!(extension, "docx"),
        other => panic!("expected UnsupportedType, got {other:?}"),
    }
}

#[test]
fn test_extension_match_is_case_insensitive() {
    // An uppercase .PNG must reach the image stage; since the bytes are not
    // a PNG, that stage fails with ImageLoad rather than UnsupportedType.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SCAN.PNG");
    fs::write(&path, b"not a png").unwrap();

    let err = extract(&path, &ExtractionConfig::default()).unwrap_err();
    assert!(matches!(err, ExtractError::ImageLoad { .. }));
}

// ── Policy matrix ────────────────────────────────────────────────────────────

#[test]
fn test_strict_policy_propagates_missing_engine() {
    let dir = tempfile::tempdir().unwrap();
    let img = write_png(dir.path(), "scan.png");

    let err = extract(&img, &config_without_engine(ErrorPolicy::Strict)).unwrap_err();
    assert!(matches!(err, ExtractError::OcrEngineUnavailable { .. }));
}

#[test]
fn test_lenient_policy_degrades_missing_engine_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let img = write_png(dir.path(), "scan.png");

    let text = extract(&img, &config_without_engine(ErrorPolicy::Lenient)).unwrap();
    assert_eq!(text, "");
}

#[test]
fn test_lenient_policy_degrades_undecodable_image_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.jpg");
    fs::write(&path, b"not a jpeg").unwrap();

    let text = extract(&path, &config_without_engine(ErrorPolicy::Lenient)).unwrap();
    assert_eq!(text, "");
}

#[test]
fn test_lenient_policy_still_fails_on_missing_file() {
    let err = extract(
        "/no/such/place/scan.png",
        &config_without_engine(ErrorPolicy::Lenient),
    )
    .unwrap_err();
    assert!(matches!(err, ExtractError::FileNotFound { .. }));
}

#[test]
fn test_lenient_policy_still_fails_on_unsupported_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "plain text").unwrap();

    let err = extract(&path, &config_without_engine(ErrorPolicy::Lenient)).unwrap_err();
    assert!(matches!(err, ExtractError::UnsupportedType { .. }));
}

// ── File sink ────────────────────────────────────────────────────────────────

#[test]
fn test_extract_to_file_writes_exactly_the_cleaned_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let img = write_png(dir.path(), "scan.png");
    let output = dir.path().join("nested/out.txt");

    // Lenient + missing engine degrades to empty text, which still counts
    // as a successful extraction and must produce the output file.
    extract_to_file(&img, &output, &config_without_engine(ErrorPolicy::Lenient)).unwrap();

    let written = fs::read(&output).unwrap();
    assert_eq!(written, b"", "empty result writes an empty file, no newline");
}

// ── Engine-backed tests (gated) ──────────────────────────────────────────────

#[test]
fn test_extract_pdf_fixture() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.pdf"));
    init_tracing();

    let text = extract(&path, &ExtractionConfig::default()).expect("extract() should succeed");

    assert!(!text.is_empty(), "fixture PDF should carry a text layer");
    assert_cleaned(&text, "sample.pdf");
    println!("[sample.pdf] ✓  {} bytes extracted", text.len());
}

#[test]
fn test_extract_image_fixture_with_real_tesseract() {
    let path = e2e_skip_unless_ready!(test_cases_dir().join("sample.png"));
    if which::which("tesseract").is_err() {
        println!("SKIP — tesseract not found on PATH");
        return;
    }
    init_tracing();

    let text = extract(&path, &ExtractionConfig::default()).expect("OCR should succeed");

    assert!(!text.is_empty(), "fixture image should carry printed text");
    assert_cleaned(&text, "sample.png");
    println!("[sample.png] ✓  {} bytes recognised", text.len());
}
