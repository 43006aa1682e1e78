//! CLI binary for doc2text.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExtractionConfig`, runs the extraction, and writes the cleaned bytes to
//! stdout or a file. Exit code 0 means the text (possibly empty) was
//! produced; any failure, including bad arguments, exits 1.

use anyhow::{Context, Result};
use clap::Parser;
use doc2text::{extract, extract_to_file, ErrorPolicy, ExtractionConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Embedded PDF text to stdout
  doc2text report.pdf

  # OCR a scanned page (needs tesseract on PATH)
  doc2text scan.png

  # Degrade to empty output when the OCR engine is missing
  doc2text --policy lenient scan.jpg

  # Write to a file instead of stdout
  doc2text report.pdf -o report.txt

EXIT CODES:
  0  extraction and cleanup succeeded (the result may legitimately be empty)
  1  any failure: missing file, unsupported type, unreadable document,
     missing OCR engine under the strict policy, bad arguments

OUTPUT CONTRACT:
  stdout carries exactly the cleaned text as UTF-8 bytes, written once, with
  no added trailing newline. Nothing else is ever written there, so a parent
  process can consume stdout verbatim. All diagnostics go to stderr.

ENVIRONMENT VARIABLES:
  DOC2TEXT_POLICY     strict | lenient (same as --policy)
  DOC2TEXT_TESSERACT  Path to the tesseract binary (same as --tesseract)
  DOC2TEXT_OUTPUT     Output file (same as --output)
  PDFIUM_LIB_PATH     Path to an existing libpdfium shared library
  TESSDATA_PREFIX     Standard tesseract variable; selects the language data
                      OCR recognises with (doc2text never passes -l)

SETUP:
  PDF:  install a pdfium shared library (distro package, or a build from
        bblanchon/pdfium-binaries) somewhere bind-able, or point
        PDFIUM_LIB_PATH at it.
  OCR:  install tesseract plus the language data you need; doc2text runs
        the binary with its defaults and reads its stdout.
"#;

/// Extract cleaned text from a PDF or image document.
#[derive(Parser, Debug)]
#[command(
    name = "doc2text",
    version,
    about = "Extract cleaned text from a PDF or image document",
    long_about = "Extract the text of a single document and print a lightly cleaned version of \
it. PDFs yield their embedded text layer; PNG/JPEG images go through the system tesseract OCR \
engine. Built to be driven as a subprocess: stdout is data, stderr is diagnostics, the exit \
code is the verdict.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the document (.pdf, .png, .jpg, .jpeg).
    input: PathBuf,

    /// Write the cleaned text to this file instead of stdout.
    #[arg(short, long, env = "DOC2TEXT_OUTPUT")]
    output: Option<PathBuf>,

    /// Error policy for the image-recognition stage: strict, lenient.
    #[arg(
        long,
        env = "DOC2TEXT_POLICY",
        value_enum,
        default_value = "strict",
        long_help = "strict: every failure aborts with exit code 1.\n\
lenient: image decode and OCR failures degrade to a warning, empty output, and exit code 0;\n\
missing files, unsupported types, and unreadable PDFs still fail."
    )]
    policy: PolicyArg,

    /// Explicit path to the tesseract binary (default: search PATH).
    #[arg(long, env = "DOC2TEXT_TESSERACT")]
    tesseract: Option<PathBuf>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "DOC2TEXT_VERBOSE")]
    verbose: bool,

    /// Suppress all diagnostics except errors.
    #[arg(short, long, env = "DOC2TEXT_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Strict,
    Lenient,
}

impl From<PolicyArg> for ErrorPolicy {
    fn from(v: PolicyArg) -> Self {
        match v {
            PolicyArg::Strict => ErrorPolicy::Strict,
            PolicyArg::Lenient => ErrorPolicy::Lenient,
        }
    }
}

fn main() -> ExitCode {
    // Parent processes key off "non-zero means failure", so clap's default
    // usage-error exit code of 2 is folded into 1 here. --help and
    // --version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let failed = e.use_stderr();
            let _ = e.print();
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── Logging setup ────────────────────────────────────────────────────
    // Diagnostics go to stderr only; stdout is reserved for the extracted
    // text. RUST_LOG overrides the flag-derived default.
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = ExtractionConfig::new(cli.policy.into());
    if let Some(ref tesseract) = cli.tesseract {
        config = config.with_tesseract_path(tesseract);
    }

    if let Some(ref output_path) = cli.output {
        extract_to_file(&cli.input, output_path, &config)?;
    } else {
        let text = extract(&cli.input, &config)?;

        // The cleaned bytes, written exactly once, with no added trailing
        // newline. A parent process reads stdout verbatim.
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(text.as_bytes())
            .context("Failed to write to stdout")?;
        handle.flush().context("Failed to flush stdout")?;
    }

    Ok(())
}
