//! Text cleanup: deterministic normalisation of raw extracted text.
//!
//! ## Why clean at all?
//!
//! Neither extraction strategy produces text a human would call tidy. PDF
//! text layers carry runs of blank lines and doubled spaces left over from
//! justified layout; OCR output does the same and routinely loses the space
//! after a sentence-ending period. The rules here fix the worst of it
//! without attempting layout reconstruction.
//!
//! ## Rule order
//!
//! [`RULES`] is an ordered table of pure `&str → String` rewrites; each rule
//! runs over the previous rule's output, and the order is part of the
//! contract. The composite is idempotent — re-cleaning cleaned text is a
//! no-op. The final trim is not a rule; it acts once on the end result.
//!
//! The sentence-spacing rule is a syntactic heuristic, not sentence-boundary
//! detection: it happily splits `"e.g.x"` into `"e. g. x"` and leaves
//! `"3.14"` alone only because a digit follows the period. That trade-off is
//! deliberate — downstream consumers get a predictable rewrite, not a
//! cleverer one.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// A single pure rewrite pass.
type CleanupRule = fn(&str) -> String;

/// The cleanup pipeline, in execution order.
const RULES: &[(&str, CleanupRule)] = &[
    ("collapse-blank-lines", collapse_blank_line_runs),
    ("collapse-space-runs", collapse_space_runs),
    ("sentence-spacing", space_after_period),
];

/// Apply every cleanup rule in order, then trim the result.
///
/// Pure function: no I/O, no external state, deterministic and idempotent
/// for any input.
pub fn clean_text(input: &str) -> String {
    let mut text = input.to_owned();
    for (name, rule) in RULES {
        let before = text.len();
        text = rule(&text);
        trace!("cleanup rule {} applied ({} → {} bytes)", name, before, text.len());
    }
    text.trim().to_string()
}

// ── Rule 1: collapse blank-line runs ─────────────────────────────────────────

static RE_BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// A newline, any whitespace (including further newlines), and another
/// newline become exactly two newlines: at most one fully blank line
/// survives between paragraphs, and lines containing only whitespace
/// become genuinely blank.
fn collapse_blank_line_runs(input: &str) -> String {
    RE_BLANK_RUNS.replace_all(input, "\n\n").to_string()
}

// ── Rule 2: collapse horizontal space runs ───────────────────────────────────

static RE_SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// Two or more consecutive spaces become one. Spaces only — tabs and
/// newlines pass through untouched.
fn collapse_space_runs(input: &str) -> String {
    RE_SPACE_RUNS.replace_all(input, " ").to_string()
}

// ── Rule 3: sentence-boundary spacing ────────────────────────────────────────

static RE_PERIOD_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.([a-zA-Z])").unwrap());

/// A period immediately followed by an ASCII letter gains a single space
/// between them (`"end.Next"` → `"end. Next"`).
fn space_after_period(input: &str) -> String {
    RE_PERIOD_LETTER.replace_all(input, ". $1").to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────────
