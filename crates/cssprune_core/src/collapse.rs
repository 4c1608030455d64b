use log::trace;
use regex::Regex;
use std::sync::OnceLock;

use crate::constants::{LINE_ENDING_PATTERN, NEWLINE_RUN_PATTERN};

fn newline_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NEWLINE_RUN_PATTERN).expect("newline pattern is valid"))
}

fn line_ending() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LINE_ENDING_PATTERN).expect("line ending pattern is valid"))
}

/// Rewrites `\r\n` and lone `\r` line endings as `\n`.
pub fn normalize_line_endings(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    let normalized = line_ending().replace_all(&text, "\n").into_owned();
    trace!("Normalized line endings: {} -> {} bytes", text.len(), normalized.len());
    normalized
}

/// Replaces every run of three or more `\n` with exactly two.
pub fn collapse_newlines(css: &str) -> String {
    let collapsed = newline_run().replace_all(css, "\n\n").into_owned();
    trace!("Collapsed newlines: {} -> {} bytes", css.len(), collapsed.len());
    collapsed
}
