/// Class list read when no `--class-list` is given.
pub const DEFAULT_CLASS_LIST_PATH: &str = "safe_to_remove_classes.txt";

/// Stylesheet pruned in place when no `--stylesheet` is given.
pub const DEFAULT_STYLESHEET_PATH: &str = "style.css";

/// Body of a rule block allowing one level of inner braces.
/// Inner groups may repeat but may not nest further.
pub const ONE_LEVEL_BLOCK_PATTERN: &str = r"\{[^{}]*(?:\{[^{}]*\}[^{}]*)*\}";

/// A CRLF pair or a lone carriage return.
pub const LINE_ENDING_PATTERN: &str = r"\r\n?";

/// Three or more consecutive newlines.
pub const NEWLINE_RUN_PATTERN: &str = r"\n{3,}";
