use anyhow::{Context, Result};
use log::{debug, trace};
use std::{fs, path::Path};

use crate::collapse::normalize_line_endings;

/// Splits a class list into names, one per line.
///
/// Surrounding whitespace is stripped and blank lines are skipped. Order and
/// duplicates are preserved.
pub fn parse_class_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            trace!("Class list entry: '{}'", line);
            line.to_string()
        })
        .collect()
}

pub fn load_class_list(path: &Path) -> Result<Vec<String>> {
    debug!("Reading class list from {}", path.display());
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let classes = parse_class_list(&normalize_line_endings(text));
    debug!("Loaded {} class names", classes.len());
    Ok(classes)
}
