use anyhow::{Context, Result};
use log::trace;
use regex::Regex;
use std::ops::Range;

use crate::{config::MatchMode, constants::ONE_LEVEL_BLOCK_PATTERN};

/// Rewritten buffer after removing at least one block of a class.
#[derive(Debug, Clone)]
pub struct Removal {
    pub css: String,
    pub matches: usize,
}

/// Builds the regex for `.<class_name>` followed by optional whitespace and a
/// block with at most one level of inner braces. The name is matched literally.
pub fn fast_rule(class_name: &str) -> Result<Regex> {
    let pattern = format!(r"\.{}\s*{}", regex::escape(class_name), ONE_LEVEL_BLOCK_PATTERN);
    trace!("Rule pattern for '{}': {}", class_name, pattern);
    Regex::new(&pattern).with_context(|| format!("Failed to build rule for class '{}'", class_name))
}

/// Byte ranges of every non-overlapping `.<class_name> { ... }` block, in order.
pub fn find_rule_spans(css: &str, class_name: &str, mode: MatchMode) -> Result<Vec<Range<usize>>> {
    match mode {
        MatchMode::Fast => Ok(fast_rule(class_name)?.find_iter(css).map(|m| m.range()).collect()),
        MatchMode::Balanced => Ok(balanced_rule_spans(css, class_name)),
    }
}

/// Deletes every `.<class_name> { ... }` block from `css`.
///
/// Returns `None` when the class has no block, leaving `css` as it is.
pub fn remove_class(css: &str, class_name: &str, mode: MatchMode) -> Result<Option<Removal>> {
    let spans = find_rule_spans(css, class_name, mode)?;
    if spans.is_empty() {
        return Ok(None);
    }

    let removed: usize = spans.iter().map(|s| s.len()).sum();
    let mut out = String::with_capacity(css.len() - removed);
    let mut last = 0;
    for span in &spans {
        out.push_str(&css[last..span.start]);
        last = span.end;
    }
    out.push_str(&css[last..]);

    trace!("Removed {} block(s) of '{}' ({} bytes)", spans.len(), class_name, removed);
    Ok(Some(Removal { css: out, matches: spans.len() }))
}

fn balanced_rule_spans(css: &str, class_name: &str) -> Vec<Range<usize>> {
    let needle = format!(".{}", class_name);
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(found) = css[pos..].find(&needle) {
        let start = pos + found;
        let after_name = &css[start + needle.len()..];
        let body = after_name.trim_start();
        let open = start + needle.len() + (after_name.len() - body.len());

        if body.starts_with('{')
            && let Some(close) = matching_brace(css, open)
        {
            spans.push(start..close + 1);
            pos = close + 1;
            continue;
        }

        pos = start + 1;
    }

    spans
}

/// Index of the `}` closing the `{` at `open`, or `None` if the block never closes.
fn matching_brace(css: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, byte) in css.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}
