use serde::Serialize;

use crate::config::MatchMode;

#[derive(Debug, Clone, Serialize)]
pub struct PruneResult {
    /// Classes with at least one removed block, in class-list order
    pub removed_classes: Vec<String>,
    pub original_chars: usize,
    pub final_chars: usize,
    /// Net shrinkage, including newline-collapse savings
    pub chars_removed: usize,
    /// `None` when the original stylesheet was empty
    pub reduction_percent: Option<f64>,
    pub mode: MatchMode,
    /// False under `--dry-run`
    pub written: bool,
}

impl PruneResult {
    pub fn new(
        removed_classes: Vec<String>,
        original_chars: usize,
        final_chars: usize,
        mode: MatchMode,
        written: bool,
    ) -> Self {
        let chars_removed = original_chars.saturating_sub(final_chars);
        let reduction_percent = if original_chars == 0 {
            None
        } else {
            Some(chars_removed as f64 / original_chars as f64 * 100.0)
        };
        Self {
            removed_classes,
            original_chars,
            final_chars,
            chars_removed,
            reduction_percent,
            mode,
            written,
        }
    }
}
