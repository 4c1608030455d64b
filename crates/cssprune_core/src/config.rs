use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use crate::constants::{DEFAULT_CLASS_LIST_PATH, DEFAULT_STYLESHEET_PATH};

/// How a `.<class> { ... }` block is located in the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Track brace depth so blocks with any amount of nesting are consumed whole
    #[default]
    Balanced,
    /// Single regex per class; only one level of inner braces is recognized
    Fast,
}

#[derive(Debug, Clone, Parser)]
pub struct Config {
    /// File with one class name per line (no leading dot)
    #[arg(long, default_value = DEFAULT_CLASS_LIST_PATH)]
    pub class_list: PathBuf,

    /// Stylesheet to prune; overwritten in place
    #[arg(long, default_value = DEFAULT_STYLESHEET_PATH)]
    pub stylesheet: PathBuf,

    /// Block matching strategy
    #[arg(long, value_enum, default_value_t = MatchMode::Balanced)]
    pub mode: MatchMode,

    /// Report what would be removed without touching the stylesheet
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_list: PathBuf::from(DEFAULT_CLASS_LIST_PATH),
            stylesheet: PathBuf::from(DEFAULT_STYLESHEET_PATH),
            mode: MatchMode::default(),
            dry_run: false,
        }
    }
}
