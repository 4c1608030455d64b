//! Removes unused CSS class rules from a stylesheet.
//!
//! Class names come from a plain-text list, one per line. Each top-level
//! `.<class> { ... }` block whose selector is exactly that class is deleted,
//! runs of blank lines left behind are collapsed, and the stylesheet is
//! rewritten in place. Whether a class is really unused is decided upstream.
//!
//! # Examples
//!
//! ```no_run
//! use cssprune_core::{Config, run_prune};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::default();
//! let mut stdout = BufWriter::new(std::io::stdout());
//!
//! let result = run_prune(&cfg, &mut stdout)?;
//! cssprune_core::print_summary(&mut stdout, &result)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod class_list;
mod collapse;
mod config;
mod constants;
mod matcher;
mod pruner;
mod reporter;
mod types;

// Re-export public API
pub use class_list::{load_class_list, parse_class_list};
pub use collapse::{collapse_newlines, normalize_line_endings};
pub use config::{Config, MatchMode};
pub use constants::{DEFAULT_CLASS_LIST_PATH, DEFAULT_STYLESHEET_PATH};
pub use matcher::{Removal, fast_rule, find_rule_spans, remove_class};
pub use pruner::run_prune;
pub use reporter::{print_dry_run_note, print_json_report, print_removing, print_summary};
pub use types::PruneResult;
