use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use std::{fs, io::Write};

use crate::{
    class_list::load_class_list,
    collapse::{collapse_newlines, normalize_line_endings},
    config::Config,
    matcher::remove_class,
    reporter::print_removing,
    types::PruneResult,
};

/// Removes every listed class rule from the stylesheet and rewrites it in place.
///
/// A `Removing class: .<name>` line is written to `progress` for each class
/// that had at least one block. Names are applied in list order, so a later
/// duplicate is a no-op. After all removals, newline runs are collapsed once.
///
/// Line endings are read as `\n` (CRLF and lone CR included) and written back
/// as `\n`; sizes are counted after that normalization.
///
/// The stylesheet is overwritten directly (no backup, no atomic rename) unless
/// `cfg.dry_run` is set. Any I/O failure aborts the run.
pub fn run_prune<W: Write>(cfg: &Config, progress: &mut W) -> Result<PruneResult> {
    info!("Starting CSS class prune ({:?} mode)", cfg.mode);

    let classes = load_class_list(&cfg.class_list)?;
    if classes.is_empty() {
        warn!("No class names found in {}", cfg.class_list.display());
    }

    debug!("Reading stylesheet from {}", cfg.stylesheet.display());
    let original = fs::read_to_string(&cfg.stylesheet)
        .with_context(|| format!("Failed to read {}", cfg.stylesheet.display()))?;
    let original = normalize_line_endings(original);
    let original_chars = original.chars().count();
    info!("Loaded {} ({} characters)", cfg.stylesheet.display(), original_chars);

    let mut css = original;
    let mut removed_classes = Vec::new();

    for class_name in &classes {
        trace!("Checking class: '{}'", class_name);
        if let Some(removal) = remove_class(&css, class_name, cfg.mode)? {
            debug!("Class '{}' matched {} block(s)", class_name, removal.matches);
            print_removing(progress, class_name)?;
            removed_classes.push(class_name.clone());
            css = removal.css;
        }
    }

    let css = collapse_newlines(&css);
    let final_chars = css.chars().count();

    if cfg.dry_run {
        info!("Dry run, leaving {} untouched", cfg.stylesheet.display());
    } else {
        debug!("Writing {} characters to {}", final_chars, cfg.stylesheet.display());
        fs::write(&cfg.stylesheet, &css)
            .with_context(|| format!("Failed to write {}", cfg.stylesheet.display()))?;
    }

    info!("Prune complete. Removed {} of {} classes", removed_classes.len(), classes.len());
    Ok(PruneResult::new(removed_classes, original_chars, final_chars, cfg.mode, !cfg.dry_run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchMode;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn test_config(dir: &Path, classes: &str, css: &str) -> Config {
        Config {
            class_list: create_test_file(dir, "safe_to_remove_classes.txt", classes),
            stylesheet: create_test_file(dir, "style.css", css),
            ..Config::default()
        }
    }

    #[test]
    fn test_removes_listed_classes_and_rewrites_file() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = test_config(
            temp_dir.path(),
            "unused\nmissing\n",
            ".keep { a: b; }\n\n.unused {\n  color: red;\n}\n\n.other { c: d; }\n",
        );

        let mut progress = Vec::new();
        let result = run_prune(&cfg, &mut progress).unwrap();

        assert_eq!(result.removed_classes, vec!["unused"]);
        assert!(result.written);
        assert_eq!(String::from_utf8(progress).unwrap(), "Removing class: .unused\n");

        let written = fs::read_to_string(&cfg.stylesheet).unwrap();
        assert_eq!(written, ".keep { a: b; }\n\n.other { c: d; }\n");
        assert_eq!(result.final_chars, written.chars().count());
        assert_eq!(result.chars_removed, result.original_chars - result.final_chars);
    }

    #[test]
    fn test_second_run_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = test_config(
            temp_dir.path(),
            "a\nb\n",
            ".a { x: 1; }\n\n\n\n.b { { y: 2; } }\n.c { z: 3; }\n",
        );

        run_prune(&cfg, &mut Vec::new()).unwrap();
        let after_first = fs::read(&cfg.stylesheet).unwrap();

        let mut progress = Vec::new();
        let second = run_prune(&cfg, &mut progress).unwrap();
        let after_second = fs::read(&cfg.stylesheet).unwrap();

        assert!(second.removed_classes.is_empty());
        assert!(progress.is_empty());
        assert_eq!(second.chars_removed, 0);
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_second_run_is_noop_fast_mode() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg = test_config(temp_dir.path(), "a\n", ".a { x: 1; }\n\n\n.b {}\n");
        cfg.mode = MatchMode::Fast;

        run_prune(&cfg, &mut Vec::new()).unwrap();
        let after_first = fs::read(&cfg.stylesheet).unwrap();
        let second = run_prune(&cfg, &mut Vec::new()).unwrap();

        assert!(second.removed_classes.is_empty());
        assert_eq!(after_first, fs::read(&cfg.stylesheet).unwrap());
    }

    #[test]
    fn test_empty_class_list_only_collapses_newlines() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = test_config(temp_dir.path(), "\n\n", ".a { x: 1; }\n\n\n\n.b { y: 2; }\n");

        let result = run_prune(&cfg, &mut Vec::new()).unwrap();

        assert!(result.removed_classes.is_empty());
        assert_eq!(result.chars_removed, 2);
        assert_eq!(
            fs::read_to_string(&cfg.stylesheet).unwrap(),
            ".a { x: 1; }\n\n.b { y: 2; }\n"
        );
    }

    #[test]
    fn test_crlf_stylesheet_gaps_collapse() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = test_config(
            temp_dir.path(),
            "gone\r\n",
            ".keep{}\r\n\r\n.gone{}\r\n\r\n\r\n\r\n.b{}\r\n",
        );

        let result = run_prune(&cfg, &mut Vec::new()).unwrap();

        assert_eq!(result.removed_classes, vec!["gone"]);
        assert_eq!(result.original_chars, ".keep{}\n\n.gone{}\n\n\n\n.b{}\n".len());
        assert_eq!(fs::read_to_string(&cfg.stylesheet).unwrap(), ".keep{}\n\n.b{}\n");
        assert_eq!(result.final_chars, ".keep{}\n\n.b{}\n".len());
    }

    #[test]
    fn test_duplicate_names_reported_once() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = test_config(temp_dir.path(), "a\na\n", ".a { x: 1; }");

        let mut progress = Vec::new();
        let result = run_prune(&cfg, &mut progress).unwrap();

        assert_eq!(result.removed_classes, vec!["a"]);
        assert_eq!(String::from_utf8(progress).unwrap(), "Removing class: .a\n");
    }

    #[test]
    fn test_empty_stylesheet() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = test_config(temp_dir.path(), "a\n", "");

        let result = run_prune(&cfg, &mut Vec::new()).unwrap();

        assert_eq!(result.original_chars, 0);
        assert_eq!(result.reduction_percent, None);
    }

    #[test]
    fn test_dry_run_leaves_file() {
        let temp_dir = TempDir::new().unwrap();
        let css = ".a { x: 1; }\n.b {}\n";
        let mut cfg = test_config(temp_dir.path(), "a\n", css);
        cfg.dry_run = true;

        let result = run_prune(&cfg, &mut Vec::new()).unwrap();

        assert_eq!(result.removed_classes, vec!["a"]);
        assert!(!result.written);
        assert!(result.chars_removed > 0);
        assert_eq!(fs::read_to_string(&cfg.stylesheet).unwrap(), css);
    }

    #[test]
    fn test_characters_counted_not_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = test_config(temp_dir.path(), "x\n", ".x{}ééé");

        let result = run_prune(&cfg, &mut Vec::new()).unwrap();

        assert_eq!(result.original_chars, 7);
        assert_eq!(result.final_chars, 3);
        assert_eq!(result.chars_removed, 4);
    }

    #[test]
    fn test_missing_class_list_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = Config {
            class_list: temp_dir.path().join("nope.txt"),
            stylesheet: create_test_file(temp_dir.path(), "style.css", ".a{}"),
            ..Config::default()
        };

        let err = run_prune(&cfg, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_missing_stylesheet_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = Config {
            class_list: create_test_file(temp_dir.path(), "classes.txt", "a\n"),
            stylesheet: temp_dir.path().join("gone.css"),
            ..Config::default()
        };

        let err = run_prune(&cfg, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("gone.css"));
        assert!(!cfg.stylesheet.exists());
    }
}
