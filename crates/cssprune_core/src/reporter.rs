use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use log::debug;

use crate::types::PruneResult;

pub fn print_removing<W: Write>(writer: &mut W, class_name: &str) -> io::Result<()> {
    writeln!(writer, "Removing class: .{}", class_name)
}

fn format_reduction(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.1}%", p),
        None => "N/A".to_string(),
    }
}

pub fn print_summary<W: Write>(writer: &mut W, result: &PruneResult) -> io::Result<()> {
    debug!("Printing summary for {} removed classes", result.removed_classes.len());

    writeln!(writer, "\n{}", "--- CSS Cleanup Results ---".bold())?;
    writeln!(writer, "Classes removed: {}", result.removed_classes.len())?;
    writeln!(writer, "Characters removed: {}", result.chars_removed)?;
    writeln!(writer, "Original size: {} characters", result.original_chars)?;
    writeln!(writer, "Final size: {} characters", result.final_chars)?;
    writeln!(writer, "Size reduction: {}", format_reduction(result.reduction_percent))?;

    if !result.removed_classes.is_empty() {
        writeln!(writer, "\nRemoved classes: {}", result.removed_classes.join(", "))?;
    }

    writer.flush()?;
    Ok(())
}

pub fn print_dry_run_note<W: Write>(writer: &mut W, stylesheet: &Path) -> io::Result<()> {
    writeln!(
        writer,
        "\n{} Dry run: {} was not modified.",
        "●".bright_blue(),
        stylesheet.display()
    )?;
    writer.flush()?;
    Ok(())
}

pub fn print_json_report<W: Write>(writer: &mut W, result: &PruneResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
