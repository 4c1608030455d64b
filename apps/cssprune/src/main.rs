use anyhow::Result;
use clap::Parser;
use cssprune_core::Config;
use log::{debug, info};
use std::io::{self, BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "cssprune")]
#[command(about = "Remove unused CSS class rules from a stylesheet", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// Print the result as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.config);

    let cfg = cli.config;
    let start = Instant::now();

    info!(
        "Pruning {} using classes from {}",
        cfg.stylesheet.display(),
        cfg.class_list.display()
    );

    let result = if cli.json {
        cssprune_core::run_prune(&cfg, &mut io::sink())?
    } else {
        cssprune_core::run_prune(&cfg, &mut stdout)?
    };
    info!(
        "Removed {} classes in {}ms",
        result.removed_classes.len(),
        start.elapsed().as_millis()
    );

    if cli.json {
        cssprune_core::print_json_report(&mut stdout, &result)?;
        return Ok(());
    }

    cssprune_core::print_summary(&mut stdout, &result)?;
    if cfg.dry_run {
        cssprune_core::print_dry_run_note(&mut stdout, &cfg.stylesheet)?;
    }

    stdout.flush()?;

    Ok(())
}
