use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::env;

use motion_migrate::{run_migration, RunConfig};

fn main() -> Result<()> {
    let matches = Command::new("motion_migrate")
        .version("0.1.0")
        .about("Migrates framer-motion imports to motion/react")
        .arg(
            Arg::new("dry")
                .long("dry")
                .help("Preview changes without writing any file")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let dry = *matches.get_one::<bool>("dry").unwrap();

    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let summary = run_migration(&current_dir, &RunConfig { dry })?;

    // Per-file failures do not abort the run, but they are surfaced in the
    // exit code once the scan has finished.
    if summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
