// crates/motion_migrate/src/lib.rs

//! One-shot migration of `framer-motion` imports to `motion/react`.
//!
//! Files are rewritten in place with no backup copies; run this only on a
//! tree that is under version control (or otherwise recoverable).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use rewrite_imports::RuleSet;
use walk_target_files::walk_target_files;

/// Module specifier being migrated away from.
pub const SOURCE_MODULE: &str = "framer-motion";
/// Module specifier the imports are rewritten to.
pub const REPLACEMENT_MODULE: &str = "motion/react";

/// File extensions eligible for scanning.
pub const TARGET_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];
/// Directory names whose subtrees are never scanned.
pub const SKIP_DIRS: &[&str] = &["node_modules", ".next", "dist", ".git"];

/// Per-run configuration, fixed for the duration of a run.
pub struct RunConfig {
    /// When true, report intended changes without writing any file.
    pub dry: bool,
}

/// Outcome of one run.
pub struct RunSummary {
    /// Files whose text was changed (or would be, in dry-run mode).
    pub changed: usize,
    /// Files that could not be read or written back.
    pub failed: usize,
}

/// Runs one migration pass over the tree rooted at `root`, reporting progress
/// on stdout and per-file failures on stderr.
///
/// A read or write failure on a single file does not abort the run: the file
/// is reported, counted in `failed`, and the scan continues. Only a failure
/// to enumerate `root` itself is fatal.
pub fn run_migration(root: &Path, config: &RunConfig) -> Result<RunSummary> {
    let rules = RuleSet::module_rename(SOURCE_MODULE, REPLACEMENT_MODULE)
        .context("Failed to compile rewrite rules")?;

    println!(
        "{}",
        if config.dry {
            "Previewing changes..."
        } else {
            "Scanning and migrating..."
        }
    );

    let files = walk_target_files(root, TARGET_EXTENSIONS, SKIP_DIRS)
        .context("Failed to scan directory tree")?;

    let mut changed = 0;
    let mut failed = 0;

    for file in &files {
        let text = match fs::read_to_string(file) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Error: failed to read {}: {}", file.display(), err);
                failed += 1;
                continue;
            }
        };

        let (rewritten, hit) = rules.rewrite(&text);
        if !hit {
            continue;
        }

        if config.dry {
            println!("Would update: {}", file.display());
        } else {
            if let Err(err) = fs::write(file, &rewritten) {
                eprintln!("Error: failed to write {}: {}", file.display(), err);
                failed += 1;
                continue;
            }
            println!("Updated: {}", file.display());
        }
        changed += 1;
    }

    if config.dry {
        println!("\nDry run complete - {} file(s) would be updated.", changed);
    } else {
        println!("\nMigration complete - {} file(s) updated!", changed);
    }
    if failed > 0 {
        eprintln!("{} file(s) could not be processed.", failed);
    }

    Ok(RunSummary { changed, failed })
}
