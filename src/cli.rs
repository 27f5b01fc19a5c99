// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::core::ignore::load_ignore_patterns;
use crate::core::rewrite::{markup, script};
use crate::core::walker::{collect_markup_files, collect_script_files};
use crate::models::RewriteSummary;
use crate::utils::absolutize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project root to rewrite (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Extra directory names to exclude (comma-separated)
    #[arg(short, long, default_value = "")]
    pub exclude: String,

    /// Name of the build-output directory scanned for script references
    #[arg(long, default_value = "dist")]
    pub dist: String,

    /// Report what would change without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Runs one full rewrite pass and prints the summary line.
///
/// Markup files are processed first, then build-output scripts if the
/// directory exists. Files are processed strictly one at a time; a
/// read/write failure on a host file aborts the run before the summary.
///
/// # Errors
///
/// Returns an error if the tree cannot be traversed, the ignore file is
/// malformed, or a host file cannot be read or written.
pub fn run(args: Args) -> Result<()> {
    let root = absolutize(&args.directory)
        .with_context(|| format!("Failed to resolve root: {}", args.directory.display()))?;

    let patterns = load_ignore_patterns(&root)?;
    let mut exclude_dirs: Vec<&str> = args
        .exclude
        .split(',')
        .filter(|name| !name.is_empty())
        .collect();
    exclude_dirs.push(&args.dist);

    let mut summary = RewriteSummary::new();

    for path in collect_markup_files(&root, &exclude_dirs, &patterns)? {
        if markup::process_file(&path, &root, args.dry_run)? {
            summary.record_markup();
        }
    }

    let dist = root.join(&args.dist);
    if dist.is_dir() {
        for path in collect_script_files(&dist)? {
            if script::process_file(&path, args.dry_run)? {
                summary.record_script();
            }
        }
    } else {
        debug!(path = %dist.display(), "no build-output directory, skipping script pass");
    }

    println!(
        "Updated {} HTML files and {} JS files",
        summary.markup_files, summary.script_files
    );
    Ok(())
}
