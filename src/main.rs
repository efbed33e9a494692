//! cdoc — generate documentation from annotated C-style source files.
//!
//! Scans a directory tree for block comments using the
//! `Function:` / description / `name: description` / `Returns:` convention,
//! associates each comment with the declaration that follows it, and writes
//! a single document with a navigation index.

mod batch;
mod model;
mod parser;
mod render;
mod scan;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cdoc",
    about = "Generate documentation from annotated C-style source files"
)]
struct Cli {
    /// Directory to scan recursively for source files.
    directory: PathBuf,

    /// Output file. Defaults to documentation.<ext> for the chosen format.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: html (default), markdown, json
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Glob patterns of paths to skip. Can be specified multiple times.
    #[arg(long)]
    exclude: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.directory.is_dir() {
        anyhow::bail!("{} is not a directory", cli.directory.display());
    }

    let renderer = render::create_renderer(&cli.format)?;

    let files = scan::collect_files(&cli.directory, &cli.exclude)?;
    let records = batch::process_files(&files);
    if records.is_empty() {
        println!("No documentation comments found.");
        return Ok(());
    }

    let out_path = cli.output.unwrap_or_else(|| {
        PathBuf::from(format!("documentation.{}", renderer.file_extension()))
    });
    fs::write(&out_path, renderer.render(&records))
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!(
        "Documentation for {} function(s) written to {}",
        records.len(),
        out_path.display()
    );
    Ok(())
}
