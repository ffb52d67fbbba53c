// src/bin/noise_report.rs
use anyhow::{Context, Result};
use clap::Parser;
use encnoise::process::{read_tsv, report::compare_tables};
use std::path::PathBuf;

/// Summarise how a noisy copy differs from its source TSV.
#[derive(Parser, Debug)]
#[command(name = "noise_report", version, about)]
struct Cli {
    /// Source encoded TSV
    #[arg(long)]
    original: PathBuf,

    /// Noisy copy produced from `original`
    #[arg(long)]
    noisy: PathBuf,

    /// Emit JSON instead of a text table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let original = read_tsv(&args.original)?;
    let noisy = read_tsv(&args.noisy)?;
    let report = compare_tables(&original, &noisy).with_context(|| {
        format!(
            "comparing {} with {}",
            args.original.display(),
            args.noisy.display()
        )
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let rows = report.rows.max(1) as f64;
    println!("{:<24} {:>9} {:>9} {:>8}", "column", "changed", "blanked", "rate");
    for col in &report.columns {
        println!(
            "{:<24} {:>9} {:>9} {:>7.2}%",
            col.column,
            col.changed,
            col.blanked,
            100.0 * col.changed as f64 / rows
        );
    }
    println!();
    println!("rows:            {}", report.rows);
    println!("changed cells:   {}", report.changed_cells());
    println!("encodings moved: {}", report.encodings_moved);
    println!("uids changed:    {}", report.uids_changed);

    if report.uids_changed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
