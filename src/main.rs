mod deleter;
mod grouper;
mod prompts;
mod resolver;
mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use resolver::BucketDuplicates;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dupescan")]
#[command(about = "Find duplicate files by size and content hash, then delete them interactively")]
#[command(version)]
struct Cli {
    /// Root directory to scan
    path: PathBuf,
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

fn print_size_report(sizes: &[u64], buckets: &BTreeMap<u64, Vec<PathBuf>>) {
    for &size in sizes {
        let Some(paths) = buckets.get(&size) else {
            continue;
        };
        println!("{} bytes", size.to_string().bold());
        for path in paths {
            println!("  {}", path.display());
        }
        println!();
    }
}

/// Print surviving groups with a running 1-based counter. The counter walks
/// the exact order of `build_candidate_list`, so the numbers shown here are
/// the numbers the delete prompt accepts.
fn print_duplicate_report(duplicates: &[BucketDuplicates]) {
    let mut index = 0usize;
    for bucket in duplicates {
        println!("{} bytes", bucket.size.to_string().bold());
        for group in &bucket.groups {
            println!("  Hash: {}", group.digest.dimmed());
            for path in &group.paths {
                index += 1;
                println!("  {} {}", format!("{index}.").green(), path.display());
            }
        }
        println!();
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = cli
        .path
        .canonicalize()
        .with_context(|| format!("invalid path: {}", cli.path.display()))?;

    let options = prompts::gather()?;

    println!("\n{} {}...\n", "Scanning".cyan().bold(), root.display());
    let records = scanner::scan(&root, &options.file_format)?;

    if records.is_empty() {
        println!("{}", "No matching files found.".yellow());
    }

    let buckets = grouper::group_by_size(&records);
    let sizes = grouper::sorted_sizes(&buckets, options.direction);
    print_size_report(&sizes, &buckets);

    let mut deleted = Vec::new();
    let mut candidates = Vec::new();

    if options.check_duplicates {
        let duplicates = resolver::resolve(&buckets, &sizes)?;
        candidates = resolver::build_candidate_list(&duplicates);
        print_duplicate_report(&duplicates);
    }

    if options.delete_requested {
        if candidates.is_empty() {
            println!("{}", "No duplicate files to delete.".yellow());
        } else {
            let indices = prompts::read_selection(candidates.len())?;
            let outcome = deleter::delete_files(&candidates, &indices);
            if let Some(err) = &outcome.error {
                eprintln!("{} {}", "error:".red().bold(), err);
            }
            deleted = outcome.deleted;
        }
    }

    let freed = deleter::freed_space(&records, &deleted);
    println!(
        "\n{} {} bytes ({})",
        "Total freed up space:".bold(),
        freed,
        format_size(freed).green().bold()
    );

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
