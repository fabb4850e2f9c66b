//! Command-line interface for the extractor.

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::batch::run_batch_with_progress;
use crate::config::{Namespaces, INPUT_DIR_NAME};
use crate::error::Result;
use crate::resolver::program_dir;
use crate::types::BatchReport;

/// UBL Extractor - Consolidate invoice lines from UBL XML files into a spreadsheet.
///
/// Reads every `.xml` file in the `bills_supermarket` folder next to the
/// executable and writes `info_xmls.xlsx` into that folder.
#[derive(Parser)]
#[command(name = "ubl-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {}

/// Run the CLI.
pub fn run() -> Result<()> {
    let _cli = Cli::parse();
    extract_command()
}

/// Execute the extraction batch from the executable's directory.
fn extract_command() -> Result<()> {
    let base_dir = program_dir()?;

    println!(
        "{} {}",
        style("Reading invoices from").bold(),
        style(base_dir.join(INPUT_DIR_NAME).display()).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = run_batch_with_progress(&base_dir, &Namespaces::ubl(), |name, index, total| {
        pb.set_message(format!("Processing {name} ({}/{total})...", index + 1));
    });
    pb.finish_and_clear();

    print_summary(&result?);
    Ok(())
}

fn print_summary(report: &BatchReport) {
    println!("  Files: {}", report.files);
    println!("  Rows: {}", style(report.rows).green());
    if !report.skipped.is_empty() {
        println!(
            "  Skipped lines: {}",
            style(report.skipped.len()).yellow().bold()
        );
        for skip in &report.skipped {
            println!(
                "    {} line {}: {}",
                skip.file, skip.line.line_index, skip.line.reason
            );
        }
    }

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        report.output_path.display()
    );
}
