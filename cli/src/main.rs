//! sheetcsv CLI - XLSX worksheet to CSV conversion tool
//!
//! Converts one worksheet of an XLSX workbook into a UTF-8 CSV file.

use clap::Parser;
use colored::*;
use sheetcsv::ConvertOptions;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert an XLSX worksheet to CSV
#[derive(Parser)]
#[command(
    name = "sheetcsv",
    version,
    about = "Convert an XLSX worksheet to CSV",
    long_about = "sheetcsv - minimal XLSX worksheet to CSV conversion.\n\n\
                  Reads one worksheet out of a workbook's ZIP container and writes it\n\
                  as comma-delimited UTF-8 text. Formulas are kept as source text,\n\
                  never evaluated. Convert multi-sheet workbooks one sheet at a time\n\
                  with --sheet."
)]
struct Cli {
    /// Input workbook path (.xlsx)
    input: PathBuf,

    /// Output CSV path (created or overwritten)
    output: PathBuf,

    /// Archive member path of the worksheet to convert
    #[arg(long, default_value = "xl/worksheets/sheet1.xml")]
    sheet: String,

    /// Archive member path of the shared string pool
    #[arg(long, default_value = sheetcsv::DEFAULT_SHARED_STRINGS)]
    shared_strings: String,

    /// Suppress the success message
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = ConvertOptions::for_sheet(&cli.sheet).with_shared_strings(&cli.shared_strings);

    match sheetcsv::convert_to_csv(&cli.input, &cli.output, &options) {
        Ok(()) => {
            if !cli.quiet {
                println!(
                    "{} {} -> {}",
                    "Converted".green().bold(),
                    cli.input.display(),
                    cli.output.display()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
