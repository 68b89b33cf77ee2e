//! recordshape CLI - reshape part-data CSV exports into nested JSON
//!
//! ```bash
//! recordshape transform input.csv              # writes out.json
//! recordshape transform input.csv -o parts.json
//! recordshape layout input.csv                 # show column groups
//! recordshape classify 12                      # group of one ordinal
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use recordshape::{
    classify_column, logs, read_table, HeaderLayout, RecordTransformer, DEFAULT_OUTPUT_PATH,
};

#[derive(Parser)]
#[command(name = "recordshape")]
#[command(about = "Reshape flat part-data CSV into nested JSON documents", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a CSV file into a JSON document
    Transform {
        /// Input CSV file
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },

    /// Show which header lands in which group
    Layout {
        /// Input CSV file
        input: PathBuf,
    },

    /// Show the group of a column ordinal
    Classify {
        /// Zero-based column ordinal
        #[arg(allow_hyphen_values = true)]
        ordinal: i64,
    },
}

fn main() {
    // Load .env file (if present), e.g. for RUST_LOG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = logs::init_logging(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = match cli.command {
        Commands::Transform { input, output } => cmd_transform(&input, output),
        Commands::Layout { input } => cmd_layout(&input),
        Commands::Classify { ordinal } => cmd_classify(ordinal),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_transform(input: &Path, output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let report = RecordTransformer::with_output(output).run(input)?;

    println!(
        "{} records written to {}",
        report.record_count,
        report.output_path.display()
    );
    Ok(())
}

fn cmd_layout(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let table = read_table(input)?;
    let layout = HeaderLayout::from_headers(&table.headers);

    for (ordinal, name) in table.headers.iter().enumerate() {
        println!("{:>3}  {:<10}  {}", ordinal, layout.group_of(ordinal), name);
    }
    println!();
    println!(
        "core: {}, images: {}, attributes: {}",
        layout.core.len(),
        layout.images.len(),
        layout.attributes.len()
    );
    Ok(())
}

fn cmd_classify(ordinal: i64) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", classify_column(ordinal));
    Ok(())
}
