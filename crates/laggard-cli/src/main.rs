use anyhow::Result;
use clap::{Parser, Subcommand};
use laggard_cli::{OutputFormat, commands};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "laggard")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for building performance reports from nginx access logs",
    long_about = "Laggard scans a directory of rotated access logs, parses the freshest one, \
                  and reports the URLs with the worst response times."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the HTML report for the latest rotated log
    Report {
        /// Path to the TOML config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print ranked URL statistics for a single log file
    Stats {
        /// Path to the access log (plain text or .gz)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Keep only the N slowest URLs
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Execute the command
    match cli.command {
        Commands::Report { config } => commands::report::execute(config.as_deref()),
        Commands::Stats { file, top, format } => commands::stats::execute(&file, top, format),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("laggard=debug,laggard_cli=debug,laggard_core=debug")
    } else {
        EnvFilter::new("laggard=info,laggard_cli=info,laggard_core=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
