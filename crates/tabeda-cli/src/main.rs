//! tabeda CLI - EDA reports and data-quality API for CSV datasets.

mod cli;
mod commands;
mod logging;
mod report;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Overview {
            file,
            sep,
            encoding,
        } => commands::overview::run(file, sep, encoding, cli.verbose),

        Commands::Report {
            file,
            out_dir,
            sep,
            encoding,
            max_hist_columns,
            top_k_categories,
            title,
            min_missing_share,
        } => commands::report::run(commands::report::ReportArgs {
            file,
            out_dir,
            sep,
            encoding,
            max_hist_columns,
            top_k_categories,
            title,
            min_missing_share,
            verbose: cli.verbose,
        }),

        Commands::Serve { host, port } => commands::serve::run(host, port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
