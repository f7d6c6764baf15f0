use clap::Parser;
use gazehound::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    commands::setup_logging(args.get_log_level());

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Print the full context chain to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
