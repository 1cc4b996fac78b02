use clap::Parser;
use csv2latex::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(_summary) => {
            // Success - summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(commands::exit_code(&error));
        }
    }
}
