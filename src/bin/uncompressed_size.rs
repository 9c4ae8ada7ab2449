//! Print the estimated uncompressed size of a compressed GeoTIFF dataset.

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use rastkit::programs::{uncompressed_size, Args, FAILURE_EXIT_CODE};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match uncompressed_size(&args.src_dataset) {
        Ok(size) => {
            println!("{size}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}
