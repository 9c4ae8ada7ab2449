//! Print the proj4 string of a Shapefile or GeoTIFF dataset.

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use rastkit::programs::{proj4string, Args, FAILURE_EXIT_CODE};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match proj4string(&args.src_dataset) {
        Ok(proj4) => {
            println!("{proj4}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}
