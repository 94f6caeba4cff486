use clap::Parser;
use log::warn;
use std::io;

mod args;
mod survey;

use crate::args::Args;
use crate::survey::console::Console;

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    if let Err(e) = survey::run_command(&args, &mut console) {
        warn!("Error occurred {:?}", e);
        eprintln!("An error occurred: {}", survey::error_report(&e));
        std::process::exit(1);
    }
}
