use clap::Parser;
use netgen_rs::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = netgen_rs::logging::init_logging() {
        eprintln!("warning: failed to initialise logging: {err}");
    }

    if let Err(err) = cli::run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
