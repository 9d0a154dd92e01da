use clap::Parser;
use denoreg_core::logging::{self, LogTarget};

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging before anything else touches config or the network.
    logging::init(if cli.log_stderr {
        LogTarget::Stderr
    } else {
        LogTarget::File
    });

    if let Err(err) = cli.run().await {
        eprintln!("denoreg error: {:#}", err);
        std::process::exit(1);
    }
}
