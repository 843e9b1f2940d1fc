use std::process::ExitCode;

use clap::Parser;
use imguri::{Cli, init_logger, log_level, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let args = cli.to_convert_args();

    let verbose = args.as_ref().map_or(cli.verbose, |args| args.verbose);
    init_logger(log_level(verbose));

    match args.and_then(|args| run(&args)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
