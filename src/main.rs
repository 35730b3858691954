use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use calc::{
    cli::Args,
    driver::{Source, run, run_repl},
    error::DriverError,
};
use clap::Parser;

fn main() -> ExitCode {
    env_logger::init();
    let config = Args::parse().into_config();

    let result = if config.source == Source::Stdin && io::stdin().is_terminal() {
        run_repl(&config.prompt, config.mode).map_err(DriverError::from)
    } else {
        run(&config, io::stdin().lock(), &mut io::stdout(), &mut io::stderr())
    };

    match result {
        Ok(summary) => summary.exit_code(),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
