use anyhow::Context;
use chext::config::{Command, RunOptions, USAGE};
use chext::logging::Logger;
use chext::{error, App, Outcome};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    error::setup_panic_handler();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match RunOptions::from_env_and_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match options.command {
        Command::Help => {
            println!("chext - rename every file in a folder from one extension to another");
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("chext {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Command::Run => {}
    }

    match run(&options) {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(options: &RunOptions) -> anyhow::Result<Outcome> {
    Logger::from_options(options)
        .install()
        .context("failed to set up logging")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(stdin.lock(), stdout.lock());
    let outcome = app.run().context("interactive session failed")?;
    Ok(outcome)
}
