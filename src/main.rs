use anyhow::Result;

use match_statistics::cli::Command;
use match_statistics::{handle_completions, handle_fixtures, handle_matches, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Matches { json } => handle_matches(*json),
        Command::Fixtures { tournament_id } => handle_fixtures(*tournament_id),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
