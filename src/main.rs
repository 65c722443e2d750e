use anyhow::Result;

use swiss_tournament::cli::Command;
use swiss_tournament::{
    handle_completions, handle_create_tournament, handle_delete, handle_pairings, handle_players,
    handle_register, handle_report, handle_reset, handle_serve, handle_standings, interpret,
};

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
        Command::Reset => handle_reset(),
        Command::CreateTournament { name } => handle_create_tournament(name),
        Command::Register { name } => handle_register(name),
        Command::Players => handle_players(),
        Command::Report {
            tournament,
            player1,
            player2,
            winner,
        } => handle_report(*tournament, *player1, *player2, *winner),
        Command::Standings { tournament } => handle_standings(*tournament),
        Command::Pairings { tournament, json } => handle_pairings(*tournament, *json),
        Command::Delete { target } => handle_delete(*target),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
