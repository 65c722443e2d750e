pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod pairing;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::cli::{Cli, Command, DeleteTarget};
use crate::config::settings::AppConfig;
use crate::pairing::{PlayerId, TournamentId};
use crate::services::{ServerService, TournamentService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_service() -> Result<TournamentService> {
    let config = AppConfig::new();
    Ok(TournamentService::open(&config.database)?)
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_port(port);
        let service = ServerService::new(config);
        service.run().await
    })
}

pub fn handle_reset() -> Result<()> {
    open_service()?.reset()?;
    println!("Database schema reset");
    Ok(())
}

pub fn handle_create_tournament(name: &str) -> Result<()> {
    let tournament = open_service()?.create_tournament(name)?;
    println!("{}", tournament.id);
    Ok(())
}

pub fn handle_register(name: &str) -> Result<()> {
    let player = open_service()?.register_player(name)?;
    println!("{}", player.id);
    Ok(())
}

pub fn handle_players() -> Result<()> {
    let players = open_service()?.players()?;
    output::print_players(&players);
    Ok(())
}

pub fn handle_report(
    tournament: TournamentId,
    player1: PlayerId,
    player2: Option<PlayerId>,
    winner: Option<PlayerId>,
) -> Result<()> {
    let recorded = open_service()?.report_match(tournament, player1, player2, winner)?;
    println!("Recorded match {}", recorded.id);
    Ok(())
}

pub fn handle_standings(tournament: TournamentId) -> Result<()> {
    let standings = open_service()?.standings(tournament)?;
    output::print_standings(&standings);
    Ok(())
}

pub fn handle_pairings(tournament: TournamentId, json: bool) -> Result<()> {
    let pairings = open_service()?.swiss_pairings(tournament)?;
    if json {
        output::print_pairings_json(&pairings)
    } else {
        output::print_pairings(&pairings);
        Ok(())
    }
}

pub fn handle_delete(target: DeleteTarget) -> Result<()> {
    let service = open_service()?;
    let removed = match target {
        DeleteTarget::Matches => service.delete_matches()?,
        DeleteTarget::Players => service.delete_players()?,
        DeleteTarget::Tournaments => service.delete_tournaments()?,
    };
    println!("Deleted {} {}", removed, format!("{:?}", target).to_lowercase());
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
