//! Terminal rendering for CLI commands.
use anyhow::{Context, Result};
use colored::Colorize;

use crate::database::{Player, Standing};
use crate::pairing::{Pairing, PairingRecord};

pub fn format_standings(standings: &[Standing]) -> String {
    let name_width = standings
        .iter()
        .map(|s| s.player_name.chars().count())
        .max()
        .unwrap_or(6)
        .max(6); // at least "Player"

    let mut out = format!(
        " # | {:>4} | {:<name_width$} |  W |  L |  T | Played | Byes\n",
        "Id", "Player"
    );
    out.push_str(&format!("---|------|-{}-|----|----|----|--------|-----\n", "-".repeat(name_width)));

    for (i, s) in standings.iter().enumerate() {
        out.push_str(&format!(
            "{:>2} | {:>4} | {:<name_width$} | {:>2} | {:>2} | {:>2} | {:>6} | {:>4}\n",
            i + 1,
            s.player_id,
            s.player_name,
            s.wins,
            s.losses,
            s.ties,
            s.matches,
            s.byes,
        ));
    }
    out
}

pub fn format_pairings(pairings: &[Pairing]) -> String {
    let mut out = String::new();
    let mut table = 0;
    for pairing in pairings {
        match pairing {
            Pairing::Match {
                player1_id,
                player1_name,
                player2_id,
                player2_name,
            } => {
                table += 1;
                out.push_str(&format!(
                    "Table {}: {} ({}) vs {} ({})\n",
                    table, player1_name, player1_id, player2_name, player2_id
                ));
            }
            Pairing::Bye {
                player_id,
                player_name,
            } => out.push_str(&format!("Bye: {} ({})\n", player_name, player_id)),
        }
    }
    out
}

pub fn print_standings(standings: &[Standing]) {
    if standings.is_empty() {
        println!("{}", "No players registered".yellow());
        return;
    }
    print!("{}", format_standings(standings));
}

pub fn print_pairings(pairings: &[Pairing]) {
    if pairings.is_empty() {
        println!("{}", "Nothing to pair".yellow());
        return;
    }
    for line in format_pairings(pairings).lines() {
        if line.starts_with("Bye") {
            println!("{}", line.cyan());
        } else {
            println!("{}", line);
        }
    }
}

pub fn print_pairings_json(pairings: &[Pairing]) -> Result<()> {
    let records: Vec<PairingRecord> = pairings.iter().map(PairingRecord::from).collect();
    let json = serde_json::to_string_pretty(&records).context("Failed to serialize pairings")?;
    println!("{}", json);
    Ok(())
}

pub fn print_players(players: &[Player]) {
    for player in players {
        println!("{:>4}  {}", player.id.to_string().bold(), player.name);
    }
    println!("\n{} players registered", players.len());
}
