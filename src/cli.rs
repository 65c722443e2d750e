use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament tracker")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Drop and recreate the database schema
    Reset,
    /// Create a tournament and print its id
    CreateTournament {
        name: String,
    },
    /// Register a player; every player takes part in every tournament
    Register {
        name: String,
    },
    /// List registered players
    Players,
    /// Record a match; omit the second player to record a bye
    Report {
        tournament: i64,
        player1: i64,
        player2: Option<i64>,
        /// Winner id; leave out for a tie
        #[arg(short, long)]
        winner: Option<i64>,
    },
    /// Show ranked standings
    Standings {
        tournament: i64,
    },
    /// Show pairings for the next round
    Pairings {
        tournament: i64,
        /// Print pairings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete all records of one kind
    Delete {
        #[arg(value_enum)]
        target: DeleteTarget,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum DeleteTarget {
    Matches,
    Players,
    Tournaments,
}
