pub mod generator;
pub mod types;

pub use generator::{generate_pairings, PairingGenerator, StandingsProvider};
pub use types::{Pairing, PairingRecord, PlayerId, StandingRow, TournamentId};
