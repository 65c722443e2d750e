use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::{get_connection, DbConn, DbPool};
use super::models::Standing;
use super::tournaments;
use crate::pairing::{StandingRow, StandingsProvider, TournamentId};

// Best record first; player id keeps equal records in a stable order.
const RANKING_ORDER: &str =
    "ORDER BY s.wins DESC, s.losses ASC, o.wins DESC, o.losses ASC, s.player_id ASC";

/// Full ranked standings for one tournament.
pub fn player_standings(conn: &mut DbConn, tournament_id: TournamentId) -> Result<Vec<Standing>> {
    let sql = format!(
        "SELECT s.tournament_id, s.player_id, s.player_name, s.wins, s.losses, s.ties, s.matches, s.byes, o.wins, o.losses
        FROM standings s
        JOIN opponent_standings o ON o.tournament_id = s.tournament_id AND o.player_id = s.player_id
        WHERE s.tournament_id = ?1
        {}",
        RANKING_ORDER
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_standing_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read standings for tournament {}", tournament_id))?;

    Ok(rows)
}

fn parse_standing_row(row: &rusqlite::Row) -> rusqlite::Result<Standing> {
    Ok(Standing {
        tournament_id: row.get(0)?,
        player_id: row.get(1)?,
        player_name: row.get(2)?,
        wins: row.get(3)?,
        losses: row.get(4)?,
        ties: row.get(5)?,
        matches: row.get(6)?,
        byes: row.get(7)?,
        opponent_wins: row.get(8)?,
        opponent_losses: row.get(9)?,
    })
}

/// Ranked pairing input: id, name and bye count only.
pub fn ranked_rows(conn: &mut DbConn, tournament_id: TournamentId) -> Result<Vec<StandingRow>> {
    let sql = format!(
        "SELECT s.player_id, s.player_name, s.byes
        FROM standings s
        JOIN opponent_standings o ON o.tournament_id = s.tournament_id AND o.player_id = s.player_id
        WHERE s.tournament_id = ?1
        {}",
        RANKING_ORDER
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![tournament_id], |row| {
            Ok(StandingRow {
                player_id: row.get(0)?,
                player_name: row.get(1)?,
                bye_count: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read pairing candidates for tournament {}", tournament_id))?;

    Ok(rows)
}

/// Standings provider reading the SQL views through a connection pool
#[derive(Clone)]
pub struct SqliteStandings {
    pool: DbPool,
}

impl SqliteStandings {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl StandingsProvider for SqliteStandings {
    fn ranked_standings(&self, tournament_id: TournamentId) -> Result<Option<Vec<StandingRow>>> {
        let mut conn = get_connection(&self.pool)?;
        if tournaments::find_by_id(&mut conn, tournament_id)?.is_none() {
            return Ok(None);
        }
        ranked_rows(&mut conn, tournament_id).map(Some)
    }
}
