use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::{Match, MatchId};
use crate::errors::delete_context;
use crate::pairing::{PlayerId, TournamentId};

/// Records one match and, when decided, its winner.
///
/// `player2 == None` records a bye for `player1`. Without a winner the match
/// counts as a tie. Match and result rows are written in one transaction.
pub fn report_match(
    conn: &mut DbConn,
    tournament_id: TournamentId,
    player1: PlayerId,
    player2: Option<PlayerId>,
    winner: Option<PlayerId>,
) -> Result<Match> {
    let tx = conn
        .transaction()
        .context("Failed to open match transaction")?;

    let (match_id, created_at): (MatchId, _) = tx
        .query_row(
            "INSERT INTO matches (tournament_id, player1, player2) VALUES (?1, ?2, ?3) RETURNING id, created_at",
            params![tournament_id, player1, player2],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .context("Failed to insert match")?;

    if let Some(winner) = winner {
        tx.execute(
            "INSERT INTO results (match_id, winner) VALUES (?1, ?2)",
            params![match_id, winner],
        )
        .context("Failed to insert match result")?;
    }

    tx.commit().context("Failed to commit match")?;

    Ok(Match {
        id: match_id,
        tournament_id,
        player1,
        player2,
        winner,
        created_at,
    })
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        player1: row.get(2)?,
        player2: row.get(3)?,
        winner: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn list_by_tournament(conn: &mut DbConn, tournament_id: TournamentId) -> Result<Vec<Match>> {
    let sql = "
        SELECT m.id, m.tournament_id, m.player1, m.player2, r.winner, m.created_at
        FROM matches m
        LEFT JOIN results r ON r.match_id = m.id
        WHERE m.tournament_id = ?1
        ORDER BY m.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Removes all results, then all matches. Returns the number of matches removed.
pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM results", [])
        .with_context(|| delete_context("results"))?;
    let removed = tx
        .execute("DELETE FROM matches", [])
        .with_context(|| delete_context("matches"))?;
    tx.commit().context("Failed to commit match deletion")?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{fresh_connection, players, tournaments};

    fn seed(conn: &mut DbConn) -> (TournamentId, PlayerId, PlayerId) {
        let tournament = tournaments::create_tournament(conn, "Test Cup").unwrap();
        let a = players::register_player(conn, "A").unwrap();
        let b = players::register_player(conn, "B").unwrap();
        (tournament.id, a.id, b.id)
    }

    #[test]
    fn test_report_decided_tied_and_bye_matches() {
        let mut conn = fresh_connection();
        let (t, a, b) = seed(&mut conn);

        report_match(&mut conn, t, a, Some(b), Some(a)).unwrap();
        report_match(&mut conn, t, a, Some(b), None).unwrap();
        let bye = report_match(&mut conn, t, b, None, Some(b)).unwrap();
        assert!(bye.is_bye());

        let recorded = list_by_tournament(&mut conn, t).unwrap();
        let summary: Vec<_> = recorded.iter().map(|m| (m.player1, m.player2, m.winner)).collect();
        assert_eq!(
            summary,
            vec![(a, Some(b), Some(a)), (a, Some(b), None), (b, None, Some(b))]
        );
    }

    #[test]
    fn test_unknown_player_is_rejected_by_foreign_key() {
        let mut conn = fresh_connection();
        let (t, a, _) = seed(&mut conn);

        let result = report_match(&mut conn, t, a, Some(9_999), Some(a));

        assert!(result.is_err());
        assert!(list_by_tournament(&mut conn, t).unwrap().is_empty());
    }

    #[test]
    fn test_failed_result_rolls_back_match() {
        let mut conn = fresh_connection();
        let (t, a, b) = seed(&mut conn);

        let result = report_match(&mut conn, t, a, Some(b), Some(9_999));

        assert!(result.is_err());
        assert!(list_by_tournament(&mut conn, t).unwrap().is_empty());
    }

    #[test]
    fn test_delete_all_removes_matches_and_results() {
        let mut conn = fresh_connection();
        let (t, a, b) = seed(&mut conn);
        report_match(&mut conn, t, a, Some(b), Some(b)).unwrap();
        report_match(&mut conn, t, b, Some(a), None).unwrap();

        assert_eq!(delete_all(&mut conn).unwrap(), 2);

        let remaining: i64 = conn
            .query_row("SELECT COUNT(*) FROM results", [], |row| row.get(0))
            .unwrap();
        assert_eq!(remaining, 0);
        assert!(list_by_tournament(&mut conn, t).unwrap().is_empty());
    }
}
