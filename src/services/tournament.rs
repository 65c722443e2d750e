use log::info;

use crate::config::settings::DatabaseSettings;
use crate::database::{
    self, matches, players, setup, standings, tournaments, DbConn, DbPool, Match, Player,
    SqliteStandings, Standing, Tournament,
};
use crate::errors::{TournamentError, TournamentResult};
use crate::pairing::{Pairing, PairingGenerator, PlayerId, TournamentId};

/// Validated entry point over the data-access layer.
///
/// Each operation checks out its own pooled connection and returns it before
/// the next one is taken, so a single-connection pool is enough.
pub struct TournamentService {
    pool: DbPool,
    pairing: PairingGenerator<SqliteStandings>,
}

impl TournamentService {
    pub fn new(pool: DbPool) -> Self {
        let pairing = PairingGenerator::new(SqliteStandings::new(pool.clone()));
        Self { pool, pairing }
    }

    pub fn open(settings: &DatabaseSettings) -> TournamentResult<Self> {
        let pool = database::create_pool(&settings.path)?;
        info!("Opened tournament database at {}", settings.path);
        Ok(Self::new(pool))
    }

    fn connection(&self) -> TournamentResult<DbConn> {
        Ok(database::get_connection(&self.pool)?)
    }

    pub fn reset(&self) -> TournamentResult<()> {
        let mut conn = self.connection()?;
        setup::reset_database(&mut conn)?;
        Ok(())
    }

    pub fn create_tournament(&self, name: &str) -> TournamentResult<Tournament> {
        let name = validate_name("tournament", name)?;
        let mut conn = self.connection()?;
        let tournament = tournaments::create_tournament(&mut conn, name)?;
        info!("Created tournament {} ({})", tournament.id, tournament.name);
        Ok(tournament)
    }

    pub fn tournament(&self, id: TournamentId) -> TournamentResult<Tournament> {
        validate_id("tournament", id)?;
        let mut conn = self.connection()?;
        require_tournament(&mut conn, id)
    }

    pub fn tournaments(&self) -> TournamentResult<Vec<Tournament>> {
        let mut conn = self.connection()?;
        Ok(tournaments::list_all(&mut conn)?)
    }

    pub fn register_player(&self, name: &str) -> TournamentResult<Player> {
        let name = validate_name("player", name)?;
        let mut conn = self.connection()?;
        let player = players::register_player(&mut conn, name)?;
        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    pub fn players(&self) -> TournamentResult<Vec<Player>> {
        let mut conn = self.connection()?;
        Ok(players::list_all(&mut conn)?)
    }

    pub fn count_players(&self) -> TournamentResult<i64> {
        let mut conn = self.connection()?;
        Ok(players::count_players(&mut conn)?)
    }

    /// Records a match result. `player2 == None` records a bye, which is
    /// always won by `player1`; a decided match with no winner is a tie.
    pub fn report_match(
        &self,
        tournament_id: TournamentId,
        player1: PlayerId,
        player2: Option<PlayerId>,
        winner: Option<PlayerId>,
    ) -> TournamentResult<Match> {
        validate_id("tournament", tournament_id)?;
        validate_id("player", player1)?;
        if let Some(player2) = player2 {
            validate_id("player", player2)?;
        }
        let winner = resolve_winner(player1, player2, winner)?;

        let mut conn = self.connection()?;
        require_tournament(&mut conn, tournament_id)?;
        for id in std::iter::once(player1).chain(player2) {
            if players::find_by_id(&mut conn, id)?.is_none() {
                return Err(TournamentError::not_found("player", id));
            }
        }

        let recorded = matches::report_match(&mut conn, tournament_id, player1, player2, winner)?;
        match (recorded.player2, recorded.winner) {
            (None, _) => info!("Tournament {}: bye for player {}", tournament_id, player1),
            (Some(p2), Some(w)) => info!(
                "Tournament {}: {} vs {} won by {}",
                tournament_id, player1, p2, w
            ),
            (Some(p2), None) => info!("Tournament {}: {} vs {} tied", tournament_id, player1, p2),
        }
        Ok(recorded)
    }

    pub fn report_bye(&self, tournament_id: TournamentId, player: PlayerId) -> TournamentResult<Match> {
        self.report_match(tournament_id, player, None, Some(player))
    }

    pub fn matches(&self, tournament_id: TournamentId) -> TournamentResult<Vec<Match>> {
        validate_id("tournament", tournament_id)?;
        let mut conn = self.connection()?;
        require_tournament(&mut conn, tournament_id)?;
        Ok(matches::list_by_tournament(&mut conn, tournament_id)?)
    }

    pub fn standings(&self, tournament_id: TournamentId) -> TournamentResult<Vec<Standing>> {
        validate_id("tournament", tournament_id)?;
        let mut conn = self.connection()?;
        require_tournament(&mut conn, tournament_id)?;
        Ok(standings::player_standings(&mut conn, tournament_id)?)
    }

    /// Next-round pairings from fresh standings. Nothing is persisted.
    pub fn swiss_pairings(&self, tournament_id: TournamentId) -> TournamentResult<Vec<Pairing>> {
        validate_id("tournament", tournament_id)?;
        self.pairing.next_round(tournament_id)
    }

    pub fn delete_matches(&self) -> TournamentResult<usize> {
        let mut conn = self.connection()?;
        let removed = matches::delete_all(&mut conn)?;
        info!("Deleted {} matches", removed);
        Ok(removed)
    }

    pub fn delete_players(&self) -> TournamentResult<usize> {
        let mut conn = self.connection()?;
        let removed = players::delete_all(&mut conn)?;
        info!("Deleted {} players", removed);
        Ok(removed)
    }

    pub fn delete_tournaments(&self) -> TournamentResult<usize> {
        let mut conn = self.connection()?;
        let removed = tournaments::delete_all(&mut conn)?;
        info!("Deleted {} tournaments", removed);
        Ok(removed)
    }
}

fn require_tournament(conn: &mut DbConn, id: TournamentId) -> TournamentResult<Tournament> {
    tournaments::find_by_id(conn, id)?.ok_or_else(|| TournamentError::not_found("tournament", id))
}

fn validate_id(entity: &str, id: i64) -> TournamentResult<()> {
    if id <= 0 {
        return Err(TournamentError::invalid(format!(
            "{} id must be a positive integer, got {}",
            entity, id
        )));
    }
    Ok(())
}

fn validate_name<'a>(entity: &str, name: &'a str) -> TournamentResult<&'a str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TournamentError::invalid(format!("{} name must not be empty", entity)));
    }
    Ok(trimmed)
}

fn resolve_winner(
    player1: PlayerId,
    player2: Option<PlayerId>,
    winner: Option<PlayerId>,
) -> TournamentResult<Option<PlayerId>> {
    match (player2, winner) {
        (None, None) => Ok(Some(player1)),
        (None, Some(w)) if w == player1 => Ok(Some(player1)),
        (None, Some(w)) => Err(TournamentError::invalid(format!(
            "a bye can only be won by player {}, not {}",
            player1, w
        ))),
        (Some(p2), _) if p2 == player1 => Err(TournamentError::invalid(format!(
            "player {} cannot play against themselves",
            player1
        ))),
        (Some(p2), Some(w)) if w != player1 && w != p2 => Err(TournamentError::invalid(format!(
            "winner {} did not play in the match between {} and {}",
            w, player1, p2
        ))),
        (Some(_), winner) => Ok(winner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TournamentService {
        let service = TournamentService::new(database::create_memory_pool().unwrap());
        service.reset().unwrap();
        service
    }

    #[test]
    fn test_names_are_trimmed_and_required() {
        let service = service();

        assert_eq!(service.register_player("  Mia  ").unwrap().name, "Mia");
        assert!(matches!(
            service.register_player("   "),
            Err(TournamentError::InvalidInput(_))
        ));
        assert!(matches!(
            service.create_tournament(""),
            Err(TournamentError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_ids_are_validated_numerically() {
        let service = service();

        assert!(matches!(service.standings(0), Err(TournamentError::InvalidInput(_))));
        assert!(matches!(service.swiss_pairings(-3), Err(TournamentError::InvalidInput(_))));
        assert!(matches!(service.tournament(12), Err(TournamentError::NotFound { .. })));
    }

    #[test]
    fn test_report_match_rejects_bad_winner_and_self_play() {
        let service = service();
        let t = service.create_tournament("Cup").unwrap().id;
        let a = service.register_player("A").unwrap().id;
        let b = service.register_player("B").unwrap().id;
        let c = service.register_player("C").unwrap().id;

        assert!(matches!(
            service.report_match(t, a, Some(b), Some(c)),
            Err(TournamentError::InvalidInput(_))
        ));
        assert!(matches!(
            service.report_match(t, a, Some(a), None),
            Err(TournamentError::InvalidInput(_))
        ));
        assert!(matches!(
            service.report_match(t, a, None, Some(b)),
            Err(TournamentError::InvalidInput(_))
        ));
        assert!(matches!(
            service.report_match(t, a, Some(9_999), None),
            Err(TournamentError::NotFound { entity: "player", id: 9_999 })
        ));
        assert!(service.matches(t).unwrap().is_empty());
    }

    #[test]
    fn test_bye_counts_as_win() {
        let service = service();
        let t = service.create_tournament("Cup").unwrap().id;
        let a = service.register_player("A").unwrap().id;

        let bye = service.report_bye(t, a).unwrap();

        assert_eq!(bye.winner, Some(a));
        let standing = &service.standings(t).unwrap()[0];
        assert_eq!((standing.wins, standing.byes, standing.matches), (1, 1, 1));
    }

    #[test]
    fn test_pairings_for_unknown_tournament_are_invalid_input() {
        let service = service();
        service.register_player("A").unwrap();

        assert!(matches!(
            service.swiss_pairings(77),
            Err(TournamentError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_deletes_cascade_through_counts() {
        let service = service();
        let t = service.create_tournament("Cup").unwrap().id;
        let a = service.register_player("A").unwrap().id;
        let b = service.register_player("B").unwrap().id;
        service.report_match(t, a, Some(b), Some(a)).unwrap();

        assert_eq!(service.delete_matches().unwrap(), 1);
        assert_eq!(service.delete_players().unwrap(), 2);
        assert_eq!(service.count_players().unwrap(), 0);
        assert_eq!(service.delete_tournaments().unwrap(), 1);
        assert!(service.tournaments().unwrap().is_empty());
    }
}
