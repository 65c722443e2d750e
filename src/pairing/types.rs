use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type TournamentId = i64;

/// One ranked entry of the pairing input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub player_id: PlayerId,
    pub player_name: String,
    pub bye_count: i64,
}

impl StandingRow {
    pub fn new(player_id: PlayerId, player_name: impl Into<String>, bye_count: i64) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
            bye_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pairing {
    Match {
        player1_id: PlayerId,
        player1_name: String,
        player2_id: PlayerId,
        player2_name: String,
    },
    Bye {
        player_id: PlayerId,
        player_name: String,
    },
}

impl Pairing {
    pub fn is_bye(&self) -> bool {
        matches!(self, Pairing::Bye { .. })
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        match self {
            Pairing::Match {
                player1_id,
                player2_id,
                ..
            } => vec![*player1_id, *player2_id],
            Pairing::Bye { player_id, .. } => vec![*player_id],
        }
    }

    /// Flat `(id1, name1, id2, name2)` view; the second half is empty for a bye
    pub fn as_tuple(&self) -> (PlayerId, &str, Option<PlayerId>, Option<&str>) {
        match self {
            Pairing::Match {
                player1_id,
                player1_name,
                player2_id,
                player2_name,
            } => (
                *player1_id,
                player1_name.as_str(),
                Some(*player2_id),
                Some(player2_name.as_str()),
            ),
            Pairing::Bye {
                player_id,
                player_name,
            } => (*player_id, player_name.as_str(), None, None),
        }
    }
}

/// Wire shape shared by the API and the CLI: a bye carries null opponent fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingRecord {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: Option<PlayerId>,
    pub player2_name: Option<String>,
}

impl From<&Pairing> for PairingRecord {
    fn from(pairing: &Pairing) -> Self {
        let (player1_id, player1_name, player2_id, player2_name) = pairing.as_tuple();
        Self {
            player1_id,
            player1_name: player1_name.to_string(),
            player2_id,
            player2_name: player2_name.map(str::to_string),
        }
    }
}
