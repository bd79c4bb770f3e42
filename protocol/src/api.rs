use bingo_core::{
    Board, InvalidArgument, Result, TogglePayload, average_difficulty, build_toggle_payload,
};
use serde::{Deserialize, Serialize};

/// `GET`: roster of every player with a board.
pub const PLAYERS_PATH: &str = "/api/players";
/// `POST` a [`CreatePlayerRequest`], answered with a [`PlayerResponse`].
pub const CREATE_PLAYER_PATH: &str = "/api/player";
/// `POST` a [`TogglePayload`], answered with a [`PlayerResponse`].
pub const TOGGLE_STATE_PATH: &str = "/api/state";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub slug: String,
    /// Where the player's [`PlayerBoard`] document is served from.
    pub file: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayersResponse {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerBoard {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub board: Option<Board>,
}

impl PlayerBoard {
    pub fn average_difficulty(&self) -> i64 {
        average_difficulty(self.board.as_ref())
    }

    /// Payload that flips the current completion state of `cell_key`.
    pub fn toggle_request(&self, cell_key: &str) -> Result<TogglePayload> {
        if cell_key.is_empty() {
            return Err(InvalidArgument::MissingCellKey.into());
        }

        let cell = self
            .board
            .as_ref()
            .and_then(|board| board.get(cell_key))
            .ok_or(InvalidArgument::UnknownCell)?;

        build_toggle_payload(&self.name, cell_key, !cell.done)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerResponse {
    #[serde(default)]
    pub player: Option<PlayerBoard>,
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

impl CreatePlayerRequest {
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidArgument::MissingPlayerName.into());
        }
        Ok(Self {
            name: name.to_owned(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
