use std::collections::BTreeMap;

use crate::*;

/// Client-side view of every player and the boards fetched for them so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    players: Vec<PlayerSummary>,
    boards: BTreeMap<String, PlayerBoard>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[PlayerSummary] {
        &self.players
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Replaces the player list. Boards already fetched are kept.
    pub fn apply_players(&mut self, response: PlayersResponse) {
        self.players = response.players;
    }

    pub fn insert_board(&mut self, slug: impl Into<String>, board: PlayerBoard) {
        self.boards.insert(slug.into(), board);
    }

    /// Stores the board returned by the create-player or toggle endpoints.
    ///
    /// The player list is only replaced when the response carries one.
    pub fn apply_player_response(&mut self, response: PlayerResponse) {
        if !response.players.is_empty() {
            self.players = response.players;
        }

        let Some(player) = response.player else {
            log::debug!("Player response without a board");
            return;
        };

        if player.slug.is_empty() {
            log::warn!("Board for {:?} has no slug, dropping it", player.name);
            return;
        }

        self.boards.insert(player.slug.clone(), player);
    }

    pub fn board(&self, slug: &str) -> Option<&PlayerBoard> {
        self.boards.get(slug)
    }

    /// Players in roster order paired with their loaded board.
    ///
    /// Players whose board was not fetched, or whose document has no board
    /// map, are skipped.
    pub fn boards(&self) -> impl Iterator<Item = (&PlayerSummary, &PlayerBoard)> {
        self.players.iter().filter_map(|player| {
            self.boards
                .get(&player.slug)
                .filter(|board| board.board.is_some())
                .map(|board| (player, board))
        })
    }
}
