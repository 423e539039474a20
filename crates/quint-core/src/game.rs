use serde::{Deserialize, Serialize};

use crate::player::Player;

/// Turns each player gets in a standard match.
pub const TURNS_PER_PLAYER: u32 = 13;

/// Match state: who plays, whose turn it is and how far along the match is.
///
/// The game does not own `Turn` values. The driving loop plays each turn and
/// reports back through `Player::add_points` and `turns_completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Turn order, fixed once `create_players` has run.
    pub players: Vec<Player>,
    pub current_player_index: usize,
    /// Completed player-turns, one per turn rather than per round.
    pub turns_completed: u32,
    /// Filled by `determine_winner`; holds more than one entry on a tie.
    pub winners: Vec<Player>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            current_player_index: 0,
            turns_completed: 0,
            winners: Vec::new(),
        }
    }

    /// Replace the roster with `n` fresh players, ids 1..=n in turn order,
    /// and reset all progress.
    pub fn create_players(&mut self, n: usize) {
        self.players = (1..=n).map(|id| Player::new(id as u32)).collect();
        self.current_player_index = 0;
        self.turns_completed = 0;
        self.winners.clear();
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player_index]
    }

    /// Rotate to the next player, wrapping past the end of the roster.
    pub fn next_player(&mut self) {
        if self.players.is_empty() {
            return;
        }
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
    }

    /// A match ends once every player has taken `TURNS_PER_PLAYER` turns.
    /// A game with no players is trivially over.
    pub fn is_over(&self) -> bool {
        self.turns_completed >= self.players.len() as u32 * TURNS_PER_PLAYER
    }

    /// Record every player holding the highest score, in roster order.
    /// Ties are a normal outcome, not an error.
    pub fn determine_winner(&mut self) {
        self.winners.clear();
        if let Some(best) = self.players.iter().map(|p| p.score).max() {
            self.winners = self
                .players
                .iter()
                .filter(|p| p.score == best)
                .cloned()
                .collect();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
