use serde::{Deserialize, Serialize};

/// A participant: an ordinal id and an accumulating score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub score: u32,
}

impl Player {
    pub fn new(id: u32) -> Self {
        Self { id, score: 0 }
    }

    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Add turn points to the running total. Totals only ever grow.
    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }
}
