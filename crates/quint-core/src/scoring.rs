use serde::{Deserialize, Serialize};

use crate::util::compare_arrays;

/// Scoring combinations, declared in evaluation order.
///
/// The order is load-bearing: a five of a kind also satisfies the four and
/// three of a kind predicates, and a full straight contains a small one, so
/// the first match in `ALL` is the one that counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combo {
    FiveOfAKind,
    FourOfAKind,
    Straight,
    FullHouse,
    ThreeOfAKind,
    SmallStraight,
}

impl Combo {
    pub const ALL: [Combo; 6] = [
        Combo::FiveOfAKind,
        Combo::FourOfAKind,
        Combo::Straight,
        Combo::FullHouse,
        Combo::ThreeOfAKind,
        Combo::SmallStraight,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Combo::FiveOfAKind => "Five of a Kind",
            Combo::FourOfAKind => "Four of a Kind",
            Combo::Straight => "Straight",
            Combo::FullHouse => "Full House",
            Combo::ThreeOfAKind => "Three of a Kind",
            Combo::SmallStraight => "Small Straight",
        }
    }

    /// Does a hand of faces satisfy this combination?
    ///
    /// Three of a kind is exclusive: a triple that is part of a four or five
    /// of a kind or a full house does not count as one.
    pub fn matches(self, rolls: &[u8]) -> bool {
        match self {
            Combo::FiveOfAKind => is_five_of_a_kind(rolls),
            Combo::FourOfAKind => is_four_of_a_kind(rolls),
            Combo::Straight => is_straight(rolls),
            Combo::FullHouse => is_full_house(rolls),
            Combo::ThreeOfAKind => is_three_of_a_kind(rolls),
            Combo::SmallStraight => is_small_straight(rolls),
        }
    }
}

/// Occurrences of each face among the rolls; index 0 is unused.
pub fn value_counts(rolls: &[u8]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for &r in rolls {
        counts[r as usize] += 1;
    }
    counts
}

fn has_n_of_a_kind(rolls: &[u8], n: u8) -> bool {
    value_counts(rolls).iter().any(|&c| c >= n)
}

/// Face shown by at least `n` dice, if any.
fn n_of_a_kind_value(rolls: &[u8], n: u8) -> Option<u8> {
    let counts = value_counts(rolls);
    (1..=6u8).find(|&v| counts[v as usize] >= n)
}

pub fn is_five_of_a_kind(rolls: &[u8]) -> bool {
    has_n_of_a_kind(rolls, 5)
}

pub fn is_four_of_a_kind(rolls: &[u8]) -> bool {
    has_n_of_a_kind(rolls, 4)
}

/// All five faces in sequence: sorted, the hand is exactly 1..=5 or 2..=6.
pub fn is_straight(rolls: &[u8]) -> bool {
    let mut sorted = rolls.to_vec();
    sorted.sort_unstable();
    compare_arrays(&sorted, &[1, 2, 3, 4, 5]) || compare_arrays(&sorted, &[2, 3, 4, 5, 6])
}

pub fn is_full_house(rolls: &[u8]) -> bool {
    let counts = value_counts(rolls);
    counts.iter().any(|&c| c == 3) && counts.iter().any(|&c| c == 2)
}

/// A bare triple: exactly three of one face, not bundled into a four or
/// five of a kind or a full house.
pub fn is_three_of_a_kind(rolls: &[u8]) -> bool {
    has_n_of_a_kind(rolls, 3) && !has_n_of_a_kind(rolls, 4) && !is_full_house(rolls)
}

/// Four consecutive faces present among the distinct values; the fifth die
/// is free to be anything, duplicates included.
pub fn is_small_straight(rolls: &[u8]) -> bool {
    let counts = value_counts(rolls);
    (1..=3).any(|start| (start..start + 4).all(|v| counts[v] >= 1))
}

/// First matching combination in precedence order, if any.
pub fn classify(rolls: &[u8]) -> Option<Combo> {
    Combo::ALL.into_iter().find(|c| c.matches(rolls))
}

/// Points for scoring `rolls` as `combo`; 0 when the hand does not satisfy it.
pub fn compute_score(combo: Combo, rolls: &[u8]) -> u32 {
    match combo {
        Combo::FiveOfAKind => {
            if is_five_of_a_kind(rolls) {
                50
            } else {
                0
            }
        }
        Combo::FourOfAKind => n_of_a_kind_value(rolls, 4).map_or(0, |v| 4 * v as u32),
        Combo::Straight => {
            if is_straight(rolls) {
                40
            } else {
                0
            }
        }
        Combo::FullHouse => {
            if is_full_house(rolls) {
                25
            } else {
                0
            }
        }
        Combo::ThreeOfAKind => {
            if is_three_of_a_kind(rolls) {
                n_of_a_kind_value(rolls, 3).map_or(0, |v| 3 * v as u32)
            } else {
                0
            }
        }
        Combo::SmallStraight => {
            if is_small_straight(rolls) {
                30
            } else {
                0
            }
        }
    }
}

/// Score of the first combination the hand satisfies; 0 when none match.
pub fn evaluate(rolls: &[u8]) -> u32 {
    classify(rolls).map_or(0, |combo| compute_score(combo, rolls))
}
