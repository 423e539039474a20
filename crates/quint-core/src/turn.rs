use serde::{Deserialize, Serialize};

use crate::dice::{Die, NUM_DICE, RandomSource};
use crate::scoring;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("dice have not been rolled yet")]
    NotRolled,
    #[error("reroll position {0} is out of range")]
    IndexOutOfRange(usize),
    #[error("reroll position {0} listed more than once")]
    DuplicateIndex(usize),
}

/// One player's roll, reroll and score cycle over five dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Current faces in fill order; empty until the first roll.
    pub rolls: Vec<u8>,
    /// Ascending view of `rolls`. Empty until `sort_rolls` runs, and cleared
    /// again by any roll or reroll so classification never reads a stale
    /// ordering.
    pub sorted_rolls: Vec<u8>,
    /// Full rolls plus rerolls taken so far. Not capped here; standard play
    /// stops at `MAX_ROLLS`.
    pub number_of_rolls: u8,
}

impl Turn {
    pub fn new() -> Self {
        Self {
            rolls: Vec::new(),
            sorted_rolls: Vec::new(),
            number_of_rolls: 0,
        }
    }

    /// Replace the whole hand with five fresh rolls.
    pub fn roll_dice<S: RandomSource>(&mut self, die: &mut Die<S>) {
        self.rolls.clear();
        for _ in 0..NUM_DICE {
            self.rolls.push(die.roll());
        }
        self.sorted_rolls.clear();
        self.number_of_rolls += 1;
    }

    /// Reroll exactly the dice at `indices`, in the order given.
    ///
    /// The positions are validated up front; on any error the hand and the
    /// roll counter stay untouched. An empty list is a valid reroll and
    /// still counts as one.
    pub fn reroll_dice<S: RandomSource>(
        &mut self,
        die: &mut Die<S>,
        indices: &[usize],
    ) -> Result<(), TurnError> {
        if self.rolls.is_empty() {
            return Err(TurnError::NotRolled);
        }
        let mut seen = [false; NUM_DICE];
        for &idx in indices {
            if idx >= NUM_DICE {
                return Err(TurnError::IndexOutOfRange(idx));
            }
            if seen[idx] {
                return Err(TurnError::DuplicateIndex(idx));
            }
            seen[idx] = true;
        }
        for &idx in indices {
            self.rolls[idx] = die.roll();
        }
        self.sorted_rolls.clear();
        self.number_of_rolls += 1;
        Ok(())
    }

    /// Derive the ascending view the classification predicates read.
    /// `rolls` itself keeps its fill order.
    pub fn sort_rolls(&mut self) {
        self.sorted_rolls.clear();
        self.sorted_rolls.extend_from_slice(&self.rolls);
        self.sorted_rolls.sort_unstable();
    }

    /// True when all five dice show one face. Like every predicate below it
    /// reads the sorted view, so it stays `false` until `sort_rolls` runs.
    pub fn is_five_of_a_kind(&self) -> bool {
        scoring::is_five_of_a_kind(&self.sorted_rolls)
    }

    pub fn is_four_of_a_kind(&self) -> bool {
        scoring::is_four_of_a_kind(&self.sorted_rolls)
    }

    pub fn is_straight(&self) -> bool {
        scoring::is_straight(&self.sorted_rolls)
    }

    pub fn is_full_house(&self) -> bool {
        scoring::is_full_house(&self.sorted_rolls)
    }

    pub fn is_three_of_a_kind(&self) -> bool {
        scoring::is_three_of_a_kind(&self.sorted_rolls)
    }

    pub fn is_small_straight(&self) -> bool {
        scoring::is_small_straight(&self.sorted_rolls)
    }

    /// Score the hand under the fixed precedence chain. Sorts first, so it
    /// is safe to call straight after a roll.
    pub fn evaluate_rolls(&mut self) -> u32 {
        self.sort_rolls();
        scoring::evaluate(&self.sorted_rolls)
    }
}

impl Default for Turn {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FaceSequence;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_turn_is_blank() {
        let turn = Turn::new();
        assert!(turn.rolls.is_empty());
        assert!(turn.sorted_rolls.is_empty());
        assert_eq!(turn.number_of_rolls, 0);
    }

    #[test]
    fn test_roll_dice_fills_five_and_counts() {
        let mut die = Die::new(FaceSequence::new([6]));
        let mut turn = Turn::new();
        turn.roll_dice(&mut die);
        assert_eq!(turn.rolls, [6, 6, 6, 6, 6]);
        assert_eq!(turn.number_of_rolls, 1);
    }

    #[test]
    fn test_each_roll_replaces_the_hand() {
        let mut die = Die::new(StdRng::seed_from_u64(42));
        let mut turn = Turn::new();
        for expected in 1..=3 {
            turn.roll_dice(&mut die);
            assert_eq!(turn.rolls.len(), NUM_DICE);
            assert_eq!(turn.number_of_rolls, expected);
        }
    }

    #[test]
    fn test_reroll_replaces_selected_positions() {
        let mut sixes = Die::new(FaceSequence::new([6]));
        let mut ones = Die::new(FaceSequence::new([1]));
        let mut turn = Turn::new();
        turn.roll_dice(&mut sixes);
        turn.reroll_dice(&mut ones, &[0, 2, 4]).unwrap();
        assert_eq!(turn.rolls, [1, 6, 1, 6, 1]);
        assert_eq!(turn.number_of_rolls, 2);
    }

    #[test]
    fn test_empty_reroll_still_counts() {
        let mut die = Die::new(FaceSequence::new([3]));
        let mut turn = Turn::new();
        turn.roll_dice(&mut die);
        turn.reroll_dice(&mut die, &[]).unwrap();
        assert_eq!(turn.rolls, [3, 3, 3, 3, 3]);
        assert_eq!(turn.number_of_rolls, 2);
    }

    #[test]
    fn test_reroll_before_roll_is_rejected() {
        let mut die = Die::new(FaceSequence::new([1]));
        let mut turn = Turn::new();
        let err = turn.reroll_dice(&mut die, &[0]).unwrap_err();
        assert_eq!(err, TurnError::NotRolled);
        assert_eq!(turn.number_of_rolls, 0);
    }

    #[test]
    fn test_reroll_rejects_out_of_range_position() {
        let mut die = Die::new(FaceSequence::new([6]));
        let mut turn = Turn::new();
        turn.roll_dice(&mut die);
        let err = turn.reroll_dice(&mut die, &[5]).unwrap_err();
        assert_eq!(err, TurnError::IndexOutOfRange(5));
    }

    #[test]
    fn test_reroll_rejects_duplicate_position() {
        let mut die = Die::new(FaceSequence::new([6]));
        let mut turn = Turn::new();
        turn.roll_dice(&mut die);
        let err = turn.reroll_dice(&mut die, &[0, 0]).unwrap_err();
        assert_eq!(err, TurnError::DuplicateIndex(0));
    }

    #[test]
    fn test_failed_reroll_leaves_hand_and_counter_alone() {
        let mut sixes = Die::new(FaceSequence::new([6]));
        let mut ones = Die::new(FaceSequence::new([1]));
        let mut turn = Turn::new();
        turn.roll_dice(&mut sixes);
        assert!(turn.reroll_dice(&mut ones, &[0, 9]).is_err());
        assert_eq!(turn.rolls, [6, 6, 6, 6, 6]);
        assert_eq!(turn.number_of_rolls, 1);
    }

    #[test]
    fn test_sort_rolls_is_a_view() {
        let mut turn = Turn::new();
        turn.rolls = vec![4, 3, 1, 6, 2];
        turn.sort_rolls();
        assert_eq!(turn.sorted_rolls, [1, 2, 3, 4, 6]);
        assert_eq!(turn.rolls, [4, 3, 1, 6, 2]);
        turn.sort_rolls();
        assert_eq!(turn.sorted_rolls, [1, 2, 3, 4, 6]);
    }

    #[test]
    fn test_predicates_false_until_sorted() {
        let mut die = Die::new(FaceSequence::new([6]));
        let mut turn = Turn::new();
        turn.roll_dice(&mut die);
        assert!(!turn.is_five_of_a_kind());
        assert!(!turn.is_four_of_a_kind());
        assert!(!turn.is_straight());
        assert!(!turn.is_full_house());
        assert!(!turn.is_three_of_a_kind());
        assert!(!turn.is_small_straight());
        turn.sort_rolls();
        assert!(turn.is_five_of_a_kind());
    }

    #[test]
    fn test_reroll_invalidates_sorted_view() {
        let mut sixes = Die::new(FaceSequence::new([6]));
        let mut ones = Die::new(FaceSequence::new([1]));
        let mut turn = Turn::new();
        turn.roll_dice(&mut sixes);
        turn.sort_rolls();
        assert!(turn.is_five_of_a_kind());
        turn.reroll_dice(&mut ones, &[0]).unwrap();
        assert!(turn.sorted_rolls.is_empty());
        assert!(!turn.is_five_of_a_kind());
        turn.sort_rolls();
        assert_eq!(turn.sorted_rolls, [1, 6, 6, 6, 6]);
        assert!(turn.is_four_of_a_kind());
    }

    #[test]
    fn test_evaluate_rolls_sorts_internally() {
        let mut die = Die::new(FaceSequence::new([5, 4, 3, 2, 1]));
        let mut turn = Turn::new();
        turn.roll_dice(&mut die);
        assert_eq!(turn.evaluate_rolls(), 40);
        assert_eq!(turn.rolls, [5, 4, 3, 2, 1]);
        assert_eq!(turn.sorted_rolls, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_evaluate_rolls_scenarios() {
        let cases: [(&[u8], u32); 7] = [
            (&[5, 5, 5, 5, 5], 50),
            (&[5, 5, 5, 5, 3], 20),
            (&[1, 2, 3, 4, 5], 40),
            (&[2, 2, 2, 3, 3], 25),
            (&[2, 2, 2, 4, 5], 6),
            (&[1, 2, 2, 3, 4], 30),
            (&[1, 3, 6, 4, 6], 0),
        ];
        for (rolls, expected) in cases {
            let mut turn = Turn::new();
            turn.rolls = rolls.to_vec();
            assert_eq!(turn.evaluate_rolls(), expected, "rolls {rolls:?}");
        }
    }

    #[test]
    fn test_evaluate_before_any_roll_scores_zero() {
        let mut turn = Turn::new();
        assert_eq!(turn.evaluate_rolls(), 0);
    }
}
