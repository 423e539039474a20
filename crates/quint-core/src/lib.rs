//! Rules engine for a five-dice game in the Yahtzee family.
//!
//! The crate owns the parts with actual decision logic: mapping uniform
//! randomness to die faces, classifying a hand of five dice into a scoring
//! combination under a fixed precedence chain, and the turn and round
//! bookkeeping that decides when a match ends and who won. Randomness
//! enters only through [`dice::RandomSource`], so every rule is
//! deterministically testable. Rendering, persistence and the interactive
//! loop are the consumer's business; `quint-sim` shows the intended driving
//! loop.

pub mod dice;
pub mod game;
pub mod player;
pub mod scoring;
pub mod turn;
pub mod util;
