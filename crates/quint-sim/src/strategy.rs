use quint_core::scoring::{self, Combo};
use quint_core::turn::Turn;

/// Positions worth rerolling for the current hand; empty means stand pat.
///
/// Greedy and one-step: keep a made hand, upgrade it when the upgrade
/// cannot lose points, otherwise keep the most frequent face and reroll
/// the rest.
pub fn choose_reroll(turn: &Turn) -> Vec<usize> {
    let rolls = &turn.rolls;
    match scoring::classify(rolls) {
        Some(Combo::FiveOfAKind | Combo::Straight | Combo::FullHouse) => Vec::new(),
        Some(Combo::FourOfAKind | Combo::ThreeOfAKind) | None => {
            positions_not_showing(rolls, modal_face(rolls))
        }
        Some(Combo::SmallStraight) => redundant_run_positions(rolls),
    }
}

/// Face with the highest count, ties going to the higher face.
fn modal_face(rolls: &[u8]) -> u8 {
    let counts = scoring::value_counts(rolls);
    (1..=6u8).max_by_key(|&v| (counts[v as usize], v)).unwrap_or(6)
}

fn positions_not_showing(rolls: &[u8], face: u8) -> Vec<usize> {
    rolls
        .iter()
        .enumerate()
        .filter(|(_, &r)| r != face)
        .map(|(i, _)| i)
        .collect()
}

/// With four consecutive faces already present, keep the first die showing
/// each face of the run and reroll the rest, chasing the full straight.
/// Worst case the run survives untouched, so the 30 points are safe.
fn redundant_run_positions(rolls: &[u8]) -> Vec<usize> {
    let counts = scoring::value_counts(rolls);
    let start = (1..=3)
        .find(|&s| (s..s + 4).all(|v| counts[v] >= 1))
        .unwrap_or(1);
    let run = start..start + 4;

    let mut kept = [false; 7];
    let mut picks = Vec::new();
    for (i, &r) in rolls.iter().enumerate() {
        let v = r as usize;
        if run.contains(&v) && !kept[v] {
            kept[v] = true;
        } else {
            picks.push(i);
        }
    }
    picks
}
