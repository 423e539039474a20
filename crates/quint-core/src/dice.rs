use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

pub const NUM_DICE: usize = 5;

/// Customary cap on rolls per turn. The engine does not enforce it; callers
/// that play by the book stop rolling here.
pub const MAX_ROLLS: u8 = 3;

/// Uniform randomness in `[0, 1)`, the single seam behind every die roll.
///
/// Implementations must stay inside the half-open unit interval; the sample
/// is mapped straight to a face with no further clamping.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen()
    }
}

impl RandomSource for ThreadRng {
    fn next_unit(&mut self) -> f64 {
        self.gen()
    }
}

/// Always yields the same unit sample. `FixedUnit(0.98)` rolls a 6 forever.
#[derive(Debug, Clone, Copy)]
pub struct FixedUnit(pub f64);

impl RandomSource for FixedUnit {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Plays back a scripted sequence of faces, cycling once exhausted.
///
/// Each face is emitted as its unit-interval midpoint, so the usual
/// `floor(u * 6) + 1` mapping lands exactly on the scripted value.
#[derive(Debug, Clone)]
pub struct FaceSequence {
    faces: Vec<u8>,
    next: usize,
}

impl FaceSequence {
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        let faces = faces.into();
        assert!(!faces.is_empty(), "face sequence must not be empty");
        assert!(
            faces.iter().all(|f| (1..=6).contains(f)),
            "faces must be in 1..=6"
        );
        Self { faces, next: 0 }
    }
}

impl RandomSource for FaceSequence {
    fn next_unit(&mut self) -> f64 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        (face as f64 - 0.5) / 6.0
    }
}

/// A six-sided die over an injected randomness source.
#[derive(Debug, Clone)]
pub struct Die<S> {
    source: S,
}

impl<S: RandomSource> Die<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// One roll: a uniform face in 1..=6, via `floor(u * 6) + 1`.
    pub fn roll(&mut self) -> u8 {
        (self.source.next_unit() * 6.0) as u8 + 1
    }
}

impl Die<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}
