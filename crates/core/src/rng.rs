//! Piece sources - where the next piece kind comes from
//!
//! The game draws each kind independently and uniformly from the seven
//! kinds (no bag). [`RandomPieces`] does that with a seedable PCG so runs can
//! be replayed; [`SequencePieces`] cycles a fixed list for tests, benches and
//! scripted puzzles.

use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::types::PieceKind;

/// Supplies piece kinds to the engine.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform independent draws from a PCG32 stream
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: Pcg32,
}

impl RandomPieces {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, otherwise from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self {
                rng: Pcg32::from_os_rng(),
            },
        }
    }
}

impl PieceSource for RandomPieces {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }
}

/// Replays a fixed list of kinds, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequencePieces {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequencePieces {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "piece sequence must not be empty");
        Self { kinds, index: 0 }
    }

    /// Same kind forever
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for SequencePieces {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}
