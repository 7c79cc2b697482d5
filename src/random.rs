use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

/// A source of uniform random choices.
///
/// Every `rand::Rng` is a `RandomSource`, so callers can hand the carver a thread rng, a seeded
/// generator or anything else that picks indices.
pub trait RandomSource {
    /// A uniformly random index in `0..upper`. `upper` is never zero.
    fn index(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Fast, reproducible generator for a given seed.
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

/// Replays a recorded list of choices, for tests that need an exact trace.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct ScriptedSource {
    choices: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(choices: &[usize]) -> ScriptedSource {
        ScriptedSource { choices: choices.iter().cloned().collect() }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.choices.len()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn index(&mut self, upper: usize) -> usize {
        let choice = self.choices.pop_front().expect("scripted choices exhausted");
        assert!(choice < upper, "scripted choice {} out of range 0..{}", choice, upper);
        choice
    }
}
