use std::ops::RangeInclusive;
use rand::Rng;

/// Source of the integer draws the animation is built from.
///
/// Both bounds of `range` are inclusive, so `value_in(0..=10) == 0` has a one in
/// eleven chance.
pub trait RandomSource {
    fn value_in(&mut self, range: RangeInclusive<u32>) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn value_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.random_range(range)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[cfg(test)]
pub struct Scripted {
    values: Vec<u32>,
    next: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(values: &[u32]) -> Self {
        Self { values: values.to_vec(), next: 0 }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn value_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        assert!(range.contains(&value), "scripted draw {} outside {:?}", value, range);
        value
    }
}
