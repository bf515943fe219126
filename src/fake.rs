//! Synthetic data generation helpers.
//!
//! Thin wrapper over the `fake` crate plus the uniform draws the builders
//! need, all funneled through one RNG so a seeded run is reproducible.

use fake::faker::address::en::{CityName, StateName};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Synthetic data generator backed by a single RNG
pub struct SyntheticData<R: Rng> {
    rng: R,
}

impl SyntheticData<StdRng> {
    /// Generator seeded for reproducible output
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SyntheticData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    pub fn state(&mut self) -> String {
        StateName().fake_with_rng(&mut self.rng)
    }

    pub fn company(&mut self) -> String {
        CompanyName().fake_with_rng(&mut self.rng)
    }

    /// A single lowercase word with the first letter uppercased
    pub fn capitalized_word(&mut self) -> String {
        let mut word: String = Word().fake_with_rng(&mut self.rng);
        if let Some(first) = word.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        word
    }

    /// Pick a value from a fixed enumeration
    pub fn choice<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.random_range(0..items.len())]
    }

    /// Pick a value from a non-empty slice, returning a copy
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }

    /// Uniform price over (min, max) rounded to 2 decimal places
    pub fn price(&mut self, min: f64, max: f64) -> f64 {
        let value = self.rng.random_range(min..max);
        (value * 100.0).round() / 100.0
    }

    /// Uniform integer in [min, max]
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Lowercase hex token of the given length (ticket identifiers)
    pub fn token(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| {
                let d = self.rng.random_range(0..16u32);
                char::from_digit(d, 16).unwrap_or('0')
            })
            .collect()
    }
}
