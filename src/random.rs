//! Random sources for simulated readings
//!
//! All simulated values are drawn through [`RandomSource`] so a deterministic
//! sequence can be swapped in where reproducible output is needed.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::info;

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource: Send + Sync {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator to [`RandomSource`]
#[derive(Debug)]
pub struct RngSource<R>(R);

impl RngSource<StdRng> {
    /// Seeded generator when `seed` is given, entropy-seeded otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                info!(seed = seed, "Using seeded random source");
                Self(StdRng::seed_from_u64(seed))
            }
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl<R: RngCore + Send + Sync> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Draws an integer in `[low, low + span)`
pub fn uniform_int(rng: &mut dyn RandomSource, low: u32, span: u32) -> u32 {
    let offset = (rng.next_unit() * f64::from(span)).floor() as u32;
    low + offset.min(span.saturating_sub(1))
}

/// Draws a one-decimal value in `[low_tenths, low_tenths + span_tenths)` tenths
pub fn uniform_tenths(rng: &mut dyn RandomSource, low_tenths: u32, span_tenths: u32) -> f64 {
    f64::from(uniform_int(rng, low_tenths, span_tenths)) / 10.0
}

/// Replays a fixed list of samples, cycling when exhausted
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(samples: Vec<f64>) -> Self {
        assert!(!samples.is_empty(), "scripted source needs samples");
        Self { samples, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_int_bounds() {
        let mut low = ScriptedSource::new(vec![0.0]);
        let mut high = ScriptedSource::new(vec![0.999_999]);

        assert_eq!(uniform_int(&mut low, 60, 40), 60);
        assert_eq!(uniform_int(&mut high, 60, 40), 99);
    }

    #[test]
    fn test_uniform_int_clamps_out_of_range_samples() {
        let mut broken = ScriptedSource::new(vec![1.0]);
        assert_eq!(uniform_int(&mut broken, 90, 10), 99);
    }

    #[test]
    fn test_uniform_tenths() {
        let mut rng = ScriptedSource::new(vec![0.0, 0.5, 0.999]);

        assert_eq!(uniform_tenths(&mut rng, 350, 40), 35.0);
        assert_eq!(uniform_tenths(&mut rng, 350, 40), 37.0);
        assert_eq!(uniform_tenths(&mut rng, 350, 40), 38.9);
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = RngSource::from_seed(Some(42));
        let mut b = RngSource::from_seed(Some(42));

        let first: Vec<f64> = (0..5).map(|_| a.next_unit()).collect();
        let second: Vec<f64> = (0..5).map(|_| b.next_unit()).collect();

        assert_eq!(first, second);
        assert!(first.iter().all(|v| (0.0..1.0).contains(v)));
    }
}
