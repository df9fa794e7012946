//! Injectable randomness sources.
//!
//! The engine never reads an ambient generator: every roll takes a
//! [`RandomSource`] argument, so identical requests with identical sample
//! sequences always produce identical results. Production callers wrap a
//! [`rand::Rng`] in [`RngSource`]; tests replay a fixed sequence with
//! [`ScriptedSource`].

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// A uniform source of randomness in `[0, 1)`.
///
/// The engine is safe to use from multiple threads as long as each thread
/// holds its own source, or the source itself is safe for concurrent use.
/// That requirement is on the implementor; the engine does not enforce it.
pub trait RandomSource {
    /// Returns the next uniform sample in `[0, 1)`.
    fn sample(&mut self) -> f64;

    /// Draws one die face in `[1, sides]` from the next sample.
    fn draw(&mut self, sides: u32) -> u32 {
        (self.sample() * f64::from(sides)) as u32 + 1
    }
}

/// Adapter exposing any [`rand::Rng`] as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl RngSource<ThreadRng> {
    /// A source backed by the thread-local generator.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// A seeded source for reproducible roll sequences.
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn sample(&mut self) -> f64 {
        self.0.random()
    }
}

/// A deterministic source that replays a fixed sequence of samples.
///
/// Intended for tests and replays.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    samples: VecDeque<f64>,
}

impl ScriptedSource {
    /// Create a source from raw samples, each in `[0, 1)`.
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    /// Create a source that yields the given faces, in order, when drawn
    /// against a `sides`-sided die.
    ///
    /// Face `f` maps to the sample `(f - 1) / sides`, the low end of the
    /// interval that rounds to `f`.
    ///
    /// # Panics
    ///
    /// Panics when a scripted face is 0; die faces start at 1.
    pub fn faces(sides: u32, faces: &[u32]) -> Self {
        Self::new(faces.iter().map(|&face| {
            assert!(face >= 1, "die faces start at 1");
            f64::from(face - 1) / f64::from(sides)
        }))
    }

    /// Returns true once every scripted sample has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.samples.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    /// Returns the next scripted sample.
    ///
    /// # Panics
    ///
    /// Panics when the script is exhausted; a test drawing more samples than
    /// it scripted is a bug in the test.
    fn sample(&mut self) -> f64 {
        self.samples
            .pop_front()
            .expect("scripted source exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_maps_sample_to_face() {
        let mut source = ScriptedSource::new([0.0, 0.999, 0.5]);
        assert_eq!(source.draw(20), 1);
        assert_eq!(source.draw(20), 20);
        assert_eq!(source.draw(6), 4);
    }

    #[test]
    fn faces_round_trip_through_draw() {
        let mut source = ScriptedSource::faces(20, &[1, 10, 20]);
        assert_eq!(source.draw(20), 1);
        assert_eq!(source.draw(20), 10);
        assert_eq!(source.draw(20), 20);
        assert!(source.is_exhausted());
    }

    #[test]
    #[should_panic(expected = "die faces start at 1")]
    fn zero_face_script_panics() {
        let _ = ScriptedSource::faces(6, &[0]);
    }

    #[test]
    #[should_panic(expected = "scripted source exhausted")]
    fn exhausted_script_panics() {
        let mut source = ScriptedSource::new([]);
        let _ = source.sample();
    }

    #[test]
    fn rng_source_stays_in_bounds() {
        let mut source = RngSource::seeded(42);
        for _ in 0..1000 {
            let sample = source.sample();
            assert!((0.0..1.0).contains(&sample));
            let face = source.draw(6);
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn seeded_source_is_deterministic() {
        let mut a = RngSource::seeded(99);
        let mut b = RngSource::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.draw(20), b.draw(20));
        }
    }
}
