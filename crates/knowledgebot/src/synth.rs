//! Seedable randomized synthesis policy.
//!
//! Every random draw in the system — tick increments, processing
//! delays, fabricated metadata, placeholder embeddings — comes from
//! one [`Synthesizer`], so a single seed reproduces an entire run.

use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;
use knowledgebot_core::embedding::EmbeddingSynthesizer;
use knowledgebot_core::models::TaskMetadata;

use crate::config::{EmbeddingConfig, SimulationConfig};

pub struct Synthesizer {
    rng: Mutex<fastrand::Rng>,
    simulation: SimulationConfig,
    dims: usize,
}

impl Synthesizer {
    pub fn new(simulation: SimulationConfig, embedding: &EmbeddingConfig) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
            simulation,
            dims: embedding.dims,
        }
    }

    /// Same policy, but reproducible.
    pub fn seeded(simulation: SimulationConfig, embedding: &EmbeddingConfig, seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
            simulation,
            dims: embedding.dims,
        }
    }

    /// Per-tick progress increment, uniform in `(0, max_increment]`.
    ///
    /// The unit interval is flipped so a draw of exactly zero — which
    /// would stall a task forever — cannot occur.
    pub fn tick_increment(&self) -> f64 {
        let r = self.rng.lock().unwrap().f64();
        (1.0 - r) * self.simulation.max_increment
    }

    /// One-shot processing delay, uniform in `[min, max)` milliseconds.
    pub fn processing_delay(&self) -> Duration {
        let min = self.simulation.processing_delay_min_ms;
        let span = self
            .simulation
            .processing_delay_max_ms
            .saturating_sub(min);
        let ms = if span == 0 {
            min
        } else {
            min + self.rng.lock().unwrap().u64(0..span)
        };
        Duration::from_millis(ms)
    }

    /// Fabricate completion metadata for a task with `chunk_count`
    /// derived chunks.
    pub fn metadata(&self, chunk_count: usize) -> TaskMetadata {
        let mut rng = self.rng.lock().unwrap();
        TaskMetadata {
            pages: rng.u32(1..=50),
            word_count: rng.u32(500..5500),
            language: "en".to_string(),
            processing_time: format!("{:.2}s", 5.0 + rng.f64() * 10.0),
            chunk_count,
            last_modified: Utc::now(),
        }
    }
}

impl EmbeddingSynthesizer for Synthesizer {
    fn dims(&self) -> usize {
        self.dims
    }

    fn synthesize(&self, _text: &str) -> Vec<f32> {
        let mut rng = self.rng.lock().unwrap();
        (0..self.dims).map(|_| rng.f32()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synth(seed: u64) -> Synthesizer {
        Synthesizer::seeded(
            SimulationConfig::default(),
            &EmbeddingConfig::default(),
            seed,
        )
    }

    #[test]
    fn tick_increment_stays_in_half_open_range() {
        let s = synth(1);
        for _ in 0..1000 {
            let inc = s.tick_increment();
            assert!(inc > 0.0, "zero increment would stall the task");
            assert!(inc <= 20.0);
        }
    }

    #[test]
    fn processing_delay_stays_in_bounds() {
        let s = synth(2);
        for _ in 0..1000 {
            let delay = s.processing_delay();
            assert!(delay >= Duration::from_millis(2000));
            assert!(delay < Duration::from_millis(5000));
        }
    }

    #[test]
    fn degenerate_delay_bounds_yield_the_minimum() {
        let s = Synthesizer::seeded(
            SimulationConfig {
                processing_delay_min_ms: 100,
                processing_delay_max_ms: 100,
                ..SimulationConfig::default()
            },
            &EmbeddingConfig::default(),
            3,
        );
        assert_eq!(s.processing_delay(), Duration::from_millis(100));
    }

    #[test]
    fn metadata_within_bounds() {
        let s = synth(4);
        for _ in 0..200 {
            let meta = s.metadata(7);
            assert!((1..=50).contains(&meta.pages));
            assert!((500..5500).contains(&meta.word_count));
            assert_eq!(meta.language, "en");
            assert!(meta.processing_time.ends_with('s'));
            assert_eq!(meta.chunk_count, 7);
        }
    }

    #[test]
    fn embeddings_have_configured_dims_and_unit_range() {
        let s = synth(5);
        let vector = s.synthesize("some chunk text");
        assert_eq!(vector.len(), 384);
        assert!(vector.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn same_seed_reproduces_draws() {
        let a = synth(42);
        let b = synth(42);
        assert_eq!(a.tick_increment(), b.tick_increment());
        assert_eq!(a.processing_delay(), b.processing_delay());
        assert_eq!(a.synthesize("x"), b.synthesize("x"));
    }
}
