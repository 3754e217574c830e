//! Embedding synthesizer trait.
//!
//! Defines the seam between deterministic chunking (this crate) and
//! whatever produces the placeholder vectors attached to each chunk.
//! The application supplies a randomized implementation; tests can
//! supply a fixed one.

/// Produces the placeholder embedding vector for a chunk of text.
///
/// Implementations must return vectors of exactly [`dims`](Self::dims)
/// elements. Nothing downstream interprets the values — they exist so
/// a chunk record has the shape a real pipeline would give it.
pub trait EmbeddingSynthesizer: Send + Sync {
    /// Vector dimensionality (e.g. `384`).
    fn dims(&self) -> usize;

    /// Produce a vector for the given chunk text.
    fn synthesize(&self, text: &str) -> Vec<f32>;
}
