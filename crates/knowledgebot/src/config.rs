//! TOML configuration parsing.
//!
//! Every field has a default matching the original demo's behavior, so
//! an empty file — or no file at all — yields a working configuration.
//! Timing values are what tests override to keep runs fast.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub screening: ScreeningConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
}

/// Timing and progress policy for the intake state machine.
#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    /// Upload tick interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Upper bound of the per-tick progress increment; each tick draws
    /// uniformly from `(0, max_increment]`.
    #[serde(default = "default_max_increment")]
    pub max_increment: f64,
    /// Processing delay lower bound (inclusive), milliseconds.
    #[serde(default = "default_delay_min_ms")]
    pub processing_delay_min_ms: u64,
    /// Processing delay upper bound (exclusive), milliseconds.
    #[serde(default = "default_delay_max_ms")]
    pub processing_delay_max_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            max_increment: default_max_increment(),
            processing_delay_min_ms: default_delay_min_ms(),
            processing_delay_max_ms: default_delay_max_ms(),
        }
    }
}

fn default_tick_ms() -> u64 {
    500
}
fn default_max_increment() -> f64 {
    20.0
}
fn default_delay_min_ms() -> u64 {
    2000
}
fn default_delay_max_ms() -> u64 {
    5000
}

/// Upstream file screening bounds.
#[derive(Debug, Deserialize, Clone)]
pub struct ScreeningConfig {
    /// Maximum accepted file size in bytes.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
    /// Accepted declared media types.
    #[serde(default = "default_media_types")]
    pub allowed_media_types: Vec<String>,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: default_max_file_bytes(),
            allowed_media_types: default_media_types(),
        }
    }
}

fn default_max_file_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_media_types() -> Vec<String> {
    [
        "application/pdf",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "application/msword",
        "text/plain",
        "text/csv",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "application/vnd.ms-excel",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    /// Sentences grouped into each chunk.
    #[serde(default = "default_sentences_per_chunk")]
    pub sentences_per_chunk: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            sentences_per_chunk: default_sentences_per_chunk(),
        }
    }
}

fn default_sentences_per_chunk() -> usize {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmbeddingConfig {
    /// Dimensionality of the placeholder embedding vectors.
    #[serde(default = "default_dims")]
    pub dims: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dims: default_dims(),
        }
    }
}

fn default_dims() -> usize {
    384
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: Config =
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    let sim = &config.simulation;
    if sim.tick_ms == 0 {
        bail!("simulation.tick_ms must be positive");
    }
    if !(sim.max_increment > 0.0) {
        bail!("simulation.max_increment must be positive");
    }
    if sim.processing_delay_max_ms < sim.processing_delay_min_ms {
        bail!(
            "simulation.processing_delay_max_ms ({}) is below processing_delay_min_ms ({})",
            sim.processing_delay_max_ms,
            sim.processing_delay_min_ms
        );
    }
    if config.chunking.sentences_per_chunk == 0 {
        bail!("chunking.sentences_per_chunk must be positive");
    }
    if config.embedding.dims == 0 {
        bail!("embedding.dims must be positive");
    }
    Ok(())
}
