//! # KnowledgeBot Core
//!
//! Shared, runtime-free logic for KnowledgeBot: data models, category
//! rules, sentence chunking, content templates, the task store
//! abstraction, and the embedding synthesizer trait.
//!
//! This crate contains no tokio, no randomness, and no I/O. Everything
//! here is deterministic; the application crate supplies timers and
//! synthesized values.

pub mod category;
pub mod chunk;
pub mod content;
pub mod embedding;
pub mod models;
pub mod store;
