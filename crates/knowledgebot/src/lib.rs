//! # KnowledgeBot
//!
//! **A simulated document-ingestion engine for knowledge-assistant demos.**
//!
//! KnowledgeBot reproduces the ingestion lifecycle of a company knowledge
//! base — upload progress, text extraction, chunking, embedding — without
//! any real I/O or computation. Tasks move through a fixed state machine
//! on randomized timers; the extracted content, chunks, and metadata are
//! all synthesized.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌────────────────┐   ┌─────────────┐
//! │ Screening │──▶│ IntakeSimulator │──▶│ MemoryStore  │
//! │ type/size │   │ tick → process │   │ ordered, id  │
//! └──────────┘   └───────┬────────┘   └─────────────┘
//!                        │ render / toast
//!                        ▼
//!                 ┌─────────────┐
//!                 │  Presenter   │  human / JSON lines / off
//!                 └─────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! 1. The shell screens a file ([`screen`]) — rejected files never
//!    become tasks.
//! 2. [`intake::IntakeSimulator::start`] creates a task in `Uploading`
//!    at progress 0 and returns immediately.
//! 3. Every tick, progress grows by a random amount and the presenter
//!    re-renders the task; at 100 the task enters `Processing`.
//! 4. After a one-shot random delay the task completes: template text
//!    is "extracted", chunked ([`knowledgebot_core::chunk`]), embedded
//!    ([`synth`]), and metadata is fabricated.
//! 5. Deleting a task at any point silently absorbs its pending timers.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`intake`] | The task state machine and its drivers |
//! | [`scheduler`] | Timer abstraction (injectable for tests) |
//! | [`synth`] | Seedable randomized synthesis policy |
//! | [`presenter`] | Render/toast reporters (stderr, JSON, off) |
//! | [`screen`] | Upstream media-type and size screening |
//! | [`export`] | Extracted-text and transcript export |
//! | [`demo`] | Demo library seeding |

pub mod config;
pub mod demo;
pub mod export;
pub mod intake;
pub mod presenter;
pub mod scheduler;
pub mod screen;
pub mod synth;
