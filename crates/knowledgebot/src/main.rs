//! # KnowledgeBot CLI (`kbot`)
//!
//! The `kbot` binary drives the simulated ingestion engine from the
//! command line: it screens files, runs them through the intake state
//! machine with live progress on stderr, and prints a summary on
//! stdout.
//!
//! ## Usage
//!
//! ```bash
//! kbot [--config ./config/kbot.toml] <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `kbot ingest <NAME>...` | Simulate ingestion of one or more files |
//! | `kbot categorize <NAME>` | Print the category a filename is assigned |
//! | `kbot demo` | Seed the demo library and print it |
//!
//! ## Examples
//!
//! ```bash
//! # One 500KB PDF with live progress
//! kbot ingest policy.pdf --size 512000
//!
//! # Three concurrent uploads, reproducible, JSON progress events
//! kbot ingest a.pdf b.docx notes.txt --seed 7 --progress json
//!
//! # Keep the extracted text
//! kbot ingest handbook.pdf --export-dir ./out
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use knowledgebot::config::{self, Config};
use knowledgebot::demo::seed_demo_library;
use knowledgebot::export::{export_extracted_text, extracted_text_filename};
use knowledgebot::intake::IntakeSimulator;
use knowledgebot::presenter::{PresenterMode, ToastLevel};
use knowledgebot::scheduler::TokioScheduler;
use knowledgebot::screen::screen;
use knowledgebot::synth::Synthesizer;
use knowledgebot_core::category::categorize;
use knowledgebot_core::models::{DocumentTask, FileMeta, TaskStatus};
use knowledgebot_core::store::memory::MemoryTaskStore;
use knowledgebot_core::store::TaskStore;

/// KnowledgeBot — a simulated document-ingestion engine for
/// knowledge-assistant demos.
#[derive(Parser)]
#[command(
    name = "kbot",
    about = "KnowledgeBot — a simulated document-ingestion engine for knowledge-assistant demos",
    version,
    long_about = "KnowledgeBot reproduces the ingestion lifecycle of a company knowledge base — \
    upload progress, text extraction, chunking, embedding — without any real I/O. Tasks move \
    uploading → processing → completed on randomized timers; content and metadata are synthesized."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Every setting has a default, so this may be omitted entirely.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Progress output on stderr. Defaults to `human` when stderr is a
    /// TTY, `off` otherwise.
    #[arg(long, global = true, value_enum)]
    progress: Option<ProgressArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProgressArg {
    Human,
    Json,
    Off,
}

impl ProgressArg {
    fn mode(self) -> PresenterMode {
        match self {
            ProgressArg::Human => PresenterMode::Human,
            ProgressArg::Json => PresenterMode::Json,
            ProgressArg::Off => PresenterMode::Off,
        }
    }
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Simulate ingestion of one or more files.
    ///
    /// Files are screened first (media type, size bound); accepted
    /// ones upload concurrently with live progress, then process and
    /// complete. The summary and category counts go to stdout.
    Ingest {
        /// Display names of the files to ingest.
        #[arg(required = true)]
        names: Vec<String>,

        /// Byte size declared for every file.
        #[arg(long, default_value_t = 512_000)]
        size: u64,

        /// Media type declared for every file.
        #[arg(long, default_value = "application/pdf")]
        media_type: String,

        /// Seed for the synthesis policy — same seed, same run.
        #[arg(long)]
        seed: Option<u64>,

        /// Write each completed task's extracted text into this directory.
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },

    /// Print the category a filename would be assigned.
    Categorize {
        /// Display name to classify.
        name: String,
    },

    /// Seed the demo library and print its contents.
    Demo {
        /// Seed for the synthesis policy.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::default(),
    };
    let mode = cli
        .progress
        .map(ProgressArg::mode)
        .unwrap_or_else(PresenterMode::default_for_tty);

    match cli.command {
        Commands::Ingest {
            names,
            size,
            media_type,
            seed,
            export_dir,
        } => {
            run_ingest(&cfg, mode, names, size, media_type, seed, export_dir).await?;
        }
        Commands::Categorize { name } => {
            println!("{}", categorize(&name));
        }
        Commands::Demo { seed } => {
            run_demo(&cfg, seed);
        }
    }

    Ok(())
}

fn build_synth(cfg: &Config, seed: Option<u64>) -> Synthesizer {
    match seed {
        Some(seed) => Synthesizer::seeded(cfg.simulation.clone(), &cfg.embedding, seed),
        None => Synthesizer::new(cfg.simulation.clone(), &cfg.embedding),
    }
}

async fn run_ingest(
    cfg: &Config,
    mode: PresenterMode,
    names: Vec<String>,
    size: u64,
    media_type: String,
    seed: Option<u64>,
    export_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let store: Arc<dyn TaskStore> = Arc::new(MemoryTaskStore::new());
    let shell = mode.shell();
    let simulator = IntakeSimulator::new(
        Arc::clone(&store),
        mode.presenter(),
        Arc::clone(&shell),
        Arc::new(TokioScheduler),
        Arc::new(build_synth(cfg, seed)),
        cfg,
    );

    let mut started = 0usize;
    let mut skipped = 0usize;
    for name in names {
        let meta = FileMeta {
            name,
            size,
            media_type: media_type.clone(),
        };
        match screen(&meta, &cfg.screening) {
            Ok(()) => {
                simulator.start(meta);
                started += 1;
            }
            Err(err) => {
                shell.toast(ToastLevel::Error, &err.to_string());
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        shell.toast(
            ToastLevel::Warning,
            &format!("{} file(s) skipped - invalid format or size", skipped),
        );
    }

    simulator.wait_idle().await;

    println!("ingest");
    println!("  started: {}", started);
    println!("  skipped: {}", skipped);
    let tasks = simulator.list();
    print_library(&tasks);
    print_category_counts(&simulator.category_counts());

    if let Some(dir) = export_dir {
        for task in &tasks {
            let path = dir.join(extracted_text_filename(&task.name));
            export_extracted_text(task, Some(&path))?;
        }
    }
    println!("ok");

    Ok(())
}

fn run_demo(cfg: &Config, seed: Option<u64>) {
    let store: Arc<dyn TaskStore> = Arc::new(MemoryTaskStore::new());
    let synth = build_synth(cfg, seed);
    let seeded = seed_demo_library(&store, &synth, cfg.chunking.sentences_per_chunk);

    println!("demo library");
    println!("  seeded: {}", seeded);
    let tasks = store.list();
    print_library(&tasks);
    print_category_counts(&knowledgebot_core::category::category_counts(&tasks));
    println!("ok");
}

fn print_library(tasks: &[DocumentTask]) {
    for task in tasks {
        match (&task.status, &task.metadata) {
            (TaskStatus::Completed, Some(meta)) => {
                println!(
                    "  {}  {}  {} pages, {} words, {} chunks",
                    task.name, task.category, meta.pages, meta.word_count, meta.chunk_count
                );
            }
            _ => {
                println!("  {}  {}  {:?}", task.name, task.category, task.status);
            }
        }
    }
}

fn print_category_counts(counts: &[(knowledgebot_core::category::Category, usize)]) {
    println!("documents by category:");
    for (category, count) in counts {
        if *count > 0 {
            println!("  {}: {}", category, count);
        }
    }
}
