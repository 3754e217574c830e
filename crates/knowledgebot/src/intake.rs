//! The intake state machine and its per-task drivers.
//!
//! [`IntakeSimulator`] owns the lifecycle of every [`DocumentTask`]:
//! `Uploading → Processing → Completed`, driven entirely by timers.
//! Each started task gets its own spawned driver; tasks never contend
//! on anything beyond the store lock, so concurrent uploads interleave
//! arbitrarily while each task's own transitions stay strictly
//! ordered.
//!
//! Deletion is the only cancellation. A driver whose task was deleted
//! discovers this at its next [`TaskStore::update`] — the update
//! returns `None` — and stops without touching the presenter. There
//! is no failure path: a task that is not deleted always completes.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use uuid::Uuid;

use knowledgebot_core::category::{category_counts, Category};
use knowledgebot_core::chunk::chunk_sentences;
use knowledgebot_core::content::generate_content;
use knowledgebot_core::embedding::EmbeddingSynthesizer;
use knowledgebot_core::models::{Chunk, DocumentTask, FileMeta, TaskStatus};
use knowledgebot_core::store::TaskStore;

use crate::config::Config;
use crate::presenter::{Presenter, ShellNotifier, ToastLevel};
use crate::scheduler::Scheduler;
use crate::synth::Synthesizer;

pub struct IntakeSimulator {
    store: Arc<dyn TaskStore>,
    presenter: Arc<dyn Presenter>,
    shell: Arc<dyn ShellNotifier>,
    scheduler: Arc<dyn Scheduler>,
    synth: Arc<Synthesizer>,
    tick: Duration,
    sentences_per_chunk: usize,
    drivers: Mutex<Vec<JoinHandle<()>>>,
}

impl IntakeSimulator {
    /// Wire a simulator from its collaborators.
    ///
    /// Everything is injected — store, presenter, shell, scheduler,
    /// synthesis policy — so the owner of the UI shell decides
    /// lifetimes and tests substitute what they need.
    pub fn new(
        store: Arc<dyn TaskStore>,
        presenter: Arc<dyn Presenter>,
        shell: Arc<dyn ShellNotifier>,
        scheduler: Arc<dyn Scheduler>,
        synth: Arc<Synthesizer>,
        config: &Config,
    ) -> Self {
        Self {
            store,
            presenter,
            shell,
            scheduler,
            synth,
            tick: Duration::from_millis(config.simulation.tick_ms),
            sentences_per_chunk: config.chunking.sentences_per_chunk,
            drivers: Mutex::new(Vec::new()),
        }
    }

    /// Begin simulated ingestion of an already-screened file.
    ///
    /// Creates the task in `Uploading` at progress 0, renders it once,
    /// spawns its driver, and returns the snapshot immediately. No
    /// validation happens here — screening is the caller's job, and a
    /// task that enters this machine is guaranteed to complete unless
    /// deleted.
    pub fn start(&self, meta: FileMeta) -> DocumentTask {
        let task = DocumentTask::new(meta);
        self.store.append(task.clone());
        self.presenter.render(&task);
        self.shell
            .toast(ToastLevel::Success, &format!("Uploading {}...", task.name));

        let handle = tokio::spawn(drive(
            task.id.clone(),
            Arc::clone(&self.store),
            Arc::clone(&self.presenter),
            Arc::clone(&self.shell),
            Arc::clone(&self.scheduler),
            Arc::clone(&self.synth),
            self.tick,
            self.sentences_per_chunk,
        ));
        self.drivers.lock().unwrap().push(handle);

        task
    }

    /// Snapshot of one task.
    pub fn get(&self, id: &str) -> Option<DocumentTask> {
        self.store.get(id)
    }

    /// Remove a task at any status. Pending timer callbacks for it
    /// become no-ops. Returns `false` when the id is unknown.
    pub fn delete(&self, id: &str) -> bool {
        let removed = self.store.remove(id);
        if removed {
            self.shell.toast(ToastLevel::Success, "Document deleted");
        }
        removed
    }

    /// All tasks, in insertion order.
    pub fn list(&self) -> Vec<DocumentTask> {
        self.store.list()
    }

    /// Task counts per category, for the knowledge-base statistics.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        category_counts(&self.store.list())
    }

    /// Await every driver spawned so far (including ones started while
    /// waiting). Deleted tasks' drivers finish early, so this never
    /// hangs on a removed task.
    pub async fn wait_idle(&self) {
        loop {
            let handle = self.drivers.lock().unwrap().pop();
            match handle {
                Some(handle) => {
                    let _ = handle.await;
                }
                None => break,
            }
        }
    }
}

/// One task's journey through the state machine.
#[allow(clippy::too_many_arguments)]
async fn drive(
    id: String,
    store: Arc<dyn TaskStore>,
    presenter: Arc<dyn Presenter>,
    shell: Arc<dyn ShellNotifier>,
    scheduler: Arc<dyn Scheduler>,
    synth: Arc<Synthesizer>,
    tick: Duration,
    sentences_per_chunk: usize,
) {
    // Upload phase: grow progress each tick until it reaches 100,
    // rendering after every increment. The tick that reaches 100 pins
    // progress there and flips the task to Processing.
    loop {
        scheduler.sleep(tick).await;
        let increment = synth.tick_increment();
        let Some(snapshot) = store.update(&id, &mut |task| {
            task.progress = (task.progress + increment).min(100.0);
            if task.progress >= 100.0 {
                task.advance_status(TaskStatus::Processing);
            }
        }) else {
            return; // deleted mid-upload
        };
        presenter.render(&snapshot);
        if snapshot.status != TaskStatus::Uploading {
            break;
        }
    }

    // Processing phase: a single randomized delay, then the terminal
    // state with all derived content attached at once.
    scheduler.sleep(synth.processing_delay()).await;

    let Some(snapshot) = store.update(&id, &mut |task| {
        task.extracted_text = generate_content(task.category, &task.name);
        task.chunks = chunk_sentences(&task.extracted_text, sentences_per_chunk)
            .into_iter()
            .map(|draft| Chunk {
                id: Uuid::new_v4().to_string(),
                embedding: synth.synthesize(&draft.text),
                text: draft.text,
                start_sentence: draft.start_sentence,
                end_sentence: draft.end_sentence,
            })
            .collect();
        task.metadata = Some(synth.metadata(task.chunks.len()));
        task.advance_status(TaskStatus::Completed);
    }) else {
        return; // deleted while processing
    };
    presenter.render(&snapshot);
    shell.toast(
        ToastLevel::Success,
        &format!("{} processed successfully!", snapshot.name),
    );
}
