//! Task rendering and shell notifications.
//!
//! The simulator consumes exactly two capabilities from its UI shell:
//! [`Presenter::render`], called with the full task snapshot after
//! every progress tick and state transition, and
//! [`ShellNotifier::toast`], the transient user-facing notification.
//! Both are emitted on **stderr** so stdout remains parseable for
//! scripts.

use std::io::Write;

use knowledgebot_core::models::{DocumentTask, TaskStatus};

/// Renders one task's current state. Must be synchronous and
/// idempotent: the same snapshot may be rendered more than once across
/// a run, and each call fully replaces the previous rendering.
pub trait Presenter: Send + Sync {
    fn render(&self, task: &DocumentTask);
}

/// Severity of a shell notification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn as_str(self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }
}

/// Notification sink for the surrounding application shell.
pub trait ShellNotifier: Send + Sync {
    fn toast(&self, level: ToastLevel, message: &str);
}

/// Human-friendly rendering on stderr:
/// `"policy.pdf  uploading   63%"`.
pub struct StderrPresenter;

impl Presenter for StderrPresenter {
    fn render(&self, task: &DocumentTask) {
        let line = match task.status {
            TaskStatus::Uploading => format!(
                "{}  uploading  {:>3}%\n",
                task.name,
                task.progress.round() as u32
            ),
            TaskStatus::Processing => format!(
                "{}  processing  extracting text and creating searchable chunks...\n",
                task.name
            ),
            TaskStatus::Completed => {
                let meta = task.metadata.as_ref();
                format!(
                    "{}  ready  {} pages, {} words, {} chunks\n",
                    task.name,
                    meta.map(|m| m.pages).unwrap_or(0),
                    meta.map(|m| m.word_count).unwrap_or(0),
                    task.chunks.len()
                )
            }
            TaskStatus::Error => format!("{}  error\n", task.name),
        };
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
        let _ = std::io::stderr().lock().flush();
    }
}

impl ShellNotifier for StderrPresenter {
    fn toast(&self, level: ToastLevel, message: &str) {
        let _ = writeln!(std::io::stderr().lock(), "[{}] {}", level.as_str(), message);
    }
}

/// Machine-readable rendering: one JSON object per line on stderr.
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&self, task: &DocumentTask) {
        let obj = serde_json::json!({
            "event": "render",
            "id": task.id,
            "name": task.name,
            "category": task.category,
            "status": task.status,
            "progress": task.progress,
            "chunks": task.chunks.len(),
        });
        if let Ok(line) = serde_json::to_string(&obj) {
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
            let _ = std::io::stderr().lock().flush();
        }
    }
}

impl ShellNotifier for JsonPresenter {
    fn toast(&self, level: ToastLevel, message: &str) {
        let obj = serde_json::json!({
            "event": "toast",
            "level": level.as_str(),
            "message": message,
        });
        if let Ok(line) = serde_json::to_string(&obj) {
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }
}

/// No-op sink when progress output is disabled.
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&self, _task: &DocumentTask) {}
}

impl ShellNotifier for NullPresenter {
    fn toast(&self, _level: ToastLevel, _message: &str) {}
}

/// Presentation mode for the CLI: off, human (stderr), or JSON (stderr).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PresenterMode {
    Off,
    Human,
    Json,
}

impl PresenterMode {
    /// Default: human rendering when stderr is a TTY, otherwise off.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stderr) {
            PresenterMode::Human
        } else {
            PresenterMode::Off
        }
    }

    /// Build the presenter for this mode.
    pub fn presenter(&self) -> std::sync::Arc<dyn Presenter> {
        match self {
            PresenterMode::Off => std::sync::Arc::new(NullPresenter),
            PresenterMode::Human => std::sync::Arc::new(StderrPresenter),
            PresenterMode::Json => std::sync::Arc::new(JsonPresenter),
        }
    }

    /// Build the shell-notification sink for this mode.
    pub fn shell(&self) -> std::sync::Arc<dyn ShellNotifier> {
        match self {
            PresenterMode::Off => std::sync::Arc::new(NullPresenter),
            PresenterMode::Human => std::sync::Arc::new(StderrPresenter),
            PresenterMode::Json => std::sync::Arc::new(JsonPresenter),
        }
    }
}
