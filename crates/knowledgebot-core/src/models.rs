//! Core data models used throughout KnowledgeBot.
//!
//! These types represent the ingestion tasks, text chunks, and chat
//! transcripts that flow through the simulated pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::category::{categorize, Category};

/// Descriptor for a file handed to the pipeline by the shell.
///
/// Carries only what the shell knows before any processing happens:
/// the display name, the byte size, and the declared media type.
#[derive(Debug, Clone)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub media_type: String,
}

/// Lifecycle state of a [`DocumentTask`].
///
/// States only advance forward: `Uploading → Processing → Completed`.
/// `Error` is terminal and reserved for screening failures surfaced
/// before a task exists; no simulated task ever enters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Uploading,
    Processing,
    Completed,
    Error,
}

impl TaskStatus {
    fn rank(self) -> u8 {
        match self {
            TaskStatus::Uploading => 0,
            TaskStatus::Processing => 1,
            TaskStatus::Completed => 2,
            TaskStatus::Error => 2,
        }
    }

    /// Whether no further transition is possible from this state.
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Error)
    }
}

/// A slice of extracted text with a placeholder embedding vector.
///
/// Chunks group consecutive sentences of the extracted text;
/// `start_sentence`/`end_sentence` are indices into the source
/// sentence list. The embedding values are uniformly random in
/// `[0, 1)` — a stand-in, not a real embedding.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    pub id: String,
    pub text: String,
    pub embedding: Vec<f32>,
    pub start_sentence: usize,
    pub end_sentence: usize,
}

/// Metadata synthesized when a task completes.
///
/// There is no real document parser: page and word counts are drawn
/// within fixed bounds, `chunk_count` equals the number of derived
/// chunks.
#[derive(Debug, Clone, Serialize)]
pub struct TaskMetadata {
    pub pages: u32,
    pub word_count: u32,
    pub language: String,
    pub processing_time: String,
    pub chunk_count: usize,
    pub last_modified: DateTime<Utc>,
}

/// One uploaded artifact moving through simulated ingestion.
///
/// Created when a screened file is accepted; mutated only by the
/// intake simulator driving the state machine; removed from the store
/// only by explicit deletion.
///
/// Invariants:
/// - `id` is unique for the lifetime of the store.
/// - `progress` is meaningful only while `Uploading`; it is pinned at
///   100 once that state is left.
/// - `status` never regresses (see [`DocumentTask::advance_status`]).
/// - `chunks` and `metadata` stay empty/absent until `Completed`.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentTask {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub media_type: String,
    pub uploaded_at: DateTime<Utc>,
    pub category: Category,
    pub status: TaskStatus,
    pub progress: f64,
    pub extracted_text: String,
    pub chunks: Vec<Chunk>,
    pub metadata: Option<TaskMetadata>,
}

impl DocumentTask {
    /// Create a fresh task in `Uploading` at progress 0.
    ///
    /// The category is derived once from the display name and never
    /// changes afterwards.
    pub fn new(meta: FileMeta) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category: categorize(&meta.name),
            name: meta.name,
            size: meta.size,
            media_type: meta.media_type,
            uploaded_at: Utc::now(),
            status: TaskStatus::Uploading,
            progress: 0.0,
            extracted_text: String::new(),
            chunks: Vec::new(),
            metadata: None,
        }
    }

    /// Advance the state machine, refusing regressions.
    ///
    /// Returns `true` if the transition was applied. A transition to
    /// the current state or to an earlier one is rejected, which keeps
    /// repeated timer callbacks from replaying `Processing` or
    /// `Completed`.
    pub fn advance_status(&mut self, next: TaskStatus) -> bool {
        if next.rank() > self.status.rank() {
            self.status = next;
            true
        } else {
            false
        }
    }
}

/// Who authored a [`ChatMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of a chat history, as serialized by the transcript export.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The downloadable chat-history document.
///
/// Serializes with exactly the keys `timestamp`, `messages`, `user`,
/// in that order.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub timestamp: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            size: 1024,
            media_type: "application/pdf".to_string(),
        }
    }

    #[test]
    fn new_task_starts_uploading_at_zero() {
        let task = DocumentTask::new(meta("policy.pdf"));
        assert_eq!(task.status, TaskStatus::Uploading);
        assert_eq!(task.progress, 0.0);
        assert!(task.extracted_text.is_empty());
        assert!(task.chunks.is_empty());
        assert!(task.metadata.is_none());
    }

    #[test]
    fn task_ids_are_unique() {
        let a = DocumentTask::new(meta("a.pdf"));
        let b = DocumentTask::new(meta("a.pdf"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn status_never_regresses() {
        let mut task = DocumentTask::new(meta("a.pdf"));
        assert!(task.advance_status(TaskStatus::Processing));
        assert!(task.advance_status(TaskStatus::Completed));
        assert!(!task.advance_status(TaskStatus::Processing));
        assert!(!task.advance_status(TaskStatus::Uploading));
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn repeated_transition_is_rejected() {
        let mut task = DocumentTask::new(meta("a.pdf"));
        assert!(task.advance_status(TaskStatus::Processing));
        assert!(!task.advance_status(TaskStatus::Processing));
    }

    #[test]
    fn terminal_states() {
        assert!(!TaskStatus::Uploading.is_terminal());
        assert!(!TaskStatus::Processing.is_terminal());
        assert!(TaskStatus::Completed.is_terminal());
        assert!(TaskStatus::Error.is_terminal());
    }

    #[test]
    fn transcript_serializes_expected_keys() {
        let transcript = Transcript {
            timestamp: Utc::now(),
            messages: vec![ChatMessage::new(Sender::User, "hello")],
            user: "Demo User".to_string(),
        };
        let json = serde_json::to_string_pretty(&transcript).unwrap();
        let ts = json.find("\"timestamp\"").unwrap();
        let msgs = json.find("\"messages\"").unwrap();
        let user = json.rfind("\"user\"").unwrap();
        assert!(ts < msgs && msgs < user);
        assert!(json.contains("\"sender\": \"user\""));
    }
}
