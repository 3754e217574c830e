//! Export surfaces: extracted text and chat transcripts.
//!
//! Both write to a file when a path is given and to stdout otherwise,
//! so output can be piped.

use std::path::Path;

use anyhow::{bail, Result};
use chrono::Utc;

use knowledgebot_core::models::{ChatMessage, DocumentTask, TaskStatus, Transcript};

/// Default filename for a task's extracted-text download.
pub fn extracted_text_filename(task_name: &str) -> String {
    format!("{}_extracted.txt", task_name)
}

/// Write a completed task's extracted text as UTF-8 plain text.
///
/// Refuses tasks that have not finished processing — there is nothing
/// to download yet.
pub fn export_extracted_text(task: &DocumentTask, output: Option<&Path>) -> Result<()> {
    if task.status != TaskStatus::Completed {
        bail!("{} has not finished processing", task.name);
    }

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &task.extracted_text)?;
            eprintln!("Exported {} to {}", task.name, path.display());
        }
        None => {
            println!("{}", task.extracted_text);
        }
    }
    Ok(())
}

/// Write a chat history as pretty-printed JSON with the keys
/// `timestamp`, `messages`, `user`.
pub fn export_transcript(
    messages: &[ChatMessage],
    user: &str,
    output: Option<&Path>,
) -> Result<()> {
    let transcript = Transcript {
        timestamp: Utc::now(),
        messages: messages.to_vec(),
        user: user.to_string(),
    };
    let json = serde_json::to_string_pretty(&transcript)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &json)?;
            eprintln!(
                "Exported {} messages to {}",
                transcript.messages.len(),
                path.display()
            );
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}
