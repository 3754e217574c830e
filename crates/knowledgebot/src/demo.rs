//! Demo library seeding.
//!
//! Populates the store with three pre-completed documents so a fresh
//! demo has something to show. Categories are set explicitly rather
//! than derived — the expense policy belongs under Finance even though
//! the filename rule table would file "policy" under HR.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use knowledgebot_core::category::Category;
use knowledgebot_core::chunk::chunk_sentences;
use knowledgebot_core::content::generate_content;
use knowledgebot_core::embedding::EmbeddingSynthesizer;
use knowledgebot_core::models::{Chunk, DocumentTask, TaskMetadata, TaskStatus};
use knowledgebot_core::store::TaskStore;

use crate::synth::Synthesizer;

struct DemoDoc {
    name: &'static str,
    size: u64,
    media_type: &'static str,
    days_ago: i64,
    category: Category,
    pages: u32,
    word_count: u32,
    processing_time: &'static str,
}

const DEMO_DOCS: &[DemoDoc] = &[
    DemoDoc {
        name: "Employee_Handbook_2024.pdf",
        size: 2_547_820,
        media_type: "application/pdf",
        days_ago: 1,
        category: Category::HrPolicies,
        pages: 45,
        word_count: 12_500,
        processing_time: "8.41s",
    },
    DemoDoc {
        name: "IT_Security_Guidelines.docx",
        size: 1_245_600,
        media_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        days_ago: 2,
        category: Category::ItTech,
        pages: 18,
        word_count: 7_200,
        processing_time: "6.02s",
    },
    DemoDoc {
        name: "Expense_Policy_2024.pdf",
        size: 856_400,
        media_type: "application/pdf",
        days_ago: 3,
        category: Category::Finance,
        pages: 12,
        word_count: 4_800,
        processing_time: "5.37s",
    },
];

/// Seed the demo documents into the store. Returns how many were added.
pub fn seed_demo_library(
    store: &Arc<dyn TaskStore>,
    synth: &Synthesizer,
    sentences_per_chunk: usize,
) -> usize {
    for doc in DEMO_DOCS {
        let extracted_text = generate_content(doc.category, doc.name);
        let chunks: Vec<Chunk> = chunk_sentences(&extracted_text, sentences_per_chunk)
            .into_iter()
            .map(|draft| Chunk {
                id: Uuid::new_v4().to_string(),
                embedding: synth.synthesize(&draft.text),
                text: draft.text,
                start_sentence: draft.start_sentence,
                end_sentence: draft.end_sentence,
            })
            .collect();

        let task = DocumentTask {
            id: Uuid::new_v4().to_string(),
            name: doc.name.to_string(),
            size: doc.size,
            media_type: doc.media_type.to_string(),
            uploaded_at: Utc::now() - Duration::days(doc.days_ago),
            category: doc.category,
            status: TaskStatus::Completed,
            progress: 100.0,
            metadata: Some(TaskMetadata {
                pages: doc.pages,
                word_count: doc.word_count,
                language: "en".to_string(),
                processing_time: doc.processing_time.to_string(),
                chunk_count: chunks.len(),
                last_modified: Utc::now(),
            }),
            extracted_text,
            chunks,
        };
        store.append(task);
    }
    DEMO_DOCS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EmbeddingConfig, SimulationConfig};
    use knowledgebot_core::store::memory::MemoryTaskStore;

    #[test]
    fn seeds_three_completed_documents() {
        let store: Arc<dyn TaskStore> = Arc::new(MemoryTaskStore::new());
        let synth = Synthesizer::seeded(
            SimulationConfig::default(),
            &EmbeddingConfig::default(),
            9,
        );

        let seeded = seed_demo_library(&store, &synth, 3);
        assert_eq!(seeded, 3);

        let tasks = store.list();
        assert_eq!(tasks.len(), 3);
        for task in &tasks {
            assert_eq!(task.status, TaskStatus::Completed);
            assert_eq!(task.progress, 100.0);
            assert!(!task.extracted_text.is_empty());
            assert!(!task.chunks.is_empty());
            let meta = task.metadata.as_ref().unwrap();
            assert_eq!(meta.chunk_count, task.chunks.len());
        }
        assert_eq!(tasks[0].category, Category::HrPolicies);
        assert_eq!(tasks[2].category, Category::Finance);
    }
}
