//! Sentence-boundary text chunker.
//!
//! Splits extracted text into sentences on `.`, `!`, and `?`, then
//! groups consecutive sentences into chunk drafts of a fixed size
//! (three by default, per the pipeline configuration). The last draft
//! covers whatever remainder is left, so seven sentences with a group
//! size of three produce three drafts.
//!
//! Drafts carry the joined text plus the start/end sentence indices
//! into the source sentence list. Embedding vectors are attached by
//! the application crate — this module is fully deterministic.

/// A chunk before its embedding is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkDraft {
    pub text: String,
    pub start_sentence: usize,
    pub end_sentence: usize,
}

/// Split text into sentences on `.`, `!`, `?`.
///
/// Fragments that are empty after trimming are discarded, so runs of
/// terminators (`"Wait...?!"`) do not produce empty sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Group consecutive sentences into drafts of `group_size`.
///
/// Returns drafts with contiguous, non-overlapping sentence ranges
/// covering every sentence exactly once. Empty text yields no drafts.
/// A `group_size` of zero is treated as one.
pub fn chunk_sentences(text: &str, group_size: usize) -> Vec<ChunkDraft> {
    let group_size = group_size.max(1);
    let sentences = split_sentences(text);

    sentences
        .chunks(group_size)
        .enumerate()
        .map(|(i, group)| {
            let start = i * group_size;
            ChunkDraft {
                text: group.join(". "),
                start_sentence: start,
                end_sentence: start + group.len() - 1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_all_terminators() {
        let sentences = split_sentences("One. Two! Three? Four.");
        assert_eq!(sentences, ["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn terminator_runs_yield_no_empty_sentences() {
        let sentences = split_sentences("Really?! Yes... sure.");
        assert_eq!(sentences, ["Really", "Yes", "sure"]);
    }

    #[test]
    fn seven_sentences_in_groups_of_three() {
        let text = "A. B. C. D. E. F. G.";
        let drafts = chunk_sentences(text, 3);
        assert_eq!(drafts.len(), 3);
        assert_eq!(drafts[0].text, "A. B. C");
        assert_eq!((drafts[0].start_sentence, drafts[0].end_sentence), (0, 2));
        assert_eq!((drafts[1].start_sentence, drafts[1].end_sentence), (3, 5));
        // Last draft covers the remainder.
        assert_eq!(drafts[2].text, "G");
        assert_eq!((drafts[2].start_sentence, drafts[2].end_sentence), (6, 6));
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let drafts = chunk_sentences("A. B. C. D. E. F.", 3);
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[1].text, "D. E. F");
    }

    #[test]
    fn empty_text_yields_no_drafts() {
        assert!(chunk_sentences("", 3).is_empty());
        assert!(chunk_sentences("   \n  ", 3).is_empty());
    }

    #[test]
    fn zero_group_size_treated_as_one() {
        let drafts = chunk_sentences("A. B.", 0);
        assert_eq!(drafts.len(), 2);
    }

    #[test]
    fn deterministic() {
        let text = "Alpha. Beta! Gamma? Delta.";
        assert_eq!(chunk_sentences(text, 2), chunk_sentences(text, 2));
    }

    #[test]
    fn ranges_cover_sentences_exactly_once() {
        let text = (0..11).map(|i| format!("Sentence {i}.")).collect::<String>();
        let drafts = chunk_sentences(&text, 4);
        assert_eq!(drafts.len(), 3);
        let mut next = 0;
        for draft in &drafts {
            assert_eq!(draft.start_sentence, next);
            assert!(draft.end_sentence >= draft.start_sentence);
            next = draft.end_sentence + 1;
        }
        assert_eq!(next, 11);
    }
}
