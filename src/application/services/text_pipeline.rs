use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::{SynonymLookup, Tokenizer, WordSegmenter};
use crate::domain::TokenResult;

pub const DEFAULT_MAX_SYNONYMS: usize = 3;

pub struct TextPipeline {
    tokenizer: Arc<dyn Tokenizer>,
    segmenter: Arc<dyn WordSegmenter>,
    thesaurus: Arc<dyn SynonymLookup>,
    max_synonyms: usize,
}

impl TextPipeline {
    pub fn new(
        tokenizer: Arc<dyn Tokenizer>,
        segmenter: Arc<dyn WordSegmenter>,
        thesaurus: Arc<dyn SynonymLookup>,
        max_synonyms: usize,
    ) -> Self {
        Self {
            tokenizer,
            segmenter,
            thesaurus,
            max_synonyms,
        }
    }

    pub fn tokenize(&self, text: &str) -> TokenResult {
        self.tokenizer.tokenize(text)
    }

    /// Rewrites each word as `word (syn1, syn2, syn3)` when synonyms exist.
    ///
    /// Words are re-joined with single spaces, so original spacing and
    /// punctuation attachment are not preserved.
    pub fn augment(&self, text: &str) -> String {
        self.segmenter
            .segment(text)
            .iter()
            .map(|word| self.augment_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn augment_word(&self, word: &str) -> String {
        // Truncation happens before deduplication, so repeated lemma names
        // across senses can leave fewer than `max_synonyms` entries.
        let candidates = self
            .thesaurus
            .lemma_names(word)
            .into_iter()
            .filter(|name| name != word)
            .take(self.max_synonyms);

        let mut seen = HashSet::new();
        let shown: Vec<String> = candidates
            .filter(|name| seen.insert(name.clone()))
            .collect();

        if shown.is_empty() {
            word.to_string()
        } else {
            format!("{} ({})", word, shown.join(", "))
        }
    }
}
