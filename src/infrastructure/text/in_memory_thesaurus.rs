use std::collections::HashMap;

use crate::application::ports::SynonymLookup;

/// Thesaurus backed by a fixed map. With no entries every word has no
/// synonyms, so augmentation passes words through unchanged.
#[derive(Debug, Default, Clone)]
pub struct InMemoryThesaurus {
    entries: HashMap<String, Vec<String>>,
}

impl InMemoryThesaurus {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, names)| {
                (
                    word.into().to_lowercase(),
                    names.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { entries }
    }
}

impl SynonymLookup for InMemoryThesaurus {
    fn lemma_names(&self, word: &str) -> Vec<String> {
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}
