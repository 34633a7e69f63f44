pub trait SynonymLookup: Send + Sync {
    /// All lemma names of every sense of `word`, in dictionary sense order.
    ///
    /// The word itself may appear in the result; callers filter it.
    fn lemma_names(&self, word: &str) -> Vec<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum ThesaurusError {
    #[error("dictionary file missing: {0}")]
    MissingFile(String),
    #[error("no WordNet dictionary found; searched {0}")]
    NotFound(String),
    #[error("malformed dictionary entry: {0}")]
    Malformed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
