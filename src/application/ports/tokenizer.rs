use crate::domain::TokenResult;

pub trait Tokenizer: Send + Sync {
    /// Splits `text` into vocabulary units. Empty input yields an empty result.
    fn tokenize(&self, text: &str) -> TokenResult;

    fn decode(&self, ids: &[u32]) -> Result<String, TokenizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenizerError {
    #[error("vocabulary loading failed: {0}")]
    VocabularyLoadFailed(String),
    #[error("unknown token id: {0}")]
    UnknownToken(String),
}
