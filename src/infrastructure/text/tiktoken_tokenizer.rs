use tiktoken_rs::CoreBPE;

use crate::application::ports::{Tokenizer, TokenizerError};
use crate::domain::{Token, TokenResult};

const REPLACEMENT_CHARACTER: &str = "\u{FFFD}";

/// Byte-pair encoder over the `cl100k_base` vocabulary.
pub struct TiktokenTokenizer {
    bpe: CoreBPE,
}

impl TiktokenTokenizer {
    pub fn cl100k() -> Result<Self, TokenizerError> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| TokenizerError::VocabularyLoadFailed(e.to_string()))?;
        Ok(Self { bpe })
    }
}

impl Tokenizer for TiktokenTokenizer {
    /// Token texts are decoded one id at a time and lossily, so an id holding
    /// part of a multi-byte character keeps its valid bytes and shows U+FFFD
    /// for the rest.
    fn tokenize(&self, text: &str) -> TokenResult {
        let ids = self.bpe.encode_ordinary(text);
        let tokens = ids
            .into_iter()
            .zip(self.bpe.split_by_token_ordinary_iter(text))
            .map(|(rank, piece)| Token {
                id: rank as u32,
                text: piece.unwrap_or_else(|_| REPLACEMENT_CHARACTER.to_string()),
            })
            .collect();

        TokenResult::new(tokens)
    }

    fn decode(&self, ids: &[u32]) -> Result<String, TokenizerError> {
        self.bpe
            .decode(ids.iter().map(|&id| id as _).collect())
            .map_err(|e| TokenizerError::UnknownToken(e.to_string()))
    }
}
