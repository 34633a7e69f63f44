/// One sub-word unit produced by a BPE tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: u32,
    pub text: String,
}

/// Tokens in input order. Ids are only meaningful within the originating vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenResult {
    pub tokens: Vec<Token>,
}

impl TokenResult {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.tokens.iter().map(|t| t.id).collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.text.clone()).collect()
    }
}
