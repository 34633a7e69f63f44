pub trait WordSegmenter: Send + Sync {
    /// Splits text into word and punctuation tokens, in order.
    fn segment(&self, text: &str) -> Vec<String>;
}
