mod in_memory_thesaurus;
mod thesaurus_factory;
mod tiktoken_tokenizer;
mod treebank_segmenter;
mod wordnet_thesaurus;

pub use in_memory_thesaurus::InMemoryThesaurus;
pub use thesaurus_factory::ThesaurusFactory;
pub use tiktoken_tokenizer::TiktokenTokenizer;
pub use treebank_segmenter::TreebankWordSegmenter;
pub use wordnet_thesaurus::WordNetThesaurus;
