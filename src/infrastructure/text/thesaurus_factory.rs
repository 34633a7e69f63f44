use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{SynonymLookup, ThesaurusError};

use super::{InMemoryThesaurus, WordNetThesaurus};

const SYSTEM_LOCATIONS: &[&str] = &[
    "/usr/share/wordnet/dict",
    "/usr/share/wordnet",
    "/usr/local/share/wordnet/dict",
    "/usr/share/nltk_data/corpora/wordnet",
    "/usr/local/share/nltk_data/corpora/wordnet",
    "/usr/lib/nltk_data/corpora/wordnet",
    "/usr/local/lib/nltk_data/corpora/wordnet",
];

const INDEX_SUFFIXES: [&str; 4] = ["noun", "verb", "adj", "adv"];

pub struct ThesaurusFactory;

impl ThesaurusFactory {
    /// Opens WordNet from `wordnet_dir`, or from the first standard location
    /// holding a dictionary when no directory is configured.
    pub fn create(wordnet_dir: Option<&Path>) -> Result<Arc<dyn SynonymLookup>, ThesaurusError> {
        Self::create_with_search_paths(wordnet_dir, &Self::search_paths())
    }

    pub fn create_with_search_paths(
        wordnet_dir: Option<&Path>,
        candidates: &[PathBuf],
    ) -> Result<Arc<dyn SynonymLookup>, ThesaurusError> {
        let dir = match wordnet_dir {
            Some(dir) => dir.to_path_buf(),
            None => candidates
                .iter()
                .find(|candidate| holds_dictionary(candidate))
                .cloned()
                .ok_or_else(|| ThesaurusError::NotFound(describe(candidates)))?,
        };

        tracing::info!(dir = %dir.display(), "Loading WordNet thesaurus");
        Ok(Arc::new(WordNetThesaurus::open(&dir)?))
    }

    /// A thesaurus with no entries; augmentation then only re-segments text.
    pub fn empty() -> Arc<dyn SynonymLookup> {
        Arc::new(InMemoryThesaurus::empty())
    }

    /// `$WNHOME/dict`, each `$NLTK_DATA` entry, `~/nltk_data`, then system paths.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(home) = env::var_os("WNHOME") {
            paths.push(PathBuf::from(home).join("dict"));
        }
        if let Some(nltk_data) = env::var_os("NLTK_DATA") {
            paths.extend(env::split_paths(&nltk_data).map(|p| p.join("corpora").join("wordnet")));
        }
        if let Some(home) = env::var_os("HOME") {
            paths.push(PathBuf::from(home).join("nltk_data").join("corpora").join("wordnet"));
        }
        paths.extend(SYSTEM_LOCATIONS.iter().map(PathBuf::from));

        paths
    }
}

fn holds_dictionary(dir: &Path) -> bool {
    INDEX_SUFFIXES.iter().any(|suffix| {
        dir.join(format!("index.{}", suffix)).is_file()
            && dir.join(format!("data.{}", suffix)).is_file()
    })
}

fn describe(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
