use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::application::ports::{SynonymLookup, ThesaurusError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Lookup order for sense listings.
    const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    fn file_suffix(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Inflection suffix rewrites tried when a form is not in the index.
    fn detachment_rules(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            PartOfSpeech::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("ves", "f"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            PartOfSpeech::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            PartOfSpeech::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
            PartOfSpeech::Adverb => &[],
        }
    }
}

#[derive(Debug, Default)]
struct PosTables {
    index: HashMap<String, Vec<usize>>,
    data: Vec<u8>,
    exceptions: HashMap<String, Vec<String>>,
}

/// Synonym lookup over a WordNet 3.x `dict/` directory
/// (`index.<pos>`, `data.<pos>`, optional `<pos>.exc`).
///
/// Lookup lower-cases the word, reduces inflected forms to base forms, then
/// collects the lemma names of every synset of every matching base form, nouns
/// first, then verbs, adjectives and adverbs.
#[derive(Debug)]
pub struct WordNetThesaurus {
    tables: HashMap<PartOfSpeech, PosTables>,
}

impl WordNetThesaurus {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, ThesaurusError> {
        let dir = dir.as_ref();
        let mut tables = HashMap::new();

        for pos in PartOfSpeech::ALL {
            let suffix = pos.file_suffix();
            let index_path = dir.join(format!("index.{}", suffix));
            let data_path = dir.join(format!("data.{}", suffix));
            let exc_path = dir.join(format!("{}.exc", suffix));

            if !index_path.is_file() || !data_path.is_file() {
                tracing::warn!(
                    dir = %dir.display(),
                    pos = suffix,
                    "WordNet files missing for part of speech, skipping"
                );
                continue;
            }

            let index = parse_index(&fs::read_to_string(&index_path)?)?;
            let data = fs::read(&data_path)?;
            let exceptions = match fs::read_to_string(&exc_path) {
                Ok(text) => parse_exceptions(&text),
                Err(_) => HashMap::new(),
            };

            tracing::debug!(pos = suffix, lemmas = index.len(), "Loaded WordNet index");
            tables.insert(
                pos,
                PosTables {
                    index,
                    data,
                    exceptions,
                },
            );
        }

        if tables.is_empty() {
            return Err(ThesaurusError::MissingFile(format!(
                "no index/data pairs in {}",
                dir.display()
            )));
        }

        Ok(Self { tables })
    }

    /// Base forms of `form` present in the index for `pos`.
    fn morphy(&self, form: &str, pos: PartOfSpeech) -> Vec<String> {
        let Some(table) = self.tables.get(&pos) else {
            return Vec::new();
        };

        let filter_known = |forms: Vec<String>| -> Vec<String> {
            let mut seen = HashSet::new();
            forms
                .into_iter()
                .filter(|f| table.index.contains_key(f) && seen.insert(f.clone()))
                .collect()
        };

        if let Some(bases) = table.exceptions.get(form) {
            let mut forms = vec![form.to_string()];
            forms.extend(bases.iter().cloned());
            return filter_known(forms);
        }

        let apply_rules = |forms: &[String]| -> Vec<String> {
            forms
                .iter()
                .flat_map(|f| {
                    pos.detachment_rules()
                        .iter()
                        .filter(move |(old, _)| f.ends_with(old))
                        .map(move |(old, new)| format!("{}{}", &f[..f.len() - old.len()], new))
                })
                .collect()
        };

        let mut forms = apply_rules(&[form.to_string()]);
        let mut candidates = vec![form.to_string()];
        candidates.extend(forms.iter().cloned());
        let found = filter_known(candidates);
        if !found.is_empty() {
            return found;
        }

        while !forms.is_empty() {
            forms = apply_rules(&forms);
            let found = filter_known(forms.clone());
            if !found.is_empty() {
                return found;
            }
        }

        Vec::new()
    }

    fn synset_lemmas(
        &self,
        pos: PartOfSpeech,
        offset: usize,
    ) -> Result<Vec<String>, ThesaurusError> {
        let table = self
            .tables
            .get(&pos)
            .ok_or_else(|| ThesaurusError::MissingFile(pos.file_suffix().to_string()))?;

        let rest = table.data.get(offset..).ok_or_else(|| {
            ThesaurusError::Malformed(format!(
                "offset {} beyond data.{}",
                offset,
                pos.file_suffix()
            ))
        })?;
        let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        let line = std::str::from_utf8(&rest[..end])
            .map_err(|e| ThesaurusError::Malformed(format!("offset {}: {}", offset, e)))?;

        parse_synset_words(line, offset)
    }
}

impl SynonymLookup for WordNetThesaurus {
    fn lemma_names(&self, word: &str) -> Vec<String> {
        let lemma = word.to_lowercase().replace(' ', "_");
        let mut names = Vec::new();

        for pos in PartOfSpeech::ALL {
            for form in self.morphy(&lemma, pos) {
                let offsets = self
                    .tables
                    .get(&pos)
                    .and_then(|t| t.index.get(&form))
                    .cloned()
                    .unwrap_or_default();

                for offset in offsets {
                    match self.synset_lemmas(pos, offset) {
                        Ok(words) => names.extend(words),
                        Err(e) => {
                            tracing::warn!(error = %e, form = %form, "Skipping unreadable synset");
                        }
                    }
                }
            }
        }

        names
    }
}

/// `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt offset...`
fn parse_index(text: &str) -> Result<HashMap<String, Vec<usize>>, ThesaurusError> {
    let mut index = HashMap::new();

    for line in text.lines() {
        if line.is_empty() || line.starts_with(' ') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let malformed = || ThesaurusError::Malformed(line.to_string());

        let lemma = *fields.first().ok_or_else(malformed)?;
        let synset_cnt: usize = fields
            .get(2)
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;
        let p_cnt: usize = fields
            .get(3)
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        let first_offset = 4 + p_cnt + 2;
        let offsets = fields
            .get(first_offset..first_offset + synset_cnt)
            .ok_or_else(malformed)?
            .iter()
            .map(|v| v.parse::<usize>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>, _>>()?;

        index.insert(lemma.to_string(), offsets);
    }

    Ok(index)
}

fn parse_exceptions(text: &str) -> HashMap<String, Vec<String>> {
    text.lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let inflected = fields.next()?;
            let bases: Vec<String> = fields.map(str::to_string).collect();
            Some((inflected.to_string(), bases))
        })
        .collect()
}

/// `offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] ...`, `w_cnt` in hex.
fn parse_synset_words(line: &str, offset: usize) -> Result<Vec<String>, ThesaurusError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let malformed = || ThesaurusError::Malformed(format!("synset at {}: {}", offset, line));

    let recorded: usize = fields
        .first()
        .and_then(|v| v.parse().ok())
        .ok_or_else(malformed)?;
    if recorded != offset {
        return Err(malformed());
    }

    let word_count = fields
        .get(3)
        .and_then(|v| usize::from_str_radix(v, 16).ok())
        .ok_or_else(malformed)?;

    (0..word_count)
        .map(|i| {
            fields
                .get(4 + i * 2)
                .map(|w| strip_adjective_marker(w).to_string())
                .ok_or_else(malformed)
        })
        .collect()
}

/// Adjective lemmas may carry a syntactic marker such as `(a)`, `(p)` or `(ip)`.
fn strip_adjective_marker(word: &str) -> &str {
    match (word.ends_with(')'), word.find('(')) {
        (true, Some(idx)) if idx > 0 => &word[..idx],
        _ => word,
    }
}
