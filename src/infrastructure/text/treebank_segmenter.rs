use std::sync::LazyLock;

use regex::Regex;

use crate::application::ports::WordSegmenter;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rules(specs: &[(&str, &'static str)]) -> Vec<Rule> {
    specs
        .iter()
        .map(|(pattern, replacement)| Rule {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        })
        .collect()
}

static STARTING_QUOTES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r#"^""#, "``"),
        (r"(``)", " $1 "),
        (r#"([ (\[{<])("|'{2})"#, "$1 `` "),
    ])
});

static PUNCTUATION: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r#"([^.])(\.)([\]\)}>"']*)\s*$"#, "$1 $2 $3 "),
        (r"([a-z0-9])\.(\s+[A-Z])", "$1 .${2}"),
        (r"([:,])([^\d])", " $1 $2"),
        (r"([:,])$", " $1 "),
        (r"\.\.\.", " ... "),
        (r"[;@#$%&]", " $0 "),
        (r"[?!]", " $0 "),
        (r"([^'])' ", "$1 ' "),
        (r"[\]\[\(\)\{\}<>]", " $0 "),
        (r"--", " -- "),
    ])
});

static ENDING_QUOTES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r#"""#, " '' "),
        (r"(\S)('')", "$1 $2 "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "$1 $2 "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "$1 $2 "),
    ])
});

static CONTRACTIONS: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    rules(&[
        (r"(?i)\b(can)(not)\b", " $1 $2 "),
        (r"(?i)\b(d)('ye)\b", " $1 $2 "),
        (r"(?i)\b(gim)(me)\b", " $1 $2 "),
        (r"(?i)\b(gon)(na)\b", " $1 $2 "),
        (r"(?i)\b(got)(ta)\b", " $1 $2 "),
        (r"(?i)\b(lem)(me)\b", " $1 $2 "),
        (r"(?i)\b(more)('n)\b", " $1 $2 "),
        (r"(?i)\b(wan)(na)\s", " $1 $2 "),
        (r"(?i) ('t)(is)\b", " $1 $2 "),
        (r"(?i) ('t)(was)\b", " $1 $2 "),
    ])
});

/// Penn-Treebank style word splitter: punctuation, brackets and clitics such as
/// `n't` or `'s` become separate tokens, and double quotes become ``` `` ``` / `''`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreebankWordSegmenter;

impl TreebankWordSegmenter {
    pub fn new() -> Self {
        Self
    }
}

fn apply(rules: &[Rule], text: String) -> String {
    rules.iter().fold(text, |acc, rule| {
        rule.pattern
            .replace_all(&acc, rule.replacement)
            .into_owned()
    })
}

impl WordSegmenter for TreebankWordSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let text = apply(&STARTING_QUOTES, text.to_string());
        let text = apply(&PUNCTUATION, text);
        let text = apply(&ENDING_QUOTES, format!(" {} ", text));
        let text = apply(&CONTRACTIONS, text);

        text.split_whitespace().map(str::to_string).collect()
    }
}
