use augmenta::application::ports::Tokenizer;
use augmenta::infrastructure::text::TiktokenTokenizer;

#[test]
fn given_ascii_sentence_when_tokenizing_then_texts_rebuild_input() {
    let tokenizer = TiktokenTokenizer::cl100k().unwrap();

    let result = tokenizer.tokenize("Hello world");

    assert_eq!(result.texts(), vec!["Hello", " world"]);
    assert_eq!(tokenizer.decode(&result.ids()).unwrap(), "Hello world");
}

#[test]
fn given_special_token_text_when_tokenizing_then_treated_as_plain_text() {
    let tokenizer = TiktokenTokenizer::cl100k().unwrap();

    let result = tokenizer.tokenize("<|endoftext|>");

    assert!(result.len() > 1);
    assert_eq!(result.texts().concat(), "<|endoftext|>");
}

#[test]
fn given_multibyte_text_when_decoding_whole_sequence_then_round_trips() {
    let tokenizer = TiktokenTokenizer::cl100k().unwrap();
    let text = "naïve café 東京";

    let result = tokenizer.tokenize(text);

    assert_eq!(tokenizer.decode(&result.ids()).unwrap(), text);
}

#[test]
fn given_empty_text_when_tokenizing_then_no_tokens() {
    let tokenizer = TiktokenTokenizer::cl100k().unwrap();

    assert!(tokenizer.tokenize("").is_empty());
}

#[test]
fn given_emoji_split_across_tokens_when_tokenizing_then_leading_space_is_kept() {
    let tokenizer = TiktokenTokenizer::cl100k().unwrap();

    let result = tokenizer.tokenize(" 🦀");

    assert_eq!(result.ids()[0], 11410);
    assert_eq!(result.texts()[0], " \u{FFFD}");
    assert_eq!(tokenizer.decode(&result.ids()).unwrap(), " 🦀");
}

#[test]
fn given_partial_characters_when_tokenizing_then_one_text_per_id() {
    let tokenizer = TiktokenTokenizer::cl100k().unwrap();

    let result = tokenizer.tokenize("a 𝔘𝔫𝔦𝔠𝔬𝔡𝔢");

    assert_eq!(result.texts().len(), result.ids().len());
    assert!(result.texts().iter().any(|t| t.starts_with(' ')));
}
