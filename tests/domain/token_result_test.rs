use augmenta::domain::{Token, TokenResult};

#[test]
fn given_tokens_when_projecting_then_ids_and_texts_keep_order() {
    let result = TokenResult::new(vec![
        Token {
            id: 9906,
            text: "Hello".to_string(),
        },
        Token {
            id: 1917,
            text: " world".to_string(),
        },
    ]);

    assert_eq!(result.len(), 2);
    assert_eq!(result.ids(), vec![9906, 1917]);
    assert_eq!(result.texts(), vec!["Hello", " world"]);
}

#[test]
fn given_default_result_when_inspecting_then_empty() {
    let result = TokenResult::default();

    assert!(result.is_empty());
    assert!(result.ids().is_empty());
}
