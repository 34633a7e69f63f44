const MAX_VISIBLE_CHARS: usize = 100;
const MAX_DATA_URI_HEADER: usize = 64;

/// Log-safe summary of request text.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&visible)
}

/// Describes a base64 field by its data-URI header and size, never its content.
pub fn preview_base64(field: Option<&str>) -> String {
    let Some(value) = field else {
        return String::from("[ABSENT]");
    };
    if value.trim().is_empty() {
        return String::from("[EMPTY]");
    }

    match value.find("base64,") {
        Some(idx) if idx <= MAX_DATA_URI_HEADER => format!(
            "{}base64,<{} chars>",
            &value[..idx],
            value.len() - idx - "base64,".len()
        ),
        _ => format!("<{} chars>", value.len()),
    }
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
