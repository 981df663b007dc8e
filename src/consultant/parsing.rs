use serde_json::Value;

// ===== RESPONSE EXTRACTORS =====

/// Location of the reply inside a `generateContent` response
const REPLY_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Text of the first part of the first candidate, if there is any.
///
/// Any gap on the way (missing key, empty list, `null`, non-string text)
/// means there is no usable reply.
pub fn extract_reply(response: &Value) -> Option<&str> {
    response
        .pointer(REPLY_POINTER)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

// ===== HELPERS =====

/// Truncate text for logging
pub fn truncate_for_log(text: &str, max_chars: usize) -> String {
    let clean_text = text.replace('\n', " ");
    if clean_text.chars().count() <= max_chars {
        clean_text
    } else {
        let cut: String = clean_text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
