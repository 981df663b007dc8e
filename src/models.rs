use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Rendered in place of any course field the catalog leaves out.
pub const NOT_AVAILABLE: &str = "N/A";

// ===== COURSE CATALOG TYPES =====

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CourseRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub syllabus: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub fees: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub placement: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub mode: Option<String>,
}

impl CourseRecord {
    /// Course name, or an empty string when the catalog entry has none
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// The six prompt fields in display order, with missing values replaced by `N/A`
    pub fn labelled_fields(&self) -> [(&'static str, &str); 6] {
        fn or_na(field: &Option<String>) -> &str {
            match field.as_deref() {
                Some(v) if !v.is_empty() => v,
                _ => NOT_AVAILABLE,
            }
        }

        [
            ("Name", or_na(&self.name)),
            ("Syllabus", or_na(&self.syllabus)),
            ("Duration", or_na(&self.duration)),
            ("Fees", or_na(&self.fees)),
            ("Placement", or_na(&self.placement)),
            ("Mode", or_na(&self.mode)),
        ]
    }
}

/// Catalog files are hand-edited, so `"fees": 45000` is as valid as `"fees": "45000"`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text))
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let tags = match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(value_to_text).collect(),
        Some(other) => value_to_text(other).into_iter().collect(),
        None => Vec::new(),
    };
    Ok(tags)
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

// ===== LANGUAGE =====

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// `en` (any case) selects English; every other code, padded ones included, selects Hindi
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("en") {
            Language::English
        } else {
            Language::Hindi
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
        }
    }
}

// ===== INBOUND REQUEST =====

/// Keys accepted for the user's question, in priority order
pub const QUERY_KEYS: [&str; 3] = ["query", "message", "text"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AskRequest {
    /// Trimmed question; empty when the body carried none
    pub query: String,
    pub lang: Language,
}

impl AskRequest {
    /// Parse an `/ask` body.
    ///
    /// Anything that is not a JSON object counts as an empty object. The first
    /// non-empty string among `query`, `message` and `text` wins and is then
    /// trimmed, so a whitespace-only `query` still shadows a later `message`.
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let Value::Object(fields) = value else {
            return Self::default();
        };

        let query = QUERY_KEYS
            .iter()
            .filter_map(|key| fields.get(*key).and_then(Value::as_str))
            .find(|s| !s.is_empty())
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        let lang = fields
            .get("lang")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(Language::from_code)
            .unwrap_or_default();

        Self { query, lang }
    }
}

// ===== RESPONSES =====

#[derive(Debug, Serialize, Deserialize)]
pub struct AskReply {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthMessage {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
