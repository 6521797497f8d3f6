use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The critique returned by the analysis endpoint. Owned by the backend and
/// consumed read-only; every top-level field may be absent or null, which
/// means "nothing to render for that section", not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub summary: Option<String>,
    pub creative: Option<Vec<FeedbackItem>>,
    pub critical: Option<Vec<FeedbackItem>>,
    pub line_by_line: Option<Vec<LineSuggestion>>,
    pub metrics: Option<Map<String, Value>>,
}

/// A single labeled remark. Both fields are required; an item missing either
/// is a shape mismatch, handled at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeedbackItem {
    pub label: String,
    pub text: String,
}

/// A per-line rewrite suggestion: the original line plus a creative and a
/// critical alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LineSuggestion {
    pub orig: String,
    pub creative: String,
    pub critical: String,
}

/// The top-level response shape. Exactly one channel is populated; the error
/// variant is tried first, so a malformed body carrying both channels
/// resolves to the error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ResponseEnvelope {
    Failure { error: String },
    Success { analysis: AnalysisResult },
}

/// Stringifies a metric value the single way both kinds render: numbers via
/// their JSON representation, text verbatim. Returns `None` for anything
/// that is not a scalar.
pub fn metric_display(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}
