use crate::mood::questions::AnswerVector;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct ChatRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_sources")]
    pub sources: Option<Vec<SourceDocument>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceDocument {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Serialize)]
pub struct MoodSaveRequest {
    pub answers: AnswerVector,
}

/// Accept any `sources` value: non-arrays are treated as absent and entries
/// that are not source objects are skipped.
fn lenient_sources<'de, D>(deserializer: D) -> Result<Option<Vec<SourceDocument>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(entries)) => Some(
            entries
                .into_iter()
                .filter_map(|entry| serde_json::from_value(entry).ok())
                .collect(),
        ),
        _ => None,
    })
}
