use serde::Serialize;

/// Wire shape of POST /chat. Either `source` (success) or `error`
/// (fallback path) is present, never both.
#[derive(Serialize, Debug)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_id: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn ok(response: String, conversation_id: String, source: &str) -> Self {
        Self {
            response,
            conversation_id,
            success: true,
            source: Some(source.to_string()),
            error: None,
        }
    }

    pub fn fallback(response: &str, conversation_id: String, error: String) -> Self {
        Self {
            response: response.to_string(),
            conversation_id,
            success: false,
            source: None,
            error: Some(error),
        }
    }
}
