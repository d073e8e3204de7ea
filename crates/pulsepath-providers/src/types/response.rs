use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl ResponseMessage {
    /// Map-style rendering of the whole message, role included.
    pub fn render(&self) -> String {
        format!(
            "{{role={}, content={}}}",
            self.role,
            self.content.as_deref().unwrap_or("null")
        )
    }
}

/// A provider response passed back to the caller without reshaping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelayedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RelayedResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}
