// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl ChatRequest {
    /// The prompt exactly as sent, or `None` when it is missing or blank.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.trim().is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_prompts_are_rejected() {
        let missing: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.prompt(), None);

        let null: ChatRequest = serde_json::from_str(r#"{"prompt": null}"#).unwrap();
        assert_eq!(null.prompt(), None);

        let empty: ChatRequest = serde_json::from_str(r#"{"prompt": ""}"#).unwrap();
        assert_eq!(empty.prompt(), None);

        let spaces: ChatRequest = serde_json::from_str(r#"{"prompt": "  \n "}"#).unwrap();
        assert_eq!(spaces.prompt(), None);
    }

    #[test]
    fn prompt_is_kept_verbatim() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"prompt": "  How much is lifetime?\n"}"#).unwrap();
        assert_eq!(req.prompt(), Some("  How much is lifetime?\n"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"prompt": "hi", "session_id": "abc"}"#).unwrap();
        assert_eq!(req.prompt(), Some("hi"));
    }
}
