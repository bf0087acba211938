use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RelayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "system")]
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// Which reply shape the caller wants back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Chat,
    Suggest,
}

impl Mode {
    // Anything other than "suggest" is a plain chat turn.
    pub fn from_type(value: Option<&str>) -> Self {
        match value {
            Some("suggest") => Mode::Suggest,
            _ => Mode::Chat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Chat => "chat",
            Mode::Suggest => "suggest",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub mode: Mode,
}

impl ChatRequest {
    /// Parses the inbound `{messages, type?}` body.
    pub fn from_body(body: &[u8]) -> Result<Self, RelayError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| RelayError::InvalidRequest(format!("Request body is not valid JSON: {}", e)))?;

        let messages = match value.get("messages") {
            Some(Value::Array(items)) => items
                .iter()
                .cloned()
                .map(serde_json::from_value::<Message>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| RelayError::InvalidRequest(format!("Invalid message in messages array: {}", e)))?,
            _ => return Err(RelayError::InvalidRequest("Messages array is required".to_string())),
        };

        let mode = Mode::from_type(value.get("type").and_then(Value::as_str));

        Ok(Self { messages, mode })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Prevention,
    Symptoms,
    Treatment,
    Medication,
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Prevention,
        Category::Symptoms,
        Category::Treatment,
        Category::Medication,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Prevention => "prevention",
            Category::Symptoms => "symptoms",
            Category::Treatment => "treatment",
            Category::Medication => "medication",
            Category::General => "general",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub question: String,
    pub category: Category,
}

pub const MIN_SUGGESTIONS: usize = 3;
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionList {
    pub suggestions: Vec<Suggestion>,
}

impl SuggestionList {
    pub fn validate(self) -> Result<Self, String> {
        let count = self.suggestions.len();
        if !(MIN_SUGGESTIONS..=MAX_SUGGESTIONS).contains(&count) {
            return Err(format!(
                "expected {}-{} suggestions, got {}",
                MIN_SUGGESTIONS, MAX_SUGGESTIONS, count
            ));
        }
        if let Some(blank) = self.suggestions.iter().position(|s| s.question.trim().is_empty()) {
            return Err(format!("suggestion {} has an empty question", blank));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Message { message: String },
    Suggestions(SuggestionList),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_messages_and_defaults_to_chat() {
        let body = br#"{"messages":[{"role":"user","content":"What causes malaria?"}]}"#;
        let request = ChatRequest::from_body(body).unwrap();
        assert_eq!(request.mode, Mode::Chat);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
    }

    #[test]
    fn suggest_type_selects_suggest_mode() {
        let body = br#"{"messages":[],"type":"suggest"}"#;
        assert_eq!(ChatRequest::from_body(body).unwrap().mode, Mode::Suggest);
    }

    #[test]
    fn unknown_type_falls_back_to_chat() {
        let body = br#"{"messages":[],"type":"summarize"}"#;
        assert_eq!(ChatRequest::from_body(body).unwrap().mode, Mode::Chat);
    }

    #[test]
    fn missing_or_non_array_messages_is_rejected() {
        let bodies: [&[u8]; 3] = [br#"{}"#, br#"{"messages":"hi"}"#, br#"{"messages":null}"#];
        for body in bodies {
            match ChatRequest::from_body(body) {
                Err(RelayError::InvalidRequest(msg)) => assert_eq!(msg, "Messages array is required"),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn non_json_body_is_rejected() {
        assert!(matches!(
            ChatRequest::from_body(b"not json"),
            Err(RelayError::InvalidRequest(_))
        ));
        assert!(matches!(ChatRequest::from_body(b""), Err(RelayError::InvalidRequest(_))));
    }

    #[test]
    fn bad_role_is_rejected() {
        let body = br#"{"messages":[{"role":"tool","content":"x"}]}"#;
        assert!(matches!(
            ChatRequest::from_body(body),
            Err(RelayError::InvalidRequest(_))
        ));
    }

    #[test]
    fn suggestion_count_is_bounded() {
        let make = |n: usize| SuggestionList {
            suggestions: (0..n)
                .map(|i| Suggestion {
                    question: format!("Question {}", i),
                    category: Category::General,
                })
                .collect(),
        };
        assert!(make(2).validate().is_err());
        assert!(make(3).validate().is_ok());
        assert!(make(5).validate().is_ok());
        assert!(make(6).validate().is_err());
    }

    #[test]
    fn responses_serialize_to_the_two_shapes() {
        let chat = ChatResponse::Message {
            message: "hello".to_string(),
        };
        assert_eq!(serde_json::to_value(&chat).unwrap(), json!({"message": "hello"}));

        let suggest = ChatResponse::Suggestions(SuggestionList {
            suggestions: vec![Suggestion {
                question: "How do bed nets help?".to_string(),
                category: Category::Prevention,
            }],
        });
        assert_eq!(
            serde_json::to_value(&suggest).unwrap(),
            json!({"suggestions": [{"question": "How do bed nets help?", "category": "prevention"}]})
        );
    }
}
