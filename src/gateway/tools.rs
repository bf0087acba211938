use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::web::models::{Category, MAX_SUGGESTIONS, MIN_SUGGESTIONS};

pub const SUGGEST_FAQS: &str = "suggest_faqs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolChoice {
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionName {
    pub name: String,
}

pub fn suggest_faqs_tool() -> Tool {
    let categories: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();

    Tool {
        kind: "function".to_string(),
        function: FunctionDefinition {
            name: SUGGEST_FAQS.to_string(),
            description: format!(
                "Return {}-{} helpful FAQ suggestions based on the conversation.",
                MIN_SUGGESTIONS, MAX_SUGGESTIONS
            ),
            parameters: json!({
                "type": "object",
                "properties": {
                    "suggestions": {
                        "type": "array",
                        "minItems": MIN_SUGGESTIONS,
                        "maxItems": MAX_SUGGESTIONS,
                        "items": {
                            "type": "object",
                            "properties": {
                                "question": { "type": "string" },
                                "category": { "type": "string", "enum": categories }
                            },
                            "required": ["question", "category"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": ["suggestions"],
                "additionalProperties": false
            }),
        },
    }
}

/// Forces the gateway to answer through `suggest_faqs`.
pub fn force_suggest_faqs() -> ToolChoice {
    ToolChoice {
        kind: "function".to_string(),
        function: FunctionName {
            name: SUGGEST_FAQS.to_string(),
        },
    }
}
