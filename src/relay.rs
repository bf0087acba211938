use crate::error::RelayError;
use crate::gateway::tools::SUGGEST_FAQS;
use crate::gateway::{Completion, ToolCall};
use crate::web::models::{ChatResponse, Mode, SuggestionList};

pub const FALLBACK_REPLY: &str = "I'm here to help! Please ask me anything about malaria.";

/// Turns a successful gateway completion into the response the UI expects.
///
/// In suggest mode the first tool call wins; without one the reply degrades to
/// a plain message, same as chat mode.
pub fn normalize(mode: Mode, completion: Completion) -> Result<ChatResponse, RelayError> {
    let message = completion.choices.into_iter().next().map(|choice| choice.message);

    if mode == Mode::Suggest {
        let call = message
            .as_ref()
            .and_then(|m| m.tool_calls.as_ref())
            .and_then(|calls| calls.first());
        if let Some(call) = call {
            return parse_suggestions(call).map(ChatResponse::Suggestions);
        }
    }

    let text = message
        .and_then(|m| m.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| FALLBACK_REPLY.to_string());

    Ok(ChatResponse::Message { message: text })
}

fn parse_suggestions(call: &ToolCall) -> Result<SuggestionList, RelayError> {
    if call.function.name != SUGGEST_FAQS {
        return Err(RelayError::MalformedToolCall(format!(
            "unexpected function {}",
            call.function.name
        )));
    }

    let list: SuggestionList = serde_json::from_str(&call.function.arguments)
        .map_err(|e| RelayError::MalformedToolCall(e.to_string()))?;

    list.validate().map_err(RelayError::MalformedToolCall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::models::Category;
    use serde_json::{json, Value};

    fn completion(value: Value) -> Completion {
        serde_json::from_value(value).unwrap()
    }

    fn tool_completion(name: &str, arguments: Value) -> Completion {
        completion(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": { "name": name, "arguments": arguments.to_string() }
                    }]
                }
            }]
        }))
    }

    fn three_suggestions() -> Value {
        json!({"suggestions": [
            {"question": "How can I prevent mosquito bites?", "category": "prevention"},
            {"question": "What are early symptoms?", "category": "symptoms"},
            {"question": "What is an ACT?", "category": "treatment"}
        ]})
    }

    #[test]
    fn chat_returns_content() {
        let result = normalize(
            Mode::Chat,
            completion(json!({"choices": [{"message": {"content": "Malaria is caused by Plasmodium."}}]})),
        )
        .unwrap();
        assert_eq!(
            result,
            ChatResponse::Message {
                message: "Malaria is caused by Plasmodium.".to_string()
            }
        );
    }

    #[test]
    fn chat_falls_back_when_content_missing() {
        for body in [
            json!({}),
            json!({"choices": []}),
            json!({"choices": null}),
            json!({"choices": [{"index": 0, "finish_reason": "length"}]}),
            json!({"choices": [{"message": {"content": ""}}]}),
        ] {
            assert_eq!(
                normalize(Mode::Chat, completion(body)).unwrap(),
                ChatResponse::Message {
                    message: FALLBACK_REPLY.to_string()
                }
            );
        }
    }

    #[test]
    fn chat_ignores_tool_calls() {
        let result = normalize(Mode::Chat, tool_completion("suggest_faqs", three_suggestions())).unwrap();
        assert!(matches!(result, ChatResponse::Message { .. }));
    }

    #[test]
    fn suggest_extracts_tool_arguments() {
        match normalize(Mode::Suggest, tool_completion("suggest_faqs", three_suggestions())).unwrap() {
            ChatResponse::Suggestions(list) => {
                assert_eq!(list.suggestions.len(), 3);
                assert_eq!(list.suggestions[0].category, Category::Prevention);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn suggest_without_tool_call_degrades_to_message() {
        let result = normalize(
            Mode::Suggest,
            completion(json!({"choices": [{"message": {"content": "Try asking about bed nets."}}]})),
        )
        .unwrap();
        assert_eq!(
            result,
            ChatResponse::Message {
                message: "Try asking about bed nets.".to_string()
            }
        );
    }

    #[test]
    fn suggest_rejects_malformed_tool_calls() {
        let unknown_category = json!({"suggestions": [
            {"question": "a", "category": "travel"},
            {"question": "b", "category": "general"},
            {"question": "c", "category": "general"}
        ]});
        let too_few = json!({"suggestions": [{"question": "a", "category": "general"}]});

        for case in [
            tool_completion("suggest_faqs", unknown_category),
            tool_completion("suggest_faqs", too_few),
            tool_completion("other_tool", three_suggestions()),
        ] {
            assert!(matches!(
                normalize(Mode::Suggest, case),
                Err(RelayError::MalformedToolCall(_))
            ));
        }
    }

    #[test]
    fn suggest_rejects_non_json_arguments() {
        let broken = completion(json!({
            "choices": [{"message": {"tool_calls": [{"function": {"name": "suggest_faqs", "arguments": "{not json"}}]}}]
        }));
        assert!(matches!(
            normalize(Mode::Suggest, broken),
            Err(RelayError::MalformedToolCall(_))
        ));
    }
}
