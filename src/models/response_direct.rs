use serde::{self, Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ChoiceMessage {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Choice {
    #[serde(default)]
    pub index: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<ChoiceMessage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub finish_reason: Option<String>,
}

/// Non-streaming completion as returned by the upstream provider. Only the
/// fields the relay reads are typed; `usage` is kept opaque.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletion {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub usage: Option<Value>,
}

impl ChatCompletion {
    /// Content of the first choice, if it is present and non-empty.
    pub fn reply(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_reply_from_first_choice() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "id": "cmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(completion.reply(), Some("first"));
        assert!(completion.usage.is_none());
    }

    #[test]
    fn test_missing_or_empty_reply() {
        for body in [
            json!({}),
            json!({"choices": []}),
            json!({"choices": [{"index": 0}]}),
            json!({"choices": [{"message": {"role": "assistant"}}]}),
            json!({"choices": [{"message": {"content": null}}]}),
            json!({"choices": [{"message": {"content": ""}}]}),
        ] {
            let completion: ChatCompletion = serde_json::from_value(body).unwrap();
            assert_eq!(completion.reply(), None);
        }
    }

    #[test]
    fn test_usage_kept_verbatim() {
        let usage = json!({"prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7, "citation_tokens": 3});
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [{"message": {"content": "ok"}}],
            "usage": usage.clone()
        }))
        .unwrap();
        assert_eq!(completion.usage, Some(usage));
    }
}
