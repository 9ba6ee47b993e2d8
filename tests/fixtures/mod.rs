#![allow(dead_code)]

use serde_json::{Value, json};

pub fn sample_usage() -> Value {
    json!({
        "prompt_tokens": 24,
        "completion_tokens": 3,
        "total_tokens": 27
    })
}

pub fn sample_completion(content: &str) -> Value {
    json!({
        "id": "3c90c3cc-0d44-4b50-8888-8dd25736052a",
        "model": "llama-3.1-sonar-small-128k-online",
        "object": "chat.completion",
        "created": 1724369245,
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": {"role": "assistant", "content": content},
            "delta": {"role": "assistant", "content": ""}
        }],
        "usage": sample_usage()
    })
}

pub fn completion_without_content() -> Value {
    json!({
        "id": "chatcmpl-empty",
        "object": "chat.completion",
        "created": 1724369246,
        "choices": [{"index": 0, "finish_reason": "stop", "message": {"role": "assistant"}}]
    })
}

pub fn sample_error_body(message: &str, error_type: &str) -> Value {
    json!({
        "error": {
            "message": message,
            "type": error_type,
            "code": null
        }
    })
}
