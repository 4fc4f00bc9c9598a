//! Data model serialization tests

use refactor_proxy::models::*;
use serde_json::json;

#[test]
fn test_generate_request_shape() {
    let request = GenerateRequest::new("neural-chat", "prompt").with_temperature(0.5);
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({ "model": "neural-chat", "prompt": "prompt", "stream": false, "temperature": 0.5 })
    );
}

#[test]
fn test_warmup_request_omits_temperature() {
    let request = GenerateRequest::new("neural-chat", "Reply with 'ready'");
    let value = serde_json::to_value(&request).unwrap();

    assert!(value.get("temperature").is_none());
    assert_eq!(value["stream"], false);
}

#[test]
fn test_generate_response_ignores_extra_fields() {
    let response: GenerateResponse = serde_json::from_value(json!({
        "model": "neural-chat",
        "created_at": "2024-01-01T00:00:00Z",
        "response": "fn a() {}",
        "done": true,
        "context": [1, 2, 3],
        "total_duration": 123456
    }))
    .unwrap();

    assert_eq!(response.response.as_deref(), Some("fn a() {}"));
    assert_eq!(response.done, Some(true));
}

#[test]
fn test_generate_response_without_text() {
    let response: GenerateResponse = serde_json::from_value(json!({ "done": true })).unwrap();
    assert!(response.response.is_none());
}

#[test]
fn test_tags_response() {
    let tags: TagsResponse = serde_json::from_value(json!({
        "models": [
            { "name": "neural-chat:latest", "size": 4109865159u64, "digest": "abc" },
            { "name": "mistral:7b" }
        ]
    }))
    .unwrap();

    assert_eq!(tags.model_names(), vec!["neural-chat:latest", "mistral:7b"]);
}

#[test]
fn test_refactor_result_summary_is_static() {
    let result = RefactorResult::new("x".to_string());
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(
        value,
        json!({
            "refactored": "x",
            "summary": ["Code structure improved", "Type safety enhanced", "Best practices applied"]
        })
    );
}

#[test]
fn test_batch_result_count() {
    let result = BatchRefactorResult::from(vec![
        BatchItem { original: "a".to_string(), refactored: "A".to_string() },
        BatchItem { original: "b".to_string(), refactored: "b".to_string() },
    ]);

    assert_eq!(result.count, 2);
    assert_eq!(serde_json::to_value(&result).unwrap()["results"][1]["refactored"], "b");
}

#[test]
fn test_health_response_shapes() {
    assert_eq!(
        serde_json::to_value(HealthResponse::ok("neural-chat")).unwrap(),
        json!({ "status": "ok", "model": "neural-chat" })
    );
    assert_eq!(
        serde_json::to_value(HealthResponse::error()).unwrap(),
        json!({ "status": "error" })
    );
}

#[test]
fn test_request_defaults() {
    let single: RefactorRequest = serde_json::from_value(json!({})).unwrap();
    assert!(single.code.is_none());

    let batch: BatchRefactorRequest = serde_json::from_value(json!({ "codes": null })).unwrap();
    assert!(batch.codes.is_none());
}
