//! Decoded responses re-encode to the document the server sent.

mod support;

use regraph::prelude::*;
use serde::Serialize;
use serde_json::{Value, json};
use support::client_for;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve(route: &str, body: &Value) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;
    mock_server
}

fn assert_round_trip<T: Serialize>(decoded: &T, sent: &Value) {
    assert_eq!(&serde_json::to_value(decoded).unwrap(), sent);
}

#[tokio::test]
async fn test_training_job_round_trip() {
    let body = json!({
        "job_id": "job-7",
        "status": "completed",
        "model": "mistral-7b",
        "dataset": "https://data.example.com/train.jsonl",
        "config": {"epochs": 5, "learning_rate": 0.0001, "batch_size": 8, "lora_rank": 32},
        "estimated_cost_usd": 42.5,
        "created_at": "2025-02-03T10:00:00Z",
        "progress": 1.0,
        "eta_minutes": 0
    });
    let mock_server = serve("/training/jobs/job-7", &body).await;

    let job = client_for(&mock_server)
        .training()
        .jobs()
        .get("job-7")
        .await
        .unwrap();
    assert_eq!(job.config.batch_size, Some(8));
    assert_round_trip(&job, &body);
}

#[tokio::test]
async fn test_batch_round_trip_keeps_free_form_results() {
    let body = json!({
        "batch_id": "batch-9",
        "status": "completed",
        "total_requests": 2,
        "completed_requests": 1,
        "failed_requests": 1,
        "created_at": "2025-02-03T10:00:00Z",
        "results": [
            {"index": 0, "output": "Paris", "usage": {"total_tokens": 12}, "cached": false},
            {"index": 1, "error": "context length exceeded", "detail": null}
        ]
    });
    let mock_server = serve("/batch/batch-9", &body).await;

    let batch = client_for(&mock_server).batch().get("batch-9").await.unwrap();
    let results = batch.results.as_deref().unwrap();
    assert_eq!(results[1]["error"], "context length exceeded");
    assert_round_trip(&batch, &body);
}

#[tokio::test]
async fn test_models_page_round_trip() {
    let body = json!({
        "models": [
            {
                "id": "llama-3-70b",
                "category": "llm",
                "provider": "meta",
                "context_length": 8192,
                "price_per_1k_tokens": 0.0009,
                "latency_ms": 340
            },
            {"id": "whisper-large", "category": "audio", "provider": "openai"}
        ],
        "total": 2,
        "page": 1,
        "limit": 20,
        "total_pages": 1,
        "meta": {"categories": ["audio", "llm"], "providers": ["meta", "openai"], "total_models": 2}
    });
    let mock_server = serve("/models", &body).await;

    let page = client_for(&mock_server).models().list(None).await.unwrap();
    assert_eq!(page.models[1].context_length, None);
    assert_round_trip(&page, &body);
}

#[tokio::test]
async fn test_platform_status_round_trip() {
    let body = json!({
        "status": "operational",
        "uptime_percentage": 99.97,
        "active_providers": 1284,
        "total_compute_units": 5_400_000_u64,
        "avg_latency_ms": 85,
        "services": {"inference": "operational", "training": "degraded"}
    });
    let mock_server = serve("/status", &body).await;

    let status = client_for(&mock_server).status().get().await.unwrap();
    assert_eq!(status.service("training"), Some("degraded"));
    assert_round_trip(&status, &body);
}
