//! Host bridge sessions over in-memory stdio.

use heartline::classifier::EmotionDetector;
use heartline::config::HostConfig;
use heartline::host::contract::{CommandEnvelope, CommandName, EVENT_VERSION, ResponseEnvelope};
use heartline::host::router::{EMPTY_MESSAGE_ERROR, HostRouter};
use heartline::host::stdio::run_bridge;
use heartline::insights::ConversationRecord;
use serde_json::json;

fn router() -> HostRouter {
    HostRouter::new(EmotionDetector::builtin().expect("builtin catalog"), HostConfig::default())
}

fn line(envelope: &CommandEnvelope) -> String {
    let mut s = serde_json::to_string(envelope).expect("serialize in test");
    s.push('\n');
    s
}

async fn session(input: String) -> Vec<ResponseEnvelope> {
    let mut out = Vec::new();
    run_bridge(&router(), input.as_bytes(), &mut out)
        .await
        .expect("bridge");
    String::from_utf8(out)
        .expect("utf8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("response line"))
        .collect()
}

#[tokio::test]
async fn detect_then_summarise_history() {
    let first = CommandEnvelope::new(
        "d1",
        CommandName::EmotionDetect,
        json!({"message": "I failed my exam today", "age": "16"}),
    );
    let second = CommandEnvelope::new(
        "d2",
        CommandName::EmotionDetect,
        json!({"message": "my boss gave me a deadline and I am exhausted", "age": 45}),
    );
    let responses = session(line(&first) + &line(&second)).await;
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].payload["emotion"], "Exam Stress");
    assert_eq!(responses[0].payload["stress_level"], "High");
    assert_eq!(responses[1].payload["emotion"], "Work Pressure");

    // Feed the detections back as stored history.
    let records: Vec<ConversationRecord> = responses
        .iter()
        .enumerate()
        .map(|(i, r)| ConversationRecord {
            emotion: r.payload["emotion"].as_str().unwrap_or_default().to_owned(),
            timestamp: chrono::DateTime::parse_from_rfc3339(&format!(
                "2025-10-0{}T09:00:00Z",
                i + 1
            ))
            .expect("timestamp")
            .with_timezone(&chrono::Utc),
        })
        .collect();

    let timeline = CommandEnvelope::new(
        "t",
        CommandName::InsightsMoodTimeline,
        json!({ "records": records }),
    );
    let profile = CommandEnvelope::new("p", CommandName::InsightsProfile, json!({ "records": records }));
    let stop = CommandEnvelope::new("s", CommandName::RuntimeStop, json!({}));
    let responses = session(line(&timeline) + &line(&profile) + &line(&stop)).await;

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0].payload["dates"], json!(["Oct 01", "Oct 02"]));
    assert_eq!(responses[0].payload["emotion_data"], json!([1, 2]));
    assert_eq!(responses[1].payload["avg_stress"], 7.0);
    assert_eq!(responses[1].payload["stress_icon"], "🔴");
    assert_eq!(responses[1].payload["last_active"], "Oct 02, 2025");
    assert_eq!(responses[2].payload["stopping"], true);
}

#[tokio::test]
async fn blank_message_gets_validation_error() {
    let env = CommandEnvelope::new("b", CommandName::EmotionDetect, json!({"message": "  "}));
    let responses = session(line(&env)).await;
    assert_eq!(responses.len(), 1);
    assert!(!responses[0].ok);
    assert_eq!(responses[0].request_id, "b");
    assert_eq!(responses[0].error.as_deref(), Some(EMPTY_MESSAGE_ERROR));
}

#[tokio::test]
async fn every_response_carries_contract_version() {
    let input = [
        CommandEnvelope::new("1", CommandName::HostPing, json!({})),
        CommandEnvelope::new("2", CommandName::HostVersion, json!({})),
        CommandEnvelope::new("3", CommandName::EmotionDetect, json!({"message": "hi"})),
    ]
    .iter()
    .map(line)
    .collect::<String>();
    let responses = session(input + "garbage\n").await;
    assert_eq!(responses.len(), 4);
    assert!(responses.iter().all(|r| r.v == EVENT_VERSION));
    assert!(responses[..3].iter().all(|r| r.ok));
    assert!(!responses[3].ok);
}
