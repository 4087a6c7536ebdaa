//! Command routing for the host bridge.
//!
//! [`HostRouter::dispatch`] maps one [`CommandEnvelope`] to one
//! [`ResponseEnvelope`] without touching stdio, so it can be driven directly
//! from tests. Failures never escape: they become error envelopes carrying
//! the request id.

use crate::classifier::EmotionDetector;
use crate::config::HostConfig;
use crate::error::{HeartlineError, Result};
use crate::host::contract::{CommandEnvelope, CommandName, EVENT_VERSION, ResponseEnvelope};
use crate::insights::{self, ConversationRecord};
use rand::Rng;
use serde::Deserialize;

/// Reply for an absent or blank `emotion.detect` message.
pub const EMPTY_MESSAGE_ERROR: &str = "Tell me what's on your mind, sweetheart";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DetectPayload {
    message: Option<String>,
    age: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordsPayload {
    records: Vec<ConversationRecord>,
}

/// Routes host commands to the detector and the insights functions.
#[derive(Debug, Clone)]
pub struct HostRouter {
    detector: EmotionDetector,
    config: HostConfig,
}

impl HostRouter {
    pub fn new(detector: EmotionDetector, config: HostConfig) -> Self {
        Self { detector, config }
    }

    /// Handle one command with the thread-local RNG.
    pub fn dispatch(&self, envelope: &CommandEnvelope) -> ResponseEnvelope {
        self.dispatch_with_rng(envelope, &mut rand::thread_rng())
    }

    /// Handle one command, drawing reply variants from `rng`.
    pub fn dispatch_with_rng<R: Rng + ?Sized>(
        &self,
        envelope: &CommandEnvelope,
        rng: &mut R,
    ) -> ResponseEnvelope {
        match self.route(envelope, rng) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(
                    request_id = %envelope.request_id,
                    command = envelope.command.as_str(),
                    error = %err,
                    "host command rejected"
                );
                ResponseEnvelope::error(envelope.request_id.clone(), error_text(err))
            }
        }
    }

    fn route<R: Rng + ?Sized>(
        &self,
        envelope: &CommandEnvelope,
        rng: &mut R,
    ) -> Result<ResponseEnvelope> {
        envelope.validate()?;
        let payload = match envelope.command {
            CommandName::HostPing => serde_json::json!({"pong": true}),
            CommandName::HostVersion => serde_json::json!({
                "contract_version": EVENT_VERSION,
                "crate_version": env!("CARGO_PKG_VERSION"),
                "channel": "heartline_host_v1"
            }),
            CommandName::EmotionDetect => self.handle_emotion_detect(&envelope.payload, rng)?,
            CommandName::InsightsMoodTimeline => {
                let payload: RecordsPayload = parse_payload(&envelope.payload)?;
                to_json(&insights::mood_timeline(&payload.records))?
            }
            CommandName::InsightsProfile => {
                let payload: RecordsPayload = parse_payload(&envelope.payload)?;
                to_json(&insights::profile_summary(&payload.records))?
            }
            CommandName::RuntimeStop => serde_json::json!({"stopping": true}),
        };
        Ok(ResponseEnvelope::ok(envelope.request_id.clone(), payload))
    }

    fn handle_emotion_detect<R: Rng + ?Sized>(
        &self,
        raw: &serde_json::Value,
        rng: &mut R,
    ) -> Result<serde_json::Value> {
        let payload: DetectPayload = parse_payload(raw)?;
        let message = payload.message.unwrap_or_default();
        if message.trim().is_empty() {
            return Err(HeartlineError::InvalidInput(EMPTY_MESSAGE_ERROR.to_owned()));
        }
        let chars = message.chars().count();
        if chars > self.config.max_message_chars {
            return Err(HeartlineError::InvalidInput(format!(
                "message is too long ({chars} characters, limit {})",
                self.config.max_message_chars
            )));
        }
        let age = payload.age.as_ref().and_then(parse_age);
        tracing::trace!(text = %message, "emotion.detect");
        let detection = self.detector.detect_with_rng(&message, age, rng)?;
        to_json(&detection.result)
    }
}

/// Lenient age extraction: integers, floats (truncated) and numeric strings.
/// Anything else is treated as absent.
pub fn parse_age(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_age)),
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.parse()
                .ok()
                .or_else(|| s.parse().ok().and_then(truncate_age))
        }
        _ => None,
    }
}

fn truncate_age(f: f64) -> Option<i64> {
    f.is_finite().then(|| f.trunc() as i64)
}

fn parse_payload<T: serde::de::DeserializeOwned + Default>(raw: &serde_json::Value) -> Result<T> {
    if raw.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(raw.clone())
        .map_err(|e| HeartlineError::InvalidInput(format!("malformed payload: {e}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| HeartlineError::Protocol(format!("failed to encode payload: {e}")))
}

fn error_text(err: HeartlineError) -> String {
    match err {
        HeartlineError::InvalidInput(message) => message,
        other => other.to_string(),
    }
}
