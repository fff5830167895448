//! Webhook envelope types for the voice platform.
//!
//! The platform POSTs a request envelope with the recognized utterance and
//! session metadata, and expects a response envelope with the reply text,
//! optional suggestion buttons, and the session echoed back. Unknown fields
//! are preserved where the platform may send them.

use serde::{Deserialize, Serialize};

/// Protocol version echoed in every response.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Incoming webhook request envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookRequest {
    #[serde(default)]
    pub request: RequestPayload,
    #[serde(default)]
    pub session: Session,
    #[serde(default)]
    pub version: String,
}

/// The recognized user utterance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestPayload {
    #[serde(default)]
    pub command: String,
}

/// Session metadata. Only `new` is read; everything else is carried through
/// untouched so the platform keeps its own bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Outgoing webhook response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub response: ResponsePayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    pub version: String,
}

/// Reply text with session-control flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub text: String,
    pub end_session: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<Button>>,
}

/// A suggestion button shown under the reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Button {
    pub title: String,
    pub hide: bool,
}

/// Standard suggestion buttons offered with schedule replies.
pub fn suggestion_buttons() -> Vec<Button> {
    ["Сегодня", "Завтра", "Понедельник"]
        .into_iter()
        .map(|title| Button {
            title: title.to_string(),
            hide: true,
        })
        .collect()
}

impl WebhookResponse {
    /// A normal reply keeping the session open.
    pub fn reply(text: impl Into<String>, session: Session, buttons: Option<Vec<Button>>) -> Self {
        Self {
            response: ResponsePayload {
                text: text.into(),
                end_session: false,
                buttons,
            },
            session: Some(session),
            version: PROTOCOL_VERSION.to_string(),
        }
    }

    /// A terminal error reply; the platform closes the session.
    pub fn fatal(text: impl Into<String>) -> Self {
        Self {
            response: ResponsePayload {
                text: text.into(),
                end_session: true,
                buttons: None,
            },
            session: None,
            version: PROTOCOL_VERSION.to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Protocol version served
    pub version: String,
    /// Days that have at least one lesson configured
    pub timetable_days: usize,
}
