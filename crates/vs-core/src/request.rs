//! Inbound envelope sent by the voice platform.
//!
//! Only `version` and `request.type` are required. Everything else decodes
//! leniently: missing objects and scalars fall back to their empty value,
//! while fields that may legitimately be absent (`intent`, `reason`,
//! `accessToken`, `deviceId`, the context application id, slot values)
//! decode to `None`. Unknown fields are ignored.

use crate::error::{Result, SkillError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Decode `null` the same way as a missing field. Applied to every field
/// except `version` and `request.type`.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn decoded(result: serde_json::Result<Request>) -> Result<Request> {
    result.map_err(|err| {
        tracing::debug!(error = %err, "rejecting malformed request");
        SkillError::from(err)
    })
}

/// Top-level request envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Protocol version. Echoed, never interpreted.
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session: Session,
    pub request: RequestBody,
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: Context,
}

impl Request {
    pub fn from_json(raw: &str) -> Result<Self> {
        decoded(serde_json::from_str(raw))
    }

    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        decoded(serde_json::from_slice(raw))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        decoded(serde_json::from_value(value))
    }

    /// Skill id the request targets. The session copy wins; the context copy
    /// covers requests sent outside a session.
    pub fn application_id(&self) -> Option<&str> {
        let from_session = self.session.application.application_id.as_str();
        if !from_session.is_empty() {
            return Some(from_session);
        }
        self.context
            .system
            .application
            .application_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    /// True when no prior session existed.
    #[serde(deserialize_with = "null_as_default")]
    pub new: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub session_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub application: Application,
    /// Carried across turns by the platform; not interpreted here.
    #[serde(deserialize_with = "null_as_default")]
    pub attributes: HashMap<String, serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    #[serde(deserialize_with = "null_as_default")]
    pub application_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Platform metadata attached to every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default, deserialize_with = "null_as_default")]
    pub system: SystemContext,
}

impl Context {
    pub fn device_id(&self) -> Option<&str> {
        self.system.device.device_id.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemContext {
    #[serde(deserialize_with = "null_as_default")]
    pub api_access_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub device: Device,
    #[serde(deserialize_with = "null_as_default")]
    pub application: SystemApplication,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

/// Request classification derived from the `type` discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Launch,
    Intent,
    SessionEnded,
    /// A type this crate does not know about yet.
    Other(String),
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Launch => write!(f, "LaunchRequest"),
            RequestKind::Intent => write!(f, "IntentRequest"),
            RequestKind::SessionEnded => write!(f, "SessionEndedRequest"),
            RequestKind::Other(raw) => write!(f, "{}", raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_id: String,
    /// ISO-8601, kept verbatim.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RequestBody {
    pub fn kind(&self) -> RequestKind {
        match self.request_type.as_str() {
            "LaunchRequest" => RequestKind::Launch,
            "IntentRequest" => RequestKind::Intent,
            "SessionEndedRequest" => RequestKind::SessionEnded,
            other => RequestKind::Other(other.to_string()),
        }
    }

    /// Parsed timestamp; `None` when the platform sent something unparsable.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Resolved value of slot `name`, if the slot exists and was filled.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|slot| slot.value.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slot {
    /// Same as the key in `Intent::slots`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
