//! Wire messages exchanged with the capture engine.
//!
//! One tagged request enum, one reply enum. The reply shape is implied by
//! the command: `init` answers with a `StatusReply`, `stop` and `current`
//! with a `SnapshotReply`, `hasPermissions` with a bool, and the
//! fire-and-forget commands with a bare ack. Transports deserialize their
//! payload into the matching reply struct and wrap it; a reply of the wrong
//! shape is rejected by the controller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transport-level failure reported by a `CaptureEngine` implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct EngineError(pub String);

/// Payload of the `init` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitRequest {
    /// Target file location, or `None` to let the engine pick a default.
    pub path: Option<String>,
    /// File suffix, with leading dot.
    pub extension: String,
    /// Capture sample rate in Hz.
    pub sample_rate: u32,
}

/// Commands sent to the capture engine over its single logical channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum EngineRequest {
    Init(InitRequest),
    Start,
    Pause,
    Resume,
    Stop,
    Current { channel: u32 },
    HasPermissions,
}

impl EngineRequest {
    /// Wire token of the command, for log and error messages.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Stop => "stop",
            Self::Current { .. } => "current",
            Self::HasPermissions => "hasPermissions",
        }
    }
}

/// Reply to `init`: the engine's initial status token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReply {
    pub status: Option<String>,
}

/// Reply to `stop` and `current`: the engine's full session snapshot.
///
/// `duration` (milliseconds) is mandatory — a reply without it fails to
/// decode. Every other key may be omitted and leaves the corresponding
/// snapshot field untouched on merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotReply {
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    pub path: Option<String>,
    pub audio_format: Option<String>,
    pub peak_power: Option<f64>,
    pub average_power: Option<f64>,
    pub is_metering_enabled: Option<bool>,
    pub status: Option<String>,
}

/// Replies a capture engine can produce, one shape per command family.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineReply {
    /// Answer to `init`.
    Status(StatusReply),
    /// Answer to `stop` and `current`.
    Snapshot(SnapshotReply),
    /// Answer to `hasPermissions`.
    Permissions(bool),
    /// Answer to the fire-and-forget commands.
    Ack,
}
