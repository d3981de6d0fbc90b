//! # record-session-core
//!
//! Platform-agnostic core for microphone recording sessions.
//!
//! Owns the session lifecycle state machine, live metering snapshots, and
//! output path/format negotiation. The actual microphone I/O, codec
//! encoding, and permission prompts live in a platform engine behind the
//! `CaptureEngine` trait; this crate only exchanges typed request/reply
//! messages with it and reconciles the replies into one consistent
//! `Recording` snapshot.
//!
//! ## Architecture
//!
//! ```text
//! record-session-core (this crate)
//! ├── models/     ← RecorderError, Recording, AudioMetering, AudioFormat, RecordStatus
//! ├── protocol/   ← EngineRequest / EngineReply wire messages
//! ├── resolver/   ← output target negotiation + filesystem preconditions
//! ├── session/    ← Recorder (lifecycle orchestrator)
//! └── traits/     ← CaptureEngine (platform engine boundary)
//! ```

pub mod models;
pub mod protocol;
pub mod resolver;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::error::RecorderError;
pub use models::format::{AudioFormat, DEFAULT_EXTENSION};
pub use models::metering::{AudioMetering, SILENCE_FLOOR_DB};
pub use models::recording::Recording;
pub use models::status::RecordStatus;
pub use protocol::messages::{
    EngineError, EngineReply, EngineRequest, InitRequest, SnapshotReply, StatusReply,
};
pub use resolver::output_target::{resolve_target, ResolvedTarget};
pub use session::recorder::Recorder;
pub use traits::capture_engine::CaptureEngine;
