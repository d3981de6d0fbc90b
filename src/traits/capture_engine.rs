use async_trait::async_trait;

use crate::protocol::messages::{EngineError, EngineReply, EngineRequest};

/// Boundary to the platform capture engine.
///
/// The engine owns microphone I/O, codec encoding, and permission prompts;
/// this crate only sends it commands and reconciles the replies. One logical
/// request/response channel: calls are not queued or serialized here, and no
/// timeout is applied — a hung engine blocks the calling task until the
/// caller's own timeout policy intervenes.
#[async_trait]
pub trait CaptureEngine: Send + Sync {
    /// Send one command and wait for its reply.
    ///
    /// Transport failures and payloads that fail to decode into the
    /// command's reply shape are reported as `EngineError`.
    async fn call(&self, request: EngineRequest) -> Result<EngineReply, EngineError>;
}
