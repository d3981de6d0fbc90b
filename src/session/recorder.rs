use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::error::RecorderError;
use crate::models::format::AudioFormat;
use crate::models::metering::AudioMetering;
use crate::models::recording::Recording;
use crate::models::status::RecordStatus;
use crate::protocol::messages::{EngineReply, EngineRequest, InitRequest, SnapshotReply};
use crate::resolver::output_target::resolve_target;
use crate::traits::capture_engine::CaptureEngine;

/// Orchestrates one recording session against a platform capture engine.
///
/// Owns the current `Recording` snapshot; callers get clones, never shared
/// mutable state. Engine replies are merged by building a new snapshot and
/// replacing the stored one atomically, so readers always observe a
/// consistent value. One logical session per instance — not designed for
/// overlapping sessions.
///
/// Calls are not serialized against each other. The single ordering
/// guarantee is that a `Stopped` snapshot is sticky: a `current()` reply
/// that loses the race against `stop()` is discarded instead of resurrecting
/// the session.
pub struct Recorder {
    engine: Arc<dyn CaptureEngine>,
    recording: Mutex<Recording>,
}

impl Recorder {
    pub fn new(engine: Arc<dyn CaptureEngine>) -> Self {
        Self {
            engine,
            recording: Mutex::new(Recording::default()),
        }
    }

    /// Copy of the current session snapshot. Local only, no engine call.
    pub fn snapshot(&self) -> Recording {
        self.recording.lock().clone()
    }

    /// Negotiate the output target and initialize the engine.
    ///
    /// The first snapshot carries the resolved target, floor-sentinel
    /// metering, and whatever status the engine reported (missing or unknown
    /// tokens decode to `Unset`).
    pub async fn initialize(
        &self,
        path: Option<&Path>,
        format: Option<AudioFormat>,
        sample_rate: u32,
    ) -> Result<Recording, RecorderError> {
        let target = resolve_target(path, format)?;
        log::debug!(
            "Initializing session: path={:?} extension={}",
            target.path,
            target.extension
        );

        let request = EngineRequest::Init(InitRequest {
            path: target
                .path
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            extension: target.extension.clone(),
            sample_rate,
        });
        let reply = self
            .engine
            .call(request)
            .await
            .map_err(|e| RecorderError::EngineInit(e.to_string()))?;
        let EngineReply::Status(status) = reply else {
            return Err(RecorderError::EngineInit(
                "unexpected reply shape for init".into(),
            ));
        };

        let recording = Recording {
            path: target.path,
            extension: Some(target.extension),
            duration: None,
            audio_format: Some(target.format),
            metering: Some(AudioMetering::silence_floor()),
            status: Some(
                status
                    .status
                    .as_deref()
                    .map(RecordStatus::from_wire)
                    .unwrap_or_default(),
            ),
        };
        *self.recording.lock() = recording.clone();
        Ok(recording)
    }

    /// Begin capturing. Fire-and-forget: the snapshot only changes on the
    /// next `current()` or `stop()`.
    pub async fn start(&self) -> Result<(), RecorderError> {
        self.command(EngineRequest::Start).await
    }

    /// Pause capturing. Fire-and-forget, like `start()`.
    pub async fn pause(&self) -> Result<(), RecorderError> {
        self.command(EngineRequest::Pause).await
    }

    /// Resume capturing. Fire-and-forget, like `start()`.
    pub async fn resume(&self) -> Result<(), RecorderError> {
        self.command(EngineRequest::Resume).await
    }

    /// Stop capturing and merge the engine's final snapshot.
    pub async fn stop(&self) -> Result<Recording, RecorderError> {
        let reply = self.snapshot_call(EngineRequest::Stop).await?;

        let mut current = self.recording.lock();
        let merged = current.merged_with(&reply);
        *current = merged.clone();
        Ok(merged)
    }

    /// Poll the engine for a live snapshot of `channel`.
    ///
    /// Once the stored status is `Stopped` the poll reply is discarded and
    /// the unchanged snapshot returned — a late reply racing `stop()` must
    /// not resurrect the session.
    pub async fn current(&self, channel: u32) -> Result<Recording, RecorderError> {
        let reply = self.snapshot_call(EngineRequest::Current { channel }).await?;

        let mut current = self.recording.lock();
        if current.is_stopped() {
            log::debug!("Discarding poll reply for stopped session");
            return Ok(current.clone());
        }
        let merged = current.merged_with(&reply);
        *current = merged.clone();
        Ok(merged)
    }

    /// Whether the process is allowed to record at all.
    ///
    /// Pure capability check against the engine; no session state involved.
    pub async fn has_permissions(&self) -> Result<bool, RecorderError> {
        match self.call(EngineRequest::HasPermissions).await? {
            EngineReply::Permissions(granted) => Ok(granted),
            _ => Err(RecorderError::EngineCommand(
                "hasPermissions: unexpected reply shape".into(),
            )),
        }
    }

    async fn call(&self, request: EngineRequest) -> Result<EngineReply, RecorderError> {
        let command = request.command();
        self.engine
            .call(request)
            .await
            .map_err(|e| RecorderError::EngineCommand(format!("{}: {}", command, e)))
    }

    /// Issue a command whose reply carries nothing we merge.
    async fn command(&self, request: EngineRequest) -> Result<(), RecorderError> {
        self.call(request).await.map(|_| ())
    }

    /// Issue a command that must answer with a session snapshot.
    async fn snapshot_call(
        &self,
        request: EngineRequest,
    ) -> Result<SnapshotReply, RecorderError> {
        let command = request.command();
        match self.call(request).await? {
            EngineReply::Snapshot(reply) => Ok(reply),
            _ => Err(RecorderError::EngineCommand(format!(
                "{}: unexpected reply shape",
                command
            ))),
        }
    }
}
