//! Full session lifecycle against a fake capture engine.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tempfile::tempdir;

use record_session_core::{
    AudioFormat, CaptureEngine, EngineError, EngineReply, EngineRequest, RecordStatus, Recorder,
    SnapshotReply, StatusReply,
};

/// In-process engine with the observable behavior of a platform backend:
/// a status token, a duration counter that advances per poll while
/// recording, and a default output location when the caller supplies none.
struct FakeEngine {
    state: Mutex<FakeState>,
}

struct FakeState {
    status: &'static str,
    duration_ms: u64,
    path: Option<String>,
}

impl FakeEngine {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(FakeState {
                status: "unset",
                duration_ms: 0,
                path: None,
            }),
        })
    }

    fn snapshot_reply(state: &FakeState) -> EngineReply {
        EngineReply::Snapshot(SnapshotReply {
            duration_ms: state.duration_ms,
            path: state.path.clone(),
            audio_format: None,
            peak_power: Some(-7.5),
            average_power: Some(-22.0),
            is_metering_enabled: Some(true),
            status: Some(state.status.into()),
        })
    }
}

#[async_trait]
impl CaptureEngine for FakeEngine {
    async fn call(&self, request: EngineRequest) -> Result<EngineReply, EngineError> {
        let mut state = self.state.lock();
        match request {
            EngineRequest::Init(init) => {
                state.status = "initialized";
                state.path = init
                    .path
                    .or_else(|| Some(format!("/engine/default{}", init.extension)));
                Ok(EngineReply::Status(StatusReply {
                    status: Some(state.status.into()),
                }))
            }
            EngineRequest::Start | EngineRequest::Resume => {
                state.status = "recording";
                Ok(EngineReply::Ack)
            }
            EngineRequest::Pause => {
                state.status = "paused";
                Ok(EngineReply::Ack)
            }
            EngineRequest::Stop => {
                state.status = "stopped";
                Ok(Self::snapshot_reply(&state))
            }
            EngineRequest::Current { .. } => {
                if state.status == "recording" {
                    state.duration_ms += 500;
                }
                Ok(Self::snapshot_reply(&state))
            }
            EngineRequest::HasPermissions => Ok(EngineReply::Permissions(true)),
        }
    }
}

#[tokio::test]
async fn full_lifecycle_with_caller_path() {
    let dir = tempdir().unwrap();
    let requested = dir.path().join("meeting.wav");

    let recorder = Recorder::new(FakeEngine::new());
    assert!(recorder.has_permissions().await.unwrap());

    let seeded = recorder
        .initialize(Some(&requested), None, 44_100)
        .await
        .unwrap();
    assert_eq!(seeded.status, Some(RecordStatus::Initialized));
    assert_eq!(seeded.path, Some(requested.clone()));
    assert_eq!(seeded.audio_format, Some(AudioFormat::Wav));

    recorder.start().await.unwrap();

    let first = recorder.current(0).await.unwrap();
    assert_eq!(first.status, Some(RecordStatus::Recording));
    assert_eq!(first.duration, Some(Duration::from_millis(500)));

    let second = recorder.current(0).await.unwrap();
    assert_eq!(second.duration, Some(Duration::from_millis(1_000)));

    recorder.pause().await.unwrap();
    let paused = recorder.current(0).await.unwrap();
    assert_eq!(paused.status, Some(RecordStatus::Paused));
    // Duration does not advance while paused.
    assert_eq!(paused.duration, Some(Duration::from_millis(1_000)));

    recorder.resume().await.unwrap();
    let resumed = recorder.current(0).await.unwrap();
    assert_eq!(resumed.status, Some(RecordStatus::Recording));
    assert_eq!(resumed.duration, Some(Duration::from_millis(1_500)));

    let stopped = recorder.stop().await.unwrap();
    assert_eq!(stopped.status, Some(RecordStatus::Stopped));
    assert_eq!(stopped.path, Some(requested));
    assert_eq!(stopped.duration, Some(Duration::from_millis(1_500)));

    // Stopped is sticky: later polls cannot revive the session.
    let late = recorder.current(0).await.unwrap();
    assert_eq!(late, stopped);
}

#[tokio::test]
async fn engine_assigns_the_location_when_no_path_is_given() {
    let recorder = Recorder::new(FakeEngine::new());

    let seeded = recorder.initialize(None, None, 16_000).await.unwrap();
    assert_eq!(seeded.path, None);
    assert_eq!(seeded.extension, Some(".m4a".into()));

    recorder.start().await.unwrap();
    let stopped = recorder.stop().await.unwrap();

    // The engine's default location flows back through the stop merge.
    assert_eq!(stopped.path, Some(PathBuf::from("/engine/default.m4a")));
    assert_eq!(stopped.audio_format, Some(AudioFormat::Aac));
}
