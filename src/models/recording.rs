use std::path::PathBuf;
use std::time::Duration;

use super::format::AudioFormat;
use super::metering::AudioMetering;
use super::status::RecordStatus;
use crate::protocol::messages::SnapshotReply;

/// Immutable snapshot of the current recording session.
///
/// Never mutated in place: engine replies are merged by building a new
/// snapshot that takes each field from the reply when present and keeps the
/// prior value otherwise. Readers therefore always observe a complete,
/// consistent value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    /// Resolved file location. Set at init when the caller supplied a path,
    /// otherwise filled in by later engine replies.
    pub path: Option<PathBuf>,
    /// File suffix, with leading dot.
    pub extension: Option<String>,
    /// Elapsed recorded time.
    pub duration: Option<Duration>,
    /// Output codec, fixed during target negotiation.
    pub audio_format: Option<AudioFormat>,
    /// Latest signal levels.
    pub metering: Option<AudioMetering>,
    /// Lifecycle status last reported by the engine.
    pub status: Option<RecordStatus>,
}

impl Recording {
    /// Whether the session has reached the sticky terminal status.
    pub fn is_stopped(&self) -> bool {
        self.status.is_some_and(RecordStatus::is_stopped)
    }

    /// Merge an engine snapshot reply into this snapshot.
    ///
    /// Copy-with-override: a field absent from the reply keeps its prior
    /// value; a present status/format token that fails to decode overrides
    /// with the fail-open default. `duration` is always present in the reply
    /// and always overrides. Applying the same reply twice yields the same
    /// snapshot as applying it once.
    pub fn merged_with(&self, reply: &SnapshotReply) -> Recording {
        let prior = self.metering.unwrap_or_default();
        let has_metering = self.metering.is_some()
            || reply.peak_power.is_some()
            || reply.average_power.is_some()
            || reply.is_metering_enabled.is_some();
        let metering = has_metering.then_some(AudioMetering {
            peak_power: reply.peak_power.or(prior.peak_power),
            average_power: reply.average_power.or(prior.average_power),
            is_metering_enabled: reply.is_metering_enabled.or(prior.is_metering_enabled),
        });

        Recording {
            path: reply
                .path
                .as_ref()
                .map(PathBuf::from)
                .or_else(|| self.path.clone()),
            extension: self.extension.clone(),
            duration: Some(Duration::from_millis(reply.duration_ms)),
            audio_format: match reply.audio_format.as_deref() {
                Some(token) => AudioFormat::from_wire(token),
                None => self.audio_format,
            },
            metering,
            status: match reply.status.as_deref() {
                Some(token) => Some(RecordStatus::from_wire(token)),
                None => self.status,
            },
        }
    }
}
