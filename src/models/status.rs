/// Lifecycle status of a recording session.
///
/// Status transitions, as reported by the engine:
/// ```text
/// unset → initialized → recording ↔ paused
///                           ↓         ↓
///                         stopped (terminal)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordStatus {
    #[default]
    Unset,
    Initialized,
    Recording,
    Paused,
    Stopped,
}

impl RecordStatus {
    /// Decode a status token from an engine reply.
    ///
    /// Unknown tokens degrade to `Unset` rather than failing the reply.
    pub fn from_wire(token: &str) -> Self {
        match token {
            "unset" => Self::Unset,
            "initialized" => Self::Initialized,
            "recording" => Self::Recording,
            "paused" => Self::Paused,
            "stopped" => Self::Stopped,
            other => {
                log::warn!("Unknown status token from engine: {}", other);
                Self::Unset
            }
        }
    }

    /// Wire token for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Initialized => "initialized",
            Self::Recording => "recording",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
        }
    }

    /// Whether this is the sticky terminal status.
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_tokens() {
        assert_eq!(RecordStatus::from_wire("unset"), RecordStatus::Unset);
        assert_eq!(RecordStatus::from_wire("initialized"), RecordStatus::Initialized);
        assert_eq!(RecordStatus::from_wire("recording"), RecordStatus::Recording);
        assert_eq!(RecordStatus::from_wire("paused"), RecordStatus::Paused);
        assert_eq!(RecordStatus::from_wire("stopped"), RecordStatus::Stopped);
    }

    #[test]
    fn unknown_tokens_fall_open_to_unset() {
        assert_eq!(RecordStatus::from_wire("bogus"), RecordStatus::Unset);
        assert_eq!(RecordStatus::from_wire(""), RecordStatus::Unset);
        // Decoding is case-sensitive: engines send lowercase tokens.
        assert_eq!(RecordStatus::from_wire("Paused"), RecordStatus::Unset);
    }

    #[test]
    fn default_is_unset() {
        assert_eq!(RecordStatus::default(), RecordStatus::Unset);
    }

    #[test]
    fn round_trips_through_wire_token() {
        for status in [
            RecordStatus::Unset,
            RecordStatus::Initialized,
            RecordStatus::Recording,
            RecordStatus::Paused,
            RecordStatus::Stopped,
        ] {
            assert_eq!(RecordStatus::from_wire(status.as_str()), status);
        }
    }
}
