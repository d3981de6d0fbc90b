/// File suffix used when neither the caller's path nor a format hint decides
/// one: AAC audio in an MPEG-4 container.
pub const DEFAULT_EXTENSION: &str = ".m4a";

/// Audio codec of the recording output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Aac,
    Wav,
}

impl AudioFormat {
    /// Canonical file suffix for this codec, with leading dot.
    pub fn canonical_extension(self) -> &'static str {
        match self {
            Self::Aac => ".m4a",
            Self::Wav => ".wav",
        }
    }

    /// Map a file suffix to a codec. A leading dot is accepted.
    ///
    /// Recognized: `.wav` → WAV; `.mp4`, `.aac`, `.m4a` → AAC. Anything else
    /// is unmapped and reported as `None`.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp4" | "aac" | "m4a" => Some(Self::Aac),
            _ => None,
        }
    }

    /// Decode a codec token from an engine reply.
    ///
    /// Unknown tokens degrade to `None` rather than failing the reply.
    pub fn from_wire(token: &str) -> Option<Self> {
        match token {
            "aac" => Some(Self::Aac),
            "wav" => Some(Self::Wav),
            other => {
                log::warn!("Unrecognized audio format token from engine: {}", other);
                None
            }
        }
    }

    /// Wire token for this codec.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aac => "aac",
            Self::Wav => "wav",
        }
    }
}
