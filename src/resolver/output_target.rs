//! Output target negotiation.
//!
//! Runs synchronously before any engine interaction and is the only place
//! filesystem preconditions are enforced — the engine trusts the resolved
//! target without re-validating.

use std::path::{Path, PathBuf};

use crate::models::error::RecorderError;
use crate::models::format::{AudioFormat, DEFAULT_EXTENSION};

/// Outcome of output target negotiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Final file location, or `None` to let the engine pick a default.
    pub path: Option<PathBuf>,
    /// File suffix, with leading dot.
    pub extension: String,
    /// Codec the engine should encode with.
    pub format: AudioFormat,
}

/// Negotiate the output path, suffix, and codec for a new session.
///
/// With no requested path the engine assigns its own location later, the
/// suffix is the AAC default, and no filesystem checks run. Otherwise the
/// path's suffix is reconciled with the format hint:
///
/// - hint given, suffix maps to a different codec (or to none): the suffix
///   is replaced by the hint's canonical one;
/// - hint given, suffix already maps to the hinted codec: kept verbatim;
/// - no hint, recognized suffix: kept verbatim;
/// - no hint, unrecognized or missing suffix: the default suffix is appended
///   after whatever is there.
///
/// The resolved location must not already exist as a file, and its parent
/// directory must exist; either violation is an `InvalidTarget` error.
pub fn resolve_target(
    requested: Option<&Path>,
    hint: Option<AudioFormat>,
) -> Result<ResolvedTarget, RecorderError> {
    let Some(requested) = requested else {
        return Ok(ResolvedTarget {
            path: None,
            extension: DEFAULT_EXTENSION.to_string(),
            format: AudioFormat::Aac,
        });
    };

    let suffix = requested
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| format!(".{}", s));
    let detected = suffix.as_deref().and_then(AudioFormat::from_extension);

    let (path, extension, format) = if let Some(hinted) = hint {
        match (&suffix, detected) {
            (Some(existing), Some(codec)) if codec == hinted => {
                (requested.to_path_buf(), existing.clone(), hinted)
            }
            _ => {
                let canonical = hinted.canonical_extension();
                let path = requested.with_extension(canonical.trim_start_matches('.'));
                (path, canonical.to_string(), hinted)
            }
        }
    } else {
        match (&suffix, detected) {
            (Some(existing), Some(codec)) => (requested.to_path_buf(), existing.clone(), codec),
            _ => {
                // Unrecognized suffixes are kept; the default goes after them.
                let mut name = requested.as_os_str().to_os_string();
                name.push(DEFAULT_EXTENSION);
                (
                    PathBuf::from(name),
                    DEFAULT_EXTENSION.to_string(),
                    AudioFormat::Aac,
                )
            }
        }
    };

    if path.is_file() {
        return Err(RecorderError::InvalidTarget(format!(
            "file already exists: {}",
            path.display()
        )));
    }

    let parent_exists = match path.parent() {
        None => false,
        // An empty parent means a bare relative name in the current directory.
        Some(parent) if parent.as_os_str().is_empty() => true,
        Some(parent) => parent.is_dir(),
    };
    if !parent_exists {
        return Err(RecorderError::InvalidTarget(format!(
            "parent directory does not exist: {}",
            path.display()
        )));
    }

    Ok(ResolvedTarget {
        path: Some(path),
        extension,
        format,
    })
}
