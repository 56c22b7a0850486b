//! File attachments held by the composer.
//!
//! Attachments are identified by name only. The picker filters paths by
//! extension the same way a browser `accept="image/*"` filter would, and
//! never opens the files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Media filter a picker was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "avif", "heic",
];

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "mkv", "avi", "m4v"];

impl MediaKind {
    /// File extensions accepted for this kind (lowercase, no dot).
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => IMAGE_EXTENSIONS,
            Self::Video => VIDEO_EXTENSIONS,
        }
    }

    /// MIME-style filter, as shown in the picker title.
    pub fn accept_filter(self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Video => "video/*",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
        }
    }

    /// Whether `path` has an extension belonging to this kind.
    pub fn accepts(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions().contains(&ext.as_str())
            })
    }
}

/// A file pending send in the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name (last path component).
    pub name: String,
    /// Media kind of the picker that produced it.
    pub kind: MediaKind,
    /// Path the file was selected from.
    pub path: PathBuf,
}

impl Attachment {
    /// Build an attachment from a picked path, checking it against `kind`.
    pub fn from_path(path: impl Into<PathBuf>, kind: MediaKind) -> Result<Self, PickerError> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| PickerError::NoFileName(path.display().to_string()))?;

        if !kind.accepts(&path) {
            return Err(PickerError::UnsupportedKind {
                path: path.display().to_string(),
                kind,
            });
        }

        Ok(Self { name, kind, path })
    }
}

/// Result of running a picker over a batch of paths.
#[derive(Debug, Default)]
pub struct PickResult {
    /// Paths that passed the media filter.
    pub accepted: Vec<Attachment>,
    /// Paths that were dropped, with the reason.
    pub rejected: Vec<PickerError>,
}

/// Parse picker input: zero or more paths separated by `;` or line breaks
/// (`\n`, `\r\n` or a bare `\r`, as pasted by some terminals).
///
/// Blank entries are skipped, so empty input selects nothing.
pub fn pick_files(input: &str, kind: MediaKind) -> PickResult {
    let mut result = PickResult::default();

    for raw in input.split([';', '\n', '\r']) {
        let trimmed = raw.trim().trim_matches('"');
        if trimmed.is_empty() {
            continue;
        }
        match Attachment::from_path(trimmed, kind) {
            Ok(attachment) => result.accepted.push(attachment),
            Err(e) => {
                tracing::warn!(path = trimmed, error = %e, "Rejected picked file");
                result.rejected.push(e);
            }
        }
    }

    result
}

/// Reasons a picked path is not attached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// Path has no final component (e.g. `/` or `..`).
    #[error("No file name in path: {0}")]
    NoFileName(String),

    /// Extension does not match the picker's media filter.
    #[error("{path} does not match {}", .kind.accept_filter())]
    UnsupportedKind { path: String, kind: MediaKind },
}
