//! Embedded-artwork presence detection.
//!
//! Closed dispatch over [`ContainerKind`]: each recognized container gets
//! its format-specific inspection, everything else stays unknown. There is
//! deliberately no generic fallback.

use std::path::Path;

use lofty::tag::Tag as LoftyTag;

use crate::types::{ContainerKind, ImagePresence};

/// Determine whether the file carries embedded cover art.
pub fn embedded_art(kind: ContainerKind, path: &Path, tag: &LoftyTag) -> ImagePresence {
    match kind {
        ContainerKind::Mp3 => mp3_picture_frames(path),
        ContainerKind::Flac | ContainerKind::OggVorbis => {
            ImagePresence::from(!tag.pictures().is_empty())
        }
        // The cover-art atom (covr) surfaces through the same picture list.
        ContainerKind::Mp4 => ImagePresence::from(!tag.pictures().is_empty()),
        ContainerKind::Other => ImagePresence::Unknown,
    }
}

/// MP3: inspect ID3v2 attached-picture frames directly. Both the current
/// APIC identifier and the legacy PIC identifier count.
fn mp3_picture_frames(path: &Path) -> ImagePresence {
    match id3::Tag::read_from_path(path) {
        Ok(tag) => {
            ImagePresence::from(tag.frames().any(|f| f.id() == "APIC" || f.id() == "PIC"))
        }
        // No readable ID3v2 tag means no attached pictures.
        Err(_) => ImagePresence::Absent,
    }
}
