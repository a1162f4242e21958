//! Core metadata model
//!
//! One flat record per audio file, always fully populated: text fields hold
//! owned (possibly empty) strings, numeric fields hold either a measured
//! value or the [`UNKNOWN`] sentinel. A measured 0 is distinct from unknown.

use lofty::file::FileType;
use serde::{Deserialize, Serialize};

/// Sentinel for numeric fields with no measured value.
///
/// Reserved: normalization guarantees no legitimately measured value ever
/// collapses onto it.
pub const UNKNOWN: i32 = -1;

/// Recognized container formats, as a closed variant.
///
/// Codec/tag-type identity and artwork inspection dispatch exhaustively over
/// this enum; everything the probe does not recognize lands in `Other` and
/// still goes through generic extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    Mp3,
    Flac,
    OggVorbis,
    Mp4,
    Other,
}

impl ContainerKind {
    /// Map lofty's probed file type onto the recognized set.
    pub fn from_file_type(file_type: FileType) -> Self {
        match file_type {
            FileType::Mpeg => ContainerKind::Mp3,
            FileType::Flac => ContainerKind::Flac,
            FileType::Vorbis => ContainerKind::OggVorbis,
            FileType::Mp4 => ContainerKind::Mp4,
            _ => ContainerKind::Other,
        }
    }

    /// Display label for the audio codec.
    pub fn codec_label(self) -> &'static str {
        match self {
            ContainerKind::Mp3 => "MP3",
            ContainerKind::Flac => "FLAC",
            ContainerKind::OggVorbis => "Ogg Vorbis",
            ContainerKind::Mp4 => "MP4",
            ContainerKind::Other => "other",
        }
    }

    /// Display label for the native tag format of the container.
    pub fn tag_type_label(self) -> &'static str {
        match self {
            ContainerKind::Mp3 => "ID3v2",
            ContainerKind::Flac => "FLAC",
            ContainerKind::OggVorbis => "Vorbis Comment",
            ContainerKind::Mp4 => "MP4",
            ContainerKind::Other => "other",
        }
    }
}

/// Embedded-artwork presence, tri-state.
///
/// `Unknown` is reserved for containers outside the recognized set, where no
/// format-specific inspection exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImagePresence {
    Unknown,
    Absent,
    Present,
}

impl ImagePresence {
    /// C-boundary encoding: -1 unknown, 0 absent, 1 present.
    pub fn indicator(self) -> i32 {
        match self {
            ImagePresence::Unknown => UNKNOWN,
            ImagePresence::Absent => 0,
            ImagePresence::Present => 1,
        }
    }
}

impl From<bool> for ImagePresence {
    fn from(found: bool) -> Self {
        if found {
            ImagePresence::Present
        } else {
            ImagePresence::Absent
        }
    }
}

/// Normalized metadata for one audio file.
///
/// Multi-valued text fields (artist, album_artist, genre, comment) are
/// semicolon-joined in source order; zero values yield an empty string.
/// `date` is the only field that can be wholly absent: it is `None` unless
/// the source carries a DATE property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub title: String,
    pub album: String,
    pub artist: String,
    pub album_artist: String,
    pub genre: String,
    pub comment: String,
    pub codec: String,
    pub tag_type: String,
    pub date: Option<String>,
    pub year: i32,
    /// Duration in whole seconds.
    pub duration: i32,
    /// Bitrate in kbps.
    pub bitrate: i32,
    /// Sample rate in Hz.
    pub frequency: i32,
    pub channels: i32,
    pub track: i32,
    pub track_total: i32,
    pub disc: i32,
    pub disc_total: i32,
    pub has_image: ImagePresence,
}

impl TrackMetadata {
    /// A fully-initialized record for the given container, with every field
    /// at its "absent" value and codec/tag-type labels resolved.
    pub fn for_container(kind: ContainerKind) -> Self {
        TrackMetadata {
            title: String::new(),
            album: String::new(),
            artist: String::new(),
            album_artist: String::new(),
            genre: String::new(),
            comment: String::new(),
            codec: kind.codec_label().to_string(),
            tag_type: kind.tag_type_label().to_string(),
            date: None,
            year: UNKNOWN,
            duration: UNKNOWN,
            bitrate: UNKNOWN,
            frequency: UNKNOWN,
            channels: UNKNOWN,
            track: UNKNOWN,
            track_total: UNKNOWN,
            disc: UNKNOWN,
            disc_total: UNKNOWN,
            has_image: ImagePresence::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flac_labels_are_flac_for_both() {
        assert_eq!(ContainerKind::Flac.codec_label(), "FLAC");
        assert_eq!(ContainerKind::Flac.tag_type_label(), "FLAC");
    }

    #[test]
    fn unrecognized_container_labels_are_other() {
        let kind = ContainerKind::from_file_type(FileType::Wav);
        assert_eq!(kind, ContainerKind::Other);
        assert_eq!(kind.codec_label(), "other");
        assert_eq!(kind.tag_type_label(), "other");
    }

    #[test]
    fn fresh_record_is_total() {
        let meta = TrackMetadata::for_container(ContainerKind::Mp3);
        assert_eq!(meta.title, "");
        assert_eq!(meta.artist, "");
        assert_eq!(meta.codec, "MP3");
        assert_eq!(meta.tag_type, "ID3v2");
        assert_eq!(meta.date, None);
        assert_eq!(meta.year, UNKNOWN);
        assert_eq!(meta.track, UNKNOWN);
        assert_eq!(meta.track_total, UNKNOWN);
        assert_eq!(meta.has_image, ImagePresence::Unknown);
    }

    #[test]
    fn image_presence_indicator_encoding() {
        assert_eq!(ImagePresence::Unknown.indicator(), -1);
        assert_eq!(ImagePresence::Absent.indicator(), 0);
        assert_eq!(ImagePresence::Present.indicator(), 1);
    }
}
