//! Audio metadata extraction service
//!
//! Single-pass extraction: probe the container, pull coarse tag fields, pull
//! audio properties, then let the generic item view override field by field.
//! The order matters: the item view is authoritative over the simple
//! accessors when both carry a value.
//!
//! Extraction is all-or-nothing at the file level (unreadable file or no tag
//! at all fails the whole record) but forgiving at the field level: a
//! malformed track number blanks that one field and nothing else.

use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::properties::FileProperties;
use lofty::tag::{Accessor, ItemKey, Tag};
use tracing::{debug, warn};

use crate::artwork;
use crate::error::MetadataError;
use crate::normalize::{clamp_positive, join_values, parse_number_pair, parse_total};
use crate::types::{ContainerKind, TrackMetadata, UNKNOWN};

/// Metadata extractor service.
///
/// Stateless; each call opens and closes its own file handle, so distinct
/// paths may be extracted concurrently from multiple threads.
pub struct MetadataExtractor {}

impl MetadataExtractor {
    pub fn new() -> Self {
        Self {}
    }

    /// Extract one normalized record from an audio file.
    ///
    /// Fails when the underlying parser cannot open the file or finds no
    /// metadata tag; on success every field of the record is initialized.
    pub fn extract(&self, path: &Path) -> Result<TrackMetadata, MetadataError> {
        let tagged_file = Probe::open(path)
            .map_err(|e| MetadataError::Read(e.to_string()))?
            .read()
            .map_err(|e| MetadataError::Read(e.to_string()))?;

        let kind = ContainerKind::from_file_type(tagged_file.file_type());

        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
            .ok_or(MetadataError::NoTag)?;

        let mut meta = TrackMetadata::for_container(kind);
        coarse_fields(&mut meta, tag);
        property_fields(&mut meta, tagged_file.properties());
        item_fields(&mut meta, tag);
        meta.has_image = artwork::embedded_art(kind, path, tag);

        debug!(
            file = %path.display(),
            codec = %meta.codec,
            title = %meta.title,
            artist = %meta.artist,
            duration_s = meta.duration,
            "extracted metadata"
        );

        Ok(meta)
    }

    /// Extract metadata from multiple files, degrading gracefully: each file
    /// fails or succeeds on its own.
    pub fn extract_batch(
        &self,
        paths: &[impl AsRef<Path>],
    ) -> Vec<Result<TrackMetadata, MetadataError>> {
        paths.iter().map(|path| self.extract(path.as_ref())).collect()
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse fields from the simple tag accessors. The item view may override
/// artist later; title/album/year have no richer source.
fn coarse_fields(meta: &mut TrackMetadata, tag: &Tag) {
    if let Some(title) = tag.title() {
        meta.title = title.into_owned();
    }
    if let Some(album) = tag.album() {
        meta.album = album.into_owned();
    }
    if let Some(artist) = tag.artist() {
        meta.artist = artist.into_owned();
    }
    meta.year = tag.year().map_or(UNKNOWN, |y| clamp_positive(i64::from(y)));
}

/// Measured audio properties, each normalized to UNKNOWN when absent or
/// non-positive.
fn property_fields(meta: &mut TrackMetadata, props: &FileProperties) {
    meta.duration = clamp_positive(props.duration().as_secs() as i64);
    meta.bitrate = props
        .audio_bitrate()
        .map_or(UNKNOWN, |kbps| clamp_positive(i64::from(kbps)));
    meta.frequency = props
        .sample_rate()
        .map_or(UNKNOWN, |hz| clamp_positive(i64::from(hz)));
    meta.channels = props
        .channels()
        .map_or(UNKNOWN, |n| clamp_positive(i64::from(n)));
}

/// Generic item-view overrides: DATE, TRACKNUMBER, DISCNUMBER, ALBUMARTIST,
/// ARTIST, GENRE, COMMENT. Absent keys leave the earlier defaults in place.
fn item_fields(meta: &mut TrackMetadata, tag: &Tag) {
    if let Some(date) = tag.get_string(&ItemKey::RecordingDate) {
        meta.date = Some(date.to_owned());
    }

    let (track, track_total) =
        number_pair(tag, &ItemKey::TrackNumber, &ItemKey::TrackTotal, "track");
    meta.track = track;
    meta.track_total = track_total;

    let (disc, disc_total) =
        number_pair(tag, &ItemKey::DiscNumber, &ItemKey::DiscTotal, "disc");
    meta.disc = disc;
    meta.disc_total = disc_total;

    if let Some(album_artist) = joined_items(tag, &ItemKey::AlbumArtist) {
        meta.album_artist = album_artist;
    }
    if let Some(artist) = joined_items(tag, &ItemKey::TrackArtist) {
        meta.artist = artist;
    }
    if let Some(genre) = joined_items(tag, &ItemKey::Genre) {
        meta.genre = genre;
    }
    if let Some(comment) = joined_items(tag, &ItemKey::Comment) {
        meta.comment = comment;
    }
}

/// All values for a key, semicolon-joined in source order. `None` when the
/// key is absent so callers keep the earlier default.
fn joined_items(tag: &Tag, key: &ItemKey) -> Option<String> {
    let values: Vec<&str> = tag.get_strings(key).collect();
    if values.is_empty() {
        None
    } else {
        Some(join_values(values))
    }
}

/// Position/total pair from a possibly-compound "N/M" item, with a separate
/// total item as fallback. ID3 splits TRCK into two items, Vorbis commonly
/// stores the compound string; both shapes land here.
fn number_pair(tag: &Tag, number_key: &ItemKey, total_key: &ItemKey, field: &'static str) -> (i32, i32) {
    let (mut number, mut total) = (UNKNOWN, UNKNOWN);

    if let Some(raw) = tag.get_string(number_key) {
        (number, total) = parse_number_pair(raw);
        if number == UNKNOWN && !raw.trim().is_empty() {
            warn!(field, raw, "unparseable number field, keeping unknown");
        }
    }

    if total == UNKNOWN {
        if let Some(raw) = tag.get_string(total_key) {
            total = parse_total(raw);
        }
    }

    (number, total)
}
