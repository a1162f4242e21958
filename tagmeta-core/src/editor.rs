//! Tag editing: validate, write through the tag layer, persist.
//!
//! An edit either reaches disk or reports an error; there is no
//! "accepted but not written" path.

use std::path::Path;
use std::str::FromStr;

use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{ItemKey, Tag, TagExt};
use tracing::debug;

use crate::error::EditError;
use crate::normalize::parse_number_pair;
use crate::types::UNKNOWN;

/// The supported tag vocabulary for editing. Closed on purpose: anything
/// outside it is rejected before the file is even opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Artist,
    Album,
    AlbumArtist,
    Genre,
    Comment,
    Date,
    Year,
    Track,
    Disc,
}

impl FromStr for EditField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(EditField::Title),
            "artist" => Ok(EditField::Artist),
            "album" => Ok(EditField::Album),
            "albumartist" | "album_artist" => Ok(EditField::AlbumArtist),
            "genre" => Ok(EditField::Genre),
            "comment" => Ok(EditField::Comment),
            "date" => Ok(EditField::Date),
            "year" => Ok(EditField::Year),
            "track" => Ok(EditField::Track),
            "disc" => Ok(EditField::Disc),
            other => Err(EditError::UnsupportedField(other.to_string())),
        }
    }
}

impl EditField {
    pub fn name(self) -> &'static str {
        match self {
            EditField::Title => "title",
            EditField::Artist => "artist",
            EditField::Album => "album",
            EditField::AlbumArtist => "albumartist",
            EditField::Genre => "genre",
            EditField::Comment => "comment",
            EditField::Date => "date",
            EditField::Year => "year",
            EditField::Track => "track",
            EditField::Disc => "disc",
        }
    }

    fn item_key(self) -> ItemKey {
        match self {
            EditField::Title => ItemKey::TrackTitle,
            EditField::Artist => ItemKey::TrackArtist,
            EditField::Album => ItemKey::AlbumTitle,
            EditField::AlbumArtist => ItemKey::AlbumArtist,
            EditField::Genre => ItemKey::Genre,
            EditField::Comment => ItemKey::Comment,
            EditField::Date => ItemKey::RecordingDate,
            EditField::Year => ItemKey::Year,
            EditField::Track => ItemKey::TrackNumber,
            EditField::Disc => ItemKey::DiscNumber,
        }
    }

    /// Shape check before any I/O happens.
    fn validate(self, value: &str) -> Result<(), EditError> {
        let ok = match self {
            EditField::Year => value.trim().parse::<u32>().is_ok(),
            // "N" or "N/M", numeric numerator required.
            EditField::Track | EditField::Disc => parse_number_pair(value).0 != UNKNOWN,
            _ => true,
        };

        if ok {
            Ok(())
        } else {
            Err(EditError::InvalidValue {
                field: self.name(),
                value: value.to_string(),
            })
        }
    }
}

/// Apply one field edit to a file and persist it.
///
/// Validates the field name against the supported vocabulary and the value
/// against the field's shape, writes through the file's primary tag
/// (creating one when the file carries none), and saves to disk.
pub fn edit(path: &Path, field: &str, value: &str) -> Result<(), EditError> {
    let field = EditField::from_str(field)?;
    field.validate(value)?;

    let mut tagged_file = Probe::open(path)
        .map_err(|e| EditError::Read(e.to_string()))?
        .read()
        .map_err(|e| EditError::Read(e.to_string()))?;

    let tag_type = tagged_file.primary_tag_type();
    if tagged_file.tag(tag_type).is_none() {
        tagged_file.insert_tag(Tag::new(tag_type));
    }
    let tag = tagged_file
        .tag_mut(tag_type)
        .ok_or_else(|| EditError::Write(format!("file does not support {tag_type:?} tags")))?;

    tag.insert_text(field.item_key(), value.to_string());
    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| EditError::Write(e.to_string()))?;

    debug!(file = %path.display(), field = field.name(), "tag edit persisted");
    Ok(())
}
