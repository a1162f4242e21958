//! # tagmeta core library
//!
//! Extracts and normalizes audio-file metadata from heterogeneous container
//! formats (MP3, FLAC, Ogg Vorbis, MP4) into one flat, fully-populated
//! [`TrackMetadata`] record:
//! - Tag and property reading via `lofty` (ID3v2, Vorbis Comments, MP4 ilst)
//! - Frame-level ID3v2 artwork inspection via `id3`
//! - Deterministic "absent" handling: empty strings for text, `-1` sentinels
//!   for numbers, never a partially-initialized record
//! - Per-file graceful degradation: one bad file never fails a batch
//!
//! Tag editing writes through `lofty` and persists to disk; it either
//! succeeds completely or reports an error.

pub mod artwork;
pub mod editor;
pub mod error;
pub mod extractor;
pub(crate) mod normalize;
pub mod types;

pub use editor::{edit, EditField};
pub use error::{EditError, MetadataError};
pub use extractor::MetadataExtractor;
pub use types::{ContainerKind, ImagePresence, TrackMetadata, UNKNOWN};
