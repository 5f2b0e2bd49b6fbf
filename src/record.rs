//! Core data types for parsed wine ratings.
//!
//! This module provides [`WineRecord`], the normalized representation of one
//! rated wine extracted from a chat transcript, and [`RenderedWine`], the
//! render-ready form with the photo bytes already base64-encoded.
//!
//! # Overview
//!
//! A record consists of:
//! - **`photo_filename`** — the attachment filename, verbatim from the transcript
//! - **`rating`** — the extracted numeric rating, clamped to the gallery maximum
//! - **`comment`** — free text from the rating line, possibly empty
//!
//! # Examples
//!
//! ```
//! use vinoteca::WineRecord;
//!
//! let record = WineRecord::new("photo1.jpg", 8, "Lovely nebbiolo");
//! assert_eq!(record.rating(), 8);
//! assert_eq!(record.comment(), "Lovely nebbiolo");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use vinoteca::WineRecord;
//!
//! let record = WineRecord::new("photo1.jpg", 8, "Lovely nebbiolo");
//! let json = serde_json::to_string(&record)?;
//! let parsed: WineRecord = serde_json::from_str(&json)?;
//!
//! assert_eq!(record, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// One rated wine, parsed from a transcript.
///
/// Records are produced by [`TranscriptParser`](crate::parser::TranscriptParser)
/// in transcript order and consumed by
/// [`GalleryRenderer`](crate::render::GalleryRenderer). Nothing is persisted
/// between runs; every invocation rebuilds the full record list from the
/// transcript and the filesystem.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `photo_filename` | `String` | Attachment filename, used verbatim to locate the photo on disk |
/// | `rating` | `u8` | Numeric rating, already clamped to the configured maximum |
/// | `comment` | `String` | Trimmed free text from the rating line; may be empty |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineRecord {
    /// Attachment filename as it appears in the transcript.
    pub photo_filename: String,

    /// Extracted rating. The parser clamps values above its configured
    /// maximum (10 by default); there is no enforced minimum.
    pub rating: u8,

    /// Free-text remainder of the rating line, whitespace-trimmed, with a
    /// single leading digit run stripped. Empty when the line held nothing
    /// but the rating digits.
    pub comment: String,
}

impl WineRecord {
    /// Creates a new record.
    ///
    /// The parser is the usual producer; this constructor is public so tests
    /// and library users can build records directly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vinoteca::WineRecord;
    ///
    /// let record = WineRecord::new("IMG-001.jpg", 9, "Big, jammy zinfandel");
    /// assert_eq!(record.photo_filename(), "IMG-001.jpg");
    /// ```
    pub fn new(photo_filename: impl Into<String>, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            photo_filename: photo_filename.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Returns the attachment filename.
    pub fn photo_filename(&self) -> &str {
        &self.photo_filename
    }

    /// Returns the clamped rating.
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Returns the comment text.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns `true` if the comment is empty or whitespace-only.
    pub fn has_empty_comment(&self) -> bool {
        self.comment.trim().is_empty()
    }
}

/// A [`WineRecord`] whose photo has been located and base64-encoded.
///
/// Only records whose photo file exists at render time become a
/// `RenderedWine`; the rest are silently excluded from the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWine {
    /// The parsed record this entry was built from.
    pub record: WineRecord,

    /// Base64 encoding of the photo file's raw bytes.
    pub image_data: String,
}

impl RenderedWine {
    /// Creates a render-ready entry from a record and its encoded photo.
    pub fn new(record: WineRecord, image_data: impl Into<String>) -> Self {
        Self {
            record,
            image_data: image_data.into(),
        }
    }

    /// Returns the clamped rating of the underlying record.
    pub fn rating(&self) -> u8 {
        self.record.rating
    }

    /// Returns the comment of the underlying record.
    pub fn comment(&self) -> &str {
        &self.record.comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = WineRecord::new("photo1.jpg", 8, "Lovely nebbiolo");
        assert_eq!(record.photo_filename(), "photo1.jpg");
        assert_eq!(record.rating(), 8);
        assert_eq!(record.comment(), "Lovely nebbiolo");
    }

    #[test]
    fn test_record_empty_comment() {
        assert!(WineRecord::new("a.jpg", 7, "").has_empty_comment());
        assert!(WineRecord::new("a.jpg", 7, "   ").has_empty_comment());
        assert!(!WineRecord::new("a.jpg", 7, "dry finish").has_empty_comment());
    }

    #[test]
    fn test_record_serialization() {
        let record = WineRecord::new("photo1.jpg", 8, "Lovely nebbiolo");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("photo1.jpg"));
        assert!(json.contains("Lovely nebbiolo"));

        let parsed: WineRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{"photo_filename":"a.jpg","rating":10,"comment":"Barolo"}"#;
        let record: WineRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.rating(), 10);
        assert_eq!(record.comment(), "Barolo");
    }

    #[test]
    fn test_rendered_wine_accessors() {
        let record = WineRecord::new("photo1.jpg", 6, "Light gamay");
        let rendered = RenderedWine::new(record.clone(), "aGVsbG8=");
        assert_eq!(rendered.rating(), 6);
        assert_eq!(rendered.comment(), "Light gamay");
        assert_eq!(rendered.record, record);
        assert_eq!(rendered.image_data, "aGVsbG8=");
    }
}
