//! Configuration types for the parser and the gallery renderer.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use vinoteca::config::ParserConfig;
//! use vinoteca::parser::TranscriptParser;
//!
//! let config = ParserConfig::new().with_max_rating(5);
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
///
/// WhatsApp exports announce media with `<attached: FILENAME>` lines. The
/// parser only pairs photo attachments with the rating line that follows
/// them; this config controls which attachments count as photos and where
/// ratings get clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Attachment filename substring that marks a photo, matched
    /// case-insensitively (default: `.jpg`).
    pub photo_extension: String,

    /// Ratings above this value are clamped to it (default: 10).
    pub max_rating: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            photo_extension: ".jpg".to_string(),
            max_rating: 10,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the photo extension filter.
    #[must_use]
    pub fn with_photo_extension(mut self, extension: impl Into<String>) -> Self {
        self.photo_extension = extension.into();
        self
    }

    /// Sets the rating clamp ceiling.
    #[must_use]
    pub fn with_max_rating(mut self, max: u8) -> Self {
        self.max_rating = max;
        self
    }
}

/// Configuration for gallery rendering.
///
/// # Example
///
/// ```rust
/// use vinoteca::config::GalleryConfig;
///
/// let config = GalleryConfig::new().with_title("Cellar Notes");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Document title (default: `Wine Ratings`).
    pub title: String,

    /// Placeholder text shown in the search input (default: `Cerca vino...`).
    pub search_placeholder: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Wine Ratings".to_string(),
            search_placeholder: "Cerca vino...".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the search input placeholder text.
    #[must_use]
    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }
}
