//! # Vinoteca
//!
//! A Rust library for turning WhatsApp wine-chat exports into a single,
//! self-contained, searchable HTML tasting gallery.
//!
//! ## Overview
//!
//! A wine club that rates bottles over WhatsApp produces an export with a
//! `_chat.txt` transcript and a pile of photo files. Vinoteca scans the
//! transcript for photo attachments followed by a rating/comment line,
//! pairs each photo with its rating, embeds the images inline as base64
//! data URIs, and emits one HTML file with live client-side filtering.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::fs;
//! use vinoteca::prelude::*;
//! use vinoteca::render::OUTPUT_FILENAME;
//!
//! fn main() -> Result<()> {
//!     let export_dir = std::path::Path::new("export");
//!
//!     let parser = TranscriptParser::new();
//!     let records = parser.parse(&export_dir.join("_chat.txt"))?;
//!
//!     let renderer = GalleryRenderer::new();
//!     let html = renderer.render(&records, export_dir)?;
//!
//!     fs::write(export_dir.join(OUTPUT_FILENAME), html)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`TranscriptParser`](parser::TranscriptParser), the
//!   transcript scanner producing ordered [`WineRecord`]s
//! - [`assets`] — photo lookup and base64 encoding
//!   ([`encode_image`](assets::encode_image), [`data_uri`](assets::data_uri))
//! - [`render`] — [`GalleryRenderer`](render::GalleryRenderer), HTML emission
//! - [`record`] — [`WineRecord`] and [`RenderedWine`](record::RenderedWine)
//! - [`config`] — [`ParserConfig`](config::ParserConfig) and
//!   [`GalleryConfig`](config::GalleryConfig)
//! - [`error`] — [`VinotecaError`] and [`Result`]
//! - [`cli`] — CLI argument types (requires the `cli` feature)

#[cfg(feature = "cli")]
pub mod cli;

pub mod assets;
pub mod config;
pub mod error;
pub mod parser;
pub mod record;
pub mod render;

// Re-export the main types at the crate root for convenience
pub use error::{Result, VinotecaError};
pub use record::WineRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use vinoteca::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::WineRecord;

    // Error types
    pub use crate::error::{Result, VinotecaError};

    // Parsing
    pub use crate::config::ParserConfig;
    pub use crate::parser::TranscriptParser;

    // Rendering
    pub use crate::config::GalleryConfig;
    pub use crate::render::GalleryRenderer;
}
