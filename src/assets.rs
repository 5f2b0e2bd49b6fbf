//! Photo lookup and base64 encoding for inline embedding.
//!
//! Photo presence is modeled as an explicit present/absent result: a missing
//! file is `Ok(None)`, never an error, and the renderer excludes the record.
//! Any other read failure (permissions, I/O fault) propagates unguarded.

use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::Result;

/// Reads a photo from the export directory and base64-encodes its bytes.
///
/// The whole file is held in memory; there is no size limit and no
/// streaming. Returns `Ok(None)` when the file does not exist.
///
/// # Example
///
/// ```rust,no_run
/// use vinoteca::assets::encode_image;
///
/// let encoded = encode_image("export".as_ref(), "photo1.jpg")?;
/// if let Some(data) = encoded {
///     println!("{}", vinoteca::assets::data_uri(&data));
/// }
/// # Ok::<(), vinoteca::VinotecaError>(())
/// ```
pub fn encode_image(dir: &Path, filename: &str) -> Result<Option<String>> {
    let path = dir.join(filename);
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(&path)?;
    Ok(Some(BASE64.encode(bytes)))
}

/// Builds a JPEG data URI from already-encoded image data.
///
/// The MIME type is always `image/jpeg`; files are assumed JPEG-compatible
/// regardless of their actual content.
pub fn data_uri(encoded: &str) -> String {
    format!("data:image/jpeg;base64,{encoded}")
}
