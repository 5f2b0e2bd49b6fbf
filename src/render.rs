//! Gallery renderer: one self-contained HTML document.
//!
//! Takes parsed records, embeds the photos that exist on disk as JPEG data
//! URIs, sorts the gallery by rating descending, and emits a fixed page
//! shell with a sticky search input and an inline script for live,
//! case-insensitive substring filtering over the comments.
//!
//! Comment text and filenames are interpolated without HTML escaping; the
//! transcript is trusted input. Adversarial content in a chat export can
//! break the document structure.

use std::path::Path;

use crate::assets::{data_uri, encode_image};
use crate::config::GalleryConfig;
use crate::error::Result;
use crate::record::{RenderedWine, WineRecord};

/// Name of the gallery file written into the export directory.
pub const OUTPUT_FILENAME: &str = "wine_ratings.html";

/// Inline stylesheet for the page shell.
const PAGE_STYLE: &str = "        body { font-family: Arial, sans-serif; margin: 0; padding: 10px; background: #f5f5f5; }
        .search { position: sticky; top: 0; background: white; padding: 10px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); margin-bottom: 10px; z-index: 100; }
        input { width: 100%; padding: 10px; font-size: 16px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box; }
        .wine { background: white; margin: 10px 0; padding: 10px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        .wine img { width: 100%; max-width: 400px; border-radius: 4px; }
        .rating { font-size: 32px; font-weight: bold; color: #d4af37; margin: 10px 0; }
        .comment { color: #666; font-style: italic; margin: 10px 0; font-size: 16px; }";

/// Client-side filter: substring containment over the lowercase comment,
/// re-evaluated on every keystroke. No tokenization, no ranking.
const FILTER_SCRIPT: &str = "        function filterWines() {
            const input = document.getElementById('searchInput').value.toLowerCase();
            const wines = document.querySelectorAll('.wine');
            wines.forEach(wine => {
                const searchText = wine.getAttribute('data-search');
                wine.style.display = searchText.includes(input) ? 'block' : 'none';
            });
        }";

/// Renders parsed wine records into a single HTML gallery.
///
/// # Example
///
/// ```rust,no_run
/// use vinoteca::parser::TranscriptParser;
/// use vinoteca::render::GalleryRenderer;
///
/// let records = TranscriptParser::new().parse("export/_chat.txt".as_ref())?;
/// let html = GalleryRenderer::new().render(&records, "export".as_ref())?;
/// # Ok::<(), vinoteca::VinotecaError>(())
/// ```
pub struct GalleryRenderer {
    config: GalleryConfig,
}

impl GalleryRenderer {
    /// Creates a new renderer with default configuration.
    pub fn new() -> Self {
        Self::with_config(GalleryConfig::default())
    }

    /// Creates a renderer with custom configuration.
    pub fn with_config(config: GalleryConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Renders the complete HTML document.
    ///
    /// Records whose photo file is missing from `dir` are silently excluded.
    /// The survivors are sorted by rating descending; the sort is stable, so
    /// equal ratings keep their transcript order and the output is
    /// reproducible. Photo read failures other than absence propagate.
    pub fn render(&self, records: &[WineRecord], dir: &Path) -> Result<String> {
        let mut wines = Vec::with_capacity(records.len());
        for record in records {
            if let Some(image_data) = encode_image(dir, record.photo_filename())? {
                wines.push(RenderedWine::new(record.clone(), image_data));
            }
        }
        wines.sort_by(|a, b| b.rating().cmp(&a.rating()));

        let mut html = String::new();
        self.push_header(&mut html);
        for wine in &wines {
            push_wine_block(&mut html, wine);
        }
        push_footer(&mut html);
        Ok(html)
    }

    fn push_header(&self, html: &mut String) {
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("    <title>{}</title>\n", self.config.title));
        html.push_str(&format!("    <style>\n{}\n    </style>\n", PAGE_STYLE));
        html.push_str("</head>\n<body>\n");
        html.push_str("    <div class=\"search\">\n");
        html.push_str(&format!(
            "        <input type=\"text\" id=\"searchInput\" placeholder=\"{}\" onkeyup=\"filterWines()\">\n",
            self.config.search_placeholder
        ));
        html.push_str("    </div>\n    <div id=\"wines\">\n");
    }
}

impl Default for GalleryRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn push_wine_block(html: &mut String, wine: &RenderedWine) {
    html.push_str(&format!(
        "        <div class=\"wine\" data-search=\"{}\">\n",
        wine.comment().to_lowercase()
    ));
    html.push_str(&format!(
        "            <img src=\"{}\">\n",
        data_uri(&wine.image_data)
    ));
    html.push_str(&format!(
        "            <div class=\"rating\">{}/10</div>\n",
        wine.rating()
    ));
    html.push_str(&format!(
        "            <div class=\"comment\">{}</div>\n",
        wine.comment()
    ));
    html.push_str("        </div>\n");
}

fn push_footer(html: &mut String) {
    html.push_str("    </div>\n    <script>\n");
    html.push_str(FILTER_SCRIPT);
    html.push_str("\n    </script>\n</body>\n</html>\n");
}
