//! WhatsApp transcript parser for wine ratings.
//!
//! WhatsApp exports announce media on their own line:
//!
//! ```text
//! [12:01, Alice] <attached: 00000012-PHOTO-2023-11-04.jpg>
//! [12:01, Alice] 8 Lovely nebbiolo
//! ```
//!
//! The parser walks the transcript with a single forward cursor and pairs
//! each photo attachment with the rating and comment on the line that
//! immediately follows it. Lines that don't fit the pattern are skipped;
//! an attachment whose next line has no digits is dropped silently. False
//! negatives are accepted over false positives.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::record::WineRecord;

/// Name of the transcript file inside a WhatsApp export directory.
pub const CHAT_FILENAME: &str = "_chat.txt";

/// Parser for WhatsApp TXT exports of a wine-rating chat.
///
/// # Example
///
/// ```rust,no_run
/// use vinoteca::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let records = parser.parse("export/_chat.txt".as_ref())?;
/// # Ok::<(), vinoteca::VinotecaError>(())
/// ```
pub struct TranscriptParser {
    config: ParserConfig,
    attachment: Regex,
    digit_run: Regex,
    leading_digits: Regex,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            attachment: Regex::new(r"<attached: (.+?)>").unwrap(),
            digit_run: Regex::new(r"\d+").unwrap(),
            leading_digits: Regex::new(r"^\d+\s*").unwrap(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a transcript file.
    ///
    /// Reads the whole file as UTF-8 and delegates to [`parse_str`](Self::parse_str).
    /// Read failures (missing file, permissions, invalid encoding) propagate
    /// as [`VinotecaError::Io`](crate::VinotecaError::Io).
    pub fn parse(&self, path: &Path) -> Result<Vec<WineRecord>> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Parses transcript content already held in memory.
    ///
    /// Never fails: lines that don't form an attachment/rating pair simply
    /// produce no record. Records come back in transcript order.
    pub fn parse_str(&self, content: &str) -> Vec<WineRecord> {
        let lines: Vec<&str> = content.lines().map(str::trim).collect();
        let mut records = Vec::new();

        // Single forward cursor, one line of lookahead. A consumed rating
        // line is re-scanned as an attachment candidate on the next turn
        // (it just fails the attachment test).
        for (i, line) in lines.iter().enumerate() {
            let Some(filename) = self.attachment_filename(line) else {
                continue;
            };
            let Some(next_line) = lines.get(i + 1) else {
                // Attachment on the final line: nothing to pair with.
                continue;
            };

            // Only the text past the last ']' counts; transcripts prefix
            // lines with a bracketed timestamp/sender. Trimmed so the
            // digit strip below is genuinely prefix-anchored.
            let suffix = rating_suffix(next_line).trim();
            let Some(digits) = self.digit_run.find(suffix) else {
                continue;
            };

            let rating = self.clamp_rating(digits.as_str());
            let comment = self
                .leading_digits
                .replace(suffix, "")
                .trim()
                .to_string();

            records.push(WineRecord::new(filename, rating, comment));
        }

        records
    }

    /// Extracts the attachment filename if this line announces a photo.
    ///
    /// The marker content must contain the configured photo extension,
    /// case-insensitively; other attachments (audio, video, documents) are
    /// not wine photos.
    fn attachment_filename(&self, line: &str) -> Option<String> {
        let captures = self.attachment.captures(line)?;
        let filename = captures.get(1)?.as_str();
        let wanted = self.config.photo_extension.to_lowercase();
        if filename.to_lowercase().contains(&wanted) {
            Some(filename.to_string())
        } else {
            None
        }
    }

    /// Converts a digit run to a rating, clamping at the configured maximum.
    ///
    /// A run too long to parse is necessarily above the maximum, so it
    /// clamps the same way.
    fn clamp_rating(&self, digits: &str) -> u8 {
        let max = self.config.max_rating;
        digits
            .parse::<u64>()
            .map(|n| u8::try_from(n.min(u64::from(max))).unwrap_or(max))
            .unwrap_or(max)
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the text after the last `]`, or the whole line if there is none.
fn rating_suffix(line: &str) -> &str {
    line.rsplit(']').next().unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(lines: &[&str]) -> Vec<WineRecord> {
        TranscriptParser::new().parse_str(&lines.join("\n"))
    }

    #[test]
    fn test_basic_pair() {
        let records = parse(&["<attached: photo1.jpg>", "[12:01] 8 Lovely nebbiolo"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].photo_filename(), "photo1.jpg");
        assert_eq!(records[0].rating(), 8);
        assert_eq!(records[0].comment(), "Lovely nebbiolo");
    }

    #[test]
    fn test_rating_clamped_to_ten() {
        let records = parse(&["<attached: a.jpg>", "15 excellent"]);
        assert_eq!(records[0].rating(), 10);
    }

    #[test]
    fn test_huge_digit_run_clamps() {
        let records = parse(&["<attached: a.jpg>", "99999999999999999999999 wow"]);
        assert_eq!(records[0].rating(), 10);
    }

    #[test]
    fn test_no_digits_drops_attachment() {
        let records = parse(&["<attached: a.jpg>", "no rating here"]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_attachment_on_final_line() {
        let records = parse(&["some chatter", "<attached: a.jpg>"]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_suffix_after_last_bracket() {
        let records = parse(&[
            "<attached: a.jpg>",
            "[04/11/23, 12:01:33] [Alice] 7 bright acidity",
        ]);
        assert_eq!(records[0].rating(), 7);
        assert_eq!(records[0].comment(), "bright acidity");
    }

    #[test]
    fn test_no_bracket_uses_whole_line() {
        let records = parse(&["<attached: a.jpg>", "6 rustic barbera"]);
        assert_eq!(records[0].rating(), 6);
        assert_eq!(records[0].comment(), "rustic barbera");
    }

    #[test]
    fn test_comment_keeps_non_leading_digits() {
        // The rating is the first digit run anywhere, but only a *leading*
        // run is stripped from the comment. When the digits come later the
        // comment keeps them unchanged.
        let records = parse(&["<attached: a.jpg>", "[x] Rated this a 7, great wine"]);
        assert_eq!(records[0].rating(), 7);
        assert_eq!(records[0].comment(), "Rated this a 7, great wine");
    }

    #[test]
    fn test_empty_comment() {
        let records = parse(&["<attached: a.jpg>", "[12:01] 9"]);
        assert_eq!(records[0].rating(), 9);
        assert_eq!(records[0].comment(), "");
    }

    #[test]
    fn test_case_insensitive_extension() {
        let records = parse(&["<attached: PHOTO.JPG>", "5 fine"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].photo_filename(), "PHOTO.JPG");
    }

    #[test]
    fn test_non_photo_attachment_skipped() {
        let records = parse(&["<attached: voice-note.opus>", "8 not a wine"]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_consecutive_attachments() {
        // Each attachment independently tries its own next line. The first
        // one faces another attachment line with no digits in it, so only
        // the second pairs up.
        let records = parse(&[
            "<attached: first.jpg>",
            "<attached: second.jpg>",
            "7 shared note",
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].photo_filename(), "second.jpg");
        assert_eq!(records[0].rating(), 7);
        assert_eq!(records[0].comment(), "shared note");
    }

    #[test]
    fn test_consecutive_attachments_with_digits_in_filename() {
        // A following attachment line whose filename carries digits does
        // satisfy the digit-run rule, so the first attachment pairs against
        // it. The digits clamp and the comment keeps the whole marker text.
        let records = parse(&[
            "<attached: a.jpg>",
            "<attached: IMG-123.jpg>",
            "7 the real note",
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].photo_filename(), "a.jpg");
        assert_eq!(records[0].rating(), 10);
        assert_eq!(records[0].comment(), "<attached: IMG-123.jpg>");
        assert_eq!(records[1].photo_filename(), "IMG-123.jpg");
        assert_eq!(records[1].rating(), 7);
    }

    #[test]
    fn test_rating_line_rescanned_not_skipped() {
        // The cursor advances one line at a time, so a rating line is also
        // tested as an attachment candidate. It must not produce a record.
        let records = parse(&[
            "<attached: a.jpg>",
            "8 first",
            "<attached: b.jpg>",
            "6 second",
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rating(), 8);
        assert_eq!(records[1].rating(), 6);
    }

    #[test]
    fn test_records_in_transcript_order() {
        let records = parse(&[
            "<attached: low.jpg>",
            "3 thin",
            "chatter",
            "<attached: high.jpg>",
            "9 superb",
        ]);
        assert_eq!(records[0].photo_filename(), "low.jpg");
        assert_eq!(records[1].photo_filename(), "high.jpg");
    }

    #[test]
    fn test_zero_rating_passes_through() {
        let records = parse(&["<attached: a.jpg>", "0 corked, poured out"]);
        assert_eq!(records[0].rating(), 0);
        assert_eq!(records[0].comment(), "corked, poured out");
    }

    #[test]
    fn test_custom_max_rating() {
        let parser = TranscriptParser::with_config(ParserConfig::new().with_max_rating(5));
        let records = parser.parse_str("<attached: a.jpg>\n7 big syrah");
        assert_eq!(records[0].rating(), 5);
    }

    #[test]
    fn test_empty_transcript() {
        assert!(parse(&[]).is_empty());
        assert!(TranscriptParser::new().parse_str("").is_empty());
    }

    #[test]
    fn test_rating_suffix() {
        assert_eq!(rating_suffix("[a] [b] tail"), " tail");
        assert_eq!(rating_suffix("no brackets"), "no brackets");
        assert_eq!(rating_suffix("ends with]"), "");
    }
}
