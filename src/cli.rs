//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

/// Turn a WhatsApp wine-chat export into a searchable HTML tasting gallery.
///
/// The export directory must contain a `_chat.txt` transcript; photos
/// referenced by the transcript are expected alongside it. The gallery is
/// written to `wine_ratings.html` inside the same directory unless
/// `--output` says otherwise.
#[derive(Parser, Debug, Clone)]
#[command(name = "vinoteca")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    vinoteca ~/Downloads/WhatsApp\\ Chat\\ -\\ Wine\\ Club/
    vinoteca ./export -o ~/public/cellar.html")]
pub struct Args {
    /// Path to the WhatsApp export directory
    pub export_dir: PathBuf,

    /// Path to the output HTML file (default: <EXPORT_DIR>/wine_ratings.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
