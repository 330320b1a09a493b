use std::path::PathBuf;

use clap::{Parser, Subcommand};

use unicoef::ContentType;

#[derive(Parser)]
#[command(
    name = "unicoef",
    about = "Unity Coefficient analyzer: lexicon-based polarity scoring for text",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze text and print its unity report
    Analyze {
        /// Text to analyze; reads stdin when omitted and --file is not given
        text: Option<String>,

        /// Read the text to analyze from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Emit the report as JSON instead of the human-readable form
        #[arg(long)]
        json: bool,

        /// Skip context detection and report the raw lexicon reframing
        #[arg(long)]
        no_context: bool,

        /// Context hint: declared content type (fiction, horror, comedy,
        /// satire, technical, business, personal, academic, spiritual,
        /// artistic, journalistic)
        #[arg(long, value_name = "TYPE")]
        content_type: Option<ContentType>,

        /// Context hint: declared genre (e.g. "horror", "comedy")
        #[arg(long, value_name = "GENRE")]
        genre: Option<String>,

        /// Context hint: the content carries creative license
        #[arg(long)]
        creative_license: bool,
    },

    /// List the built-in marker terms
    Markers {
        /// Only list one polarity (separation or unity)
        #[arg(long, value_name = "POLARITY")]
        polarity: Option<PolarityFilter>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PolarityFilter {
    Separation,
    Unity,
}
