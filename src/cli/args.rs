//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Dataset hashing CLI: computes a digest for every geopoint, zipcode and
/// word, then exports one JSON document mapping values to digests.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Hash algorithm applied to every record (sha256, sha1, md5, siphash)
    #[arg(long, value_name = "NAME")]
    pub hash: String,

    /// Output path for the exported JSON document
    #[arg(short, long, default_value = "output.json", value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Newline-delimited word list (blank lines count as empty words)
    #[arg(long, default_value = "data/words.txt", value_hint = clap::ValueHint::FilePath)]
    pub words: PathBuf,

    /// Comma-separated zip/lat/lon record file with a header row
    #[arg(long, default_value = "data/zipcodes.txt", value_hint = clap::ValueHint::FilePath)]
    pub records: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_argument_is_required() {
        assert!(Cli::try_parse_from(["digestmap"]).is_err());
        assert!(Cli::try_parse_from(["digestmap", "--hash", "sha256"]).is_ok());
    }

    #[test]
    fn paths_default_when_omitted() {
        let cli = Cli::try_parse_from(["digestmap", "--hash", "md5"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("output.json"));
        assert_eq!(cli.words, PathBuf::from("data/words.txt"));
        assert_eq!(cli.records, PathBuf::from("data/zipcodes.txt"));
        assert!(!cli.verbose);
    }
}
