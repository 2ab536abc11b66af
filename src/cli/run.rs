//! Hashing run orchestration.
//!
//! Pipeline phases:
//! - **Load** - read the word and record files into memory
//! - **Parse** - build the three typed collections
//! - **Hash** - one sequential pass under the selected algorithm
//! - **Export** - serialize the digest maps and write the output file

use crate::cli::Cli;
use crate::hash::HashAlgorithm;
use crate::input::{read_lines, read_rows};
use crate::record::{parse_geo_points, parse_words, parse_zip_codes};
use crate::tracker::HashTracker;
use crate::utils::plural_count;
use crate::{debug, log};
use anyhow::{Context, Result};
use std::fs;

/// Execute one hashing run end to end.
pub fn run_hash(cli: &Cli, algorithm: HashAlgorithm) -> Result<()> {
    let lines = read_lines(&cli.words)?;
    let words = parse_words(&lines);

    let rows = read_rows(&cli.records)?;
    // First row is the column header, not a record
    let records = rows.split_first().map_or(&[][..], |(_, rest)| rest);
    let geos = parse_geo_points(records)
        .with_context(|| format!("invalid record file `{}`", cli.records.display()))?;
    let zips = parse_zip_codes(records)
        .with_context(|| format!("invalid record file `{}`", cli.records.display()))?;

    debug!("hash"; "loaded {} geos, {} zips, {} words", geos.len(), zips.len(), words.len());
    log!("hash"; "hashing with {}", algorithm.name());

    let tracker = HashTracker::new(geos, zips, words).hash(algorithm)?;
    let buffer = tracker.export().context("failed to export hash results")?;

    fs::write(&cli.output, &buffer)
        .with_context(|| format!("unable to write `{}`", cli.output.display()))?;

    let (geo_count, zip_count, word_count) = tracker.counts();
    log!(
        "export";
        "wrote {}, {} and {} to `{}`",
        plural_count(geo_count, "geo digest"),
        plural_count(zip_count, "zip digest"),
        plural_count(word_count, "word digest"),
        cli.output.display()
    );

    Ok(())
}
