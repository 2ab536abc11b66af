//! Input file readers: newline-delimited word lists and comma-separated
//! record files. Parsing into typed records lives in `crate::record`.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a newline-delimited file into its lines. Blank lines are kept:
/// the word model treats them as empty words.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("unable to read `{}`", path.display()))?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Read a comma-separated file into rows of whitespace-trimmed fields.
/// Blank lines carry no record and are skipped. The header row is kept,
/// callers drop it before parsing records.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let lines = read_lines(path)?;
    Ok(lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split(',')
                .map(|field| field.trim().to_owned())
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_lines_preserves_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "cat\n\ndog\n").unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["cat", "", "dog"]);
    }

    #[test]
    fn read_rows_trims_fields_and_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zipcodes.txt");
        fs::write(&path, "zip,lat,lon\n90210, 34.0901 ,-118.4065\n\n").unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["zip", "lat", "lon"],
                vec!["90210", "34.0901", "-118.4065"],
            ]
        );
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = read_lines(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/words.txt"));
    }
}
