//! GNU sort compatible line sorting in Rust
//!
//! This crate sorts lines of text by the whole line or by a single field,
//! with numeric, human-readable size and month-name orderings, leading-blank
//! trimming, reverse order, unique output and a check-only mode.

#![warn(clippy::all)]

pub mod error;
pub mod config;

// Comparison building blocks
pub mod key;
pub mod numeric;
pub mod month;
pub mod compare;

pub mod engine;
pub mod input;
pub mod output;

// Re-export commonly used types
pub use config::{SortConfig, SortConfigBuilder};
pub use engine::{check_sorted, sort_lines};
pub use error::{SortError, SortResult};

/// Exit codes matching GNU sort
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Main sort function: read the configured inputs, then either verify their
/// order or write them sorted
pub fn sort(config: &SortConfig) -> SortResult<i32> {
    config.validate()?;

    let lines = input::read_input(config)?;

    if config.check {
        return check_sorted(&lines, config)
            .map(|()| EXIT_SUCCESS)
            .map_err(|line| SortError::not_sorted(config.source_name(), line));
    }

    let sorted = sort_lines(&lines, config);
    let mut output = output::open_output(config)?;
    output::write_lines(&mut output, &sorted)?;

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    fn file_config(temp_dir: &TempDir, contents: &str) -> io::Result<SortConfig> {
        let input = temp_dir.path().join("input.txt");
        let output = temp_dir.path().join("output.txt");
        fs::write(&input, contents)?;
        Ok(SortConfig::new()
            .with_input_files(vec![input.to_string_lossy().to_string()])
            .with_output_file(Some(output.to_string_lossy().to_string())))
    }

    #[test]
    fn test_sort_file() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let config = file_config(&temp_dir, "zebra\napple\nbanana\ncherry\n")?;

        assert_eq!(sort(&config)?, EXIT_SUCCESS);

        let output = fs::read_to_string(temp_dir.path().join("output.txt"))?;
        assert_eq!(output, "apple\nbanana\ncherry\nzebra\n");
        Ok(())
    }

    #[test]
    fn test_numeric_unique_sort_file() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let config = file_config(&temp_dir, "100\n20\n3\n20\n1000")?
            .with_numeric(true)
            .with_unique(true);

        sort(&config)?;

        let output = fs::read_to_string(temp_dir.path().join("output.txt"))?;
        assert_eq!(output, "3\n20\n100\n1000\n");
        Ok(())
    }

    #[test]
    fn test_sort_in_place() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let input = temp_dir.path().join("data.txt");
        fs::write(&input, "b\nc\na\n")?;
        let name = input.to_string_lossy().to_string();
        let config = SortConfig::new()
            .with_input_files(vec![name.clone()])
            .with_output_file(Some(name));

        sort(&config)?;

        assert_eq!(fs::read_to_string(&input)?, "a\nb\nc\n");
        Ok(())
    }

    #[test]
    fn test_check_reports_disorder() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let config = file_config(&temp_dir, "Jan\nMar\nFeb\n")?
            .with_month(true)
            .with_check(true);

        match sort(&config) {
            Err(SortError::NotSorted { source_name, line }) => {
                assert!(source_name.ends_with("input.txt"));
                assert_eq!(line, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        // Check mode never writes output
        assert!(!temp_dir.path().join("output.txt").exists());
        Ok(())
    }

    #[test]
    fn test_check_sorted_file() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let config = file_config(&temp_dir, "1K\n1M\n1G\n")?
            .with_human_numeric(true)
            .with_check(true);

        assert_eq!(sort(&config)?, EXIT_SUCCESS);
        Ok(())
    }

    #[test]
    fn test_missing_input_file() {
        let config = SortConfig::new().with_input_files(vec!["/nonexistent/input".to_string()]);
        let err = sort(&config).expect_err("missing file must fail");
        assert_eq!(err.exit_code(), SORT_FAILURE);
    }
}
