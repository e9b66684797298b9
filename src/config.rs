//! Configuration management for sort operations

use crate::error::{SortError, SortResult};

/// Main configuration structure for sort operations
///
/// The ordering modes are independent flags rather than a single enum: any
/// combination may be set and the comparator consults them in a fixed order
/// (month, human, numeric, then plain text).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortConfig {
    /// Field to sort by (1-based); 0 means the whole line
    pub key: usize,
    /// Field separator character; `None` splits on runs of blanks
    pub field_separator: Option<char>,
    /// Compare according to leading numeric value
    pub numeric: bool,
    /// Reverse the result of comparisons
    pub reverse: bool,
    /// Suppress adjacent identical output lines
    pub unique: bool,
    /// Compare by three-letter month abbreviation
    pub month: bool,
    /// Compare human readable sizes (2K, 1G)
    pub human_numeric: bool,
    /// Ignore leading blanks in the key
    pub ignore_leading_blanks: bool,
    /// Check if input is already sorted
    pub check: bool,
    /// Files to read from (if not specified, use stdin)
    pub input_files: Vec<String>,
    /// Output file path
    pub output_file: Option<String>,
    /// Debug mode (for troubleshooting)
    pub debug: bool,
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key field (0 = whole line)
    pub fn with_key(mut self, key: usize) -> Self {
        self.key = key;
        self
    }

    /// Set field separator
    pub fn with_field_separator(mut self, separator: Option<char>) -> Self {
        self.field_separator = separator;
        self
    }

    pub fn with_numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    /// Enable reverse sorting
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Enable unique output
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn with_month(mut self, month: bool) -> Self {
        self.month = month;
        self
    }

    pub fn with_human_numeric(mut self, human_numeric: bool) -> Self {
        self.human_numeric = human_numeric;
        self
    }

    pub fn with_ignore_leading_blanks(mut self, ignore: bool) -> Self {
        self.ignore_leading_blanks = ignore;
        self
    }

    /// Enable check mode
    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Set input files
    pub fn with_input_files(mut self, files: Vec<String>) -> Self {
        self.input_files = files;
        self
    }

    /// Set output file
    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the key field from a GNU style KEYDEF such as `2`, `2,3` or `2.1`
    ///
    /// Only the starting field is honoured; per-key option letters are
    /// rejected because only a single global key is supported.
    pub fn set_key_from_string(&mut self, keydef: &str) -> SortResult<()> {
        let digits_end = keydef
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(keydef.len());
        let (field, rest) = keydef.split_at(digits_end);

        if field.is_empty() || !(rest.is_empty() || rest.starts_with([',', '.'])) {
            return Err(SortError::invalid_key_spec(keydef));
        }

        self.key = field
            .parse::<usize>()
            .map_err(|_| SortError::invalid_key_spec(keydef))?;
        Ok(())
    }

    /// Set the field separator from its command line form
    pub fn set_separator_from_string(&mut self, sep: &str) -> SortResult<()> {
        let mut chars = sep.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                self.field_separator = Some(c);
                Ok(())
            }
            _ => Err(SortError::invalid_field_separator(sep)),
        }
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.field_separator == Some('\0') {
            return Err(SortError::invalid_field_separator(
                "null character separator is not supported",
            ));
        }

        Ok(())
    }

    /// Whether field keys are in use
    pub fn uses_field_key(&self) -> bool {
        self.key > 0
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        self.input_files.is_empty() || (self.input_files.len() == 1 && self.input_files[0] == "-")
    }

    /// Name used for the input in disorder reports
    pub fn source_name(&self) -> &str {
        match self.input_files.as_slice() {
            [single] => single.as_str(),
            _ => "-",
        }
    }

    /// Names of the active comparison modes, in the order they are consulted
    pub fn mode_chain(&self) -> Vec<&'static str> {
        let mut chain = Vec::new();
        if self.month {
            chain.push("month");
        }
        if self.human_numeric {
            chain.push("human-numeric");
        }
        if self.numeric {
            chain.push("numeric");
        }
        chain.push("text");
        chain
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    pub fn key(mut self, key: usize) -> Self {
        self.config.key = key;
        self
    }

    /// Set field separator
    pub fn field_separator(mut self, separator: char) -> Self {
        self.config.field_separator = Some(separator);
        self
    }

    pub fn numeric(mut self) -> Self {
        self.config.numeric = true;
        self
    }

    /// Enable reverse sorting
    pub fn reverse(mut self) -> Self {
        self.config.reverse = true;
        self
    }

    /// Enable unique output
    pub fn unique(mut self) -> Self {
        self.config.unique = true;
        self
    }

    pub fn month(mut self) -> Self {
        self.config.month = true;
        self
    }

    pub fn human_numeric(mut self) -> Self {
        self.config.human_numeric = true;
        self
    }

    pub fn ignore_leading_blanks(mut self) -> Self {
        self.config.ignore_leading_blanks = true;
        self
    }

    /// Enable check mode
    pub fn check(mut self) -> Self {
        self.config.check = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SortConfig::default();
        assert_eq!(config.key, 0);
        assert_eq!(config.field_separator, None);
        assert!(!config.reverse);
        assert!(!config.unique);
        assert!(!config.uses_field_key());
    }

    #[test]
    fn test_config_builder() {
        let config = SortConfigBuilder::new()
            .numeric()
            .reverse()
            .unique()
            .key(2)
            .field_separator(':')
            .build()
            .expect("Failed to build test config");

        assert!(config.numeric);
        assert!(config.reverse);
        assert!(config.unique);
        assert_eq!(config.key, 2);
        assert_eq!(config.field_separator, Some(':'));
    }

    #[test]
    fn test_key_from_string() {
        let mut config = SortConfig::default();
        config.set_key_from_string("3").expect("plain field");
        assert_eq!(config.key, 3);

        config.set_key_from_string("2,4").expect("field range");
        assert_eq!(config.key, 2);

        config.set_key_from_string("1.3").expect("char offset");
        assert_eq!(config.key, 1);

        assert!(config.set_key_from_string("2nr").is_err());
        assert!(config.set_key_from_string("").is_err());
        assert!(config.set_key_from_string("x").is_err());
    }

    #[test]
    fn test_separator_from_string() {
        let mut config = SortConfig::default();
        config.set_separator_from_string(":").expect("single char");
        assert_eq!(config.field_separator, Some(':'));

        config.set_separator_from_string("\t").expect("tab");
        assert_eq!(config.field_separator, Some('\t'));

        assert!(config.set_separator_from_string("ab").is_err());
        assert!(config.set_separator_from_string("").is_err());
    }

    #[test]
    fn test_validate_rejects_nul_separator() {
        let config = SortConfig::new().with_field_separator(Some('\0'));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mode_chain_order() {
        let config = SortConfig::new()
            .with_numeric(true)
            .with_month(true)
            .with_human_numeric(true);
        assert_eq!(
            config.mode_chain(),
            vec!["month", "human-numeric", "numeric", "text"]
        );
        assert_eq!(SortConfig::new().mode_chain(), vec!["text"]);
    }

    #[test]
    fn test_reading_from_stdin() {
        let config = SortConfig::default();
        assert!(config.reading_from_stdin());
        assert_eq!(config.source_name(), "-");

        let config = SortConfig::default().with_input_files(vec!["-".to_string()]);
        assert!(config.reading_from_stdin());

        let config = SortConfig::default().with_input_files(vec!["file.txt".to_string()]);
        assert!(!config.reading_from_stdin());
        assert_eq!(config.source_name(), "file.txt");

        let config = SortConfig::default()
            .with_input_files(vec!["a.txt".to_string(), "b.txt".to_string()]);
        assert_eq!(config.source_name(), "-");
    }
}
