//! Configuration management for sort operations

use crate::error::{SortError, SortResult};
use crate::key::KeySpec;

/// Default date pattern for `date` keys (ISO calendar date).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Main configuration structure for one sort run
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Input file path (`None` or `-` reads stdin)
    pub input: Option<String>,
    /// Output file path (`None` writes stdout)
    pub output: Option<String>,
    /// Sort keys by column name, primary key first
    pub keys: Vec<KeySpec>,
    /// Date pattern shared by every date-typed key
    pub date_format: String,
    /// Field delimiter byte
    pub delimiter: u8,
    /// Output column projection by name (`None` keeps every column)
    pub columns: Option<Vec<String>>,
    /// Debug mode (diagnostics on stderr)
    pub debug: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            keys: Vec::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            delimiter: b',',
            columns: None,
            debug: false,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input file
    pub fn with_input(mut self, input: Option<String>) -> Self {
        self.input = input;
        self
    }

    /// Set the output file
    pub fn with_output(mut self, output: Option<String>) -> Self {
        self.output = output;
        self
    }

    /// Add a sort key
    pub fn add_key(mut self, key: KeySpec) -> Self {
        self.keys.push(key);
        self
    }

    /// Set the date pattern for date-typed keys
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.keys.is_empty() {
            return Err(SortError::EmptyKeySpec);
        }

        if let Some(columns) = &self.columns {
            if columns.is_empty() {
                return Err(SortError::EmptyProjection);
            }
        }

        Ok(())
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        match &self.input {
            None => true,
            Some(path) => path == "-",
        }
    }

    /// Check if writing to stdout
    pub fn writing_to_stdout(&self) -> bool {
        self.output.is_none()
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

    /// Set the input file
    pub fn input(mut self, path: impl Into<String>) -> Self {
        self.config.input = Some(path.into());
        self
    }

    /// Set the output file
    pub fn output(mut self, path: impl Into<String>) -> Self {
        self.config.output = Some(path.into());
        self
    }

    /// Add one sort key
    pub fn key(mut self, key: KeySpec) -> Self {
        self.config.keys.push(key);
        self
    }

    /// Add a list of sort keys, primary key first
    pub fn keys(mut self, keys: Vec<KeySpec>) -> Self {
        self.config.keys.extend(keys);
        self
    }

    /// Set the date pattern for date-typed keys
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.config.date_format = format.into();
        self
    }

    /// Set the field delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Restrict and reorder the output columns
    pub fn columns(mut self, names: Vec<String>) -> Self {
        self.config.columns = Some(names);
        self
    }

    /// Enable debug diagnostics
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
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
    use crate::key::SortType;

    #[test]
    fn test_default_config() {
        let config = SortConfig::default();
        assert!(config.input.is_none());
        assert!(config.keys.is_empty());
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert!(!config.debug);
    }

    #[test]
    fn test_config_builder() {
        let config = SortConfigBuilder::new()
            .input("data.csv")
            .key(KeySpec::new("created", SortType::Date))
            .key(KeySpec::new("item", SortType::Natural))
            .delimiter(b';')
            .date_format("%d/%m/%Y")
            .build()
            .expect("Failed to build test config");

        assert_eq!(config.keys.len(), 2);
        assert_eq!(config.keys[0].column, "created");
        assert_eq!(config.delimiter, b';');
        assert_eq!(config.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_validate_requires_keys() {
        assert!(matches!(
            SortConfigBuilder::new().build(),
            Err(SortError::EmptyKeySpec)
        ));
    }

    #[test]
    fn test_with_setters() {
        let config = SortConfig::new()
            .with_input(Some("in.csv".to_string()))
            .with_output(Some("out.csv".to_string()))
            .add_key(KeySpec::new("id", SortType::Number))
            .with_delimiter(b'\t');
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter, b'\t');
    }

    #[test]
    fn test_stdin_stdout_detection() {
        let config = SortConfig::default();
        assert!(config.reading_from_stdin());
        assert!(config.writing_to_stdout());

        let config = SortConfig::default().with_input(Some("-".to_string()));
        assert!(config.reading_from_stdin());

        let config = SortConfig::default()
            .with_input(Some("file.csv".to_string()))
            .with_output(Some("out.csv".to_string()));
        assert!(!config.reading_from_stdin());
        assert!(!config.writing_to_stdout());
    }
}
