#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::csv_reader::DEFAULT_CENTURY_PIVOT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_ADDRESS_BOOK: &str = "AddressBook.csv";

/// Effective settings after merging flags, the TOML file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub address_book_path: String,
    pub data_dir: Option<String>,
    pub century_pivot: u8,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            address_book_path: DEFAULT_ADDRESS_BOOK.to_string(),
            data_dir: None,
            century_pivot: DEFAULT_CENTURY_PIVOT,
            verbose: false,
            log_format: LogFormat::default(),
        }
    }
}

/// Values given explicitly on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub address_book_path: Option<String>,
    pub data_dir: Option<String>,
    pub century_pivot: Option<u8>,
    pub verbose: bool,
    pub log_format: Option<LogFormat>,
}

impl Settings {
    /// Flags win over the file, the file wins over defaults.
    pub fn resolve(file: Option<&TomlConfig>, overrides: Overrides) -> Result<Self> {
        let defaults = Settings::default();
        let file_format = match file {
            Some(config) => config.log_format()?,
            None => None,
        };

        let settings = Settings {
            address_book_path: overrides
                .address_book_path
                .or_else(|| file.and_then(|c| c.source_path().map(str::to_string)))
                .unwrap_or(defaults.address_book_path),
            data_dir: overrides
                .data_dir
                .or_else(|| file.and_then(|c| c.data_dir().map(str::to_string))),
            century_pivot: overrides
                .century_pivot
                .or_else(|| file.and_then(TomlConfig::century_pivot))
                .unwrap_or(defaults.century_pivot),
            verbose: overrides.verbose || file.map(TomlConfig::verbose).unwrap_or(false),
            log_format: overrides.log_format.or(file_format).unwrap_or_default(),
        };

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("address_book_path", &self.address_book_path)?;
        validate_path("address_book_path", &self.address_book_path)?;
        if let Some(dir) = &self.data_dir {
            validate_path("data_dir", dir)?;
        }
        validate_range("century_pivot", self.century_pivot, 0, 100)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn address_book_path(&self) -> &str {
        &self.address_book_path
    }

    fn data_dir(&self) -> Option<&str> {
        self.data_dir.as_deref()
    }

    fn century_pivot(&self) -> u8 {
        self.century_pivot
    }
}
