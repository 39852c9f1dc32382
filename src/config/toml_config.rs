use crate::utils::error::{AddressBookError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_path, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub parser: Option<ParserConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: Option<String>,
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    pub century_pivot: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AddressBookError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AddressBookError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ADDRESS_BOOK_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AddressBookError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn source_path(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.path.as_deref())
    }

    pub fn data_dir(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.data_dir.as_deref())
    }

    pub fn century_pivot(&self) -> Option<u8> {
        self.parser.as_ref().and_then(|p| p.century_pivot)
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn log_format(&self) -> Result<Option<LogFormat>> {
        match self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map(Some)
                .map_err(|reason| AddressBookError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: raw.to_string(),
                    reason,
                }),
            None => Ok(None),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.source_path() {
            validate_path("source.path", path)?;
        }
        if let Some(dir) = self.data_dir() {
            validate_path("source.data_dir", dir)?;
        }
        if let Some(pivot) = self.century_pivot() {
            validate_range("parser.century_pivot", pivot, 0, 100)?;
        }
        self.log_format()?;
        Ok(())
    }
}
