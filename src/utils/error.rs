use thiserror::Error;

/// A record that could not be turned into a contact.
///
/// Every variant carries the 1-based line number of the offending record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("Line {line} is invalid. {message}")]
    MalformedRecord { line: u64, message: String },

    #[error("Line {line} is invalid. Gender must be one of \"Male\" or \"Female\". value=\"{value}\"")]
    InvalidGender { line: u64, value: String },

    #[error("Line {line} is invalid. Date of birth must have the format \"{format}\". value=\"{value}\"")]
    InvalidDate {
        line: u64,
        value: String,
        format: &'static str,
    },
}

impl ParseFailure {
    pub fn line(&self) -> u64 {
        match self {
            Self::MalformedRecord { line, .. }
            | Self::InvalidGender { line, .. }
            | Self::InvalidDate { line, .. } => *line,
        }
    }
}

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("Address book file does not exist: {location}")]
    SourceNotFound { location: String },

    #[error(transparent)]
    Parse(#[from] ParseFailure),

    #[error("{argument} cannot be empty")]
    InvalidArgument { argument: &'static str },

    #[error("{argument} not found. full_name=\"{full_name}\"")]
    PersonNotFound {
        argument: &'static str,
        full_name: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Parse,
    Argument,
    Lookup,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AddressBookError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceNotFound { .. } => ErrorCategory::Source,
            Self::Parse(_) | Self::CsvError(_) => ErrorCategory::Parse,
            Self::InvalidArgument { .. } => ErrorCategory::Argument,
            Self::PersonNotFound { .. } => ErrorCategory::Lookup,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Source | ErrorCategory::Parse | ErrorCategory::Argument => {
                ErrorSeverity::High
            }
            ErrorCategory::Config | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message meant for a terminal, without internal type names.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::SourceNotFound { location } => {
                format!("Could not find the address book at '{}'", location)
            }
            Self::Parse(failure) => format!("The address book could not be loaded. {}", failure),
            Self::PersonNotFound { full_name, .. } => {
                format!("Nobody called '{}' is in the address book", full_name)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Source => "Check the --address-book path and --data-dir",
            ErrorCategory::Parse => {
                "Fix the reported line: each record needs name, Male/Female and a dd/MM/yy date"
            }
            ErrorCategory::Argument => "Pass a non-empty value for every required argument",
            ErrorCategory::Lookup => "Names must match the address book exactly, including case",
            ErrorCategory::Config => "Review the configuration file and command line flags",
            ErrorCategory::System => "Check file permissions and encoding (UTF-8 expected)",
        }
    }
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
