use crate::config::toml_config::TomlConfig;
use crate::config::{Overrides, Settings};
use crate::domain::model::Gender;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "address-book")]
#[command(about = "Answer simple questions about the people in an address book")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Address book file (relative paths are tried under --data-dir first)")]
    pub address_book: Option<String>,

    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Two-digit years below this value are read as 20yy")]
    pub century_pivot: Option<u8>,

    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print answers as JSON")]
    pub json: bool,

    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Count the contacts of one gender
    CountGender {
        #[arg(value_enum)]
        gender: Gender,
    },
    /// Show everyone sharing the earliest date of birth
    Oldest,
    /// Days between two people's dates of birth
    AgeDiff { first: String, second: String },
    /// List every contact in file order
    List,
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            address_book_path: self.address_book.clone(),
            data_dir: self.data_dir.clone(),
            century_pivot: self.century_pivot,
            verbose: self.verbose,
            log_format: self.log_format,
        }
    }

    /// Loads the `--config` file when given and merges it with the flags.
    pub fn settings(&self) -> Result<Settings> {
        let file = self.config.as_ref().map(TomlConfig::from_file).transpose()?;
        if let Some(file) = &file {
            file.validate()?;
        }
        Settings::resolve(file.as_ref(), self.overrides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_age_diff_with_global_flags() {
        let cli = CliConfig::try_parse_from([
            "address-book",
            "age-diff",
            "Bill McKnight",
            "Paul Robinson",
            "--address-book",
            "people.csv",
            "--century-pivot",
            "30",
        ])
        .unwrap();

        match &cli.command {
            Command::AgeDiff { first, second } => {
                assert_eq!(first, "Bill McKnight");
                assert_eq!(second, "Paul Robinson");
            }
            other => panic!("unexpected command {:?}", other),
        }

        let settings = cli.settings().unwrap();
        assert_eq!(settings.address_book_path, "people.csv");
        assert_eq!(settings.century_pivot, 30);
    }

    #[test]
    fn test_settings_rejects_invalid_config_file() {
        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut temp_file, b"[logging]\nformat = \"xml\"\n").unwrap();

        let cli = CliConfig::try_parse_from([
            "address-book".as_ref(),
            "list".as_ref(),
            "--config".as_ref(),
            temp_file.path().as_os_str(),
        ])
        .unwrap();

        let err = cli.settings().unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::AddressBookError::InvalidConfigValueError { ref field, .. } if field == "logging.format"
        ));
    }

    #[test]
    fn test_parse_gender_value() {
        let cli = CliConfig::try_parse_from(["address-book", "count-gender", "female"]).unwrap();
        assert!(matches!(cli.command, Command::CountGender { gender: Gender::Female }));

        assert!(CliConfig::try_parse_from(["address-book", "count-gender", "unknown"]).is_err());
    }
}
