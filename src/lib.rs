pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::{toml_config::TomlConfig, Settings};

pub use core::csv_reader::{read_contacts, CsvContactReader, ReaderOptions};
pub use core::factory::{open_address_book, open_from_config, CsvAddressBook};
pub use core::repository::{CsvContactRepository, InMemoryContactRepository};
pub use core::service::AddressBookService;
pub use domain::model::{Contact, Gender};
pub use domain::ports::{ConfigProvider, ContactRepository};
pub use utils::error::{AddressBookError, ParseFailure, Result};
