//! Builds a ready [`AddressBookService`] from a source identifier.
//!
//! Callers (the binary, acceptance tests) go through [`open_address_book`]
//! or [`open_from_config`] instead of wiring reader, repository and service
//! by hand.

use crate::core::csv_reader::ReaderOptions;
use crate::core::repository::CsvContactRepository;
use crate::core::service::AddressBookService;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AddressBookError, Result};
use crate::utils::validation::require_argument;
use std::path::{Path, PathBuf};

pub type CsvAddressBook = AddressBookService<CsvContactRepository>;

/// Turns a source identifier into a readable file path.
///
/// Relative identifiers are tried against `data_dir` first, then as given.
pub fn resolve_source(source: &str, data_dir: Option<&Path>) -> Result<PathBuf> {
    let source = require_argument("source", source)?;
    let requested = Path::new(source);

    let mut candidates = Vec::with_capacity(2);
    if let Some(dir) = data_dir.filter(|_| requested.is_relative()) {
        candidates.push(dir.join(requested));
    }
    candidates.push(requested.to_path_buf());

    candidates
        .into_iter()
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| AddressBookError::SourceNotFound {
            location: source.to_string(),
        })
}

pub fn open_address_book(
    source: &str,
    data_dir: Option<&Path>,
    options: ReaderOptions,
) -> Result<CsvAddressBook> {
    let path = resolve_source(source, data_dir)?;
    tracing::debug!("Resolved address book '{}' to {}", source, path.display());

    let repository = CsvContactRepository::open(&path, options)?;
    Ok(AddressBookService::new(repository))
}

pub fn open_from_config<C: ConfigProvider>(config: &C) -> Result<CsvAddressBook> {
    open_address_book(
        config.address_book_path(),
        config.data_dir().map(Path::new),
        ReaderOptions::with_century_pivot(config.century_pivot()),
    )
}
