use crate::core::csv_reader::{CsvContactReader, ReaderOptions};
use crate::domain::model::{Contact, Gender};
use crate::domain::ports::ContactRepository;
use crate::utils::error::Result;
use crate::utils::validation::require_argument;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Repository over a snapshot that was already parsed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
}

impl InMemoryContactRepository {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn find_all(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    fn find_by_full_name(&self, full_name: &str) -> Result<Option<Contact>> {
        let full_name = require_argument("full_name", full_name)?;

        Ok(self
            .contacts
            .iter()
            .find(|contact| contact.full_name() == full_name)
            .cloned())
    }

    fn find_earliest_date_of_birth(&self) -> Option<NaiveDate> {
        self.contacts.iter().map(Contact::date_of_birth).min()
    }

    fn find_by_date_of_birth(&self, date_of_birth: NaiveDate) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|contact| contact.date_of_birth() == date_of_birth)
            .cloned()
            .collect()
    }

    fn count_by_gender(&self, gender: Gender) -> usize {
        self.contacts
            .iter()
            .filter(|contact| contact.gender() == gender)
            .count()
    }
}

/// Repository backed by an address book file.
///
/// The file is read once in [`CsvContactRepository::open`]; lookups never go
/// back to disk.
#[derive(Debug, Clone)]
pub struct CsvContactRepository {
    path: PathBuf,
    snapshot: InMemoryContactRepository,
}

impl CsvContactRepository {
    pub fn open<P: AsRef<Path>>(path: P, options: ReaderOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contacts = CsvContactReader::new(options).read_file(&path)?;
        tracing::debug!("Loaded {} contacts from {}", contacts.len(), path.display());

        Ok(Self {
            path,
            snapshot: InMemoryContactRepository::new(contacts),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactRepository for CsvContactRepository {
    fn find_all(&self) -> Vec<Contact> {
        self.snapshot.find_all()
    }

    fn find_by_full_name(&self, full_name: &str) -> Result<Option<Contact>> {
        self.snapshot.find_by_full_name(full_name)
    }

    fn find_earliest_date_of_birth(&self) -> Option<NaiveDate> {
        self.snapshot.find_earliest_date_of_birth()
    }

    fn find_by_date_of_birth(&self, date_of_birth: NaiveDate) -> Vec<Contact> {
        self.snapshot.find_by_date_of_birth(date_of_birth)
    }

    fn count_by_gender(&self, gender: Gender) -> usize {
        self.snapshot.count_by_gender(gender)
    }
}
