//! Strict reader for `full_name,gender,dd/MM/yy` address book files.
//!
//! Each record runs through the same ordered checks (three columns with a
//! non-blank name, then gender, then date of birth) and the first failure
//! stops the whole load.

use crate::domain::model::{Contact, Gender};
use crate::utils::error::{AddressBookError, ParseFailure, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use regex::Regex;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::LazyLock;

pub const DATE_OF_BIRTH_FORMAT: &str = "dd/MM/yy";
pub const DEFAULT_CENTURY_PIVOT: u8 = 50;

const FULL_NAME_COLUMN: usize = 0;
const GENDER_COLUMN: usize = 1;
const DATE_OF_BIRTH_COLUMN: usize = 2;
const EXPECTED_COLUMNS: usize = 3;

static DATE_OF_BIRTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2})$").expect("date of birth pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Two-digit years below the pivot land in the 2000s, the rest in the 1900s.
    pub century_pivot: u8,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            century_pivot: DEFAULT_CENTURY_PIVOT,
        }
    }
}

impl ReaderOptions {
    pub fn with_century_pivot(century_pivot: u8) -> Self {
        Self { century_pivot }
    }

    pub fn expand_year(&self, two_digit_year: u8) -> i32 {
        let year = i32::from(two_digit_year);
        if two_digit_year < self.century_pivot {
            2000 + year
        } else {
            1900 + year
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CsvContactReader {
    options: ReaderOptions,
}

impl CsvContactReader {
    pub fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// Reads an address book file.
    ///
    /// A missing file is reported as `SourceNotFound`; other open failures
    /// keep their IO error.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Contact>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AddressBookError::SourceNotFound {
                location: path.display().to_string(),
            },
            _ => AddressBookError::IoError(err),
        })?;
        self.read(file)
    }

    /// Parses every record from `source`, in order.
    ///
    /// Failures cite the 1-based record number: blank lines hold no record
    /// and a quoted field spanning lines still counts once.
    pub fn read<R: Read>(&self, source: R) -> Result<Vec<Contact>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source);

        let mut contacts = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            contacts.push(self.to_contact(index as u64 + 1, &record)?);
        }

        Ok(contacts)
    }

    fn to_contact(&self, line: u64, record: &StringRecord) -> std::result::Result<Contact, ParseFailure> {
        check_required_fields(line, record)?;
        let gender = parse_gender(line, &record[GENDER_COLUMN])?;
        let date_of_birth = self.parse_date_of_birth(line, &record[DATE_OF_BIRTH_COLUMN])?;

        Ok(Contact::new(&record[FULL_NAME_COLUMN], gender, date_of_birth))
    }

    fn parse_date_of_birth(&self, line: u64, raw: &str) -> std::result::Result<NaiveDate, ParseFailure> {
        let trimmed = raw.trim();
        let invalid = || ParseFailure::InvalidDate {
            line,
            value: trimmed.to_string(),
            format: DATE_OF_BIRTH_FORMAT,
        };

        let captures = DATE_OF_BIRTH_PATTERN.captures(trimmed).ok_or_else(invalid)?;
        // the pattern only admits short digit runs, so these cannot overflow
        let day: u32 = captures[1].parse().map_err(|_| invalid())?;
        let month: u32 = captures[2].parse().map_err(|_| invalid())?;
        let two_digit_year: u8 = captures[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(self.options.expand_year(two_digit_year), month, day)
            .ok_or_else(invalid)
    }
}

fn check_required_fields(line: u64, record: &StringRecord) -> std::result::Result<(), ParseFailure> {
    if record.len() != EXPECTED_COLUMNS || record[FULL_NAME_COLUMN].trim().is_empty() {
        return Err(ParseFailure::MalformedRecord {
            line,
            message: "There are missing fields".to_string(),
        });
    }
    Ok(())
}

fn parse_gender(line: u64, raw: &str) -> std::result::Result<Gender, ParseFailure> {
    raw.parse::<Gender>()
        .map_err(|unknown| ParseFailure::InvalidGender {
            line,
            value: unknown.0,
        })
}

/// Parses `source` with default options.
pub fn read_contacts<R: Read>(source: R) -> Result<Vec<Contact>> {
    CsvContactReader::default().read(source)
}
