use crate::domain::model::{Contact, Gender};
use crate::domain::ports::ContactRepository;
use crate::utils::error::{AddressBookError, Result};

/// Business queries over any [`ContactRepository`].
pub struct AddressBookService<R: ContactRepository> {
    repository: R,
}

impl<R: ContactRepository> AddressBookService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn find_all(&self) -> Vec<Contact> {
        self.repository.find_all()
    }

    pub fn count_by_gender(&self, gender: Gender) -> usize {
        self.repository.count_by_gender(gender)
    }

    pub fn count_number_of_males(&self) -> usize {
        self.count_by_gender(Gender::Male)
    }

    /// Everyone sharing the earliest date of birth, in source order.
    ///
    /// Returns an empty list without a by-date lookup when the address book
    /// is empty.
    pub fn find_oldest_people(&self) -> Vec<Contact> {
        self.repository
            .find_earliest_date_of_birth()
            .map(|earliest| self.repository.find_by_date_of_birth(earliest))
            .unwrap_or_default()
    }

    /// A single oldest contact; ties go to the first full name.
    pub fn find_oldest_person(&self) -> Option<Contact> {
        self.find_oldest_people().into_iter().min()
    }

    /// Absolute number of calendar days between two birthdays.
    ///
    /// The first name is looked up before the second, so when both are
    /// missing only the first is reported.
    pub fn age_difference_in_days(
        &self,
        first_person_full_name: &str,
        second_person_full_name: &str,
    ) -> Result<u64> {
        let first_person = self.require_person("first person", first_person_full_name)?;
        let second_person = self.require_person("second person", second_person_full_name)?;

        let days = first_person
            .date_of_birth()
            .signed_duration_since(second_person.date_of_birth())
            .num_days();
        Ok(days.unsigned_abs())
    }

    fn require_person(&self, argument: &'static str, full_name: &str) -> Result<Contact> {
        self.repository
            .find_by_full_name(full_name)?
            .ok_or_else(|| AddressBookError::PersonNotFound {
                argument,
                full_name: full_name.to_string(),
            })
    }
}
