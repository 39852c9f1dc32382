use crate::domain::model::{Contact, Gender};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Read-only lookups over a loaded address book.
///
/// Implementations hold an immutable snapshot. Every method that returns
/// contacts hands back an owned copy, never a view of the snapshot.
pub trait ContactRepository: Send + Sync {
    /// All contacts in source order.
    fn find_all(&self) -> Vec<Contact>;

    /// First contact in source order whose full name matches exactly.
    fn find_by_full_name(&self, full_name: &str) -> Result<Option<Contact>>;

    fn find_earliest_date_of_birth(&self) -> Option<NaiveDate>;

    /// Every contact born on `date_of_birth`, in source order.
    fn find_by_date_of_birth(&self, date_of_birth: NaiveDate) -> Vec<Contact>;

    fn count_by_gender(&self, gender: Gender) -> usize;
}

pub trait ConfigProvider: Send + Sync {
    fn address_book_path(&self) -> &str;
    fn data_dir(&self) -> Option<&str>;
    fn century_pivot(&self) -> u8;
}
