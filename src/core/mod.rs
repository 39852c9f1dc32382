pub mod csv_reader;
pub mod factory;
pub mod repository;
pub mod service;

pub use crate::domain::model::{Contact, Gender};
pub use crate::domain::ports::{ConfigProvider, ContactRepository};
pub use crate::utils::error::Result;
