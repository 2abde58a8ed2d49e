//! Core business logic module
//!
//! This module contains the record-keeping components:
//! - `traits` - The Keyed abstraction every record implements
//! - `record_store` - Insertion-ordered storage with linear lookups
//! - `sorter` - In-place exchange sort by a text field
//! - `bank` - Account ledger operations (deposit, withdraw, balance)
//! - `library` - Book catalog operations (search, sort by title)

pub mod bank;
pub mod library;
pub mod record_store;
pub mod sorter;
pub mod traits;

pub use bank::Bank;
pub use library::Library;
pub use record_store::RecordStore;
pub use sorter::{exchange_sort_by, SortOutcome};
pub use traits::Keyed;
