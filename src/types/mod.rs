//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Bank account records
//! - `book`: Library catalog records
//! - `text`: Bounded text fields shared by both record kinds
//! - `error`: Error types for store operations

pub mod account;
pub mod book;
pub mod error;
pub mod text;

pub use account::{to_cents, Account, AccountNumber};
pub use book::{Book, BookId};
pub use error::StoreError;
pub use text::BoundedText;
