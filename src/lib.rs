//! Record Keeper Library
//! # Overview
//!
//! This library provides two menu-driven record keeping shells over a shared,
//! insertion-ordered record store with delimited-text persistence.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Book, BoundedText, StoreError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::record_store`] - Ordered storage with linear lookups by key
//!   - [`core::sorter`] - In-place exchange sort by a text field
//!   - [`core::bank`] - Account ledger operations
//!   - [`core::library`] - Book catalog operations
//! - [`io`] - Saving and loading stores as comma-delimited lines
//! - [`shell`] - Interactive menus for both record kinds
//! - [`logging`] - Diagnostic logging to stderr
//!
//! # Bank Operations
//!
//! - **Create**: Append an account with an opening balance
//! - **Deposit**: Add an amount to the balance (sign not checked)
//! - **Withdraw**: Subtract an amount if the balance covers it
//! - **Balance / Delete / List**: Lookups and removal by account number
//! - **Save / Load**: `accounts.txt`, one `number,name,balance` line per account
//!
//! # Library Operations
//!
//! - **Add / Delete / Search / List**: By book id
//! - **Sort**: Ascending by title, not stable
//! - **Save / Load**: `library.txt`, one `id,title,author` line per book

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod shell;
pub mod types;

pub use core::{Bank, Keyed, Library, RecordStore, SortOutcome};
pub use io::LineRecord;
pub use shell::{ShellConfig, ShellError};
pub use types::{Account, AccountNumber, Book, BookId, BoundedText, StoreError};
