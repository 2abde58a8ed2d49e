//! Error types for the record store and its shells
//!
//! Every variant except [`StoreError::AllocationExhausted`] is advisory: the
//! shell turns it into a message and carries on with the next command.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Empty store, record not found
//! - **Balance Errors**: Insufficient funds, arithmetic overflow
//! - **File Errors**: Data file cannot be opened, I/O failure while writing
//! - **Format Errors**: A persisted line does not match the record layout
//! - **Fatal Errors**: Storage for a new record could not be reserved

use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

/// Main error type for record store operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Storage for a new record could not be reserved
    ///
    /// This is the only fatal error. The shell ends the session and the
    /// process exits with a failure status.
    #[error("Memory allocation failed")]
    AllocationExhausted,

    /// No record carries the requested key
    #[error("Record {key} not found")]
    RecordNotFound {
        /// The key that was searched for
        key: i64,
    },

    /// The store holds no records, so no scan was performed
    #[error("No records found")]
    EmptyStore,

    /// Withdrawal larger than the current balance
    ///
    /// The balance is left unchanged.
    #[error("Insufficient funds for account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: i32,
        balance: Decimal,
        requested: Decimal,
    },

    /// Balance arithmetic would leave the decimal range
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow { operation: String, account: i32 },

    /// The data file could not be opened
    ///
    /// On load the in-memory store is left untouched.
    #[error("Failed to open file '{path}': {message}")]
    FileOpen { path: String, message: String },

    /// I/O error while writing or reading an already opened file
    #[error("I/O error: {message}")]
    Io { message: String },

    /// A persisted line does not match the fixed field layout
    ///
    /// Loading stops at the first such line without reporting it.
    #[error("Malformed record at line {line}: {message}")]
    MalformedLine { line: u64, message: String },
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        StoreError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for StoreError {
    fn from(error: csv::Error) -> Self {
        match error.position() {
            Some(pos) => StoreError::MalformedLine {
                line: pos.line(),
                message: error.to_string(),
            },
            None => StoreError::Io {
                message: error.to_string(),
            },
        }
    }
}

impl StoreError {
    /// Create a RecordNotFound error
    pub fn not_found(key: impl Into<i64>) -> Self {
        StoreError::RecordNotFound { key: key.into() }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: i32, balance: Decimal, requested: Decimal) -> Self {
        StoreError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: i32) -> Self {
        StoreError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create a FileOpen error for `path`
    pub fn file_open(path: &Path, error: &std::io::Error) -> Self {
        StoreError::FileOpen {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a MalformedLine error
    pub fn malformed_line(line: u64, message: impl Into<String>) -> Self {
        StoreError::MalformedLine {
            line,
            message: message.into(),
        }
    }

    /// Whether the shell must stop after this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, StoreError::AllocationExhausted)
    }
}
