//! Line format for persisted records
//!
//! This module centralizes the field layout of `accounts.txt` and
//! `library.txt`, providing:
//! - The LineRecord trait linking a record to its serde line shape
//! - AccountLine / BookLine structures for (de)serialization
//! - Field-count checks and conversion back to domain types
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Layout
//!
//! ```text
//! <number>,<name>,<balance with 2 decimals>
//! <id>,<title>,<author>
//! ```
//!
//! Fields are written raw. A comma inside a name or title is not escaped and
//! shifts the field boundaries when the file is read back.

use crate::core::traits::Keyed;
use crate::types::{to_cents, Account, AccountNumber, Book, BookId, BoundedText};
use csv::StringRecord;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of fields on every persisted line
pub const FIELD_COUNT: usize = 3;

/// A record that can be written to and read from one delimited line
pub trait LineRecord: Keyed + Sized {
    /// Serde shape of one line
    type Line: Serialize + DeserializeOwned;

    /// Convert the record into its line shape
    fn to_line(&self) -> Self::Line;

    /// Convert a deserialized line back into a record
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - The record
    /// * `Err(String)` - Why the line does not describe a valid record
    fn from_line(line: Self::Line) -> Result<Self, String>;

    /// Arrange the raw fields of a line before deserialization
    ///
    /// The default requires exactly [`FIELD_COUNT`] fields.
    fn arrange_fields(raw: &StringRecord) -> Result<StringRecord, String> {
        if raw.len() != FIELD_COUNT {
            return Err(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                raw.len()
            ));
        }
        Ok(raw.clone())
    }

    /// Parse one raw line into a record
    fn parse_fields(raw: &StringRecord) -> Result<Self, String> {
        let fields = Self::arrange_fields(raw)?;
        // Whitespace before the key is allowed
        let fields: StringRecord = fields
            .iter()
            .enumerate()
            .map(|(index, field)| if index == 0 { field.trim_start() } else { field })
            .collect();
        let line: Self::Line = fields
            .deserialize(None)
            .map_err(|e| format!("invalid field: {}", e))?;
        Self::from_line(line)
    }
}

/// Account line: number, name, balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountLine {
    pub number: AccountNumber,
    pub name: String,
    pub balance: String,
}

/// Book line: id, title, author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLine {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

/// A line holding nothing but whitespace, skipped like an empty line
pub fn is_blank(raw: &StringRecord) -> bool {
    raw.iter().all(|field| field.trim().is_empty())
}

/// Validate a persisted text field: non-empty and within the field bound
fn text_field(value: &str, field: &str) -> Result<BoundedText, String> {
    if value.is_empty() {
        return Err(format!("{} is empty", field));
    }
    BoundedText::exact(value).ok_or_else(|| {
        format!(
            "{} longer than {} characters",
            field,
            BoundedText::MAX_CHARS
        )
    })
}

impl LineRecord for Account {
    type Line = AccountLine;

    fn to_line(&self) -> AccountLine {
        AccountLine {
            number: self.number,
            name: self.name.to_string(),
            balance: format!("{:.2}", to_cents(self.balance)),
        }
    }

    fn from_line(line: AccountLine) -> Result<Self, String> {
        let name = text_field(&line.name, "name")?;
        let balance = Decimal::from_str(line.balance.trim())
            .map_err(|_| format!("invalid balance '{}'", line.balance))?;

        Ok(Account {
            number: line.number,
            name,
            balance,
        })
    }
}

impl LineRecord for Book {
    type Line = BookLine;

    fn to_line(&self) -> BookLine {
        BookLine {
            id: self.id,
            title: self.title.to_string(),
            author: self.author.to_string(),
        }
    }

    fn from_line(line: BookLine) -> Result<Self, String> {
        Ok(Book {
            id: line.id,
            title: text_field(&line.title, "title")?,
            author: text_field(&line.author, "author")?,
        })
    }

    /// The author runs to the end of the line, commas included
    fn arrange_fields(raw: &StringRecord) -> Result<StringRecord, String> {
        if raw.len() < FIELD_COUNT {
            return Err(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                raw.len()
            ));
        }

        let author = raw.iter().skip(2).collect::<Vec<_>>().join(",");
        let mut fields = StringRecord::new();
        fields.push_field(&raw[0]);
        fields.push_field(&raw[1]);
        fields.push_field(&author);
        Ok(fields)
    }
}
