//! I/O module
//!
//! Handles persistence of record stores as delimited text files.
//!
//! # Components
//!
//! - `line_format` - Field layout of account and book lines (pure conversions)
//! - `text_codec` - Saving and loading whole stores to and from files

pub mod line_format;
pub mod text_codec;

pub use line_format::{AccountLine, BookLine, LineRecord};
pub use text_codec::{load, save};
