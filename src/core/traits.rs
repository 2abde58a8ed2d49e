//! Core traits shared by every record kind
//!
//! A record only needs to expose its key to be held in a
//! [`RecordStore`](crate::core::RecordStore). Persistence is layered on top by
//! [`LineRecord`](crate::io::LineRecord).

use std::fmt::{Debug, Display};

/// A record addressable by an integer key
///
/// Keys are not required to be unique: a store may hold several records with
/// the same key, and lookups return the first one in insertion order.
pub trait Keyed {
    /// Key type (an integer)
    type Key: Copy + PartialEq + Debug + Display + Into<i64>;

    /// Get this record's key
    fn key(&self) -> Self::Key;
}
