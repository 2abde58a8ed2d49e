//! Library catalog records

use super::text::BoundedText;
use crate::core::traits::Keyed;

/// Book identifier
pub type BookId = i32;

/// Library catalog entry
///
/// Books are never edited after creation. Sorting moves whole entries
/// between positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: BoundedText,
    pub author: BoundedText,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<BoundedText>, author: impl Into<BoundedText>) -> Self {
        Book {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}

impl Keyed for Book {
    type Key = BookId;

    fn key(&self) -> BookId {
        self.id
    }
}
