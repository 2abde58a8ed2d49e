//! Library catalog
//!
//! Owns the book store of a library shell session: adding, removing and
//! searching books by id, sorting by title, and persisting `library.txt`.

use crate::core::record_store::RecordStore;
use crate::core::sorter::{exchange_sort_by, SortOutcome};
use crate::io::text_codec;
use crate::types::{Book, BookId, BoundedText, StoreError};
use std::path::Path;

/// Book catalog for one shell session
#[derive(Debug, Default)]
pub struct Library {
    books: RecordStore<Book>,
}

impl Library {
    pub fn new() -> Self {
        Library {
            books: RecordStore::new(),
        }
    }

    /// Add a book at the end of the catalog
    ///
    /// Ids are not checked for uniqueness.
    pub fn add_book(
        &mut self,
        id: BookId,
        title: impl Into<BoundedText>,
        author: impl Into<BoundedText>,
    ) -> Result<(), StoreError> {
        self.books.append(Book::new(id, title, author))
    }

    /// Remove the first book with the given id
    pub fn remove_book(&mut self, id: BookId) -> Result<Book, StoreError> {
        self.books.delete(id)
    }

    /// Find the first book with the given id
    pub fn search(&self, id: BookId) -> Result<&Book, StoreError> {
        self.books.lookup(id)
    }

    /// Reorder the catalog by title, see [`exchange_sort_by`]
    pub fn sort_by_title(&mut self) -> SortOutcome {
        exchange_sort_by(&mut self.books, |book| book.title.as_str())
    }

    pub fn books(&self) -> &RecordStore<Book> {
        &self.books
    }

    /// Write every book to `path`, returning the number of lines written
    pub fn save(&self, path: &Path) -> Result<usize, StoreError> {
        text_codec::save(&self.books, path)
    }

    /// Replace the catalog with the contents of `path`
    pub fn load(&mut self, path: &Path) -> Result<usize, StoreError> {
        text_codec::load(&mut self.books, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_library() -> Library {
        let mut library = Library::new();
        library.add_book(3, "Solaris", "Stanislaw Lem").unwrap();
        library.add_book(1, "Dune", "Frank Herbert").unwrap();
        library.add_book(2, "Anathem", "Neal Stephenson").unwrap();
        library
    }

    #[test]
    fn test_search_finds_book() {
        let library = sample_library();

        let book = library.search(1).unwrap();

        assert_eq!(book.title.as_str(), "Dune");
        assert_eq!(book.author.as_str(), "Frank Herbert");
    }

    #[test]
    fn test_search_empty_and_missing() {
        let mut library = Library::new();
        assert_eq!(library.search(1).unwrap_err(), StoreError::EmptyStore);

        library.add_book(1, "Dune", "Frank Herbert").unwrap();
        assert_eq!(library.search(2).unwrap_err(), StoreError::not_found(2));
    }

    #[test]
    fn test_remove_book_keeps_remaining_order() {
        let mut library = sample_library();

        let removed = library.remove_book(1).unwrap();

        assert_eq!(removed.id, 1);
        let ids: Vec<BookId> = library.books().iter().map(|book| book.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(library.search(1).unwrap_err(), StoreError::not_found(1));
    }

    #[test]
    fn test_sort_by_title() {
        let mut library = sample_library();

        assert_eq!(library.sort_by_title(), SortOutcome::Sorted);

        let ids: Vec<BookId> = library.books().iter().map(|book| book.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_single_book_is_noop() {
        let mut library = Library::new();
        library.add_book(1, "Dune", "Frank Herbert").unwrap();

        assert_eq!(library.sort_by_title(), SortOutcome::NothingToSort);
    }

    #[test]
    fn test_long_fields_are_clamped_on_add() {
        let mut library = Library::new();
        library
            .add_book(1, "t".repeat(150), "a".repeat(101))
            .unwrap();

        let book = library.search(1).unwrap();
        assert_eq!(book.title.len(), BoundedText::MAX_CHARS);
        assert_eq!(book.author.len(), BoundedText::MAX_CHARS);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.txt");
        let library = sample_library();

        assert_eq!(library.save(&path).unwrap(), 3);

        let mut restored = Library::new();
        restored.add_book(99, "Stale", "Entry").unwrap();
        assert_eq!(restored.load(&path).unwrap(), 3);
        assert_eq!(restored.books(), library.books());
    }
}
