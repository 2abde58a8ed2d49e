//! Library catalog shell

use crate::core::{Library, SortOutcome};
use crate::shell::{advise, Console, Menu, ShellError};
use crate::types::{BookId, StoreError};
use std::io::{BufRead, Write};
use std::path::Path;

/// Menu front end over a [`Library`]
#[derive(Debug, Default)]
pub struct LibraryShell {
    library: Library,
}

impl LibraryShell {
    pub fn new() -> Self {
        LibraryShell {
            library: Library::new(),
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }
}

fn describe(error: &StoreError) -> String {
    match error {
        StoreError::EmptyStore => "The library is empty.".to_string(),
        StoreError::RecordNotFound { .. } => "Book not found.".to_string(),
        StoreError::FileOpen { .. } => "Failed to open file.".to_string(),
        other => format!("Error: {}", other),
    }
}

fn report<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    error: StoreError,
) -> Result<(), ShellError> {
    let message = describe(&error);
    advise(console, error, &message)
}

impl Menu for LibraryShell {
    const TITLE: &'static str = "Library Management System";
    const ENTRIES: &'static [&'static str] = &[
        "Add Book",
        "Delete Book",
        "Search Book",
        "Display All Books",
        "Sort Books by Title",
        "Save to File",
        "Load from File",
        "Exit",
    ];

    fn dispatch<I, O>(
        &mut self,
        choice: usize,
        console: &mut Console<I, O>,
        data_file: &Path,
    ) -> Result<(), ShellError>
    where
        I: BufRead,
        O: Write,
    {
        match choice {
            1 => self.add(console),
            2 => self.delete(console),
            3 => self.search(console),
            4 => self.display(console),
            5 => self.sort(console),
            6 => self.save(console, data_file),
            7 => self.load(console, data_file),
            _ => console.say("Invalid choice. Please try again."),
        }
    }
}

impl LibraryShell {
    fn add<I: BufRead, O: Write>(&mut self, console: &mut Console<I, O>) -> Result<(), ShellError> {
        let Some(id) = console.ask::<BookId>("Enter Book ID: ")? else {
            return Ok(());
        };
        let title = console.ask_text("Enter Book Title: ")?;
        let author = console.ask_text("Enter Book Author: ")?;

        match self.library.add_book(id, title, author) {
            Ok(()) => console.say("Book added successfully."),
            Err(e) => report(console, e),
        }
    }

    fn delete<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<(), ShellError> {
        let Some(id) = console.ask::<BookId>("Enter Book ID to delete: ")? else {
            return Ok(());
        };

        match self.library.remove_book(id) {
            Ok(_) => console.say("Book deleted successfully."),
            Err(e) => report(console, e),
        }
    }

    fn search<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<(), ShellError> {
        let Some(id) = console.ask::<BookId>("Enter Book ID to search: ")? else {
            return Ok(());
        };

        match self.library.search(id) {
            Ok(book) => {
                console.say("")?;
                console.say("Book Found:")?;
                console.say(format!("ID: {}", book.id))?;
                console.say(format!("Title: {}", book.title))?;
                console.say(format!("Author: {}", book.author))
            }
            Err(e) => report(console, e),
        }
    }

    fn display<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<(), ShellError> {
        let books = self.library.books();
        if books.is_empty() {
            return report(console, StoreError::EmptyStore);
        }

        console.say("")?;
        console.say("--- List of Books ---")?;
        for book in books {
            console.say(format!(
                "ID: {}, Title: {}, Author: {}",
                book.id, book.title, book.author
            ))?;
        }
        Ok(())
    }

    fn sort<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<(), ShellError> {
        match self.library.sort_by_title() {
            SortOutcome::Sorted => console.say("Books sorted by title successfully."),
            SortOutcome::NothingToSort => console.say("Nothing to sort."),
        }
    }

    fn save<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
        path: &Path,
    ) -> Result<(), ShellError> {
        match self.library.save(path) {
            Ok(_) => console.say("Books saved to file successfully."),
            Err(e) => report(console, e),
        }
    }

    fn load<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
        path: &Path,
    ) -> Result<(), ShellError> {
        match self.library.load(path) {
            Ok(_) => console.say("Books loaded from file successfully."),
            Err(e) => report(console, e),
        }
    }
}
