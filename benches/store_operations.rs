//! Benchmark suite for record store operations
//!
//! Measures the linear operations of the record store and the exchange sort
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Every benchmark runs over stores of 100, 1,000 and 5,000 records. Sorting
//! is quadratic, so the largest size dominates the run time.

use record_keeper::io::text_codec::{read_records, write_records};
use record_keeper::{Book, Library, RecordStore};

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[100, 1_000, 5_000];

/// Library with titles in reverse alphabetical order
fn reversed_library(size: usize) -> Library {
    let mut library = Library::new();
    for id in 0..size {
        library
            .add_book(id as i32, format!("Title {:06}", size - id), "Author")
            .expect("Allocation failed");
    }
    library
}

fn book_store(size: usize) -> RecordStore<Book> {
    let mut store = RecordStore::new();
    for id in 0..size {
        store
            .append(Book::new(id as i32, format!("Title {}", id), "Author"))
            .expect("Allocation failed");
    }
    store
}

/// Append `size` books one at a time
#[divan::bench(args = SIZES)]
fn append(size: usize) -> RecordStore<Book> {
    book_store(size)
}

/// Look up the last key, scanning the whole store
#[divan::bench(args = SIZES)]
fn find_last_key(bencher: divan::Bencher, size: usize) {
    let store = book_store(size);
    let last = size as i32 - 1;

    bencher.bench_local(|| store.find_by_key(divan::black_box(last)).is_some());
}

/// Sort a catalog whose titles are in reverse order
#[divan::bench(args = SIZES)]
fn sort_reversed_titles(bencher: divan::Bencher, size: usize) {
    bencher
        .with_inputs(|| reversed_library(size))
        .bench_local_values(|mut library| {
            library.sort_by_title();
            library
        });
}

/// Serialize a store to lines and parse it back
#[divan::bench(args = SIZES)]
fn write_then_read(bencher: divan::Bencher, size: usize) {
    let store = book_store(size);

    bencher.bench_local(|| {
        let mut buffer = Vec::new();
        write_records(&store, &mut buffer).expect("Write failed");

        let mut restored: RecordStore<Book> = RecordStore::new();
        read_records(&mut restored, buffer.as_slice()).expect("Read failed")
    });
}
