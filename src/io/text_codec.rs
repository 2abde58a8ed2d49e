//! Saving and loading record stores as delimited text
//!
//! # Save
//!
//! The target file is created or truncated, then one line is written per
//! record in store order. Nothing is staged: a failure part way through
//! leaves a partial file behind.
//!
//! # Load
//!
//! If the file opens, the store is cleared first and then refilled line by
//! line. The first line that does not match the record layout ends the load;
//! lines after it are never read, even if they are well formed. Blank lines
//! are skipped.

use crate::core::record_store::RecordStore;
use crate::io::line_format::{is_blank, LineRecord};
use crate::types::StoreError;
use csv::{QuoteStyle, ReaderBuilder, Trim, WriterBuilder};
use log::{debug, info};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Write every record of `store` to `path`
///
/// # Returns
///
/// * `Ok(usize)` - Number of lines written
/// * `Err(StoreError::FileOpen)` - If `path` cannot be created
/// * `Err(StoreError::Io)` - If a write fails
pub fn save<R: LineRecord>(store: &RecordStore<R>, path: &Path) -> Result<usize, StoreError> {
    let file = File::create(path).map_err(|e| StoreError::file_open(path, &e))?;
    let written = write_records(store, file)?;

    info!("saved {} records to {}", written, path.display());
    Ok(written)
}

/// Replace the contents of `store` with the records in `path`
///
/// # Returns
///
/// * `Ok(usize)` - Number of records loaded
/// * `Err(StoreError::FileOpen)` - If `path` cannot be opened; `store` is untouched
pub fn load<R: LineRecord>(store: &mut RecordStore<R>, path: &Path) -> Result<usize, StoreError> {
    let file = File::open(path).map_err(|e| StoreError::file_open(path, &e))?;

    store.clear();
    let loaded = read_records(store, file)?;

    info!("loaded {} records from {}", loaded, path.display());
    Ok(loaded)
}

/// Write records as delimited lines to any writer
pub fn write_records<R, W>(store: &RecordStore<R>, output: W) -> Result<usize, StoreError>
where
    R: LineRecord,
    W: Write,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    let mut written = 0;
    for record in store {
        writer.serialize(record.to_line()).map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

/// Append records parsed from delimited lines until the first bad line
///
/// Does not clear `store`. The only error returned is
/// `StoreError::AllocationExhausted`.
pub fn read_records<R, I>(store: &mut RecordStore<R>, input: I) -> Result<usize, StoreError>
where
    R: LineRecord,
    I: Read,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(input);

    let mut loaded = 0;
    for (index, result) in reader.records().enumerate() {
        let outcome = result.map_err(StoreError::from).and_then(|raw| {
            if is_blank(&raw) {
                return Ok(None);
            }
            let line = raw.position().map_or(index as u64 + 1, |pos| pos.line());
            R::parse_fields(&raw)
                .map(Some)
                .map_err(|message| StoreError::malformed_line(line, message))
        });

        match outcome {
            Ok(Some(record)) => {
                store.append(record)?;
                loaded += 1;
            }
            Ok(None) => continue,
            Err(e) => {
                debug!("load stopped after {} records: {}", loaded, e);
                break;
            }
        }
    }

    Ok(loaded)
}
