//! Pipe-delimited record format
//!
//! This module centralizes the on-disk format shared by the three data files:
//! - One record per line, `\n` terminated, no header
//! - Fields separated by `|` in a fixed order per record type
//! - No quoting or escaping: a `|` inside a field corrupts the line
//! - Surrounding whitespace is trimmed and blank lines are skipped on read
//!
//! Trimming applies to every field, not only line ends. Records created at
//! the console are already trimmed, so a save/load cycle is lossless for
//! them; a hand-edited value such as `" 555 "` loads as `"555"` and is
//! written back in that form on the next save.
//!
//! Reading and writing are generic over `Read`/`Write` so they can be tested
//! without touching the filesystem.

use crate::types::{GymError, Member, Package, Payment};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Field separator
pub const DELIMITER: u8 = b'|';

/// A record type stored one-per-line in a delimited file
pub trait DelimitedRecord: Serialize + DeserializeOwned {
    /// Exact number of fields on every line
    const FIELD_COUNT: usize;
}

impl DelimitedRecord for Package {
    const FIELD_COUNT: usize = 2;
}

impl DelimitedRecord for Member {
    const FIELD_COUNT: usize = 7;
}

impl DelimitedRecord for Payment {
    const FIELD_COUNT: usize = 4;
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

/// Read every record from `input`
///
/// `source` names the input in error messages.
///
/// # Errors
///
/// Returns `ParseFault` on the first line with the wrong number of fields or
/// a value that does not parse (non-integer price, age or amount, bad date).
/// No records are returned in that case.
pub fn read_records<T: DelimitedRecord, R: Read>(
    input: R,
    source: &str,
) -> Result<Vec<T>, GymError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .quoting(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| GymError::from(e).in_file(source))?;
        if is_blank(&record) {
            continue;
        }

        let line = record.position().map(|pos| pos.line());

        if record.len() != T::FIELD_COUNT {
            return Err(GymError::parse_fault(
                source,
                line,
                format!("expected {} fields, found {}", T::FIELD_COUNT, record.len()),
            ));
        }

        let parsed = record
            .deserialize::<T>(None)
            .map_err(|e| GymError::parse_fault(source, line, e.to_string()))?;
        records.push(parsed);
    }

    Ok(records)
}

/// Write `records` to `output`, one line each
///
/// # Errors
///
/// Returns `Io` if the output cannot be written.
pub fn write_records<'a, T, W, I>(records: I, output: W) -> Result<(), GymError>
where
    T: DelimitedRecord + 'a,
    W: Write,
    I: IntoIterator<Item = &'a T>,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}
