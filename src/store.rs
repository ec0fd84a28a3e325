//! Line-oriented persistence for [`RedBlackTreeMap`].
//!
//! The format is a plain text file: line 1 holds the entry count N,
//! followed by N lines of `<key> <payload>` with a single space separator.
//! Payloads must be non-empty and free of whitespace; this is a limitation
//! of the format, not of the map.
//!
//! Saving writes entries in ascending key order, while loading replays
//! inserts in file order. Round-tripping therefore reproduces the logical
//! content (the same ascending sequence) but not the physical tree shape,
//! and collapses duplicate-key insertion order into ascending-key order.
//!
//! # Examples
//!
//! ```rust
//! use crimson::store;
//! use crimson::tree::RedBlackTreeMap;
//!
//! let mut map = RedBlackTreeMap::new();
//! map.insert(7, "seven");
//! map.insert(3, "three");
//!
//! let mut buffer = Vec::new();
//! store::save_entries(&map, &mut buffer).unwrap();
//! assert_eq!(String::from_utf8(buffer).unwrap(), "2\n3 three\n7 seven\n");
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::tree::RedBlackTreeMap;

// =============================================================================
// Error Definition
// =============================================================================

/// Represents errors that can occur while saving or loading a map.
#[derive(Debug)]
pub enum StoreError {
    /// An underlying I/O operation failed.
    Io(io::Error),
    /// The input ended before the count line.
    MissingCount,
    /// The count line did not parse as a non-negative integer.
    InvalidCount,
    /// An entry line did not parse as `<key> <payload>`.
    InvalidEntry {
        /// One-based line number of the offending line.
        line: usize,
    },
    /// The input ended before the announced number of entries was read.
    TruncatedInput {
        /// Number of entries announced by the count line.
        expected: usize,
        /// Number of entries actually present.
        found: usize,
    },
    /// A payload is empty or contains whitespace and cannot round-trip
    /// through the line format.
    PayloadUnencodable {
        /// Key of the offending entry.
        key: i64,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(formatter, "i/o error: {error}"),
            Self::MissingCount => write!(formatter, "missing count line"),
            Self::InvalidCount => write!(formatter, "invalid entry count"),
            Self::InvalidEntry { line } => {
                write!(formatter, "line {line}: expected `<key> <payload>`")
            }
            Self::TruncatedInput { expected, found } => write!(
                formatter,
                "truncated input: expected {expected} entries, found {found}"
            ),
            Self::PayloadUnencodable { key } => write!(
                formatter,
                "payload for key {key} is empty or contains whitespace and cannot be saved"
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

// =============================================================================
// Save
// =============================================================================

/// Writes the map to `writer` in the line-oriented format.
///
/// Entries are written in ascending key order (the in-order enumeration),
/// not insertion order.
///
/// # Errors
///
/// Returns [`StoreError::PayloadUnencodable`] if any payload is empty or
/// contains whitespace (the loader could not read such a line back), or
/// [`StoreError::Io`] on a failed write. Output written before the
/// failure is not rolled back.
///
/// # Examples
///
/// ```rust
/// use crimson::store;
/// use crimson::tree::RedBlackTreeMap;
///
/// let mut map = RedBlackTreeMap::new();
/// map.insert(1, "one");
///
/// let mut buffer = Vec::new();
/// store::save_entries(&map, &mut buffer).unwrap();
/// assert_eq!(buffer, b"1\n1 one\n");
/// ```
pub fn save_entries<W: Write>(map: &RedBlackTreeMap, mut writer: W) -> Result<(), StoreError> {
    writeln!(writer, "{}", map.len())?;
    for (key, payload) in map.iter() {
        if payload.is_empty() || payload.contains(char::is_whitespace) {
            return Err(StoreError::PayloadUnencodable { key });
        }
        writeln!(writer, "{key} {payload}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Saves the map to the file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file cannot be created, otherwise the
/// same errors as [`save_entries`].
pub fn save_to_path<P: AsRef<Path>>(map: &RedBlackTreeMap, path: P) -> Result<(), StoreError> {
    let file = File::create(path)?;
    save_entries(map, BufWriter::new(file))
}

// =============================================================================
// Load
// =============================================================================

/// Replaces the contents of `map` with the entries read from `reader`.
///
/// The map is cleared first and the announced number of entries is
/// inserted in file order. Lines past the announced count are ignored.
///
/// # Errors
///
/// Returns [`StoreError::MissingCount`], [`StoreError::InvalidCount`],
/// [`StoreError::InvalidEntry`], or [`StoreError::TruncatedInput`] on a
/// malformed input, and [`StoreError::Io`] on a failed read. Because
/// loading streams inserts, the map retains the entries inserted before a
/// failure.
///
/// # Examples
///
/// ```rust
/// use crimson::store;
/// use crimson::tree::RedBlackTreeMap;
///
/// let mut map = RedBlackTreeMap::new();
/// store::load_entries(&mut map, "2\n7 seven\n3 three\n".as_bytes()).unwrap();
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.find(7), Ok("seven"));
/// ```
pub fn load_entries<R: BufRead>(map: &mut RedBlackTreeMap, reader: R) -> Result<(), StoreError> {
    let mut lines = reader.lines();

    let count_line = lines.next().ok_or(StoreError::MissingCount)??;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| StoreError::InvalidCount)?;

    map.clear();
    for index in 0..count {
        let line = lines.next().ok_or(StoreError::TruncatedInput {
            expected: count,
            found: index,
        })??;

        let (key, payload) = parse_entry(&line).ok_or(StoreError::InvalidEntry {
            // Line 1 is the count line.
            line: index + 2,
        })?;
        map.insert(key, payload);
    }

    Ok(())
}

/// Loads the map from the file at `path`.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file cannot be opened, otherwise the
/// same errors as [`load_entries`].
pub fn load_from_path<P: AsRef<Path>>(
    map: &mut RedBlackTreeMap,
    path: P,
) -> Result<(), StoreError> {
    let file = File::open(path)?;
    load_entries(map, BufReader::new(file))
}

/// Parses one `<key> <payload>` line.
fn parse_entry(line: &str) -> Option<(i64, &str)> {
    let (key_text, payload) = line.split_once(' ')?;
    if payload.is_empty() || payload.contains(char::is_whitespace) {
        return None;
    }
    let key = key_text.parse().ok()?;
    Some((key, payload))
}

// =============================================================================
// Tests
// =============================================================================
