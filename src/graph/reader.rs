//! Plain-text network loader.
//!
//! One record per line, `#`-comments and blank lines skipped:
//!
//! ```text
//! # a three-stop network
//! stop Museum 5
//! stop Harbour
//! stop OldTown 9
//! road Museum Harbour 10
//! road Museum OldTown 15
//! ```
//!
//! `stop <name> [interest]` declares a stop (interest defaults to 0).
//! `road <a> <b> <weight>` connects two previously declared stops.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use super::model::TourMap;
use super::types::Weight;

/// Why a network file could not be loaded.
#[derive(Debug, Error)]
pub enum ReadError {
    /// A line that does not parse as a record.
    #[error("line {line}: {msg}")]
    Malformed { line: usize, msg: String },
    /// A road references a stop that was never declared.
    #[error("line {line}: unknown stop `{name}`")]
    UnknownStop { line: usize, name: String },
    /// The same stop name declared twice.
    #[error("line {line}: stop `{name}` declared twice")]
    DuplicateStop { line: usize, name: String },
    /// Underlying io failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn malformed(line: usize, msg: impl Into<String>) -> ReadError {
    ReadError::Malformed {
        line,
        msg: msg.into(),
    }
}

fn endpoint(
    map: &TourMap,
    tokens: &mut std::str::SplitWhitespace<'_>,
    line: usize,
) -> Result<usize, ReadError> {
    let name = tokens
        .next()
        .ok_or_else(|| malformed(line, "missing road endpoint"))?;
    map.stop_by_name(name).ok_or_else(|| ReadError::UnknownStop {
        line,
        name: name.to_owned(),
    })
}

/// Reads a network from any buffered source.
pub fn read_network<R: BufRead>(reader: R) -> Result<TourMap, ReadError> {
    let mut map = TourMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let record = line.trim();
        if record.is_empty() || record.starts_with('#') {
            continue;
        }

        let mut tokens = record.split_whitespace();
        let tag = tokens.next().unwrap_or_default();
        match tag {
            "stop" => {
                let name = tokens
                    .next()
                    .ok_or_else(|| malformed(lineno, "missing stop name"))?;
                let interest = match tokens.next() {
                    Some(raw) => raw.parse::<u32>().map_err(|_| {
                        malformed(lineno, format!("interest `{raw}` is not a non-negative integer"))
                    })?,
                    None => 0,
                };
                if tokens.next().is_some() {
                    return Err(malformed(lineno, "trailing tokens after stop record"));
                }
                if map.stop_by_name(name).is_some() {
                    return Err(ReadError::DuplicateStop {
                        line: lineno,
                        name: name.to_owned(),
                    });
                }
                map.add_stop(name, interest);
            }
            "road" => {
                let a = endpoint(&map, &mut tokens, lineno)?;
                let b = endpoint(&map, &mut tokens, lineno)?;
                let raw = tokens
                    .next()
                    .ok_or_else(|| malformed(lineno, "missing road weight"))?;
                let weight = raw.parse::<Weight>().map_err(|_| {
                    malformed(lineno, format!("weight `{raw}` is not a non-negative integer"))
                })?;
                if tokens.next().is_some() {
                    return Err(malformed(lineno, "trailing tokens after road record"));
                }
                if a == b {
                    return Err(malformed(lineno, "a road must connect two distinct stops"));
                }
                map.add_road(a, b, weight);
            }
            other => {
                return Err(malformed(lineno, format!("unknown record `{other}`")));
            }
        }
    }

    Ok(map)
}

/// Reads a network from a file on disk.
pub fn read_network_file<P: AsRef<Path>>(path: P) -> Result<TourMap, ReadError> {
    read_network(BufReader::new(File::open(path)?))
}
