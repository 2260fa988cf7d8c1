//! Trace files: JSON Lines, one message object per line.
use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::Value;

use crate::errors::{TraceError, TraceResult};
use crate::models::message::Message;
use crate::models::trace::Trace;

pub fn load_trace<P: AsRef<Path>>(path: P) -> TraceResult<Trace> {
    let file = File::open(path)?;
    read_trace(io::BufReader::new(file))
}

/// Blank lines are skipped. A line that is not JSON fails the whole read; a line that is
/// JSON but not a recognizable message is kept as an `Other` message.
pub fn read_trace<R: BufRead>(reader: R) -> TraceResult<Trace> {
    let mut messages = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line).map_err(|source| TraceError::InvalidLine {
            line: index + 1,
            source,
        })?;
        messages.push(Message::from(value));
    }

    Ok(Trace::new(messages))
}

pub fn persist_trace<P: AsRef<Path>>(path: P, trace: &[Message]) -> TraceResult<()> {
    let file = fs::File::create(path)?; // Create or truncate the file
    write_trace(file, trace)
}

pub fn write_trace<W: Write>(writer: W, trace: &[Message]) -> TraceResult<()> {
    let mut writer = io::BufWriter::new(writer);

    for message in trace {
        serde_json::to_writer(&mut writer, message).map_err(io::Error::from)?;
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}
