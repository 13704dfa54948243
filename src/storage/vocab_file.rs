//! Flat-file serialization for vocabulary lists.
//!
//! The format is plain text, line-oriented:
//!
//! ```text
//! #Animals
//! cat
//! dog
//!
//! #Colors
//! red
//! ```
//!
//! A line beginning with `#` opens a new topic; the remainder of the line,
//! trimmed, is the topic name. Every subsequent non-empty line is one word of
//! that topic, in file order. Blank lines are ignored on read; on write one
//! blank line follows each topic's word block. Word lines before the first
//! `#` line have no topic to attach to and are discarded.
//!
//! Loading parses into a fresh [`TopicList`] and only hands it to the caller
//! on full success, so a failed load never disturbs an existing list.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::domain::{Topic, TopicList};

/// Errors that can occur when loading a vocabulary file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The vocabulary file was not found.
    #[error("vocabulary file not found")]
    NotFound,
    /// An I/O error occurred while reading.
    #[error("failed to read vocabulary file")]
    Io(#[from] io::Error),
}

/// Parses a vocabulary stream into a fresh topic list.
///
/// # Errors
///
/// Returns an error if reading from `reader` fails.
pub fn read<R: BufRead>(reader: R) -> io::Result<TopicList> {
    let mut list = TopicList::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if let Some(name) = line.strip_prefix('#') {
            list.push_back(Topic::new(name.trim()));
        } else if !line.is_empty() {
            // a word line; orphan lines before the first '#' are discarded
            if let Some(topic) = last_mut(&mut list) {
                topic.add_word(line);
            } else {
                debug!(word = line, "discarding word line with no current topic");
            }
        }
    }

    Ok(list)
}

/// Loads a vocabulary file from disk.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file does not exist, and
/// [`LoadError::Io`] for any other read failure.
pub fn load(path: &Path) -> Result<TopicList, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound,
        _ => LoadError::Io(e),
    })?;
    let list = read(BufReader::new(file))?;
    debug!(topics = list.len(), path = %path.display(), "loaded vocabulary");
    Ok(list)
}

/// Writes a topic list to a vocabulary stream.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write<W: Write>(mut writer: W, list: &TopicList) -> io::Result<()> {
    for topic in list.iter() {
        writeln!(writer, "#{}", topic.name())?;
        for word in topic.words() {
            writeln!(writer, "{word}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Saves a topic list to a vocabulary file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn save(path: &Path, list: &TopicList) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, list)?;
    writer.flush()?;
    debug!(topics = list.len(), path = %path.display(), "saved vocabulary");
    Ok(())
}

/// Returns the last topic in the list, if any.
fn last_mut(list: &mut TopicList) -> Option<&mut Topic> {
    match list.len() {
        0 => None,
        len => list.get_mut(len - 1),
    }
}
