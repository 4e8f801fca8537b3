//! Word list parsing.
//!
//! A word list is plain text with one entry per line: a word, whitespace, and
//! its frequency. Blank lines are skipped; anything after the frequency is
//! ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Write};
use std::path::Path;

use super::DictionaryResult;
use crate::data_structures::WordFrequency;
use crate::error::dictionary::DictionaryError;

/// Parses one word list line.
///
/// # Arguments
///
/// * `line_number` - 1-based line number, used in error messages.
/// * `line` - The raw line.
///
/// # Returns
///
/// * `Ok(Some(entry))` - The word and its frequency.
/// * `Ok(None)` - The line is blank.
/// * `Err(DictionaryError)` - The frequency is missing, unparsable or not finite.
pub fn parse_line(line_number: usize, line: &str) -> DictionaryResult<Option<WordFrequency>> {
    let mut fields = line.split_whitespace();
    let Some(word) = fields.next() else {
        return Ok(None);
    };

    let Some(value) = fields.next() else {
        return Err(DictionaryError::MalformedLine {
            line: line_number,
            content: line.trim().to_string(),
        });
    };

    let frequency = value
        .parse::<f64>()
        .ok()
        .filter(|frequency| frequency.is_finite())
        .ok_or_else(|| DictionaryError::InvalidFrequency {
            line: line_number,
            value: value.to_string(),
        })?;

    Ok(Some((word.to_string(), frequency)))
}

/// Streaming reader yielding one parsed entry per non-blank line.
#[derive(Debug)]
pub struct WordListReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> WordListReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl WordListReader<BufReader<File>> {
    /// Opens a word list file.
    pub fn open<P: AsRef<Path>>(path: P) -> DictionaryResult<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for WordListReader<R> {
    type Item = DictionaryResult<WordFrequency>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            match parse_line(self.line_number, &line) {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Writes entries as `word frequency` lines.
pub fn write_word_list<W: Write>(mut writer: W, entries: &[WordFrequency]) -> DictionaryResult<()> {
    for (word, frequency) in entries {
        writeln!(writer, "{word} {frequency}")?;
    }
    writer.flush()?;
    Ok(())
}
