use crate::error::FastqError;
use crate::record::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

/// Lazily reads four-line FASTQ records from a buffered source.
///
/// Only a single record is held in memory at any time. Blank lines between records are
/// skipped; the stream ends at EOF. The first error ends the stream, and the underlying
/// file handle is released once the reader is dropped.
pub struct FastqReader<R> {
    reader: R,
    buf: String,
    lines: u64,
    finished: bool,
}

impl FastqReader<BufReader<File>> {
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            lines: 0,
            finished: false,
        }
    }

    // returns None on EOF
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.lines += 1;
        Ok(Some(self.buf.trim().to_string()))
    }

    fn read_record(&mut self) -> Result<Option<Record>, FastqError> {
        // first line: header, skipping over any blank lines
        let header = loop {
            match self.next_line()? {
                None => return Ok(None),
                Some(line) if line.is_empty() => {
                    debug!("Skipping blank line {}", self.lines);
                }
                Some(line) => break line,
            }
        };
        let header_line = self.lines;

        if !header.starts_with('@') {
            return Err(FastqError::MissingHeader {
                line: header_line,
                found: header,
            });
        }
        let header = header[1..].to_string();

        // line 2: sequence
        let seq = self.next_line()?.unwrap_or_default();

        // line 3: expect a +
        match self.next_line()? {
            Some(sep) if sep.starts_with('+') => (),
            other => {
                return Err(FastqError::MissingSeparator {
                    line: header_line + 2,
                    header,
                    found: other.unwrap_or_default(),
                })
            }
        }

        // line 4: quality scores
        let qual = self.next_line()?.unwrap_or_default();

        if seq.len() != qual.len() {
            return Err(FastqError::LengthMismatch {
                line: header_line,
                header,
                seq_len: seq.len(),
                qual_len: qual.len(),
            });
        }

        Ok(Some(Record { header, seq, qual }))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<Record, FastqError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.read_record().transpose();
        if !matches!(result, Some(Ok(_))) {
            self.finished = true;
        }
        result
    }
}

impl<R: BufRead> FusedIterator for FastqReader<R> {}
