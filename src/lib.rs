//! Streaming FASTA record scanner.
//!
//! FASTA is a line-oriented text format: each record is one header line
//! (a sentinel prefix, by convention `>`, followed by an identifier and an
//! optional free-text description) and any number of sequence lines that
//! run until the next header or the end of input. [`RecordScanner`] walks
//! an already-open stream one record per call, carrying a single line of
//! lookahead across calls, so the input never has to fit in memory.
//!
//! The scanner borrows its stream; opening and closing stay with the
//! caller. See [`source`] for path-based opening with transparent gzip.
//!
//! # Example
//!
//! ```
//! use fastrec::RecordScanner;
//! use std::io::{BufReader, Cursor};
//!
//! let mut input = BufReader::new(Cursor::new(">chr1 test sequence\nACGT\nACGT\n>chr2\nTTTT\n"));
//! let mut scanner = RecordScanner::new(&mut input);
//!
//! let record = scanner.next_record().unwrap().unwrap();
//! assert_eq!(record.id, "chr1");
//! assert_eq!(record.description, "test sequence");
//! assert_eq!(record.sequence, "ACGTACGT");
//!
//! let record = scanner.next_record().unwrap().unwrap();
//! assert_eq!(record.id, "chr2");
//!
//! assert!(scanner.next_record().unwrap().is_none());
//! ```

pub mod source;

use log::warn;
use std::io;
use std::io::BufRead;

/// Default header sentinel (`>`).
pub const DEFAULT_SENTINEL: &str = ">";
/// Default delimiter between id and description (a single space).
pub const DEFAULT_DELIMITER: &str = " ";

/// One parsed FASTA record.
///
/// # Fields
///
/// * `id` - Header content up to the first delimiter, sentinel stripped
/// * `description` - Header content after the first delimiter; empty when
///   the header has no delimiter, or when the delimiter sits directly
///   after the sentinel
/// * `sequence` - Every sequence line of the record concatenated, with no
///   separators inserted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FastaRecord
{
    /// Sequence identifier (e.g., "chr1")
    pub id: String,
    /// Free-text remainder of the header line
    pub description: String,
    /// Concatenated sequence lines
    pub sequence: String,
}

impl FastaRecord
{
    /// Sequence length in bases.
    pub fn seq_len(&self) -> usize
    {
        self.sequence.len()
    }

    /// True if the record carries neither header content nor sequence.
    pub fn is_empty(&self) -> bool
    {
        self.id.is_empty() && self.description.is_empty() && self.sequence.is_empty()
    }
}

/// A stateful scanner yielding one FASTA record per call.
///
/// The scanner holds an exclusive borrow of an open, line-oriented stream
/// and two constructor-time settings: the header sentinel and the
/// id/description delimiter. Between calls it keeps exactly one line of
/// lookahead - the header that terminated the previous record - so record
/// boundaries are detected without consuming the next record's header.
///
/// The `&mut` borrow makes the single-reader precondition a compile-time
/// fact: two scanners cannot share one stream, and one scanner cannot be
/// driven from two threads at once.
///
/// # Exhaustion
///
/// [`next_record`](RecordScanner::next_record) returns `Ok(None)` once no
/// further header exists, and keeps returning `Ok(None)` on every later
/// call without touching the stream again. Constructing a scanner over an
/// already-exhausted stream is legal; the first call reports exhaustion.
///
/// # Example
///
/// ```
/// use fastrec::RecordScanner;
/// use std::io::{BufReader, Cursor};
///
/// let mut input = BufReader::new(Cursor::new(";ctg7|assembly contig\nACGT\n"));
/// let mut scanner = RecordScanner::with_options(&mut input, "|", ";");
///
/// let record = scanner.next_record().unwrap().unwrap();
/// assert_eq!(record.id, "ctg7");
/// assert_eq!(record.description, "assembly contig");
/// ```
pub struct RecordScanner<'a, R: BufRead>
{
    /// Borrowed input stream; the caller owns its lifecycle
    stream: &'a mut R,
    /// Header-prefix string marking a record boundary
    sentinel: String,
    /// String splitting a header into id and description
    delimiter: String,
    /// One line of lookahead carried between calls
    pending_line: Option<String>,
    /// Set once end-of-stream is permanently reached
    done: bool,
}

impl<'a, R: BufRead> RecordScanner<'a, R>
{
    /// Create a scanner with the default sentinel (`>`) and delimiter
    /// (single space).
    pub fn new(stream: &'a mut R) -> Self
    {
        Self::with_options(stream, DEFAULT_DELIMITER, DEFAULT_SENTINEL)
    }

    /// Create a scanner with a custom delimiter and sentinel.
    ///
    /// Both settings are immutable for the scanner's lifetime. Degenerate
    /// values are accepted and well-defined rather than rejected: an empty
    /// sentinel classifies every line as a header, and an empty delimiter
    /// matches at position 0 of every header, leaving the description
    /// empty.
    ///
    /// # Arguments
    ///
    /// * `stream` - An open, line-oriented input stream
    /// * `delimiter` - Splits the header into id and description
    /// * `sentinel` - Prefix that marks a header line
    pub fn with_options(stream: &'a mut R, delimiter: &str, sentinel: &str) -> Self
    {
        Self {
            stream,
            sentinel: sentinel.to_string(),
            delimiter: delimiter.to_string(),
            pending_line: None,
            done: false,
        }
    }

    /// The configured header sentinel.
    pub fn sentinel(&self) -> &str
    {
        &self.sentinel
    }

    /// The configured id/description delimiter.
    pub fn delimiter(&self) -> &str
    {
        &self.delimiter
    }

    /// Read the next record in file order.
    ///
    /// Blocks until a full record is assembled, then returns it. Lines are
    /// read with `read_line` semantics: exactly one trailing `'\n'` is
    /// stripped, nothing else - a `'\r'` from CRLF input stays part of the
    /// line, and a final line without a newline is still included.
    ///
    /// Content before the first header is discarded without producing a
    /// record; the number of dropped lines is reported through
    /// `log::warn!`. An input with no header at all therefore yields
    /// `Ok(None)` on the first call, not an error.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(record))` - The next record
    /// * `Ok(None)` - End of stream; stable across repeated calls
    /// * `Err(io::Error)` - The underlying stream failed to read (this
    ///   includes non-UTF-8 input, surfaced as `InvalidData`); never
    ///   retried here, the caller decides
    pub fn next_record(&mut self) -> io::Result<Option<FastaRecord>>
    {
        if self.done
        {
            return Ok(None);
        }

        // A header carried over from the previous call is used verbatim;
        // otherwise scan forward for one.
        let header = match self.pending_line.take()
        {
            Some(line) => line,
            None => match self.seek_header()?
            {
                Some(line) => line,
                None =>
                {
                    self.done = true;
                    return Ok(None);
                }
            },
        };

        let (id, description) = self.split_header(&header);

        let mut sequence = String::new();
        loop
        {
            match self.read_line()?
            {
                None =>
                {
                    self.done = true;
                    break;
                }
                Some(line) if line.starts_with(self.sentinel.as_str()) =>
                {
                    // The next record's header; park it for the next call.
                    self.pending_line = Some(line);
                    break;
                }
                // A blank line is an empty contribution, not a terminator.
                Some(line) => sequence.push_str(&line),
            }
        }

        Ok(Some(FastaRecord {
            id,
            description,
            sequence,
        }))
    }

    /// Advance past non-header lines until a header or end-of-stream.
    fn seek_header(&mut self) -> io::Result<Option<String>>
    {
        let mut discarded = 0usize;
        let header = loop
        {
            match self.read_line()?
            {
                None => break None,
                Some(line) if line.starts_with(self.sentinel.as_str()) => break Some(line),
                Some(_) => discarded += 1,
            }
        };
        if discarded > 0
        {
            warn!("discarded {} non-header line(s) before the first header", discarded);
        }
        Ok(header)
    }

    /// Split a header line on the first delimiter occurrence, with the
    /// sentinel prefix stripped. A header that is only the sentinel falls
    /// through to the no-delimiter arm and yields two empty fields.
    fn split_header(&self, header: &str) -> (String, String)
    {
        let stripped = &header[self.sentinel.len()..];
        match memchr::memmem::find(stripped.as_bytes(), self.delimiter.as_bytes())
        {
            // Delimiter directly after the sentinel: everything past the
            // delimiter is the id, the description stays empty.
            Some(0) => (stripped[self.delimiter.len()..].to_string(), String::new()),
            Some(pos) => (
                stripped[..pos].to_string(),
                stripped[pos + self.delimiter.len()..].to_string(),
            ),
            None => (stripped.to_string(), String::new()),
        }
    }

    /// One `getline` equivalent: strips exactly one trailing `'\n'`,
    /// reports `None` once the stream has no bytes left.
    fn read_line(&mut self) -> io::Result<Option<String>>
    {
        let mut line = String::new();
        match self.stream.read_line(&mut line)?
        {
            0 => Ok(None),
            _ =>
            {
                if line.ends_with('\n')
                {
                    line.pop();
                }
                Ok(Some(line))
            }
        }
    }
}

/// Record-by-record iteration; faults surface per item.
///
/// ```
/// use fastrec::RecordScanner;
/// use std::io::{BufReader, Cursor};
///
/// let mut input = BufReader::new(Cursor::new(">a\nAC\n>b\nGT\n"));
/// let ids: Vec<String> = RecordScanner::new(&mut input)
///     .map(|r| r.unwrap().id)
///     .collect();
/// assert_eq!(ids, ["a", "b"]);
/// ```
impl<R: BufRead> Iterator for RecordScanner<'_, R>
{
    type Item = io::Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item>
    {
        self.next_record().transpose()
    }
}
