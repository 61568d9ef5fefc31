//! Opening FASTA input streams from filesystem paths.
//!
//! The scanner itself only knows about an already-open `BufRead` stream;
//! this module supplies the plumbing that turns a path into one, looking
//! through a trailing `.gz` so callers never deal with compression.

use flate2::read::MultiGzDecoder;
use log::debug;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Conventional FASTA file extensions (checked after any trailing `.gz`
/// is stripped).
const FASTA_EXTENSIONS: [&str; 6] = ["fasta", "fa", "fna", "faa", "aln", "protein"];

/// Open a path as a buffered, line-oriented stream.
///
/// Files ending in `.gz` are decompressed on the fly; everything else is
/// read as plain text. The returned reader is positioned at the start of
/// the data and is ready to hand to
/// [`RecordScanner::new`](crate::RecordScanner::new).
///
/// # Arguments
///
/// * `path` - Path to a FASTA file, optionally gzip-compressed
///
/// # Returns
///
/// * `Ok(reader)` - A buffered reader over the (decompressed) bytes
/// * `Err(io::Error)` - If the file cannot be opened
///
/// # Example
///
/// ```no_run
/// use fastrec::source::reader_from_path;
/// use fastrec::RecordScanner;
/// use std::path::Path;
///
/// let mut reader = reader_from_path(Path::new("data.fasta.gz")).unwrap();
/// let mut scanner = RecordScanner::new(&mut reader);
/// while let Some(record) = scanner.next_record().unwrap()
/// {
///     println!("{}\t{}", record.id, record.seq_len());
/// }
/// ```
pub fn reader_from_path(path: &Path) -> io::Result<Box<dyn BufRead>>
{
    let file = File::open(path)?;
    if is_gzip(path)
    {
        debug!("opening {} as gzip-compressed text", path.display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    }
    else
    {
        debug!("opening {} as plain text", path.display());
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Whether a path looks like a FASTA file by extension.
///
/// Accepts the conventional extensions `fasta`, `fa`, `fna`, `faa`,
/// `aln` and `protein`, each optionally followed by `.gz`.
///
/// # Example
///
/// ```
/// use fastrec::source::is_fasta_path;
/// use std::path::Path;
///
/// assert!(is_fasta_path(Path::new("genome.fna")));
/// assert!(is_fasta_path(Path::new("genome.fasta.gz")));
/// assert!(!is_fasta_path(Path::new("reads.fastq")));
/// ```
pub fn is_fasta_path(path: &Path) -> bool
{
    let stem;
    let effective = if is_gzip(path)
    {
        stem = path.with_extension("");
        stem.as_path()
    }
    else
    {
        path
    };
    match effective.extension().and_then(|e| e.to_str())
    {
        Some(ext) => FASTA_EXTENSIONS.contains(&ext),
        None => false,
    }
}

fn is_gzip(path: &Path) -> bool
{
    path.extension().map(|e| e == "gz").unwrap_or(false)
}
