pub mod fastq;

pub use self::fastq::FastqReader;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens a FASTQ file as a lazy stream of records.
pub fn read_fastq(path: impl AsRef<Path>) -> std::io::Result<FastqReader<BufReader<File>>> {
    FastqReader::from_path(path)
}
