#[macro_use]
extern crate log;

pub mod cli;
pub mod error;
pub mod fasta;
pub mod filter;
pub mod io;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod seq;
pub mod summary;

pub use error::{FastqError, SeqError};
pub use filter::{filter_fastq, Bounds, BoundsArg, FilterConfig};
pub use io::write_fastq;
pub use pipeline::run_filter_fastq;
pub use reader::read_fastq;
pub use record::Record;
