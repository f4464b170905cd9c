use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading or writing FASTQ records.
#[derive(Error, Debug)]
pub enum FastqError {
    #[error(
        "invalid FASTQ header:
line {line}
    `{found}`
every record must start with a line beginning with `@`"
    )]
    MissingHeader { line: u64, found: String },

    #[error(
        "invalid FASTQ separator:
line {line} (record `{header}`)
    `{found}`
the third line of each record must begin with `+`"
    )]
    MissingSeparator {
        line: u64,
        header: String,
        found: String,
    },

    #[error(
        "record `{header}` at line {line} has {seq_len} bases but {qual_len} quality scores"
    )]
    LengthMismatch {
        line: u64,
        header: String,
        seq_len: usize,
        qual_len: usize,
    },

    #[error("output file {} already exists, refusing to overwrite it", path.display())]
    AlreadyExists { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FastqError {
    /// Whether this error describes malformed record framing in the input.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            FastqError::MissingHeader { .. } | FastqError::MissingSeparator { .. }
        )
    }
}

/// Errors produced by the nucleotide sequence transforms.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeqError {
    #[error("wrong or ambiguous sequence: `{0}`")]
    Invalid(String),

    #[error("ambiguous sequence, contains both T and U: `{0}`")]
    MixedTU(String),

    #[error(
        "unknown operation `{0}`, expected one of: \
        is_nucleic_acid, transcribe, reverse, complement, reverse_complement"
    )]
    UnknownOperation(String),

    #[error("need at least one sequence to run an operation on")]
    NoSequences,
}

impl SeqError {
    /// Whether the error was caused by the sequence itself rather than the request.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, SeqError::Invalid(_) | SeqError::MixedTU(_))
    }
}
