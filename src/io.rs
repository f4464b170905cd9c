use crate::error::FastqError;
use crate::record::Record;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Utility function to extract the error from an iterator and stop iteration immediately. Useful
/// for iterators which yield a Result<T>.
///
/// # Returns
///
/// This function returns an `Option<T>`. If the item is `Ok`, it returns `Some(T)`.
/// If the item is `Err`, it updates `err` with the error and returns `None`.
///
/// # Example
/// ```
/// use seqsieve::io::until_err;
///
/// let mut err = Ok(());
/// let items = vec![Ok(1), Ok(2), Err("error"), Ok(3)];
/// let results: Vec<_> = items
///   .into_iter()
///   .scan(&mut err, until_err)
///   .collect();
/// assert_eq!(results, vec![1, 2]);
/// assert!(err.is_err());
/// ```
pub fn until_err<T, E>(err: &mut &mut Result<(), E>, item: Result<T, E>) -> Option<T> {
    match item {
        Ok(item) => Some(item),
        Err(e) => {
            **err = Err(e);
            None
        }
    }
}

/// Formats a record as a four-line FASTQ read and writes it to the provided writer. The
/// separator line is always a bare `+`.
pub fn write_record(writer: &mut impl Write, record: &Record) -> std::io::Result<()> {
    writeln!(writer, "@{}\n{}\n+\n{}", record.header, record.seq, record.qual)
}

/// Writes a stream of records to a new FASTQ file at `path`, returning the number of records
/// written.
///
/// Missing parent directories are created first. The file must not already exist; this is
/// checked before any record is consumed. Records are streamed into a temporary file in the
/// destination directory, which is only moved into place once the whole stream has been
/// written, so an error part-way through leaves no output file behind.
///
/// # Errors
///
/// * `FastqError::AlreadyExists` if `path` exists. Directories created beforehand are kept.
/// * The first error yielded by `records`, which stops writing immediately.
/// * Any I/O error.
pub fn write_fastq<I>(records: I, path: impl AsRef<Path>) -> Result<usize, FastqError>
where
    I: IntoIterator<Item = Result<Record, FastqError>>,
{
    let path = path.as_ref();

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    if path.exists() {
        return Err(FastqError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let temp_file = NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(temp_file);

    // Start with a placeholder error object. This will be mutated if there are errors during
    // iteration through the reads.
    let mut err = Ok(());
    let mut count = 0;

    records
        .into_iter()
        .scan(&mut err, until_err)
        .try_for_each(|rec| -> std::io::Result<()> {
            count += 1;
            write_record(&mut writer, &rec)
        })?;
    err?;

    let temp_file = writer.into_inner().map_err(|e| e.into_error())?;
    temp_file.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            FastqError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            FastqError::Io(e.error)
        }
    })?;

    debug!("Wrote {count} records to {}", path.display());
    Ok(count)
}
