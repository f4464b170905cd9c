use crate::filter::{filter_fastq, FilterConfig};
use crate::io::write_fastq;
use crate::reader::read_fastq;
use crate::summary::FilterSummary;
use anyhow::{Context, Result};
use std::path::Path;

const PROGRESS_INTERVAL: usize = 50000;

/// Filters the FASTQ file at `input` by GC content, length and quality, writing the reads that
/// pass every filter to `output`.
///
/// The input is streamed through in a single pass: one read is held in memory at a time,
/// regardless of the size of the file.
///
/// # Errors
///
/// This function will return an error if:
/// * `input` cannot be opened.
/// * `output` already exists. In this case the input is never read.
/// * A record in `input` is malformed. No output file is produced.
pub fn run_filter_fastq(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: FilterConfig,
) -> Result<FilterSummary> {
    // time everything!
    let now = std::time::Instant::now();

    let (input, output) = (input.as_ref(), output.as_ref());
    let mut summary = FilterSummary::new(input, output, &config);

    let reader = read_fastq(input)
        .with_context(|| format!("Unable to open file {}", input.display()))?;

    let mut read_count = 0;
    let reads = reader.inspect(|rec| {
        if rec.is_ok() {
            read_count += 1;
            if read_count % PROGRESS_INTERVAL == 0 {
                info!("Processed: {read_count}");
            }
        }
    });

    let passed = write_fastq(filter_fastq(reads, config), output)
        .with_context(|| format!("Unable to filter {}", input.display()))?;

    summary.read_count = read_count;
    summary.passed_count = passed;
    summary.filtered_count = read_count - passed;
    summary.elapsed = now.elapsed().as_secs_f64();

    info!(
        "Stats: {} reads, {} passed, {} filtered, {:.1}s runtime",
        summary.read_count, summary.passed_count, summary.filtered_count, summary.elapsed
    );

    Ok(summary)
}
