use anyhow::{Context, Result};
use needletail::{parser::FastaReader, FastxReader};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Directory that converted FASTA files are written to by default
pub const DEFAULT_OUT_DIR: &str = "convert_results";

/// Derives the output file name for a converted FASTA: `reads.fa` becomes `reads_oneline.fa`,
/// and a file without an extension gets `.fasta`.
pub fn oneline_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_else(|| String::from(".fasta"));

    format!("{stem}_oneline{ext}")
}

/// Rewrites a multiline FASTA file so that every sequence sits on a single line.
///
/// The result is written into `out_dir`, which is created if needed, as `output` or, when no
/// name is given, as [`oneline_file_name`] of the input. An existing file of that name is
/// overwritten.
///
/// # Returns
///
/// The path of the written file.
pub fn convert_multiline_fasta_to_oneline(
    input: impl AsRef<Path>,
    output: Option<&str>,
    out_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let (input, out_dir) = (input.as_ref(), out_dir.as_ref());

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Unable to create directory {}", out_dir.display()))?;

    let output_path = match output {
        Some(name) => out_dir.join(name),
        None => out_dir.join(oneline_file_name(input)),
    };

    let file = File::open(input).with_context(|| format!("Unable to open file {}", input.display()))?;
    let is_empty = file.metadata()?.len() == 0;

    let mut writer = BufWriter::new(
        File::create(&output_path)
            .with_context(|| format!("Unable to create {}", output_path.display()))?,
    );

    let mut count = 0;
    if !is_empty {
        let mut reader = FastaReader::new(BufReader::new(file));

        while let Some(rec) = reader.next() {
            let rec = rec.with_context(|| format!("Invalid FASTA record in {}", input.display()))?;

            writer.write_all(b">")?;
            writer.write_all(rec.id())?;
            writer.write_all(b"\n")?;
            writer.write_all(&rec.seq())?;
            writer.write_all(b"\n")?;
            count += 1;
        }
    }
    writer.flush()?;

    info!("Wrote {count} records to {}", output_path.display());
    Ok(output_path)
}
