use crate::filter::FilterConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Statistics about a single filtering run.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct FilterSummary {
    pub seqsieve_version: String,
    pub input_path: String,
    pub output_path: String,
    pub run_date: String,
    pub elapsed: f64,
    pub read_count: usize,
    pub passed_count: usize,
    pub filtered_count: usize,
    pub min_gc: f64,
    pub max_gc: f64,
    pub min_len: u64,
    pub max_len: u64,
    pub quality_threshold: f64,
}

impl FilterSummary {
    pub fn new(input: &Path, output: &Path, config: &FilterConfig) -> Self {
        FilterSummary {
            seqsieve_version: crate::cli::VERSION.to_string(),
            input_path: input.display().to_string(),
            output_path: output.display().to_string(),
            run_date: format!("{:?}", chrono::offset::Local::now()),
            min_gc: config.gc_bounds.min,
            max_gc: config.gc_bounds.max,
            min_len: config.length_bounds.min,
            max_len: config.length_bounds.max,
            quality_threshold: config.quality_threshold,
            ..FilterSummary::default()
        }
    }

    /// Writes the summary as pretty-printed JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Should be serialisable")?;
        std::fs::write(path, json)
            .with_context(|| format!("Unable to write summary to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");

        let mut summary = FilterSummary::new(
            Path::new("in.fastq"),
            Path::new("filtered/out.fastq"),
            &FilterConfig::new((40.0, 60.0), 150u64, 20.0),
        );
        summary.read_count = 10;
        summary.passed_count = 7;
        summary.filtered_count = 3;
        summary.write_json(&path).unwrap();

        let back: FilterSummary =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, summary);
        assert_eq!(back.max_len, 150);
        assert_eq!(back.min_gc, 40.0);
    }
}
