/// Offset of the Phred+33 quality encoding.
pub const PHRED_OFFSET: u8 = 33;

/// A single FASTQ read. The header is stored without its leading `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub header: String,
    pub seq: String,
    pub qual: String,
}

impl Record {
    pub fn new(
        header: impl Into<String>,
        seq: impl Into<String>,
        qual: impl Into<String>,
    ) -> Self {
        Record {
            header: header.into(),
            seq: seq.into(),
            qual: qual.into(),
        }
    }

    /// Number of bases in the read
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn gc_content(&self) -> f64 {
        compute_gc_content(&self.seq)
    }

    pub fn phred_quality_avg(&self) -> f64 {
        quality_score(&self.qual)
    }
}

/// Returns the percentage of `G`/`C` bases (case-insensitive) in `seq`.
/// An empty sequence has a GC content of 0.
pub fn compute_gc_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }

    let gc = seq
        .bytes()
        .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();

    (gc as f64) / (seq.len() as f64) * 100.0
}

/// Returns the mean Phred+33 quality of a quality string, or 0 if it is empty.
pub fn quality_score(qual: &str) -> f64 {
    if qual.is_empty() {
        return 0.0;
    }

    let total: i64 = qual
        .bytes()
        .map(|b| b as i64 - PHRED_OFFSET as i64)
        .sum();

    (total as f64) / (qual.len() as f64)
}
