pub mod dna;

pub use self::dna::Alphabet;

use crate::error::SeqError;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Whether `seq` is unambiguously DNA or RNA, i.e. its letters (ignoring case) are a subset of
/// `{A, C, G, T}` or of `{A, C, G, U}`.
pub fn is_nucleic_acid(seq: &str) -> bool {
    Alphabet::Dna.accepts(seq) || Alphabet::Rna.accepts(seq)
}

/// Checks that `seq` can be transformed, returning the alphabet it is written in. Only a
/// sequence containing T is DNA; anything else, including one with neither T nor U, is RNA.
pub fn validate(seq: &str) -> Result<Alphabet, SeqError> {
    if dna::has_thymine(seq) && dna::has_uracil(seq) {
        return Err(SeqError::MixedTU(seq.to_string()));
    }

    if !is_nucleic_acid(seq) {
        return Err(SeqError::Invalid(seq.to_string()));
    }

    if dna::has_thymine(seq) {
        Ok(Alphabet::Dna)
    } else {
        Ok(Alphabet::Rna)
    }
}

/// Transcribes DNA into RNA, or reverse transcribes RNA into DNA.
///
/// `"ATGC" -> "AUGC"`, `"AUGC" -> "ATGC"`
pub fn transcribe(seq: &str) -> Result<String, SeqError> {
    validate(seq)?;
    Ok(seq.chars().map(dna::transcribe_base).collect())
}

/// `"ATGC" -> "CGTA"`
pub fn reverse(seq: &str) -> Result<String, SeqError> {
    validate(seq)?;
    Ok(seq.chars().rev().collect())
}

/// Builds the complementary strand. DNA base pairing is used only when the sequence contains T.
///
/// `"ATGC" -> "TACG"`, `"AUGC" -> "UACG"`
pub fn complement(seq: &str) -> Result<String, SeqError> {
    let alphabet = validate(seq)?;
    Ok(seq
        .chars()
        .map(|b| dna::complement_base(b, alphabet))
        .collect())
}

/// `"ATGC" -> "GCAT"`
pub fn reverse_complement(seq: &str) -> Result<String, SeqError> {
    reverse(&complement(seq)?)
}

/// The named operations accepted by [`run_dna_rna_tools`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    IsNucleicAcid,
    Transcribe,
    Reverse,
    Complement,
    ReverseComplement,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::IsNucleicAcid,
        Operation::Transcribe,
        Operation::Reverse,
        Operation::Complement,
        Operation::ReverseComplement,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::IsNucleicAcid => "is_nucleic_acid",
            Operation::Transcribe => "transcribe",
            Operation::Reverse => "reverse",
            Operation::Complement => "complement",
            Operation::ReverseComplement => "reverse_complement",
        }
    }

    pub fn apply(&self, seq: &str) -> Result<Output, SeqError> {
        let out = match self {
            Operation::IsNucleicAcid => return Ok(Output::Bool(is_nucleic_acid(seq))),
            Operation::Transcribe => transcribe(seq)?,
            Operation::Reverse => reverse(seq)?,
            Operation::Complement => complement(seq)?,
            Operation::ReverseComplement => reverse_complement(seq)?,
        };
        Ok(Output::Seq(out))
    }
}

impl FromStr for Operation {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| SeqError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of applying an [`Operation`] to one sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Bool(bool),
    Seq(String),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Bool(b) => write!(f, "{b}"),
            Output::Seq(s) => f.write_str(s),
        }
    }
}

/// Runs the operation named `operation` on each sequence, returning the results in order.
///
/// # Errors
///
/// * `SeqError::NoSequences` if `seqs` is empty.
/// * `SeqError::UnknownOperation` if `operation` is not the name of an [`Operation`].
/// * The first validation error among the sequences.
pub fn run_dna_rna_tools<S: AsRef<str>>(
    seqs: &[S],
    operation: &str,
) -> Result<Vec<Output>, SeqError> {
    if seqs.is_empty() {
        return Err(SeqError::NoSequences);
    }
    let operation: Operation = operation.parse()?;

    let results: Vec<Output> = seqs
        .iter()
        .map(|seq| operation.apply(seq.as_ref()))
        .collect::<Result<_, _>>()?;

    debug!(
        "{operation}: {}",
        results.iter().map(|r| r.to_string()).join(", ")
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nucleic_acid_detection() {
        assert!(is_nucleic_acid("ATGC"));
        assert!(is_nucleic_acid("augc"));
        assert!(is_nucleic_acid(""));
        assert!(!is_nucleic_acid("ATUG"));
        assert!(!is_nucleic_acid("ATGN"));
    }

    #[test]
    fn transcription() {
        assert_eq!(transcribe("ATGC").unwrap(), "AUGC");
        assert_eq!(transcribe("AUGC").unwrap(), "ATGC");
        assert_eq!(transcribe("atgC").unwrap(), "augC");
        assert_eq!(
            transcribe("ATUG").unwrap_err(),
            SeqError::MixedTU("ATUG".to_string())
        );
    }

    #[test]
    fn invalid_sequences_are_rejected() {
        for f in [transcribe, reverse, complement, reverse_complement] {
            let err = f("ATGX").unwrap_err();
            assert!(err.is_validation_error());
            assert!(f("AtuG").unwrap_err().is_validation_error());
        }
    }

    #[test]
    fn reverse_and_complement() {
        assert_eq!(reverse("ATGC").unwrap(), "CGTA");
        assert_eq!(complement("ATGC").unwrap(), "TACG");
        assert_eq!(complement("AUGC").unwrap(), "UACG");
        assert_eq!(complement("aGct").unwrap(), "tCga");
        assert_eq!(complement("aGc").unwrap(), "uCg");
        assert_eq!(reverse_complement("ATGC").unwrap(), "GCAT");
        assert_eq!(reverse_complement("AUGC").unwrap(), "GCAU");
    }

    #[test]
    fn sequences_without_t_pair_as_rna() {
        assert_eq!(validate("AGC").unwrap(), Alphabet::Rna);
        assert_eq!(validate("AGCT").unwrap(), Alphabet::Dna);
        assert_eq!(complement("AGC").unwrap(), "UCG");
        assert_eq!(reverse_complement("AAGGC").unwrap(), "GCCUU");
    }

    #[test]
    fn reverse_complement_composition() {
        for seq in ["ATGC", "AAGGTTC", "augcc", "GGG", "", "ACGUUA"] {
            assert_eq!(
                reverse_complement(seq).unwrap(),
                reverse(&complement(seq).unwrap()).unwrap()
            );
        }
    }

    #[test]
    fn run_tools() {
        assert_eq!(
            run_dna_rna_tools(&["ATGC", "AUGC"], "transcribe").unwrap(),
            vec![Output::Seq("AUGC".into()), Output::Seq("ATGC".into())]
        );
        assert_eq!(
            run_dna_rna_tools(&["ATGC", "ATUG"], "is_nucleic_acid").unwrap(),
            vec![Output::Bool(true), Output::Bool(false)]
        );
        assert_eq!(
            run_dna_rna_tools(&["ATGC"], "translate").unwrap_err(),
            SeqError::UnknownOperation("translate".to_string())
        );
        assert_eq!(
            run_dna_rna_tools::<&str>(&[], "reverse").unwrap_err(),
            SeqError::NoSequences
        );
        assert!(run_dna_rna_tools(&["ATGC", "XYZ"], "complement").is_err());
    }

    #[test]
    fn operation_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }
}
