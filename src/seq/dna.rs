/// The two nucleic acid alphabets a sequence may be written in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Alphabet {
    Dna,
    Rna,
}

impl Alphabet {
    fn bases(self) -> &'static [u8; 4] {
        match self {
            Alphabet::Dna => b"ACGT",
            Alphabet::Rna => b"ACGU",
        }
    }

    /// Whether every letter of `seq` (case-insensitive) belongs to this alphabet
    pub fn accepts(self, seq: &str) -> bool {
        let bases = self.bases();
        seq.bytes().all(|b| bases.contains(&b.to_ascii_uppercase()))
    }
}

#[inline(always)]
pub fn has_thymine(seq: &str) -> bool {
    seq.bytes().any(|b| b.eq_ignore_ascii_case(&b'T'))
}

#[inline(always)]
pub fn has_uracil(seq: &str) -> bool {
    seq.bytes().any(|b| b.eq_ignore_ascii_case(&b'U'))
}

/// Swaps T and U, keeping the case of the letter. Other letters are unchanged.
#[inline(always)]
pub fn transcribe_base(b: char) -> char {
    match b {
        'T' => 'U',
        't' => 'u',
        'U' => 'T',
        'u' => 't',
        _ => b,
    }
}

/// Returns the Watson-Crick partner of a base, keeping the case of the letter.
#[inline(always)]
pub fn complement_base(b: char, alphabet: Alphabet) -> char {
    let partner = match (b.to_ascii_uppercase(), alphabet) {
        ('A', Alphabet::Dna) => 'T',
        ('A', Alphabet::Rna) => 'U',
        ('T', _) | ('U', _) => 'A',
        ('G', _) => 'C',
        ('C', _) => 'G',
        _ => return b,
    };

    if b.is_ascii_lowercase() {
        partner.to_ascii_lowercase()
    } else {
        partner
    }
}
