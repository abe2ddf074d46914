use crate::alphabets::{self, dna};
use crate::codon::{self, Codon, CODON_LEN};
use crate::error::{TranslateError, TranslateResult};
use crate::peptide::Peptide;

use std::io::Write;

/// Which base alphabet the raw input uses: DNA (`T`) or RNA (`U`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Dna,
    Rna,
}

// The DNA spelling of the start codon. A literal ATG can only reach the
// reading frame from RNA-flagged input (DNA input has its Ts transcribed
// away first); it is skipped, still consuming its frame position, instead
// of being rejected like other unmapped codons.
const DNA_START_CODON: Codon = Codon::new(*b"ATG");

/// One configured translation task: a sequence, its strand flag, and the
/// reading frame derived from them. Transcription, validation and
/// segmentation all happen at construction, so every value is translatable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translator {
    seq: Vec<u8>,
    strand: Strand,
    codons: Vec<Codon>,
}

impl Translator {
    /// Configure a translator for `seq`. DNA input is transcribed to RNA
    /// before validation, so error positions refer to the transcript.
    pub fn new(seq: Vec<u8>, strand: Strand) -> TranslateResult<Self> {
        let codons = match strand {
            Strand::Dna => {
                let transcript = dna::transcribe(&seq);
                validate(&transcript)?;
                segment(&transcript)
            }
            Strand::Rna => {
                validate(&seq)?;
                segment(&seq)
            }
        };
        Ok(Self {
            seq,
            strand,
            codons,
        })
    }

    /// Replace the configuration wholesale. On failure the previous valid
    /// configuration is kept and the attempt has no effect.
    pub fn reconfigure(&mut self, seq: Vec<u8>, strand: Strand) -> TranslateResult<()> {
        *self = Self::new(seq, strand)?;
        Ok(())
    }

    /// The raw caller-supplied sequence (DNA input keeps its `T`s here).
    pub fn sequence(&self) -> &[u8] {
        &self.seq
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// The reading frame: consecutive non-overlapping triplets of the
    /// transcript, in order. Concatenated, they reproduce it exactly.
    pub fn codons(&self) -> &[Codon] {
        &self.codons
    }

    /// Translate the configured sequence, stopping at the first stop codon
    /// (exclusive). An unmapped codon aborts the whole call with
    /// `InvalidCodon`; no partial result is returned.
    pub fn translate(&self) -> TranslateResult<Peptide> {
        let table = codon::standard_table();
        let mut symbols = Vec::with_capacity(self.codons.len());
        for &codon in &self.codons {
            if codon.is_stop() {
                break;
            }
            match table.lookup(codon) {
                Some(aa) => symbols.push(aa),
                None if codon == DNA_START_CODON => {
                    log::warn!("skipping unmapped codon {codon} (DNA-spelled start codon)");
                }
                None => return Err(TranslateError::InvalidCodon { codon }),
            }
        }
        Ok(Peptide::from_bytes_unchecked(symbols))
    }

    /// Like `translate`, additionally writing the peptide to `out` as a
    /// single line with no separators.
    pub fn translate_to<W: Write>(&self, out: &mut W) -> TranslateResult<Peptide> {
        let peptide = self.translate()?;
        writeln!(out, "{peptide}")?;
        Ok(peptide)
    }
}

// The three checks run in a fixed order, each failing fast with the
// offending detail: character set first, then minimum length, then
// divisibility into whole codons.
fn validate(transcript: &[u8]) -> TranslateResult<()> {
    let alphabet = alphabets::ascii_uppercase();
    for (pos, &b) in transcript.iter().enumerate() {
        if !alphabet.symbols.contains(b as usize) {
            return Err(TranslateError::InvalidFormat { ch: b as char, pos });
        }
    }
    if transcript.len() < CODON_LEN {
        return Err(TranslateError::TooShort {
            len: transcript.len(),
        });
    }
    if transcript.len() % CODON_LEN != 0 {
        return Err(TranslateError::IncompleteSequence {
            len: transcript.len(),
        });
    }
    Ok(())
}

fn segment(transcript: &[u8]) -> Vec<Codon> {
    transcript
        .chunks_exact(CODON_LEN)
        .map(|c| Codon::new([c[0], c[1], c[2]]))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn base_seq(alphabet: [u8; 4], max_codons: usize) -> impl Strategy<Value = Vec<u8>> {
        let [b1, b2, b3, b4] = alphabet;
        proptest::collection::vec(
            prop_oneof![Just(b1), Just(b2), Just(b3), Just(b4)],
            CODON_LEN..=(max_codons * CODON_LEN),
        )
        .prop_map(|v| {
            let len = v.len() - (v.len() % CODON_LEN);
            v[..len].to_vec()
        })
    }

    fn rna_seq(max_codons: usize) -> impl Strategy<Value = Vec<u8>> {
        base_seq(*b"ACGU", max_codons)
    }

    fn dna_seq(max_codons: usize) -> impl Strategy<Value = Vec<u8>> {
        base_seq(*b"ACGT", max_codons)
    }

    proptest! {
        #[test]
        fn translation_truncates_at_first_stop(seq in rna_seq(40)) {
            let peptide = Translator::new(seq.clone(), Strand::Rna)
                .unwrap()
                .translate()
                .unwrap();
            let stop_at = seq
                .chunks_exact(CODON_LEN)
                .position(|c| {
                    matches!(c, [b'U', b'A', b'A'] | [b'U', b'A', b'G'] | [b'U', b'G', b'A'])
                })
                .unwrap_or(seq.len() / CODON_LEN);
            prop_assert_eq!(peptide.len(), stop_at);
            prop_assert!(peptide.len() <= seq.len() / CODON_LEN);
        }

        #[test]
        fn dna_and_rna_forms_translate_identically(seq in dna_seq(40)) {
            let as_dna = Translator::new(seq.clone(), Strand::Dna).unwrap();
            let as_rna = Translator::new(dna::transcribe(&seq), Strand::Rna).unwrap();
            prop_assert_eq!(as_dna.codons(), as_rna.codons());
            prop_assert_eq!(as_dna.translate().unwrap(), as_rna.translate().unwrap());
        }

        #[test]
        fn configuration_is_idempotent(seq in rna_seq(40)) {
            let a = Translator::new(seq.clone(), Strand::Rna).unwrap();
            let b = Translator::new(seq, Strand::Rna).unwrap();
            prop_assert_eq!(a.codons(), b.codons());
            prop_assert_eq!(a.translate().unwrap(), b.translate().unwrap());
        }
    }
}
