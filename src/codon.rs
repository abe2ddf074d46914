//! The standard genetic code: codons and the fixed codon-to-amino-acid table.

use crate::alphabets::rna;

use std::fmt::{self, Write};
use std::sync::LazyLock;
use vector_map::VecMap;

pub const CODON_LEN: usize = 3;

/// Number of sense (amino-acid coding) codons in the standard genetic code.
pub const SENSE_CODON_COUNT: usize = 61;

/// The three stop codons; they terminate translation and have no table entry.
pub const STOP_CODONS: [Codon; 3] = [
    Codon::new(*b"UAA"),
    Codon::new(*b"UAG"),
    Codon::new(*b"UGA"),
];

/// A 3-base unit of a nucleic-acid sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Codon([u8; CODON_LEN]);

impl Codon {
    pub const fn new(bases: [u8; CODON_LEN]) -> Self {
        Codon(bases)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_stop(&self) -> bool {
        STOP_CODONS.contains(self)
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            f.write_char(char::from(b))?;
        }
        Ok(())
    }
}

// The 61 sense codons of the standard genetic code (RNA alphabet), grouped by
// first base. Stop codons are intentionally absent; `CodonTable::standard`
// re-verifies every row.
const CODON_TO_AA: [(&[u8; CODON_LEN], u8); SENSE_CODON_COUNT] = [
    (b"UUU", b'F'), (b"UUC", b'F'), (b"UUA", b'L'), (b"UUG", b'L'),
    (b"UCU", b'S'), (b"UCC", b'S'), (b"UCA", b'S'), (b"UCG", b'S'),
    (b"UAU", b'Y'), (b"UAC", b'Y'),
    (b"UGU", b'C'), (b"UGC", b'C'), (b"UGG", b'W'),
    (b"CUU", b'L'), (b"CUC", b'L'), (b"CUA", b'L'), (b"CUG", b'L'),
    (b"CCU", b'P'), (b"CCC", b'P'), (b"CCA", b'P'), (b"CCG", b'P'),
    (b"CAU", b'H'), (b"CAC", b'H'), (b"CAA", b'Q'), (b"CAG", b'Q'),
    (b"CGU", b'R'), (b"CGC", b'R'), (b"CGA", b'R'), (b"CGG", b'R'),
    (b"AUU", b'I'), (b"AUC", b'I'), (b"AUA", b'I'), (b"AUG", b'M'),
    (b"ACU", b'T'), (b"ACC", b'T'), (b"ACA", b'T'), (b"ACG", b'T'),
    (b"AAU", b'N'), (b"AAC", b'N'), (b"AAA", b'K'), (b"AAG", b'K'),
    (b"AGU", b'S'), (b"AGC", b'S'), (b"AGA", b'R'), (b"AGG", b'R'),
    (b"GUU", b'V'), (b"GUC", b'V'), (b"GUA", b'V'), (b"GUG", b'V'),
    (b"GCU", b'A'), (b"GCC", b'A'), (b"GCA", b'A'), (b"GCG", b'A'),
    (b"GAU", b'D'), (b"GAC", b'D'), (b"GAA", b'E'), (b"GAG", b'E'),
    (b"GGU", b'G'), (b"GGC", b'G'), (b"GGA", b'G'), (b"GGG", b'G'),
];

/// Immutable mapping from sense codon to one-letter amino-acid code. Stop
/// codons are recognized by `Codon::is_stop` and never appear as keys.
pub struct CodonTable {
    map: VecMap<Codon, u8>,
}

impl CodonTable {
    fn standard() -> Self {
        let bases = rna::alphabet();
        let mut map = VecMap::new();
        for &(triplet, aa) in CODON_TO_AA.iter() {
            let codon = Codon::new(*triplet);
            assert!(
                bases.is_word(codon.as_bytes()),
                "codon {codon} contains a non-RNA base"
            );
            assert!(!codon.is_stop(), "stop codon {codon} must not be mapped");
            assert!(
                map.get(&codon).is_none(),
                "duplicate table entry for codon {codon}"
            );
            map.insert(codon, aa);
        }
        // 61 distinct non-stop RNA codons are necessarily all of them.
        assert_eq!(
            map.len(),
            SENSE_CODON_COUNT,
            "standard genetic code must map every sense codon"
        );
        CodonTable { map }
    }

    /// The amino-acid code for a sense codon, or `None` for anything
    /// unmapped (stop codons included).
    pub fn lookup(&self, codon: Codon) -> Option<u8> {
        self.map.get(&codon).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static STANDARD_TABLE: LazyLock<CodonTable> = LazyLock::new(CodonTable::standard);

/// The process-wide standard genetic code table.
pub fn standard_table() -> &'static CodonTable {
    &STANDARD_TABLE
}
