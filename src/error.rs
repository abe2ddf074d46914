use crate::codon::Codon;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("invalid character '{ch}' at position {pos} (expected uppercase A-Z)")]
    InvalidFormat { ch: char, pos: usize },

    #[error("sequence length {len} is too short (minimum is one codon, 3 bases)")]
    TooShort { len: usize },

    #[error("sequence length {len} is not a multiple of 3")]
    IncompleteSequence { len: usize },

    #[error("invalid codon \"{codon}\"")]
    InvalidCodon { codon: Codon },

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

pub type TranslateResult<T> = Result<T, TranslateError>;
