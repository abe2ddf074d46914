pub mod alphabets;
pub mod codon;
pub mod error;
pub mod peptide;
pub mod translate;
