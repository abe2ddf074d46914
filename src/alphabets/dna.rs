use crate::alphabets::Alphabet;

use memchr::memchr;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

/// Transcribe DNA into RNA by replacing every `T` with `U`. No other byte
/// is touched.
pub fn transcribe(seq: &[u8]) -> Vec<u8> {
    let mut out = seq.to_vec();
    let mut from = 0;
    while let Some(i) = memchr(b'T', &out[from..]) {
        out[from + i] = b'U';
        from += i + 1;
    }
    out
}
