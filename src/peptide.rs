use std::fmt::{self, Write};

/// An ordered run of one-letter amino-acid codes. `Display` renders the
/// codes concatenated with no separator, the line format of the emit path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Peptide {
    bytes: Vec<u8>,
}

impl Peptide {
    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for Peptide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bytes {
            f.write_char(char::from(b))?;
        }
        Ok(())
    }
}
