use crate::alphabet::is_base62;
use crate::error::{Error, Result};
use core::fmt;

/// A fixed, 2-character semantic type prefix (e.g. `"US"` for user
/// records).
///
/// A `Prefix` is declared once per entity type at schema-definition time
/// and validated at construction: it must be exactly 2 ASCII alphanumeric
/// characters. Misconfiguration fails fast at setup rather than per
/// generation call.
///
/// # Example
///
/// ```
/// use semid::Prefix;
///
/// let prefix = Prefix::new("US").unwrap();
/// assert_eq!(prefix.as_str(), "US");
///
/// assert!(Prefix::new("U").is_err());
/// assert!(Prefix::new("USR").is_err());
/// assert!(Prefix::new("U_").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix {
    bytes: [u8; 2],
}

impl Prefix {
    /// The fixed prefix length, in bytes.
    pub const LEN: usize = 2;

    /// Validates and constructs a prefix.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPrefixLen`] if `prefix` is not exactly 2
    /// bytes, or [`Error::InvalidPrefixByte`] if any byte falls outside
    /// the Base62 alphabet.
    pub fn new(prefix: &str) -> Result<Self> {
        let bytes = prefix.as_bytes();
        if bytes.len() != Self::LEN {
            return Err(Error::InvalidPrefixLen { len: bytes.len() });
        }
        for (index, &byte) in bytes.iter().enumerate() {
            if !is_base62(byte) {
                return Err(Error::InvalidPrefixByte { byte, index });
            }
        }
        Ok(Self {
            bytes: [bytes[0], bytes[1]],
        })
    }

    /// Constructs a prefix from bytes already known to be valid.
    ///
    /// Callers must guarantee both bytes are Base62 members; this is only
    /// used on data that has already passed identifier validation.
    pub(crate) const fn from_validated(bytes: [u8; 2]) -> Self {
        Self { bytes }
    }

    /// Returns the prefix bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 2] {
        &self.bytes
    }

    /// Returns the prefix as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: construction guarantees both bytes are ASCII
        // alphanumeric.
        unsafe { core::str::from_utf8_unchecked(&self.bytes) }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Prefix").field(&self.as_str()).finish()
    }
}

impl core::str::FromStr for Prefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Prefix {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_alphanumeric_chars_are_accepted() {
        for p in ["US", "TM", "a0", "9Z"] {
            let prefix = Prefix::new(p).unwrap();
            assert_eq!(prefix.as_str(), p);
            assert_eq!(prefix.as_bytes(), &[p.as_bytes()[0], p.as_bytes()[1]]);
        }
    }

    #[test]
    fn wrong_length_is_rejected_at_setup() {
        assert_eq!(Prefix::new(""), Err(Error::InvalidPrefixLen { len: 0 }));
        assert_eq!(Prefix::new("U"), Err(Error::InvalidPrefixLen { len: 1 }));
        assert_eq!(Prefix::new("USR"), Err(Error::InvalidPrefixLen { len: 3 }));
    }

    #[test]
    fn non_alphanumeric_bytes_are_rejected() {
        assert_eq!(
            Prefix::new("U_"),
            Err(Error::InvalidPrefixByte {
                byte: b'_',
                index: 1
            })
        );
        // Two-byte UTF-8 sequence: right length, wrong bytes.
        assert!(matches!(
            Prefix::new("é"),
            Err(Error::InvalidPrefixByte { index: 0, .. })
        ));
    }

    #[test]
    fn parses_from_str() {
        let prefix: Prefix = "US".parse().unwrap();
        assert_eq!(prefix, Prefix::try_from("US").unwrap());
    }
}
