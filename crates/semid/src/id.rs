use crate::alphabet::{fill_base62, is_base62};
use crate::error::{DecodeError, Error, Result};
use crate::prefix::Prefix;
use crate::rand::RandSource;
use core::fmt;

/// A 32-character semantic identifier: a 2-character type prefix followed
/// by a 30-character random Base62 suffix.
///
/// The value is stored inline as 32 ASCII bytes, so the type is `Copy` and
/// needs no allocation. It is case-sensitive and safe to use as a primary
/// key, URL path segment, or external-facing reference without escaping.
///
/// An identifier is assigned exactly once, at first persistence of a new
/// record, and never regenerated on update.
///
/// # Example
///
/// ```
/// use semid::{Prefix, SemanticId};
///
/// let prefix = Prefix::new("US").unwrap();
/// let id = SemanticId::random(prefix);
/// assert_eq!(id.as_str().len(), 32);
/// assert_eq!(id.prefix(), prefix);
///
/// let parsed: SemanticId = id.as_str().parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SemanticId {
    bytes: [u8; Self::LEN],
}

impl SemanticId {
    /// The total identifier length, in bytes.
    pub const LEN: usize = 32;
    /// The random suffix length, in bytes.
    pub const SUFFIX_LEN: usize = Self::LEN - Prefix::LEN;

    /// Generates a fresh identifier for `prefix` using the provided
    /// entropy source.
    ///
    /// This is a single draw with no uniqueness check; use
    /// [`SemanticIdGenerator`] when generating against a store.
    ///
    /// [`SemanticIdGenerator`]: crate::SemanticIdGenerator
    #[must_use]
    pub fn random_with<R>(prefix: Prefix, rng: &R) -> Self
    where
        R: RandSource<u64>,
    {
        let mut bytes = [0u8; Self::LEN];
        bytes[..Prefix::LEN].copy_from_slice(prefix.as_bytes());
        fill_base62(rng, &mut bytes[Prefix::LEN..]);
        Self { bytes }
    }

    /// Generates a fresh identifier for `prefix` using the built-in
    /// [`ThreadRandom`] entropy source.
    ///
    /// [`ThreadRandom`]: crate::ThreadRandom
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[cfg(feature = "std")]
    #[must_use]
    pub fn random(prefix: Prefix) -> Self {
        Self::random_with(prefix, &crate::thread_random::ThreadRandom)
    }

    /// Parses and validates an identifier string.
    ///
    /// # Errors
    ///
    /// Fails with [`DecodeError::InvalidLen`] if the input is not exactly
    /// 32 bytes, or [`DecodeError::InvalidByte`] if any byte falls outside
    /// the Base62 alphabet.
    pub fn parse(s: &str) -> Result<Self> {
        let input = s.as_bytes();
        if input.len() != Self::LEN {
            return Err(DecodeError::InvalidLen { len: input.len() }.into());
        }
        for (index, &byte) in input.iter().enumerate() {
            if !is_base62(byte) {
                return Err(DecodeError::InvalidByte { byte, index }.into());
            }
        }
        let mut bytes = [0u8; Self::LEN];
        bytes.copy_from_slice(input);
        Ok(Self { bytes })
    }

    /// Parses an identifier string and checks that it carries the expected
    /// type prefix.
    ///
    /// # Errors
    ///
    /// In addition to the [`Self::parse`] failures, fails with
    /// [`DecodeError::PrefixMismatch`] when the prefix differs.
    pub fn parse_prefixed(s: &str, expected: Prefix) -> Result<Self> {
        let id = Self::parse(s)?;
        let found = id.prefix();
        if found != expected {
            return Err(DecodeError::PrefixMismatch { expected, found }.into());
        }
        Ok(id)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: construction and parsing guarantee every byte is a
        // Base62 member, which is valid ASCII.
        unsafe { core::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Returns the identifier bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.bytes
    }

    /// Returns the type prefix of this identifier.
    #[must_use]
    pub const fn prefix(&self) -> Prefix {
        Prefix::from_validated([self.bytes[0], self.bytes[1]])
    }

    /// Returns the random suffix as a string slice.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.as_str()[Prefix::LEN..]
    }
}

impl fmt::Display for SemanticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for SemanticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticId")
            .field("prefix", &self.prefix().as_str())
            .field("suffix", &self.suffix())
            .finish()
    }
}

impl AsRef<str> for SemanticId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl core::str::FromStr for SemanticId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemanticId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq<str> for SemanticId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SemanticId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<SemanticId> for &str {
    fn eq(&self, other: &SemanticId) -> bool {
        *self == other.as_str()
    }
}

#[cfg(feature = "alloc")]
impl PartialEq<alloc::string::String> for SemanticId {
    fn eq(&self, other: &alloc::string::String) -> bool {
        self.as_str() == other.as_str()
    }
}

#[cfg(feature = "alloc")]
impl PartialEq<SemanticId> for alloc::string::String {
    fn eq(&self, other: &SemanticId) -> bool {
        self.as_str() == other.as_str()
    }
}

#[cfg(feature = "alloc")]
impl From<SemanticId> for alloc::string::String {
    fn from(id: SemanticId) -> Self {
        id.as_str().into()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    struct ZeroRand;
    impl RandSource<u64> for ZeroRand {
        fn rand(&self) -> u64 {
            0
        }
    }

    fn prefix(s: &str) -> Prefix {
        Prefix::new(s).unwrap()
    }

    #[test]
    fn random_with_has_fixed_layout() {
        let id = SemanticId::random_with(prefix("TM"), &ZeroRand);
        assert_eq!(id.as_str(), format!("TM{}", "0".repeat(30)));
        assert_eq!(id.prefix(), prefix("TM"));
        assert_eq!(id.suffix(), "0".repeat(30));
    }

    #[test]
    fn random_has_prefix_and_valid_suffix() {
        let id = SemanticId::random(prefix("US"));
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().starts_with("US"));
        assert_eq!(id.suffix().len(), SemanticId::SUFFIX_LEN);
        for b in id.suffix().bytes() {
            assert!(is_base62(b));
        }
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let id = SemanticId::random(prefix("US"));
        let parsed = SemanticId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
        let parsed: SemanticId = id.as_str().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            SemanticId::parse("US123"),
            Err(Error::Decode(DecodeError::InvalidLen { len: 5 }))
        );
        let too_long = "U".repeat(33);
        assert_eq!(
            SemanticId::parse(&too_long),
            Err(Error::Decode(DecodeError::InvalidLen { len: 33 }))
        );
    }

    #[test]
    fn parse_rejects_non_alphabet_bytes() {
        let mut s = "A".repeat(32);
        s.replace_range(7..8, "_");
        assert_eq!(
            SemanticId::parse(&s),
            Err(Error::Decode(DecodeError::InvalidByte {
                byte: b'_',
                index: 7
            }))
        );
    }

    #[test]
    fn parse_prefixed_checks_the_prefix() {
        let id = SemanticId::random(prefix("US"));
        assert_eq!(
            SemanticId::parse_prefixed(id.as_str(), prefix("US")).unwrap(),
            id
        );
        assert_eq!(
            SemanticId::parse_prefixed(id.as_str(), prefix("TM")),
            Err(Error::Decode(DecodeError::PrefixMismatch {
                expected: prefix("TM"),
                found: prefix("US"),
            }))
        );
    }

    #[test]
    fn compares_against_strings() {
        let id = SemanticId::random_with(prefix("TM"), &ZeroRand);
        let s = format!("TM{}", "0".repeat(30));
        assert_eq!(id, s.as_str());
        assert_eq!(s.as_str(), id);
        assert_eq!(id, s);
        assert_eq!(String::from(id), s);
    }

    #[test]
    fn debug_shows_prefix_and_suffix() {
        let id = SemanticId::random_with(prefix("TM"), &ZeroRand);
        let dbg = format!("{id:?}");
        assert!(dbg.contains("\"TM\""));
        assert!(dbg.contains(&"0".repeat(30)));
    }
}
