use crate::prefix::Prefix;
use core::convert::Infallible;
use core::fmt;

/// A result type whose error defaults to the infallible-probe form of
/// [`Error`].
///
/// Most `semid` APIs never touch storage and use the default. The fallible
/// probe variant ([`crate::SemanticIdGenerator::try_generate`]) instantiates
/// `E` with the storage adapter's own error type.
pub type Result<T, E = Infallible> = core::result::Result<T, Error<E>>;

/// All errors that `semid` can produce.
///
/// The generic parameter `E` carries the error type of a fallible existence
/// probe and defaults to [`Infallible`] for the common, probe-cannot-fail
/// case.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error<E = Infallible> {
    /// A random string of length zero was requested.
    ///
    /// Caller error; never retried.
    InvalidLength {
        /// The requested length.
        len: usize,
    },

    /// A prefix was configured with a length other than 2.
    ///
    /// Raised at entity-schema setup, not per generation call.
    InvalidPrefixLen {
        /// The byte length of the rejected prefix.
        len: usize,
    },

    /// A prefix was configured with a byte outside the Base62 alphabet.
    ///
    /// Raised at entity-schema setup, not per generation call.
    InvalidPrefixByte {
        /// The offending byte.
        byte: u8,
        /// Its position within the prefix.
        index: usize,
    },

    /// Every generation attempt collided with an existing identifier.
    ///
    /// Indicates either pathological bad luck or a pre-populated store far
    /// beyond what a 62^30 suffix space should ever see. Surfaced to the
    /// record-creation caller as a creation failure; not retried further.
    Exhausted {
        /// The prefix the generator was configured with.
        prefix: Prefix,
        /// How many candidates were proposed and rejected.
        attempts: u32,
    },

    /// An identifier string failed validation while parsing.
    Decode(DecodeError),

    /// The injected existence probe failed.
    ///
    /// Wraps the storage adapter's error; generation aborts on the first
    /// probe failure rather than burning attempts against a broken store.
    Probe(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => {
                write!(f, "length must be at least 1 (got {len})")
            }
            Self::InvalidPrefixLen { len } => {
                write!(f, "prefix must be exactly 2 characters (got {len})")
            }
            Self::InvalidPrefixByte { byte, index } => {
                write!(
                    f,
                    "prefix must be ASCII alphanumeric (byte 0x{byte:02X} at index {index})"
                )
            }
            Self::Exhausted { prefix, attempts } => {
                write!(
                    f,
                    "could not generate a unique id for prefix `{prefix}` after {attempts} attempts"
                )
            }
            Self::Decode(e) => write!(f, "{e}"),
            Self::Probe(e) => write!(f, "existence check failed: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

/// Validation failures when parsing an identifier string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not exactly [`crate::SemanticId::LEN`] bytes.
    InvalidLen {
        /// The byte length of the rejected input.
        len: usize,
    },
    /// The input contains a byte outside the Base62 alphabet.
    InvalidByte {
        /// The offending byte.
        byte: u8,
        /// Its position within the input.
        index: usize,
    },
    /// The input is well-formed but carries a different type prefix than
    /// the one expected.
    PrefixMismatch {
        /// The prefix the caller expected.
        expected: Prefix,
        /// The prefix actually present in the input.
        found: Prefix,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLen { len } => write!(f, "invalid id length: {len}"),
            Self::InvalidByte { byte, index } => {
                write!(f, "invalid id byte 0x{byte:02X} at index {index}")
            }
            Self::PrefixMismatch { expected, found } => {
                write!(f, "expected prefix `{expected}`, found `{found}`")
            }
        }
    }
}

impl core::error::Error for DecodeError {}

impl<E> From<DecodeError> for Error<E> {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}
