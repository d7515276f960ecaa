use crate::rand::RandSource;

#[cfg(feature = "alloc")]
use crate::error::{Error, Result};

/// The Base62 alphabet: `0-9`, `A-Z`, `a-z`, in ASCII order.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BITS_PER_CHAR: u32 = 6;
const CHARS_PER_WORD: u32 = u64::BITS / BITS_PER_CHAR;
const CHUNK_MASK: u64 = (1 << BITS_PER_CHAR) - 1;

/// Membership table for the Base62 alphabet.
const MEMBER: [bool; 256] = {
    let mut lut = [false; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        lut[ALPHABET[i] as usize] = true;
        i += 1;
    }
    lut
};

/// Returns `true` if `byte` is a member of the Base62 alphabet.
#[inline]
#[must_use]
pub const fn is_base62(byte: u8) -> bool {
    MEMBER[byte as usize]
}

/// Fills `dst` with bytes drawn uniformly and independently from the Base62
/// alphabet, consuming entropy from `rng`.
///
/// Sampling is done by rejection: each 64-bit word is split into 6-bit
/// chunks, and chunks outside `0..62` are discarded. This preserves
/// uniformity at the cost of a small, bounded-in-expectation amount of
/// extra entropy (2 of 64 chunk values are rejected).
///
/// The loop only terminates if `rng` actually produces varying output; a
/// source that always returns a word whose every chunk is rejected (e.g.
/// `u64::MAX`) will spin forever. Any real entropy source is fine.
pub fn fill_base62<R>(rng: &R, dst: &mut [u8])
where
    R: RandSource<u64>,
{
    let mut filled = 0;
    while filled < dst.len() {
        let mut word = rng.rand();
        for _ in 0..CHARS_PER_WORD {
            let chunk = (word & CHUNK_MASK) as usize;
            word >>= BITS_PER_CHAR;
            if chunk < ALPHABET.len() {
                dst[filled] = ALPHABET[chunk];
                filled += 1;
                if filled == dst.len() {
                    return;
                }
            }
        }
    }
}

/// Returns a `String` of exactly `len` characters drawn uniformly from the
/// Base62 alphabet, using the provided entropy source.
///
/// # Errors
///
/// Fails with [`Error::InvalidLength`] if `len` is zero. Negative lengths
/// are unrepresentable (`usize`).
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[cfg(feature = "alloc")]
pub fn random_base62_with<R>(len: usize, rng: &R) -> Result<alloc::string::String>
where
    R: RandSource<u64>,
{
    if len == 0 {
        return Err(Error::InvalidLength { len });
    }
    let mut buf = alloc::vec![0u8; len];
    fill_base62(rng, &mut buf);
    // SAFETY: `fill_base62` writes only bytes from `ALPHABET`, which is
    // valid ASCII.
    Ok(unsafe { alloc::string::String::from_utf8_unchecked(buf) })
}

/// Returns a `String` of exactly `len` characters drawn uniformly from the
/// Base62 alphabet, using the built-in [`ThreadRandom`] entropy source.
///
/// # Errors
///
/// Fails with [`Error::InvalidLength`] if `len` is zero.
///
/// # Example
///
/// ```
/// let suffix = semid::random_base62(30).unwrap();
/// assert_eq!(suffix.len(), 30);
/// ```
///
/// [`ThreadRandom`]: crate::ThreadRandom
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub fn random_base62(len: usize) -> Result<alloc::string::String> {
    random_base62_with(len, &crate::thread_random::ThreadRandom)
}
