/// A source of random bits for suffix generation.
///
/// Implementations **must** be cryptographically secure: generated
/// identifiers are exposed externally (URLs, API payloads) and must not be
/// guessable. A seedable general-purpose PRNG is only acceptable in tests,
/// where substituting the source is the supported way to make generation
/// deterministic.
pub trait RandSource<T> {
    /// Returns random bits.
    fn rand(&self) -> T;
}

impl<T, R> RandSource<T> for &R
where
    R: RandSource<T>,
{
    fn rand(&self) -> T {
        (**self).rand()
    }
}
