use crate::error::{Error, Result};
use crate::id::SemanticId;
use crate::prefix::Prefix;
use crate::rand::RandSource;
use core::convert::Infallible;

/// A collision-checked generator for [`SemanticId`]s.
///
/// The generator owns its configured [`Prefix`] and entropy source and has
/// no other state. It is invoked once per record creation, synchronously,
/// before the first durable write; it never writes itself. Its only
/// storage interaction is the injected existence check, which decouples it
/// from any particular storage technology.
///
/// Each call proposes up to [`Self::MAX_ATTEMPTS`] candidates, returning
/// the first one the existence check reports as free. Exhausting all
/// attempts fails with [`Error::Exhausted`], which the record-creation
/// path must surface as a creation failure.
///
/// ## Residual race
///
/// Between the existence check returning `false` and the durable write, a
/// concurrent creation could insert the same candidate. The probability is
/// astronomically small (a 30-character, 62-symbol suffix), and the
/// store's own uniqueness constraint remains the final authority: a
/// write-time violation is a storage-layer failure, not something this
/// generator masks.
///
/// # Example
///
/// ```
/// use semid::{Prefix, SemanticIdGenerator, ThreadRandom};
/// use std::collections::HashSet;
///
/// let mut store: HashSet<String> = HashSet::new();
/// let generator = SemanticIdGenerator::new(Prefix::new("US").unwrap(), ThreadRandom);
///
/// let id = generator.generate(|id| store.contains(id.as_str())).unwrap();
/// store.insert(id.as_str().to_owned());
///
/// assert_eq!(id.as_str().len(), 32);
/// assert!(id.as_str().starts_with("US"));
/// ```
pub struct SemanticIdGenerator<R> {
    prefix: Prefix,
    rng: R,
}

impl<R> SemanticIdGenerator<R>
where
    R: RandSource<u64>,
{
    /// The fixed bound on candidates proposed per generation call.
    pub const MAX_ATTEMPTS: u32 = 5;

    /// Creates a generator for the given prefix and entropy source.
    ///
    /// The prefix has already been validated by [`Prefix::new`]; there is
    /// nothing left to fail here.
    pub const fn new(prefix: Prefix, rng: R) -> Self {
        Self { prefix, rng }
    }

    /// Returns the configured prefix.
    #[must_use]
    pub const fn prefix(&self) -> Prefix {
        self.prefix
    }

    /// Generates a unique identifier, consulting `exists` for each
    /// candidate.
    ///
    /// `exists` must answer "does any record of this entity type already
    /// have this primary key?" against the durable store.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Exhausted`] if all [`Self::MAX_ATTEMPTS`]
    /// candidates collide.
    pub fn generate<F>(&self, mut exists: F) -> Result<SemanticId>
    where
        F: FnMut(&SemanticId) -> bool,
    {
        self.try_generate(|id| Ok::<_, Infallible>(exists(id)))
    }

    /// Generates a unique identifier with a fallible existence check.
    ///
    /// A probe error aborts generation immediately and surfaces as
    /// [`Error::Probe`]; remaining attempts are not burned against a
    /// store that cannot answer.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Probe`] if `exists` fails, or with
    /// [`Error::Exhausted`] if all [`Self::MAX_ATTEMPTS`] candidates
    /// collide.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(prefix = %self.prefix))
    )]
    pub fn try_generate<F, E>(&self, mut exists: F) -> Result<SemanticId, E>
    where
        F: FnMut(&SemanticId) -> core::result::Result<bool, E>,
    {
        let mut attempt = 0;
        while attempt < Self::MAX_ATTEMPTS {
            attempt += 1;
            let candidate = SemanticId::random_with(self.prefix, &self.rng);
            if exists(&candidate).map_err(Error::Probe)? {
                #[cfg(feature = "tracing")]
                tracing::debug!(attempt, candidate = %candidate, "candidate collided");
                continue;
            }
            return Ok(candidate);
        }
        Err(Error::Exhausted {
            prefix: self.prefix,
            attempts: Self::MAX_ATTEMPTS,
        })
    }
}
