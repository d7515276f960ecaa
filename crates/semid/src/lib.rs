//! Prefixed, collision-checked random identifiers.
//!
//! A semantic id is a fixed-width, 32-character string combining a
//! human-readable 2-character type prefix (e.g. `"US"` for user records)
//! with a 30-character random suffix drawn from the Base62 alphabet
//! `[0-9A-Za-z]`. It is case-sensitive, URL-safe, and intended for use as
//! a primary key and external-facing reference.
//!
//! Generation is collision-checked: [`SemanticIdGenerator`] proposes up to
//! five candidates against an injected existence check and fails with
//! [`Error::Exhausted`] if all of them are taken. The check is a plain
//! predicate, so the crate stays decoupled from any storage technology;
//! the store's own uniqueness constraint remains the final authority for
//! the residual race between check and write.
//!
//! Entropy comes from a [`RandSource`], which must be cryptographically
//! secure because identifiers are externally visible. With the `std`
//! feature, [`ThreadRandom`] provides a suitable default.
//!
//! ```
//! use semid::{Prefix, SemanticId, SemanticIdGenerator, ThreadRandom};
//! use std::collections::HashMap;
//!
//! // Declared once per entity type, validated at setup.
//! let prefix = Prefix::new("US").unwrap();
//! let generator = SemanticIdGenerator::new(prefix, ThreadRandom);
//!
//! let mut users: HashMap<SemanticId, String> = HashMap::new();
//!
//! // Assigned exactly once, before the first durable write.
//! let id = generator.generate(|id| users.contains_key(id)).unwrap();
//! users.insert(id, "alice".to_owned());
//!
//! assert!(id.as_str().starts_with("US"));
//! assert_eq!(id.as_str().len(), 32);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod alphabet;
mod error;
mod generator;
mod id;
mod prefix;
mod rand;
#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "std")]
mod thread_random;

pub use crate::alphabet::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::prefix::*;
pub use crate::rand::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use crate::thread_random::*;
