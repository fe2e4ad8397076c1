#![deny(missing_docs)]

//! Byte-level pretokenization and decoding behind a deterministic handle
//! lifecycle.
//!
//! The crate has two halves. A handle lifecycle manager owns one opaque
//! engine resource per pretokenizer instance: allocation happens at
//! construction, release happens exactly once when the value is dropped, and
//! a released handle can never be touched again because the owning value is
//! gone. On top of it sits the pretokenize/decode bridge, a stateless
//! request/response contract that splits text into an ordered sequence of
//! word pieces and reassembles them byte-exactly.
//!
//! ## Quick Start
//! ```
//! use pretok_rs::ByteLevelPretokenizer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pretok = ByteLevelPretokenizer::new()?;
//!     let words = pretok.pretokenize("Hello there, 42!")?;
//!     assert_eq!(pretok.decode(&words)?, "Hello there, 42!");
//!     Ok(())
//! }
//! ```
//!
//! ## Byte-level rules
//! Every byte of the input maps to a distinct printable character (see
//! [`mapping`]), so word pieces carry arbitrary byte content losslessly and
//! `decode` is a left inverse of `pretokenize`: concatenating the pieces in
//! order reconstructs the input exactly. Whether decoding a sequence the
//! pretokenizer never produced fails or substitutes U+FFFD is chosen per
//! instance through [`DecodePolicy`].
//!
//! ## Error taxonomy
//! - [`PretokError::Allocation`]: the engine registry could not reserve a
//!   resource. Construction may be retried.
//! - [`PretokError::Decoding`]: input or output text was invalid under the
//!   expected encoding. Fix the input and retry.
//!
//! Release never fails and never panics, on any exit path.
//!
//! ## Environment Variables
//! - `PRETOK_MAX_INSTANCES`: caps the number of live engine instances;
//!   mainly useful for exercising allocation failure.

mod config;
mod constants;
mod engine;
mod error;
pub mod mapping;
mod registry;
mod runtime;

pub use config::{ByteLevelConfig, DecodePolicy};
pub use constants::{
    DEFAULT_MAX_INSTANCES, HANDLE_SENTINEL, PRETOK_MAX_INSTANCES_ENV, WHITESPACE_SPLIT_PATTERN,
    WORD_SPLIT_PATTERN,
};
pub use error::{PretokError, Result};
pub use registry::RawHandle;
pub use runtime::{ByteLevelPretokenizer, WhitespacePretokenizer};

#[cfg(test)]
mod test_support;
