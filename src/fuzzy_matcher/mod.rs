//! Camel-hump matching and scoring.
//!
//! This module holds the matching core: the pattern compiler, the
//! backtracking engine, the scorer and the keyboard tables used by the
//! typo-tolerant variant. The decorators built on top of it live in
//! [`crate::engine`].

/// Backtracking camel-hump matcher
pub mod minuscule;
/// Pattern compilation
pub mod pattern;
mod score;
/// QWERTY neighbours for typo tolerance
pub mod typo;
pub(crate) mod util;

pub use minuscule::{MAX_CAMEL_HUMP_MATCHING_LENGTH, MinusculeMatcher};
pub use pattern::CompiledPattern;
