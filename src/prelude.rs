//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! humpmatch types and traits with a single `use humpmatch::prelude::*;` statement.

pub use crate::engine::layout::fix_layout;
pub use crate::fuzzy_matcher::{CompiledPattern, MAX_CAMEL_HUMP_MATCHING_LENGTH};
pub use crate::options::MatcherOptionsBuilder;
pub use crate::*;
