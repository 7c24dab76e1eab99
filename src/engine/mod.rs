//! Matchers composed from camel-hump matchers.
//!
//! Every type here implements [`NameMatcher`](crate::NameMatcher) by
//! delegating to one or two inner matchers.

/// Every occurrence of a pattern
pub mod all;
/// Logical OR of two matchers
pub mod compound;
mod factory;
/// Wrong keyboard layout correction
pub mod layout;
