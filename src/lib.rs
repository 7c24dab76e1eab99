//! Humpmatch is a camel-hump name matcher for Rust.
//!
//! It decides whether a short pattern typed by a user (`NPE`, `nuPoEx`,
//! `*foo`, `a b`) matches a symbol or file name (`NullPointerException`), tells
//! which parts of the name matched, and scores the match so that candidates
//! can be ranked the way a go-to-symbol dialog expects.
//!
//! # Examples
//!
//! ```
//! use humpmatch::prelude::*;
//!
//! let matcher = compile("NPE", CaseSensitivity::FirstLetter, "");
//! assert!(matcher.matches("NullPointerException"));
//!
//! let fragments = matcher.matching_fragments("NullPointerException").unwrap();
//! assert_eq!(fragments.iter().map(|r| r.start()).collect::<Vec<_>>(), vec![0, 4, 11]);
//!
//! let exact = matcher.matching_degree("NPE", true);
//! let humps = matcher.matching_degree("NullPointerException", true);
//! assert!(exact > humps);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::engine::all::AllOccurrencesMatcher;
pub use crate::engine::compound::CompoundMatcher;
pub use crate::engine::layout::{KeyboardLayout, LayoutFixer, RussianLayout};
pub use crate::fuzzy_matcher::minuscule::MinusculeMatcher;
pub use crate::matcher::{MatchedName, Ranker};
pub use crate::options::{MatcherError, MatcherOptions};
pub use crate::range::Range;

pub mod engine;
pub mod fuzzy_matcher;
mod matcher;
pub mod options;
pub mod prelude;
mod range;

//==============================================================================
// A name matcher decides whether a pattern matches a name

#[derive(Eq, PartialEq, Debug, Copy, Clone, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Case sensitivity mode for matching
pub enum CaseSensitivity {
    /// Case is ignored everywhere
    None,
    /// The first letter of the name has to match the case of the first
    /// pattern letter; the rest is case-insensitive
    #[default]
    FirstLetter,
    /// Every letter has to match case exactly
    All,
}

impl Display for CaseSensitivity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let name = match self {
            CaseSensitivity::None => "none",
            CaseSensitivity::FirstLetter => "first_letter",
            CaseSensitivity::All => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for CaseSensitivity {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(CaseSensitivity::None),
            "first_letter" => Ok(CaseSensitivity::FirstLetter),
            "all" => Ok(CaseSensitivity::All),
            other => Err(MatcherError::UnknownCaseSensitivity(other.to_string())),
        }
    }
}

/// The matched parts of a name, earliest first.
///
/// Ranges never overlap and never touch; touching ranges are merged.
pub type Fragments = Vec<Range>;

/// A compiled pattern that can be matched against names
pub trait NameMatcher: Send + Sync + Display {
    /// The pattern this matcher was built from
    fn pattern(&self) -> &str;

    /// Matches `name`, returning the matched fragments or `None` if it does not match
    ///
    /// An empty list means the pattern matches trivially (it is empty or
    /// consists of wildcards only).
    fn matching_fragments(&self, name: &str) -> Option<Fragments>;

    /// Returns true if `name` matches
    fn matches(&self, name: &str) -> bool {
        self.matching_fragments(name).is_some()
    }

    /// Scores `fragments` previously obtained for `name`
    fn matching_degree_with(&self, name: &str, value_start_case_match: bool, fragments: Option<&[Range]>) -> i32;

    /// Matches and scores `name`; `i32::MIN` when it does not match
    fn matching_degree(&self, name: &str, value_start_case_match: bool) -> i32 {
        let fragments = self.matching_fragments(name);
        self.matching_degree_with(name, value_start_case_match, fragments.as_deref())
    }

    /// Returns true if the match begins at the first character of `name`
    fn is_start_match(&self, name: &str) -> bool {
        self.matching_fragments(name)
            .is_some_and(|fragments| fragments.first().is_some_and(|range| range.start() == 0))
    }
}

/// Factory for creating name matchers
pub trait MatcherFactory {
    /// Creates a matcher for `pattern`
    fn create_matcher(&self, pattern: &str) -> Box<dyn NameMatcher>;
}

//------------------------------------------------------------------------------
// Constructors

/// Compiles `pattern` into a plain camel-hump matcher.
pub fn compile(pattern: &str, case: CaseSensitivity, hard_separators: &str) -> MinusculeMatcher {
    MinusculeMatcher::new(pattern, case, hard_separators)
}

/// Matches with `first`, falling back to `second`.
pub fn compound(first: Box<dyn NameMatcher>, second: Box<dyn NameMatcher>) -> CompoundMatcher {
    CompoundMatcher::new(first, second)
}

/// Builds a matcher that reports every occurrence of `pattern` in a name.
pub fn all_occurrences(pattern: &str, case: CaseSensitivity, hard_separators: &str) -> AllOccurrencesMatcher {
    AllOccurrencesMatcher::new(pattern, case, hard_separators)
}

/// Builds a matcher that also tries `pattern` as if typed on a QWERTY layout.
pub fn layout_fixing(pattern: &str, case: CaseSensitivity, hard_separators: &str) -> LayoutFixer {
    LayoutFixer::new(pattern, case, hard_separators)
}
