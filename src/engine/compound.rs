use std::fmt::{Display, Error, Formatter};

use crate::range::Range;
use crate::{Fragments, NameMatcher};

//------------------------------------------------------------------------------
// CompoundMatcher, a combinator
/// Logical OR of two matchers; the first one wins when both match.
pub struct CompoundMatcher {
    first: Box<dyn NameMatcher>,
    second: Box<dyn NameMatcher>,
}

impl CompoundMatcher {
    /// Creates a matcher trying `first`, then `second`
    pub fn new(first: Box<dyn NameMatcher>, second: Box<dyn NameMatcher>) -> Self {
        Self { first, second }
    }

    /// Returns the matcher that decides for `name` along with its fragments.
    ///
    /// A trivial (empty) match of the first matcher only wins when the second
    /// one does not match at all.
    fn pick(&self, name: &str) -> (&dyn NameMatcher, Option<Fragments>) {
        let fragments = self.first.matching_fragments(name);
        if fragments.as_ref().is_some_and(|f| !f.is_empty()) {
            return (self.first.as_ref(), fragments);
        }
        match self.second.matching_fragments(name) {
            Some(second) => (self.second.as_ref(), Some(second)),
            None => (self.first.as_ref(), fragments),
        }
    }
}

impl NameMatcher for CompoundMatcher {
    fn pattern(&self) -> &str {
        self.first.pattern()
    }

    fn matching_fragments(&self, name: &str) -> Option<Fragments> {
        self.pick(name).1
    }

    fn matches(&self, name: &str) -> bool {
        self.first.matches(name) || self.second.matches(name)
    }

    fn matching_degree_with(&self, name: &str, value_start_case_match: bool, fragments: Option<&[Range]>) -> i32 {
        let (matcher, _) = self.pick(name);
        matcher.matching_degree_with(name, value_start_case_match, fragments)
    }

    fn matching_degree(&self, name: &str, value_start_case_match: bool) -> i32 {
        let (matcher, fragments) = self.pick(name);
        matcher.matching_degree_with(name, value_start_case_match, fragments.as_deref())
    }
}

impl Display for CompoundMatcher {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Compound: {}, {})", self.first, self.second)
    }
}
