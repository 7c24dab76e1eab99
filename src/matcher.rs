//! This module contains the ranking coordinator
use std::cmp::Ordering as CmpOrd;

use rayon::prelude::*;

use crate::{Fragments, NameMatcher};

//==============================================================================
/// A name that matched, with everything needed to rank and highlight it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedName {
    /// Position of the name in the ranked input
    pub index: usize,
    /// The name itself
    pub name: String,
    /// Matching degree, higher is better
    pub degree: i32,
    /// The match begins at the first character of the name
    pub start_match: bool,
    /// The matched fragments of the name
    pub fragments: Fragments,
}

fn cmp_ignore_case(a: &str, b: &str) -> CmpOrd {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

impl Ord for MatchedName {
    /// Best first: start matches, then higher degree, then by name ignoring
    /// case, then input order.
    fn cmp(&self, other: &Self) -> CmpOrd {
        other
            .start_match
            .cmp(&self.start_match)
            .then_with(|| other.degree.cmp(&self.degree))
            .then_with(|| cmp_ignore_case(&self.name, &other.name))
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for MatchedName {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrd> {
        Some(self.cmp(other))
    }
}

//==============================================================================
/// Matches and ranks many names against one matcher, in parallel.
pub struct Ranker {
    matcher: Box<dyn NameMatcher>,
    value_start_case_match: bool,
}

impl Ranker {
    /// Creates a Ranker builder around `matcher`.
    pub fn builder(matcher: Box<dyn NameMatcher>) -> Self {
        Self {
            matcher,
            value_start_case_match: false,
        }
    }

    /// Rewards names whose first letter matches the pattern's case exactly.
    ///
    /// Useful where case distinguishes kinds of names, like type names
    /// starting with a capital.
    pub fn value_start_case_match(mut self, value_start_case_match: bool) -> Self {
        self.value_start_case_match = value_start_case_match;
        self
    }

    /// Finalizes the builder and returns the configured Ranker.
    pub fn build(self) -> Self {
        self
    }

    /// Returns the matcher names are ranked with.
    pub fn matcher(&self) -> &dyn NameMatcher {
        self.matcher.as_ref()
    }

    /// Matches `name` alone; `index` is recorded as is.
    pub fn match_name(&self, index: usize, name: &str) -> Option<MatchedName> {
        let fragments = self.matcher.matching_fragments(name)?;
        let degree = self
            .matcher
            .matching_degree_with(name, self.value_start_case_match, Some(&fragments));
        Some(MatchedName {
            index,
            name: name.to_string(),
            degree,
            start_match: fragments.first().is_some_and(|range| range.start() == 0),
            fragments,
        })
    }

    /// Matches every name and returns the matching ones, best first.
    pub fn rank<S>(&self, names: &[S]) -> Vec<MatchedName>
    where
        S: AsRef<str> + Sync,
    {
        trace!("ranker start, total: {}", names.len());
        let mut matched: Vec<MatchedName> = names
            .par_iter()
            .enumerate()
            .filter_map(|(index, name)| self.match_name(index, name.as_ref()))
            .collect();
        matched.par_sort_unstable();
        trace!("ranker stop, total matched: {}", matched.len());
        matched
    }
}
