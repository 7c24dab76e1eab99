use std::fmt::{Display, Error, Formatter};

use crate::engine::layout::LayoutFixer;
use crate::fuzzy_matcher::util::is_wildcard;
use crate::range::{Range, push_merged};
use crate::{CaseSensitivity, Fragments, NameMatcher};

//------------------------------------------------------------------------------
/// Reports every non-overlapping occurrence of a pattern in a name.
///
/// The pattern is matched anywhere in the name (a leading `*` is implied),
/// then again on the rest of the name after each occurrence.
pub struct AllOccurrencesMatcher {
    /// Matches the whole name.
    head: LayoutFixer,
    /// Matches what is left after an occurrence. The first letter of a tail is
    /// not the first letter of the name, so it never has to match its case.
    tail: LayoutFixer,
}

impl AllOccurrencesMatcher {
    /// Creates a matcher enumerating every occurrence of `pattern`
    pub fn new(pattern: &str, case: CaseSensitivity, hard_separators: &str) -> Self {
        let pattern = match pattern.chars().next() {
            Some(c) if is_wildcard(c) => pattern.to_string(),
            _ => format!("*{pattern}"),
        };
        let tail_case = match case {
            CaseSensitivity::FirstLetter => CaseSensitivity::None,
            other => other,
        };
        Self {
            head: LayoutFixer::new(&pattern, case, hard_separators),
            tail: LayoutFixer::new(&pattern, tail_case, hard_separators),
        }
    }
}

impl NameMatcher for AllOccurrencesMatcher {
    fn pattern(&self) -> &str {
        self.head.pattern()
    }

    fn matching_fragments(&self, name: &str) -> Option<Fragments> {
        let first = self.head.matching_fragments(name)?;
        if first.is_empty() {
            return Some(first);
        }

        let mut all = Fragments::new();
        let mut found = first;
        let mut offset = 0;
        let mut rest = name;
        loop {
            for range in &found {
                push_merged(&mut all, range.shift_right(offset));
            }
            let end = all.last().map_or(offset, Range::end);
            if end <= offset {
                // only zero-width ranges, nothing to skip
                break;
            }
            let Some((byte, _)) = rest.char_indices().nth(end - offset) else {
                break;
            };
            rest = &rest[byte..];
            offset = end;
            match self.tail.matching_fragments(rest) {
                Some(next) if !next.is_empty() => found = next,
                _ => break,
            }
        }
        trace!("{} occurrences of {} in {name:?}", all.len(), self.head.pattern());
        Some(all)
    }

    fn matching_degree_with(&self, name: &str, value_start_case_match: bool, fragments: Option<&[Range]>) -> i32 {
        self.head.matching_degree_with(name, value_start_case_match, fragments)
    }
}

impl Display for AllOccurrencesMatcher {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(All: {})", self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy_matcher::util::wrap_ranges;

    fn all(pattern: &str, name: &str) -> Option<String> {
        let matcher = AllOccurrencesMatcher::new(pattern, CaseSensitivity::FirstLetter, "");
        let ranges = matcher.matching_fragments(name)?;
        Some(wrap_ranges(name, &ranges))
    }

    #[test]
    fn every_occurrence() {
        let matcher = AllOccurrencesMatcher::new("ab", CaseSensitivity::None, "");
        assert_eq!(
            matcher.matching_fragments("abXabYab"),
            Some(vec![Range::new(0, 2), Range::new(3, 5), Range::new(6, 8)])
        );
    }

    #[test]
    fn tails_ignore_first_letter_case() {
        assert_eq!(all("foo", "fooBarFoo").unwrap(), "[foo]Bar[Foo]");
        assert_eq!(all("foo", "barFoo").unwrap(), "bar[Foo]");
    }

    #[test]
    fn touching_occurrences_merge() {
        assert_eq!(all("ab", "abab").unwrap(), "[abab]");
    }

    #[test]
    fn no_match() {
        assert_eq!(all("xyz", "abXabYab"), None);
        assert_eq!(all("", "abc").as_deref(), Some("abc"));
    }

    #[test]
    fn pattern_gets_leading_wildcard() {
        let matcher = AllOccurrencesMatcher::new("ab", CaseSensitivity::None, "");
        assert_eq!(matcher.pattern(), "*ab");
        assert_eq!(AllOccurrencesMatcher::new(" ab", CaseSensitivity::None, "").pattern(), " ab");
    }
}
