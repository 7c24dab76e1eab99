//! Camel-hump name matching.
//!
//! The pattern is matched left to right as a sequence of *fragments*: maximal
//! runs of pattern characters found contiguously in the name. Between
//! fragments the matcher may skip to the next word start of the name (or to
//! any position after an explicit `*`). When a choice leads nowhere it
//! backtracks and tries shorter fragments, so among all ways of splitting the
//! pattern the longest fragment at each step wins.
//!
//! # Example:
//! ```
//! use humpmatch::{CaseSensitivity, NameMatcher, Range};
//! use humpmatch::fuzzy_matcher::minuscule::MinusculeMatcher;
//!
//! let matcher = MinusculeMatcher::new("NPE", CaseSensitivity::FirstLetter, "");
//!
//! let fragments = matcher.matching_fragments("NullPointerException").unwrap();
//! assert_eq!(fragments, [Range::new(0, 1), Range::new(4, 5), Range::new(11, 12)]);
//! assert!(!matcher.matches("NoProblem"));
//! ```

use std::fmt::{Display, Error, Formatter};

use memchr::{memchr, memchr2};

use crate::fuzzy_matcher::pattern::CompiledPattern;
use crate::fuzzy_matcher::score::matching_degree;
use crate::fuzzy_matcher::typo;
use crate::fuzzy_matcher::util::{chars_equal_ignore_case, has_case, is_wildcard, is_word_start};
use crate::range::Range;
use crate::{CaseSensitivity, Fragments, NameMatcher};

/// Longer patterns are matched as plain substrings; camel-hump backtracking
/// on them gets too expensive.
pub const MAX_CAMEL_HUMP_MATCHING_LENGTH: usize = 100;

/// Upper bound on typos tolerated in a single match.
const MAX_TYPOS: usize = 3;

/// Ranges collected while the recursion unwinds, last fragment first.
type Reversed = Vec<Range>;

/// Matches names against a compiled pattern using camel-hump rules.
#[derive(Debug, Clone)]
pub struct MinusculeMatcher {
    pattern: CompiledPattern,
    /// Typos allowed per match; zero for exact matching.
    typo_budget: usize,
}

impl MinusculeMatcher {
    /// Creates an exact matcher.
    pub fn new(pattern: &str, case: CaseSensitivity, hard_separators: &str) -> Self {
        Self {
            pattern: CompiledPattern::new(pattern, case, hard_separators),
            typo_budget: 0,
        }
    }

    /// Creates a matcher that also accepts a few adjacent-key typos.
    ///
    /// One typo is allowed per four pattern characters, at most three.
    pub fn typo_tolerant(pattern: &str, case: CaseSensitivity, hard_separators: &str) -> Self {
        let pattern = CompiledPattern::new(pattern, case, hard_separators);
        let typo_budget = (pattern.min_name_length / 4).min(MAX_TYPOS);
        Self { pattern, typo_budget }
    }

    /// The compiled pattern.
    pub fn compiled(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Number of typos a single match may contain.
    pub fn typo_budget(&self) -> usize {
        self.typo_budget
    }

    /// Cheap O(n) check that every meaningful pattern character occurs in the
    /// name, in order.
    fn passes_fast_reject(&self, name: &[char]) -> bool {
        let meaningful = &self.pattern.meaningful;
        let mut cursor = 0;
        for &c in name {
            if cursor < meaningful.len()
                && (c == meaningful[cursor]
                    || c == meaningful[cursor + 1]
                    || self.typo_budget > 0 && typo::is_neighbor(meaningful[cursor], c))
            {
                cursor += 2;
            }
        }
        cursor >= self.pattern.min_name_length * 2
    }

    fn match_by_substring(&self, name: &[char]) -> Option<Fragments> {
        let infix = self.pattern.is_pattern_char(0, '*');
        let needle: Vec<char> = self.pattern.chars.iter().map(|pc| pc.ch).filter(|&c| !is_wildcard(c)).collect();
        if needle.is_empty() {
            return Some(vec![]);
        }
        if name.len() < needle.len() {
            return None;
        }
        if infix {
            let start = name.windows(needle.len()).position(|window| {
                window
                    .iter()
                    .zip(&needle)
                    .all(|(&n, &p)| chars_equal_ignore_case(n, p))
            })?;
            return Some(vec![Range::from_len(start, needle.len())]);
        }
        name.starts_with(&needle).then(|| vec![Range::from_len(0, needle.len())])
    }
}

impl NameMatcher for MinusculeMatcher {
    fn pattern(&self) -> &str {
        self.pattern.source()
    }

    fn matching_fragments(&self, name: &str) -> Option<Fragments> {
        let chars: Vec<char> = name.chars().collect();
        if chars.len() < self.pattern.min_name_length {
            return None;
        }

        if self.pattern.len() > MAX_CAMEL_HUMP_MATCHING_LENGTH {
            return self.match_by_substring(&chars);
        }

        if !self.passes_fast_reject(&chars) {
            trace!("fast reject: {name:?} against {}", self.pattern);
            return None;
        }

        let session = MatchSession {
            pattern: &self.pattern,
            ascii: name.is_ascii().then_some(name.as_bytes()),
            name: chars,
            typos: self.typo_budget > 0,
        };
        let mut ranges = session.match_wildcards(0, Some(0), self.typo_budget)?;
        ranges.reverse();
        Some(ranges)
    }

    fn matching_degree_with(&self, name: &str, value_start_case_match: bool, fragments: Option<&[Range]>) -> i32 {
        matching_degree(&self.pattern, name, value_start_case_match, fragments)
    }
}

impl Display for MinusculeMatcher {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        if self.typo_budget > 0 {
            write!(f, "(Typo: {})", self.pattern)
        } else {
            write!(f, "(Minuscule: {})", self.pattern)
        }
    }
}

//------------------------------------------------------------------------------
/// Per-call matching state. Never shared between calls.
struct MatchSession<'a> {
    pattern: &'a CompiledPattern,
    name: Vec<char>,
    /// The raw bytes when the name is pure ASCII, so char offsets are byte offsets.
    ascii: Option<&'a [u8]>,
    typos: bool,
}

impl MatchSession<'_> {
    /// Matches the pattern from `pi` against the name from `ni`.
    ///
    /// `errors` is the number of typos still allowed. Returns the fragments in
    /// reverse order.
    fn match_wildcards(&self, pi: usize, ni: Option<usize>, errors: usize) -> Option<Reversed> {
        let ni = ni?;
        let pattern = self.pattern;
        if !pattern.is_wildcard(pi) {
            if pi == pattern.len() {
                return Some(Reversed::new());
            }
            return self.match_fragment(pi, ni, errors);
        }

        let mut pi = pi;
        while pattern.is_wildcard(pi) {
            pi += 1;
        }

        if pi == pattern.len() {
            // a trailing space asks for the word to end here
            if pattern.is_trailing_space()
                && ni != self.name.len()
                && (pi < 2 || !is_upper_case_or_digit(pattern.chars[pi - 2].ch))
            {
                let space = self.index_of_space(ni)?;
                return Some(vec![Range::new(space, space)]);
            }
            return Some(Reversed::new());
        }

        let next = self.find_next_pattern_char_occurrence(ni, pi);
        self.match_skipping_words(pi, next, true, errors)
    }

    fn match_skipping_words(
        &self,
        pi: usize,
        mut ni: Option<usize>,
        allow_special_chars: bool,
        errors: usize,
    ) -> Option<Reversed> {
        let mut max_found = 0;
        while let Some(at) = ni {
            let fragment = if self.seems_like_fragment_start(pi, at) {
                self.max_matching_fragment(pi, at, errors)
            } else {
                0
            };

            // A fragment no longer than one already tried leaves the same pattern
            // tail for an even shorter name tail, which can only fail again.
            if fragment > max_found || at + fragment == self.name.len() && self.pattern.is_trailing_space() {
                if !self.is_middle_match(pi, at) {
                    max_found = fragment;
                }
                if let Some(ranges) = self.match_inside_fragment(pi, at, fragment, errors) {
                    return Some(ranges);
                }
            }

            let next = self.find_next_pattern_char_occurrence(at + 1, pi);
            ni = if allow_special_chars {
                next
            } else {
                self.check_for_special_chars(at, next, pi)
            };
        }
        None
    }

    fn find_next_pattern_char_occurrence(&self, start: usize, pi: usize) -> Option<usize> {
        if !self.pattern.follows(pi, '*') && !self.pattern.chars[pi].separator {
            self.index_of_word_start(pi, start)
        } else {
            self.index_of_ignore_case(start, pi)
        }
    }

    /// Rejects a skip from `start` to `end` over name characters the pattern
    /// does not allow to skip.
    fn check_for_special_chars(&self, start: usize, end: Option<usize>, pi: usize) -> Option<usize> {
        let end = end?;
        let pattern = self.pattern;
        let skipped = &self.name[start..end];

        // pattern humps may jump over hard separators, lowercase letters may not
        if !pattern.has_separators && !pattern.has_humps && skipped.iter().any(|c| pattern.hard_separators.contains(c))
        {
            return None;
        }
        // once the user typed a dot, other dots are not skipped between humps
        if pattern.has_dots && !pattern.follows(pi, '.') && skipped.contains(&'.') {
            return None;
        }
        Some(end)
    }

    fn seems_like_fragment_start(&self, pi: usize, at: usize) -> bool {
        let Some(&c) = self.name.get(at) else {
            return false;
        };
        // uppercase should match either uppercase or a word start
        !self.pattern.chars[pi].upper
            || c.is_uppercase()
            || is_word_start(&self.name, at)
            // unless there are no humps in the pattern and case is not enforced
            || !self.pattern.has_humps && self.pattern.case != CaseSensitivity::All
    }

    fn match_fragment(&self, pi: usize, ni: usize, errors: usize) -> Option<Reversed> {
        match self.max_matching_fragment(pi, ni, errors) {
            0 => None,
            fragment => self.match_inside_fragment(pi, ni, fragment, errors),
        }
    }

    /// Length of the longest run of pattern characters from `pi` found
    /// contiguously in the name from `ni`.
    fn max_matching_fragment(&self, pi: usize, ni: usize, errors: usize) -> usize {
        if !self.is_first_char_matching(ni, pi) {
            return 0;
        }

        let pattern = self.pattern;
        let ignore_case = pattern.ignore_case();
        let mut used = 0;
        let mut i = 1;
        while ni + i < self.name.len() && pi + i < pattern.len() {
            let c = self.name[ni + i];
            if !pattern.char_equals(pi + i, c, ignore_case) {
                if self.is_skipping_digit_between_pattern_digits(pi + i, c) {
                    return 0;
                }
                if used < errors && self.is_typo(pi + i, c) {
                    used += 1;
                    i += 1;
                    continue;
                }
                break;
            }
            if self.breaks_upper_case_run(pi + i, c) {
                break;
            }
            i += 1;
        }
        i
    }

    fn is_skipping_digit_between_pattern_digits(&self, pi: usize, c: char) -> bool {
        let chars = &self.pattern.chars;
        chars[pi].ch.is_numeric() && chars[pi - 1].ch.is_numeric() && c.is_numeric()
    }

    /// An uppercase pattern letter landing on a lowercase name letter after
    /// three or more uppercase pattern letters ends the fragment: the user is
    /// typing an acronym. The run is counted in the pattern, so it also holds
    /// for fragments starting inside it.
    fn breaks_upper_case_run(&self, pi: usize, c: char) -> bool {
        let chars = &self.pattern.chars;
        pi >= 3 && chars[pi].upper && c.is_lowercase() && chars[pi - 3..pi].iter().all(|pc| pc.upper)
    }

    fn is_typo(&self, pi: usize, c: char) -> bool {
        let pc = &self.pattern.chars[pi];
        self.typos && pc.ch.is_alphabetic() && typo::is_neighbor(pc.ch, c)
    }

    /// Typos inside the first `len` characters of the fragment at `(pi, ni)`.
    fn errors_in(&self, pi: usize, ni: usize, len: usize) -> usize {
        if !self.typos {
            return 0;
        }
        let ignore_case = self.pattern.ignore_case();
        (0..len)
            .filter(|&k| !self.pattern.char_equals(pi + k, self.name[ni + k], ignore_case))
            .count()
    }

    fn range(&self, pi: usize, ni: usize, len: usize) -> Range {
        Range::with_errors(ni, ni + len, self.errors_in(pi, ni, len))
    }

    /// Decides how much of the fragment at `(pi, ni)` of length `fragment` to
    /// consume.
    fn match_inside_fragment(&self, pi: usize, ni: usize, fragment: usize, errors: usize) -> Option<Reversed> {
        // exact middle matches have to be at least of length 3, to prevent too many irrelevant matches
        let min_fragment = if self.is_middle_match(pi, ni) { 3 } else { 1 };

        self.improve_camel_humps(pi, ni, fragment, min_fragment, errors)
            .or_else(|| self.find_longest_matching_prefix(pi, ni, fragment, min_fragment, errors))
    }

    fn is_middle_match(&self, pi: usize, ni: usize) -> bool {
        self.pattern.follows(pi, '*')
            && !self.pattern.is_wildcard(pi + 1)
            && self.name.get(ni).is_some_and(|c| c.is_alphanumeric())
            && !is_word_start(&self.name, ni)
    }

    fn find_longest_matching_prefix(
        &self,
        pi: usize,
        ni: usize,
        fragment: usize,
        min_fragment: usize,
        errors: usize,
    ) -> Option<Reversed> {
        let pattern = self.pattern;
        if pi + fragment >= pattern.len() {
            return Some(vec![self.range(pi, ni, fragment)]);
        }

        // try to match the remainder of pattern with the remainder of name
        // it may not succeed with the longest matching fragment, then try shorter matches
        let mut i = fragment;
        while i >= min_fragment || i > 0 && pattern.is_wildcard(pi + i) {
            let head = self.range(pi, ni, i);
            let left = errors - head.error_count();
            let ranges = if pattern.is_wildcard(pi + i) {
                self.match_wildcards(pi + i, Some(ni + i), left)
            } else {
                self.match_skipping_words(pi + i, Some(ni + i), false, left)
            };
            if let Some(ranges) = ranges {
                return Some(prepend_range(ranges, head));
            }
            i -= 1;
        }
        None
    }

    /// When the pattern is `CU` and the name is `CurrentUser`, the prefix `Cu`
    /// matches already, but the uppercase `U` found further gives a better
    /// match.
    fn improve_camel_humps(
        &self,
        pi: usize,
        ni: usize,
        max_fragment: usize,
        min_fragment: usize,
        errors: usize,
    ) -> Option<Reversed> {
        for i in min_fragment..max_fragment {
            if self.is_upper_case_pattern_vs_lower_case_name_char(pi + i, ni + i) {
                let head = self.range(pi, ni, i);
                let left = errors - head.error_count();
                if let Some(ranges) = self.find_upper_case_match_further(pi + i, ni + i, left) {
                    return Some(prepend_range(ranges, head));
                }
            }
        }
        None
    }

    fn is_upper_case_pattern_vs_lower_case_name_char(&self, pi: usize, ni: usize) -> bool {
        let pc = &self.pattern.chars[pi];
        pc.upper && pc.ch != self.name[ni]
    }

    fn find_upper_case_match_further(&self, pi: usize, ni: usize, errors: usize) -> Option<Reversed> {
        let next_word_start = self.index_of_word_start(pi, ni);
        self.match_wildcards(pi, next_word_start, errors)
    }

    fn is_first_char_matching(&self, ni: usize, pi: usize) -> bool {
        let Some(&c) = self.name.get(ni) else {
            return false;
        };
        let pattern = self.pattern;
        if !pattern.char_equals(pi, c, pattern.ignore_case()) {
            return false;
        }

        let pattern_char = pattern.chars[pi].ch;
        !(pattern.case == CaseSensitivity::FirstLetter
            && (pi == 0 || pi == 1 && pattern.is_wildcard(0))
            && has_case(pattern_char)
            && pattern_char.is_uppercase() != self.name[0].is_uppercase())
    }

    fn index_of_word_start(&self, pi: usize, start: usize) -> Option<usize> {
        let pattern = self.pattern;
        let pc = &pattern.chars[pi];
        // lowercase letters of a humped pattern continue the current word
        if start >= self.name.len() || pattern.has_humps && pc.lower && !(pi > 0 && pattern.chars[pi - 1].separator) {
            return None;
        }
        let mut next = start;
        loop {
            next = self.index_of_ignore_case(next, pi)?;
            if is_word_start(&self.name, next) {
                return Some(next);
            }
            next += 1;
        }
    }

    fn index_of_ignore_case(&self, from: usize, pi: usize) -> Option<usize> {
        if from >= self.name.len() {
            return None;
        }
        let pc = &self.pattern.chars[pi];
        if let Some(bytes) = self.ascii
            && pc.ch.is_ascii()
        {
            return memchr2(pc.to_upper as u8, pc.to_lower as u8, &bytes[from..]).map(|i| i + from);
        }
        self.name[from..]
            .iter()
            .position(|&c| chars_equal_ignore_case(c, pc.ch))
            .map(|i| i + from)
    }

    fn index_of_space(&self, from: usize) -> Option<usize> {
        match self.ascii {
            Some(bytes) => memchr(b' ', &bytes[from..]).map(|i| i + from),
            None => self.name[from..].iter().position(|&c| c == ' ').map(|i| i + from),
        }
    }
}

fn is_upper_case_or_digit(c: char) -> bool {
    c.is_uppercase() || c.is_numeric()
}

/// Puts `head` in front of the already matched tail, merging when they touch.
fn prepend_range(mut tail: Reversed, head: Range) -> Reversed {
    match tail.last_mut() {
        Some(first) if first.start() == head.end() => *first = head.join(*first),
        _ => tail.push(head),
    }
    tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy_matcher::util::wrap_ranges;

    fn matcher(pattern: &str) -> MinusculeMatcher {
        MinusculeMatcher::new(pattern, CaseSensitivity::None, "")
    }

    fn wrap(pattern: &str, name: &str) -> Option<String> {
        let ranges = matcher(pattern).matching_fragments(name)?;
        Some(wrap_ranges(name, &ranges))
    }

    #[test]
    fn camel_humps() {
        assert_eq!(wrap("NPE", "NullPointerException").unwrap(), "[N]ull[P]ointer[E]xception");
        assert_eq!(wrap("CU", "CurrentUser").unwrap(), "[C]urrent[U]ser");
        assert_eq!(wrap("nuPoEx", "NullPointerException").unwrap(), "[Nu]ll[Po]inter[Ex]ception");
    }

    #[test]
    fn anchored_at_name_start() {
        assert_eq!(wrap("foo", "barFoo"), None);
        assert_eq!(wrap("*foo", "barFoo").unwrap(), "bar[Foo]");
    }

    #[test]
    fn lowercase_pattern_jumps_to_word_starts() {
        assert_eq!(wrap("fb", "fooBar").unwrap(), "[f]oo[B]ar");
        assert_eq!(wrap("fb", "foo_bar").unwrap(), "[f]oo_[b]ar");
        assert_eq!(wrap("fa", "fooBar"), None);
    }

    #[test]
    fn empty_and_wildcard_patterns() {
        assert_eq!(matcher("").matching_fragments("anything"), Some(vec![]));
        assert_eq!(matcher("*").matching_fragments("anything"), Some(vec![]));
        assert_eq!(matcher("").matching_fragments(""), Some(vec![]));
        assert_eq!(matcher("a").matching_fragments(""), None);
    }

    #[test]
    fn interior_space_forces_word_boundary() {
        assert_eq!(wrap("a b", "apple banana").unwrap(), "[a]pple [b]anana");
    }

    #[test]
    fn trailing_space() {
        assert_eq!(wrap("foo ", "foo bar").unwrap(), "[foo ]bar");
        assert_eq!(wrap("foo ", "foo").unwrap(), "[foo]");
        assert_eq!(wrap("foo ", "foobar"), None);
        assert_eq!(
            matcher("foo ").matching_fragments("foo_bar baz"),
            Some(vec![Range::new(0, 3), Range::new(7, 7)])
        );
    }

    #[test]
    fn trailing_space_after_upper_case_or_digit() {
        // an uppercase letter or digit already marks the hump, no space needed
        assert_eq!(
            matcher("fB ").matching_fragments("fooBar baz"),
            Some(vec![Range::new(0, 1), Range::new(3, 4)])
        );
        assert_eq!(
            matcher("fB ").matching_fragments("fooBar"),
            Some(vec![Range::new(0, 1), Range::new(3, 4)])
        );
        assert_eq!(wrap("v2 ", "v2Beta").unwrap(), "[v2]Beta");

        assert_eq!(
            matcher("fb ").matching_fragments("fooBar baz"),
            Some(vec![Range::new(0, 1), Range::new(3, 4), Range::new(6, 6)])
        );
        assert_eq!(matcher("fb ").matching_fragments("fooBar"), None);
    }

    #[test]
    fn upper_case_run_does_not_match_lower_case() {
        let acronym = |p: &str| MinusculeMatcher::new(p, CaseSensitivity::FirstLetter, "");
        assert_eq!(acronym("xURLC").matching_fragments("xURLconnection"), None);
        assert_eq!(
            acronym("xURLC").matching_fragments("xURLConnection"),
            Some(vec![Range::new(0, 5)])
        );
        assert_eq!(acronym("ABCD").matching_fragments("ABCdef"), Some(vec![Range::new(0, 4)]));
    }

    #[test]
    fn middle_matches_need_three_chars() {
        assert!(matcher("*ab").matches("xaby"));
        assert!(matcher("*abc").matches("xabc"));
        assert!(!matcher("*abc").matches("xabyc"));
    }

    #[test]
    fn digits_do_not_extend_across_humps() {
        assert!(!matcher("a12").matches("a13_2"));
        assert_eq!(wrap("a12", "a1_2").unwrap(), "[a1]_[2]");
    }

    #[test]
    fn hard_separators_block_lowercase_skips() {
        assert!(matcher("ab").matches("a.b"));
        let qualified = MinusculeMatcher::new("ab", CaseSensitivity::None, ".");
        assert!(!qualified.matches("a.b"));
        assert!(MinusculeMatcher::new("a.b", CaseSensitivity::None, ".").matches("a.b"));
    }

    #[test]
    fn leading_space_lets_lowercase_skip_hard_separators() {
        let spaced = MinusculeMatcher::new(" ab", CaseSensitivity::None, ".");
        assert_eq!(spaced.matching_fragments("a.b"), Some(vec![Range::new(0, 1), Range::new(2, 3)]));
        assert!(!MinusculeMatcher::new("ab", CaseSensitivity::None, ".").matches("a.b"));
    }

    #[test]
    fn case_sensitivity() {
        let all = MinusculeMatcher::new("foo", CaseSensitivity::All, "");
        assert_eq!(all.matching_fragments("foo"), Some(vec![Range::new(0, 3)]));
        assert!(!MinusculeMatcher::new("Foo", CaseSensitivity::All, "").matches("foo"));
        assert!(MinusculeMatcher::new("Foo", CaseSensitivity::None, "").matches("foo"));

        let first_letter = |p: &str| MinusculeMatcher::new(p, CaseSensitivity::FirstLetter, "");
        assert!(!first_letter("foo").matches("Foo"));
        assert!(first_letter("Foo").matches("Foo"));
        assert!(first_letter("fOO").matches("foo"));
        assert!(!first_letter("*foo").matches("Foo"));
    }

    #[test]
    fn ascii_and_unicode_names_agree() {
        let m = matcher("*hw");
        assert_eq!(wrap_ranges("HelloWorld", &m.matching_fragments("HelloWorld").unwrap()), "[H]ello[W]orld");
        assert_eq!(wrap_ranges("HélloWörld", &m.matching_fragments("HélloWörld").unwrap()), "[H]éllo[W]örld");
    }

    #[test]
    fn long_patterns_match_as_substrings() {
        let word = "abcdefghij".repeat(11);
        let name = format!("xx{word}yy");
        let infix = matcher(&format!("*{}", word.to_uppercase()));
        assert_eq!(infix.matching_fragments(&name), Some(vec![Range::from_len(2, word.len())]));
        let prefix = matcher(&word);
        assert_eq!(prefix.matching_fragments(&name), None);
        assert_eq!(prefix.matching_fragments(&word), Some(vec![Range::from_len(0, word.len())]));
    }

    #[test]
    fn typos_are_counted() {
        let m = MinusculeMatcher::typo_tolerant("sonething", CaseSensitivity::None, "");
        assert_eq!(m.typo_budget(), 2);
        assert_eq!(m.matching_fragments("something"), Some(vec![Range::with_errors(0, 9, 1)]));
        assert!(!matcher("sonething").matches("something"));
    }

    #[test]
    fn typo_budget_is_bounded() {
        let m = MinusculeMatcher::typo_tolerant("sinetjing", CaseSensitivity::None, "");
        assert_eq!(m.typo_budget(), 2);
        // three neighbour substitutions
        assert!(!m.matches("something"));
        let short = MinusculeMatcher::typo_tolerant("fpo", CaseSensitivity::None, "");
        assert_eq!(short.typo_budget(), 0);
        assert!(!short.matches("foo"));
    }

    #[test]
    fn display() {
        assert_eq!(matcher("NPE").to_string(), "(Minuscule: NPE)");
        assert_eq!(
            MinusculeMatcher::typo_tolerant("NPE", CaseSensitivity::None, "").to_string(),
            "(Typo: NPE)"
        );
    }
}
