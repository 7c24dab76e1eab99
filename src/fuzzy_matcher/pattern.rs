//! Pattern compilation.
//!
//! Every pattern character is classified once, up front, so the matching
//! loops only read precomputed flags. The compiled pattern is immutable and can
//! be shared freely between threads.

use std::fmt::{Display, Error, Formatter};

use crate::CaseSensitivity;
use crate::fuzzy_matcher::util::{is_wildcard, is_word_separator, to_lower, to_upper};

/// Suffix stripped from every pattern; a trailing `*` followed by a space is
/// implied anyway.
const TRIMMED_SUFFIX: &str = "* ";

/// Classification of a single pattern character.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PatternChar {
    pub ch: char,
    pub lower: bool,
    pub upper: bool,
    pub separator: bool,
    pub to_upper: char,
    pub to_lower: char,
}

impl PatternChar {
    fn new(ch: char) -> Self {
        Self {
            ch,
            lower: ch.is_lowercase(),
            upper: ch.is_uppercase(),
            separator: is_word_separator(ch),
            to_upper: to_upper(ch),
            to_lower: to_lower(ch),
        }
    }
}

/// A pattern prepared for matching against many names.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    pub(crate) chars: Vec<PatternChar>,
    /// Lower and upper form of every non-wildcard character, in pattern order.
    pub(crate) meaningful: Vec<char>,
    pub(crate) min_name_length: usize,
    pub(crate) has_humps: bool,
    pub(crate) has_separators: bool,
    pub(crate) has_dots: bool,
    pub(crate) hard_separators: Vec<char>,
    pub(crate) case: CaseSensitivity,
}

impl CompiledPattern {
    /// Compiles `pattern`. Any string compiles, including the empty one.
    ///
    /// `hard_separators` lists the name characters (such as `.` in qualified
    /// names) that lowercase pattern letters may not silently skip over.
    pub fn new(pattern: &str, case: CaseSensitivity, hard_separators: &str) -> Self {
        let trimmed = pattern.strip_suffix(TRIMMED_SUFFIX).unwrap_or(pattern);
        let chars: Vec<PatternChar> = trimmed.chars().map(PatternChar::new).collect();

        let meaningful: Vec<char> = chars
            .iter()
            .filter(|pc| !is_wildcard(pc.ch))
            .flat_map(|pc| [pc.to_lower, pc.to_upper])
            .collect();

        let first = chars.iter().position(|pc| !is_wildcard(pc.ch)).unwrap_or(chars.len());
        let rest = &chars[first..];
        let has_humps = rest.iter().skip(1).any(|pc| pc.upper) && rest.iter().any(|pc| pc.lower);
        let has_separators = chars.iter().any(|pc| pc.separator);
        let has_dots = rest.iter().any(|pc| pc.ch == '.');

        Self {
            source: pattern.to_string(),
            min_name_length: meaningful.len() / 2,
            chars,
            meaningful,
            has_humps,
            has_separators,
            has_dots,
            hard_separators: hard_separators.chars().collect(),
            case,
        }
    }

    /// The pattern as it was given, before trimming.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of pattern characters left after trimming.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when nothing is left after trimming.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Names with fewer characters than this can never match.
    pub fn min_name_length(&self) -> usize {
        self.min_name_length
    }

    /// Both-case forms of every non-wildcard character, used by the fast reject.
    pub fn meaningful_chars(&self) -> &[char] {
        &self.meaningful
    }

    /// An uppercase letter follows a lowercase one (leading wildcards ignored).
    pub fn has_humps(&self) -> bool {
        self.has_humps
    }

    /// The pattern contains a word separator such as `_` or `.`.
    pub fn has_separators(&self) -> bool {
        self.has_separators
    }

    /// The pattern contains a literal dot.
    pub fn has_dots(&self) -> bool {
        self.has_dots
    }

    /// Case sensitivity the pattern was compiled with.
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case
    }

    #[inline]
    pub(crate) fn ignore_case(&self) -> bool {
        self.case != CaseSensitivity::All
    }

    #[inline]
    pub(crate) fn is_wildcard(&self, index: usize) -> bool {
        self.chars.get(index).is_some_and(|pc| is_wildcard(pc.ch))
    }

    #[inline]
    pub(crate) fn is_pattern_char(&self, index: usize, c: char) -> bool {
        self.chars.get(index).is_some_and(|pc| pc.ch == c)
    }

    /// The character right before `index` is `c`.
    #[inline]
    pub(crate) fn follows(&self, index: usize, c: char) -> bool {
        index > 0 && self.is_pattern_char(index - 1, c)
    }

    pub(crate) fn is_trailing_space(&self) -> bool {
        self.chars.last().is_some_and(|pc| pc.ch == ' ')
    }

    #[inline]
    pub(crate) fn char_equals(&self, index: usize, c: char, ignore_case: bool) -> bool {
        let pc = &self.chars[index];
        pc.ch == c || ignore_case && (pc.to_lower == c || pc.to_upper == c)
    }

    /// First pattern position at or after `from` whose character equals `c`
    /// ignoring case.
    pub(crate) fn index_of_ignore_case(&self, c: char, from: usize) -> Option<usize> {
        let lower = to_lower(c);
        let upper = to_upper(c);
        self.chars
            .iter()
            .skip(from)
            .position(|pc| pc.ch == c || pc.to_lower == lower || pc.to_upper == upper)
            .map(|i| i + from)
    }
}

impl Display for CompiledPattern {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.source)
    }
}
