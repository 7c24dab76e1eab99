//! Wrong-keyboard-layout correction.
//!
//! A pattern typed while the keyboard was switched to another layout (`ыщьу`
//! instead of `some`) is translated key by key back to QWERTY and matched as
//! well.

use std::fmt::{Display, Error, Formatter};

use crate::engine::compound::CompoundMatcher;
use crate::range::Range;
use crate::{CaseSensitivity, Fragments, MinusculeMatcher, NameMatcher};

/// Maps a character typed on some keyboard layout to the ASCII character on
/// the same key of a QWERTY keyboard.
pub trait KeyboardLayout {
    /// The QWERTY character on the key that produces `c`, if any
    fn to_ascii(&self, c: char) -> Option<char>;
}

impl<F> KeyboardLayout for F
where
    F: Fn(char) -> Option<char>,
{
    fn to_ascii(&self, c: char) -> Option<char> {
        self(c)
    }
}

const RU_LOWER: &str = "йцукенгшщзхъфывапролджэячсмитьбюё";
const EN_LOWER: &str = "qwertyuiop[]asdfghjkl;'zxcvbnm,.`";
const RU_UPPER: &str = "ЙЦУКЕНГШЩЗХЪФЫВАПРОЛДЖЭЯЧСМИТЬБЮЁ";
const EN_UPPER: &str = "QWERTYUIOP{}ASDFGHJKL:\"ZXCVBNM<>~";

/// The Russian ЙЦУКЕН layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct RussianLayout;

impl KeyboardLayout for RussianLayout {
    fn to_ascii(&self, c: char) -> Option<char> {
        let lookup = |from: &str, to: &str| from.chars().zip(to.chars()).find(|&(k, _)| k == c).map(|(_, v)| v);
        lookup(RU_LOWER, EN_LOWER).or_else(|| lookup(RU_UPPER, EN_UPPER))
    }
}

/// Translates `pattern` through `layout` when every letter in it is non-ASCII.
///
/// Returns `None` when the pattern has no letters or contains an ASCII letter,
/// i.e. when it was most likely typed on the intended layout. Characters the
/// layout does not know are kept.
pub fn fix_layout(pattern: &str, layout: &impl KeyboardLayout) -> Option<String> {
    let mut letters = pattern.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek()?;
    if letters.any(|c| c.is_ascii()) {
        return None;
    }
    Some(pattern.chars().map(|c| layout.to_ascii(c).unwrap_or(c)).collect())
}

//------------------------------------------------------------------------------
/// Matches a pattern as typed and, failing that, as typed on QWERTY.
pub struct LayoutFixer {
    pattern: String,
    inner: Box<dyn NameMatcher>,
}

impl LayoutFixer {
    /// Creates a layout fixer using the built-in Russian layout
    pub fn new(pattern: &str, case: CaseSensitivity, hard_separators: &str) -> Self {
        Self::with_layout(pattern, case, hard_separators, &RussianLayout)
    }

    /// Creates a layout fixer translating through `layout`
    pub fn with_layout(
        pattern: &str,
        case: CaseSensitivity,
        hard_separators: &str,
        layout: &impl KeyboardLayout,
    ) -> Self {
        let primary = Box::new(MinusculeMatcher::new(pattern, case, hard_separators));
        let inner: Box<dyn NameMatcher> = match fix_layout(pattern, layout) {
            Some(fixed) => {
                debug!("layout-fixed pattern {pattern:?} -> {fixed:?}");
                let fixed = Box::new(MinusculeMatcher::new(&fixed, case, hard_separators));
                Box::new(CompoundMatcher::new(primary, fixed))
            }
            None => primary,
        };
        Self {
            pattern: pattern.to_string(),
            inner,
        }
    }
}

impl NameMatcher for LayoutFixer {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn matching_fragments(&self, name: &str) -> Option<Fragments> {
        self.inner.matching_fragments(name)
    }

    fn matches(&self, name: &str) -> bool {
        self.inner.matches(name)
    }

    fn matching_degree_with(&self, name: &str, value_start_case_match: bool, fragments: Option<&[Range]>) -> i32 {
        self.inner.matching_degree_with(name, value_start_case_match, fragments)
    }

    fn matching_degree(&self, name: &str, value_start_case_match: bool) -> i32 {
        self.inner.matching_degree(name, value_start_case_match)
    }
}

impl Display for LayoutFixer {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Layout: {})", self.inner)
    }
}
