//! Ranking of successful matches.
//!
//! The score is a sum of independent terms. Their magnitudes are tuned against
//! each other (a word-start match always beats any sum of case bonuses, one
//! skipped hump costs more than a fragment) so they have to stay as they are.

use crate::fuzzy_matcher::pattern::CompiledPattern;
use crate::fuzzy_matcher::util::{is_word_start, next_word};
use crate::range::Range;

const WORD_START_BONUS: i32 = 1000;
const UPPER_CASE_MATCH: i32 = 50;
const START_CASE_MATCH: i32 = 150;
const SKIPPED_HUMP_PENALTY: i32 = 10;
const NO_HARD_SEPARATOR_BONUS: i32 = 2;
const TYPO_PENALTY: i32 = 100;

/// Scores `fragments` of `name`; higher is better.
///
/// `None` scores `i32::MIN` and a wildcard-only match scores zero.
/// `value_start_case_match` rewards an exact-case hit on the very first
/// character of the name.
pub fn matching_degree(
    pattern: &CompiledPattern,
    name: &str,
    value_start_case_match: bool,
    fragments: Option<&[Range]>,
) -> i32 {
    let Some(fragments) = fragments else {
        return i32::MIN;
    };
    let (Some(first), Some(last)) = (fragments.first(), fragments.last()) else {
        return 0;
    };

    let name: Vec<char> = name.chars().collect();
    let start_match = first.start() == 0;
    let mut case = CaseScore {
        pattern,
        valued_start_match: start_match && value_start_case_match,
        hump_start_matched_upper_case: false,
    };

    let mut matching_case = 0;
    let mut skipped_humps = 0;
    let mut next_hump_start = 0;
    let mut p: Option<usize> = None;

    for (k, range) in fragments.iter().enumerate() {
        for i in range.start()..range.end().min(name.len()) {
            let after_gap = i == range.start() && k > 0;
            let mut is_hump_start = false;
            while next_hump_start <= i {
                if next_hump_start == i {
                    is_hump_start = true;
                } else if after_gap {
                    skipped_humps += 1;
                }
                next_hump_start = if name[i].is_numeric() {
                    i + 1
                } else {
                    next_word(&name, next_hump_start)
                };
            }

            let c = name[i];
            let from = p.map_or(0, |p| p + 1);
            if range.error_count() > 0
                && i > range.start()
                && from < pattern.len()
                && !pattern.is_wildcard(from)
                && !pattern.char_equals(from, c, true)
            {
                // a typo stands in for the next pattern character
                p = Some(from);
                continue;
            }
            let Some(at) = pattern.index_of_ignore_case(c, from) else {
                continue;
            };
            p = Some(at);

            if is_hump_start {
                let pc = &pattern.chars[at];
                case.hump_start_matched_upper_case = c == pc.ch && pc.upper;
            }
            matching_case += case.evaluate(at, i, after_gap, is_hump_start, c);
        }
    }

    let start = first.start();
    let after_separator = name[..start.min(name.len())]
        .iter()
        .any(|c| pattern.hard_separators.contains(c));
    let word_start = start == 0 || is_word_start(&name, start) && !is_word_start(&name, start - 1);
    let final_match = last.end() == name.len();
    let errors: usize = fragments.iter().map(Range::error_count).sum();

    let mut degree = matching_case - fragments.len() as i32 - skipped_humps * SKIPPED_HUMP_PENALTY;
    if word_start {
        degree += WORD_START_BONUS;
    }
    if !after_separator {
        degree += NO_HARD_SEPARATOR_BONUS;
    }
    if start_match {
        degree += 1;
    }
    if final_match {
        degree += 1;
    }
    degree - errors as i32 * TYPO_PENALTY
}

struct CaseScore<'a> {
    pattern: &'a CompiledPattern,
    valued_start_match: bool,
    hump_start_matched_upper_case: bool,
}

impl CaseScore<'_> {
    fn evaluate(&self, pi: usize, ni: usize, after_gap: bool, is_hump_start: bool, c: char) -> i32 {
        let pc = &self.pattern.chars[pi];
        if after_gap && is_hump_start && pc.lower {
            // a hump the pattern did not ask for
            return -10;
        }
        if c == pc.ch {
            if pc.upper {
                // the user pressed Shift on purpose
                return UPPER_CASE_MATCH;
            }
            if ni == 0 && self.valued_start_match {
                return START_CASE_MATCH;
            }
            if is_hump_start {
                return 1;
            }
        } else if is_hump_start || pc.lower && self.hump_start_matched_upper_case {
            return -1;
        }
        0
    }
}
