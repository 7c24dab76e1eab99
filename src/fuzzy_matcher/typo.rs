//! Keyboard adjacency used by typo-tolerant matching.
//!
//! A typo is modelled as hitting the key right next to the intended one on a
//! QWERTY keyboard. Lookups are case-preserving: the neighbour of `W` is `Q`
//! and `E`.

use crate::fuzzy_matcher::util::{to_lower, to_upper};

const KEYBOARD: [&[u8]; 3] = [b"qwertyuiop", b"asdfghjkl", b"zxcvbnm"];

fn locate(c: char) -> Option<(&'static [u8], usize)> {
    let lower = to_lower(c);
    if !lower.is_ascii_lowercase() {
        return None;
    }
    let byte = lower as u8;
    KEYBOARD
        .iter()
        .find_map(|row| row.iter().position(|&k| k == byte).map(|col| (*row, col)))
}

fn same_case_as(c: char, key: u8) -> char {
    let key = key as char;
    if c.is_uppercase() { to_upper(key) } else { key }
}

/// The key to the left of `c` on its keyboard row.
pub fn left_neighbor(c: char) -> Option<char> {
    let (row, col) = locate(c)?;
    let col = col.checked_sub(1)?;
    Some(same_case_as(c, row[col]))
}

/// The key to the right of `c` on its keyboard row.
pub fn right_neighbor(c: char) -> Option<char> {
    let (row, col) = locate(c)?;
    row.get(col + 1).map(|&key| same_case_as(c, key))
}

/// True when `typed` sits right next to `intended`, ignoring case.
pub fn is_neighbor(intended: char, typed: char) -> bool {
    let typed = to_lower(typed);
    left_neighbor(intended).is_some_and(|n| to_lower(n) == typed)
        || right_neighbor(intended).is_some_and(|n| to_lower(n) == typed)
}
