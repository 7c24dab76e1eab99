//! Character classification and camel-hump boundaries shared by the engine and
//! the scorer.
//!
//! All offsets are character offsets into a `&[char]` view of the name.

/// Characters that separate words inside a name.
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '_' | '-' | ':' | '+' | '.')
}

/// Pattern characters that match any run of name characters.
#[inline]
pub fn is_wildcard(c: char) -> bool {
    c == ' ' || c == '*'
}

/// Single-character uppercase mapping; characters that expand keep their case.
pub fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Single-character lowercase mapping; characters that expand keep their case.
pub fn to_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[inline]
pub fn chars_equal_ignore_case(a: char, b: char) -> bool {
    a == b || to_upper(a) == to_upper(b) || to_lower(a) == to_lower(b)
}

pub fn has_case(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Whether a new camel hump (word) starts at `i`.
///
/// Uppercase letters start a word unless they sit inside an all-caps run, in
/// which case only the last capital before a lowercase letter does
/// (`HTMLParser` has humps `HTML` and `Parser`). Digits always start a hump.
/// Lowercase letters start a word after a non-alphanumeric character.
pub fn is_word_start(name: &[char], i: usize) -> bool {
    let Some(&cur) = name.get(i) else {
        return false;
    };
    if cur.is_uppercase() {
        if i > 0 && name[i - 1].is_uppercase() {
            return name.get(i + 1).is_some_and(|next| next.is_lowercase());
        }
        return true;
    }
    if cur.is_numeric() {
        return true;
    }
    if !cur.is_alphabetic() {
        return false;
    }
    i == 0 || !name[i - 1].is_alphanumeric() || is_hard_coded_word_start(name, i)
}

// `println`, `readln` and friends: the trailing `ln` reads as its own word.
fn is_hard_coded_word_start(name: &[char], i: usize) -> bool {
    name[i] == 'l'
        && name.get(i + 1) == Some(&'n')
        && (name.len() == i + 2 || is_word_start(name, i + 2))
}

/// Offset of the hump that follows the one starting at `start`.
///
/// `start` must be a valid offset into `name`.
pub fn next_word(name: &[char], start: usize) -> usize {
    if !name[start].is_alphanumeric() {
        return start + 1;
    }

    let mut i = start;
    while i < name.len() && name[i].is_numeric() {
        i += 1;
    }
    if i > start {
        // digits form a separate hump
        return i;
    }

    while i < name.len() && name[i].is_uppercase() {
        i += 1;
    }
    if i > start + 1 {
        // several consecutive uppercase letters form a hump
        if i == name.len() || !name[i].is_alphabetic() {
            return i;
        }
        return i - 1;
    }

    if i == start {
        i += 1;
    }
    while i < name.len() && name[i].is_alphabetic() && !is_word_start(name, i) {
        i += 1;
    }
    i
}

#[cfg(test)]
pub(crate) fn wrap_ranges(name: &str, ranges: &[crate::Range]) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::new();
    let mut pos = 0;
    for range in ranges {
        out.extend(&chars[pos..range.start()]);
        out.push('[');
        out.extend(&chars[range.start()..range.end()]);
        out.push(']');
        pos = range.end();
    }
    out.extend(&chars[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn humps(s: &str) -> Vec<usize> {
        let name = chars(s);
        let mut starts = vec![];
        let mut i = 0;
        while i < name.len() {
            starts.push(i);
            i = next_word(&name, i);
        }
        starts
    }

    #[test]
    fn word_starts() {
        let name = chars("fooBar_baz9HTMLParser");
        assert!(is_word_start(&name, 0));
        assert!(!is_word_start(&name, 1));
        assert!(is_word_start(&name, 3));
        assert!(!is_word_start(&name, 6));
        assert!(is_word_start(&name, 7));
        assert!(is_word_start(&name, 10));
        assert!(is_word_start(&name, 11));
        assert!(!is_word_start(&name, 12));
        assert!(is_word_start(&name, 15));
        assert!(!is_word_start(&name, name.len()));
    }

    #[test]
    fn ln_suffix_is_a_word() {
        let name = chars("println");
        assert!(is_word_start(&name, 5));
        assert!(!is_word_start(&chars("kilns"), 2));
    }

    #[test]
    fn hump_boundaries() {
        assert_eq!(humps("NullPointerException"), vec![0, 4, 11]);
        assert_eq!(humps("HTMLParser"), vec![0, 4]);
        assert_eq!(humps("URL"), vec![0]);
        assert_eq!(humps("foo_bar"), vec![0, 3, 4]);
        assert_eq!(humps("utf8Decoder"), vec![0, 3, 4]);
        assert_eq!(humps("v123"), vec![0, 1]);
    }

    #[test]
    fn case_folding() {
        assert_eq!(to_upper('a'), 'A');
        assert_eq!(to_lower('Ж'), 'ж');
        // 'ß' uppercases to "SS"; keep it as is
        assert_eq!(to_upper('ß'), 'ß');
        assert!(chars_equal_ignore_case('k', 'K'));
        assert!(!chars_equal_ignore_case('k', 'x'));
    }

    #[test]
    fn wrap() {
        let ranges = [crate::Range::new(0, 1), crate::Range::new(4, 5)];
        assert_eq!(wrap_ranges("NullPointer", &ranges), "[N]ull[P]ointer");
    }
}
