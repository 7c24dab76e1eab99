use humpmatch::prelude::*;

/// Wraps every matched fragment of `name` in brackets.
pub fn highlight(name: &str, fragments: &[Range]) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut res = String::new();
    let mut pos = 0;
    for range in fragments {
        res.extend(&chars[pos..range.start()]);
        res.push('[');
        res.extend(&chars[range.start()..range.end()]);
        res.push(']');
        pos = range.end();
    }
    res.extend(&chars[pos..]);
    res
}

/// Highlights the match of `matcher` in each name, one line per name.
pub fn highlight_all(matcher: &dyn NameMatcher, names: &[&str]) -> String {
    names
        .iter()
        .map(|name| match matcher.matching_fragments(name) {
            Some(fragments) => highlight(name, &fragments),
            None => format!("{name} (no match)"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Checks the shape every match result must have.
pub fn assert_well_formed(name: &str, fragments: &[Range]) {
    let len = name.chars().count();
    for range in fragments {
        assert!(range.start() <= range.end(), "{name:?}: inverted {range}");
        assert!(range.end() <= len, "{name:?}: {range} out of bounds");
    }
    for pair in fragments.windows(2) {
        assert!(
            pair[0].end() < pair[1].start(),
            "{name:?}: {} and {} overlap or touch",
            pair[0],
            pair[1]
        );
    }
}
