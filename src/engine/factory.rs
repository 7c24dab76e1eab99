use crate::engine::all::AllOccurrencesMatcher;
use crate::engine::compound::CompoundMatcher;
use crate::engine::layout::LayoutFixer;
use crate::options::MatcherOptions;
use crate::{MatcherFactory, MinusculeMatcher, NameMatcher};

//------------------------------------------------------------------------------
// Options-driven construction
impl MatcherFactory for MatcherOptions {
    fn create_matcher(&self, pattern: &str) -> Box<dyn NameMatcher> {
        let case = self.case_sensitivity;
        let separators = self.hard_separators.as_str();

        let matcher: Box<dyn NameMatcher> = if self.all_occurrences {
            Box::new(AllOccurrencesMatcher::new(pattern, case, separators))
        } else if self.typo_tolerant {
            let exact: Box<dyn NameMatcher> = if self.fix_layout {
                Box::new(LayoutFixer::new(pattern, case, separators))
            } else {
                Box::new(MinusculeMatcher::new(pattern, case, separators))
            };
            let typos = Box::new(MinusculeMatcher::typo_tolerant(pattern, case, separators));
            Box::new(CompoundMatcher::new(exact, typos))
        } else if self.fix_layout {
            Box::new(LayoutFixer::new(pattern, case, separators))
        } else {
            Box::new(MinusculeMatcher::new(pattern, case, separators))
        };

        debug!("Initialized {matcher} matcher, case {case}");
        matcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaseSensitivity;
    use crate::options::MatcherOptionsBuilder;

    fn options() -> MatcherOptionsBuilder {
        MatcherOptionsBuilder::default()
    }

    #[test]
    fn default_fixes_layout() {
        let matcher = MatcherOptions::default().create_matcher("NPE");
        assert_eq!(matcher.to_string(), "(Layout: (Minuscule: NPE))");
        assert!(MatcherOptions::default().create_matcher("ыщьу").matches("someMethod"));
    }

    #[test]
    fn bare_matcher() {
        let matcher = options().fix_layout(false).build().unwrap().create_matcher("NPE");
        assert_eq!(matcher.to_string(), "(Minuscule: NPE)");
        assert_eq!(matcher.pattern(), "NPE");
    }

    #[test]
    fn typo_tolerant_prefers_exact() {
        let options = options()
            .typo_tolerant(true)
            .case_sensitivity(CaseSensitivity::None)
            .build()
            .unwrap();
        let matcher = options.create_matcher("sonething");
        assert!(matcher.matches("something"));
        assert!(matcher.matches("sonething"));
        assert!(matcher.matching_degree("sonething", false) > matcher.matching_degree("something", false));
        assert_eq!(
            matcher.to_string(),
            "(Compound: (Layout: (Minuscule: sonething)), (Typo: sonething))"
        );
    }

    #[test]
    fn all_occurrences_wins() {
        let options = options().all_occurrences(true).typo_tolerant(true).build().unwrap();
        let matcher = options.create_matcher("ab");
        assert_eq!(matcher.to_string(), "(All: (Layout: (Minuscule: *ab)))");
        assert_eq!(matcher.matching_fragments("abXab").map(|f| f.len()), Some(2));
    }
}
