//! Configuration options for building matchers.
//!
//! This module provides the `MatcherOptions` struct and builder, and the
//! errors raised while reading them. Options can be built in code or loaded
//! from RON text:
//!
//! ```
//! use humpmatch::prelude::*;
//!
//! let options = MatcherOptions::from_ron("(case_sensitivity: none, typo_tolerant: true)").unwrap();
//! assert_eq!(options.case_sensitivity, CaseSensitivity::None);
//! assert!(options.fix_layout);
//!
//! let matcher = options.create_matcher("sonething");
//! assert!(matcher.matches("something"));
//! ```

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::CaseSensitivity;

/// Errors raised while configuring matchers
#[derive(Error, Debug)]
pub enum MatcherError {
    /// Case sensitivity given by name is not one of `none`, `first_letter`, `all`
    #[error("Unknown case sensitivity {0:?}")]
    UnknownCaseSensitivity(String),
    /// Options text is not valid RON
    #[error("Error parsing options: {0}")]
    Config(#[from] ron::error::SpannedError),
    /// Options builder failed
    #[error("Error building options: {0}")]
    Builder(String),
}

impl From<MatcherOptionsBuilderError> for MatcherError {
    fn from(e: MatcherOptionsBuilderError) -> Self {
        MatcherError::Builder(e.to_string())
    }
}

/// How matchers are built from patterns
#[derive(Builder, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(name = "final_build"))]
#[builder(default)]
#[serde(default)]
pub struct MatcherOptions {
    /// Case sensitivity of the matchers
    pub case_sensitivity: CaseSensitivity,

    /// Name characters lowercase pattern letters may not skip over
    ///
    /// Usually `.` (or `/`) when matching qualified names.
    #[builder(setter(into))]
    pub hard_separators: String,

    /// Accept adjacent-key typos when the pattern does not match exactly
    pub typo_tolerant: bool,

    /// Report every occurrence of the pattern, anywhere in the name
    pub all_occurrences: bool,

    /// Retry patterns typed on a non-latin keyboard layout
    pub fix_layout: bool,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            case_sensitivity: CaseSensitivity::default(),
            hard_separators: String::new(),
            typo_tolerant: false,
            all_occurrences: false,
            fix_layout: true,
        }
    }
}

impl MatcherOptionsBuilder {
    /// Builds the options
    pub fn build(&mut self) -> Result<MatcherOptions, MatcherError> {
        Ok(self.final_build()?)
    }
}

impl MatcherOptions {
    /// Reads options from RON text; missing fields keep their defaults
    pub fn from_ron(text: &str) -> Result<Self, MatcherError> {
        Ok(ron::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = MatcherOptions::default();
        assert_eq!(options.case_sensitivity, CaseSensitivity::FirstLetter);
        assert!(options.fix_layout);
        assert!(!options.typo_tolerant);
        assert_eq!(MatcherOptionsBuilder::default().build().unwrap(), options);
    }

    #[test]
    fn builder() {
        let options = MatcherOptionsBuilder::default()
            .case_sensitivity(CaseSensitivity::All)
            .hard_separators(".")
            .all_occurrences(true)
            .build()
            .unwrap();
        assert_eq!(options.hard_separators, ".");
        assert!(options.all_occurrences);
        assert!(options.fix_layout);
    }

    #[test]
    fn from_ron() {
        let options = MatcherOptions::from_ron("(case_sensitivity: all, hard_separators: \"./\")").unwrap();
        assert_eq!(options.case_sensitivity, CaseSensitivity::All);
        assert_eq!(options.hard_separators, "./");
        assert!(options.fix_layout);

        assert!(matches!(MatcherOptions::from_ron("(case_sensitivity: loud)"), Err(MatcherError::Config(_))));
        assert!(matches!(MatcherOptions::from_ron("(typo_tolerant: 3"), Err(MatcherError::Config(_))));
    }

    #[test]
    fn case_sensitivity_by_name() {
        assert_eq!("none".parse::<CaseSensitivity>().unwrap(), CaseSensitivity::None);
        assert_eq!("first_letter".parse::<CaseSensitivity>().unwrap(), CaseSensitivity::FirstLetter);
        let err = "loud".parse::<CaseSensitivity>().unwrap_err();
        assert!(matches!(err, MatcherError::UnknownCaseSensitivity(ref name) if name == "loud"));
        assert_eq!(err.to_string(), "Unknown case sensitivity \"loud\"");
        assert_eq!(CaseSensitivity::FirstLetter.to_string(), "first_letter");
    }
}
