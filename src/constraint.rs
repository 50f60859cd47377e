//! Abstraction over `regex` and `regex-lite` depending on whether we have the
//! `unicode` crate feature enabled.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "unicode")] {
        use regex::Regex;
    } else {
        use regex_lite::Regex;
    }
}

/// Regex flags to allow '.' in regex to match '\n' and keep `^`/`$` anchored
/// to the whole segment rather than lines.
///
/// See the docs under: https://docs.rs/regex/1/regex/#grouping-and-flags
const REGEX_FLAGS: &str = "(?s-m)";

/// A compiled `{name:regex}` constraint.
///
/// The user expression is wrapped in `^(?:...)$` so a segment value must
/// satisfy it in full; `/user/{id:\d+}` does not admit `/user/1a`.
#[derive(Debug, Clone)]
pub(crate) struct Constraint {
    source: String,
    regex: Regex,
}

impl Constraint {
    /// Compiles `source` as a full-segment constraint.
    ///
    /// Errors are rendered to a string so they can travel inside a cloneable,
    /// comparable pattern error regardless of the regex dialect in use.
    pub(crate) fn new(source: &str) -> Result<Self, String> {
        let anchored = format!("{}^(?:{})$", REGEX_FLAGS, source);

        let regex = Regex::new(&anchored).map_err(|err| err.to_string())?;

        Ok(Constraint {
            source: source.to_owned(),
            regex,
        })
    }

    pub(crate) fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }
}

// compiled regexes are interchangeable when their sources are
impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Constraint {}
