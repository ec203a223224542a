use regex::Regex;

/// Compile one of the built-in keyword alternations.
///
/// Inputs are string literals in this crate; a failure is a programming
/// error caught by the unit tests of every module that uses it.
pub(crate) fn keywords(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// Alternation matching any of the given literal phrases.
pub(crate) fn phrases(list: &[&str]) -> Regex {
    let alternation = list
        .iter()
        .map(|phrase| regex::escape(phrase))
        .collect::<Vec<_>>()
        .join("|");
    keywords(&alternation)
}
