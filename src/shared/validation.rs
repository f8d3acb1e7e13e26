use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating slugs
    /// Must be lowercase alphanumeric words joined by single hyphens
    /// - Valid: "taskmaster-pro", "codeeditor", "getting-started"
    /// - Invalid: "-games", "games-", "games--news", "Games", "games_news"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Collect the names of required fields whose value is blank.
///
/// Blank means empty or whitespace-only, matching how the admin forms submit
/// untouched inputs.
pub fn missing_fields<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}
