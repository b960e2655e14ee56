//! Error and warning types for dictionary management and resolution.

use strsim::levenshtein;
use thiserror::Error;

/// Errors that occur while managing or consulting locale dictionaries.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// No dictionary has been registered under the requested locale code.
    #[error("unknown locale '{code}'{}", locale_detail(available, suggestions))]
    LocaleNotFound {
        code: String,
        available: Vec<String>,
        suggestions: Vec<String>,
    },

    /// Dictionary content does not match the expected shape.
    #[error("malformed dictionary for locale '{locale}': {detail}")]
    Malformed { locale: String, detail: String },
}

fn locale_detail(available: &[String], suggestions: &[String]) -> String {
    if let Some(best) = suggestions.first() {
        return format!(", did you mean '{best}'?");
    }
    if available.is_empty() {
        return ", no dictionaries registered".to_string();
    }
    format!(", available: {}", available.join(", "))
}

/// A placeholder token left verbatim in a resolved message.
///
/// Resolution never fails on an unknown token; the token is kept in the
/// output and reported through [`Message::warnings`].
///
/// [`Message::warnings`]: crate::types::Message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unresolved placeholder '{placeholder}' in message for rule '{rule}'")]
pub struct UnresolvedPlaceholder {
    /// The token exactly as it appears in the template, e.g. `{min}` or `0:{max}`.
    pub placeholder: String,
    /// The rule whose template contained the token.
    pub rule: String,
}

/// A discrepancy between two locales' message dictionaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageWarning {
    /// The target locale has no message for a rule the source locale covers.
    #[error("locale '{locale}' has no message for rule '{rule}'")]
    MissingMessage { rule: String, locale: String },

    /// The target locale has a message for a rule unknown to the source locale.
    #[error("locale '{locale}' has a message for unknown rule '{rule}'")]
    UnknownMessage { rule: String, locale: String },

    /// Source and target templates for a rule use different placeholder names.
    #[error(
        "locale '{locale}' message for rule '{rule}' has mismatched placeholders (missing: [{}], extra: [{}])",
        missing.join(", "),
        extra.join(", ")
    )]
    PlaceholderMismatch {
        rule: String,
        locale: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },
}

/// Computes "did you mean" suggestions for an unknown locale code.
///
/// Returns up to 3 registered codes within edit distance 2 of the input
/// (distance 1 for inputs of 3 characters or fewer), closest first.
pub fn compute_suggestions(input: &str, available: &[String]) -> Vec<String> {
    let max_distance = if input.len() <= 3 { 1 } else { 2 };

    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .map(|code| (levenshtein(input, code), code))
        .filter(|(distance, _)| *distance > 0 && *distance <= max_distance)
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .take(3)
        .map(|(_, code)| code.clone())
        .collect()
}
