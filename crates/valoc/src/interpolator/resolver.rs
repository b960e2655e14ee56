//! Locale selection, dictionary storage, and message resolution.
//!
//! The `Interpolator` struct provides the user-facing API for registering
//! dictionaries, switching the active locale, and resolving validation
//! failures into display text.

use std::collections::{BTreeSet, HashMap};

use bon::Builder;

use crate::interpolator::context::{RuleContext, RuleParams};
use crate::interpolator::dictionary::LocaleDictionary;
use crate::interpolator::error::{
    CoverageWarning, DictionaryError, UnresolvedPlaceholder, compute_suggestions,
};
use crate::parser::ast::{Segment, Template};
use crate::parser::parse_template;
use crate::types::{Message, Value};

/// Reserved token substituted with the field's display name.
const FIELD_TOKEN: &str = "field";

/// Reserved token substituted with the field's current value.
const VALUE_TOKEN: &str = "value";

/// User-facing locale management and message resolution.
///
/// Interpolator owns one dictionary per locale plus the active locale
/// selection. Resolution picks the template for a failed rule (the
/// field's override first, then the rule's generic message, then the
/// fallback template) and substitutes its placeholders from the failure
/// context. An unknown token never fails resolution; it stays in the
/// output verbatim and is reported on the returned [`Message`].
///
/// # Example
///
/// ```
/// use valoc::{Interpolator, RuleContext, RuleParams};
///
/// let mut interpolator = Interpolator::new();
/// interpolator
///     .merge_json(
///         "en",
///         r#"{ "messages": { "min": "The {field} field must be at least 0:{length}" } }"#,
///     )
///     .unwrap();
///
/// let ctx = RuleContext::builder()
///     .field("password")
///     .rule("min")
///     .params(RuleParams::Positional(vec![8.into()]))
///     .build();
///
/// let message = interpolator.resolve(&ctx).unwrap();
/// assert_eq!(message.text, "The password field must be at least 8");
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct Interpolator {
    /// Active locale code (e.g., "en", "ru", "de").
    #[builder(default = "en".to_string())]
    locale: String,

    /// Template used when a rule has no message in the active dictionary.
    #[builder(default = "{field} is invalid".to_string())]
    fallback_template: String,

    /// Per-locale dictionaries, keyed by locale code.
    #[builder(skip)]
    dictionaries: HashMap<String, LocaleDictionary>,
}

impl Default for Interpolator {
    fn default() -> Self {
        Interpolator::builder().build()
    }
}

impl Interpolator {
    /// Create a new interpolator with default settings (English active).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpolator with the specified active locale.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Interpolator::builder().locale(locale.into()).build()
    }

    // =========================================================================
    // Locale Management
    // =========================================================================

    /// Get the active locale code.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Change the active locale.
    ///
    /// The new locale must already have a dictionary registered via
    /// [`Interpolator::merge`] or one of the JSON loaders; otherwise the
    /// call fails with [`DictionaryError::LocaleNotFound`] and the
    /// previous selection stays active. A successful switch only changes
    /// which dictionary is consulted next, no dictionary content moves.
    pub fn set_locale(&mut self, code: impl Into<String>) -> Result<(), DictionaryError> {
        let code = code.into();
        if !self.dictionaries.contains_key(&code) {
            return Err(self.locale_not_found(code));
        }
        self.locale = code;
        Ok(())
    }

    /// True when a dictionary has been registered for `code`.
    pub fn has_locale(&self, code: &str) -> bool {
        self.dictionaries.contains_key(code)
    }

    /// Registered locale codes, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.dictionaries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Get the dictionary registered for `code`, if any.
    pub fn dictionary(&self, code: &str) -> Option<&LocaleDictionary> {
        self.dictionaries.get(code)
    }

    fn locale_not_found(&self, code: String) -> DictionaryError {
        let mut available: Vec<String> = self.dictionaries.keys().cloned().collect();
        available.sort_unstable();
        let suggestions = compute_suggestions(&code, &available);
        DictionaryError::LocaleNotFound {
            code,
            available,
            suggestions,
        }
    }

    // =========================================================================
    // Dictionary Registration
    // =========================================================================

    /// Deep-merge a partial dictionary into the one registered for `code`,
    /// creating it when absent.
    ///
    /// Merging is additive at the leaf level: entries of `partial` replace
    /// same-keyed entries and leave everything else in place, so callers
    /// can override a single message without restating the rest. Merging
    /// never changes the active locale.
    pub fn merge(&mut self, code: impl Into<String>, partial: LocaleDictionary) {
        self.dictionaries
            .entry(code.into())
            .or_default()
            .merge(partial);
    }

    /// Deep-merge a whole mapping of locale code to partial dictionary.
    ///
    /// Every entry routes through [`Interpolator::merge`].
    pub fn merge_all(&mut self, dictionaries: HashMap<String, LocaleDictionary>) {
        for (code, partial) in dictionaries.into_iter().collect::<Vec<_>>() {
            self.merge(code, partial);
        }
    }

    /// Parse a JSON dictionary and deep-merge it for `code`.
    ///
    /// Fails with [`DictionaryError::Malformed`] when the content does not
    /// match the dictionary shape; nothing is merged on failure.
    pub fn merge_json(&mut self, code: &str, content: &str) -> Result<(), DictionaryError> {
        let partial = LocaleDictionary::from_json_str(code, content)?;
        self.merge(code, partial);
        Ok(())
    }

    /// Convert an already-parsed JSON value and deep-merge it for `code`.
    pub fn merge_json_value(
        &mut self,
        code: &str,
        content: serde_json::Value,
    ) -> Result<(), DictionaryError> {
        let partial = LocaleDictionary::from_json_value(code, content)?;
        self.merge(code, partial);
        Ok(())
    }

    // =========================================================================
    // Message Resolution
    // =========================================================================

    /// Resolve a validation failure into a message in the active locale.
    ///
    /// Template selection order: the field's override for the rule, then
    /// the rule's generic message, then the fallback template. The
    /// returned [`Message`] carries a warning for every placeholder left
    /// verbatim.
    ///
    /// Fails with [`DictionaryError::LocaleNotFound`] when the active
    /// locale has no dictionary. The error is recoverable: display code
    /// typically falls back to the rule name rather than propagating it.
    pub fn resolve(&self, ctx: &RuleContext) -> Result<Message, DictionaryError> {
        self.resolve_in(&self.locale, ctx)
    }

    /// Resolve a validation failure in an explicit locale, leaving the
    /// active locale untouched.
    pub fn resolve_in(&self, code: &str, ctx: &RuleContext) -> Result<Message, DictionaryError> {
        let Some(dictionary) = self.dictionaries.get(code) else {
            return Err(self.locale_not_found(code.to_string()));
        };

        let template_src = dictionary
            .template_for(&ctx.field, &ctx.rule)
            .unwrap_or(&self.fallback_template);
        let template = parse_template(template_src);

        Ok(substitute(&template, ctx, dictionary))
    }

    // =========================================================================
    // Coverage Validation
    // =========================================================================

    /// Validate that a target locale covers the same rules as a source
    /// locale.
    ///
    /// Checks the generic message sections of both dictionaries and
    /// reports:
    /// - Rules with a message in the source but not in the target
    /// - Rules with a message in the target but not in the source
    /// - Rules whose two templates reference different placeholder names
    ///
    /// Both locales must already have dictionaries registered. Returns an
    /// empty vector if no warnings are found or if either locale is not
    /// registered.
    pub fn validate_locales(&self, source: &str, target: &str) -> Vec<CoverageWarning> {
        let mut warnings = Vec::new();

        let Some(source_dict) = self.dictionaries.get(source) else {
            return warnings;
        };
        let Some(target_dict) = self.dictionaries.get(target) else {
            return warnings;
        };

        let mut rules: Vec<&str> = source_dict
            .messages
            .keys()
            .chain(target_dict.messages.keys())
            .map(String::as_str)
            .collect();
        rules.sort_unstable();
        rules.dedup();

        for rule in rules {
            match (
                source_dict.messages.get(rule),
                target_dict.messages.get(rule),
            ) {
                (Some(_), None) => warnings.push(CoverageWarning::MissingMessage {
                    rule: rule.to_string(),
                    locale: target.to_string(),
                }),
                (None, Some(_)) => warnings.push(CoverageWarning::UnknownMessage {
                    rule: rule.to_string(),
                    locale: target.to_string(),
                }),
                (Some(source_template), Some(target_template)) => {
                    let source_names = placeholder_names(source_template);
                    let target_names = placeholder_names(target_template);
                    let missing: Vec<String> =
                        source_names.difference(&target_names).cloned().collect();
                    let extra: Vec<String> =
                        target_names.difference(&source_names).cloned().collect();
                    if !missing.is_empty() || !extra.is_empty() {
                        warnings.push(CoverageWarning::PlaceholderMismatch {
                            rule: rule.to_string(),
                            locale: target.to_string(),
                            missing,
                            extra,
                        });
                    }
                }
                (None, None) => {}
            }
        }

        warnings
    }
}

// =============================================================================
// Substitution
// =============================================================================

/// Substitute a template's placeholders from a failure context.
///
/// Literal segments are copied through. Placeholder segments resolve via
/// [`resolve_placeholder`]; tokens that resolve to nothing are restored
/// exactly as written and recorded as warnings. Substitution is a single
/// pass: substituted values are never re-scanned for placeholders.
fn substitute(template: &Template, ctx: &RuleContext, dictionary: &LocaleDictionary) -> Message {
    let mut text = String::new();
    let mut warnings = Vec::new();

    for segment in &template.segments {
        match segment {
            Segment::Literal(literal) => text.push_str(literal),
            Segment::Placeholder {
                position,
                name,
                raw,
            } => match resolve_placeholder(*position, name, ctx, dictionary) {
                Some(replacement) => text.push_str(&replacement),
                None => {
                    text.push_str(raw);
                    warnings.push(UnresolvedPlaceholder {
                        placeholder: raw.clone(),
                        rule: ctx.rule.clone(),
                    });
                }
            },
        }
    }

    Message::builder().text(text).warnings(warnings).build()
}

/// Resolve a single placeholder token to its replacement text.
///
/// - Bare `{field}` is the field's display name: the `names` entry when
///   one is registered, the raw field identifier otherwise.
/// - Position-carrying tokens (`{0}`, `0:{min}`) are parameter lookups.
///   The position is authoritative for ordered parameters; the name is
///   authoritative for named ones.
/// - Any other bare token tries a named rule parameter, then the form
///   snapshot, then (for `{value}` only) the field's current value.
fn resolve_placeholder(
    position: Option<usize>,
    name: &str,
    ctx: &RuleContext,
    dictionary: &LocaleDictionary,
) -> Option<String> {
    if position.is_none() && name == FIELD_TOKEN {
        let display = dictionary.display_name(&ctx.field).unwrap_or(&ctx.field);
        return Some(display.to_string());
    }

    if let Some(index) = position {
        return resolve_param(index, name, &ctx.params);
    }

    if let Some(value) = ctx.params.named(name) {
        return Some(value.to_string());
    }
    if let Some(value) = ctx.form.get(name) {
        return Some(value.to_string());
    }
    if name == VALUE_TOKEN && !ctx.value.is_null() {
        return Some(ctx.value.to_string());
    }
    None
}

/// Resolve a parameter token against the rule's parameter shape.
fn resolve_param(index: usize, name: &str, params: &RuleParams) -> Option<String> {
    match params {
        RuleParams::Positional(list) => list.get(index).map(Value::to_string),
        RuleParams::Named(map) => map.get(name).map(Value::to_string),
    }
}

/// Distinct placeholder names referenced by a template, excluding the
/// reserved `{field}` and `{value}` tokens (context-supplied, so locales
/// are free to use or drop them).
fn placeholder_names(template_src: &str) -> BTreeSet<String> {
    let template = parse_template(template_src);
    let mut names = BTreeSet::new();
    for segment in template.placeholders() {
        if let Segment::Placeholder { position, name, .. } = segment {
            let reserved = position.is_none() && (name == FIELD_TOKEN || name == VALUE_TOKEN);
            if !reserved {
                names.insert(name.clone());
            }
        }
    }
    names
}
