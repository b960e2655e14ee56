//! Message interpolation for validation failures.
//!
//! This module turns a failed validation rule into a localized,
//! human-readable message. It owns the per-locale dictionaries, selects
//! the message template for a failure, and substitutes placeholder tokens
//! from the failure context.
//!
//! The submodules:
//! - `dictionary`: per-locale templates, display names, and overrides
//! - `context`: the failure description the caller hands in
//! - `resolver`: locale selection and the substitution engine
//! - `error`: errors and the warning types surfaced to callers

mod context;
mod dictionary;
mod error;
mod resolver;

pub use context::{RuleContext, RuleParams};
pub use dictionary::LocaleDictionary;
pub use error::{CoverageWarning, DictionaryError, UnresolvedPlaceholder, compute_suggestions};
pub use resolver::Interpolator;
