//! Process-wide interpolator storage.
//!
//! Provides thread-safe access to a shared `Interpolator` instance, removing
//! the need to thread `&Interpolator` through every validation call site.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use crate::interpolator::{DictionaryError, Interpolator, LocaleDictionary, RuleContext};
use crate::types::Message;

static GLOBAL_INTERPOLATOR: LazyLock<RwLock<Interpolator>> =
    LazyLock::new(|| RwLock::new(Interpolator::new()));

/// Provides read access to the global interpolator.
pub fn with_interpolator<T>(f: impl FnOnce(&Interpolator) -> T) -> T {
    let guard = GLOBAL_INTERPOLATOR
        .read()
        .expect("global interpolator lock poisoned");
    f(&guard)
}

/// Provides write access to the global interpolator.
///
/// The write guard is held for the whole closure, so a merge or locale
/// switch is observed atomically by concurrent readers: a resolution that
/// started before the change completes against the old state.
pub fn with_interpolator_mut<T>(f: impl FnOnce(&mut Interpolator) -> T) -> T {
    let mut guard = GLOBAL_INTERPOLATOR
        .write()
        .expect("global interpolator lock poisoned");
    f(&mut guard)
}

/// Sets the active locale of the global interpolator.
///
/// Fails with [`DictionaryError::LocaleNotFound`] when no dictionary has
/// been registered for `code`; the previous locale stays active.
pub fn set_locale(code: impl Into<String>) -> Result<(), DictionaryError> {
    with_interpolator_mut(|interpolator| interpolator.set_locale(code))
}

/// Returns the active locale of the global interpolator.
pub fn locale() -> String {
    with_interpolator(|interpolator| interpolator.locale().to_owned())
}

/// Deep-merges a partial dictionary into the global interpolator.
pub fn merge(code: impl Into<String>, partial: LocaleDictionary) {
    with_interpolator_mut(|interpolator| interpolator.merge(code, partial));
}

/// Deep-merges a mapping of locale code to partial dictionary into the
/// global interpolator.
pub fn merge_all(dictionaries: HashMap<String, LocaleDictionary>) {
    with_interpolator_mut(|interpolator| interpolator.merge_all(dictionaries));
}

/// Resolves a validation failure against the global interpolator in its
/// active locale.
pub fn resolve(ctx: &RuleContext) -> Result<Message, DictionaryError> {
    with_interpolator(|interpolator| interpolator.resolve(ctx))
}
