//! Property-based invariant tests for template parsing and resolution.
//!
//! Verifies structural guarantees of the parser and the resolver:
//!
//! 1. Resolution never panics on arbitrary template text
//! 2. Brace-free templates resolve to themselves
//! 3. Unresolved named tokens are restored verbatim, one warning each
//! 4. Substitution is single-pass (no recursive substitution)
//! 5. Positional tokens resolve to exactly the indexed parameter
//! 6. Escaped braces always render as literal braces
//! 7. Resolution is deterministic
//! 8. Suggestions never echo the input and are capped at three
//! 9. Dictionary merging is leaf-level: partial entries win, others stay

use proptest::prelude::*;
use valoc::{
    Interpolator, LocaleDictionary, RuleContext, RuleParams, UnresolvedPlaceholder, Value,
    compute_suggestions,
};
use std::collections::HashSet;

// ── Helpers ──────────────────────────────────────────────────────────

fn interpolator_with(template: &str) -> Interpolator {
    let mut interpolator = Interpolator::new();
    interpolator.merge(
        "en",
        LocaleDictionary {
            messages: [("custom".to_string(), template.to_string())].into(),
            ..LocaleDictionary::default()
        },
    );
    interpolator
}

fn context() -> RuleContext {
    RuleContext::builder().field("item").rule("custom").build()
}

/// Literal text that cannot start or extend a placeholder token.
fn literal() -> impl Strategy<Value = String> {
    "[a-zA-Z ,.]{0,20}"
}

/// A token name other than the reserved `field` and `value`.
fn token_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("reserved token", |name| name != "field" && name != "value")
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Resolution never panics on arbitrary template text
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolution_is_total(template in any::<String>()) {
        let interpolator = interpolator_with(&template);
        let message = interpolator.resolve(&context()).unwrap();
        prop_assert!(message.is_clean() == message.warnings.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Brace-free templates resolve to themselves
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn brace_free_template_is_identity(template in "[a-zA-Z0-9 :,.!?]{0,40}") {
        let interpolator = interpolator_with(&template);
        let message = interpolator.resolve(&context()).unwrap();
        prop_assert_eq!(&message.text, &template);
        prop_assert!(message.is_clean());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Unresolved named tokens are restored verbatim
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unresolved_token_restored_verbatim(
        before in literal(),
        name in token_name(),
        after in literal(),
    ) {
        let template = format!("{before}{{{name}}}{after}");
        let interpolator = interpolator_with(&template);

        let message = interpolator.resolve(&context()).unwrap();
        prop_assert_eq!(&message.text, &template);
        prop_assert_eq!(
            &message.warnings,
            &vec![UnresolvedPlaceholder {
                placeholder: format!("{{{name}}}"),
                rule: "custom".to_string(),
            }]
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Substitution is single-pass
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn substitution_never_recurses(
        before in literal(),
        name in token_name(),
        after in literal(),
    ) {
        let template = format!("{before}{{{name}}}{after}");
        let interpolator = interpolator_with(&template);

        let ctx = RuleContext::builder()
            .field("item")
            .rule("custom")
            .params(RuleParams::Named(
                [(name, Value::from("{field}"))].into(),
            ))
            .build();

        let message = interpolator.resolve(&ctx).unwrap();
        prop_assert_eq!(&message.text, &format!("{before}{{field}}{after}"));
        prop_assert!(message.is_clean());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Positional tokens resolve to exactly the indexed parameter
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn positional_token_picks_indexed_value(
        index in 0usize..6,
        extra in 1usize..4,
        values in prop::collection::vec(value(), 10),
    ) {
        let list: Vec<Value> = values.into_iter().take(index + extra).collect();
        let template = format!("got {{{index}}}");
        let interpolator = interpolator_with(&template);

        let ctx = RuleContext::builder()
            .field("item")
            .rule("custom")
            .params(RuleParams::Positional(list.clone()))
            .build();

        let message = interpolator.resolve(&ctx).unwrap();
        prop_assert_eq!(&message.text, &format!("got {}", list[index]));
        prop_assert!(message.is_clean());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Escaped braces always render as literal braces
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn escaped_braces_render_literally(name in token_name()) {
        let interpolator = interpolator_with(&format!("{{{{{name}}}}}"));

        let message = interpolator.resolve(&context()).unwrap();
        prop_assert_eq!(&message.text, &format!("{{{name}}}"));
        prop_assert!(message.is_clean());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Resolution is deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolution_is_deterministic(template in any::<String>(), v in value()) {
        let interpolator = interpolator_with(&template);
        let ctx = RuleContext::builder()
            .field("item")
            .value(v)
            .rule("custom")
            .params(RuleParams::Positional(vec![1.into()]))
            .build();

        let first = interpolator.resolve(&ctx).unwrap();
        let second = interpolator.resolve(&ctx).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Suggestions never echo the input and are capped at three
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn suggestions_exclude_input_and_cap(
        input in "[a-z]{1,6}",
        available in prop::collection::vec("[a-z]{1,6}", 0..10),
    ) {
        let suggestions = compute_suggestions(&input, &available);
        prop_assert!(suggestions.len() <= 3);
        prop_assert!(!suggestions.contains(&input));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Dictionary merging is leaf-level
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn merge_is_leaf_level(
        base in prop::collection::hash_map("[a-e]{1,3}", "[a-z]{0,6}", 0..8),
        partial in prop::collection::hash_map("[a-e]{1,3}", "[a-z]{0,6}", 0..8),
    ) {
        let mut dict = LocaleDictionary {
            messages: base.clone(),
            ..LocaleDictionary::default()
        };
        dict.merge(LocaleDictionary {
            messages: partial.clone(),
            ..LocaleDictionary::default()
        });

        prop_assert!(
            partial.iter().all(|(k, v)| dict.messages.get(k) == Some(v))
        );
        prop_assert!(
            base.iter().all(|(k, v)| partial.contains_key(k)
                || dict.messages.get(k) == Some(v))
        );

        let expected: HashSet<&String> = base.keys().chain(partial.keys()).collect();
        prop_assert_eq!(dict.messages.len(), expected.len());
    }
}
