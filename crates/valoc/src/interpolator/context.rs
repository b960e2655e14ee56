//! Failure context handed to the resolver.

use std::collections::HashMap;

use bon::Builder;

use crate::types::Value;

/// Parameters of a failed validation rule.
///
/// Rules declare their configuration either as an ordered list
/// (`min:8` carries `[8]`) or as a named mapping (`between:{min:8,max:20}`
/// carries `{min: 8, max: 20}`). The two shapes resolve differently:
/// positional tokens like `{0}` index into a list, named tokens like
/// `{min}` look up a mapping. A token of the combined form `0:{min}`
/// works against both, using whichever part the shape supports.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleParams {
    /// Parameters as an ordered list; the position is authoritative.
    Positional(Vec<Value>),
    /// Parameters as a named mapping; the name is authoritative.
    Named(HashMap<String, Value>),
}

impl RuleParams {
    /// Number of parameters in either shape.
    pub fn len(&self) -> usize {
        match self {
            RuleParams::Positional(list) => list.len(),
            RuleParams::Named(map) => map.len(),
        }
    }

    /// True when the rule carried no parameters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parameter at a position. `None` for named mappings.
    pub fn positional(&self, index: usize) -> Option<&Value> {
        match self {
            RuleParams::Positional(list) => list.get(index),
            RuleParams::Named(_) => None,
        }
    }

    /// Parameter under a name. `None` for ordered lists.
    pub fn named(&self, name: &str) -> Option<&Value> {
        match self {
            RuleParams::Positional(_) => None,
            RuleParams::Named(map) => map.get(name),
        }
    }
}

impl Default for RuleParams {
    fn default() -> Self {
        RuleParams::Positional(Vec::new())
    }
}

impl From<Vec<Value>> for RuleParams {
    fn from(list: Vec<Value>) -> Self {
        RuleParams::Positional(list)
    }
}

impl From<HashMap<String, Value>> for RuleParams {
    fn from(map: HashMap<String, Value>) -> Self {
        RuleParams::Named(map)
    }
}

/// Context describing a single validation failure.
///
/// The rule executor builds one per failure; the resolver only reads it.
/// Everything the message may reference lives here:
/// - The failed field's identifier and current value
/// - A snapshot of the whole form, for cross-field messages
/// - The failed rule's name and parameters
///
/// # Example
///
/// ```
/// use valoc::{RuleContext, RuleParams};
///
/// let ctx = RuleContext::builder()
///     .field("age")
///     .rule("min_value")
///     .params(RuleParams::Positional(vec![18.into()]))
///     .build();
///
/// assert_eq!(ctx.field, "age");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct RuleContext {
    /// Identifier of the field that failed validation.
    pub field: String,

    /// The field's value at the time of failure.
    #[builder(default, into)]
    pub value: Value,

    /// Snapshot of every form value, keyed by field identifier.
    #[builder(default)]
    pub form: HashMap<String, Value>,

    /// Name of the rule that failed.
    pub rule: String,

    /// The failed rule's parameters.
    #[builder(default)]
    pub params: RuleParams,
}
