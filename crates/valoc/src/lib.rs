pub mod global;
pub mod interpolator;
pub mod parser;
pub mod presets;
pub mod types;

pub use interpolator::{
    CoverageWarning, DictionaryError, Interpolator, LocaleDictionary, RuleContext, RuleParams,
    UnresolvedPlaceholder, compute_suggestions,
};
pub use types::{Message, Value};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, booleans, or strings directly. Use it to build named
/// rule parameters or form snapshots.
///
/// # Example
///
/// ```
/// use valoc::{RuleParams, Value, params};
///
/// let params = RuleParams::Named(params! { "min" => 8, "max" => 20 });
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.named("min"), Some(&Value::Number(8)));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
