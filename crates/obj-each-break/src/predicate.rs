use for_each_break::{BreakContext, Flow};
use obj_each_util::{Key, Value};

use crate::key_filter::Filter;
use crate::traverse::{each_prop, traverse, Order};

/// `true` if the callback answers `true` for some entry.
///
/// A bare break answers `true`; a payload break answers with the payload.
///
/// # Examples
///
/// ```
/// use obj_each_break::{obj_some, Flow};
/// use obj_each_util::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({"a": 0, "b": 2}));
/// assert!(obj_some(&value, |entry, _, _| Flow::Continue(entry.to_number() > 1.0)));
/// assert!(!obj_some(&value, |entry, _, _| Flow::Continue(entry.to_number() > 2.0)));
/// assert!(!obj_some(&value, |_, _, _| Flow::stop_with(false)));
/// ```
pub fn obj_some<F>(value: &Value, mut callback: F) -> bool
where
    F: FnMut(&Value, Key<'_>, &Value) -> Flow<bool, bool>,
{
    let mut ctx = BreakContext::new();
    traverse(value, Order::Unordered, &mut ctx, Some(true), |_, entry, key, collection| {
        match callback(entry, key, collection) {
            Flow::Continue(true) => Flow::stop_with(true),
            Flow::Continue(false) => Flow::CONTINUE,
            Flow::Stop(payload) => Flow::Stop(payload),
        }
    })
    .result_or(Some(false))
    .unwrap_or(false)
}

/// `true` if the callback answers `true` for every entry.
///
/// The traversal tracks whether some entry failed. A bare break answers
/// `true`, as nothing has failed so far. A payload break reports the payload
/// as the failure flag, so `stop_with(false)` answers `true` and
/// `stop_with(true)` answers `false`.
///
/// # Examples
///
/// ```
/// use obj_each_break::{obj_every, Flow};
/// use obj_each_util::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!([1, 2]));
/// assert!(obj_every(&value, |entry, _, _| Flow::Continue(entry.to_number() > 0.0)));
/// assert!(obj_every(&value, |_, _, _| Flow::stop_with(false)));
/// assert!(!obj_every(&value, |_, _, _| Flow::stop_with(true)));
/// ```
pub fn obj_every<F>(value: &Value, mut callback: F) -> bool
where
    F: FnMut(&Value, Key<'_>, &Value) -> Flow<bool, bool>,
{
    let mut ctx = BreakContext::new();
    let failed = traverse(value, Order::Unordered, &mut ctx, Some(false), |_, entry, key, collection| {
        match callback(entry, key, collection) {
            Flow::Continue(true) => Flow::CONTINUE,
            Flow::Continue(false) => Flow::stop_with(true),
            Flow::Stop(payload) => Flow::Stop(payload),
        }
    })
    .result_or(Some(false))
    .unwrap_or(false);
    !failed
}

/// `true` if `value` is a collection with at least one own entry that
/// `exclude` does not select.
///
/// Entries holding `Undefined` count. A stop from an exclusion predicate
/// marks that entry as excluded and the scan goes on. An `Undefined`
/// specifier, as built by [`Filter::from_value`], means no exclusion.
///
/// # Examples
///
/// ```
/// use obj_each_break::{has_own_properties, Filter};
/// use obj_each_util::Value;
///
/// let value = Value::sequence([1]);
/// assert!(has_own_properties(&value, None));
/// assert!(!has_own_properties(&value, Some(Filter::equals("0"))));
/// assert!(has_own_properties(&value, Some(Filter::equals("1"))));
/// ```
pub fn has_own_properties(value: &Value, exclude: Option<Filter<'_>>) -> bool {
    if !value.is_collection() {
        return false;
    }
    let exclude = match exclude {
        None | Some(Filter::Unspecified) => return value.own_len() > 0,
        Some(exclude) => exclude,
    };

    let mut excluded = exclude.into_test();
    each_prop(value, Some(false), |entry, key, collection| match excluded(entry, key, collection) {
        Flow::Continue(false) => Flow::stop_with(true),
        Flow::Continue(true) | Flow::Stop(_) => Flow::CONTINUE,
    })
    .unwrap_or(false)
}
