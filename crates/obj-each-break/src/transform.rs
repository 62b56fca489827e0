//! Mapping, filtering and filtered copies.
//!
//! Outputs that are `Undefined` are dropped, and a stop from a callback ends
//! the operation with whatever was built so far.

use for_each_break::Flow;
use obj_each_util::{Key, Keyed, Sequence, Value};

use crate::key_filter::Filter;
use crate::traverse::{each, each_prop};

/// Map into a collection of the same shape, keyed by the original keys.
///
/// Entries are visited in forward order. A scalar receiver yields an empty
/// keyed map.
///
/// # Examples
///
/// ```
/// use obj_each_break::{obj_mapped, Flow};
/// use obj_each_util::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({"a": 1, "b": 2, "c": 3}));
/// let doubled = obj_mapped(&value, |entry, _, _| match entry.to_number() {
///     n if n > 2.0 => Flow::Continue(Value::Undefined),
///     n => Flow::Continue(Value::from(n * 2.0)),
/// });
/// assert_eq!(doubled, Value::from(json!({"a": 2, "b": 4})));
/// ```
pub fn obj_mapped<F>(value: &Value, mut callback: F) -> Value
where
    F: FnMut(&Value, Key<'_>, &Value) -> Flow<(), Value>,
{
    let mut mapped = value.empty_like();
    let _: Option<()> = each(value, |entry, key, collection| match callback(entry, key, collection) {
        Flow::Continue(output) => {
            if !output.is_undefined() {
                mapped.set(key, output);
            }
            Flow::CONTINUE
        }
        Flow::Stop(_) => Flow::BREAK,
    });
    mapped
}

/// Map into a dense sequence, in forward order.
pub fn obj_map<F>(value: &Value, mut callback: F) -> Value
where
    F: FnMut(&Value, Key<'_>, &Value) -> Flow<(), Value>,
{
    let mut mapped = Sequence::new();
    let _: Option<()> = each(value, |entry, key, collection| match callback(entry, key, collection) {
        Flow::Continue(output) => {
            if !output.is_undefined() {
                mapped.push(output);
            }
            Flow::CONTINUE
        }
        Flow::Stop(_) => Flow::BREAK,
    });
    Value::Sequence(mapped)
}

/// Values whose callback answers `true`, as a dense sequence in forward order.
pub fn obj_filter<F>(value: &Value, mut callback: F) -> Value
where
    F: FnMut(&Value, Key<'_>, &Value) -> Flow<(), bool>,
{
    let mut kept = Sequence::new();
    let _: Option<()> = each(value, |entry, key, collection| match callback(entry, key, collection) {
        Flow::Continue(true) => {
            kept.push(entry.clone());
            Flow::CONTINUE
        }
        Flow::Continue(false) => Flow::CONTINUE,
        Flow::Stop(_) => Flow::BREAK,
    });
    Value::Sequence(kept)
}

/// Copy the entries of `src` selected by `include` into `dst`.
///
/// `Undefined` entries are never copied. A `dst` that is not a collection is
/// replaced by an empty keyed map before the first copy. Returns whether
/// anything was copied. A non-collection `src` or a
/// [`Filter::Unspecified`] filter copies nothing and leaves `dst` alone.
///
/// # Examples
///
/// ```
/// use obj_each_break::{copy_filtered, Filter};
/// use obj_each_util::Value;
/// use serde_json::json;
///
/// let src = Value::from(json!({"a": 1, "b": 2, "c": 3}));
/// let mut dst = Value::Null;
/// assert!(copy_filtered(&mut dst, &src, Filter::keys(["a", "c"])));
/// assert_eq!(dst, Value::from(json!({"a": 1, "c": 3})));
/// ```
pub fn copy_filtered(dst: &mut Value, src: &Value, include: Filter<'_>) -> bool {
    copy_selected(dst, src, include, true)
}

/// Copy the entries of `src` NOT selected by `exclude` into `dst`.
///
/// As with [`copy_filtered`], [`Filter::Unspecified`] copies nothing.
pub fn copy_filtered_not(dst: &mut Value, src: &Value, exclude: Filter<'_>) -> bool {
    copy_selected(dst, src, exclude, false)
}

fn copy_selected(dst: &mut Value, src: &Value, filter: Filter<'_>, copy_on: bool) -> bool {
    if !src.is_collection() || matches!(filter, Filter::Unspecified) {
        return false;
    }

    let mut test = filter.into_test();
    let mut copied = false;
    let _: Option<()> = each_prop(src, None, |entry, key, collection| {
        if entry.is_undefined() {
            return Flow::CONTINUE;
        }
        match test(entry, key, collection) {
            Flow::Continue(hit) => {
                if hit == copy_on {
                    if !dst.is_collection() {
                        *dst = Value::Keyed(Keyed::new());
                    }
                    dst.set(key, entry.clone());
                    copied = true;
                }
                Flow::CONTINUE
            }
            Flow::Stop(_) => Flow::BREAK,
        }
    });
    copied
}

/// A collection of the same shape holding the entries `include` selects.
pub fn obj_filtered(value: &Value, include: Filter<'_>) -> Value {
    let mut filtered = value.empty_like();
    copy_filtered(&mut filtered, value, include);
    filtered
}
