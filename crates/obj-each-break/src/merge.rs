use std::borrow::Cow;

use for_each_break::Flow;
use obj_each_util::Value;
use tracing::trace;

use crate::clone::deep_clone;
use crate::traverse::each_prop;

/// Options for [`merge_defaults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOptions {
    /// How many levels of nested keyed maps to merge into. `0`, the
    /// default, merges at every depth; `1` only fills the top level.
    pub levels: usize,
}

impl MergeOptions {
    fn depth(&self) -> usize {
        if self.levels == 0 {
            usize::MAX
        } else {
            self.levels
        }
    }
}

/// Fill the missing entries of `dst` from `src`.
///
/// A `dst` entry is missing when absent, `Undefined` or `Null`; it then
/// receives a deep copy of the `src` entry. `Undefined` entries of `src` are
/// ignored. While depth allows, keyed maps present on both sides are merged
/// recursively. Sequences are never merged into, only copied whole.
///
/// `dst` is left untouched. The result borrows `dst` when nothing needed
/// filling and owns a modified copy otherwise. Nothing happens unless both
/// sides are collections.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use obj_each_break::merge_defaults;
/// use obj_each_util::Value;
/// use serde_json::json;
///
/// let dst = Value::from(json!({"obj": {"a": "a"}}));
/// let src = Value::from(json!({"obj": {"a": "a", "b": {}}}));
/// let merged = merge_defaults(&dst, &src, None);
/// assert_eq!(*merged, Value::from(json!({"obj": {"a": "a", "b": {}}})));
///
/// let again = merge_defaults(&merged, &src, None);
/// assert!(matches!(again, Cow::Borrowed(_)));
/// ```
pub fn merge_defaults<'a>(dst: &'a Value, src: &Value, options: Option<MergeOptions>) -> Cow<'a, Value> {
    merge_level(dst, src, options.unwrap_or_default().depth())
}

fn merge_level<'a>(dst: &'a Value, src: &Value, levels: usize) -> Cow<'a, Value> {
    let mut merged = Cow::Borrowed(dst);
    if !dst.is_collection() || !src.is_collection() {
        return merged;
    }

    let _: Option<()> = each_prop(src, None, |default, key, _| {
        if default.is_undefined() {
            return Flow::CONTINUE;
        }
        let replacement = match merged.get(key) {
            Some(current) if !current.is_nullish() => {
                if levels > 1 && current.is_keyed() {
                    match merge_level(current, default, levels - 1) {
                        Cow::Owned(nested) => Some(nested),
                        Cow::Borrowed(_) => None,
                    }
                } else {
                    None
                }
            }
            _ => Some(deep_clone(default)),
        };
        if let Some(next) = replacement {
            if let Cow::Borrowed(_) = merged {
                trace!(%key, "Copying destination before first merge write");
            }
            merged.to_mut().set(key, next);
        }
        Flow::CONTINUE
    });
    merged
}

/// In-place [`merge_defaults`]. Returns whether `dst` changed.
pub fn merge_defaults_mut(dst: &mut Value, src: &Value, options: Option<MergeOptions>) -> bool {
    merge_level_mut(dst, src, options.unwrap_or_default().depth())
}

fn merge_level_mut(dst: &mut Value, src: &Value, levels: usize) -> bool {
    if !dst.is_collection() || !src.is_collection() {
        return false;
    }

    let mut changed = false;
    let _: Option<()> = each_prop(src, None, |default, key, _| {
        if default.is_undefined() {
            return Flow::CONTINUE;
        }
        if dst.get(key).map_or(true, Value::is_nullish) {
            dst.set(key, deep_clone(default));
            changed = true;
        } else if levels > 1 {
            if let Some(current) = dst.get_mut(key).filter(|current| current.is_keyed()) {
                changed |= merge_level_mut(current, default, levels - 1);
            }
        }
        Flow::CONTINUE
    });
    changed
}
