//! Reductions over collection entries.
//!
//! Without a seed the first visited entry becomes the accumulator and the
//! reducer first runs on the second entry. A bare break returns the
//! accumulator as it stood when the reducer was called, unless the reducer
//! configured a different default on the context first. A payload break
//! returns the payload.

use for_each_break::{BreakContext, Flow, Outcome};
use obj_each_util::{Key, Value};
use tracing::debug;

use crate::error::ObjEachError;
use crate::traverse::{traverse, Order};

/// The shared reduce driver.
///
/// The reducer receives `(ctx, accumulator, value, key, collection)` and
/// returns the next accumulator in `Continue`. The context is shared with
/// any traversal the reducer starts, so nested reductions keep their own
/// defaults.
///
/// # Errors
///
/// [`ObjEachError::EmptyReduce`] when `value` has no own entries and no
/// seed is given.
///
/// # Examples
///
/// ```
/// use obj_each_break::{obj_reduce_iterated, BreakContext, Flow, Order};
/// use obj_each_util::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!([1, 2, 3, 4]));
/// let mut ctx = BreakContext::new();
/// let result = obj_reduce_iterated(&value, Order::Forward, &mut ctx, None, |ctx, acc, entry, _, _| {
///     let sum = acc.to_number() + entry.to_number();
///     if sum > 5.0 {
///         ctx.set_default(Value::from("too big"));
///         return Flow::BREAK;
///     }
///     Flow::Continue(Value::from(sum))
/// });
/// assert_eq!(result, Ok(Value::from("too big")));
/// ```
pub fn obj_reduce_iterated<F>(
    value: &Value,
    order: Order,
    ctx: &mut BreakContext<Value>,
    seed: Option<Value>,
    reducer: F,
) -> Result<Value, ObjEachError>
where
    F: FnMut(&mut BreakContext<Value>, &Value, &Value, Key<'_>, &Value) -> Flow<Value, Value>,
{
    reduce_entries(value, order, ctx, seed, reducer).ok_or_else(|| {
        debug!(?order, "Reduce of empty collection rejected");
        ObjEachError::EmptyReduce
    })
}

fn reduce_entries<F>(
    value: &Value,
    order: Order,
    ctx: &mut BreakContext<Value>,
    seed: Option<Value>,
    mut reducer: F,
) -> Option<Value>
where
    F: FnMut(&mut BreakContext<Value>, &Value, &Value, Key<'_>, &Value) -> Flow<Value, Value>,
{
    let mut reduced = seed;
    let outcome = traverse(value, order, ctx, None, |ctx, entry, key, collection| {
        let Some(acc) = reduced.as_ref() else {
            reduced = Some(entry.clone());
            return Flow::CONTINUE;
        };
        ctx.set_default(acc.clone());
        match reducer(ctx, acc, entry, key, collection) {
            Flow::Continue(next) => {
                reduced = Some(next);
                Flow::CONTINUE
            }
            Flow::Stop(Some(result)) => Flow::stop_with(result),
            Flow::Stop(None) => Flow::Stop(ctx.take_default()),
        }
    });

    match outcome {
        Outcome::Broken(Some(result)) => Some(result),
        Outcome::Broken(None) | Outcome::Completed => reduced,
    }
}

fn without_ctx<F>(
    mut reducer: F,
) -> impl FnMut(&mut BreakContext<Value>, &Value, &Value, Key<'_>, &Value) -> Flow<Value, Value>
where
    F: FnMut(&Value, &Value, Key<'_>, &Value) -> Flow<Value, Value>,
{
    move |_: &mut BreakContext<Value>, acc: &Value, entry: &Value, key: Key<'_>, collection: &Value| {
        reducer(acc, entry, key, collection)
    }
}

/// Reduce in storage order.
pub fn obj_reduce<F>(value: &Value, reducer: F) -> Result<Value, ObjEachError>
where
    F: FnMut(&Value, &Value, Key<'_>, &Value) -> Flow<Value, Value>,
{
    let mut ctx = BreakContext::new();
    obj_reduce_iterated(value, Order::Unordered, &mut ctx, None, without_ctx(reducer))
}

/// Reduce index entries ascending, then named entries ascending.
///
/// # Examples
///
/// ```
/// use obj_each_break::{obj_reduce_left, Flow, ObjEachError};
/// use obj_each_util::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({"b": "B", "0": "a"}));
/// let joined = obj_reduce_left(&value, |acc, entry, _, _| {
///     Flow::Continue(Value::from(format!("{}{}", acc.as_str().unwrap_or(""), entry.as_str().unwrap_or(""))))
/// });
/// assert_eq!(joined, Ok(Value::from("aB")));
///
/// let empty = Value::from(json!({}));
/// assert_eq!(obj_reduce_left(&empty, |acc, _, _, _| Flow::Continue(acc.clone())), Err(ObjEachError::EmptyReduce));
/// ```
pub fn obj_reduce_left<F>(value: &Value, reducer: F) -> Result<Value, ObjEachError>
where
    F: FnMut(&Value, &Value, Key<'_>, &Value) -> Flow<Value, Value>,
{
    let mut ctx = BreakContext::new();
    obj_reduce_iterated(value, Order::Forward, &mut ctx, None, without_ctx(reducer))
}

/// Reduce named entries descending, then index entries descending.
pub fn obj_reduce_right<F>(value: &Value, reducer: F) -> Result<Value, ObjEachError>
where
    F: FnMut(&Value, &Value, Key<'_>, &Value) -> Flow<Value, Value>,
{
    let mut ctx = BreakContext::new();
    obj_reduce_iterated(value, Order::Reverse, &mut ctx, None, without_ctx(reducer))
}

/// [`obj_reduce`] starting from `seed`; every entry goes through the reducer.
pub fn obj_reduce_from<F>(value: &Value, seed: Value, reducer: F) -> Value
where
    F: FnMut(&Value, &Value, Key<'_>, &Value) -> Flow<Value, Value>,
{
    let mut ctx = BreakContext::new();
    reduce_entries(value, Order::Unordered, &mut ctx, Some(seed), without_ctx(reducer)).unwrap_or_default()
}

pub fn obj_reduce_left_from<F>(value: &Value, seed: Value, reducer: F) -> Value
where
    F: FnMut(&Value, &Value, Key<'_>, &Value) -> Flow<Value, Value>,
{
    let mut ctx = BreakContext::new();
    reduce_entries(value, Order::Forward, &mut ctx, Some(seed), without_ctx(reducer)).unwrap_or_default()
}

pub fn obj_reduce_right_from<F>(value: &Value, seed: Value, reducer: F) -> Value
where
    F: FnMut(&Value, &Value, Key<'_>, &Value) -> Flow<Value, Value>,
{
    let mut ctx = BreakContext::new();
    reduce_entries(value, Order::Reverse, &mut ctx, Some(seed), without_ctx(reducer)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn add(acc: &Value, entry: &Value, _: Key<'_>, _: &Value) -> Flow<Value, Value> {
        Flow::Continue(Value::from(acc.to_number() + entry.to_number()))
    }

    #[test]
    fn test_empty_without_seed_fails() {
        assert_eq!(obj_reduce(&Value::from(json!([])), add), Err(ObjEachError::EmptyReduce));
        assert_eq!(obj_reduce_right(&Value::Null, add), Err(ObjEachError::EmptyReduce));
    }

    #[test]
    fn test_empty_with_seed_returns_seed() {
        assert_eq!(obj_reduce_from(&Value::from(json!({})), Value::from(7), add), Value::from(7));
        assert_eq!(obj_reduce_left_from(&Value::from(json!([])), Value::Null, add), Value::Null);
    }

    #[test]
    fn test_single_entry_skips_reducer() {
        let mut calls = 0;
        let result = obj_reduce_left(&Value::from(json!({"only": "x"})), |acc, _, _, _| {
            calls += 1;
            Flow::Continue(acc.clone())
        });
        assert_eq!(result, Ok(Value::from("x")));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_seeded_reduce_visits_every_entry() {
        let value = Value::from(json!([1, 2, 3]));
        let mut keys = Vec::new();
        let result = obj_reduce_right_from(&value, Value::from(100), |acc, entry, key, _| {
            keys.push(key.to_string());
            add(acc, entry, key, &Value::Null)
        });
        assert_eq!(result, Value::from(106));
        assert_eq!(keys, ["2", "1", "0"]);
    }

    #[test]
    fn test_left_and_right_orders() {
        let value = Value::from(json!({"b": "b", "1": "1", "a": "a", "0": "0"}));
        let concat = |acc: &Value, entry: &Value, _: Key<'_>, _: &Value| {
            Flow::Continue(Value::from(format!(
                "{}{}",
                acc.as_str().unwrap_or_default(),
                entry.as_str().unwrap_or_default()
            )))
        };
        assert_eq!(obj_reduce_left(&value, concat), Ok(Value::from("01ab")));
        assert_eq!(obj_reduce_right(&value, concat), Ok(Value::from("ba10")));
    }

    #[test]
    fn test_bare_break_returns_accumulator() {
        let value = Value::from(json!([1, 2, 3, 4]));
        let result = obj_reduce_left(&value, |acc, entry, _, _| {
            if entry.to_number() == 3.0 {
                Flow::BREAK
            } else {
                add(acc, entry, Key::Index(0), &Value::Null)
            }
        });
        assert_eq!(result, Ok(Value::from(3)));
    }

    #[test]
    fn test_payload_break_returns_payload() {
        let value = Value::from(json!([1, 2, 3]));
        let result = obj_reduce(&value, |_, _, _, _| Flow::stop_with(Value::from("done")));
        assert_eq!(result, Ok(Value::from("done")));
    }

    #[test]
    fn test_caller_default_is_restored() {
        let value = Value::from(json!([1, 2]));
        let mut ctx = BreakContext::with_default(Value::from("outer"));
        let result = obj_reduce_iterated(&value, Order::Forward, &mut ctx, None, |ctx, acc, _, _, _| {
            assert_eq!(ctx.default_result(), Some(acc));
            ctx.set_default(Value::from("inner"));
            Flow::BREAK
        });
        assert_eq!(result, Ok(Value::from("inner")));
        assert_eq!(ctx.default_result(), Some(&Value::from("outer")));
    }

    #[test]
    fn test_default_tracks_accumulator() {
        let value = Value::from(json!([1, 2, 3, 4]));
        let mut ctx = BreakContext::new();
        let mut defaults = Vec::new();
        let result = obj_reduce_iterated(&value, Order::Forward, &mut ctx, None, |ctx, acc, entry, _, _| {
            defaults.push(ctx.default_result().map(Value::to_number));
            if entry.to_number() == 4.0 {
                return Flow::BREAK;
            }
            Flow::Continue(Value::from(acc.to_number() + entry.to_number()))
        });
        assert_eq!(result, Ok(Value::from(6)));
        assert_eq!(defaults, [Some(1.0), Some(3.0), Some(6.0)]);
        assert_eq!(ctx.default_result(), None);
    }
}
