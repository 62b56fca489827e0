//! Reductions that start further reductions from inside the reducer, and
//! the default results they leave behind.

use obj_each_break::{
    obj_reduce, obj_reduce_iterated, obj_reduce_left, obj_reduce_right, BreakContext, Flow, Key, ObjEachError,
    Order, Value,
};
use serde_json::json;

fn sum_nested(value: &Value) -> f64 {
    if value.is_sequence() {
        obj_reduce(value, |acc, entry, _, _| {
            Flow::Continue(Value::from(sum_nested(acc) + sum_nested(entry)))
        })
        .map(|total| total.to_number())
        .unwrap_or(0.0)
    } else if value.is_undefined() {
        0.0
    } else {
        value.to_number()
    }
}

fn sum(acc: &Value, entry: &Value, _: Key<'_>, _: &Value) -> Flow<Value, Value> {
    Flow::Continue(Value::from(sum_nested(acc) + sum_nested(entry)))
}

fn nested() -> Value {
    Value::from(json!([[1, 2, 3], [10, 20, 30], [100, 200, 300]]))
}

#[test]
fn test_nested_sums_in_every_direction() {
    assert_eq!(obj_reduce_left(&nested(), sum), Ok(Value::from(666)));
    assert_eq!(obj_reduce_right(&nested(), sum), Ok(Value::from(666)));
    assert_eq!(obj_reduce(&nested(), sum), Ok(Value::from(666)));
}

#[test]
fn test_nested_sum_skips_undefined_leaders() {
    let mut value = Value::from(json!([null, null, [1, 2, 3], [10, 20, 30], [100, 200, 300]]));
    let seq = value.as_sequence_mut().unwrap();
    seq.set(0, Value::Undefined);
    seq.set(1, Value::Undefined);
    assert_eq!(obj_reduce_left(&value, sum), Ok(Value::from(666)));
}

#[test]
fn test_left_first_call_sees_first_two_entries() {
    let mut calls = 0;
    let result = obj_reduce_left(&nested(), |acc, entry, key, _| {
        calls += 1;
        assert_eq!(*acc, Value::from(json!([1, 2, 3])));
        assert_eq!(*entry, Value::from(json!([10, 20, 30])));
        assert_eq!(key, Key::Index(1));
        Flow::BREAK
    });
    assert_eq!(calls, 1);
    assert_eq!(result, Ok(Value::from(json!([1, 2, 3]))));
}

#[test]
fn test_right_first_call_sees_last_two_entries() {
    let value = Value::from(json!([[1, 2, 3], [10, 20, 30], [100, 200, 300], [1000, 2000, 3000]]));
    let mut calls = 0;
    let result = obj_reduce_right(&value, |acc, entry, key, _| {
        calls += 1;
        assert_eq!(*acc, Value::from(json!([1000, 2000, 3000])));
        assert_eq!(*entry, Value::from(json!([100, 200, 300])));
        assert_eq!(key, Key::Index(2));
        Flow::BREAK
    });
    assert_eq!(calls, 1);
    assert_eq!(result, Ok(Value::from(json!([1000, 2000, 3000]))));
}

#[test]
fn test_nested_break_defaults_stay_isolated() {
    let mut value = Value::from(json!([null, null, [1, 2, 3], [10, 20, 30], [100, 200, 300]]));
    let seq = value.as_sequence_mut().unwrap();
    seq.set(0, Value::Undefined);
    seq.set(1, Value::Undefined);

    let mut inner_results = Vec::new();
    let mut ctx = BreakContext::new();
    let result = obj_reduce_iterated(&value, Order::Forward, &mut ctx, None, |ctx, _, entry, _, _| {
        if entry.is_undefined() {
            return Flow::Continue(Value::Undefined);
        }
        ctx.set_default(Value::from(0));
        if entry.is_sequence() {
            let inner = obj_reduce_iterated(entry, Order::Forward, ctx, None, |ctx, _, _, _, _| {
                ctx.set_default(Value::from(100));
                Flow::BREAK
            });
            inner_results.push(inner);
        }
        Flow::BREAK
    });

    assert_eq!(inner_results, vec![Ok(Value::from(100))]);
    assert_eq!(result, Ok(Value::from(0)));
    assert_eq!(ctx.default_result(), None);
}

#[test]
fn test_inner_error_does_not_disturb_outer_reduce() {
    let value = Value::from(json!([[], [5], [6, 7]]));
    let mut errors = 0;
    let mut ctx = BreakContext::new();
    let result = obj_reduce_iterated(
        &value,
        Order::Forward,
        &mut ctx,
        Some(Value::from(0)),
        |ctx, acc, entry, _, _| {
            let inner = obj_reduce_iterated(entry, Order::Forward, ctx, None, |_, acc, entry, _, _| {
                Flow::Continue(Value::from(acc.to_number() + entry.to_number()))
            });
            match inner {
                Ok(total) => Flow::Continue(Value::from(acc.to_number() + total.to_number())),
                Err(ObjEachError::EmptyReduce) => {
                    errors += 1;
                    Flow::Continue(acc.clone())
                }
                Err(other) => panic!("unexpected error {other}"),
            }
        },
    );
    assert_eq!(result, Ok(Value::from(18)));
    assert_eq!(errors, 1);
}

#[test]
fn test_keyed_collections_reduce_like_arrays() {
    let value = Value::from(json!({"2": [100, 200, 300], "0": [1, 2, 3], "1": [10, 20, 30]}));
    assert_eq!(obj_reduce_left(&value, sum), Ok(Value::from(666)));

    let mut order = Vec::new();
    let _ = obj_reduce_right(&value, |acc, _, key, _| {
        order.push(key.to_string());
        Flow::Continue(acc.clone())
    });
    assert_eq!(order, ["1", "0"]);
}
