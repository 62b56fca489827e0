//! Breakable iteration over plain slices.
//!
//! Callbacks receive `(item, index, slice)`. A bare break (`Flow::BREAK`)
//! ends the loop with no result; a payload break ends it with the payload.
//! `map` and `filter` return whatever was collected before the break.

use crate::flow::Flow;

/// Visit items front to back.
pub fn for_each<V, T, F>(items: &[V], mut callback: F) -> Option<T>
where
    F: FnMut(&V, usize, &[V]) -> Flow<T>,
{
    for (i, item) in items.iter().enumerate() {
        if let Flow::Stop(payload) = callback(item, i, items) {
            return payload;
        }
    }
    None
}

/// Visit items back to front.
pub fn for_each_right<V, T, F>(items: &[V], mut callback: F) -> Option<T>
where
    F: FnMut(&V, usize, &[V]) -> Flow<T>,
{
    let mut i = items.len();
    while i > 0 {
        i -= 1;
        if let Flow::Stop(payload) = callback(&items[i], i, items) {
            return payload;
        }
    }
    None
}

/// Collect callback outputs front to back.
///
/// # Examples
///
/// ```
/// use for_each_break::{map, Flow};
///
/// let doubled = map(&[1, 2, 3, 4], |&n, _, _| {
///     if n == 3 { Flow::BREAK } else { Flow::Continue(n * 2) }
/// });
/// assert_eq!(doubled, vec![2, 4]);
/// ```
pub fn map<V, U, F>(items: &[V], mut callback: F) -> Vec<U>
where
    F: FnMut(&V, usize, &[V]) -> Flow<(), U>,
{
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match callback(item, i, items) {
            Flow::Continue(mapped) => out.push(mapped),
            Flow::Stop(_) => break,
        }
    }
    out
}

/// Collect callback outputs back to front.
pub fn map_right<V, U, F>(items: &[V], mut callback: F) -> Vec<U>
where
    F: FnMut(&V, usize, &[V]) -> Flow<(), U>,
{
    let mut out = Vec::with_capacity(items.len());
    let mut i = items.len();
    while i > 0 {
        i -= 1;
        match callback(&items[i], i, items) {
            Flow::Continue(mapped) => out.push(mapped),
            Flow::Stop(_) => break,
        }
    }
    out
}

/// Keep items whose callback answers `true`, front to back.
pub fn filter<V, F>(items: &[V], mut callback: F) -> Vec<V>
where
    V: Clone,
    F: FnMut(&V, usize, &[V]) -> Flow<(), bool>,
{
    let mut out = Vec::new();
    for (i, item) in items.iter().enumerate() {
        match callback(item, i, items) {
            Flow::Continue(true) => out.push(item.clone()),
            Flow::Continue(false) => {}
            Flow::Stop(_) => break,
        }
    }
    out
}

/// Keep items whose callback answers `true`, back to front.
pub fn filter_right<V, F>(items: &[V], mut callback: F) -> Vec<V>
where
    V: Clone,
    F: FnMut(&V, usize, &[V]) -> Flow<(), bool>,
{
    let mut out = Vec::new();
    let mut i = items.len();
    while i > 0 {
        i -= 1;
        match callback(&items[i], i, items) {
            Flow::Continue(true) => out.push(items[i].clone()),
            Flow::Continue(false) => {}
            Flow::Stop(_) => break,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_visits_all() {
        let mut seen = Vec::new();
        let result: Option<()> = for_each(&["a", "b", "c"], |s, i, all| {
            assert_eq!(all.len(), 3);
            seen.push((i, *s));
            Flow::CONTINUE
        });
        assert_eq!(result, None);
        assert_eq!(seen, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn test_for_each_bare_break() {
        let mut calls = 0;
        let result: Option<i32> = for_each(&[1, 2, 3], |_, _, _| {
            calls += 1;
            Flow::BREAK
        });
        assert_eq!(result, None);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_for_each_right_order() {
        let mut seen = Vec::new();
        let result = for_each_right(&[1, 2, 3], |&n, i, _| {
            seen.push(i);
            if n == 2 {
                Flow::stop_with("two")
            } else {
                Flow::CONTINUE
            }
        });
        assert_eq!(result, Some("two"));
        assert_eq!(seen, vec![2, 1]);
    }

    #[test]
    fn test_for_each_empty() {
        let result: Option<()> = for_each(&[] as &[i32], |_, _, _| Flow::BREAK);
        assert_eq!(result, None);
    }

    #[test]
    fn test_map_and_map_right() {
        assert_eq!(map(&[1, 2, 3], |&n, _, _| Flow::Continue(n + 1)), vec![2, 3, 4]);
        assert_eq!(map_right(&[1, 2, 3], |&n, i, _| Flow::Continue(n * 10 + i)), vec![32, 21, 10]);
        assert_eq!(
            map_right(&[1, 2, 3], |&n, _, _| if n == 1 { Flow::BREAK } else { Flow::Continue(n) }),
            vec![3, 2]
        );
    }

    #[test]
    fn test_filter_and_filter_right() {
        assert_eq!(filter(&[1, 2, 3, 4], |&n, _, _| Flow::Continue(n % 2 == 0)), vec![2, 4]);
        assert_eq!(filter_right(&[1, 2, 3, 4], |&n, _, _| Flow::Continue(n % 2 == 0)), vec![4, 2]);
        assert_eq!(
            filter(&[2, 4, 5, 6], |&n, _, _| if n == 5 { Flow::BREAK } else { Flow::Continue(true) }),
            vec![2, 4]
        );
    }
}
