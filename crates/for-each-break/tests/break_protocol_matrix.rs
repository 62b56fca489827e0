//! Break signalling across the slice helpers and nested default scopes.

use for_each_break::{filter, filter_right, for_each, for_each_right, map, map_right, BreakContext, Flow, Outcome};
use proptest::prelude::*;

fn tables() -> Vec<Vec<i32>> {
    vec![vec![], vec![1], vec![1, 2, 3], vec![0], vec![0, 1], vec![0, 1, 2, 3], vec![-4, 7, 7, 0, 9]]
}

#[test]
fn test_for_each_finds_first_match_in_each_direction() {
    for items in tables() {
        let first = for_each(&items, |&n, i, _| if n > 0 { Flow::stop_with(i) } else { Flow::CONTINUE });
        assert_eq!(first, items.iter().position(|&n| n > 0), "{items:?}");

        let last = for_each_right(&items, |&n, i, _| if n > 0 { Flow::stop_with(i) } else { Flow::CONTINUE });
        assert_eq!(last, items.iter().rposition(|&n| n > 0), "{items:?}");
    }
}

#[test]
fn test_callbacks_see_the_whole_slice() {
    let items = [3, 1, 4];
    let mut seen = Vec::new();
    let result: Option<()> = for_each_right(&items, |&n, i, all| {
        assert_eq!(all, &items);
        assert_eq!(all[i], n);
        seen.push(i);
        Flow::CONTINUE
    });
    assert_eq!(result, None);
    assert_eq!(seen, [2, 1, 0]);
}

#[test]
fn test_map_and_filter_stop_before_the_breaking_item() {
    for items in tables() {
        let cut = items.iter().position(|&n| n == 0).unwrap_or(items.len());
        let stop_at_zero = |&n: &i32, _: usize, _: &[i32]| if n == 0 { Flow::BREAK } else { Flow::Continue(n * 10) };

        let mapped = map(&items, stop_at_zero);
        let expected: Vec<i32> = items[..cut].iter().map(|n| n * 10).collect();
        assert_eq!(mapped, expected, "{items:?}");

        let rcut = items.iter().rposition(|&n| n == 0).map_or(0, |i| i + 1);
        let mapped_right = map_right(&items, stop_at_zero);
        let expected_right: Vec<i32> = items[rcut..].iter().rev().map(|n| n * 10).collect();
        assert_eq!(mapped_right, expected_right, "{items:?}");

        let odd = |&n: &i32, _: usize, _: &[i32]| if n == 0 { Flow::BREAK } else { Flow::Continue(n % 2 != 0) };
        let kept = filter(&items, odd);
        let expected_kept: Vec<i32> = items[..cut].iter().copied().filter(|n| n % 2 != 0).collect();
        assert_eq!(kept, expected_kept, "{items:?}");

        let kept_right = filter_right(&items, odd);
        let expected_kept_right: Vec<i32> = items[rcut..].iter().rev().copied().filter(|n| n % 2 != 0).collect();
        assert_eq!(kept_right, expected_kept_right, "{items:?}");
    }
}

#[test]
fn test_nested_scopes_restore_in_order() {
    let mut ctx = BreakContext::with_default("outer");
    {
        let mut first = ctx.scope(Some("first"));
        assert_eq!(first.default_result(), Some(&"first"));
        {
            let mut second = first.scope(None);
            assert_eq!(second.default_result(), None);
            second.set_default("second");
            assert_eq!(second.resolve(None), Some("second"));
            assert_eq!(second.default_result(), None);
        }
        assert_eq!(first.default_result(), Some(&"first"));
        assert_eq!(first.resolve(Some("payload")), Some("payload"));
        assert_eq!(first.default_result(), Some(&"first"));
    }
    assert_eq!(ctx.default_result(), Some(&"outer"));
}

#[test]
fn test_scope_restores_during_unwind() {
    let mut ctx = BreakContext::with_default(1);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut scope = ctx.scope(Some(2));
        scope.set_default(3);
        panic!("callback failed");
    }));
    assert!(result.is_err());
    assert_eq!(ctx.default_result(), Some(&1));
}

#[test]
fn test_outcome_results() {
    let cases = [
        (Outcome::Completed, Some(0), Some(0), false),
        (Outcome::Completed, None, None, false),
        (Outcome::Broken(Some(5)), Some(0), Some(5), true),
        (Outcome::Broken(None), Some(0), None, true),
    ];
    for (outcome, completed, expected, broken) in cases {
        assert_eq!(outcome.is_broken(), broken);
        assert_eq!(outcome.result_or(completed), expected);
    }
}

proptest! {
    #[test]
    fn for_each_matches_position(items in proptest::collection::vec(-50i32..50, 0..40), needle in -50i32..50) {
        let found = for_each(&items, |&n, i, _| if n == needle { Flow::stop_with(i) } else { Flow::CONTINUE });
        prop_assert_eq!(found, items.iter().position(|&n| n == needle));
        let found_right = for_each_right(&items, |&n, i, _| if n == needle { Flow::stop_with(i) } else { Flow::CONTINUE });
        prop_assert_eq!(found_right, items.iter().rposition(|&n| n == needle));
    }

    #[test]
    fn map_right_is_reversed_map(items in proptest::collection::vec(any::<i16>(), 0..40)) {
        let forward = map(&items, |&n, _, _| Flow::Continue(i32::from(n) * 2));
        let mut backward = map_right(&items, |&n, _, _| Flow::Continue(i32::from(n) * 2));
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn scopes_always_restore(defaults in proptest::collection::vec(proptest::option::of(any::<u8>()), 0..8), base in any::<u8>()) {
        let mut ctx = BreakContext::with_default(base);
        for default in defaults {
            let mut scope = ctx.scope(default);
            prop_assert_eq!(scope.default_result().copied(), default);
            scope.take_default();
        }
        prop_assert_eq!(ctx.default_result(), Some(&base));
    }
}
