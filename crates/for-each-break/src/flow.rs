/// What a traversal callback asks the loop to do next.
///
/// `Continue(c)` carries the callback's regular output (`()` for plain
/// iteration, a mapped value or a predicate answer for higher-order
/// operations). `Stop(None)` is a bare break: the traversal ends and its
/// result is whatever default is configured in the active
/// [`BreakContext`](crate::BreakContext). `Stop(Some(v))` ends the traversal
/// with `v` as its result.
///
/// # Examples
///
/// ```
/// use for_each_break::{for_each, Flow};
///
/// let found = for_each(&[1, 5, 10], |&n, i, _| {
///     if n > 3 { Flow::stop_with(i) } else { Flow::CONTINUE }
/// });
/// assert_eq!(found, Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow<T, C = ()> {
    Continue(C),
    Stop(Option<T>),
}

impl<T> Flow<T> {
    /// Keep going.
    pub const CONTINUE: Self = Flow::Continue(());
}

impl<T, C> Flow<T, C> {
    /// Bare break.
    pub const BREAK: Self = Flow::Stop(None);

    /// Break with `value` as the traversal result.
    pub fn stop_with(value: T) -> Self {
        Flow::Stop(Some(value))
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Flow::Stop(_))
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Flow::Continue(_))
    }

    /// Transform the break payload, leaving `Continue` untouched.
    pub fn map_stop<U>(self, f: impl FnOnce(T) -> U) -> Flow<U, C> {
        match self {
            Flow::Continue(c) => Flow::Continue(c),
            Flow::Stop(payload) => Flow::Stop(payload.map(f)),
        }
    }
}

/// How a traversal ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Every entry was visited.
    Completed,
    /// A callback stopped the traversal; holds the payload or, for a bare
    /// break, the default that was configured at that moment.
    Broken(Option<T>),
}

impl<T> Outcome<T> {
    pub fn is_broken(&self) -> bool {
        matches!(self, Outcome::Broken(_))
    }

    /// The broken result, or `completed` when the traversal ran to the end.
    pub fn result_or(self, completed: Option<T>) -> Option<T> {
        match self {
            Outcome::Completed => completed,
            Outcome::Broken(result) => result,
        }
    }
}
