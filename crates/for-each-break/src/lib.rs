//! Break signalling for callback-driven iteration.
//!
//! A callback steers its loop by returning a [`Flow`]: keep going, stop with
//! the configured default, or stop with an explicit result. The default a
//! bare break produces lives in a [`BreakContext`] that nested loops share;
//! every loop pushes its own default through a [`DefaultScope`], which puts
//! the caller's default back when it goes out of scope.
//!
//! # Example
//!
//! ```
//! use for_each_break::{for_each_right, BreakContext, Flow};
//!
//! let last_even = for_each_right(&[1, 2, 3, 4, 5], |&n, _, _| {
//!     if n % 2 == 0 { Flow::stop_with(n) } else { Flow::CONTINUE }
//! });
//! assert_eq!(last_even, Some(4));
//!
//! let mut ctx = BreakContext::new();
//! {
//!     let mut scope = ctx.scope(Some("inner"));
//!     assert_eq!(scope.resolve(None), Some("inner"));
//! }
//! assert_eq!(ctx.resolve(None), None);
//! ```

pub mod context;
pub mod flow;
pub mod slice;

pub use context::{BreakContext, DefaultScope};
pub use flow::{Flow, Outcome};
pub use slice::{filter, filter_right, for_each, for_each_right, map, map_right};
