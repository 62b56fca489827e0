//! Ordered, breakable iteration over arrays and objects.
//!
//! Sequences and keyed maps are handled as one kind of property collection.
//! Every operation here is built on a single traversal engine that visits
//! own entries in a well defined order:
//!
//! - forward: index keys ascending, then named keys ascending
//! - reverse: named keys descending, then index keys descending
//! - unordered: storage order
//!
//! Callbacks steer the traversal with [`Flow`]. A bare break resolves to the
//! default configured on the shared [`BreakContext`], which nested
//! traversals push and pop without disturbing their caller.
//!
//! # Example
//!
//! ```
//! use obj_each_break::{each_right, obj_reduce_left, Flow, Key};
//! use obj_each_util::Value;
//! use serde_json::json;
//!
//! let value = Value::from(json!({"b": 2, "1": 10, "a": 1, "0": 20}));
//!
//! let mut order = Vec::new();
//! let _: Option<()> = each_right(&value, |_, key, _| {
//!     order.push(key.to_string());
//!     Flow::CONTINUE
//! });
//! assert_eq!(order, ["b", "a", "1", "0"]);
//!
//! let total = obj_reduce_left(&value, |acc, entry, _, _| {
//!     Flow::Continue(Value::from(acc.to_number() + entry.to_number()))
//! });
//! assert_eq!(total, Ok(Value::from(33)));
//! ```

pub mod clone;
pub mod error;
pub mod items;
pub mod key_filter;
pub mod merge;
pub mod partition;
pub mod predicate;
pub mod reduce;
pub mod transform;
pub mod traverse;

pub use clone::{clone_array_object, deep_clone};
pub use error::ObjEachError;
pub use items::{array_length, delete_items};
pub use key_filter::{EntryTest, Filter};
pub use merge::{merge_defaults, merge_defaults_mut, MergeOptions};
pub use partition::{array_object_keys, ArrayObjectKeys, IndexValues};
pub use predicate::{has_own_properties, obj_every, obj_some};
pub use reduce::{
    obj_reduce, obj_reduce_from, obj_reduce_iterated, obj_reduce_left, obj_reduce_left_from, obj_reduce_right,
    obj_reduce_right_from,
};
pub use transform::{copy_filtered, copy_filtered_not, obj_filter, obj_filtered, obj_map, obj_mapped};
pub use traverse::{
    each, each_dir, each_dir_with, each_prop, each_prop_with, each_right, each_right_with, each_with, traverse, Order,
};

// Re-exports for convenience
pub use for_each_break::{
    filter, filter_right, for_each, for_each_right, map, map_right, BreakContext, DefaultScope, Flow, Outcome,
};
pub use obj_each_util::{Key, Keyed, Sequence, Value};
