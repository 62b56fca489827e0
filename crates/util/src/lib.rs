//! obj-each-util - value model and coercion helpers for obj-each-break
//!
//! This crate provides the dynamic [`Value`] type that property-collection
//! operations work on, the [`Key`] type used to address collection entries,
//! and the array-index/number coercions the traversal engine relies on.

pub mod coerce;
pub mod fuzzer;
pub mod json;
pub mod key;
pub mod value;

// Re-exports for convenience
pub use coerce::{is_array_index, number_to_array_index, to_array_index, to_number, MAX_ARRAY_INDEX};
pub use fuzzer::Fuzzer;
pub use key::Key;
pub use value::{Keyed, Sequence, Value};
