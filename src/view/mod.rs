//! Sort and filter projections over card lists.
//!
//! Both operations are pure and order-stable: they take a slice, return
//! a new sequence, and can be re-applied any number of times.
//!
//! ## Key Types
//!
//! - `SortKey` / `SortDirection` / `SortConfig`: sort selection with
//!   the column-header toggle behavior
//! - `sorted`: stable sorted copy
//! - `CardFilter` / `filtered`: conjunctive predicate set
//! - `distinct_types` / `distinct_sets`: filter option lists

pub mod filter;
pub mod sort;

pub use filter::{distinct_sets, distinct_types, filtered, CardFilter, SIX_PLUS};
pub use sort::{compare, sorted, SortConfig, SortDirection, SortKey};
