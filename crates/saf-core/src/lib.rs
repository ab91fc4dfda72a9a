//! Row grouping for Simple Archive Format conversion.
//!
//! Turns the flat row sequence of `input.csv` into [`Item`]s: a row with a
//! non-blank `dc.title` opens a new item, every other row only contributes a
//! bitstream to the current one.
//!
//! [`Item`]: saf_model::Item

pub mod grouper;
pub mod sink;

pub use grouper::{RowGrouper, Step, group, group_into, next_step, starts_new_item};
pub use sink::ItemSink;
