//! A hash set with separate chaining.
//!
//! Keys are stored in a bucket array where each bucket owns a singly linked
//! chain of nodes. When the number of keys exceeds 0.7 of the bucket count,
//! the table is rebuilt at double the size and every key is redistributed.

mod chain;
mod macros;
mod set;

pub use set::{ChainSet, IntoIter, Iter, TableCheckError};
pub use set::{DEFAULT_TABLE_SIZE, MAX_LOAD_PERCENT};
