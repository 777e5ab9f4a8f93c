use thiserror::Error;

mod buckets;
mod iter;
mod table;

/// Violations reported by [`ChainSet::check`], which audits the table's
/// internal invariants. Regular operations never produce these; they exist
/// for tests and debugging.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableCheckError {
    #[error("stored key count is {counted}, but len says {len}")]
    CountMismatch { counted: usize, len: usize },

    #[error("key in bucket {found} hashes to bucket {home} (table size {table_size})")]
    MisplacedKey {
        found: usize,
        home: usize,
        table_size: usize,
    },

    #[error("load factor bound violated: {len} keys in {table_size} buckets")]
    Overloaded { len: usize, table_size: usize },
}

pub use iter::{IntoIter, Iter};
pub use table::{ChainSet, DEFAULT_TABLE_SIZE, MAX_LOAD_PERCENT};
