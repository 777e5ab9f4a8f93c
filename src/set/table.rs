use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash, Hasher};

use log::trace;

use super::TableCheckError;
use super::buckets::BucketArray;
use super::iter::Iter;

/// Bucket count a set starts out with unless configured otherwise.
pub const DEFAULT_TABLE_SIZE: usize = 7;

/// Maximum load factor, in percent. Once an insertion pushes the key count
/// above `table_size * MAX_LOAD_PERCENT / 100`, the table grows.
pub const MAX_LOAD_PERCENT: usize = 70;

/// A hash set resolving collisions by separate chaining.
///
/// Each bucket owns a singly linked chain of keys; new keys are prepended to
/// their home chain, so no ordering between keys is kept. The bucket count
/// only ever grows, doubling whenever the load factor would exceed 0.7.
///
/// Hashing is pluggable through `S`; the default builds
/// [`DefaultHasher`]s with no random seed, so two default-built sets place
/// equal keys in the same buckets.
pub struct ChainSet<K, S = BuildHasherDefault<DefaultHasher>> {
    pub(super) buckets: BucketArray<K>,
    pub(super) len: usize,
    initial_table_size: usize,
    hasher: S,
}

impl<K> ChainSet<K> {
    /// Creates an empty set with [`DEFAULT_TABLE_SIZE`] buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with `table_size` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `table_size` is zero.
    pub fn with_table_size(table_size: usize) -> Self {
        Self::with_table_size_and_hasher(table_size, BuildHasherDefault::default())
    }
}

impl<K, S> ChainSet<K, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_table_size_and_hasher(DEFAULT_TABLE_SIZE, hasher)
    }

    pub fn with_table_size_and_hasher(table_size: usize, hasher: S) -> Self {
        assert!(table_size > 0, "table must have at least one bucket");
        Self {
            buckets: BucketArray::new(table_size),
            len: 0,
            initial_table_size: table_size,
            hasher,
        }
    }

    /// Returns the number of keys in the set
    pub fn len(&self) -> usize {
        self.len
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets, or "slots" of the table
    pub fn bucket_count(&self) -> usize {
        self.buckets.table_size()
    }

    pub fn load_factor_f32(&self) -> f32 {
        self.len as f32 / self.bucket_count() as f32
    }

    /// Drops every chain and resets the bucket array to the capacity the
    /// set was constructed with.
    pub fn clear(&mut self) {
        trace!("clear: dropping {} keys", self.len);
        self.buckets = BucketArray::new(self.initial_table_size);
        self.len = 0;
    }

    /// Visits every key once, bucket by bucket and then chain by chain.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.buckets.chains(), self.len)
    }
}

impl<K: Hash + Eq, S: BuildHasher> ChainSet<K, S> {
    /// Looks up the stored key equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        let i = self.bucket_index(key);
        self.buckets.chain(i).iter().find(|k| *k == key)
    }

    pub fn contains(&self, key: &K) -> bool {
        let chain = self.buckets.chain(self.bucket_index(key));
        if chain.is_empty() {
            return false;
        }
        chain.contains(key)
    }

    /// Number of stored keys equal to `key`: 0 or 1, since the set never
    /// holds duplicates.
    pub fn count(&self, key: &K) -> usize {
        self.contains(key) as usize
    }

    /// Inserts `key`, returning whether it was newly added.
    ///
    /// A key already present is left untouched. After a new key goes in,
    /// the load factor is checked and the table grows if it crossed 0.7.
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }

        self.insert_unchecked(key);
        if self.len * 100 > self.bucket_count() * MAX_LOAD_PERCENT {
            self.grow();
        }
        true
    }

    /// Removes the key equal to `key`, returning whether it was present.
    /// The table never shrinks.
    pub fn remove(&mut self, key: &K) -> bool {
        let i = self.bucket_index(key);
        match self.buckets.chain_mut(i).remove(key) {
            Some(_) => {
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Audits the table's invariants: the key count, every key sitting in
    /// its home bucket, and the load factor bound.
    pub fn check(&self) -> Result<(), TableCheckError> {
        let counted = self.buckets.node_count();
        if counted != self.len {
            return Err(TableCheckError::CountMismatch {
                counted,
                len: self.len,
            });
        }

        for (found, chain) in self.buckets.chains().iter().enumerate() {
            for key in chain.iter() {
                let home = self.bucket_index(key);
                if home != found {
                    return Err(TableCheckError::MisplacedKey {
                        found,
                        home,
                        table_size: self.bucket_count(),
                    });
                }
            }
        }

        if self.len * 100 > self.bucket_count() * MAX_LOAD_PERCENT {
            return Err(TableCheckError::Overloaded {
                len: self.len,
                table_size: self.bucket_count(),
            });
        }

        Ok(())
    }

    // [private]

    fn hash(&self, key: &K) -> u64 {
        let mut h = self.hasher.build_hasher();
        key.hash(&mut h);
        h.finish()
    }

    fn bucket_index(&self, key: &K) -> usize {
        self.buckets.bucket_index(self.hash(key))
    }

    /// Prepends `key` to its home chain without the membership or load
    /// checks. Callers guarantee the key is not already stored.
    fn insert_unchecked(&mut self, key: K) {
        let i = self.bucket_index(&key);
        self.buckets.chain_mut(i).push_front(key);
        self.len += 1;
    }

    /// The growth pass: drain every key, double the bucket count, then
    /// reinsert against the new size. The target size is fixed up front, so
    /// reinsertion skips the load check and cannot grow again mid-pass.
    fn grow(&mut self) {
        let keys = self.buckets.drain_keys();
        let new_size = self.bucket_count() * 2;
        trace!(
            "rehash: redistributing {} keys into {} buckets",
            keys.len(),
            new_size
        );

        self.buckets = BucketArray::new(new_size);
        self.len = 0;
        for key in keys {
            self.insert_unchecked(key);
        }
    }
}

impl<K: fmt::Debug, S> ChainSet<K, S> {
    /// Renders each bucket index and its chain head-to-tail. Debugging
    /// aid only; the output format is not stable.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for (i, chain) in self.buckets.chains().iter().enumerate() {
            write!(out, "bucket[{i}]:")?;
            let mut current = chain.head_node();
            while let Some(node) = current {
                write!(out, " {:?}", node.key)?;
                if node.next.is_some() {
                    write!(out, " -->")?;
                }
                current = node.next.as_deref();
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl<K, S: Default> Default for ChainSet<K, S> {
    fn default() -> Self {
        Self::with_table_size_and_hasher(DEFAULT_TABLE_SIZE, S::default())
    }
}

impl<K: fmt::Debug, S> fmt::Debug for ChainSet<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Set equality: same key count and every key of one present in the other.
/// Bucket layouts may differ, e.g. when the sets grew at different times.
impl<K: Hash + Eq, S: BuildHasher> PartialEq for ChainSet<K, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|key| other.contains(key))
    }
}

impl<K: Hash + Eq, S: BuildHasher> Eq for ChainSet<K, S> {}

impl<K: Hash + Eq + Clone, S: BuildHasher + Clone> Clone for ChainSet<K, S> {
    fn clone(&self) -> Self {
        let mut out = Self {
            buckets: BucketArray::new(self.buckets.table_size()),
            len: 0,
            initial_table_size: self.initial_table_size,
            hasher: self.hasher.clone(),
        };
        // Same table size and hasher, so every key lands in the bucket it
        // occupies in `self` and no growth can trigger.
        for key in self.iter() {
            out.insert_unchecked(key.clone());
        }
        out
    }
}

impl<K: Hash + Eq, S: BuildHasher> Extend<K> for ChainSet<K, S> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Hash + Eq, S: BuildHasher + Default> FromIterator<K> for ChainSet<K, S> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.extend(iter);
        set
    }
}

impl<K: Hash + Eq, const N: usize> From<[K; N]> for ChainSet<K> {
    fn from(keys: [K; N]) -> Self {
        Self::from_iter(keys)
    }
}
