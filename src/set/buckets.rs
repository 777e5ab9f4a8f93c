use crate::chain::Chain;

/// The bucket array: one collision chain per slot.
///
/// Owns all stored keys. Addressing uses plain modulo on the current bucket
/// count, so any index computed before a resize is stale afterwards; the
/// table controller always re-derives indices from the live array.
#[derive(Debug)]
pub(crate) struct BucketArray<K> {
    buckets: Vec<Chain<K>>,
}

impl<K> BucketArray<K> {
    pub fn new(table_size: usize) -> Self {
        Self {
            buckets: (0..table_size).map(|_| Chain::new()).collect(),
        }
    }

    /// Number of bucket slots.
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Maps a finished hash to a slot of the *current* array.
    pub fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    pub fn chain(&self, index: usize) -> &Chain<K> {
        &self.buckets[index]
    }

    pub fn chain_mut(&mut self, index: usize) -> &mut Chain<K> {
        &mut self.buckets[index]
    }

    pub fn chains(&self) -> &[Chain<K>] {
        &self.buckets
    }

    /// Total nodes across all chains. `ChainSet::check` compares this
    /// against the controller's key count.
    pub fn node_count(&self) -> usize {
        self.buckets.iter().map(Chain::len).sum()
    }

    /// Empties every chain, returning all keys in bucket-then-chain order.
    /// Used by the growth pass before the array is replaced.
    pub fn drain_keys(&mut self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.node_count());
        for chain in &mut self.buckets {
            while let Some(key) = chain.pop_front() {
                keys.push(key);
            }
        }
        keys
    }
}

impl<K> IntoIterator for BucketArray<K> {
    type Item = Chain<K>;
    type IntoIter = std::vec::IntoIter<Chain<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}
