use crate::chain::{Chain, ChainNode};

use super::table::ChainSet;

/// Borrowed traversal over every key of a [`ChainSet`], in
/// bucket-then-chain order.
///
/// Advancing follows the current chain's links and, at a chain's end, scans
/// forward for the next non-empty bucket. Exhaustion is `None`; the borrow
/// on the set keeps it from being mutated while the cursor is live.
#[derive(Debug)]
pub struct Iter<'a, K> {
    chains: &'a [Chain<K>],
    bucket_idx: usize,
    node: Option<&'a ChainNode<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(super) fn new(chains: &'a [Chain<K>], len: usize) -> Self {
        Self {
            chains,
            bucket_idx: 0,
            node: None,
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node {
                self.node = node.next.as_deref();
                self.remaining -= 1;
                return Some(&node.key);
            }
            let chain = self.chains.get(self.bucket_idx)?;
            self.node = chain.head_node();
            self.bucket_idx += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<'a, K, S> IntoIterator for &'a ChainSet<K, S> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning traversal, popping keys chain by chain as buckets are consumed.
pub struct IntoIter<K> {
    chains: std::vec::IntoIter<Chain<K>>,
    current: Chain<K>,
    remaining: usize,
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key) = self.current.pop_front() {
                self.remaining -= 1;
                return Some(key);
            }
            self.current = self.chains.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K, S> IntoIterator for ChainSet<K, S> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.len,
            chains: self.buckets.into_iter(),
            current: Chain::new(),
        }
    }
}
