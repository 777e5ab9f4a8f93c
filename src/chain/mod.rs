/// A singly linked collision chain.
///
/// Each bucket of the table owns one of these. Nodes own their successor
/// through a `Box`, so dropping the head would normally tear the whole chain
/// down recursively; `Drop` is implemented iteratively instead so long
/// chains cannot blow the stack.
pub(crate) struct Chain<K> {
    head: Option<Box<ChainNode<K>>>,
    len: usize,
}

pub(crate) struct ChainNode<K> {
    pub(crate) key: K,
    pub(crate) next: Option<Box<ChainNode<K>>>,
}

impl<K> Chain<K> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Prepends `key`, making it the new chain head. O(1).
    pub fn push_front(&mut self, key: K) {
        self.head = Some(Box::new(ChainNode {
            key,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<K> {
        match self.head.take() {
            None => None,
            Some(mut node) => {
                self.head = node.next.take();
                self.len -= 1;
                Some(node.key)
            }
        }
    }

    pub fn head_node(&self) -> Option<&ChainNode<K>> {
        self.head.as_deref()
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            current: self.head.as_deref(),
            len: self.len,
        }
    }
}

impl<K: Eq> Chain<K> {
    pub fn contains(&self, key: &K) -> bool {
        self.iter().any(|k| k == key)
    }

    /// Unlinks the first node equal to `key`, fixing up the previous link
    /// (or the head) and returning the removed key.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key != *key) {
            link = &mut link.as_mut().unwrap().next;
        }

        let mut node = link.take()?;
        *link = node.next.take();
        self.len -= 1;
        Some(node.key)
    }
}

impl<K> Drop for Chain<K> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            // node goes out of scope here, calling drop
        }
    }
}

impl<K> Default for Chain<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for Chain<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for ChainNode<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.key)
    }
}

// [iterators]

pub(crate) struct Iter<'a, K> {
    current: Option<&'a ChainNode<K>>,
    len: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current.take() {
            None => None,
            Some(node) => {
                self.current = node.next.as_deref();
                self.len -= 1;
                Some(&node.key)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

#[cfg(test)]
mod tests {
    use super::Chain;

    #[test]
    fn push_and_len() {
        let mut chain = Chain::new();

        for i in 0..10 {
            chain.push_front(i);
        }

        assert_eq!(10, chain.len());
        assert!(!chain.is_empty());
    }

    #[test]
    fn pop() {
        let mut chain = Chain::new();

        // Check empty chain behaves right
        assert!(chain.pop_front().is_none());

        chain.push_front(1);
        chain.push_front(2);
        chain.push_front(3);

        // Most recently inserted comes first
        assert_eq!(chain.pop_front(), Some(3));
        assert_eq!(chain.pop_front(), Some(2));

        chain.push_front(5);
        assert_eq!(chain.pop_front(), Some(5));

        // Check exhaustion
        assert_eq!(chain.pop_front(), Some(1));
        assert!(chain.pop_front().is_none());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn contains() {
        let mut chain = Chain::new();
        assert!(!chain.contains(&7));

        chain.push_front(7);
        chain.push_front(11);

        assert!(chain.contains(&7));
        assert!(chain.contains(&11));
        assert!(!chain.contains(&42));
    }

    #[test]
    fn remove_head_middle_tail() {
        let mut chain = Chain::new();
        for i in 0..5 {
            chain.push_front(i);
        }
        // chain is 4 -> 3 -> 2 -> 1 -> 0

        assert_eq!(chain.remove(&4), Some(4)); // head
        assert_eq!(chain.remove(&2), Some(2)); // middle
        assert_eq!(chain.remove(&0), Some(0)); // tail
        assert_eq!(chain.remove(&9), None);

        assert_eq!(chain.len(), 2);
        assert!(chain.contains(&3));
        assert!(chain.contains(&1));
    }

    #[test]
    fn iter_order() {
        let mut chain = Chain::new();
        for i in 0..4 {
            chain.push_front(i);
        }

        let keys: Vec<_> = chain.iter().copied().collect();
        assert_eq!(keys, vec![3, 2, 1, 0]);
        assert_eq!(chain.iter().size_hint(), (4, Some(4)));
    }

    #[test]
    fn long_chain_drop() {
        // A recursive drop would overflow the stack here
        let mut chain = Chain::new();
        for i in 0..200_000 {
            chain.push_front(i);
        }
        drop(chain);
    }
}
