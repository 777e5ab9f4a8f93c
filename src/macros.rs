/// Builds a [`ChainSet`](crate::ChainSet) from a list of keys, collapsing
/// duplicates: `chainset![1, 1, 2]` holds two keys.
#[macro_export]
macro_rules! chainset {
    () => {
        $crate::ChainSet::new()
    };
    ($($key:expr),+ $(,)?) => {{
        let mut set = $crate::ChainSet::new();
        $( set.insert($key); )+
        set
    }};
}

#[cfg(test)]
mod test {
    use crate::ChainSet;

    #[test]
    fn literal_construction() {
        let s = chainset![1, 1, 2];
        assert_eq!(s.len(), 2);
        assert!(s.contains(&1));
        assert!(s.contains(&2));

        let empty: ChainSet<u8> = chainset![];
        assert!(empty.is_empty());

        // trailing comma
        let t = chainset!["a", "b",];
        assert_eq!(t.len(), 2);
    }
}
