//! Single-slot memoization keyed by value.

/// Holds the most recent `(key, value)` pair. A lookup with an equal key
/// returns the stored value; any other key recomputes and replaces it.
#[derive(Debug)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    computations: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        let hit = matches!(&self.slot, Some((cached, _)) if *cached == key);
        if !hit {
            self.slot = None;
        }
        let computations = &mut self.computations;
        let (_, value) = self.slot.get_or_insert_with(|| {
            *computations += 1;
            let value = compute(&key);
            (key, value)
        });
        value
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// Number of times a value has been computed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_reuses_equal_key() {
        let mut memo = Memo::new();
        assert_eq!(*memo.get_or_compute((1, true), |_| "a"), "a");
        assert_eq!(*memo.get_or_compute((1, true), |_| "b"), "a");
        assert_eq!(memo.computations(), 1);
    }

    #[test]
    fn test_memo_recomputes_on_key_change() {
        let mut memo = Memo::new();
        memo.get_or_compute((1, true), |(n, _)| n * 10);
        assert_eq!(*memo.get_or_compute((2, true), |(n, _)| n * 10), 20);
        assert_eq!(*memo.get_or_compute((2, false), |(n, _)| n * 100), 200);
        assert_eq!(memo.computations(), 3);
    }

    #[test]
    fn test_memo_invalidate() {
        let mut memo = Memo::new();
        memo.get_or_compute("k", |_| 1);
        memo.invalidate();
        assert_eq!(*memo.get_or_compute("k", |_| 2), 2);
    }
}
