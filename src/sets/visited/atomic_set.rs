use std::sync::atomic::{AtomicU64, Ordering};

const WORD_BITS: usize = u64::BITS as usize;

/// Visited markers shared by every worker of a parallel traversal.
///
/// Bits are packed into `AtomicU64` words. [`claim`](AtomicVisitedSet::claim)
/// is a single `fetch_or` on the containing word, so among any number of
/// concurrent claims on the same vertex exactly one observes the bit clear
/// and wins. Once a bit is set it is never cleared for the lifetime of the set.
///
/// # Examples
///
/// ```
/// use frontier::sets::visited::AtomicVisitedSet;
///
/// let seen = AtomicVisitedSet::new(100);
/// assert!(seen.claim(42));
/// assert!(!seen.claim(42));
/// ```
pub struct AtomicVisitedSet {
    words: Box<[AtomicU64]>,
    capacity: usize,
}

impl AtomicVisitedSet {
    pub fn new(capacity: usize) -> Self {
        let words = (0..capacity.div_ceil(WORD_BITS))
            .map(|_| AtomicU64::new(0))
            .collect();
        Self { words, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(index < self.capacity);
        (index / WORD_BITS, 1u64 << (index % WORD_BITS))
    }

    /// Atomically marks `index`; returns `true` iff this call set the bit.
    ///
    /// `Relaxed` is enough: the read-modify-write is atomic on its own, and
    /// the level barrier (thread join) publishes everything else.
    ///
    /// # Panics
    /// Panics if `index >= capacity`.
    #[inline(always)]
    pub fn claim(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        let prev = self.words[word].fetch_or(mask, Ordering::Relaxed);
        prev & mask == 0
    }

    /// # Panics
    /// Panics if `index >= capacity`.
    pub fn is_claimed(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        self.words[word].load(Ordering::Relaxed) & mask != 0
    }

    /// Number of claimed vertices. Only meaningful once no claims are in flight.
    pub fn count(&self) -> usize {
        self.words
            .iter()
            .map(|w| w.load(Ordering::Relaxed).count_ones() as usize)
            .sum()
    }
}
