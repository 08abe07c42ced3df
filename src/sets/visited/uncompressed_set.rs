use crate::sets::visited::VisitorSet;

/// Visited markers for a single-threaded traversal: one bit per vertex,
/// packed into a contiguous buffer of bytes.
///
/// # Examples
///
/// ```
/// use frontier::sets::visited::{UncompressedSet, VisitorSet};
///
/// let mut seen = UncompressedSet::new(10);
/// assert!(seen.claim(3));
/// assert!(!seen.claim(3));
/// assert!(seen.get(3));
/// ```
pub struct UncompressedSet {
    /*private*/ buffer: Box<[u8]>,
    /*private*/ capacity: usize,
}

impl UncompressedSet {
    /// Constructs a set with room for `capacity` vertices, none of them marked.
    pub fn new(capacity: usize) -> Self {
        let bytes_needed: usize = capacity.div_ceil(8);
        UncompressedSet {
            buffer: vec![0u8; bytes_needed].into_boxed_slice(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of marked vertices.
    pub fn count(&self) -> usize {
        self.buffer.iter().map(|b| b.count_ones() as usize).sum()
    }

    #[inline]
    fn locate(&self, index: usize) -> (usize, u8) {
        assert!(index < self.capacity);
        (index / 8, 1u8 << (index % 8))
    }
}

impl VisitorSet for UncompressedSet {
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    #[inline]
    fn set(&mut self, index: usize) {
        let (byte, mask) = self.locate(index);
        self.buffer[byte] |= mask
    }

    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    #[inline]
    fn get(&self, index: usize) -> bool {
        let (byte, mask) = self.locate(index);
        self.buffer[byte] & mask != 0
    }

    #[inline]
    fn claim(&mut self, index: usize) -> bool {
        let (byte, mask) = self.locate(index);
        let was_clear = self.buffer[byte] & mask == 0;
        self.buffer[byte] |= mask;
        was_clear
    }
}
