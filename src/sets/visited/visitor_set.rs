/// Single-owner visited markers.
pub trait VisitorSet {
    fn get(&self, i: usize) -> bool;
    fn set(&mut self, i: usize);

    /// Marks `i` and reports whether it was previously unmarked.
    fn claim(&mut self, i: usize) -> bool {
        if self.get(i) {
            false
        } else {
            self.set(i);
            true
        }
    }
}
