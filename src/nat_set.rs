use crate::types::Nat;

/// Set of naturals with O(1) `clear`.
///
/// Each slot stores the epoch in which it was last marked; bumping the epoch
/// empties the set without touching the slots. This is the scratch "visited"
/// state every board traversal takes by `&mut`, so no flag ever lives on the
/// positions themselves.
#[derive(Clone)]
pub struct NatSet<const SIZE: usize, T: Nat> {
    stamps: [u32; SIZE],
    epoch: u32,
    len: usize,
    _phantom: std::marker::PhantomData<T>,
}

impl<const SIZE: usize, T: Nat> NatSet<SIZE, T> {
    pub fn new() -> Self {
        NatSet {
            stamps: [0; SIZE],
            epoch: 1,
            len: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn clear(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if self.epoch == 0 {
            // Stamps from 2^32 clears ago would look current again.
            self.stamps.fill(0);
            self.epoch = 1;
        }
        self.len = 0;
    }

    /// Returns true if the item was not marked before.
    pub fn mark(&mut self, item: T) -> bool {
        let index: usize = item.into();
        if self.stamps[index] == self.epoch {
            return false;
        }
        self.stamps[index] = self.epoch;
        self.len += 1;
        true
    }

    pub fn unmark(&mut self, item: T) {
        let index: usize = item.into();
        if self.stamps[index] == self.epoch {
            self.stamps[index] = 0;
            self.len -= 1;
        }
    }

    pub fn is_marked(&self, item: T) -> bool {
        let index: usize = item.into();
        self.stamps[index] == self.epoch
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const SIZE: usize, T: Nat> Default for NatSet<SIZE, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    struct Small(usize);

    impl From<usize> for Small {
        fn from(raw: usize) -> Self {
            Small(raw)
        }
    }

    impl From<Small> for usize {
        fn from(s: Small) -> usize {
            s.0
        }
    }

    impl Nat for Small {
        const COUNT: usize = 8;
    }

    #[test]
    fn clear_forgets_marks_without_rewriting() {
        let mut set = NatSet::<8, Small>::new();
        assert!(set.mark(Small(3)));
        assert!(!set.mark(Small(3)));
        assert_eq!(set.len(), 1);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.is_marked(Small(3)));
        assert!(set.mark(Small(3)));
    }

    #[test]
    fn unmark_keeps_count_consistent() {
        let mut set = NatSet::<8, Small>::new();
        set.mark(Small(1));
        set.mark(Small(2));
        set.unmark(Small(1));
        set.unmark(Small(5));
        assert_eq!(set.len(), 1);
        assert!(set.is_marked(Small(2)));
    }
}
