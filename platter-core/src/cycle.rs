//! Looping position over a fixed-length sequence

use std::num::NonZeroUsize;

use crate::error::{Error, Result};

/// Current position within a non-empty, looping sequence
///
/// Invariant: `0 <= index < len`. The length is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    index: usize,
    len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Cycle {
    /// Create a cycle positioned at index 0
    ///
    /// Returns [`Error::EmptyCycle`] when `len` is zero.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyCycle);
        }
        Ok(Self { index: 0, len })
    }

    /// Infallible constructor for lengths known to be non-zero
    pub const fn from_len(len: NonZeroUsize) -> Self {
        Self {
            index: 0,
            len: len.get(),
        }
    }

    /// Current index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sequence length (always at least 1)
    pub fn len(&self) -> usize {
        self.len
    }

    /// Move forward one step, wrapping at the end
    ///
    /// Returns `true` if the index changed.
    pub fn advance(&mut self) -> bool {
        let next = (self.index + 1) % self.len;
        self.set(next)
    }

    /// Move back one step, wrapping at the start
    pub fn retreat(&mut self) -> bool {
        let prev = (self.index + self.len - 1) % self.len;
        self.set(prev)
    }

    /// Jump to `index`, clamped to the last position
    pub fn go_to(&mut self, index: usize) -> bool {
        self.set(index.min(self.len - 1))
    }

    /// Return to the first position
    pub fn reset(&mut self) -> bool {
        self.set(0)
    }

    fn set(&mut self, index: usize) -> bool {
        let changed = self.index != index;
        self.index = index;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cycle_rejected() {
        assert_eq!(Cycle::new(0), Err(Error::EmptyCycle));
    }

    #[test]
    fn test_advance_is_k_mod_len() {
        for len in 1..=7 {
            let mut cycle = Cycle::new(len).unwrap();
            for k in 1..=30 {
                cycle.advance();
                assert_eq!(cycle.index(), k % len, "len={len} k={k}");
            }
        }
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut cycle = Cycle::new(1).unwrap();
        for _ in 0..10 {
            assert!(!cycle.advance());
            assert!(!cycle.retreat());
        }
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_retreat_wraps() {
        let mut cycle = Cycle::new(3).unwrap();
        assert!(cycle.retreat());
        assert_eq!(cycle.index(), 2);
        cycle.retreat();
        assert_eq!(cycle.index(), 1);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut cycle = Cycle::new(4).unwrap();
        assert!(cycle.go_to(2));
        assert_eq!(cycle.index(), 2);
        cycle.go_to(99);
        assert_eq!(cycle.index(), 3);
        assert!(!cycle.go_to(3));
        assert!(cycle.reset());
        assert_eq!(cycle.index(), 0);
    }
}
