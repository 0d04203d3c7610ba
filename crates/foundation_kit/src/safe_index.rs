//! Bounds-checked element access for ordered sequences.
//!
//! `items.safe(i)` never panics: an index outside `0..len` (negative
//! included) yields `None`.

use std::collections::VecDeque;

/// Total indexed access for ordered sequences.
pub trait SafeIndex {
    type Item;

    /// Element at `index`, or `None` when out of range
    fn safe(&self, index: isize) -> Option<&Self::Item>;

    /// Mutable element at `index`, or `None` when out of range
    fn safe_mut(&mut self, index: isize) -> Option<&mut Self::Item>;
}

fn checked(index: isize, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

impl<T> SafeIndex for [T] {
    type Item = T;

    fn safe(&self, index: isize) -> Option<&T> {
        let i = checked(index, self.len())?;
        self.get(i)
    }

    fn safe_mut(&mut self, index: isize) -> Option<&mut T> {
        let i = checked(index, self.len())?;
        self.get_mut(i)
    }
}

impl<T> SafeIndex for Vec<T> {
    type Item = T;

    fn safe(&self, index: isize) -> Option<&T> {
        self.as_slice().safe(index)
    }

    fn safe_mut(&mut self, index: isize) -> Option<&mut T> {
        self.as_mut_slice().safe_mut(index)
    }
}

impl<T> SafeIndex for VecDeque<T> {
    type Item = T;

    fn safe(&self, index: isize) -> Option<&T> {
        let i = checked(index, self.len())?;
        self.get(i)
    }

    fn safe_mut(&mut self, index: isize) -> Option<&mut T> {
        let i = checked(index, self.len())?;
        self.get_mut(i)
    }
}
