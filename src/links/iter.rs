//! Iterators over a chain, in chain order.

use super::link::{Link, Slot};

/// Borrowing iterator, from the head to the last link.
pub struct Iter<'a, T> {
    pub(crate) current: Option<&'a Link<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.current?;
        self.current = link.next();
        Some(&link.value)
    }
}

/// Owning iterator. Each link is released as its value is yielded.
pub struct IntoIter<T> {
    pub(crate) head: Slot<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut link = self.head.take()?;
        self.head = link.take_next();
        Some(link.into_value())
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}
