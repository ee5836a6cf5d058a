//! Cursor-based iteration over a snapshot
//!
//! The source is captured once at construction and never touched again;
//! only the cursor moves. Cursor stays in `0..=len` and never goes back.

use std::iter::FusedIterator;

use super::{Pull, PullResult};

/// Pull-based iterator over an ordered snapshot.
///
/// Both iterator and iterable: it implements [`Iterator`], so the standard
/// `IntoIterator` blanket impl hands back the same instance and it can be
/// passed to anything expecting an iterable.
#[derive(Debug, Clone)]
pub struct SequenceIterator<T> {
    /// Snapshot taken at construction
    source: Box<[T]>,

    /// Index of the next element to yield
    cursor: usize,
}

impl<T> SequenceIterator<T> {
    /// Create an iterator over the elements of `source`, in order.
    pub fn new(source: impl IntoIterator<Item = T>) -> Self {
        Self {
            source: source.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of elements already yielded.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Snapshot length, fixed at construction.
    ///
    /// Unlike [`ExactSizeIterator::len`], this does not shrink as elements
    /// are pulled.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Whether the snapshot holds no elements at all.
    pub fn source_is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Elements left before completion.
    pub fn remaining(&self) -> usize {
        self.source.len() - self.cursor
    }

    /// Whether every element has been yielded.
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.source.len()
    }
}

impl<'a, T> SequenceIterator<&'a T> {
    /// Snapshot of references into `items`; elements are not cloned.
    pub fn from_slice(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<T: Clone> Pull for SequenceIterator<T> {
    type Item = T;

    fn pull(&mut self) -> PullResult<T> {
        match self.source.get(self.cursor) {
            Some(value) => {
                self.cursor += 1;
                PullResult::Yielded(value.clone())
            }
            None => PullResult::Done,
        }
    }
}

impl<T: Clone> SequenceIterator<T> {
    /// Request the next element. See [`Pull::pull`].
    pub fn pull(&mut self) -> PullResult<T> {
        Pull::pull(self)
    }
}

impl<T: Clone> Iterator for SequenceIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pull().into_option()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for SequenceIterator<T> {}

impl<T: Clone> FusedIterator for SequenceIterator<T> {}

impl<T> From<Vec<T>> for SequenceIterator<T> {
    fn from(source: Vec<T>) -> Self {
        Self {
            source: source.into_boxed_slice(),
            cursor: 0,
        }
    }
}

impl<T> FromIterator<T> for SequenceIterator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}
