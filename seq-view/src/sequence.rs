//! The sequence capability contract.

use crate::cursor::{SeqCursor, SeqIter};

/// A readable sequence with a known length and O(1) indexed access.
///
/// This is the contract every view in this crate is generic over. The
/// associated type `Item<'a>` is the *lent* element type: for plain storage
/// like slices it is `&'a T`, while derived views lend whatever they compute
/// per position (e.g. [`Pairwise`](crate::Pairwise) lends a pair of borrows).
/// Lending through a generic associated type is what lets a view satisfy the
/// same contract as its underlying storage, so views nest arbitrarily.
///
/// Implementations are provided for `[T]`, `[T; N]`, `Vec<T>`, and `&S` for
/// any sequence `S`. The `&S` implementation is the re-borrowing rule:
/// a shared reference to a sequence is itself a sequence, so passing a view
/// across a combinator boundary never forces a copy of the data.
///
/// # Contract
///
/// - `len` is the number of addressable positions.
/// - `get(i)` is defined for `i < len` and runs in O(1). Indexing out of
///   bounds follows the underlying storage's behavior (a panic for the
///   provided implementations).
/// - `get` has no side effects; reading does not change the sequence.
///
/// # Example
///
/// ```
/// use seq_view::RandomAccessSequence;
///
/// fn head_and_tail<S: RandomAccessSequence>(seq: &S) -> Option<(S::Item<'_>, S::Item<'_>)> {
///     if seq.len() < 2 {
///         return None;
///     }
///     Some((seq.get(0), seq.get(seq.len() - 1)))
/// }
///
/// let xs = vec![1, 2, 3];
/// assert_eq!(head_and_tail(&xs), Some((&1, &3)));
/// ```
pub trait RandomAccessSequence {
    /// The element lent out per position, borrowing from `self`.
    type Item<'a>
    where
        Self: 'a;

    /// Number of addressable positions.
    fn len(&self) -> usize;

    /// Reads the element at `index`. Defined for `index < len`.
    fn get(&self, index: usize) -> Self::Item<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor at position 0.
    fn begin(&self) -> SeqCursor<'_, Self> {
        SeqCursor::new(self, 0)
    }

    /// Cursor at the one-past-end sentinel position.
    fn end(&self) -> SeqCursor<'_, Self> {
        SeqCursor::new(self, self.len())
    }

    /// Lazy iterator over all elements, double-ended and exact-size.
    fn iter(&self) -> SeqIter<'_, Self> {
        SeqIter::new(self.begin(), self.end())
    }
}

impl<T> RandomAccessSequence for [T] {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> RandomAccessSequence for [T; N] {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccessSequence for Vec<T> {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<'b, S: RandomAccessSequence + ?Sized> RandomAccessSequence for &'b S {
    type Item<'a>
        = S::Item<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Self::Item<'_> {
        (**self).get(index)
    }
}
