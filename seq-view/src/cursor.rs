//! Position cursors and the generic cursor-pair iterator.

use std::fmt;
use std::ptr;

use crate::sequence::RandomAccessSequence;

/// A position-bearing handle into a [`RandomAccessSequence`].
///
/// A cursor is a borrowed sequence handle plus an index in `[0, len]`; the
/// position `len` is the one-past-end sentinel and must not be read. Cursors
/// are `Copy` and never own the sequence, so they cannot outlive it.
///
/// Stepping and jumping are not bounds-checked in release builds. Moving a
/// cursor outside `[0, len]`, or reading the sentinel, is a precondition
/// violation guarded by `debug_assert!` only.
pub struct SeqCursor<'s, S: ?Sized> {
    seq: &'s S,
    pos: usize,
}

impl<'s, S: RandomAccessSequence + ?Sized> SeqCursor<'s, S> {
    pub(crate) fn new(seq: &'s S, pos: usize) -> Self {
        Self { seq, pos }
    }

    /// Current position in `[0, len]`.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Reads the element at the current position.
    ///
    /// Precondition: the cursor is dereferenceable (not the end sentinel).
    /// The returned item borrows the sequence, not the cursor, so it stays
    /// usable after the cursor moves on.
    pub fn read(&self) -> S::Item<'s> {
        debug_assert!(self.pos < self.seq.len(), "read past the end sentinel");
        let seq: &'s S = self.seq;
        seq.get(self.pos)
    }

    /// Steps forward by one position.
    pub fn step_forward(&mut self) {
        debug_assert!(self.pos < self.seq.len(), "stepped past the end sentinel");
        self.pos += 1;
    }

    /// Steps backward by one position.
    pub fn step_back(&mut self) {
        debug_assert!(self.pos > 0, "stepped before the first position");
        self.pos -= 1;
    }

    /// Jumps by a signed offset in O(1).
    pub fn advance(&mut self, n: isize) {
        debug_assert!(
            self.pos as isize + n >= 0 && self.pos as isize + n <= self.seq.len() as isize,
            "advance left the valid position range"
        );
        self.pos = self.pos.wrapping_add_signed(n);
    }

    /// Signed distance from `self` to `other`: `other.position - self.position`.
    ///
    /// Defined only for cursors over the same sequence.
    pub fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(
            ptr::eq(self.seq, other.seq),
            "distance between cursors of different sequences"
        );
        other.pos as isize - self.pos as isize
    }
}

// Manual Clone/Copy: the derive would demand S: Clone even though only a
// reference is held.
impl<S: ?Sized> Clone for SeqCursor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for SeqCursor<'_, S> {}

/// Cursors are equal iff they refer to the same sequence (by identity) at
/// the same position. Cursors of different sequences are never equal.
impl<S: ?Sized> PartialEq for SeqCursor<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.seq, other.seq) && self.pos == other.pos
    }
}

impl<S: ?Sized> Eq for SeqCursor<'_, S> {}

impl<S: ?Sized> fmt::Debug for SeqCursor<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqCursor").field("pos", &self.pos).finish()
    }
}

/// Lazy iterator over any [`RandomAccessSequence`], driven by a front and a
/// back cursor.
///
/// Double-ended and exact-size, so the standard combinators (`rev`, `take`,
/// `filter`, `map`, `chain`, ...) apply to every sequence and every view in
/// this crate without copying the underlying data.
#[derive(Clone, Copy, Debug)]
pub struct SeqIter<'s, S: ?Sized> {
    front: SeqCursor<'s, S>,
    back: SeqCursor<'s, S>,
}

impl<'s, S: RandomAccessSequence + ?Sized> SeqIter<'s, S> {
    pub(crate) fn new(front: SeqCursor<'s, S>, back: SeqCursor<'s, S>) -> Self {
        Self { front, back }
    }
}

impl<'s, S: RandomAccessSequence + ?Sized> Iterator for SeqIter<'s, S> {
    type Item = S::Item<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.read();
        self.front.step_forward();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.front.distance_to(&self.back).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl<'s, S: RandomAccessSequence + ?Sized> DoubleEndedIterator for SeqIter<'s, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.step_back();
        Some(self.back.read())
    }
}

impl<S: RandomAccessSequence + ?Sized> ExactSizeIterator for SeqIter<'_, S> {}

impl<S: RandomAccessSequence + ?Sized> std::iter::FusedIterator for SeqIter<'_, S> {}
