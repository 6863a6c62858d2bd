//! The adjacent-pair view.

use std::fmt;

use crate::cursor::SeqCursor;
use crate::sequence::RandomAccessSequence;

/// Creates a lazy view of adjacent-element pairs over `seq`.
///
/// For a sequence of length `N >= 2` the view holds exactly `N - 1` pairs,
/// pair `i` being `(seq[i], seq[i + 1])`. For `N < 2` the view is empty; no
/// error, no underflow.
///
/// `seq` may be a borrow (`&Vec<T>`, `&[T]`) or owned storage (`Vec<T>`);
/// either way the elements are never copied — pairs are pairs of borrows
/// into the original storage.
///
/// # Example
///
/// ```
/// use seq_view::pairwise;
///
/// let xs = vec![10, 20, 30, 40];
/// let view = pairwise(&xs);
/// assert_eq!(view.pair_count(), 3);
///
/// let pairs: Vec<_> = view.pairs().collect();
/// assert_eq!(pairs, [(&10, &20), (&20, &30), (&30, &40)]);
/// ```
pub fn pairwise<S: RandomAccessSequence>(seq: S) -> Pairwise<S> {
    Pairwise { seq }
}

/// A lazy view of adjacent-element pairs; see [`pairwise`].
///
/// `Pairwise` satisfies [`RandomAccessSequence`] itself (its items are the
/// pairs), so it can be handed to anything generic over the sequence
/// contract — including another layer of [`pairwise`].
#[derive(Clone, Copy, Debug)]
pub struct Pairwise<S> {
    seq: S,
}

impl<S: RandomAccessSequence> Pairwise<S> {
    /// Number of pairs: `len - 1`, or 0 for sequences shorter than 2.
    pub fn pair_count(&self) -> usize {
        self.seq.len().saturating_sub(1)
    }

    /// Iterates the pairs front to back. Double-ended and exact-size.
    pub fn pairs(&self) -> Pairs<'_, S> {
        Pairs {
            front: self.begin_cursor(),
            back: self.end_cursor(),
        }
    }

    /// Dual cursor at the first pair, positions `(0, 1)`.
    ///
    /// For sequences shorter than 2 this equals [`end_cursor`](Self::end_cursor),
    /// so iteration terminates immediately.
    pub fn begin_cursor(&self) -> PairCursor<'_, S> {
        PairCursor::at(&self.seq, 0)
    }

    /// Dual cursor one past the last pair, positions `(N - 1, N)`.
    ///
    /// The first component is clamped at 0 so an empty sequence cannot
    /// underflow; in that case begin and end coincide.
    pub fn end_cursor(&self) -> PairCursor<'_, S> {
        PairCursor::at(&self.seq, self.seq.len().saturating_sub(1))
    }

    /// Consumes the view, returning the underlying sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: RandomAccessSequence> RandomAccessSequence for Pairwise<S> {
    type Item<'a>
        = (S::Item<'a>, S::Item<'a>)
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.pair_count()
    }

    fn get(&self, index: usize) -> Self::Item<'_> {
        (self.seq.get(index), self.seq.get(index + 1))
    }
}

/// A dual cursor into a [`Pairwise`] view.
///
/// Holds two [`SeqCursor`]s over the same sequence kept in lockstep with
/// `second = first + 1`; every movement applies to both. Reading yields the
/// two borrowed elements, and distance is measured between the `first`
/// components.
pub struct PairCursor<'s, S: ?Sized> {
    first: SeqCursor<'s, S>,
    second: SeqCursor<'s, S>,
}

impl<'s, S: RandomAccessSequence + ?Sized> PairCursor<'s, S> {
    fn at(seq: &'s S, first_pos: usize) -> Self {
        Self {
            first: SeqCursor::new(seq, first_pos),
            second: SeqCursor::new(seq, first_pos + 1),
        }
    }

    /// Reads both elements under the cursor.
    ///
    /// Precondition: the cursor is dereferenceable, i.e. not equal to the
    /// view's end cursor.
    pub fn read(&self) -> (S::Item<'s>, S::Item<'s>) {
        (self.first.read(), self.second.read())
    }

    /// Moves both cursors one pair forward.
    pub fn step_forward(&mut self) {
        self.first.step_forward();
        self.second.step_forward();
    }

    /// Moves both cursors one pair back.
    pub fn step_back(&mut self) {
        self.first.step_back();
        self.second.step_back();
    }

    /// Jumps both cursors by a signed offset in O(1).
    pub fn advance(&mut self, n: isize) {
        self.first.advance(n);
        self.second.advance(n);
    }

    /// Signed pair distance from `self` to `other`.
    pub fn distance_to(&self, other: &Self) -> isize {
        self.first.distance_to(&other.first)
    }
}

impl<S: ?Sized> Clone for PairCursor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for PairCursor<'_, S> {}

impl<S: ?Sized> PartialEq for PairCursor<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<S: ?Sized> Eq for PairCursor<'_, S> {}

impl<S: ?Sized> fmt::Debug for PairCursor<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairCursor")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Iterator over the pairs of a [`Pairwise`] view; see [`Pairwise::pairs`].
#[derive(Clone, Copy, Debug)]
pub struct Pairs<'s, S: ?Sized> {
    front: PairCursor<'s, S>,
    back: PairCursor<'s, S>,
}

impl<'s, S: RandomAccessSequence + ?Sized> Iterator for Pairs<'s, S> {
    type Item = (S::Item<'s>, S::Item<'s>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let pair = self.front.read();
        self.front.step_forward();
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.front.distance_to(&self.back).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl<'s, S: RandomAccessSequence + ?Sized> DoubleEndedIterator for Pairs<'s, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.step_back();
        Some(self.back.read())
    }
}

impl<S: RandomAccessSequence + ?Sized> ExactSizeIterator for Pairs<'_, S> {}

impl<S: RandomAccessSequence + ?Sized> std::iter::FusedIterator for Pairs<'_, S> {}

/// Walks adjacent pairs of a mutable slice, handing each pair to `f` as two
/// mutable borrows, leader before follower.
///
/// Adjacent pairs overlap — element `i + 1` is the second of one pair and
/// the first of the next — so an external iterator could not yield
/// `(&mut T, &mut T)` without aliasing. Internal iteration sidesteps that:
/// each pair's borrows end before the next pair is formed. Writes through
/// either borrow land directly in the slice.
///
/// # Example
///
/// ```
/// use seq_view::pairwise_mut;
///
/// let mut xs = [1, 2, 3, 4];
/// // Each element absorbs its predecessor.
/// pairwise_mut(&mut xs, |a, b| *b += *a);
/// assert_eq!(xs, [1, 3, 6, 10]);
/// ```
pub fn pairwise_mut<T, F>(slice: &mut [T], mut f: F)
where
    F: FnMut(&mut T, &mut T),
{
    for split in 1..slice.len() {
        let (head, tail) = slice.split_at_mut(split);
        f(&mut head[split - 1], &mut tail[0]);
    }
}
