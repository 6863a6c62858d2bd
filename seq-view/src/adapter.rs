//! Forward-only pairwise over plain iterators.
//!
//! When the upstream is already lazy — the output of a `filter`, a `map`, a
//! line parser — there is no random access to build a [`Pairwise`] view on.
//! [`IteratorPairwiseExt::pairwise`] covers that case: it pairs each item
//! with its successor by remembering the previous one, which needs `Clone`
//! items and supports forward iteration only. The capability loss is in the
//! types: no `DoubleEndedIterator`, no `ExactSizeIterator`, no cursors, so
//! code that needs reverse traversal or O(1) jumps fails to compile instead
//! of silently degrading.
//!
//! [`Pairwise`]: crate::Pairwise

/// Iterator of adjacent pairs from any upstream iterator.
///
/// Created by [`IteratorPairwiseExt::pairwise`]. Yields one pair per
/// upstream item after the first; empty and single-item upstreams yield
/// nothing.
#[derive(Clone, Debug)]
pub struct IterPairwise<I: Iterator> {
    iter: I,
    prev: Option<I::Item>,
}

impl<I> Iterator for IterPairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        match self.prev.take() {
            Some(prev) => {
                self.prev = Some(item.clone());
                Some((prev, item))
            }
            None => {
                // First item only primes the window.
                self.prev = Some(item);
                self.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let primed = usize::from(self.prev.is_some());
        (
            lower.saturating_add(primed).saturating_sub(1),
            upper.map(|n| n.saturating_add(primed).saturating_sub(1)),
        )
    }
}

impl<I> std::iter::FusedIterator for IterPairwise<I>
where
    I: std::iter::FusedIterator,
    I::Item: Clone,
{
}

/// Extension adding [`pairwise`](Self::pairwise) to every iterator.
pub trait IteratorPairwiseExt: Iterator + Sized {
    /// Pairs each item with its successor, cloning items to bridge the
    /// window.
    ///
    /// # Example
    ///
    /// ```
    /// use seq_view::IteratorPairwiseExt;
    ///
    /// let pairs: Vec<_> = "4,3,7".split(',').pairwise().collect();
    /// assert_eq!(pairs, [("4", "3"), ("3", "7")]);
    /// ```
    fn pairwise(self) -> IterPairwise<Self>
    where
        Self::Item: Clone,
    {
        IterPairwise {
            iter: self,
            prev: None,
        }
    }
}

impl<I: Iterator> IteratorPairwiseExt for I {}
