//! Lazy, zero-copy views over random-access sequences
//!
//! This crate provides a small cursor/view framework for iterating sequences
//! without materializing copies, plus its flagship view: [`Pairwise`], a lazy
//! sequence of adjacent-element pairs `(seq[i], seq[i + 1])`.
//!
//! # Overview
//!
//! - [`RandomAccessSequence`]: the capability contract. Anything with a
//!   length and O(1) indexed access qualifies; implementations are provided
//!   for slices, arrays, `Vec<T>`, and shared references to any sequence.
//! - [`SeqCursor`]: a position-bearing handle into a sequence, supporting
//!   read, equality, forward/backward steps, O(1) jumps, and signed distance.
//! - [`SeqIter`]: a cursor-pair iterator available for every sequence,
//!   double-ended and exact-size, which plugs the whole framework into the
//!   standard iterator combinators (`rev`, `filter`, `map`, `take`, `chain`).
//! - [`Pairwise`] / [`pairwise`]: the adjacent-pair view. It satisfies
//!   [`RandomAccessSequence`] itself, so it composes with everything above,
//!   including another layer of `pairwise`.
//! - [`IteratorPairwiseExt::pairwise`]: a forward-only fallback for upstreams
//!   that are already lazy (e.g. the output of `filter` or `map`) and cannot
//!   offer random access.
//!
//! # Example
//!
//! ```
//! use seq_view::pairwise;
//!
//! let readings = vec![10, 20, 30, 40];
//! let deltas: Vec<i32> = pairwise(&readings)
//!     .pairs()
//!     .map(|(a, b)| b - a)
//!     .collect();
//! assert_eq!(deltas, [10, 10, 10]);
//!
//! // Reverse iteration yields the same pairs, last first.
//! let view = pairwise(&readings);
//! let last = view.pairs().rev().next();
//! assert_eq!(last, Some((&30, &40)));
//! ```
//!
//! # Borrowing rules
//!
//! A view stores either a borrow of the underlying sequence or the sequence
//! itself, never a partial copy. Cursors and iterators borrow the sequence
//! for their whole lifetime, so the compiler rejects any attempt to mutate or
//! drop the sequence while a view over it is live. Yielded items are
//! references into the original storage, not element copies.
//!
//! # Cost model
//!
//! All cursor operations are O(1) on random-access upstreams. Positions are
//! not bounds-checked in release builds; stepping a cursor past its sentinel
//! is a precondition violation caught by `debug_assert!` only.

mod adapter;
mod cursor;
mod pairwise;
mod sequence;

pub use adapter::{IterPairwise, IteratorPairwiseExt};
pub use cursor::{SeqCursor, SeqIter};
pub use pairwise::{PairCursor, Pairs, Pairwise, pairwise, pairwise_mut};
pub use sequence::RandomAccessSequence;

#[cfg(test)]
mod tests;
