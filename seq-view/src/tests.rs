//! Tests for the sequence/view framework.

use super::*;

#[test]
fn test_pairwise_yields_adjacent_pairs_in_order() {
    let xs = vec![10, 20, 30, 40];
    let view = pairwise(&xs);

    assert_eq!(view.pair_count(), 3);
    let pairs: Vec<_> = view.pairs().collect();
    assert_eq!(pairs, [(&10, &20), (&20, &30), (&30, &40)]);
}

#[test]
fn test_pairwise_pairs_are_borrows_into_the_sequence() {
    let xs = vec![1, 2, 3];
    let view = pairwise(&xs);

    let (a, b) = view.pairs().next().unwrap();
    assert!(std::ptr::eq(a, &xs[0]));
    assert!(std::ptr::eq(b, &xs[1]));
}

#[test]
fn test_empty_and_single_element_sequences_yield_no_pairs() {
    let empty: Vec<i32> = Vec::new();
    let view = pairwise(&empty);
    assert_eq!(view.pair_count(), 0);
    assert_eq!(view.pairs().count(), 0);
    assert_eq!(view.begin_cursor(), view.end_cursor());

    let single = [5];
    let view = pairwise(&single[..]);
    assert_eq!(view.pair_count(), 0);
    assert_eq!(view.pairs().count(), 0);
    assert_eq!(view.begin_cursor(), view.end_cursor());
}

#[test]
fn test_reverse_iteration_yields_pairs_in_reverse_order() {
    let xs = [10, 20, 30, 40];
    let view = pairwise(&xs);

    let reversed: Vec<_> = view.pairs().rev().collect();
    assert_eq!(reversed, [(&30, &40), (&20, &30), (&10, &20)]);

    // Same pairs as collecting forward and reversing the list.
    let mut forward: Vec<_> = view.pairs().collect();
    forward.reverse();
    assert_eq!(reversed, forward);
}

#[test]
fn test_advance_matches_repeated_stepping() {
    let xs = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let view = pairwise(&xs);

    for i in 0..view.pair_count() {
        let mut jumped = view.begin_cursor();
        jumped.advance(i as isize);

        let mut stepped = view.begin_cursor();
        for _ in 0..i {
            stepped.step_forward();
        }

        assert_eq!(jumped, stepped);
        assert_eq!(jumped.read(), stepped.read());
        assert_eq!(jumped.read(), (&xs[i], &xs[i + 1]));
    }
}

#[test]
fn test_cursor_distance_is_pair_count() {
    let view = pairwise(vec![1, 2, 3, 4, 5]);
    assert_eq!(view.begin_cursor().distance_to(&view.end_cursor()), 4);
    assert_eq!(view.end_cursor().distance_to(&view.begin_cursor()), -4);

    let one = pairwise(vec![7]);
    assert_eq!(one.begin_cursor().distance_to(&one.end_cursor()), 0);

    let none = pairwise(Vec::<i32>::new());
    assert_eq!(none.begin_cursor().distance_to(&none.end_cursor()), 0);
}

#[test]
fn test_cursors_of_different_sequences_are_never_equal() {
    let a = [1, 2, 3];
    let b = [1, 2, 3];
    // Same contents, same positions, distinct sequences.
    assert_ne!(a.begin(), b.begin());
    assert_eq!(a.begin(), a.begin());
}

#[test]
fn test_mutation_through_pairwise_mut_is_visible() {
    let mut xs = vec![1, 2, 3, 4];
    pairwise_mut(&mut xs, |a, b| *b += *a);
    assert_eq!(xs, [1, 3, 6, 10]);

    // Too-short slices are a no-op.
    let mut single = [9];
    pairwise_mut(&mut single, |_, _| panic!("no pairs expected"));
    let mut empty: [i32; 0] = [];
    pairwise_mut(&mut empty, |_, _| panic!("no pairs expected"));
}

#[test]
fn test_pairwise_composes_with_standard_combinators() {
    let words = ["a", "b", "c"];
    let view = pairwise(&words[..]);

    // Keep only pairs whose first element is "a".
    let kept: Vec<_> = view.pairs().filter(|(first, _)| **first == "a").collect();
    assert_eq!(kept, [(&"a", &"b")]);

    let xs = [1, 2, 3, 4, 5];
    let view = pairwise(&xs);
    let sums: Vec<i32> = view.pairs().map(|(a, b)| a + b).take(2).collect();
    assert_eq!(sums, [3, 5]);

    let chained: Vec<_> = view.pairs().chain(view.pairs().rev()).collect();
    assert_eq!(chained.len(), 8);
}

#[test]
fn test_pairwise_of_pairwise() {
    let xs = [1, 2, 3, 4];
    let outer = pairwise(pairwise(&xs[..]));

    assert_eq!(outer.pair_count(), 2);
    let nested: Vec<_> = outer.pairs().collect();
    assert_eq!(
        nested,
        [((&1, &2), (&2, &3)), ((&2, &3), (&3, &4))]
    );
}

#[test]
fn test_pairwise_satisfies_the_sequence_contract() {
    fn total_len<S: RandomAccessSequence>(seq: &S) -> usize {
        seq.len()
    }

    let xs = vec![1, 2, 3, 4];
    let view = pairwise(&xs);
    assert_eq!(total_len(&view), 3);
    assert_eq!(view.get(1), (&2, &3));

    // The generic cursor iterator works over the view as well.
    let via_protocol: Vec<_> = RandomAccessSequence::iter(&view).collect();
    let via_pairs: Vec<_> = view.pairs().collect();
    assert_eq!(via_protocol, via_pairs);
}

#[test]
fn test_seq_iter_over_a_slice() {
    let xs = [4, 5, 6];
    let collected: Vec<_> = RandomAccessSequence::iter(&xs[..]).collect();
    assert_eq!(collected, [&4, &5, &6]);

    let backwards: Vec<_> = RandomAccessSequence::iter(&xs[..]).rev().collect();
    assert_eq!(backwards, [&6, &5, &4]);

    let mut iter = RandomAccessSequence::iter(&xs[..]);
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
}

#[test]
fn test_iterator_adapter_over_lazy_upstreams() {
    // Built over a filter output: forward-only, but still correct.
    let xs = [1, 2, 3, 4, 5, 6];
    let pairs: Vec<_> = xs.iter().filter(|n| **n % 2 == 0).pairwise().collect();
    assert_eq!(pairs, [(&2, &4), (&4, &6)]);

    let empty: Vec<(i32, i32)> = std::iter::empty().pairwise().collect();
    assert!(empty.is_empty());

    let single: Vec<(i32, i32)> = std::iter::once(1).pairwise().collect();
    assert!(single.is_empty());
}

#[test]
fn test_iterator_adapter_size_hint() {
    let mut iter = [1, 2, 3, 4].iter().pairwise();
    assert_eq!(iter.size_hint(), (3, Some(3)));
    iter.next();
    assert_eq!(iter.size_hint(), (2, Some(2)));
    iter.by_ref().count();
    assert_eq!(iter.size_hint(), (0, Some(0)));
}

#[test]
fn test_view_over_owned_sequence() {
    // The view may own its storage outright.
    let view = pairwise(vec![1, 2, 3]);
    let pairs: Vec<_> = view.pairs().collect();
    assert_eq!(pairs, [(&1, &2), (&2, &3)]);
    assert_eq!(view.into_inner(), vec![1, 2, 3]);
}
