//! Standard list methods rebuilt from the primitives in [`Sequence`] and
//! iteration.
//!
//! Every mutating operation changes the sequence it is handed and returns it.

use crate::error::Result;
use crate::span::Span;
use crate::Sequence;

pub fn custom_len<S: Sequence>(seq: &S) -> usize {
    let mut items = 0;
    for _ in seq.iter() {
        items += 1;
    }
    items
}

pub fn custom_append<S: Sequence>(seq: &mut S, value: S::Item) -> &mut S {
    seq.splice(Span::END, [value]);
    seq
}

pub fn custom_extend<S, I>(seq: &mut S, values: I) -> &mut S
where
    S: Sequence,
    I: IntoIterator<Item = S::Item>,
{
    for value in values {
        custom_append(seq, value);
    }
    seq
}

/// Insert `value` so it ends up at `index`.
///
/// Indices past either end clamp, so this never fails.
pub fn custom_insert<S: Sequence>(seq: &mut S, index: isize, value: S::Item) -> &mut S {
    seq.splice(Span::new(index, index), [value]);
    seq
}

/// Remove the first element equal to `value`, if any.
pub fn custom_remove<'a, S>(seq: &'a mut S, value: &S::Item) -> &'a mut S
where
    S: Sequence,
    S::Item: PartialEq,
{
    if let Some(i) = custom_index(seq, value) {
        // `i` was just found, so it is in range.
        let _ = seq.delete(i as isize);
    }
    seq
}

pub fn custom_pop<S: Sequence>(seq: &mut S) -> Result<S::Item> {
    seq.delete(-1)
}

/// Position of the first element equal to `value`, or `None`.
pub fn custom_index<S>(seq: &S, value: &S::Item) -> Option<usize>
where
    S: Sequence,
    S::Item: PartialEq,
{
    for (i, item) in seq.iter().enumerate() {
        if item == value {
            return Some(i);
        }
    }
    None
}

pub fn custom_count<S>(seq: &S, value: &S::Item) -> usize
where
    S: Sequence,
    S::Item: PartialEq,
{
    let mut count = 0;
    for item in seq.iter() {
        if item == value {
            count += 1;
        }
    }
    count
}

/// Reverse in place by swapping from both ends toward the middle.
pub fn custom_reverse<S: Sequence>(seq: &mut S) -> &mut S {
    let len = custom_len(seq);
    let mut front: isize = 0;
    let mut back: isize = -1;
    while front.unsigned_abs() * 2 < len {
        // Both pointers stay inside `0..len` while `2 * front < len`.
        let _ = seq.swap(front, back);
        front += 1;
        back -= 1;
    }
    seq
}

pub fn custom_contains<S>(seq: &S, value: &S::Item) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    for item in seq.iter() {
        if item == value {
            return true;
        }
    }
    false
}

/// Same length and pairwise-equal elements in the same order.
pub fn custom_equality<A, B>(some: &A, another: &B) -> bool
where
    A: Sequence,
    B: Sequence,
    A::Item: PartialEq<B::Item>,
{
    if custom_len(some) != custom_len(another) {
        return false;
    }
    for (a, b) in some.iter().zip(another.iter()) {
        if a != b {
            return false;
        }
    }
    true
}
