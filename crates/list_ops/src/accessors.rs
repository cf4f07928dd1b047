//! Positional and range reads. Ranges come back as new sequences.

use crate::error::Result;
use crate::span::Span;
use crate::Sequence;

pub fn head<S: Sequence>(seq: &S) -> Result<&S::Item> {
    seq.get(0)
}

pub fn tail<S: Sequence>(seq: &S) -> S
where
    S::Item: Clone,
{
    seq.slice(Span::starting_at(1))
}

pub fn last<S: Sequence>(seq: &S) -> Result<&S::Item> {
    seq.get(-1)
}

pub fn init<S: Sequence>(seq: &S) -> S
where
    S::Item: Clone,
{
    seq.slice(Span::ending_at(-1))
}

pub fn first_three<S: Sequence>(seq: &S) -> S
where
    S::Item: Clone,
{
    seq.slice(Span::new(0, 3))
}

pub fn last_five<S: Sequence>(seq: &S) -> S
where
    S::Item: Clone,
{
    seq.slice(Span::starting_at(-5))
}

/// Everything but the first two and the last two elements.
pub fn middle<S: Sequence>(seq: &S) -> S
where
    S::Item: Clone,
{
    seq.slice(Span::new(2, -2))
}

/// Third through sixth elements.
pub fn inner_four<S: Sequence>(seq: &S) -> S
where
    S::Item: Clone,
{
    seq.slice(Span::new(2, 6))
}

/// Sixth- through third-from-last elements, in forward order.
pub fn inner_four_end<S: Sequence>(seq: &S) -> S
where
    S::Item: Clone,
{
    seq.slice(Span::new(-6, -2))
}
