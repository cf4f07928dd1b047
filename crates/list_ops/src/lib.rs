mod accessors;
mod derived;
mod error;
mod impls;
mod mutators;
mod span;
mod value;

pub use accessors::{
    first_three, head, init, inner_four, inner_four_end, last, last_five, middle, tail,
};
pub use derived::{
    custom_append, custom_contains, custom_count, custom_equality, custom_extend, custom_index,
    custom_insert, custom_len, custom_pop, custom_remove, custom_reverse,
};
pub use error::{Result, SeqError};
pub use mutators::{
    HEAD_REPLACEMENT, MARKER_REPLACEMENT, delete_middle, delete_third_and_seventh,
    replace_head, replace_middle, replace_third_and_last,
};
pub use span::{Span, resolve_bound, resolve_index};
pub use value::Value;

/// Fundamental sequence operations.
///
/// - Element positions may be negative (`-1` is the last element) and fail
///   with [`SeqError::IndexOutOfRange`] when they fall outside the sequence.
/// - Spans are half-open and clamp instead of failing; see [`Span`].
/// - Indices are resolved against the length at the time of each call.
pub trait Sequence: Sized {
    type Item;

    fn from_vec(items: Vec<Self::Item>) -> Self;

    fn into_vec(self) -> Vec<Self::Item>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    fn get(&self, index: isize) -> Result<&Self::Item>;

    /// Overwrite the element at `index`, returning the one it displaced.
    fn set(&mut self, index: isize, value: Self::Item) -> Result<Self::Item>;

    /// Remove the element at `index`, shifting later elements left.
    fn delete(&mut self, index: isize) -> Result<Self::Item>;

    fn swap(&mut self, a: isize, b: isize) -> Result<()>;

    /// Copy the elements covered by `span` into a new sequence.
    fn slice(&self, span: Span) -> Self
    where
        Self::Item: Clone;

    /// Replace the elements covered by `span` with `values`.
    ///
    /// An empty span inserts at its start.
    fn splice<I>(&mut self, span: Span, values: I)
    where
        I: IntoIterator<Item = Self::Item>;

    fn delete_span(&mut self, span: Span);
}
