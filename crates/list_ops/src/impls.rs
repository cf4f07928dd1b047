use std::collections::VecDeque;

use crate::error::{Result, SeqError};
use crate::span::{Span, resolve_index};
use crate::Sequence;

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn from_vec(items: Vec<T>) -> Self {
        items
    }

    fn into_vec(self) -> Vec<T> {
        self
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }

    fn get(&self, index: isize) -> Result<&T> {
        let i = resolve_index(index, Vec::len(self))?;
        Ok(&self[i])
    }

    fn set(&mut self, index: isize, value: T) -> Result<T> {
        let i = resolve_index(index, Vec::len(self))?;
        Ok(std::mem::replace(&mut self[i], value))
    }

    fn delete(&mut self, index: isize) -> Result<T> {
        let i = resolve_index(index, Vec::len(self))?;
        Ok(Vec::remove(self, i))
    }

    fn swap(&mut self, a: isize, b: isize) -> Result<()> {
        let len = Vec::len(self);
        let a = resolve_index(a, len)?;
        let b = resolve_index(b, len)?;
        <[T]>::swap(self, a, b);
        Ok(())
    }

    fn slice(&self, span: Span) -> Self
    where
        T: Clone,
    {
        self[span.resolve(Vec::len(self))].to_vec()
    }

    fn splice<I>(&mut self, span: Span, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let range = span.resolve(Vec::len(self));
        Vec::splice(self, range, values).for_each(drop);
    }

    fn delete_span(&mut self, span: Span) {
        let range = span.resolve(Vec::len(self));
        Vec::drain(self, range).for_each(drop);
    }
}

// VecDeque has no native splice; the tail past the span is split off and
// reattached after the replacement.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn from_vec(items: Vec<T>) -> Self {
        VecDeque::from(items)
    }

    fn into_vec(self) -> Vec<T> {
        Vec::from(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }

    fn get(&self, index: isize) -> Result<&T> {
        let i = resolve_index(index, VecDeque::len(self))?;
        Ok(&self[i])
    }

    fn set(&mut self, index: isize, value: T) -> Result<T> {
        let i = resolve_index(index, VecDeque::len(self))?;
        Ok(std::mem::replace(&mut self[i], value))
    }

    fn delete(&mut self, index: isize) -> Result<T> {
        let len = VecDeque::len(self);
        let i = resolve_index(index, len)?;
        VecDeque::remove(self, i).ok_or(SeqError::IndexOutOfRange { index, len })
    }

    fn swap(&mut self, a: isize, b: isize) -> Result<()> {
        let len = VecDeque::len(self);
        let a = resolve_index(a, len)?;
        let b = resolve_index(b, len)?;
        VecDeque::swap(self, a, b);
        Ok(())
    }

    fn slice(&self, span: Span) -> Self
    where
        T: Clone,
    {
        let range = span.resolve(VecDeque::len(self));
        VecDeque::range(self, range).cloned().collect()
    }

    fn splice<I>(&mut self, span: Span, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let range = span.resolve(VecDeque::len(self));
        let mut rest = VecDeque::split_off(self, range.end);
        VecDeque::truncate(self, range.start);
        Extend::extend(self, values);
        VecDeque::append(self, &mut rest);
    }

    fn delete_span(&mut self, span: Span) {
        let range = span.resolve(VecDeque::len(self));
        VecDeque::drain(self, range).for_each(drop);
    }
}
