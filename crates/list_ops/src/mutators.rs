//! In-place writes and deletes. Each returns the sequence it was given.

use crate::error::Result;
use crate::span::Span;
use crate::Sequence;

pub const HEAD_REPLACEMENT: i32 = 42;
pub const MARKER_REPLACEMENT: i32 = 37;

pub fn replace_head<S>(seq: &mut S) -> Result<&mut S>
where
    S: Sequence,
    S::Item: From<i32>,
{
    seq.set(0, HEAD_REPLACEMENT.into())?;
    Ok(seq)
}

/// Fails without modifying `seq` when it has fewer than three elements.
pub fn replace_third_and_last<S>(seq: &mut S) -> Result<&mut S>
where
    S: Sequence,
    S::Item: From<i32>,
{
    seq.set(2, MARKER_REPLACEMENT.into())?;
    seq.set(-1, MARKER_REPLACEMENT.into())?;
    Ok(seq)
}

/// Replace all but the first two and last two elements with `[42, 37]`.
///
/// With fewer than four elements nothing is replaced and the pair is inserted
/// at position `min(2, len)`.
pub fn replace_middle<S>(seq: &mut S) -> &mut S
where
    S: Sequence,
    S::Item: From<i32>,
{
    seq.splice(
        Span::new(2, -2),
        [HEAD_REPLACEMENT.into(), MARKER_REPLACEMENT.into()],
    );
    seq
}

/// Remove the third and seventh elements.
///
/// The seventh goes first so the third keeps its position; a sequence shorter
/// than seven fails before anything is removed.
pub fn delete_third_and_seventh<S: Sequence>(seq: &mut S) -> Result<&mut S> {
    seq.delete(6)?;
    seq.delete(2)?;
    Ok(seq)
}

pub fn delete_middle<S: Sequence>(seq: &mut S) -> &mut S {
    seq.delete_span(Span::new(2, -2));
    seq
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::error::SeqError;
    use crate::value::Value;
    use crate::values;

    #[test]
    fn replace_head_known_cases() {
        let mut seq: Vec<i32> = vec![1, 2, 3];
        assert_eq!(replace_head(&mut seq).cloned(), Ok(vec![42, 2, 3]));

        let mut seq = values!["Jan", "Feb"];
        assert!(replace_head(&mut seq).is_ok());
        assert_eq!(seq, values![42, "Feb"]);

        let mut empty: Vec<i64> = Vec::new();
        assert!(replace_head(&mut empty).is_err());
    }

    #[test]
    fn replace_third_and_last_known_cases() {
        let mut seq: Vec<i64> = vec![1, 2, 3, 4, 5];
        assert_eq!(
            replace_third_and_last(&mut seq).cloned(),
            Ok(vec![1, 2, 37, 4, 37])
        );

        let mut seq: Vec<i64> = vec![1, 2, 3];
        assert_eq!(replace_third_and_last(&mut seq).cloned(), Ok(vec![1, 2, 37]));
    }

    #[test]
    fn replace_third_and_last_short_input_untouched() {
        let mut seq: Vec<i32> = vec![1, 2];
        assert_eq!(
            replace_third_and_last(&mut seq).map(|_| ()),
            Err(SeqError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(seq, vec![1, 2]);
    }

    #[test]
    fn replace_middle_known_cases() {
        let mut seq: Vec<i32> = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(replace_middle(&mut seq), &vec![1, 2, 42, 37, 5, 6]);

        let mut seq: Vec<i64> = (1..=10).collect();
        let original_len = seq.len();
        replace_middle(&mut seq);
        assert_eq!(seq.len(), original_len - (original_len - 4) + 2);
        assert_eq!(seq, vec![1, 2, 42, 37, 9, 10]);

        let mut seq: Vec<i32> = vec![1, 2, 3, 4];
        assert_eq!(replace_middle(&mut seq), &vec![1, 2, 42, 37, 3, 4]);
    }

    #[test]
    fn replace_middle_short_inputs_insert() {
        let mut seq: Vec<i32> = vec![1, 2, 3];
        assert_eq!(replace_middle(&mut seq), &vec![1, 2, 42, 37, 3]);

        let mut seq: Vec<i32> = vec![1];
        assert_eq!(replace_middle(&mut seq), &vec![1, 42, 37]);

        let mut seq: VecDeque<i32> = VecDeque::new();
        assert_eq!(replace_middle(&mut seq), &VecDeque::from(vec![42, 37]));
    }

    #[test]
    fn delete_third_and_seventh_known_cases() {
        let mut seq: Vec<i32> = (1..9).collect();
        assert_eq!(
            delete_third_and_seventh(&mut seq).cloned(),
            Ok(vec![1, 2, 4, 5, 6, 8])
        );

        let mut seq: VecDeque<Value> = values!["a", "b", "c", "d", "e", "f", "g"].into();
        let expected: VecDeque<Value> = values!["a", "b", "d", "e", "f"].into();
        assert_eq!(delete_third_and_seventh(&mut seq).cloned(), Ok(expected));
    }

    #[test]
    fn delete_third_and_seventh_short_input_untouched() {
        let mut seq = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(
            delete_third_and_seventh(&mut seq).map(|_| ()),
            Err(SeqError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert_eq!(seq, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn delete_middle_known_cases() {
        let mut seq: Vec<i32> = (1..=8).collect();
        assert_eq!(delete_middle(&mut seq), &vec![1, 2, 7, 8]);

        for n in 0..=4 {
            let mut seq: Vec<i32> = (0..n).collect();
            let expected = seq.clone();
            assert_eq!(delete_middle(&mut seq), &expected, "n={n}");
        }
    }
}
