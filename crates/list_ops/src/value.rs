use std::fmt;

/// Dynamically typed element, for sequences that mix strings, numbers and
/// nested lists.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<Value>),
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Build a `Vec<Value>` from mixed literals.
///
/// ```
/// use list_ops::{Value, values};
///
/// let seq = values![1, "two", true];
/// assert_eq!(seq[1], Value::Str("two".into()));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($x:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($x)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn display_known_cases() {
        let cases = [
            (Value::Nil, "None"),
            (Value::from(false), "False"),
            (Value::from(-12), "-12"),
            (Value::from("Jan"), "'Jan'"),
            (Value::List(Vec::new()), "[]"),
            (Value::from(values![1, "two", true]), "[1, 'two', True]"),
            (Value::from(values![values![1], Value::Nil]), "[[1], None]"),
        ];

        for (value, expected) in cases {
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn values_macro() {
        assert!(values![].is_empty());
        assert_eq!(
            values![1, "a", false, 7_i64,],
            vec![
                Value::Int(1),
                Value::Str("a".to_owned()),
                Value::Bool(false),
                Value::Int(7),
            ]
        );
    }
}
