//! Argument values and their textual rendering

use std::fmt;
use std::sync::Arc;

/// A single formatting argument
#[derive(Clone)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Anything else, rendered through its `Debug` output
    Other(Arc<dyn fmt::Debug + Send + Sync>),
}

impl Value {
    /// Wrap an arbitrary value that has no dedicated variant
    pub fn other(value: impl fmt::Debug + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(value))
    }

    /// Guess the most specific variant for a command-line argument
    ///
    /// `true`/`false` become booleans, integer literals become `Int`, finite
    /// float literals become `Float`, and everything else stays a string.
    pub fn infer(raw: &str) -> Self {
        match raw {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Self::Int(n);
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => Self::Float(f),
            _ => Self::Str(raw.to_string()),
        }
    }

    /// Name of the variant, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Other(_) => "other",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write_float(f, *x),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Other(v) => write!(f, "{:?}", v),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Other(v) => f.debug_tuple("Other").field(v).finish(),
        }
    }
}

/// Shortest round-trip decimal, never in exponent form
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        f.write_str("NaN")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { "+Inf" } else { "-Inf" })
    } else {
        write!(f, "{}", x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        // Through the decimal form so 0.1f32 renders as 0.1, not 0.10000000149011612
        Self::Float(x.to_string().parse().unwrap_or(f64::from(x)))
    }
}

macro_rules! int_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

int_from!(i8, i16, i32, i64, u8, u16, u32);

/// Build a `Vec<Value>` from heterogeneous expressions
///
/// ```rust
/// use interpol::{format, values};
///
/// let out = format("{1} is {2} years old: {3}", &values!["Denis", 1, true]).unwrap();
/// assert_eq!(out, "Denis is 1 years old: true");
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}
