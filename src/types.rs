//! Argument values accepted by the emit operations

use std::error::Error as StdError;
use std::fmt;
use serde_json::Value;

/// One positional argument of an emit call
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    /// Printed verbatim
    Text(String),
    /// Strings print raw, everything else as compact JSON
    Json(Value),
    /// An error object; see [`ErrorRecord`]
    Error(ErrorRecord),
}

/// Structural description of an error: a name, a message and a stack trace.
///
/// Any field may be missing. A record only counts as an error when all three
/// are present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Error type name, printed as `{name}`
    pub name: Option<String>,
    /// Human-readable message
    pub message: Option<String>,
    /// Trace whose first line repeats name and message
    pub stack: Option<String>,
}

impl LogValue {
    /// Capture the `Debug` representation of a value with no better conversion
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        LogValue::Text(format!("{:?}", value))
    }

    /// Capture the `Display` representation of a value
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        LogValue::Text(value.to_string())
    }

    /// Capture a `std::error::Error` as an [`ErrorRecord`]
    pub fn error<E: StdError + ?Sized>(err: &E) -> Self {
        LogValue::Error(ErrorRecord::capture(err))
    }

    /// The error record this value stands for, if it looks like one.
    ///
    /// JSON objects qualify when their `name`, `message` and `stack` are non-empty strings.
    pub fn as_error_like(&self) -> Option<ErrorRecord> {
        let record = match self {
            LogValue::Error(record) => record.clone(),
            LogValue::Json(value) => ErrorRecord::from_json(value)?,
            LogValue::Text(_) => return None,
        };
        record.is_error_like().then_some(record)
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Text(text) => f.write_str(text),
            LogValue::Json(Value::String(text)) => f.write_str(text),
            LogValue::Json(value) => write!(f, "{}", value),
            LogValue::Error(record) => write!(f, "{}", record),
        }
    }
}

impl ErrorRecord {
    /// Record with all three fields set
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        stack: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            message: Some(message.into()),
            stack: Some(stack.into()),
        }
    }

    /// Build a record from a Rust error.
    ///
    /// The stack starts with `Name: message` and lists each `source()` below it.
    pub fn capture<E: StdError + ?Sized>(err: &E) -> Self {
        let name = short_type_name(std::any::type_name::<E>()).to_string();
        let message = err.to_string();

        let mut stack = format!("{}: {}", name, message);
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str("\n    caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }

        Self::new(name, message, stack)
    }

    /// Read `name`, `message` and `stack` string fields from a JSON object
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
        Some(Self {
            name: field("name"),
            message: field("message"),
            stack: field("stack"),
        })
    }

    /// All three fields present and non-empty
    pub fn is_error_like(&self) -> bool {
        [&self.name, &self.message, &self.stack]
            .iter()
            .all(|field| field.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.message) {
            (Some(name), Some(message)) => write!(f, "{{{}}} {}", name, message),
            (Some(name), None) => write!(f, "{{{}}}", name),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("{}"),
        }
    }
}

fn short_type_name(full: &str) -> &str {
    // strip generics first so `a::B<c::D>` yields `B`
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl From<&str> for LogValue {
    fn from(value: &str) -> Self {
        LogValue::Text(value.to_string())
    }
}

impl From<String> for LogValue {
    fn from(value: String) -> Self {
        LogValue::Text(value)
    }
}

impl From<&String> for LogValue {
    fn from(value: &String) -> Self {
        LogValue::Text(value.clone())
    }
}

impl From<Value> for LogValue {
    fn from(value: Value) -> Self {
        LogValue::Json(value)
    }
}

impl From<ErrorRecord> for LogValue {
    fn from(record: ErrorRecord) -> Self {
        LogValue::Error(record)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LogValue {
                fn from(value: $ty) -> Self {
                    LogValue::Text(value.to_string())
                }
            }
        )*
    };
}

impl_from_scalar!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
