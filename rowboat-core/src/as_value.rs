use crate::{Error, Result, ScalarKind, Value, truncate_long};
use std::any;

/// Conversion between native Rust types and the dynamically typed [`Value`].
///
/// Query arguments go through [`AsValue::as_value`], decoded columns come back through
/// [`AsValue::try_from_value`]. The empty value of a type (`as_empty_value`) doubles as its
/// column type description inside a [`crate::ColumnDef`].
///
/// # Examples
/// ```rust
/// use rowboat_core::{AsValue, Value};
/// let v = 42i32.as_value();
/// assert!(matches!(v, Value::Int32(Some(42))));
/// let n: i64 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait AsValue {
    /// Whether NULL is a legal value of this type. Only `Option<T>` says yes.
    const NULLABLE: bool = false;
    /// NULL-like variant describing the type of `Self`.
    fn as_empty_value() -> Value;
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] into `Self`.
    ///
    /// Integer targets accept any integer variant that fits, booleans accept integers
    /// (SQLite has no boolean storage class) and every numeric target parses `Varchar`.
    /// NULL is rejected unless `Self` is an `Option`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
    /// Parse the whole string as `Self`.
    fn parse(input: impl AsRef<str>) -> Result<Self>
    where
        Self: Sized,
    {
        Err(Error::msg(format!(
            "Cannot parse `{}` as {}",
            truncate_long!(input.as_ref()),
            any::type_name::<Self>()
        )))
    }
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

fn mismatch<T>(value: &Value) -> Error {
    Error::msg(format!(
        "Cannot convert {value:?} to {}",
        any::type_name::<T>()
    ))
}

fn out_of_range<T>(value: impl std::fmt::Display) -> Error {
    Error::msg(format!(
        "Value {value} is out of range for {}",
        any::type_name::<T>()
    ))
}

macro_rules! impl_as_value_integer {
    ($source:ty, $destination:path) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                macro_rules! narrow {
                    ($v:expr) => {
                        <$source>::try_from($v).map_err(|_| out_of_range::<$source>($v))
                    };
                }
                match &value {
                    Value::Int8(Some(v)) => narrow!(*v),
                    Value::Int16(Some(v)) => narrow!(*v),
                    Value::Int32(Some(v)) => narrow!(*v),
                    Value::Int64(Some(v)) => narrow!(*v),
                    Value::UInt8(Some(v)) => narrow!(*v),
                    Value::UInt16(Some(v)) => narrow!(*v),
                    Value::UInt32(Some(v)) => narrow!(*v),
                    Value::UInt64(Some(v)) => narrow!(*v),
                    Value::Boolean(Some(v)) => Ok(*v as _),
                    Value::Varchar(Some(v)) => Self::parse(v),
                    _ => Err(mismatch::<Self>(&value)),
                }
            }
            fn parse(input: impl AsRef<str>) -> Result<Self> {
                let input = input.as_ref();
                input.trim().parse::<$source>().map_err(|e| {
                    Error::new(e).context(format!(
                        "Cannot parse `{}` as {}",
                        truncate_long!(input),
                        any::type_name::<Self>()
                    ))
                })
            }
        }
    };
}
impl_as_value_integer!(i8, Value::Int8);
impl_as_value_integer!(i16, Value::Int16);
impl_as_value_integer!(i32, Value::Int32);
impl_as_value_integer!(i64, Value::Int64);
impl_as_value_integer!(u8, Value::UInt8);
impl_as_value_integer!(u16, Value::UInt16);
impl_as_value_integer!(u32, Value::UInt32);
impl_as_value_integer!(u64, Value::UInt64);

macro_rules! impl_as_value_float {
    ($source:ty, $destination:path) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match &value {
                    Value::Float32(Some(v)) => Ok(*v as _),
                    Value::Float64(Some(v)) => Ok(*v as _),
                    Value::Int8(Some(v)) => Ok(*v as _),
                    Value::Int16(Some(v)) => Ok(*v as _),
                    Value::Int32(Some(v)) => Ok(*v as _),
                    Value::Int64(Some(v)) => Ok(*v as _),
                    Value::UInt8(Some(v)) => Ok(*v as _),
                    Value::UInt16(Some(v)) => Ok(*v as _),
                    Value::UInt32(Some(v)) => Ok(*v as _),
                    Value::UInt64(Some(v)) => Ok(*v as _),
                    Value::Varchar(Some(v)) => Self::parse(v),
                    _ => Err(mismatch::<Self>(&value)),
                }
            }
            fn parse(input: impl AsRef<str>) -> Result<Self> {
                let input = input.as_ref();
                input.trim().parse::<$source>().map_err(|e| {
                    Error::new(e).context(format!(
                        "Cannot parse `{}` as {}",
                        truncate_long!(input),
                        any::type_name::<Self>()
                    ))
                })
            }
        }
    };
}
impl_as_value_float!(f32, Value::Float32);
impl_as_value_float!(f64, Value::Float64);

impl AsValue for bool {
    fn as_empty_value() -> Value {
        Value::Boolean(None)
    }
    fn as_value(self) -> Value {
        Value::Boolean(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(Some(v)) => Ok(v),
            Value::Varchar(Some(ref v)) => Self::parse(v),
            _ if matches!(value.kind(), Some(ScalarKind::Integer | ScalarKind::Unsigned)) => {
                match i64::try_from_value(value.clone()) {
                    Ok(0) => Ok(false),
                    Ok(1) => Ok(true),
                    _ => Err(mismatch::<Self>(&value)),
                }
            }
            _ => Err(mismatch::<Self>(&value)),
        }
    }
    fn parse(input: impl AsRef<str>) -> Result<Self> {
        match input.as_ref().trim() {
            v if v.eq_ignore_ascii_case("true") || v == "1" || v.eq_ignore_ascii_case("t") => {
                Ok(true)
            }
            v if v.eq_ignore_ascii_case("false") || v == "0" || v.eq_ignore_ascii_case("f") => {
                Ok(false)
            }
            v => Err(Error::msg(format!(
                "Cannot parse `{}` as bool",
                truncate_long!(v)
            ))),
        }
    }
}

impl AsValue for String {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Varchar(Some(v)) => Ok(v),
            Value::Blob(Some(v)) => String::from_utf8(v.into_vec())
                .map_err(|e| Error::new(e).context("Blob is not valid UTF-8 text")),
            ref v if v.is_null() => Err(mismatch::<Self>(v)),
            v => Ok(v.to_string()),
        }
    }
    fn parse(input: impl AsRef<str>) -> Result<Self> {
        Ok(input.as_ref().into())
    }
}

impl AsValue for Vec<u8> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into_boxed_slice()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(Some(v)) => Ok(v.into_vec()),
            Value::Varchar(Some(v)) => Ok(v.into_bytes()),
            v => Err(mismatch::<Self>(&v)),
        }
    }
}

impl<T: AsValue> AsValue for Option<T> {
    const NULLABLE: bool = true;
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(None);
        }
        T::try_from_value(value).map(Some)
    }
    fn parse(input: impl AsRef<str>) -> Result<Self> {
        T::parse(input).map(Some)
    }
}
