use crate::{AsValue, Error, Result};
use std::fmt::{self, Display};

/// Dynamically typed SQL value.
///
/// Every variant but `Null` carries an `Option`: `None` means a typed NULL, which is also how
/// column types are described in a `ColumnDef` (`Value::Int64(None)` is "a BIGINT column").
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    UInt8(Option<u8>),
    UInt16(Option<u16>),
    UInt32(Option<u32>),
    UInt64(Option<u64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
}

/// Primitive kind of a scalar field, the unit column types are inferred from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Boolean,
    Integer,
    Unsigned,
    Float,
    Text,
    Blob,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            Value::Null
                | Value::Boolean(None)
                | Value::Int8(None)
                | Value::Int16(None)
                | Value::Int32(None)
                | Value::Int64(None)
                | Value::UInt8(None)
                | Value::UInt16(None)
                | Value::UInt32(None)
                | Value::UInt64(None)
                | Value::Float32(None)
                | Value::Float64(None)
                | Value::Varchar(None)
                | Value::Blob(None)
        )
    }

    /// `None` for `Value::Null`, which has no kind.
    pub fn kind(&self) -> Option<ScalarKind> {
        Some(match self {
            Value::Null => return None,
            Value::Boolean(..) => ScalarKind::Boolean,
            Value::Int8(..) | Value::Int16(..) | Value::Int32(..) | Value::Int64(..) => {
                ScalarKind::Integer
            }
            Value::UInt8(..) | Value::UInt16(..) | Value::UInt32(..) | Value::UInt64(..) => {
                ScalarKind::Unsigned
            }
            Value::Float32(..) | Value::Float64(..) => ScalarKind::Float,
            Value::Varchar(..) => ScalarKind::Text,
            Value::Blob(..) => ScalarKind::Blob,
        })
    }

    pub fn same_type(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Convert this value into the variant of `target`, keeping NULL as a NULL of the new type.
    ///
    /// Drivers use it to adapt loosely typed arguments (`"1"` for an integer column) to the
    /// parameter types the backend expects.
    pub fn try_as(self, target: &Value) -> Result<Value> {
        if self.same_type(target) || matches!(target, Value::Null) {
            return Ok(self);
        }
        if self.is_null() {
            return Ok(match target {
                Value::Null => Value::Null,
                Value::Boolean(..) => Value::Boolean(None),
                Value::Int8(..) => Value::Int8(None),
                Value::Int16(..) => Value::Int16(None),
                Value::Int32(..) => Value::Int32(None),
                Value::Int64(..) => Value::Int64(None),
                Value::UInt8(..) => Value::UInt8(None),
                Value::UInt16(..) => Value::UInt16(None),
                Value::UInt32(..) => Value::UInt32(None),
                Value::UInt64(..) => Value::UInt64(None),
                Value::Float32(..) => Value::Float32(None),
                Value::Float64(..) => Value::Float64(None),
                Value::Varchar(..) => Value::Varchar(None),
                Value::Blob(..) => Value::Blob(None),
            });
        }
        let converted = match target {
            Value::Null => self,
            Value::Boolean(..) => bool::try_from_value(self)?.as_value(),
            Value::Int8(..) => i8::try_from_value(self)?.as_value(),
            Value::Int16(..) => i16::try_from_value(self)?.as_value(),
            Value::Int32(..) => i32::try_from_value(self)?.as_value(),
            Value::Int64(..) => i64::try_from_value(self)?.as_value(),
            Value::UInt8(..) => u8::try_from_value(self)?.as_value(),
            Value::UInt16(..) => u16::try_from_value(self)?.as_value(),
            Value::UInt32(..) => u32::try_from_value(self)?.as_value(),
            Value::UInt64(..) => u64::try_from_value(self)?.as_value(),
            Value::Float32(..) => f32::try_from_value(self)?.as_value(),
            Value::Float64(..) => f64::try_from_value(self)?.as_value(),
            Value::Varchar(..) => match self {
                Value::Varchar(v) => Value::Varchar(v),
                Value::Blob(..) => {
                    return Err(Error::msg("Cannot convert a blob into a string parameter"));
                }
                other => Value::Varchar(Some(other.to_string())),
            },
            Value::Blob(..) => Vec::<u8>::try_from_value(self)?.as_value(),
        };
        Ok(converted)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("NULL");
        }
        match self {
            Value::Boolean(Some(v)) => write!(f, "{v}"),
            Value::Int8(Some(v)) => write!(f, "{v}"),
            Value::Int16(Some(v)) => write!(f, "{v}"),
            Value::Int32(Some(v)) => write!(f, "{v}"),
            Value::Int64(Some(v)) => write!(f, "{v}"),
            Value::UInt8(Some(v)) => write!(f, "{v}"),
            Value::UInt16(Some(v)) => write!(f, "{v}"),
            Value::UInt32(Some(v)) => write!(f, "{v}"),
            Value::UInt64(Some(v)) => write!(f, "{v}"),
            Value::Float32(Some(v)) => write!(f, "{v}"),
            Value::Float64(Some(v)) => write!(f, "{v}"),
            Value::Varchar(Some(v)) => f.write_str(v),
            Value::Blob(Some(v)) => {
                f.write_str("\\x")?;
                for b in v.iter() {
                    write!(f, "{:02X}", b)?;
                }
                Ok(())
            }
            _ => f.write_str("NULL"),
        }
    }
}
