use bytes::BytesMut;
use postgres_types::{FromSql, IsNull, ToSql, Type, to_sql_checked};
use rowboat_core::Value;
use std::error::Error;

/// Bridge between [`Value`] and the postgres wire types.
#[derive(Debug)]
pub struct ValueHolder(pub Value);

impl From<Value> for ValueHolder {
    fn from(value: Value) -> Self {
        ValueHolder(value)
    }
}

impl<'a> FromSql<'a> for ValueHolder {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        Self::from_sql_nullable(ty, Some(raw))
    }
    fn from_sql_null(ty: &Type) -> Result<Self, Box<dyn Error + Sync + Send>> {
        Self::from_sql_nullable(ty, None)
    }
    fn from_sql_nullable(
        ty: &Type,
        raw: Option<&'a [u8]>,
    ) -> Result<Self, Box<dyn Error + Sync + Send>> {
        macro_rules! decode {
            ($($($pg:path)|+ => ($variant:path, $source:ty),)+) => {
                match *ty {
                    $($($pg)|+ => $variant(
                        raw.map(|raw| <$source>::from_sql(ty, raw))
                            .transpose()?
                            .map(Into::into),
                    ),)+
                    _ => match raw {
                        Some(..) => {
                            return Err(rowboat_core::Error::msg(format!(
                                "Cannot decode sql type `{}`",
                                ty
                            ))
                            .into());
                        }
                        None => Value::Null,
                    },
                }
            };
        }
        let value = decode!(
            Type::BOOL => (Value::Boolean, bool),
            Type::CHAR => (Value::Int8, i8),
            Type::INT2 => (Value::Int16, i16),
            Type::INT4 => (Value::Int32, i32),
            Type::INT8 => (Value::Int64, i64),
            Type::OID => (Value::UInt32, u32),
            Type::FLOAT4 => (Value::Float32, f32),
            Type::FLOAT8 => (Value::Float64, f64),
            Type::VARCHAR | Type::TEXT | Type::NAME | Type::BPCHAR | Type::UNKNOWN => (Value::Varchar, String),
            Type::BYTEA => (Value::Blob, Vec<u8>),
        );
        Ok(value.into())
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }
}

impl ToSql for ValueHolder {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>>
    where
        Self: Sized,
    {
        match &self.0 {
            Value::Null => None::<String>.to_sql(ty, out),
            Value::Boolean(v) => v.to_sql(ty, out),
            Value::Int8(v) => v.to_sql(ty, out),
            Value::Int16(v) => v.to_sql(ty, out),
            Value::Int32(v) => v.to_sql(ty, out),
            Value::Int64(v) => v.to_sql(ty, out),
            Value::UInt8(v) => v.map(|v| v as i16).to_sql(ty, out),
            Value::UInt16(v) => v.map(|v| v as i32).to_sql(ty, out),
            Value::UInt32(v) => v.to_sql(ty, out),
            Value::UInt64(v) => v
                .map(i64::try_from)
                .transpose()
                .map_err(|_| {
                    rowboat_core::Error::msg(format!(
                        "Value `{}` does not fit a postgres BIGINT",
                        self.0
                    ))
                })?
                .to_sql(ty, out),
            Value::Float32(v) => v.to_sql(ty, out),
            Value::Float64(v) => v.to_sql(ty, out),
            Value::Varchar(v) => v.to_sql(ty, out),
            Value::Blob(v) => v.as_deref().to_sql(ty, out),
        }
    }

    fn accepts(_ty: &Type) -> bool
    where
        Self: Sized,
    {
        true
    }

    to_sql_checked!();
}

/// Empty value matching a postgres type, `Value::Null` when the type has no counterpart.
pub fn postgres_type_to_value(ty: &Type) -> Value {
    match *ty {
        Type::BOOL => Value::Boolean(None),
        Type::CHAR => Value::Int8(None),
        Type::INT2 => Value::Int16(None),
        Type::INT4 => Value::Int32(None),
        Type::INT8 => Value::Int64(None),
        Type::OID => Value::UInt32(None),
        Type::FLOAT4 => Value::Float32(None),
        Type::FLOAT8 => Value::Float64(None),
        Type::VARCHAR | Type::TEXT | Type::NAME | Type::BPCHAR => Value::Varchar(None),
        Type::BYTEA => Value::Blob(None),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::postgres_type_to_value;
    use postgres_types::Type;
    use rowboat_core::Value;

    #[test]
    fn parameter_targets() {
        assert_eq!(postgres_type_to_value(&Type::INT4), Value::Int32(None));
        assert_eq!(postgres_type_to_value(&Type::VARCHAR), Value::Varchar(None));
        assert_eq!(postgres_type_to_value(&Type::JSONB), Value::Null);
        assert_eq!(
            Value::Varchar(Some("7".into()))
                .try_as(&postgres_type_to_value(&Type::INT4))
                .expect("Text should convert to INT4"),
            Value::Int32(Some(7))
        );
        assert_eq!(
            Value::UInt8(Some(9))
                .try_as(&postgres_type_to_value(&Type::INT2))
                .expect("u8 should convert to INT2"),
            Value::Int16(Some(9))
        );
    }
}
