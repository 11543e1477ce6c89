#[cfg(test)]
mod tests {
    use rowboat_core::{AsValue, ScalarKind, Value};

    #[test]
    fn value_none() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Int32(None).is_null());
        assert!(!Value::Int32(Some(0)).is_null());
        assert_eq!(Value::Null.kind(), None);
        assert_eq!(Value::UInt16(None).kind(), Some(ScalarKind::Unsigned));
    }

    #[test]
    fn value_bool() {
        let val: Value = true.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Varchar(Some("true".into())));
        let var: bool = AsValue::try_from_value(val).unwrap();
        assert!(var);
        assert!(bool::try_from_value(1_i8.into()).unwrap());
        assert!(!bool::try_from_value(0_i64.into()).unwrap());
        assert!(bool::try_from_value(1_u32.into()).unwrap());
        assert!(bool::try_from_value("t".into()).unwrap());
        assert!(!bool::try_from_value("FALSE".into()).unwrap());
        assert!(bool::try_from_value(8_i16.into()).is_err());
        assert!(bool::try_from_value(0.5_f32.into()).is_err());
        assert!(bool::try_from_value(Value::Boolean(None)).is_err());
    }

    #[test]
    fn value_integers() {
        let val: Value = 127_i8.into();
        assert_eq!(val, Value::Int8(Some(127)));
        assert_eq!(i8::try_from_value(99_u8.into()).unwrap(), 99);
        assert!(i8::try_from_value(128_i16.into()).is_err());
        assert!(i8::try_from_value(0.1_f64.into()).is_err());

        assert_eq!(i32::try_from_value(Value::Int64(Some(-5))).unwrap(), -5);
        assert_eq!(i64::try_from_value(" 42 ".into()).unwrap(), 42);
        assert_eq!(i64::try_from_value(true.into()).unwrap(), 1);
        assert!(i64::try_from_value("forty two".into()).is_err());

        assert_eq!(u16::try_from_value(65535_i32.into()).unwrap(), 65535);
        assert!(u16::try_from_value((-1_i32).into()).is_err());
        assert!(u64::try_from_value(Value::Int64(Some(-1))).is_err());
        assert_eq!(
            u64::try_from_value(Value::UInt64(Some(u64::MAX))).unwrap(),
            u64::MAX
        );
        assert!(i64::try_from_value(Value::UInt64(Some(u64::MAX))).is_err());
        assert!(i32::try_from_value(Value::Int32(None)).is_err());
    }

    #[test]
    fn value_floats() {
        let val: Value = 1.5_f64.into();
        assert_eq!(val, Value::Float64(Some(1.5)));
        assert_eq!(f64::try_from_value(Value::Float32(Some(0.25))).unwrap(), 0.25);
        assert_eq!(f64::try_from_value(Value::Int64(Some(12))).unwrap(), 12.0);
        assert_eq!(f32::try_from_value("3.5".into()).unwrap(), 3.5);
        assert!(f32::try_from_value(true.into()).is_err());
    }

    #[test]
    fn value_string() {
        let val: Value = "hello".into();
        assert_eq!(val, Value::Varchar(Some("hello".into())));
        let val: Value = String::from("hello").into();
        assert_eq!(val, Value::Varchar(Some("hello".into())));
        assert_eq!(String::try_from_value(Value::Int64(Some(42))).unwrap(), "42");
        assert_eq!(
            String::try_from_value(Value::Blob(Some(Box::new(*b"abc")))).unwrap(),
            "abc"
        );
        assert!(String::try_from_value(Value::Blob(Some(Box::new([0xff, 0xfe])))).is_err());
        assert!(String::try_from_value(Value::Null).is_err());
        assert!(String::try_from_value(Value::Varchar(None)).is_err());
    }

    #[test]
    fn value_blob() {
        let val: Value = vec![1_u8, 2, 3].into();
        assert_eq!(val, Value::Blob(Some(Box::new([1, 2, 3]))));
        assert_eq!(Vec::<u8>::try_from_value(val).unwrap(), [1, 2, 3]);
        assert_eq!(Vec::<u8>::try_from_value("ab".into()).unwrap(), b"ab");
        assert!(Vec::<u8>::try_from_value(Value::Int8(Some(1))).is_err());
        assert_eq!(
            Value::Blob(Some(Box::new([0x0a, 0xff]))).to_string(),
            "\\x0AFF"
        );
    }

    #[test]
    fn value_option() {
        assert!(<Option<i32> as AsValue>::NULLABLE);
        assert!(!<i32 as AsValue>::NULLABLE);
        let val: Value = Option::<i32>::None.into();
        assert_eq!(val, Value::Int32(None));
        let val: Value = Some(7_i32).into();
        assert_eq!(val, Value::Int32(Some(7)));
        assert_eq!(Option::<i32>::try_from_value(Value::Null).unwrap(), None);
        assert_eq!(Option::<i32>::try_from_value(Value::Int64(None)).unwrap(), None);
        assert_eq!(
            Option::<String>::try_from_value("x".into()).unwrap(),
            Some("x".into())
        );
        assert_eq!(
            Option::<Vec<u8>>::as_empty_value(),
            Value::Blob(None)
        );
    }

    #[test]
    fn value_try_as() {
        assert_eq!(
            Value::Varchar(Some("7".into()))
                .try_as(&Value::Int32(None))
                .unwrap(),
            Value::Int32(Some(7))
        );
        assert_eq!(
            Value::Int64(Some(7)).try_as(&Value::Varchar(None)).unwrap(),
            Value::Varchar(Some("7".into()))
        );
        assert_eq!(
            Value::Int16(None).try_as(&Value::Float64(None)).unwrap(),
            Value::Float64(None)
        );
        assert_eq!(
            Value::Null.try_as(&Value::Boolean(None)).unwrap(),
            Value::Boolean(None)
        );
        assert_eq!(
            Value::UInt8(Some(3)).try_as(&Value::Null).unwrap(),
            Value::UInt8(Some(3))
        );
        assert!(
            Value::Blob(Some(Box::new([1])))
                .try_as(&Value::Varchar(None))
                .is_err()
        );
        assert!(Value::Int64(Some(300)).try_as(&Value::Int8(None)).is_err());
        assert!(Value::Int32(Some(1)).same_type(&Value::Int32(None)));
        assert!(!Value::Int32(Some(1)).same_type(&Value::Int64(Some(1))));
    }
}
