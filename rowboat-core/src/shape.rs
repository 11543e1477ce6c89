use crate::{Entity, Error, RecordSchema, Result, RowLabeled, ScalarKind, scan_scalar};
use std::{
    any,
    collections::{BTreeMap, HashMap},
    fmt::{self, Display},
};

/// Static description of how a type is built, the input of [`crate::resolve`].
#[derive(Debug, Clone)]
pub enum TypeShape {
    /// Primitive value (`i64`, `String`, `bool`, ...).
    Scalar {
        kind: ScalarKind,
        name: &'static str,
    },
    /// Entity struct.
    Record(&'static RecordSchema),
    /// Indirection to an individually allocated value (`&mut T`, `Box<T>`, `Option<Box<T>>`).
    Pointer(Box<TypeShape>),
    /// Growable sequence (`Vec<T>`).
    Slice(Box<TypeShape>),
    /// Key-value container, never mappable.
    Map(&'static str),
}

impl TypeShape {
    pub fn pointer(inner: TypeShape) -> Self {
        TypeShape::Pointer(Box::new(inner))
    }
    pub fn slice(inner: TypeShape) -> Self {
        TypeShape::Slice(Box::new(inner))
    }
}

impl PartialEq for TypeShape {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                TypeShape::Scalar { kind, name },
                TypeShape::Scalar {
                    kind: other_kind,
                    name: other_name,
                },
            ) => kind == other_kind && name == other_name,
            (TypeShape::Record(a), TypeShape::Record(b)) => std::ptr::eq(*a, *b),
            (TypeShape::Pointer(a), TypeShape::Pointer(b)) => a == b,
            (TypeShape::Slice(a), TypeShape::Slice(b)) => a == b,
            (TypeShape::Map(a), TypeShape::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeShape::Scalar { name, .. } => f.write_str(name),
            TypeShape::Record(schema) => f.write_str(schema.name),
            TypeShape::Pointer(inner) => write!(f, "*{inner}"),
            TypeShape::Slice(inner) => write!(f, "[{inner}]"),
            TypeShape::Map(name) => write!(f, "map {name}"),
        }
    }
}

/// Something a query result can be written into through `&mut`.
///
/// `store` receives the rows one at a time: single targets are replaced by a freshly decoded
/// value, collections append.
pub trait Target: Send {
    fn shape() -> TypeShape;
    fn store(&mut self, row: RowLabeled) -> Result<()>;
}

/// Value that can live inside a `Vec` target.
pub trait Element: Send + Sized {
    fn element_shape() -> TypeShape;
    fn scan(row: RowLabeled) -> Result<Self>;
}

impl<E: Entity> Target for Option<Box<E>> {
    fn shape() -> TypeShape {
        TypeShape::pointer(TypeShape::Record(E::schema()))
    }
    fn store(&mut self, row: RowLabeled) -> Result<()> {
        *self = Some(Box::new(E::from_row(row)?));
        Ok(())
    }
}

impl<E: Entity> Element for Box<E> {
    fn element_shape() -> TypeShape {
        TypeShape::pointer(TypeShape::Record(E::schema()))
    }
    fn scan(row: RowLabeled) -> Result<Self> {
        E::from_row(row).map(Box::new)
    }
}

impl<T: Element> Target for Vec<T> {
    fn shape() -> TypeShape {
        TypeShape::slice(T::element_shape())
    }
    fn store(&mut self, row: RowLabeled) -> Result<()> {
        self.push(T::scan(row)?);
        Ok(())
    }
}

macro_rules! impl_scalar_target {
    ($($source:ty => $kind:path),+ $(,)?) => {
        $(
            impl Target for $source {
                fn shape() -> TypeShape {
                    TypeShape::Scalar {
                        kind: $kind,
                        name: any::type_name::<$source>(),
                    }
                }
                fn store(&mut self, row: RowLabeled) -> Result<()> {
                    *self = scan_scalar(row)?;
                    Ok(())
                }
            }
            impl Element for $source {
                fn element_shape() -> TypeShape {
                    <$source as Target>::shape()
                }
                fn scan(row: RowLabeled) -> Result<Self> {
                    scan_scalar(row)
                }
            }
        )+
    };
}
impl_scalar_target!(
    bool => ScalarKind::Boolean,
    i8 => ScalarKind::Integer,
    i16 => ScalarKind::Integer,
    i32 => ScalarKind::Integer,
    i64 => ScalarKind::Integer,
    u8 => ScalarKind::Unsigned,
    u16 => ScalarKind::Unsigned,
    u32 => ScalarKind::Unsigned,
    u64 => ScalarKind::Unsigned,
    f32 => ScalarKind::Float,
    f64 => ScalarKind::Float,
    String => ScalarKind::Text,
);

fn unmappable<T>() -> Error {
    Error::msg(format!(
        "{} cannot receive query results",
        any::type_name::<T>()
    ))
}

impl<K: Send, V: Send, S: Send> Target for HashMap<K, V, S> {
    fn shape() -> TypeShape {
        TypeShape::Map(any::type_name::<Self>())
    }
    fn store(&mut self, _row: RowLabeled) -> Result<()> {
        Err(unmappable::<Self>())
    }
}

impl<K: Send, V: Send> Target for BTreeMap<K, V> {
    fn shape() -> TypeShape {
        TypeShape::Map(any::type_name::<Self>())
    }
    fn store(&mut self, _row: RowLabeled) -> Result<()> {
        Err(unmappable::<Self>())
    }
}
