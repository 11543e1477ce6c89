use crate::{ErrorKind, RecordSchema, Result, ScalarKind, Target, TypeShape};

/// How many rows a target expects and whether it holds them inline or boxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerShape {
    /// `&mut T`: at most one row is consumed.
    SingleValue,
    /// `&mut Option<Box<T>>`: at most one row, the box is allocated when the row arrives.
    SinglePointer,
    /// `&mut Vec<T>`: every row is appended.
    SliceOfValue,
    /// `&mut Vec<Box<T>>`: every row is appended as its own allocation.
    SliceOfPointer,
}

impl ContainerShape {
    pub fn is_single(&self) -> bool {
        matches!(self, ContainerShape::SingleValue | ContainerShape::SinglePointer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Value,
    Pointer,
}

#[derive(Debug, Clone, Copy)]
pub enum ElementType {
    /// Single column decoded straight into a primitive.
    Scalar(ScalarKind),
    Record(&'static RecordSchema),
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ElementType::Scalar(a), ElementType::Scalar(b)) => a == b,
            (ElementType::Record(a), ElementType::Record(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

/// Resolved metadata about a result target, computed once per operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDescriptor {
    pub element: ElementType,
    pub table_name: String,
    pub container: ContainerShape,
    pub ownership: Ownership,
}

impl RecordDescriptor {
    /// Resolve the target `&mut T`.
    pub fn of<T: Target>() -> Result<Self> {
        resolve(&TypeShape::pointer(T::shape()))
    }
    pub fn schema(&self) -> Option<&'static RecordSchema> {
        match self.element {
            ElementType::Record(schema) => Some(schema),
            ElementType::Scalar(..) => None,
        }
    }
}

/// Classify the shape of a target reference.
///
/// Accepted shapes, all behind the outer reference: a primitive, a record, a boxed record, a vector
/// of records and a vector of boxed records. Anything else fails with
/// [`ErrorKind::UnsupportedModelShape`].
pub fn resolve(reference: &TypeShape) -> Result<RecordDescriptor> {
    let TypeShape::Pointer(target) = reference else {
        return Err(unsupported(reference, "the target must be passed by reference"));
    };
    match target.as_ref() {
        TypeShape::Scalar { kind, name } => {
            let name = name.rsplit("::").next().unwrap_or(name).to_lowercase();
            Ok(RecordDescriptor {
                element: ElementType::Scalar(*kind),
                table_name: name,
                container: ContainerShape::SingleValue,
                ownership: Ownership::Value,
            })
        }
        TypeShape::Record(schema) => {
            record(reference, schema, ContainerShape::SingleValue, Ownership::Value)
        }
        TypeShape::Pointer(inner) => match inner.as_ref() {
            TypeShape::Record(schema) => record(
                reference,
                schema,
                ContainerShape::SinglePointer,
                Ownership::Pointer,
            ),
            _ => Err(unsupported(reference, "only records can be boxed")),
        },
        TypeShape::Slice(inner) => match inner.as_ref() {
            TypeShape::Record(schema) => record(
                reference,
                schema,
                ContainerShape::SliceOfValue,
                Ownership::Value,
            ),
            TypeShape::Pointer(element) => match element.as_ref() {
                TypeShape::Record(schema) => record(
                    reference,
                    schema,
                    ContainerShape::SliceOfPointer,
                    Ownership::Pointer,
                ),
                _ => Err(unsupported(reference, "only records can be boxed")),
            },
            _ => Err(unsupported(reference, "slices must contain records")),
        },
        TypeShape::Map(..) => Err(unsupported(reference, "maps are not supported")),
    }
}

fn record(
    reference: &TypeShape,
    schema: &'static RecordSchema,
    container: ContainerShape,
    ownership: Ownership,
) -> Result<RecordDescriptor> {
    if schema.table.is_empty() {
        return Err(unsupported(reference, "the record has no table name"));
    }
    Ok(RecordDescriptor {
        element: ElementType::Record(schema),
        table_name: schema.table.to_string(),
        container,
        ownership,
    })
}

fn unsupported(reference: &TypeShape, reason: &str) -> anyhow::Error {
    ErrorKind::UnsupportedModelShape(format!("{reference} ({reason})")).into()
}
