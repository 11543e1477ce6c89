use crate::{AsValue, ErrorKind, RecordSchema, Result, RowLabeled, RowNames, Value};
use std::{any, vec};

/// Positional decoder for one row, used by the code `#[derive(Entity)]` generates.
///
/// Column `i` is bound to field `i`: column names are only used in error messages.
pub struct RowScanner {
    schema: &'static RecordSchema,
    labels: RowNames,
    values: vec::IntoIter<Value>,
    position: usize,
}

impl RowScanner {
    /// Fails when the row does not have exactly one column per field.
    pub fn new(schema: &'static RecordSchema, row: RowLabeled) -> Result<Self> {
        if row.len() != schema.columns.len() {
            return Err(ErrorKind::Scan(format!(
                "{} expects {} columns but the row has {} ({})",
                schema.name,
                schema.columns.len(),
                row.len(),
                row.labels.join(", "),
            ))
            .into());
        }
        Ok(Self {
            schema,
            labels: row.labels,
            values: row.values.into_vec().into_iter(),
            position: 0,
        })
    }

    /// Decode the next column into the next field.
    pub fn next_field<T: AsValue>(&mut self) -> Result<T> {
        let index = self.position;
        let field = self
            .schema
            .columns
            .get(index)
            .map(|c| c.field)
            .unwrap_or_default();
        let column = self.labels.get(index).map(String::as_str).unwrap_or_default();
        let Some(value) = self.values.next() else {
            return Err(ErrorKind::Scan(format!(
                "No column left for field `{}` of {}",
                field, self.schema.name
            ))
            .into());
        };
        self.position += 1;
        T::try_from_value(value).map_err(|e| {
            ErrorKind::Scan(format!(
                "Column `{}` cannot be decoded into field `{}: {}` of {}: {:#}",
                column,
                field,
                any::type_name::<T>(),
                self.schema.name,
                e
            ))
            .into()
        })
    }
}

/// Decode a single column row into a primitive.
pub fn scan_scalar<T: AsValue>(row: RowLabeled) -> Result<T> {
    if row.len() != 1 {
        return Err(ErrorKind::Scan(format!(
            "A {} target needs exactly one column but the row has {} ({})",
            any::type_name::<T>(),
            row.len(),
            row.labels.join(", "),
        ))
        .into());
    }
    let column = row.labels.first().cloned().unwrap_or_default();
    let Some(value) = row.values.into_vec().into_iter().next() else {
        return Err(ErrorKind::Scan("The row has no values".into()).into());
    };
    T::try_from_value(value).map_err(|e| {
        ErrorKind::Scan(format!(
            "Column `{}` cannot be decoded into {}: {:#}",
            column,
            any::type_name::<T>(),
            e
        ))
        .into()
    })
}
