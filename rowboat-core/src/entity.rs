use crate::{Result, Row, RowLabeled, Value};

/// A record type mapped to a table, usually obtained with `#[derive(Entity)]`.
///
/// The declared field order is the binding contract: `from_row` decodes columns positionally and
/// `row` produces values in the same order as `schema().columns`.
pub trait Entity: Send + Sized {
    fn schema() -> &'static RecordSchema;

    /// Decode one row, column `i` feeds field `i`.
    fn from_row(row: RowLabeled) -> Result<Self>;

    /// Field values in declared order.
    fn row(&self) -> Row;
}

/// Static description of a record type and the table backing it.
#[derive(Debug)]
pub struct RecordSchema {
    /// Rust type name.
    pub name: &'static str,
    /// Table name, never empty for derived entities.
    pub table: &'static str,
    /// Columns in field declaration order.
    pub columns: Box<[ColumnDef]>,
}

impl RecordSchema {
    pub fn column_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
    pub fn primary_key(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.primary_key)
    }
}

/// Column metadata taken from the field type and its `#[rowboat(...)]` attributes.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: &'static str,
    /// Field name in the Rust struct.
    pub field: &'static str,
    /// Empty value of the field type, it describes the column type.
    pub value: Value,
    pub nullable: bool,
    pub primary_key: bool,
    pub unique: bool,
    /// Width of a bounded text column.
    pub size: Option<u32>,
    /// Explicit SQL type, overrides the inferred one when not empty.
    pub column_type: &'static str,
}
