use rowboat_core::{ColumnDef, ScalarKind, SqlWriter, Value};

#[derive(Default, Debug, Clone, Copy)]
pub struct SqliteSqlWriter {}

impl SqlWriter for SqliteSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn write_value_type(&self, out: &mut String, value: &Value) {
        out.push_str(match value.kind() {
            Some(ScalarKind::Boolean) => "BOOLEAN",
            Some(ScalarKind::Integer | ScalarKind::Unsigned) => "INTEGER",
            Some(ScalarKind::Float) => "REAL",
            Some(ScalarKind::Blob) => "BLOB",
            Some(ScalarKind::Text) | None => "TEXT",
        });
    }

    fn write_primary_key_type(&self, out: &mut String, column: &ColumnDef) {
        let integer = matches!(
            column.value.kind(),
            Some(ScalarKind::Integer | ScalarKind::Unsigned)
        );
        if column.column_type.is_empty() && integer {
            // Alias of the rowid
            out.push_str("INTEGER PRIMARY KEY AUTOINCREMENT");
        } else {
            self.write_column_type(out, column);
            out.push_str(" PRIMARY KEY");
        }
    }
}
