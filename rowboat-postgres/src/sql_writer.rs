use rowboat_core::{ColumnDef, SqlWriter, Value};

#[derive(Default, Debug, Clone, Copy)]
pub struct PostgresSqlWriter {}

impl SqlWriter for PostgresSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn write_value_type(&self, out: &mut String, value: &Value) {
        out.push_str(match value {
            Value::Boolean(..) => "BOOLEAN",
            Value::Int8(..) | Value::Int16(..) | Value::UInt8(..) => "SMALLINT",
            Value::Int32(..) | Value::UInt16(..) => "INTEGER",
            Value::Int64(..) | Value::UInt32(..) | Value::UInt64(..) => "BIGINT",
            Value::Float32(..) => "REAL",
            Value::Float64(..) => "DOUBLE PRECISION",
            Value::Blob(..) => "BYTEA",
            Value::Null | Value::Varchar(..) => "TEXT",
        });
    }

    fn write_primary_key_type(&self, out: &mut String, column: &ColumnDef) {
        if !column.column_type.is_empty() {
            out.push_str(column.column_type);
            out.push_str(" PRIMARY KEY");
            return;
        }
        match column.value {
            Value::Int8(..)
            | Value::Int16(..)
            | Value::Int32(..)
            | Value::UInt8(..)
            | Value::UInt16(..) => out.push_str("SERIAL PRIMARY KEY"),
            Value::Int64(..) | Value::UInt32(..) | Value::UInt64(..) => {
                out.push_str("BIGSERIAL PRIMARY KEY")
            }
            _ => {
                self.write_column_type(out, column);
                out.push_str(" PRIMARY KEY");
            }
        }
    }
}
