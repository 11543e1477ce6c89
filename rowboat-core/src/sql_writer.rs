use crate::{Clause, ColumnDef, RecordSchema, Value, auto_quote, separated_by};
use std::fmt::Write;

/// SQL dialect: every statement rowboat sends is rendered through this trait.
///
/// Drivers override the few methods where their backend differs (column types mostly), the
/// statement layout is shared. Placeholders are always `$n`. Callers go through
/// [`SqlWriter::as_dyn`], so a dispatching writer only needs to forward that.
pub trait SqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter;

    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(out, value, '"', r#""""#);
        out.push('"');
    }

    fn write_placeholder(&self, out: &mut String, index: usize) {
        let _ = write!(out, "${}", index);
    }

    /// `"column" = $n`
    fn write_clause(&self, out: &mut String, clause: &Clause) {
        self.write_identifier_quoted(out, &clause.column);
        out.push_str(" = ");
        self.write_placeholder(out, clause.placeholder);
    }

    fn write_where(&self, out: &mut String, conditions: &[Clause]) {
        if conditions.is_empty() {
            return;
        }
        out.push_str(" WHERE ");
        separated_by(
            out,
            conditions,
            |out, v| self.write_clause(out, v),
            " AND ",
        );
    }

    fn write_value_type(&self, out: &mut String, value: &Value) {
        out.push_str(match value {
            Value::Boolean(..) => "BOOLEAN",
            Value::Int8(..) | Value::Int16(..) | Value::Int32(..) => "INTEGER",
            Value::Int64(..) => "BIGINT",
            Value::UInt8(..) | Value::UInt16(..) | Value::UInt32(..) | Value::UInt64(..) => {
                "BIGINT"
            }
            Value::Float32(..) | Value::Float64(..) => "REAL",
            Value::Blob(..) => "BLOB",
            Value::Null | Value::Varchar(..) => "TEXT",
        });
    }

    /// Explicit `column_type`, then `VARCHAR(size)`, then the type inferred from the field.
    fn write_column_type(&self, out: &mut String, column: &ColumnDef) {
        if !column.column_type.is_empty() {
            out.push_str(column.column_type);
        } else if let Some(size) = column.size {
            let _ = write!(out, "VARCHAR({})", size);
        } else {
            self.write_value_type(out, &column.value);
        }
    }

    /// Auto incrementing integer key.
    fn write_primary_key_type(&self, out: &mut String, column: &ColumnDef) {
        self.write_column_type(out, column);
        out.push_str(" PRIMARY KEY");
    }

    fn write_create_table_column_fragment(&self, out: &mut String, column: &ColumnDef) {
        self.write_identifier_quoted(out, column.name);
        out.push(' ');
        if column.primary_key {
            self.write_primary_key_type(out, column);
            return;
        }
        self.write_column_type(out, column);
        if !column.nullable {
            out.push_str(" NOT NULL");
        }
        if column.unique {
            out.push_str(" UNIQUE");
        }
    }

    fn write_create_table(&self, out: &mut String, schema: &RecordSchema, if_not_exists: bool) {
        out.push_str("CREATE TABLE ");
        if if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        self.write_identifier_quoted(out, schema.table);
        out.push_str(" (");
        separated_by(
            out,
            schema.columns.iter(),
            |out, v| self.write_create_table_column_fragment(out, v),
            ", ",
        );
        out.push(')');
    }

    fn write_drop_table(&self, out: &mut String, table: &str, if_exists: bool) {
        out.push_str("DROP TABLE ");
        if if_exists {
            out.push_str("IF EXISTS ");
        }
        self.write_identifier_quoted(out, table);
    }

    /// `SELECT * FROM "table" [WHERE ...] [LIMIT n]`, a zero `limit` means no limit.
    fn write_select(&self, out: &mut String, table: &str, conditions: &[Clause], limit: u32) {
        out.push_str("SELECT * FROM ");
        self.write_identifier_quoted(out, table);
        self.write_where(out, conditions);
        if limit > 0 {
            let _ = write!(out, " LIMIT {}", limit);
        }
    }

    /// One placeholder per column, numbered from `$1`.
    fn write_insert(&self, out: &mut String, table: &str, columns: &[&str]) {
        out.push_str("INSERT INTO ");
        self.write_identifier_quoted(out, table);
        out.push_str(" (");
        separated_by(
            out,
            columns,
            |out, v| self.write_identifier_quoted(out, v),
            ", ",
        );
        out.push_str(") VALUES (");
        separated_by(
            out,
            1..=columns.len(),
            |out, v| self.write_placeholder(out, v),
            ", ",
        );
        out.push(')');
    }

    fn write_update(
        &self,
        out: &mut String,
        table: &str,
        assignments: &[Clause],
        conditions: &[Clause],
    ) {
        out.push_str("UPDATE ");
        self.write_identifier_quoted(out, table);
        out.push_str(" SET ");
        separated_by(
            out,
            assignments,
            |out, v| self.write_clause(out, v),
            ", ",
        );
        self.write_where(out, conditions);
    }

    fn write_delete(&self, out: &mut String, table: &str, conditions: &[Clause]) {
        out.push_str("DELETE FROM ");
        self.write_identifier_quoted(out, table);
        self.write_where(out, conditions);
    }

    /// Raw statement with its bare identifiers quoted.
    fn write_raw(&self, out: &mut String, sql: &str) {
        out.push_str(&auto_quote(sql));
    }
}

/// Dialect with no backend specific behavior.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for GenericSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }
}
