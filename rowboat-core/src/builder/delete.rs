use crate::{
    Clauses, Database, ErrorKind, Executor, Query, Result, RowsAffected, Value,
    builder::clauses::check_table,
};
use std::fmt::{self, Debug};

/// `DELETE FROM table WHERE ...`, refuses to run without conditions.
pub struct Delete<'d, C: Executor> {
    database: &'d Database<C>,
    table: String,
    clauses: Clauses,
}

impl<'d, C: Executor> Delete<'d, C> {
    pub(crate) fn new(database: &'d Database<C>, table: String) -> Self {
        Self {
            database,
            table,
            clauses: Default::default(),
        }
    }

    /// Add the quoted condition `"column" = $n`, the column name is matched verbatim.
    pub fn filter(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.clauses.add_condition(column, value);
        self
    }

    pub fn compile(&self) -> Result<Query> {
        if self.clauses.conditions.is_empty() {
            return Err(ErrorKind::MissingClause {
                statement: "DELETE",
                clause: "WHERE",
            }
            .into());
        }
        check_table("DELETE", &self.table)?;
        self.clauses.check()?;
        let mut sql = String::with_capacity(64);
        self.database
            .sql_writer()
            .write_delete(&mut sql, &self.table, &self.clauses.conditions);
        Ok(Query::new(sql, self.clauses.args.clone()))
    }

    pub async fn run(self) -> Result<RowsAffected> {
        let query = self.compile()?;
        self.database.execute(query).await
    }
}

impl<C: Executor> Debug for Delete<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delete")
            .field("table", &self.table)
            .field("clauses", &self.clauses)
            .finish_non_exhaustive()
    }
}
