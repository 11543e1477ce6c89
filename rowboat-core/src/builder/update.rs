use crate::{
    Clauses, Database, ErrorKind, Executor, Query, Result, RowsAffected, Value,
    builder::clauses::check_table,
};
use std::fmt::{self, Debug};

/// `UPDATE table SET ... WHERE ...`, refuses to run without assignments or conditions.
pub struct Update<'d, C: Executor> {
    database: &'d Database<C>,
    table: String,
    clauses: Clauses,
}

impl<'d, C: Executor> Update<'d, C> {
    pub(crate) fn new(database: &'d Database<C>, table: String) -> Self {
        Self {
            database,
            table,
            clauses: Default::default(),
        }
    }

    /// Add the assignment `column = $n`, the column is quoted like in [`Update::filter`].
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.clauses.add_assignment(column, value);
        self
    }

    /// Add the condition `column = $n`.
    ///
    /// The column is written as a quoted identifier, `filter("Name", ..)` does not match a
    /// `name` column on Postgres.
    pub fn filter(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.clauses.add_condition(column, value);
        self
    }

    pub fn compile(&self) -> Result<Query> {
        if self.clauses.assignments.is_empty() {
            return Err(ErrorKind::MissingClause {
                statement: "UPDATE",
                clause: "SET",
            }
            .into());
        }
        if self.clauses.conditions.is_empty() {
            return Err(ErrorKind::MissingClause {
                statement: "UPDATE",
                clause: "WHERE",
            }
            .into());
        }
        check_table("UPDATE", &self.table)?;
        self.clauses.check()?;
        let mut sql = String::with_capacity(128);
        self.database.sql_writer().write_update(
            &mut sql,
            &self.table,
            &self.clauses.assignments,
            &self.clauses.conditions,
        );
        Ok(Query::new(sql, self.clauses.args.clone()))
    }

    pub async fn run(self) -> Result<RowsAffected> {
        let query = self.compile()?;
        self.database.execute(query).await
    }
}

impl<C: Executor> Debug for Update<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Update")
            .field("table", &self.table)
            .field("clauses", &self.clauses)
            .finish_non_exhaustive()
    }
}
