use crate::{
    Clause, Clauses, Database, EmptyResult, Executor, Query, RecordDescriptor, Result, SqlWriter,
    Target, Value, builder::clauses::check_table,
};
use std::fmt::{self, Debug};

/// Strategy turning the select state into SQL text.
pub trait SelectCompiler: Send + Sync {
    fn compile_select(
        &self,
        writer: &dyn SqlWriter,
        table: &str,
        conditions: &[Clause],
        limit: u32,
    ) -> Result<String>;
}

/// Renders through the connection's [`SqlWriter`].
#[derive(Default, Debug, Clone, Copy)]
pub struct WriterSelect;

impl SelectCompiler for WriterSelect {
    fn compile_select(
        &self,
        writer: &dyn SqlWriter,
        table: &str,
        conditions: &[Clause],
        limit: u32,
    ) -> Result<String> {
        check_table("SELECT", table)?;
        let mut out = String::with_capacity(64 + conditions.len() * 16);
        writer.write_select(&mut out, table, conditions, limit);
        Ok(out)
    }
}

impl<F> SelectCompiler for F
where
    F: Fn(&dyn SqlWriter, &str, &[Clause], u32) -> Result<String> + Send + Sync,
{
    fn compile_select(
        &self,
        writer: &dyn SqlWriter,
        table: &str,
        conditions: &[Clause],
        limit: u32,
    ) -> Result<String> {
        self(writer, table, conditions, limit)
    }
}

/// `SELECT` whose rows are written into a target.
///
/// ```rust,ignore
/// let mut users = Vec::<User>::new();
/// db.select(&mut users)?.filter("name", "emir").limit(10).run().await?;
/// ```
pub struct Select<'d, 't, C: Executor, T: Target> {
    database: &'d Database<C>,
    target: &'t mut T,
    descriptor: RecordDescriptor,
    clauses: Clauses,
    limit: u32,
    on_empty: EmptyResult,
    compiler: Box<dyn SelectCompiler>,
}

impl<'d, 't, C: Executor, T: Target> Select<'d, 't, C, T> {
    pub(crate) fn new(
        database: &'d Database<C>,
        target: &'t mut T,
        descriptor: RecordDescriptor,
    ) -> Self {
        Self {
            database,
            target,
            descriptor,
            clauses: Default::default(),
            limit: 0,
            on_empty: database.options().empty_result,
            compiler: Box::new(WriterSelect),
        }
    }

    /// Add `column = $n`, conditions are joined with `AND`.
    ///
    /// The column is written as a quoted identifier, so it must match the stored name
    /// exactly on backends with case sensitive quoted names, such as Postgres.
    pub fn filter(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.clauses.add_condition(column, value);
        self
    }

    /// Zero removes the limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn on_empty(mut self, on_empty: EmptyResult) -> Self {
        self.on_empty = on_empty;
        self
    }

    pub fn compiler(mut self, compiler: impl SelectCompiler + 'static) -> Self {
        self.compiler = Box::new(compiler);
        self
    }

    pub fn descriptor(&self) -> &RecordDescriptor {
        &self.descriptor
    }

    pub fn compile(&self) -> Result<Query> {
        self.clauses.check()?;
        let sql = self.compiler.compile_select(
            self.database.sql_writer(),
            &self.descriptor.table_name,
            &self.clauses.conditions,
            self.limit,
        )?;
        Ok(Query::new(sql, self.clauses.args.clone()))
    }

    /// Execute and map the rows into the target.
    pub async fn run(self) -> Result<()> {
        let query = self.compile()?;
        self.database
            .fetch_into(query, &self.descriptor, self.target, self.on_empty)
            .await
    }
}

impl<C: Executor, T: Target> Debug for Select<'_, '_, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("descriptor", &self.descriptor)
            .field("clauses", &self.clauses)
            .field("limit", &self.limit)
            .field("on_empty", &self.on_empty)
            .finish_non_exhaustive()
    }
}
