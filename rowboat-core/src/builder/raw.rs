use crate::{
    Database, EmptyResult, Executor, Query, RecordDescriptor, Result, RowsAffected, Target, Value,
};
use std::fmt::{self, Debug};

/// Hand written SQL with `$n` placeholders.
///
/// Bare identifiers are double quoted before execution (see [`crate::auto_quote`]) unless
/// [`Raw::verbatim`] is called.
pub struct Raw<'d, C: Executor> {
    database: &'d Database<C>,
    sql: String,
    args: Vec<Value>,
    verbatim: bool,
}

impl<'d, C: Executor> Raw<'d, C> {
    pub(crate) fn new(database: &'d Database<C>, sql: String) -> Self {
        Self {
            database,
            sql,
            args: Vec::new(),
            verbatim: false,
        }
    }

    /// Bind the next argument, the n-th call feeds `$n`.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Send the text exactly as written.
    pub fn verbatim(mut self) -> Self {
        self.verbatim = true;
        self
    }

    pub fn compile(&self) -> Result<Query> {
        let sql = if self.verbatim {
            self.sql.clone()
        } else {
            let mut out = String::with_capacity(self.sql.len() + 16);
            self.database.sql_writer().write_raw(&mut out, &self.sql);
            out
        };
        Ok(Query::new(sql, self.args.clone()))
    }

    /// Execute ignoring any returned row.
    pub async fn run(self) -> Result<RowsAffected> {
        let query = self.compile()?;
        self.database.execute(query).await
    }

    /// Map the rows returned into `target`, the target shape is checked here.
    pub fn model<'t, T: Target>(self, target: &'t mut T) -> Result<RawInto<'d, 't, C, T>> {
        let descriptor = RecordDescriptor::of::<T>()?;
        let on_empty = self.database.options().empty_result;
        Ok(RawInto {
            raw: self,
            target,
            descriptor,
            on_empty,
        })
    }
}

/// Raw statement bound to a result target.
pub struct RawInto<'d, 't, C: Executor, T: Target> {
    raw: Raw<'d, C>,
    target: &'t mut T,
    descriptor: RecordDescriptor,
    on_empty: EmptyResult,
}

impl<'d, 't, C: Executor, T: Target> RawInto<'d, 't, C, T> {
    pub fn on_empty(mut self, on_empty: EmptyResult) -> Self {
        self.on_empty = on_empty;
        self
    }

    pub fn descriptor(&self) -> &RecordDescriptor {
        &self.descriptor
    }

    pub fn compile(&self) -> Result<Query> {
        self.raw.compile()
    }

    pub async fn run(self) -> Result<()> {
        let query = self.raw.compile()?;
        self.raw
            .database
            .fetch_into(query, &self.descriptor, self.target, self.on_empty)
            .await
    }
}

impl<C: Executor> Debug for Raw<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raw")
            .field("sql", &self.sql)
            .field("args", &self.args)
            .field("verbatim", &self.verbatim)
            .finish_non_exhaustive()
    }
}

impl<C: Executor, T: Target> Debug for RawInto<'_, '_, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawInto")
            .field("raw", &self.raw)
            .field("descriptor", &self.descriptor)
            .field("on_empty", &self.on_empty)
            .finish_non_exhaustive()
    }
}
