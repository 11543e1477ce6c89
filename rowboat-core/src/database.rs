use crate::{
    Connection, Delete, Driver, EmptyResult, Entity, Executor, Insert, Query, Raw, RecordDescriptor,
    RecordSchema, Result, RowsAffected, Select, SqlWriter, Target, TypeShape, Update, map_rows,
    resolve, truncate_long,
};
use std::{
    fmt::{self, Debug},
    time::Instant,
};
use tokio::sync::Mutex;

/// Per handle behavior.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Policy of single-row targets when the query returns no rows.
    pub empty_result: EmptyResult,
}

/// Handle over one connection, the factory of every query builder.
///
/// The connection sits behind an async mutex: builders created from the same handle can run
/// concurrently, their statements reach the backend one at a time.
pub struct Database<C: Executor> {
    connection: Mutex<C>,
    writer: <C::Driver as Driver>::SqlWriter,
    options: Options,
}

impl<C: Executor> Database<C> {
    pub fn new(connection: C) -> Self {
        Self::with_options(connection, Default::default())
    }

    pub fn with_options(connection: C, options: Options) -> Self {
        let writer = connection.driver().sql_writer();
        Self {
            connection: Mutex::new(connection),
            writer,
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn sql_writer(&self) -> &dyn SqlWriter {
        self.writer.as_dyn()
    }

    /// Start a `SELECT` into `target`, fails right away when the target shape is not supported.
    pub fn select<'t, T: Target>(&self, target: &'t mut T) -> Result<Select<'_, 't, C, T>> {
        let descriptor = RecordDescriptor::of::<T>()?;
        Ok(Select::new(self, target, descriptor))
    }

    pub fn insert<E: Entity>(&self, entity: &E) -> Result<Insert<'_, C>> {
        resolve(&TypeShape::pointer(TypeShape::Record(E::schema())))?;
        Ok(Insert::new(self, entity))
    }

    pub fn update(&self, table: impl Into<String>) -> Update<'_, C> {
        Update::new(self, table.into())
    }

    pub fn delete(&self, table: impl Into<String>) -> Delete<'_, C> {
        Delete::new(self, table.into())
    }

    pub fn raw(&self, sql: impl Into<String>) -> Raw<'_, C> {
        Raw::new(self, sql.into())
    }

    /// Create every missing table, existing tables are left untouched.
    pub async fn auto_migrate(&self, schemas: &[&RecordSchema]) -> Result<()> {
        for schema in schemas {
            let mut sql = String::with_capacity(256);
            self.sql_writer().write_create_table(&mut sql, schema, true);
            self.execute(sql.into()).await?;
        }
        Ok(())
    }

    pub async fn drop_table(&self, schema: &RecordSchema, if_exists: bool) -> Result<()> {
        let mut sql = String::with_capacity(64);
        self.sql_writer().write_drop_table(&mut sql, schema.table, if_exists);
        self.execute(sql.into()).await.map(|_| ())
    }

    pub(crate) async fn execute(&self, query: Query) -> Result<RowsAffected> {
        let start = Instant::now();
        let sql = query.sql.clone();
        let mut connection = self.connection.lock().await;
        let result = connection.execute(query).await;
        log::debug!("{} executed in {:?}", truncate_long!(sql), start.elapsed());
        result
    }

    pub(crate) async fn fetch_into<T: Target>(
        &self,
        query: Query,
        descriptor: &RecordDescriptor,
        target: &mut T,
        on_empty: EmptyResult,
    ) -> Result<()> {
        let start = Instant::now();
        let mut connection = self.connection.lock().await;
        let sql = query.sql.clone();
        let result = map_rows(connection.fetch(query), descriptor, target, on_empty).await;
        log::debug!("{} fetched in {:?}", truncate_long!(sql), start.elapsed());
        result
    }
}

impl<C: Connection> Database<C> {
    /// Open a connection through `C` and wrap it.
    pub async fn connect(url: &str) -> Result<Self> {
        Ok(Self::new(C::connect(url).await?))
    }

    pub async fn close(self) -> Result<()> {
        self.connection.into_inner().disconnect().await
    }
}

impl<C: Executor> Debug for Database<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("driver", &self.connection.try_lock().map(|c| c.driver().name()).ok())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
