use crate::{
    Database, Entity, ErrorKind, Executor, Query, RecordSchema, Result, Row,
    builder::clauses::check_table,
};
use std::fmt::{self, Debug};

/// `INSERT` of one entity, every field including the primary key.
pub struct Insert<'d, C: Executor> {
    database: &'d Database<C>,
    schema: &'static RecordSchema,
    values: Row,
}

impl<'d, C: Executor> Insert<'d, C> {
    pub(crate) fn new<E: Entity>(database: &'d Database<C>, entity: &E) -> Self {
        Self {
            database,
            schema: E::schema(),
            values: entity.row(),
        }
    }

    pub fn compile(&self) -> Result<Query> {
        check_table("INSERT", self.schema.table)?;
        if self.schema.columns.is_empty() || self.schema.columns.len() != self.values.len() {
            return Err(ErrorKind::Compile(format!(
                "{} declares {} columns but produced {} values",
                self.schema.name,
                self.schema.columns.len(),
                self.values.len()
            ))
            .into());
        }
        let columns = self.schema.column_names().collect::<Vec<_>>();
        let mut sql = String::with_capacity(64 + columns.len() * 24);
        self.database
            .sql_writer()
            .write_insert(&mut sql, self.schema.table, &columns);
        Ok(Query::new(sql, self.values.to_vec()))
    }

    /// Execute, the number of rows affected is discarded.
    pub async fn run(self) -> Result<()> {
        let query = self.compile()?;
        self.database.execute(query).await.map(|_| ())
    }
}

impl<C: Executor> Debug for Insert<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Insert")
            .field("table", &self.schema.table)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
