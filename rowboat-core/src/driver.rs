use crate::{Connection, SqlWriter};

pub trait Driver: Send + Sync {
    type Connection: Connection;
    type SqlWriter: SqlWriter + Send + Sync;

    const NAME: &'static str;

    /// Name of the backend actually in use, differs from `NAME` only for dispatching drivers.
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn sql_writer(&self) -> Self::SqlWriter;
}
