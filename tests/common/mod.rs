use rowboat::{
    Connection, Driver, Executor, GenericSqlWriter, Query, QueryResult, Result, RowLabeled,
    RowsAffected,
    stream::{self, Stream},
};
use std::sync::{Arc, Mutex};

#[derive(Default, Debug, Clone, Copy)]
pub struct RecordingDriver;

impl Driver for RecordingDriver {
    type Connection = RecordingConnection;
    type SqlWriter = GenericSqlWriter;

    const NAME: &'static str = "recording";

    fn sql_writer(&self) -> GenericSqlWriter {
        GenericSqlWriter::new()
    }
}

/// Keeps every query it receives and answers with canned rows.
#[derive(Default)]
pub struct RecordingConnection {
    pub queries: Arc<Mutex<Vec<Query>>>,
    pub rows: Vec<RowLabeled>,
}

impl RecordingConnection {
    pub fn with_rows(rows: Vec<RowLabeled>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }
}

impl Executor for RecordingConnection {
    type Driver = RecordingDriver;

    fn driver(&self) -> &Self::Driver {
        &RecordingDriver
    }

    fn run(&mut self, query: Query) -> impl Stream<Item = Result<QueryResult>> + Send {
        self.queries.lock().unwrap().push(query);
        let affected = RowsAffected {
            rows_affected: self.rows.len() as u64,
            last_affected_id: None,
        };
        stream::iter(
            self.rows
                .clone()
                .into_iter()
                .map(QueryResult::Row)
                .chain([QueryResult::Affected(affected)])
                .map(Ok),
        )
    }
}

impl Connection for RecordingConnection {
    async fn connect(_url: &str) -> Result<Self> {
        Ok(Self::default())
    }
}
