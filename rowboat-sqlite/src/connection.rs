use crate::{
    CBox, SqliteDriver,
    bind::bind_params,
    error_message,
    extract::{extract_name, extract_value},
};
use async_stream::try_stream;
use libsqlite3_sys::{
    SQLITE_BUSY, SQLITE_DONE, SQLITE_OK, SQLITE_OPEN_CREATE, SQLITE_OPEN_FULLMUTEX,
    SQLITE_OPEN_READWRITE, SQLITE_OPEN_URI, SQLITE_ROW, sqlite3, sqlite3_changes64,
    sqlite3_column_count, sqlite3_finalize, sqlite3_last_insert_rowid,
    sqlite3_open_v2, sqlite3_prepare_v2, sqlite3_step, sqlite3_stmt,
};
use rowboat_core::{
    Connection, Context, Driver, Error, Executor, Query, QueryResult, Result, Row, RowLabeled,
    RowNames, RowsAffected, stream::Stream, truncate_long,
};
use std::{
    ffi::{CString, c_char, c_int},
    ptr,
};
use tokio::task::spawn_blocking;

// libsqlite3-sys does not export `sqlite3_close_v2` in its bindings, but the bundled library provides it.
unsafe extern "C" {
    fn sqlite3_close_v2(db: *mut sqlite3) -> c_int;
}

static DRIVER: SqliteDriver = SqliteDriver::new();

pub struct SqliteConnection {
    pub(crate) connection: CBox<*mut sqlite3>,
}

/// Compile exactly one statement of `sql`, trailing semicolons and whitespace are allowed.
fn prepare(connection: *mut sqlite3, sql: &str) -> Result<CBox<*mut sqlite3_stmt>> {
    let context = || format!("While preparing the query:\n{}", truncate_long!(sql));
    let mut statement = CBox::new(ptr::null_mut(), |p| unsafe {
        sqlite3_finalize(p);
    });
    let mut tail: *const c_char = ptr::null();
    let rc = unsafe {
        sqlite3_prepare_v2(
            connection,
            sql.as_ptr() as *const c_char,
            sql.len() as c_int,
            &mut *statement,
            &mut tail,
        )
    };
    if rc != SQLITE_OK {
        let error = Error::msg(error_message(connection)).context(context());
        log::error!("{:#}", error);
        return Err(error);
    }
    if statement.is_null() {
        let error = Error::msg("The query does not contain any statement").context(context());
        log::error!("{:#}", error);
        return Err(error);
    }
    let consumed = if tail.is_null() {
        sql.len()
    } else {
        unsafe { tail.offset_from(sql.as_ptr() as *const c_char) as usize }
    };
    let remaining = sql.as_bytes().get(consumed..).unwrap_or_default();
    if !remaining.iter().all(|c| c.is_ascii_whitespace() || *c == b';') {
        let error =
            Error::msg("Cannot prepare more than one statement at a time").context(context());
        log::error!("{:#}", error);
        return Err(error);
    }
    Ok(statement)
}

impl SqliteConnection {
    fn affected(&self) -> RowsAffected {
        unsafe {
            RowsAffected {
                rows_affected: sqlite3_changes64(*self.connection).max(0) as u64,
                last_affected_id: Some(sqlite3_last_insert_rowid(*self.connection)),
            }
        }
    }
}

impl Executor for SqliteConnection {
    type Driver = SqliteDriver;

    fn driver(&self) -> &Self::Driver {
        &DRIVER
    }

    fn run(&mut self, query: Query) -> impl Stream<Item = Result<QueryResult>> + Send {
        let this = &*self;
        // Borrowed handle, the connection keeps ownership
        let connection = CBox::new(*this.connection, |_| {});
        try_stream! {
            let sql = query.sql.clone();
            let statement = spawn_blocking(move || prepare(*connection, &sql))
                .await
                .context("The prepare task did not complete")??;
            if let Err(error) = bind_params(&statement, &query.params) {
                let error = error.context(format!("While executing:\n{}", query));
                log::error!("{:#}", error);
                Err::<(), Error>(error)?;
            }
            let count = unsafe { sqlite3_column_count(*statement) };
            let labels = (0..count)
                .map(|i| extract_name(*statement, i))
                .collect::<Result<RowNames>>()?;
            loop {
                match unsafe { sqlite3_step(*statement) } {
                    SQLITE_BUSY => continue,
                    SQLITE_DONE => break,
                    SQLITE_ROW => {
                        let values = (0..count)
                            .map(|i| extract_value(*statement, i))
                            .collect::<Result<Row>>()?;
                        yield QueryResult::Row(RowLabeled::new(labels.clone(), values));
                    }
                    _ => {
                        let error = Error::msg(error_message(*this.connection))
                            .context(format!("While executing:\n{}", query));
                        log::error!("{:#}", error);
                        Err::<(), Error>(error)?;
                    }
                }
            }
            if count == 0 {
                yield QueryResult::Affected(this.affected());
            }
        }
    }
}

impl Connection for SqliteConnection {
    /// Open `sqlite://<path>`, `:memory:` and `file:` URIs with parameters such as `?mode=ro` are
    /// accepted as path.
    async fn connect(url: &str) -> Result<SqliteConnection> {
        let prefix = format!("{}://", <Self::Driver as Driver>::NAME);
        let Some(path) = url.strip_prefix(&prefix) else {
            let error = Error::msg(format!(
                "Expected sqlite connection url to start with `{}`",
                &prefix
            ));
            log::error!("{:#}", error);
            return Err(error);
        };
        let context = || format!("Error while opening the sqlite database: `{}`", url);
        let path = if path.starts_with("file:") {
            path.to_string()
        } else {
            format!("file:{path}")
        };
        let path = CString::new(path).with_context(context)?;
        let mut connection = CBox::new(ptr::null_mut(), |p| unsafe {
            sqlite3_close_v2(p);
        });
        let rc = unsafe {
            sqlite3_open_v2(
                path.as_ptr(),
                &mut *connection,
                SQLITE_OPEN_URI | SQLITE_OPEN_READWRITE | SQLITE_OPEN_CREATE | SQLITE_OPEN_FULLMUTEX,
                ptr::null(),
            )
        };
        if rc != SQLITE_OK {
            let error = Error::msg(if connection.is_null() {
                "Out of memory".to_string()
            } else {
                error_message(*connection)
            })
            .context(context());
            log::error!("{:#}", error);
            return Err(error);
        }
        Ok(Self { connection })
    }

    /// Statements still alive defer the release until they are finalized.
    async fn disconnect(mut self) -> Result<()> {
        let rc = unsafe { sqlite3_close_v2(*self.connection) };
        if rc != SQLITE_OK {
            // The handle stays owned, dropping `self` retries the close
            let error = Error::msg(error_message(*self.connection))
                .context("While closing the sqlite connection");
            log::error!("{:#}", error);
            return Err(error);
        }
        *self.connection = ptr::null_mut();
        Ok(())
    }
}
