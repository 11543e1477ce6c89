use crate::{Config, DriverKind};
use rowboat_core::{
    Connection, Database, Driver, Error, ErrorKind, Executor, Query, QueryResult, Result,
    SqlWriter,
    stream::{BoxStream, Stream, StreamExt},
};
#[cfg(feature = "postgres")]
use rowboat_postgres::{PostgresConnection, PostgresDriver, PostgresSqlWriter};
#[cfg(feature = "sqlite")]
use rowboat_sqlite::{SqliteConnection, SqliteDriver, SqliteSqlWriter};

#[cfg(feature = "sqlite")]
static SQLITE: AnyDriver = AnyDriver::Sqlite(SqliteDriver::new());
#[cfg(feature = "postgres")]
static POSTGRES: AnyDriver = AnyDriver::Postgres(PostgresDriver::new());

/// Connection to any backend enabled at compile time, picked at runtime.
pub enum AnyConnection {
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteConnection),
    #[cfg(feature = "postgres")]
    Postgres(PostgresConnection),
}

#[derive(Debug, Clone, Copy)]
pub enum AnyDriver {
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteDriver),
    #[cfg(feature = "postgres")]
    Postgres(PostgresDriver),
}

#[derive(Debug, Clone, Copy)]
pub enum AnySqlWriter {
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteSqlWriter),
    #[cfg(feature = "postgres")]
    Postgres(PostgresSqlWriter),
}

impl Driver for AnyDriver {
    type Connection = AnyConnection;
    type SqlWriter = AnySqlWriter;

    const NAME: &'static str = "any";

    fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            AnyDriver::Sqlite(driver) => driver.name(),
            #[cfg(feature = "postgres")]
            AnyDriver::Postgres(driver) => driver.name(),
        }
    }

    fn sql_writer(&self) -> AnySqlWriter {
        match self {
            #[cfg(feature = "sqlite")]
            AnyDriver::Sqlite(driver) => AnySqlWriter::Sqlite(driver.sql_writer()),
            #[cfg(feature = "postgres")]
            AnyDriver::Postgres(driver) => AnySqlWriter::Postgres(driver.sql_writer()),
        }
    }
}

impl SqlWriter for AnySqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        match self {
            #[cfg(feature = "sqlite")]
            AnySqlWriter::Sqlite(writer) => writer.as_dyn(),
            #[cfg(feature = "postgres")]
            AnySqlWriter::Postgres(writer) => writer.as_dyn(),
        }
    }
}

impl Executor for AnyConnection {
    type Driver = AnyDriver;

    fn driver(&self) -> &Self::Driver {
        match self {
            #[cfg(feature = "sqlite")]
            AnyConnection::Sqlite(..) => &SQLITE,
            #[cfg(feature = "postgres")]
            AnyConnection::Postgres(..) => &POSTGRES,
        }
    }

    fn run(&mut self, query: Query) -> impl Stream<Item = Result<QueryResult>> + Send {
        let stream: BoxStream<'_, Result<QueryResult>> = match self {
            #[cfg(feature = "sqlite")]
            AnyConnection::Sqlite(connection) => connection.run(query).boxed(),
            #[cfg(feature = "postgres")]
            AnyConnection::Postgres(connection) => connection.run(query).boxed(),
        };
        stream
    }
}

impl Connection for AnyConnection {
    /// The driver is chosen by the scheme of `url`.
    async fn connect(url: &str) -> Result<AnyConnection> {
        let config = Config::from_url(url)?;
        open(&config).await
    }

    async fn disconnect(self) -> Result<()> {
        match self {
            #[cfg(feature = "sqlite")]
            AnyConnection::Sqlite(connection) => connection.disconnect().await,
            #[cfg(feature = "postgres")]
            AnyConnection::Postgres(connection) => connection.disconnect().await,
        }
    }
}

async fn open(config: &Config) -> Result<AnyConnection> {
    let url = config.url();
    match config.driver {
        #[cfg(feature = "sqlite")]
        DriverKind::Sqlite => Ok(AnyConnection::Sqlite(
            SqliteConnection::connect(&url).await?,
        )),
        #[cfg(feature = "postgres")]
        DriverKind::Postgres => Ok(AnyConnection::Postgres(
            PostgresConnection::connect(&url).await?,
        )),
        #[allow(unreachable_patterns)]
        driver => {
            let error = Error::new(ErrorKind::UnsupportedDriver(driver.to_string()))
                .context("The driver is not enabled in this build");
            log::error!("{:#}", error);
            Err(error)
        }
    }
}

/// Open a connection for `config` and wrap it in a [`Database`] using `config.options`.
///
/// ```rust,no_run
/// # async fn demo() -> rowboat::Result<()> {
/// let database = rowboat::connect(&rowboat::Config::from_env()?).await?;
/// database.close().await
/// # }
/// ```
pub async fn connect(config: &Config) -> Result<Database<AnyConnection>> {
    let connection = open(config).await?;
    log::debug!(
        "Connected to {} with {}",
        config.driver,
        connection.driver().name()
    );
    Ok(Database::with_options(connection, config.options))
}
