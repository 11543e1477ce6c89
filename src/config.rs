use rowboat_core::{Error, ErrorKind, Options, Result};
use std::{
    env,
    fmt::{self, Display},
    str::FromStr,
};

/// Backends the connection factory knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverKind {
    Sqlite,
    Postgres,
}

impl DriverKind {
    /// URL scheme of the driver.
    pub const fn scheme(&self) -> &'static str {
        match self {
            DriverKind::Sqlite => "sqlite",
            DriverKind::Postgres => "postgres",
        }
    }
}

impl FromStr for DriverKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(DriverKind::Sqlite),
            "postgres" | "postgresql" => Ok(DriverKind::Postgres),
            _ => Err(ErrorKind::UnsupportedDriver(value.to_string()).into()),
        }
    }
}

impl Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Where and how to connect.
///
/// ```rust
/// use rowboat::{Config, DriverKind};
/// let config = Config::from_url("sqlite://:memory:").unwrap();
/// assert_eq!(config.driver, DriverKind::Sqlite);
/// assert_eq!(config.url(), "sqlite://:memory:");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub driver: DriverKind,
    /// Connection string, with or without the `scheme://` prefix.
    pub dsn: String,
    pub options: Options,
}

impl Config {
    pub fn new(driver: DriverKind, dsn: impl Into<String>) -> Self {
        Self {
            driver,
            dsn: dsn.into(),
            options: Default::default(),
        }
    }

    /// The driver is taken from the URL scheme.
    pub fn from_url(url: &str) -> Result<Self> {
        let Some((scheme, _)) = url.split_once("://") else {
            return Err(Error::msg(format!(
                "Connection url `{}` does not start with a `scheme://` prefix",
                url
            )));
        };
        Ok(Self::new(scheme.parse()?, url))
    }

    /// Read the url from `DATABASE_URL`.
    pub fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL")
            .map_err(|e| Error::new(e).context("While reading `DATABASE_URL`"))?;
        Self::from_url(&url)
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Url handed to the driver, the scheme always names the driver itself.
    pub fn url(&self) -> String {
        let rest = self
            .dsn
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.dsn);
        format!("{}://{}", self.driver.scheme(), rest)
    }
}
