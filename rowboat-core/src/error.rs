use thiserror::Error;

/// Failures produced by rowboat itself.
///
/// They travel as the root cause of an [`anyhow::Error`], so the usual context chain is kept and
/// callers still classify them:
/// ```rust
/// use rowboat_core::{ErrorKind, Error};
/// let error = Error::new(ErrorKind::NoRowsFound).context("While selecting a user");
/// assert!(matches!(
///     error.downcast_ref::<ErrorKind>(),
///     Some(ErrorKind::NoRowsFound)
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("Unsupported model shape: {0}")]
    UnsupportedModelShape(String),
    #[error("{statement} requires at least one {clause} clause")]
    MissingClause {
        statement: &'static str,
        clause: &'static str,
    },
    #[error("Scan error: {0}")]
    Scan(String),
    #[error("Compile error: {0}")]
    Compile(String),
    #[error("No rows found")]
    NoRowsFound,
    #[error("Unsupported driver `{0}`")]
    UnsupportedDriver(String),
}

impl ErrorKind {
    /// The `ErrorKind` at the root of `error`, if any.
    pub fn of(error: &anyhow::Error) -> Option<&ErrorKind> {
        error.downcast_ref::<ErrorKind>()
    }
}
