use crate::{Executor, Result};
use std::future::Future;

pub trait Connection: Executor + Sized {
    /// Open a connection to the given URL, the scheme must name the driver.
    fn connect(url: &str) -> impl Future<Output = Result<Self>> + Send;

    /// Close the connection, reporting errors the backend raises while shutting down.
    fn disconnect(self) -> impl Future<Output = Result<()>> + Send {
        async { Ok(()) }
    }
}
