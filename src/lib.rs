extern crate self as rowboat;

#[cfg(any(feature = "sqlite", feature = "postgres"))]
mod any;
mod config;

#[cfg(any(feature = "sqlite", feature = "postgres"))]
pub use any::*;
pub use config::*;
pub use rowboat_core::*;
pub use rowboat_macros::Entity;
#[cfg(feature = "postgres")]
pub use rowboat_postgres as postgres;
#[cfg(feature = "sqlite")]
pub use rowboat_sqlite as sqlite;
