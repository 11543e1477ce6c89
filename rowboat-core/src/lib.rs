mod as_value;
mod builder;
mod connection;
mod database;
mod descriptor;
mod driver;
mod entity;
mod error;
mod executor;
mod mapping;
mod query;
mod quote;
mod scanner;
mod shape;
mod sql_writer;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use builder::*;
pub use connection::*;
pub use database::*;
pub use descriptor::*;
pub use driver::*;
pub use entity::*;
pub use error::*;
pub use executor::*;
pub use mapping::*;
pub use query::*;
pub use quote::*;
pub use scanner::*;
pub use shape::*;
pub use sql_writer::*;
pub use util::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
