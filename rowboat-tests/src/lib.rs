mod concurrency;
mod empty;
mod guards;
mod kinds;
mod limits;
mod raw;
mod shapes;
mod user;

use crate::{
    concurrency::concurrency, empty::empty, guards::guards, kinds::kinds, limits::limits,
    raw::raw, shapes::shapes, user::{string_ids, users},
};
use log::LevelFilter;
use rowboat::{Connection, Database};
use std::env;

pub use user::User;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

pub async fn execute_tests<C: Connection>(database: &Database<C>) {
    users(database).await;
    string_ids(database).await;
    shapes(database).await;
    empty(database).await;
    limits(database).await;
    raw(database).await;
    kinds(database).await;
    guards(database).await;
    concurrency(database).await;
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
