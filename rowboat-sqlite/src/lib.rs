mod bind;
mod cbox;
mod connection;
mod driver;
mod extract;
mod sql_writer;

use libsqlite3_sys::{sqlite3, sqlite3_errmsg};
use std::ffi::CStr;

pub(crate) use cbox::*;
pub use connection::*;
pub use driver::*;
pub use sql_writer::*;

/// Last error message of the connection.
pub(crate) fn error_message(connection: *mut sqlite3) -> String {
    unsafe {
        let ptr = sqlite3_errmsg(connection);
        if ptr.is_null() {
            return "Unknown error (could not extract the error message)".into();
        }
        CStr::from_ptr(ptr)
            .to_str()
            .unwrap_or("Unknown error (the error message was not a valid C string)")
            .into()
    }
}
