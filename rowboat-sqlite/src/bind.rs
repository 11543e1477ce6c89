use crate::{CBox, error_message};
use libsqlite3_sys::*;
use rowboat_core::{Context, Error, Result, Value};
use std::ffi::{CString, c_char, c_int, c_void};

/// Bind `params[n - 1]` to `$n`.
///
/// SQLite numbers named parameters in order of first appearance, so `$n` is looked up by name.
/// Statements written with `?` placeholders fall back to the position.
pub(crate) fn bind_params(statement: &CBox<*mut sqlite3_stmt>, params: &[Value]) -> Result<()> {
    let count = unsafe { sqlite3_bind_parameter_count(**statement) } as usize;
    if count != params.len() {
        return Err(Error::msg(format!(
            "The query expects {} parameters but {} were provided",
            count,
            params.len()
        )));
    }
    for (i, value) in params.iter().enumerate() {
        let position = i + 1;
        let name = CString::new(format!("${position}"))?;
        let index = match unsafe { sqlite3_bind_parameter_index(**statement, name.as_ptr()) } {
            0 => position as c_int,
            index => index,
        };
        bind_value(statement, index, value)
            .with_context(|| format!("While binding {} to parameter ${}", value, position))?;
    }
    Ok(())
}

fn bind_value(statement: &CBox<*mut sqlite3_stmt>, index: c_int, value: &Value) -> Result<()> {
    let statement = **statement;
    let rc = unsafe {
        match value {
            v if v.is_null() => sqlite3_bind_null(statement, index),
            Value::Boolean(Some(v)) => sqlite3_bind_int(statement, index, *v as c_int),
            Value::Int8(Some(v)) => sqlite3_bind_int(statement, index, *v as c_int),
            Value::Int16(Some(v)) => sqlite3_bind_int(statement, index, *v as c_int),
            Value::Int32(Some(v)) => sqlite3_bind_int(statement, index, *v as c_int),
            Value::Int64(Some(v)) => sqlite3_bind_int64(statement, index, *v),
            Value::UInt8(Some(v)) => sqlite3_bind_int(statement, index, *v as c_int),
            Value::UInt16(Some(v)) => sqlite3_bind_int(statement, index, *v as c_int),
            Value::UInt32(Some(v)) => sqlite3_bind_int64(statement, index, *v as sqlite3_int64),
            Value::UInt64(Some(v)) => {
                let Ok(v) = sqlite3_int64::try_from(*v) else {
                    return Err(Error::msg(format!(
                        "Cannot bind u64 value `{}` into a sqlite integer because it's out of bounds",
                        v
                    )));
                };
                sqlite3_bind_int64(statement, index, v)
            }
            Value::Float32(Some(v)) => sqlite3_bind_double(statement, index, *v as f64),
            Value::Float64(Some(v)) => sqlite3_bind_double(statement, index, *v),
            Value::Varchar(Some(v)) => sqlite3_bind_text(
                statement,
                index,
                v.as_ptr() as *const c_char,
                v.len() as c_int,
                SQLITE_TRANSIENT(),
            ),
            Value::Blob(Some(v)) => sqlite3_bind_blob(
                statement,
                index,
                v.as_ptr() as *const c_void,
                v.len() as c_int,
                SQLITE_TRANSIENT(),
            ),
            _ => sqlite3_bind_null(statement, index),
        }
    };
    if rc != SQLITE_OK {
        return Err(Error::msg(error_message(unsafe {
            sqlite3_db_handle(statement)
        })));
    }
    Ok(())
}
