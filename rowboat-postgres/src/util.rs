use crate::{ValueHolder, postgres_type_to_value};
use rowboat_core::{Context, Error, ErrorKind, Result, Row, Value};
use tokio_postgres::Statement;

pub(crate) fn row_to_values(row: &tokio_postgres::Row) -> Result<Row> {
    (0..row.len())
        .map(|i| match row.try_get::<_, ValueHolder>(i) {
            Ok(v) => Ok(v.0),
            Err(e) => {
                let column = &row.columns()[i];
                Err(Error::new(ErrorKind::Scan(e.to_string())).context(format!(
                    "Could not decode column {} `{}`: {}",
                    i,
                    column.name(),
                    column.type_()
                )))
            }
        })
        .collect()
}

/// Convert every argument to the type the server inferred for its placeholder.
pub(crate) fn coerce_params(statement: &Statement, params: Vec<Value>) -> Result<Vec<ValueHolder>> {
    let types = statement.params();
    if types.len() != params.len() {
        return Err(Error::msg(format!(
            "The query expects {} parameters but {} were provided",
            types.len(),
            params.len()
        )));
    }
    params
        .into_iter()
        .zip(types)
        .enumerate()
        .map(|(i, (value, ty))| {
            value
                .try_as(&postgres_type_to_value(ty))
                .map(ValueHolder)
                .with_context(|| format!("While binding parameter ${} as {}", i + 1, ty))
        })
        .collect()
}
