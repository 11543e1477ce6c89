use crate::{
    ContainerShape, ErrorKind, RecordDescriptor, Result, RowLabeled, Target,
    stream::{Stream, StreamExt, TryStreamExt},
};
use std::pin::pin;

/// What a single-row target does when the query returns nothing.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyResult {
    /// Succeed and leave the target as it was.
    #[default]
    ZeroValue,
    /// Fail with [`ErrorKind::NoRowsFound`].
    NotFound,
}

/// Drain `rows` into `target` according to the container shape of `descriptor`.
///
/// Single shapes read one row, any further row is discarded unread. Slice shapes
/// append every row in order. When a row fails to decode the error is returned right away and
/// the elements already appended stay in the target.
pub async fn map_rows<T, S>(
    rows: S,
    descriptor: &RecordDescriptor,
    target: &mut T,
    on_empty: EmptyResult,
) -> Result<()>
where
    T: Target,
    S: Stream<Item = Result<RowLabeled>>,
{
    let mut rows = pin!(rows);
    match descriptor.container {
        ContainerShape::SingleValue | ContainerShape::SinglePointer => {
            match rows.next().await {
                Some(row) => target.store(row?),
                None => match on_empty {
                    EmptyResult::ZeroValue => Ok(()),
                    EmptyResult::NotFound => Err(ErrorKind::NoRowsFound.into()),
                },
            }
        }
        ContainerShape::SliceOfValue | ContainerShape::SliceOfPointer => {
            while let Some(row) = rows.try_next().await? {
                target.store(row)?;
            }
            Ok(())
        }
    }
}
