use crate::shapes::{Boat, MUTEX, fleet, reset_boats};
use rowboat::{Connection, Database, ErrorKind};

pub async fn guards<C: Connection>(database: &Database<C>) {
    let _lock = MUTEX.lock().await;
    reset_boats(database, &fleet()).await;

    let error = database
        .update("boat")
        .filter("id", 1)
        .run()
        .await
        .expect_err("An update without assignments must be rejected");
    assert_eq!(
        ErrorKind::of(&error),
        Some(&ErrorKind::MissingClause {
            statement: "UPDATE",
            clause: "SET",
        })
    );

    let error = database
        .update("boat")
        .set("name", "Everything")
        .run()
        .await
        .expect_err("An update without conditions must be rejected");
    assert_eq!(
        ErrorKind::of(&error),
        Some(&ErrorKind::MissingClause {
            statement: "UPDATE",
            clause: "WHERE",
        })
    );

    let error = database
        .delete("boat")
        .run()
        .await
        .expect_err("A delete without conditions must be rejected");
    assert_eq!(
        ErrorKind::of(&error),
        Some(&ErrorKind::MissingClause {
            statement: "DELETE",
            clause: "WHERE",
        })
    );

    let error = database
        .delete("")
        .filter("id", 1)
        .run()
        .await
        .expect_err("A delete without a table must be rejected");
    assert!(matches!(ErrorKind::of(&error), Some(ErrorKind::Compile(..))));

    // Nothing reached the database
    let mut boats = Vec::<Boat>::new();
    database
        .select(&mut boats)
        .expect("Vec<Boat> is a supported target")
        .run()
        .await
        .expect("Failed to select the boats");
    boats.sort_by_key(|b| b.id);
    assert_eq!(boats, fleet());
}
