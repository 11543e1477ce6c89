use crate::shapes::{Boat, MUTEX, fleet, reset_boats};
use rowboat::{Connection, Database, EmptyResult, ErrorKind};

pub async fn empty<C: Connection>(database: &Database<C>) {
    let _lock = MUTEX.lock().await;
    reset_boats(database, &fleet()).await;

    // Zero value: the target is left as it was
    let mut boat = Boat {
        id: 99,
        name: "Untouched".into(),
        length: 1.0,
        crew: None,
    };
    let before = boat.clone();
    database
        .select(&mut boat)
        .expect("Boat is a supported target")
        .filter("name", "Flying Dutchman")
        .run()
        .await
        .expect("An empty result is not an error by default");
    assert_eq!(boat, before);

    let mut boxed: Option<Box<Boat>> = None;
    database
        .select(&mut boxed)
        .expect("Option<Box<Boat>> is a supported target")
        .filter("id", 42)
        .run()
        .await
        .expect("An empty result is not an error by default");
    assert!(boxed.is_none());

    let mut boats = Vec::<Boat>::new();
    database
        .select(&mut boats)
        .expect("Vec<Boat> is a supported target")
        .filter("id", 42)
        .on_empty(EmptyResult::NotFound)
        .run()
        .await
        .expect("Slices are never reported as not found");
    assert!(boats.is_empty());

    // Not found policy
    let error = database
        .select(&mut boat)
        .expect("Boat is a supported target")
        .filter("name", "Flying Dutchman")
        .on_empty(EmptyResult::NotFound)
        .run()
        .await
        .expect_err("The not found policy must fail on an empty result");
    assert_eq!(ErrorKind::of(&error), Some(&ErrorKind::NoRowsFound));
    assert_eq!(boat, before);

    let mut count = -1_i64;
    let error = database
        .raw("SELECT crew FROM boat WHERE id = $1")
        .bind(42)
        .model(&mut count)
        .expect("i64 is a supported target")
        .on_empty(EmptyResult::NotFound)
        .run()
        .await
        .expect_err("The not found policy must fail on an empty result");
    assert_eq!(ErrorKind::of(&error), Some(&ErrorKind::NoRowsFound));
    assert_eq!(count, -1);

    // Single targets take the first row and ignore the rest
    let mut boat = Boat::default();
    database
        .raw("SELECT * FROM boat WHERE id = $1 OR id = $2 ORDER BY id")
        .bind(2)
        .bind(3)
        .model(&mut boat)
        .expect("Boat is a supported target")
        .run()
        .await
        .expect("Failed to select the first of two rows");
    assert_eq!(boat.name, "Nautilus");
}
