use crate::shapes::{Boat, MUTEX, reset_boats};
use rowboat::{Connection, Database};

pub async fn limits<C: Connection>(database: &Database<C>) {
    let _lock = MUTEX.lock().await;
    let boats = (1..=10)
        .map(|i| Boat {
            id: i,
            name: format!("Boat {i}"),
            length: i as f64 * 1.5,
            crew: if i % 2 == 0 { Some(i as i64) } else { None },
        })
        .collect::<Vec<_>>();
    reset_boats(database, &boats).await;

    let mut found = Vec::<Boat>::new();
    database
        .select(&mut found)
        .expect("Vec<Boat> is a supported target")
        .limit(3)
        .run()
        .await
        .expect("Failed to select with a limit");
    assert_eq!(found.len(), 3);

    // The last call wins and zero means no limit
    let mut found = Vec::<Boat>::new();
    database
        .select(&mut found)
        .expect("Vec<Boat> is a supported target")
        .limit(3)
        .limit(0)
        .run()
        .await
        .expect("Failed to select without a limit");
    assert_eq!(found.len(), 10);

    let mut found = Vec::<Box<Boat>>::new();
    database
        .select(&mut found)
        .expect("Vec<Box<Boat>> is a supported target")
        .filter("crew", 4_i64)
        .limit(5)
        .run()
        .await
        .expect("Failed to select with a filter and a limit");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 4);
}
