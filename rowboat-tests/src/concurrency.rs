use crate::shapes::{Boat, MUTEX, fleet, reset_boats};
use rowboat::{Connection, Database};

pub async fn concurrency<C: Connection>(database: &Database<C>) {
    let _lock = MUTEX.lock().await;
    let fleet = fleet();
    reset_boats(database, &fleet).await;

    let mut all = Vec::<Boat>::new();
    let mut argo = Boat::default();
    let mut count = 0_i64;
    let (a, b, c) = tokio::join!(
        async {
            database
                .select(&mut all)
                .expect("Vec<Boat> is a supported target")
                .run()
                .await
        },
        async {
            database
                .select(&mut argo)
                .expect("Boat is a supported target")
                .filter("name", "Argo")
                .run()
                .await
        },
        async {
            database
                .raw("SELECT COUNT(*) FROM boat WHERE crew = $1")
                .bind(50_i64)
                .model(&mut count)
                .expect("i64 is a supported target")
                .run()
                .await
        },
    );
    a.expect("Failed to select every boat");
    b.expect("Failed to select argo");
    c.expect("Failed to count the boats");
    all.sort_by_key(|b| b.id);
    assert_eq!(all, fleet);
    assert_eq!(argo, fleet[0]);
    assert_eq!(count, 1);
}
