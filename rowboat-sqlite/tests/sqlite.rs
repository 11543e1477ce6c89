#[cfg(test)]
mod tests {
    use rowboat::Database;
    use rowboat_sqlite::SqliteConnection;
    use rowboat_tests::{execute_tests, init_logs};
    use std::{path::Path, sync::Mutex};
    use tokio::fs;

    static MUTEX: Mutex<()> = Mutex::new(());

    #[tokio::test]
    async fn sqlite() {
        init_logs();
        const DB_PATH: &'static str = "../target/debug/tests.sqlite";
        let _guard = MUTEX.lock().unwrap();
        if Path::new(DB_PATH).exists() {
            fs::remove_file(DB_PATH).await.expect(
                format!("Failed to remove existing test database file {}", DB_PATH).as_str(),
            );
        }
        let database = Database::<SqliteConnection>::connect(&format!("sqlite://{}?mode=rwc", DB_PATH))
            .await
            .expect("Could not open the database");
        assert!(
            Path::new(DB_PATH).exists(),
            "Database file should be created after connection"
        );
        execute_tests(&database).await;
        database.close().await.expect("Could not close the database");
    }

    #[tokio::test]
    async fn sqlite_memory() {
        init_logs();
        let database = Database::<SqliteConnection>::connect("sqlite://:memory:")
            .await
            .expect("Could not open the in memory database");
        execute_tests(&database).await;
    }
}
