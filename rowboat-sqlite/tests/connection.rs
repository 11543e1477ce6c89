#[cfg(test)]
mod tests {
    use rowboat::{
        Connection, Database, ErrorKind, Executor, QueryResult, Value, stream::TryStreamExt,
    };
    use rowboat_sqlite::SqliteConnection;
    use rowboat_tests::{init_logs, silent_logs};
    use std::{path::Path, sync::Mutex};
    use tokio::fs;

    static MUTEX: Mutex<()> = Mutex::new(());

    #[tokio::test]
    async fn create_database() {
        init_logs();
        const DB_PATH: &'static str = "../target/debug/creation.sqlite";
        let _guard = MUTEX.lock().unwrap();
        if Path::new(DB_PATH).exists() {
            fs::remove_file(DB_PATH)
                .await
                .expect(format!("Failed to remove test database file {}", DB_PATH).as_str());
        }
        assert!(
            !Path::new(DB_PATH).exists(),
            "Database file should not exist before test"
        );
        SqliteConnection::connect(&format!("sqlite://{}?mode=rwc", DB_PATH))
            .await
            .expect("Could not open the database");
        assert!(
            Path::new(DB_PATH).exists(),
            "Database file should be created after connection"
        );
        SqliteConnection::connect(&format!("sqlite://{}?mode=ro", DB_PATH))
            .await
            .expect("Could not open the database");
        fs::remove_file(DB_PATH)
            .await
            .expect(format!("Failed to remove existing test database file {}", DB_PATH).as_str());
        silent_logs! {
            assert!(
                SqliteConnection::connect(&format!("sqlite://{}?mode=ro", DB_PATH))
                    .await
                    .is_err(),
                "Should not be able to open in read only unexisting database"
            );
        }
    }

    #[tokio::test]
    async fn wrong_url() {
        silent_logs! {
            assert!(
                SqliteConnection::connect("postgres://some_value")
                    .await
                    .is_err()
            );
        };
    }

    #[tokio::test]
    async fn placeholders_bind_by_number() {
        init_logs();
        let mut connection = SqliteConnection::connect("sqlite://:memory:")
            .await
            .expect("Could not open the in memory database");
        let rows = connection
            .fetch(rowboat::Query::new(
                "SELECT $2 AS b, $1 AS a",
                vec![Value::Int64(Some(1)), Value::Varchar(Some("two".into()))],
            ))
            .try_collect::<Vec<_>>()
            .await
            .expect("Could not run the query");
        assert_eq!(rows.len(), 1);
        assert_eq!(
            *rows[0].values(),
            [Value::Varchar(Some("two".into())), Value::Int64(Some(1))]
        );
        assert_eq!(*rows[0].names(), ["b".to_string(), "a".to_string()]);
        assert_eq!(rows[0].get("a"), Some(&Value::Int64(Some(1))));
        assert_eq!(rows[0].get("c"), None);
    }

    #[tokio::test]
    async fn statements_report_changes() {
        init_logs();
        let mut connection = SqliteConnection::connect("sqlite://:memory:")
            .await
            .expect("Could not open the in memory database");
        connection
            .execute("CREATE TABLE t (id INTEGER PRIMARY KEY, v TEXT)".into())
            .await
            .expect("Could not create the table");
        let result = connection
            .run(rowboat::Query::new(
                "INSERT INTO t (v) VALUES ($1)",
                vec![Value::Varchar(Some("a".into()))],
            ))
            .try_collect::<Vec<_>>()
            .await
            .expect("Could not insert");
        let [QueryResult::Affected(affected)] = result.as_slice() else {
            panic!("Expected a single affected result, got {:?}", result);
        };
        assert_eq!(affected.rows_affected, 1);
        assert_eq!(affected.last_affected_id, Some(1));
        silent_logs! {
            assert!(
                connection
                    .execute("SELECT 1; SELECT 2".into())
                    .await
                    .is_err(),
                "Multiple statements are rejected"
            );
            assert!(
                connection
                    .execute(rowboat::Query::new("SELECT $1", Vec::new()))
                    .await
                    .is_err(),
                "Missing arguments are rejected"
            );
        }
        connection.disconnect().await.expect("Could not close");
    }

    #[tokio::test]
    async fn invalid_text_is_a_scan_error() {
        init_logs();
        let database = Database::<SqliteConnection>::connect("sqlite://:memory:")
            .await
            .expect("Could not open the in memory database");
        let mut text = String::new();
        let error = database
            .raw("SELECT CAST(x'FF' AS TEXT)")
            .verbatim()
            .model(&mut text)
            .expect("String is a supported target")
            .run()
            .await
            .expect_err("0xFF is not valid UTF-8");
        assert!(
            matches!(ErrorKind::of(&error), Some(ErrorKind::Scan(..))),
            "{:#}",
            error
        );
        let mut number = 0_i64;
        let error = database
            .raw("SELECT 'abc'")
            .verbatim()
            .model(&mut number)
            .expect("i64 is a supported target")
            .run()
            .await
            .expect_err("`abc` is not an integer");
        assert!(matches!(ErrorKind::of(&error), Some(ErrorKind::Scan(..))));
        database.close().await.expect("Could not close");
    }

    #[tokio::test]
    async fn syntax_errors_keep_the_connection_usable() {
        init_logs();
        let mut connection = SqliteConnection::connect("sqlite://:memory:")
            .await
            .expect("Could not open the in memory database");
        silent_logs! {
            let error = connection
                .execute("SELEC 1".into())
                .await
                .expect_err("The statement cannot be prepared");
            assert!(format!("{:#}", error).contains("syntax error"), "{:#}", error);
        }
        let rows = connection
            .fetch("SELECT 1 AS one".into())
            .try_collect::<Vec<_>>()
            .await
            .expect("The connection should still work");
        assert_eq!(rows[0].get("one"), Some(&Value::Int64(Some(1))));
        connection.disconnect().await.expect("Could not close");
    }

    #[tokio::test]
    async fn disconnect_releases_the_database() {
        init_logs();
        const DB_PATH: &'static str = "../target/debug/disconnect.sqlite";
        let _guard = MUTEX.lock().unwrap();
        if Path::new(DB_PATH).exists() {
            fs::remove_file(DB_PATH)
                .await
                .expect(format!("Failed to remove test database file {}", DB_PATH).as_str());
        }
        let url = format!("sqlite://{}?mode=rwc", DB_PATH);
        let mut connection = SqliteConnection::connect(&url)
            .await
            .expect("Could not open the database");
        connection
            .execute("CREATE TABLE t (id INTEGER PRIMARY KEY)".into())
            .await
            .expect("Could not create the table");
        connection
            .execute("INSERT INTO t (id) VALUES (7)".into())
            .await
            .expect("Could not insert");
        connection.disconnect().await.expect("Could not close");

        let mut connection = SqliteConnection::connect(&url)
            .await
            .expect("Could not reopen the database");
        let rows = connection
            .fetch("SELECT id FROM t".into())
            .try_collect::<Vec<_>>()
            .await
            .expect("Could not read back");
        assert_eq!(*rows[0].values(), [Value::Int64(Some(7))]);
        connection.disconnect().await.expect("Could not close");
        fs::remove_file(DB_PATH)
            .await
            .expect(format!("Failed to remove test database file {}", DB_PATH).as_str());
    }
}
