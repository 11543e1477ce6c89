use crate::user::{MUTEX, User, reset_users};
use rowboat::{Connection, Database};

pub async fn raw<C: Connection>(database: &Database<C>) {
    let _lock = MUTEX.lock().await;
    reset_users(database).await;

    // Bare identifiers are quoted, user is a reserved word on some backends
    let insert = database
        .raw("INSERT INTO user (name, email) VALUES ($1, $2)")
        .bind("emir")
        .bind("emir@example.com");
    assert_eq!(
        insert.compile().expect("Failed to compile").sql,
        r#"INSERT INTO "user" ("name", "email") VALUES ($1, $2)"#
    );
    let result = insert.run().await.expect("Failed to insert with raw SQL");
    assert_eq!(result.rows_affected, 1);
    database
        .raw("INSERT INTO user (name, email) VALUES ($1, $2)")
        .bind("sara")
        .bind("sara@example.com")
        .run()
        .await
        .expect("Failed to insert with raw SQL");

    let mut users = Vec::<User>::new();
    database
        .raw("SELECT * FROM user WHERE name = $1")
        .bind("emir")
        .model(&mut users)
        .expect("Vec<User> is a supported target")
        .run()
        .await
        .expect("Failed to select with raw SQL");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "emir");
    assert_eq!(users[0].email, "emir@example.com");
    assert!(users[0].id > 0, "The primary key is generated");

    let mut count = 0_i64;
    database
        .raw("SELECT COUNT(*) FROM user")
        .model(&mut count)
        .expect("i64 is a supported target")
        .run()
        .await
        .expect("Failed to count the users");
    assert_eq!(count, 2);

    // Verbatim text is sent as written
    let mut email = String::new();
    database
        .raw(r#"SELECT "email" FROM "user" WHERE "name" = $1"#)
        .verbatim()
        .bind("sara")
        .model(&mut email)
        .expect("String is a supported target")
        .run()
        .await
        .expect("Failed to select with verbatim SQL");
    assert_eq!(email, "sara@example.com");

    // Placeholders bind by number: $2 is the second argument wherever it appears
    let result = database
        .raw("UPDATE user SET email = $2 WHERE name = $1")
        .bind("sara")
        .bind("sara@example.org")
        .run()
        .await
        .expect("Failed to update with raw SQL");
    assert_eq!(result.rows_affected, 1);
    let mut sara = User::default();
    database
        .select(&mut sara)
        .expect("User is a supported target")
        .filter("email", "sara@example.org")
        .run()
        .await
        .expect("Failed to select sara");
    assert_eq!(sara.name, "sara");

    let result = database
        .raw("DELETE FROM user")
        .run()
        .await
        .expect("Failed to delete with raw SQL");
    assert_eq!(result.rows_affected, 2);
}
