use crate::silent_logs;
use rowboat::{Connection, Database, Entity};
use std::sync::LazyLock;
use tokio::sync::Mutex;

pub(crate) static MUTEX: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

#[derive(Entity, Default, Debug, Clone, PartialEq)]
pub struct User {
    #[rowboat(primary_key)]
    pub id: i64,
    #[rowboat(size = 100)]
    pub name: String,
    #[rowboat(unique)]
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

pub(crate) async fn reset_users<C: Connection>(database: &Database<C>) {
    database
        .drop_table(User::schema(), true)
        .await
        .expect("Failed to drop the user table");
    database
        .auto_migrate(&[User::schema()])
        .await
        .expect("Failed to create the user table");
}

pub async fn users<C: Connection>(database: &Database<C>) {
    let _lock = MUTEX.lock().await;
    reset_users(database).await;

    // Migrating again leaves the table alone
    database
        .auto_migrate(&[User::schema()])
        .await
        .expect("Second auto_migrate should be a no-op");

    // Insert
    let users = [
        User::new(1, "emir", "emir@example.com"),
        User::new(2, "bob", "bob@example.com"),
        User::new(3, "carla", "carla@example.com"),
    ];
    for user in &users {
        database
            .insert(user)
            .expect("User must be insertable")
            .run()
            .await
            .expect("Failed to insert a user");
    }

    // Select all
    let mut found = Vec::<User>::new();
    database
        .select(&mut found)
        .expect("Vec<User> is a supported target")
        .run()
        .await
        .expect("Failed to select the users");
    found.sort_by_key(|u| u.id);
    assert_eq!(found, users);

    // Select one
    let mut bob = User::default();
    database
        .select(&mut bob)
        .expect("User is a supported target")
        .filter("email", "bob@example.com")
        .run()
        .await
        .expect("Failed to select bob");
    assert_eq!(bob, users[1]);

    // Update
    let result = database
        .update("user")
        .set("name", "robert")
        .filter("id", 2_i64)
        .run()
        .await
        .expect("Failed to update bob");
    assert_eq!(result.rows_affected, 1);
    let mut robert = User::default();
    database
        .select(&mut robert)
        .expect("User is a supported target")
        .filter("id", 2_i64)
        .run()
        .await
        .expect("Failed to select robert");
    assert_eq!(robert.name, "robert");
    assert_eq!(robert.email, "bob@example.com");

    // Conditions are joined with AND
    let mut none = Vec::<User>::new();
    database
        .select(&mut none)
        .expect("Vec<User> is a supported target")
        .filter("id", 2_i64)
        .filter("name", "bob")
        .run()
        .await
        .expect("Failed to select with two conditions");
    assert!(none.is_empty());

    // Delete
    let result = database
        .delete("user")
        .filter("id", 3_i64)
        .run()
        .await
        .expect("Failed to delete carla");
    assert_eq!(result.rows_affected, 1);
    let result = database
        .delete("user")
        .filter("id", 3_i64)
        .run()
        .await
        .expect("Deleting a missing row is not an error");
    assert_eq!(result.rows_affected, 0);

    let mut remaining = Vec::<User>::new();
    database
        .select(&mut remaining)
        .expect("Vec<User> is a supported target")
        .run()
        .await
        .expect("Failed to select the remaining users");
    remaining.sort_by_key(|u| u.id);
    assert_eq!(
        remaining.iter().map(|u| u.id).collect::<Vec<_>>(),
        [1, 2],
        "Only carla should be gone"
    );

    // Unique email
    silent_logs! {
        let result = database
            .insert(&User::new(4, "emir2", "emir@example.com"))
            .expect("User must be insertable")
            .run()
            .await;
        assert!(result.is_err(), "Duplicated email should be rejected");
    }
}

/// Textual ids are coerced to the column type by every driver.
pub async fn string_ids<C: Connection>(database: &Database<C>) {
    let _lock = MUTEX.lock().await;
    reset_users(database).await;
    for user in [
        User::new(1, "emir", "emir@example.com"),
        User::new(2, "bob", "bob@example.com"),
    ] {
        database
            .insert(&user)
            .expect("User must be insertable")
            .run()
            .await
            .expect("Failed to insert a user");
    }

    let result = database
        .update("user")
        .set("name", "kris")
        .filter("id", "1")
        .run()
        .await
        .expect("Failed to update by textual id");
    assert_eq!(result.rows_affected, 1);

    let mut kris = User::default();
    database
        .select(&mut kris)
        .expect("User is a supported target")
        .filter("name", "kris")
        .run()
        .await
        .expect("Failed to select kris");
    assert_eq!(kris, User::new(1, "kris", "emir@example.com"));

    let result = database
        .delete("user")
        .filter("id", "1")
        .run()
        .await
        .expect("Failed to delete by textual id");
    assert_eq!(result.rows_affected, 1);

    let mut gone = Vec::<User>::new();
    database
        .select(&mut gone)
        .expect("Vec<User> is a supported target")
        .filter("name", "kris")
        .run()
        .await
        .expect("Failed to select after the delete");
    assert!(gone.is_empty(), "kris should be deleted");

    let mut left = Vec::<User>::new();
    database
        .select(&mut left)
        .expect("Vec<User> is a supported target")
        .run()
        .await
        .expect("Failed to select the remaining users");
    assert_eq!(left, [User::new(2, "bob", "bob@example.com")]);
}
