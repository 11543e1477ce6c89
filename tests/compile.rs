mod common;

#[cfg(test)]
mod tests {
    use crate::common::RecordingConnection;
    use rowboat::{Clause, Database, Entity, ErrorKind, Query, Result, SqlWriter, Value};

    #[derive(Entity, Default, Debug, Clone, PartialEq)]
    struct User {
        #[rowboat(primary_key)]
        id: i64,
        #[rowboat(size = 100)]
        name: String,
        #[rowboat(unique)]
        email: String,
    }

    fn database() -> Database<RecordingConnection> {
        Database::new(RecordingConnection::default())
    }

    #[test]
    fn select() {
        let database = database();
        let mut users = Vec::<User>::new();
        let query = database
            .select(&mut users)
            .expect("Vec<User> is a supported target")
            .filter("name", "emir")
            .filter("id", 1_i64)
            .limit(10)
            .compile()
            .expect("Failed to compile the select");
        assert_eq!(
            query,
            Query::new(
                r#"SELECT * FROM "user" WHERE "name" = $1 AND "id" = $2 LIMIT 10"#,
                vec![Value::Varchar(Some("emir".into())), Value::Int64(Some(1))],
            )
        );

        let mut user = User::default();
        let query = database
            .select(&mut user)
            .expect("User is a supported target")
            .compile()
            .expect("Failed to compile the select");
        assert_eq!(query.sql, r#"SELECT * FROM "user""#);
        assert!(query.params.is_empty());
    }

    #[test]
    fn select_custom_compiler() {
        let database = database();
        let mut users = Vec::<Box<User>>::new();
        let query = database
            .select(&mut users)
            .expect("Vec<Box<User>> is a supported target")
            .filter("email", "a@example.com")
            .compiler(
                |writer: &dyn SqlWriter,
                 table: &str,
                 conditions: &[Clause],
                 _limit: u32|
                 -> Result<String> {
                    let mut out = String::from("SELECT id FROM ");
                    writer.write_identifier_quoted(&mut out, table);
                    writer.write_where(&mut out, conditions);
                    Ok(out)
                },
            )
            .compile()
            .expect("Failed to compile the select");
        assert_eq!(query.sql, r#"SELECT id FROM "user" WHERE "email" = $1"#);
    }

    #[test]
    fn insert() {
        let database = database();
        let user = User {
            id: 1,
            name: "emir".into(),
            email: "emir@example.com".into(),
        };
        let query = database
            .insert(&user)
            .expect("User must be insertable")
            .compile()
            .expect("Failed to compile the insert");
        assert_eq!(
            query.sql,
            r#"INSERT INTO "user" ("id", "name", "email") VALUES ($1, $2, $3)"#
        );
        assert_eq!(query.params, user.row().to_vec());
    }

    #[test]
    fn update_placeholders_follow_call_order() {
        let database = database();
        let query = database
            .update("user")
            .filter("id", "1")
            .filter("email", "emir@example.com")
            .set("name", "kris")
            .compile()
            .expect("Failed to compile the update");
        assert_eq!(
            query.sql,
            r#"UPDATE "user" SET "name" = $3 WHERE "id" = $1 AND "email" = $2"#
        );
        assert_eq!(
            query.params,
            [
                Value::Varchar(Some("1".into())),
                Value::Varchar(Some("emir@example.com".into())),
                Value::Varchar(Some("kris".into())),
            ]
        );

        let query = database
            .update("user")
            .set("name", "kris")
            .set("email", Option::<String>::None)
            .filter("id", 1_i64)
            .compile()
            .expect("Failed to compile the update");
        assert_eq!(
            query.sql,
            r#"UPDATE "user" SET "name" = $1, "email" = $2 WHERE "id" = $3"#
        );
        assert_eq!(query.params[1], Value::Varchar(None));
    }

    #[test]
    fn delete() {
        let database = database();
        let query = database
            .delete("user")
            .filter("id", 1_i64)
            .filter("name", "kris")
            .compile()
            .expect("Failed to compile the delete");
        assert_eq!(
            query.sql,
            r#"DELETE FROM "user" WHERE "id" = $1 AND "name" = $2"#
        );
        assert_eq!(query.params.len(), 2);
    }

    #[test]
    fn column_names_keep_their_case() {
        let database = database();
        let mut user = User::default();
        let query = database
            .select(&mut user)
            .expect("User is a supported target")
            .filter("Name", "kris")
            .compile()
            .expect("Failed to compile the select");
        assert_eq!(query.sql, r#"SELECT * FROM "user" WHERE "Name" = $1"#);

        let query = database
            .update("user")
            .set("Email", "k@example.com")
            .filter("ID", 1_i64)
            .compile()
            .expect("Failed to compile the update");
        assert_eq!(
            query.sql,
            r#"UPDATE "user" SET "Email" = $1 WHERE "ID" = $2"#
        );

        let query = database
            .delete("user")
            .filter("NAME", "kris")
            .compile()
            .expect("Failed to compile the delete");
        assert_eq!(query.sql, r#"DELETE FROM "user" WHERE "NAME" = $1"#);
    }

    #[test]
    fn missing_clauses() {
        let database = database();
        let error = database
            .update("user")
            .filter("id", 1_i64)
            .compile()
            .expect_err("UPDATE without SET");
        assert_eq!(
            ErrorKind::of(&error),
            Some(&ErrorKind::MissingClause {
                statement: "UPDATE",
                clause: "SET"
            })
        );
        let error = database
            .update("user")
            .set("name", "x")
            .compile()
            .expect_err("UPDATE without WHERE");
        assert_eq!(
            ErrorKind::of(&error),
            Some(&ErrorKind::MissingClause {
                statement: "UPDATE",
                clause: "WHERE"
            })
        );
        let error = database
            .delete("user")
            .compile()
            .expect_err("DELETE without WHERE");
        assert_eq!(
            ErrorKind::of(&error),
            Some(&ErrorKind::MissingClause {
                statement: "DELETE",
                clause: "WHERE"
            })
        );
        let error = database
            .update("")
            .set("name", "x")
            .filter("id", 1_i64)
            .compile()
            .expect_err("UPDATE without table");
        assert!(matches!(ErrorKind::of(&error), Some(ErrorKind::Compile(..))));
    }

    #[tokio::test]
    async fn missing_clauses_never_reach_the_connection() {
        let connection = RecordingConnection::default();
        let queries = connection.queries.clone();
        let database = Database::new(connection);
        assert!(database.delete("user").run().await.is_err());
        assert!(database.update("user").filter("id", 1_i64).run().await.is_err());
        assert!(queries.lock().unwrap().is_empty());
        database
            .delete("user")
            .filter("id", 1_i64)
            .run()
            .await
            .expect("The delete should reach the connection");
        assert_eq!(queries.lock().unwrap().len(), 1);
    }

    #[test]
    fn raw() {
        let database = database();
        let query = database
            .raw("SELECT * FROM user WHERE name = $1")
            .bind("emir")
            .compile()
            .expect("Failed to compile the raw query");
        assert_eq!(query.sql, r#"SELECT * FROM "user" WHERE "name" = $1"#);
        assert_eq!(query.params, [Value::Varchar(Some("emir".into()))]);

        let query = database
            .raw("INSERT INTO user (name, email) VALUES ($1, $2)")
            .bind("emir")
            .bind("emir@example.com")
            .compile()
            .expect("Failed to compile the raw query");
        assert_eq!(
            query.sql,
            r#"INSERT INTO "user" ("name", "email") VALUES ($1, $2)"#
        );

        let query = database
            .raw("select count(*) from user")
            .verbatim()
            .compile()
            .expect("Failed to compile the raw query");
        assert_eq!(query.sql, "select count(*) from user");
    }

    #[test]
    fn auto_migrate_sql() {
        let mut out = String::new();
        database()
            .sql_writer()
            .write_create_table(&mut out, User::schema(), true);
        assert!(out.starts_with(r#"CREATE TABLE IF NOT EXISTS "user" ("#));
    }

    #[tokio::test]
    async fn auto_migrate_is_one_statement_per_schema() {
        #[derive(Entity)]
        #[rowboat(table = "orders")]
        struct Order {
            #[rowboat(primary_key)]
            _id: i32,
            _total: f64,
        }
        let connection = RecordingConnection::default();
        let queries = connection.queries.clone();
        let database = Database::new(connection);
        database
            .auto_migrate(&[User::schema(), Order::schema()])
            .await
            .expect("Failed to migrate");
        let queries = queries.lock().unwrap();
        assert_eq!(queries.len(), 2);
        assert!(queries[0].sql.contains(r#""user""#));
        assert_eq!(
            queries[1].sql,
            r#"CREATE TABLE IF NOT EXISTS "orders" ("_id" INTEGER PRIMARY KEY, "_total" REAL NOT NULL)"#
        );
    }
}
