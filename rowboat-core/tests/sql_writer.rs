#[cfg(test)]
mod tests {
    use rowboat_core::{
        Clause, Clauses, ColumnDef, ErrorKind, GenericSqlWriter, RecordSchema, SqlWriter, Value,
        separated_by, truncate_long, truncated,
    };

    const WRITER: GenericSqlWriter = GenericSqlWriter::new();

    fn clause(column: &str, placeholder: usize) -> Clause {
        Clause {
            column: column.into(),
            placeholder,
        }
    }

    #[test]
    fn placeholders_follow_call_order() {
        let mut clauses = Clauses::default();
        clauses.add_condition("id", 1_i64);
        clauses.add_assignment("name", "kris");
        clauses.add_condition("email", Option::<String>::None);
        assert_eq!(clauses.conditions, [clause("id", 1), clause("email", 3)]);
        assert_eq!(clauses.assignments, [clause("name", 2)]);
        assert_eq!(
            clauses.args,
            [
                Value::Int64(Some(1)),
                Value::Varchar(Some("kris".into())),
                Value::Varchar(None)
            ]
        );
        clauses.check().expect("Clauses built through add_* are consistent");
    }

    #[test]
    fn inconsistent_clauses() {
        let mut clauses = Clauses::default();
        clauses.add_condition("id", 1_i64);
        clauses.args.push(Value::Int64(Some(2)));
        let error = clauses.check().expect_err("One argument too many");
        assert!(matches!(ErrorKind::of(&error), Some(ErrorKind::Compile(..))));

        let clauses = Clauses {
            conditions: vec![clause("id", 1), clause("name", 1)],
            assignments: vec![],
            args: vec![Value::Int64(Some(1)), Value::Int64(Some(2))],
        };
        assert!(clauses.check().is_err());

        let clauses = Clauses {
            conditions: vec![clause("id", 0)],
            assignments: vec![],
            args: vec![Value::Int64(Some(1))],
        };
        assert!(clauses.check().is_err());

        let clauses = Clauses {
            conditions: vec![clause("", 1)],
            assignments: vec![],
            args: vec![Value::Int64(Some(1))],
        };
        assert!(clauses.check().is_err());
    }

    #[test]
    fn statements() {
        let mut out = String::new();
        WRITER.write_select(&mut out, "user", &[], 0);
        assert_eq!(out, r#"SELECT * FROM "user""#);

        let mut out = String::new();
        WRITER.write_select(&mut out, "user", &[clause("id", 1), clause("name", 2)], 5);
        assert_eq!(
            out,
            r#"SELECT * FROM "user" WHERE "id" = $1 AND "name" = $2 LIMIT 5"#
        );

        let mut out = String::new();
        WRITER.write_insert(&mut out, "user", &["id", "name"]);
        assert_eq!(out, r#"INSERT INTO "user" ("id", "name") VALUES ($1, $2)"#);

        let mut out = String::new();
        WRITER.write_update(&mut out, "user", &[clause("name", 2)], &[clause("id", 1)]);
        assert_eq!(out, r#"UPDATE "user" SET "name" = $2 WHERE "id" = $1"#);

        let mut out = String::new();
        WRITER.write_delete(&mut out, "user", &[clause("id", 1)]);
        assert_eq!(out, r#"DELETE FROM "user" WHERE "id" = $1"#);

        let mut out = String::new();
        WRITER.write_identifier_quoted(&mut out, r#"odd"name"#);
        assert_eq!(out, r#""odd""name""#);
    }

    #[test]
    fn column_types() {
        let schema = RecordSchema {
            name: "Sample",
            table: "sample",
            columns: Box::new([
                ColumnDef {
                    name: "id",
                    field: "id",
                    value: Value::Int32(None),
                    primary_key: true,
                    ..Default::default()
                },
                ColumnDef {
                    name: "code",
                    field: "code",
                    value: Value::Varchar(None),
                    size: Some(8),
                    unique: true,
                    ..Default::default()
                },
                ColumnDef {
                    name: "price",
                    field: "price",
                    value: Value::Float64(None),
                    column_type: "NUMERIC(10, 2)",
                    nullable: true,
                    ..Default::default()
                },
                ColumnDef {
                    name: "count",
                    field: "count",
                    value: Value::UInt16(None),
                    ..Default::default()
                },
            ]),
        };
        let mut out = String::new();
        WRITER.write_create_table(&mut out, &schema, false);
        assert_eq!(
            out,
            r#"CREATE TABLE "sample" ("id" INTEGER PRIMARY KEY, "code" VARCHAR(8) NOT NULL UNIQUE, "price" NUMERIC(10, 2), "count" BIGINT NOT NULL)"#
        );
    }

    #[test]
    fn helpers() {
        let mut out = String::new();
        separated_by(&mut out, ["a", "", "b"], |out, v| out.push_str(v), ", ");
        assert_eq!(out, "a, b");

        assert_eq!(truncated("hello", 10), ("hello", false));
        assert_eq!(truncated("hello", 3), ("hel", true));
        assert_eq!(truncated("héllo", 2), ("h", true));

        let long = "x".repeat(600);
        let message = format!("{}", truncate_long!(long));
        assert_eq!(message.len(), 500);
        assert!(message.ends_with("..."));
    }
}
