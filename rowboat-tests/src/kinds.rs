use rowboat::{Connection, Database, Entity};
use std::sync::LazyLock;
use tokio::sync::Mutex;

static MUTEX: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

#[derive(Entity, Default, Debug, Clone, PartialEq)]
#[rowboat(table = "value_kinds")]
struct Kinds {
    #[rowboat(primary_key)]
    id: i64,
    flag: bool,
    tiny: i8,
    small: i16,
    small_unsigned: u16,
    medium_unsigned: u32,
    ratio: f32,
    score: f64,
    #[rowboat(size = 16)]
    code: String,
    label: Option<String>,
    data: Vec<u8>,
    #[rowboat(name = "maybe_data")]
    extra: Option<Vec<u8>>,
}

pub async fn kinds<C: Connection>(database: &Database<C>) {
    let _lock = MUTEX.lock().await;
    database
        .drop_table(Kinds::schema(), true)
        .await
        .expect("Failed to drop the value_kinds table");
    database
        .auto_migrate(&[Kinds::schema()])
        .await
        .expect("Failed to create the value_kinds table");

    let entities = [
        Kinds {
            id: 1,
            flag: true,
            tiny: -128,
            small: -32_768,
            small_unsigned: 65_535,
            medium_unsigned: 4_000_000_000,
            ratio: 0.25,
            score: -1234.5678,
            code: "ABC-001".into(),
            label: Some("first".into()),
            data: vec![0, 1, 2, 254, 255],
            extra: Some(vec![42]),
        },
        Kinds {
            id: 2,
            flag: false,
            tiny: 127,
            small: 32_767,
            small_unsigned: 0,
            medium_unsigned: 0,
            ratio: -8.5,
            score: 0.0,
            code: String::new(),
            label: None,
            data: Vec::new(),
            extra: None,
        },
    ];
    for entity in &entities {
        database
            .insert(entity)
            .expect("Kinds must be insertable")
            .run()
            .await
            .expect("Failed to insert Kinds");
    }

    let mut found = Vec::<Kinds>::new();
    database
        .select(&mut found)
        .expect("Vec<Kinds> is a supported target")
        .run()
        .await
        .expect("Failed to select Kinds");
    found.sort_by_key(|k| k.id);
    assert_eq!(found, entities);

    // Nullable columns filtered by value
    let mut labeled = Vec::<Box<Kinds>>::new();
    database
        .select(&mut labeled)
        .expect("Vec<Box<Kinds>> is a supported target")
        .filter("label", "first")
        .filter("flag", true)
        .run()
        .await
        .expect("Failed to select Kinds by label");
    assert_eq!(labeled.len(), 1);
    assert_eq!(*labeled[0], entities[0]);

    // Setting a column to NULL
    let result = database
        .update("value_kinds")
        .set("label", None::<String>)
        .filter("id", 1_i64)
        .run()
        .await
        .expect("Failed to clear the label");
    assert_eq!(result.rows_affected, 1);
    let mut entity = Kinds::default();
    database
        .select(&mut entity)
        .expect("Kinds is a supported target")
        .filter("id", 1_i64)
        .run()
        .await
        .expect("Failed to select Kinds");
    assert_eq!(entity.label, None);
    assert_eq!(entity.code, "ABC-001");
}
