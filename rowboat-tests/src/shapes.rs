use rowboat::{Connection, ContainerShape, Database, Entity, ErrorKind, Ownership};
use std::{
    collections::{BTreeMap, HashMap},
    sync::LazyLock,
};
use tokio::sync::Mutex;

pub(crate) static MUTEX: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

#[derive(Entity, Default, Debug, Clone, PartialEq)]
pub(crate) struct Boat {
    #[rowboat(primary_key)]
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) length: f64,
    pub(crate) crew: Option<i64>,
}

pub(crate) async fn reset_boats<C: Connection>(database: &Database<C>, boats: &[Boat]) {
    database
        .drop_table(Boat::schema(), true)
        .await
        .expect("Failed to drop the boat table");
    database
        .auto_migrate(&[Boat::schema()])
        .await
        .expect("Failed to create the boat table");
    for boat in boats {
        database
            .insert(boat)
            .expect("Boat must be insertable")
            .run()
            .await
            .expect("Failed to insert a boat");
    }
}

pub(crate) fn fleet() -> Vec<Boat> {
    vec![
        Boat {
            id: 1,
            name: "Argo".into(),
            length: 32.5,
            crew: Some(50),
        },
        Boat {
            id: 2,
            name: "Nautilus".into(),
            length: 70.0,
            crew: None,
        },
        Boat {
            id: 3,
            name: "Pequod".into(),
            length: 27.25,
            crew: Some(30),
        },
    ]
}

pub async fn shapes<C: Connection>(database: &Database<C>) {
    let _lock = MUTEX.lock().await;
    let fleet = fleet();
    reset_boats(database, &fleet).await;

    // &mut Boat
    let mut boat = Boat::default();
    let select = database
        .select(&mut boat)
        .expect("Boat is a supported target")
        .filter("name", "Nautilus");
    assert_eq!(select.descriptor().container, ContainerShape::SingleValue);
    assert_eq!(select.descriptor().table_name, "boat");
    select.run().await.expect("Failed to select into Boat");
    assert_eq!(boat, fleet[1]);

    // &mut Option<Box<Boat>>
    let mut boxed: Option<Box<Boat>> = None;
    let select = database
        .select(&mut boxed)
        .expect("Option<Box<Boat>> is a supported target")
        .filter("id", 3);
    assert_eq!(select.descriptor().container, ContainerShape::SinglePointer);
    assert_eq!(select.descriptor().ownership, Ownership::Pointer);
    select
        .run()
        .await
        .expect("Failed to select into Option<Box<Boat>>");
    assert_eq!(boxed.as_deref(), Some(&fleet[2]));

    // &mut Vec<Boat>
    let mut boats = Vec::<Boat>::new();
    database
        .select(&mut boats)
        .expect("Vec<Boat> is a supported target")
        .run()
        .await
        .expect("Failed to select into Vec<Boat>");
    boats.sort_by_key(|b| b.id);
    assert_eq!(boats, fleet);

    // &mut Vec<Box<Boat>>
    let mut boats = Vec::<Box<Boat>>::new();
    let select = database
        .select(&mut boats)
        .expect("Vec<Box<Boat>> is a supported target")
        .filter("crew", 30_i64);
    assert_eq!(select.descriptor().container, ContainerShape::SliceOfPointer);
    select
        .run()
        .await
        .expect("Failed to select into Vec<Box<Boat>>");
    assert_eq!(boats.len(), 1);
    assert_eq!(*boats[0], fleet[2]);

    // Rows are appended to what the vector already holds
    let mut boats = vec![fleet[0].clone()];
    database
        .select(&mut boats)
        .expect("Vec<Boat> is a supported target")
        .filter("id", 1)
        .run()
        .await
        .expect("Failed to append to Vec<Boat>");
    assert_eq!(boats, [fleet[0].clone(), fleet[0].clone()]);

    // Scalars
    let mut count = 0_i64;
    database
        .raw("SELECT COUNT(*) FROM boat")
        .model(&mut count)
        .expect("i64 is a supported target")
        .run()
        .await
        .expect("Failed to count the boats");
    assert_eq!(count, 3);
    let mut name = String::new();
    database
        .raw("SELECT name FROM boat WHERE id = $1")
        .bind(1)
        .model(&mut name)
        .expect("String is a supported target")
        .run()
        .await
        .expect("Failed to select a name");
    assert_eq!(name, "Argo");

    // Rejected before anything is sent
    let mut map = HashMap::<String, Boat>::new();
    let error = database
        .select(&mut map)
        .err()
        .expect("HashMap is not a supported target");
    assert!(matches!(
        ErrorKind::of(&error),
        Some(ErrorKind::UnsupportedModelShape(..))
    ));
    let mut map = BTreeMap::<i32, String>::new();
    assert!(database.select(&mut map).is_err());
    let mut ids = Vec::<i64>::new();
    let error = database
        .raw("SELECT id FROM boat")
        .model(&mut ids)
        .err()
        .expect("Vec<i64> is not a supported target");
    assert!(matches!(
        ErrorKind::of(&error),
        Some(ErrorKind::UnsupportedModelShape(..))
    ));
    assert!(ids.is_empty());
}
