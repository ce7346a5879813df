use docmap_record::{DocumentStore, InMemoryStore, RecordBuilder, StoreError};
use docmap_schema::{Cardinality, PropertyDescriptor, SchemaBuilder, SchemaDescriptor};
use std::sync::Arc;
use std::thread;

fn note_schema() -> SchemaDescriptor {
    SchemaBuilder::new("Note")
        .add_property(PropertyDescriptor::string("title", Cardinality::Optional))
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn put_requires_registered_schema() {
    let store = InMemoryStore::new();
    let record = RecordBuilder::new("n1", "Note").build();
    let err = store.put(record).unwrap_err();
    assert!(matches!(err, StoreError::UnknownSchemaType(t) if t == "Note"));
}

#[test]
fn put_then_get() {
    let store = InMemoryStore::new();
    store.register_schema(&note_schema()).unwrap();

    let record = RecordBuilder::new("n1", "Note")
        .set_property("title", vec!["hello"])
        .build();
    store.put(record.clone()).unwrap();

    assert_eq!(store.get("n1").unwrap(), Some(record));
    assert_eq!(store.get("n2").unwrap(), None);
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn put_replaces_by_uri() {
    let store = InMemoryStore::new();
    store.register_schema(&note_schema()).unwrap();
    store
        .put(RecordBuilder::new("n1", "Note").set_property("title", vec!["a"]).build())
        .unwrap();
    store
        .put(RecordBuilder::new("n1", "Note").set_property("title", vec!["b"]).build())
        .unwrap();

    let stored = store.get("n1").unwrap().unwrap();
    assert_eq!(stored.property_strings("title").unwrap(), &["b".to_string()]);
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn remove_reports_existence() {
    let store = InMemoryStore::new();
    store.register_schema(&note_schema()).unwrap();
    store.put(RecordBuilder::new("n1", "Note").build()).unwrap();

    assert!(store.remove("n1").unwrap());
    assert!(!store.remove("n1").unwrap());
    assert!(store.is_empty().unwrap());
}

#[test]
fn reregistering_identical_schema_is_idempotent() {
    let store = InMemoryStore::new();
    store.register_schema(&note_schema()).unwrap();
    store.register_schema(&note_schema()).unwrap();
    assert_eq!(store.schema("Note").unwrap(), Some(note_schema()));
}

#[test]
fn conflicting_schema_rejected() {
    let store = InMemoryStore::new();
    store.register_schema(&note_schema()).unwrap();

    let other = SchemaBuilder::new("Note")
        .add_property(PropertyDescriptor::int64("title", Cardinality::Required))
        .unwrap()
        .build()
        .unwrap();
    let err = store.register_schema(&other).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateSchemaType(t) if t == "Note"));
}

#[test]
fn concurrent_puts_from_many_threads() {
    let store = Arc::new(InMemoryStore::new());
    store.register_schema(&note_schema()).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let uri = format!("n{i}");
                store.put(RecordBuilder::new(uri, "Note").build()).unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.len().unwrap(), 8);
}
