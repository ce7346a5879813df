//! Shared fixtures for converter tests.

#![allow(dead_code)]

use docmap_convert::{
    Cardinality, DocumentMapping, GenericRecord, PropertyDescriptor,
};
use std::sync::{Arc, Once};

static TRACING: Once = Once::new();

/// Routes `tracing` output through the test harness.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ── Gift ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gift {
    pub uri: String,
    pub repeat_req: Option<Vec<String>>,
    pub repeat_no_req: Option<Vec<String>>,
    pub req: Option<f32>,
    pub no_req: Option<f32>,
}

pub fn gift_mapping() -> DocumentMapping<Gift> {
    DocumentMapping::<Gift>::builder("Gift", |g| g.uri.as_str(), |g, uri| g.uri = uri)
        .repeated(
            PropertyDescriptor::string("repeatReq", Cardinality::Repeated),
            |g| g.repeat_req.as_deref(),
            |g, v| g.repeat_req = v,
        )
        .unwrap()
        .repeated(
            PropertyDescriptor::string("repeatNoReq", Cardinality::Repeated),
            |g| g.repeat_no_req.as_deref(),
            |g, v| g.repeat_no_req = v,
        )
        .unwrap()
        .scalar(
            PropertyDescriptor::double("req", Cardinality::Required),
            |g| g.req.as_ref(),
            |g, v| g.req = v,
        )
        .unwrap()
        .scalar(
            PropertyDescriptor::double("noReq", Cardinality::Optional),
            |g| g.no_req.as_ref(),
            |g, v| g.no_req = v,
        )
        .unwrap()
        .build()
        .unwrap()
}

pub fn sample_gift() -> Gift {
    Gift {
        uri: "u1".to_string(),
        repeat_req: Some(vec!["a".to_string(), "b".to_string()]),
        repeat_no_req: None,
        req: Some(3.5),
        no_req: None,
    }
}

// ── Person / Wishlist (nested documents) ─────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub uri: String,
    pub name: Option<String>,
    pub age: Option<i32>,
}

pub fn person_mapping() -> DocumentMapping<Person> {
    DocumentMapping::<Person>::builder("Person", |p| p.uri.as_str(), |p, uri| p.uri = uri)
        .scalar(
            PropertyDescriptor::string("name", Cardinality::Required),
            |p| p.name.as_ref(),
            |p, v| p.name = v,
        )
        .unwrap()
        .scalar(
            PropertyDescriptor::int64("age", Cardinality::Optional),
            |p| p.age.as_ref(),
            |p, v| p.age = v,
        )
        .unwrap()
        .build()
        .unwrap()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    pub uri: String,
    pub owner: Option<Person>,
    pub friends: Option<Vec<Person>>,
}

pub fn wishlist_mapping(people: Arc<DocumentMapping<Person>>) -> DocumentMapping<Wishlist> {
    DocumentMapping::<Wishlist>::builder("Wishlist", |w| w.uri.as_str(), |w, uri| w.uri = uri)
        .nested(
            PropertyDescriptor::document("owner", "Person", Cardinality::Optional),
            Arc::clone(&people),
            |w| w.owner.as_ref(),
            |w, v| w.owner = v,
        )
        .unwrap()
        .nested_repeated(
            PropertyDescriptor::document("friends", "Person", Cardinality::Repeated),
            people,
            |w| w.friends.as_deref(),
            |w, v| w.friends = v,
        )
        .unwrap()
        .build()
        .unwrap()
}

// ── Kitchen sink: every field kind ───────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    pub uri: String,
    pub name: Option<String>,
    pub count: Option<i32>,
    pub total: Option<i64>,
    pub ratio: Option<f64>,
    pub score: Option<f32>,
    pub flag: Option<bool>,
    pub blob: Option<Vec<u8>>,
    pub attachment: Option<GenericRecord>,
    pub tags: Option<Vec<String>>,
    pub ints: Option<Vec<i32>>,
    pub longs: Option<Vec<i64>>,
    pub floats: Option<Vec<f32>>,
    pub doubles: Option<Vec<f64>>,
    pub bools: Option<Vec<bool>>,
    pub blobs: Option<Vec<Vec<u8>>>,
}

pub fn sample_mapping() -> DocumentMapping<Sample> {
    DocumentMapping::<Sample>::builder("Sample", |s| s.uri.as_str(), |s, uri| s.uri = uri)
        .scalar(
            PropertyDescriptor::string("name", Cardinality::Required),
            |s| s.name.as_ref(),
            |s, v| s.name = v,
        )
        .unwrap()
        .scalar(
            PropertyDescriptor::int64("count", Cardinality::Optional),
            |s| s.count.as_ref(),
            |s, v| s.count = v,
        )
        .unwrap()
        .scalar(
            PropertyDescriptor::int64("total", Cardinality::Required),
            |s| s.total.as_ref(),
            |s, v| s.total = v,
        )
        .unwrap()
        .scalar(
            PropertyDescriptor::double("ratio", Cardinality::Optional),
            |s| s.ratio.as_ref(),
            |s, v| s.ratio = v,
        )
        .unwrap()
        .scalar(
            PropertyDescriptor::double("score", Cardinality::Optional),
            |s| s.score.as_ref(),
            |s, v| s.score = v,
        )
        .unwrap()
        .scalar(
            PropertyDescriptor::boolean("flag", Cardinality::Optional),
            |s| s.flag.as_ref(),
            |s, v| s.flag = v,
        )
        .unwrap()
        .scalar(
            PropertyDescriptor::bytes("blob", Cardinality::Optional),
            |s| s.blob.as_ref(),
            |s, v| s.blob = v,
        )
        .unwrap()
        .scalar(
            PropertyDescriptor::document("attachment", "Attachment", Cardinality::Optional),
            |s| s.attachment.as_ref(),
            |s, v| s.attachment = v,
        )
        .unwrap()
        .repeated(
            PropertyDescriptor::string("tags", Cardinality::Repeated),
            |s| s.tags.as_deref(),
            |s, v| s.tags = v,
        )
        .unwrap()
        .repeated(
            PropertyDescriptor::int64("ints", Cardinality::Repeated),
            |s| s.ints.as_deref(),
            |s, v| s.ints = v,
        )
        .unwrap()
        .repeated(
            PropertyDescriptor::int64("longs", Cardinality::Repeated),
            |s| s.longs.as_deref(),
            |s, v| s.longs = v,
        )
        .unwrap()
        .repeated(
            PropertyDescriptor::double("floats", Cardinality::Repeated),
            |s| s.floats.as_deref(),
            |s, v| s.floats = v,
        )
        .unwrap()
        .repeated(
            PropertyDescriptor::double("doubles", Cardinality::Repeated),
            |s| s.doubles.as_deref(),
            |s, v| s.doubles = v,
        )
        .unwrap()
        .repeated(
            PropertyDescriptor::boolean("bools", Cardinality::Repeated),
            |s| s.bools.as_deref(),
            |s, v| s.bools = v,
        )
        .unwrap()
        .repeated(
            PropertyDescriptor::bytes("blobs", Cardinality::Repeated),
            |s| s.blobs.as_deref(),
            |s, v| s.blobs = v,
        )
        .unwrap()
        .build()
        .unwrap()
}
