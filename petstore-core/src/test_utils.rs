//! Test helpers
//!
//! Record fixtures shared by the unit tests.

use serde_json::{json, Value};

use crate::types::{Category, Record, RecordStatus, Tag};

/// The detail fixture: Cooper the dog
pub fn cooper() -> Record {
    Record {
        id: 10,
        name: "Cooper".to_string(),
        status: Some(RecordStatus::Available),
        category: Some(Category {
            id: 26,
            name: Some("Dog".to_string()),
        }),
        tags: vec![Tag {
            id: 60,
            name: "Neutered".to_string(),
        }],
        photo_urls: vec!["/images/Dog.jpg".to_string()],
    }
}

pub fn cooper_json() -> Value {
    json!({
        "id": 10,
        "name": "Cooper",
        "category": { "id": 26, "name": "Dog" },
        "photoUrls": ["/images/Dog.jpg"],
        "tags": [{ "id": 60, "name": "Neutered" }],
        "status": "available"
    })
}

/// Minimal available record as it comes off the wire
pub fn record(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "status": "available" })
}

/// The list fixture: Buddy and Max
pub fn buddy_and_max() -> Value {
    json!([record(1, "Buddy"), record(2, "Max")])
}
