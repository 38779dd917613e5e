use serde_json::{json, Map, Value};

use crate::listings::domain::{ComputerFields, MemorySpec, Resolution, StorageSpec};
use crate::listings::hardware::{CpuSpec, GpuSpec};
use crate::listings::record::ComputerRecord;

pub(super) const CHECKED_AT: &str = "2025-07-22T13:44:49Z";

pub(super) fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

pub(super) fn victus_fields() -> ComputerFields {
    ComputerFields {
        brand: Some("HP".to_string()),
        rating: Some(4.5),
        reviews: 92,
        price: Some(653.0),
        msrp: Some(653.0),
        sale: 0,
        refresh: 144,
        resolution: Resolution(1920, 1080),
        keypad: true,
        webcam: true,
        backlit: true,
        cpu: CpuSpec {
            brand: Some("Intel".to_string()),
            family: Some(5),
            generation: Some(12),
            model: Some(450),
            suffix: Some("H".to_string()),
        },
        gpu: GpuSpec {
            brand: Some("NVIDIA".to_string()),
            series: Some("GeForce RTX".to_string()),
            generation: Some(30),
            performance: Some(50),
            suffix: Some(String::new()),
        },
        ram: MemorySpec(Some(16), Some("DDR4".to_string())),
        storage: StorageSpec(Some(1000), Some("SSD".to_string())),
        ..ComputerFields::default()
    }
}

pub(super) fn victus() -> ComputerRecord {
    ComputerRecord::new(victus_fields()).expect("victus listing is valid")
}

/// The victus listing as stored JSON, with a fixed check time and a stale score.
pub(super) fn victus_json() -> Value {
    json!({
        "brand": "HP",
        "name": null,
        "style": "Laptop",
        "rating": 4.5,
        "reviews": 92,
        "price": 653.0,
        "msrp": 653.0,
        "sale": 0,
        "weight": null,
        "dimensions": [null, null, null],
        "screen": null,
        "resolution": [1920, 1080],
        "refresh": 144,
        "keypad": true,
        "webcam": true,
        "backlit": true,
        "cpu": {"brand": "intel", "family": 5, "generation": 12, "model": 450, "suffix": "h"},
        "gpu": {"brand": "NVIDIA", "series": "GeForce RTX", "generation": 30, "performance": 50, "suffix": ""},
        "ram": [16, "DDR4"],
        "storage": [1000, "SSD"],
        "url": null,
        "timestamp": CHECKED_AT,
        "score": 12.0
    })
}

pub(super) fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}
