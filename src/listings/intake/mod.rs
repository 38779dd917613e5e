//! Decoding of loosely typed listing input into a [`ComputerChanges`] set.
//!
//! Scrapers hand us JSON objects whose values are not always the expected kind: prices
//! as strings, feature flags as `"Yes"`, CPUs as legacy five-element arrays. Every value
//! is decoded here, so the record itself only ever sees typed changes.

mod legacy;
mod values;

pub use legacy::ProductListing;

use serde_json::{Map, Value};
use tracing::warn;

use super::changes::ComputerChanges;
use super::error::ValidationError;

/// Keys present on serialized listings that callers may not assign.
pub const READ_ONLY_FIELDS: &[&str] = &["timestamp", "score"];

/// What to do with keys that name no listing field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFieldPolicy {
    #[default]
    Ignore,
    Reject,
}

impl UnknownFieldPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ignore" | "lenient" => Some(Self::Ignore),
            "reject" | "strict" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Decoded changes plus the keys that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedChanges {
    pub changes: ComputerChanges,
    pub ignored: Vec<String>,
}

pub fn decode_changes(
    map: &Map<String, Value>,
    policy: UnknownFieldPolicy,
) -> Result<DecodedChanges, ValidationError> {
    let mut changes = ComputerChanges::default();
    let mut ignored = Vec::new();

    for (key, value) in map {
        let field = key.as_str();
        match field {
            "brand" => changes.brand = Some(values::optional_text(field, value)?),
            "name" => changes.name = Some(values::optional_text(field, value)?),
            "style" => changes.style = Some(values::style(field, value)?),
            "rating" => changes.rating = Some(values::optional_float(field, value)?),
            "reviews" => {
                changes.reviews =
                    Some(values::narrow(field, values::required_count(field, value)?)?)
            }
            "price" => changes.price = Some(values::optional_float(field, value)?),
            "msrp" => changes.msrp = Some(values::optional_float(field, value)?),
            "sale" => {
                let sale = values::required_count(field, value)?;
                if sale > 100 {
                    return Err(ValidationError::range(
                        field,
                        sale,
                        "must be between 0 and 100",
                    ));
                }
                changes.sale = Some(values::narrow(field, sale)?);
            }
            "weight" => changes.weight = Some(values::optional_float(field, value)?),
            "dimensions" => changes.dimensions = Some(values::dimensions(field, value)?),
            "screen" => changes.screen = Some(values::optional_float(field, value)?),
            "resolution" => changes.resolution = Some(values::resolution(field, value)?),
            "refresh" => {
                changes.refresh =
                    Some(values::narrow(field, values::required_count(field, value)?)?)
            }
            "keypad" => changes.keypad = Some(values::flag(field, value)?),
            "webcam" => changes.webcam = Some(values::flag(field, value)?),
            "backlit" => changes.backlit = Some(values::flag(field, value)?),
            "cpu" => changes.cpu = Some(values::cpu(field, value)?),
            "gpu" => changes.gpu = Some(values::gpu(field, value)?),
            "ram" => changes.ram = Some(values::memory(field, value)?),
            "storage" => changes.storage = Some(values::storage(field, value)?),
            "url" => changes.url = Some(values::optional_text(field, value)?),
            _ if READ_ONLY_FIELDS.contains(&field) => {
                warn!(field, "ignoring read-only listing field");
                ignored.push(key.clone());
            }
            _ => match policy {
                UnknownFieldPolicy::Ignore => {
                    warn!(field, "ignoring unknown listing field");
                    ignored.push(key.clone());
                }
                UnknownFieldPolicy::Reject => {
                    return Err(ValidationError::UnknownField { field: key.clone() });
                }
            },
        }
    }

    Ok(DecodedChanges { changes, ignored })
}
