use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::changes::ComputerChanges;
use super::domain::ComputerFields;
use super::error::{LoadError, ValidationError};
use super::intake::{decode_changes, ProductListing, UnknownFieldPolicy};
use super::scoring::{ScoreBreakdown, ScoringEngine};

/// A validated, scored computer listing.
///
/// Every constructor and mutator validates before the new state becomes visible, so a
/// record always satisfies its invariants and its score always matches its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord")]
pub struct ComputerRecord {
    #[serde(flatten)]
    fields: ComputerFields,
    timestamp: DateTime<Utc>,
    score: f64,
}

/// Shape of a serialized listing before validation. A stored `score` is dropped.
#[derive(Debug, Deserialize)]
struct StoredRecord {
    #[serde(flatten)]
    fields: ComputerFields,
    #[serde(default = "Utc::now")]
    timestamp: DateTime<Utc>,
}

impl TryFrom<StoredRecord> for ComputerRecord {
    type Error = ValidationError;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        let mut fields = stored.fields;
        fields.validate()?;
        let score = ScoringEngine.score(&fields);
        Ok(Self {
            fields,
            timestamp: stored.timestamp,
            score,
        })
    }
}

impl Default for ComputerRecord {
    fn default() -> Self {
        let fields = ComputerFields::default();
        let score = ScoringEngine.score(&fields);
        Self {
            fields,
            timestamp: Utc::now(),
            score,
        }
    }
}

impl ComputerRecord {
    pub fn new(mut fields: ComputerFields) -> Result<Self, ValidationError> {
        fields.validate()?;
        let mut record = Self {
            fields,
            timestamp: Utc::now(),
            score: 0.0,
        };
        record.commit();
        Ok(record)
    }

    pub fn from_changes(changes: ComputerChanges) -> Result<Self, ValidationError> {
        let mut fields = ComputerFields::default();
        changes.apply_to(&mut fields);
        Self::new(fields)
    }

    /// Build a record from a loose field map, ignoring unknown keys.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        Self::from_map_with(map, UnknownFieldPolicy::default())
    }

    pub fn from_map_with(
        map: &Map<String, Value>,
        policy: UnknownFieldPolicy,
    ) -> Result<Self, ValidationError> {
        let decoded = decode_changes(map, policy)?;
        Self::from_changes(decoded.changes)
    }

    /// Build a record from a legacy flat product row.
    pub fn from_product(listing: ProductListing) -> Result<Self, ValidationError> {
        Self::from_changes(listing.into_changes()?)
    }

    /// Load a serialized listing. The stored timestamp is kept; the score is recomputed.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let stored: StoredRecord = serde_json::from_str(json)?;
        Ok(Self::try_from(stored)?)
    }

    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        let stored: StoredRecord = serde_json::from_value(value)?;
        Ok(Self::try_from(stored)?)
    }

    pub fn fields(&self) -> &ComputerFields {
        &self.fields
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn score_breakdown(&self) -> ScoreBreakdown {
        ScoringEngine.breakdown(&self.fields)
    }

    /// Re-run validation, refreshing score and timestamp.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.fields.validate()?;
        self.commit();
        Ok(())
    }

    /// Apply every change or none of them.
    pub fn apply(&mut self, changes: ComputerChanges) -> Result<(), ValidationError> {
        let mut candidate = self.fields.clone();
        changes.apply_to(&mut candidate);
        if let Err(error) = candidate.validate() {
            debug!(field = error.field(), kind = %error.kind(), "listing update rejected");
            return Err(error);
        }
        self.fields = candidate;
        self.commit();
        Ok(())
    }

    /// Decode and apply a loose field map; returns the keys that were ignored.
    pub fn apply_map(&mut self, map: &Map<String, Value>) -> Result<Vec<String>, ValidationError> {
        self.apply_map_with(map, UnknownFieldPolicy::default())
    }

    pub fn apply_map_with(
        &mut self,
        map: &Map<String, Value>,
        policy: UnknownFieldPolicy,
    ) -> Result<Vec<String>, ValidationError> {
        let decoded = decode_changes(map, policy)?;
        self.apply(decoded.changes)?;
        Ok(decoded.ignored)
    }

    fn commit(&mut self) {
        self.score = ScoringEngine.score(&self.fields);
        self.timestamp = Utc::now();
        debug!(
            brand = self.fields.brand.as_deref().unwrap_or("unknown"),
            name = self.fields.name.as_deref().unwrap_or("unknown"),
            score = self.score,
            "listing validated"
        );
    }
}
