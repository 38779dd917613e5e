//! Retail computer listings: validated records, hardware canonicalization, value
//! scoring, and the views used to publish them.

pub mod changes;
pub mod domain;
pub mod error;
pub mod hardware;
pub mod intake;
pub mod record;
pub mod report;
pub mod scoring;

pub use changes::ComputerChanges;
pub use domain::{
    ComputerFields, ComputerStyle, Dimensions, MemorySpec, Resolution, StorageSpec,
};
pub use error::{ExportError, LoadError, ValidationError, ValidationErrorKind};
pub use hardware::{ComponentSpec, CpuBrand, CpuSpec, GpuBrand, GpuSpec};
pub use intake::{decode_changes, DecodedChanges, ProductListing, UnknownFieldPolicy};
pub use record::ComputerRecord;
pub use report::{write_csv, ListingTuple, ROW_HEADER};
pub use scoring::{ScoreBreakdown, ScoreComponent, ScoreFactor, ScoringEngine};

#[cfg(test)]
mod tests;
