//! Processor and graphics sub-records.
//!
//! Both component kinds share the same lifecycle: raw optional fields go in, `validate`
//! canonicalizes brand and suffix casing according to the brand profile table in
//! [`brands`], and `render` produces the label used by the listing views.

pub mod brands;
mod cpu;
mod gpu;

pub use brands::{CpuBrand, GpuBrand, SuffixCase};
pub use cpu::CpuSpec;
pub use gpu::GpuSpec;

use super::error::ValidationError;

/// Behavior shared by the CPU and GPU sub-records.
pub trait ComponentSpec {
    /// Field prefix used in validation errors (`cpu`, `gpu`).
    const KIND: &'static str;

    /// Check every field and canonicalize in place. Running it twice is a no-op.
    fn validate(&mut self) -> Result<(), ValidationError>;

    fn render(&self) -> String;

    /// True once a recognized brand is recorded.
    fn is_branded(&self) -> bool;
}

/// Trim a free-text value and drop it when nothing is left.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(brands::collapse_whitespace)
        .filter(|value| !value.is_empty())
}

pub(crate) fn normalize_suffix(value: Option<&str>, case: SuffixCase) -> Option<String> {
    non_blank(value).map(|suffix| case.apply(&suffix))
}

pub(crate) fn ordinal(value: u32) -> String {
    let suffix = match (value % 10, value % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{value}{suffix}")
}
