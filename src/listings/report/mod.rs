//! Human-readable and tabular renderings of a [`ComputerRecord`].
//!
//! None of these views fail on missing data: absent values render as `Unknown` or `N/A`
//! in the report, vanish from the summary line, and become empty cells in rows.

mod export;
mod views;

pub use export::write_csv;
pub use views::{ListingTuple, ROW_HEADER};

use std::fmt;

use super::domain::ComputerFields;
use super::hardware::ComponentSpec;
use super::record::ComputerRecord;

const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";
const TIMESTAMP_FORMAT: &str = "%m/%d/%Y at %H:%M";

fn money(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |amount| format!("${amount}"))
}

/// `15.6" HP Victus 15 Laptop`. A missing brand becomes `brand_placeholder` when one is
/// given and is dropped otherwise; other unknown parts are always dropped.
fn identity(fields: &ComputerFields, brand_placeholder: Option<&str>) -> String {
    let mut parts = Vec::with_capacity(4);
    if let Some(screen) = fields.screen {
        parts.push(format!("{screen}\""));
    }
    parts.extend(
        fields
            .brand
            .clone()
            .or_else(|| brand_placeholder.map(str::to_string)),
    );
    parts.extend(fields.name.clone());
    parts.push(fields.style.label().to_string());
    parts.join(" ")
}

fn dimensions_line(fields: &ComputerFields) -> String {
    let weight = fields
        .weight
        .map_or_else(|| UNKNOWN.to_string(), |weight| weight.to_string());
    let dimensions = match (
        fields.dimensions.length(),
        fields.dimensions.width(),
        fields.dimensions.thickness(),
    ) {
        (Some(length), Some(width), Some(thickness)) => {
            format!("{length} x {width} x {thickness} (L x W x T)")
        }
        _ => "Unknown Dimensions".to_string(),
    };
    format!("Size: {weight} lb & {dimensions}")
}

fn features_line(fields: &ComputerFields) -> String {
    let present: Vec<&str> = [
        ("Keypad", fields.keypad),
        ("Webcam", fields.webcam),
        ("Backlit", fields.backlit),
    ]
    .into_iter()
    .filter_map(|(label, flag)| flag.then_some(label))
    .collect();

    if present.is_empty() {
        "Features include: None".to_string()
    } else {
        format!("Features include: {}", present.join(", "))
    }
}

fn component<C: ComponentSpec>(spec: &C) -> Option<String> {
    spec.is_branded().then(|| spec.render())
}

fn memory(fields: &ComputerFields) -> Option<String> {
    let size = fields.ram.size()?;
    Some(match fields.ram.kind() {
        Some(kind) => format!("{size} GB of {kind}"),
        None => format!("{size} GB"),
    })
}

fn storage(fields: &ComputerFields) -> Option<String> {
    let size = fields.storage.size()?;
    Some(match fields.storage.medium() {
        Some(medium) => format!("{size} GB {medium}"),
        None => format!("{size} GB"),
    })
}

impl ComputerRecord {
    /// Multi-line listing report; also the record's `Display` output.
    pub fn report(&self) -> String {
        let fields = self.fields();
        let rating = fields
            .rating
            .map_or_else(|| format!("{NOT_AVAILABLE} Stars"), |rating| format!("{rating} Stars"));
        let not_available = || NOT_AVAILABLE.to_string();

        let lines = [
            format!(
                "{}, {rating} & {} Reviews",
                identity(fields, Some(UNKNOWN)),
                fields.reviews
            ),
            format!(
                "{}, with {}% off and a MSRP of {}",
                money(fields.price),
                fields.sale,
                money(fields.msrp)
            ),
            String::new(),
            dimensions_line(fields),
            format!(
                "Resolution: {} x {} px (W x H) at {} Hz",
                fields.resolution.width(),
                fields.resolution.height(),
                fields.refresh
            ),
            features_line(fields),
            String::new(),
            format!("CPU: {}", component(&fields.cpu).unwrap_or_else(not_available)),
            format!("GPU: {}", component(&fields.gpu).unwrap_or_else(not_available)),
            format!("RAM: {}", memory(fields).unwrap_or_else(not_available)),
            format!("Storage: {}", storage(fields).unwrap_or_else(not_available)),
            String::new(),
            format!("URL: {}", fields.url.as_deref().unwrap_or(NOT_AVAILABLE)),
            format!(
                "Last Checked on {}",
                self.timestamp().format(TIMESTAMP_FORMAT)
            ),
        ];
        lines.join("\n")
    }

    /// `$price, identity, cpu, gpu, ram, storage` with absent groups dropped.
    pub fn summary_line(&self) -> String {
        let fields = self.fields();
        let mut summary = String::new();
        if let Some(price) = fields.price {
            summary.push_str(&format!("${price}, "));
        }
        summary.push_str(&identity(fields, None));

        let groups = [
            component(&fields.cpu),
            component(&fields.gpu),
            memory(fields),
            storage(fields),
        ];
        for group in groups.into_iter().flatten() {
            summary.push_str(", ");
            summary.push_str(&group);
        }
        summary
    }
}

impl fmt::Display for ComputerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report())
    }
}
