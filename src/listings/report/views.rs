use serde::Serialize;

use crate::listings::domain::{ComputerStyle, MemorySpec, Resolution, StorageSpec};
use crate::listings::hardware::{CpuSpec, GpuSpec};
use crate::listings::record::ComputerRecord;

/// Column names of [`ComputerRecord::to_row`], in order.
pub const ROW_HEADER: [&str; 36] = [
    "brand",
    "name",
    "style",
    "rating",
    "reviews",
    "price",
    "msrp",
    "sale",
    "weight",
    "length",
    "width",
    "thickness",
    "screen",
    "resolution_width",
    "resolution_height",
    "refresh",
    "keypad",
    "webcam",
    "backlit",
    "cpu_brand",
    "cpu_family",
    "cpu_generation",
    "cpu_model",
    "cpu_suffix",
    "gpu_brand",
    "gpu_series",
    "gpu_generation",
    "gpu_performance",
    "gpu_suffix",
    "ram_size",
    "ram_type",
    "storage_size",
    "storage_medium",
    "url",
    "timestamp",
    "score",
];

/// Compact positional view: price, identity, display, cpu, gpu, ram, storage.
///
/// Serializes as a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingTuple(
    pub Option<f64>,
    pub (Option<String>, Option<String>, ComputerStyle),
    pub (Option<f64>, Resolution, u32),
    pub CpuSpec,
    pub GpuSpec,
    pub MemorySpec,
    pub StorageSpec,
);

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

impl ComputerRecord {
    pub fn to_tuple(&self) -> ListingTuple {
        let fields = self.fields();
        ListingTuple(
            fields.price,
            (fields.brand.clone(), fields.name.clone(), fields.style),
            (fields.screen, fields.resolution, fields.refresh),
            fields.cpu.clone(),
            fields.gpu.clone(),
            fields.ram.clone(),
            fields.storage.clone(),
        )
    }

    /// One string per [`ROW_HEADER`] column; absent values are empty strings.
    pub fn to_row(&self) -> Vec<String> {
        let fields = self.fields();
        let (cpu, gpu) = (&fields.cpu, &fields.gpu);
        vec![
            text(fields.brand.as_ref()),
            text(fields.name.as_ref()),
            fields.style.label().to_string(),
            cell(fields.rating),
            fields.reviews.to_string(),
            cell(fields.price),
            cell(fields.msrp),
            fields.sale.to_string(),
            cell(fields.weight),
            cell(fields.dimensions.length()),
            cell(fields.dimensions.width()),
            cell(fields.dimensions.thickness()),
            cell(fields.screen),
            fields.resolution.width().to_string(),
            fields.resolution.height().to_string(),
            fields.refresh.to_string(),
            fields.keypad.to_string(),
            fields.webcam.to_string(),
            fields.backlit.to_string(),
            text(cpu.brand.as_ref()),
            cell(cpu.family),
            cell(cpu.generation),
            cell(cpu.model),
            text(cpu.suffix.as_ref()),
            text(gpu.brand.as_ref()),
            text(gpu.series.as_ref()),
            cell(gpu.generation),
            cell(gpu.performance),
            text(gpu.suffix.as_ref()),
            cell(fields.ram.size()),
            cell(fields.ram.kind()),
            cell(fields.storage.size()),
            cell(fields.storage.medium()),
            text(fields.url.as_ref()),
            self.timestamp().to_rfc3339(),
            self.score().to_string(),
        ]
    }
}
