use serde::Deserialize;
use serde_json::Value;

use super::values;
use crate::listings::changes::ComputerChanges;
use crate::listings::domain::{
    ComputerStyle, MemorySpec, Resolution, StorageSpec, DEFAULT_REFRESH_HZ, DEFAULT_RESOLUTION,
    MAX_SALE_PERCENT,
};
use crate::listings::error::ValidationError;
use crate::listings::hardware::{CpuSpec, GpuSpec};

const ORDINAL_ENDINGS: &[&str] = &["st", "nd", "rd", "th"];
const GPU_PERFORMANCE_DIGITS: usize = 2;

/// Flat product row produced by the first generation of listing scrapers.
///
/// CPU and GPU arrive as free text (`"i7 14th gen"`, `"RTX 3060 Ti"`) and are parsed
/// into structured specs by [`ProductListing::into_changes`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductListing {
    pub brand: Option<String>,
    pub name: Option<String>,
    pub style: String,
    pub rating: Option<f64>,
    pub reviews: i64,
    pub price: Option<f64>,
    pub list_price: Option<f64>,
    pub sale: i64,
    pub size: Option<f64>,
    pub resolution_w: i64,
    pub resolution_h: i64,
    pub refresh_rate: i64,
    pub keypad: Value,
    pub webcam: Value,
    pub backlit: Value,
    pub cpu_brand: Option<String>,
    pub cpu: Option<String>,
    pub gpu_brand: Option<String>,
    pub gpu: Option<String>,
    pub ram_type: Option<String>,
    pub ram: Option<i64>,
    pub storage_type: Option<String>,
    pub storage: Option<i64>,
    pub url: Option<String>,
}

impl Default for ProductListing {
    fn default() -> Self {
        Self {
            brand: None,
            name: None,
            style: ComputerStyle::Laptop.label().to_string(),
            rating: None,
            reviews: 0,
            price: None,
            list_price: None,
            sale: 0,
            size: None,
            resolution_w: i64::from(DEFAULT_RESOLUTION.width()),
            resolution_h: i64::from(DEFAULT_RESOLUTION.height()),
            refresh_rate: i64::from(DEFAULT_REFRESH_HZ),
            keypad: Value::Bool(false),
            webcam: Value::Bool(false),
            backlit: Value::Bool(false),
            cpu_brand: None,
            cpu: None,
            gpu_brand: Some("NVIDIA".to_string()),
            gpu: None,
            ram_type: None,
            ram: None,
            storage_type: Some("SSD".to_string()),
            storage: None,
            url: None,
        }
    }
}

impl ProductListing {
    /// Convert into a changeset covering every listing field.
    pub fn into_changes(self) -> Result<ComputerChanges, ValidationError> {
        let style = ComputerStyle::parse(&self.style).ok_or_else(|| {
            ValidationError::range(
                "style",
                &self.style,
                format!("must be one of {}", ComputerStyle::allowed_labels()),
            )
        })?;
        let sale: u8 = count("sale", self.sale)?;
        if sale > MAX_SALE_PERCENT {
            return Err(ValidationError::range(
                "sale",
                sale,
                "must be between 0 and 100",
            ));
        }

        Ok(ComputerChanges {
            brand: Some(self.brand),
            name: Some(self.name),
            style: Some(style),
            rating: Some(self.rating),
            reviews: Some(count("reviews", self.reviews)?),
            price: Some(self.price),
            msrp: Some(self.list_price),
            sale: Some(sale),
            screen: Some(self.size),
            resolution: Some(Resolution(
                count("resolution.width", self.resolution_w)?,
                count("resolution.height", self.resolution_h)?,
            )),
            refresh: Some(count("refresh", self.refresh_rate)?),
            keypad: Some(legacy_flag("keypad", &self.keypad)?),
            webcam: Some(legacy_flag("webcam", &self.webcam)?),
            backlit: Some(legacy_flag("backlit", &self.backlit)?),
            cpu: Some(parse_cpu_label(self.cpu_brand, self.cpu.as_deref())?),
            gpu: Some(parse_gpu_label(self.gpu_brand, self.gpu.as_deref())?),
            ram: Some(MemorySpec(
                self.ram.map(|size| count("ram.size", size)).transpose()?,
                self.ram_type,
            )),
            storage: Some(StorageSpec(
                self.storage
                    .map(|size| count("storage.size", size))
                    .transpose()?,
                self.storage_type,
            )),
            url: Some(self.url),
            ..ComputerChanges::default()
        })
    }
}

fn count<T: TryFrom<i64>>(field: &str, value: i64) -> Result<T, ValidationError> {
    if value < 0 {
        return Err(ValidationError::range(field, value, "must not be negative"));
    }
    T::try_from(value).map_err(|_| ValidationError::range(field, value, "is too large"))
}

fn legacy_flag(field: &str, value: &Value) -> Result<bool, ValidationError> {
    match value {
        Value::Null => Ok(false),
        other => values::flag(field, other),
    }
}

fn is_cpu_brand_word(token: &str) -> Option<&'static str> {
    match token {
        "intel" => Some("Intel"),
        "amd" => Some("AMD"),
        "apple" => Some("Apple"),
        _ => None,
    }
}

fn split_digits(token: &str) -> (&str, &str) {
    let end = token
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(token.len());
    token.split_at(end)
}

fn parse_number<T: std::str::FromStr>(field: &str, digits: &str) -> Result<T, ValidationError> {
    digits
        .parse()
        .map_err(|_| ValidationError::type_mismatch(field, digits, "whole number"))
}

/// Parse a CPU label such as `"i7 14th gen"`, `"i5-12450H"`, `"Ryzen 5 7530U"` or
/// `"M2 Pro"`.
pub(crate) fn parse_cpu_label(
    brand: Option<String>,
    label: Option<&str>,
) -> Result<CpuSpec, ValidationError> {
    let mut spec = CpuSpec {
        brand,
        ..CpuSpec::default()
    };
    let Some(label) = label else {
        return Ok(spec);
    };

    let lowered = label.to_ascii_lowercase().replace('-', " ");
    let mut tokens = lowered.split_whitespace().peekable();
    let mut suffix_words = Vec::new();

    while let Some(token) = tokens.next() {
        if let Some(canonical) = is_cpu_brand_word(token) {
            spec.brand.get_or_insert_with(|| canonical.to_string());
            continue;
        }
        match token {
            "core" | "gen" | "generation" | "processor" => continue,
            "ryzen" => {
                spec.brand.get_or_insert_with(|| "AMD".to_string());
                if let Some(next) = tokens.next_if(|next| next.chars().all(|c| c.is_ascii_digit()))
                {
                    spec.family = Some(parse_number("cpu.family", next)?);
                }
                continue;
            }
            _ => {}
        }

        let (digits, rest) = split_digits(token);
        if digits.is_empty() {
            if let Some(code) = token.strip_prefix('i').filter(|code| is_single_digit(code)) {
                spec.family = Some(parse_number("cpu.family", code)?);
            } else if let Some(code) = token.strip_prefix('m').filter(|code| is_single_digit(code))
            {
                spec.brand.get_or_insert_with(|| "Apple".to_string());
                spec.family = Some(parse_number("cpu.family", code)?);
            } else if token.chars().all(|c| c.is_ascii_alphabetic()) {
                suffix_words.push(token.to_string());
            } else {
                return Err(ValidationError::type_mismatch("cpu", label, "cpu label"));
            }
            continue;
        }

        if ORDINAL_ENDINGS.contains(&rest) {
            spec.generation = Some(parse_number("cpu.generation", digits)?);
            continue;
        }
        if !rest.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::type_mismatch("cpu", label, "cpu label"));
        }
        if !rest.is_empty() {
            suffix_words.push(rest.to_string());
        }
        match digits.len() {
            5 => {
                spec.generation = Some(parse_number("cpu.generation", &digits[..2])?);
                spec.model = Some(parse_number("cpu.model", &digits[2..])?);
            }
            4 => {
                spec.generation = Some(parse_number("cpu.generation", &digits[..1])?);
                spec.model = Some(parse_number("cpu.model", &digits[1..])?);
            }
            _ => spec.model = Some(parse_number("cpu.model", digits)?),
        }
    }

    if !suffix_words.is_empty() {
        spec.suffix = Some(suffix_words.join(" "));
    }
    Ok(spec)
}

fn is_single_digit(code: &str) -> bool {
    code.len() == 1 && code.chars().all(|c| c.is_ascii_digit())
}

fn gpu_brand_word(token: &str) -> Option<&'static str> {
    match token.to_ascii_lowercase().as_str() {
        "nvidia" => Some("NVIDIA"),
        "amd" | "radeon" => Some("Radeon"),
        "intel" => Some("Intel"),
        "apple" => Some("Apple"),
        _ => None,
    }
}

/// Parse a GPU label such as `"RTX 3060 Ti"`, `"GeForce RTX 4070"` or `"Iris Xe"`.
///
/// A brand named inside the label wins over the row's `gpuBrand` column, which the
/// legacy producer filled with NVIDIA by default.
pub(crate) fn parse_gpu_label(
    brand: Option<String>,
    label: Option<&str>,
) -> Result<GpuSpec, ValidationError> {
    let mut spec = GpuSpec {
        brand,
        ..GpuSpec::default()
    };
    let Some(label) = label else {
        return Ok(spec);
    };

    let mut series = Vec::new();
    let mut suffix = Vec::new();
    for token in label.split_whitespace() {
        if let Some(canonical) = gpu_brand_word(token) {
            spec.brand = Some(canonical.to_string());
            continue;
        }
        let is_number = token.len() > GPU_PERFORMANCE_DIGITS
            && token.chars().all(|c| c.is_ascii_digit());
        if is_number && spec.generation.is_none() {
            let (generation, performance) = token.split_at(token.len() - GPU_PERFORMANCE_DIGITS);
            spec.generation = Some(parse_number("gpu.generation", generation)?);
            spec.performance = Some(parse_number("gpu.performance", performance)?);
        } else if spec.generation.is_some() {
            suffix.push(token);
        } else {
            series.push(token);
        }
    }

    if !series.is_empty() {
        spec.series = Some(series.join(" "));
    }
    if !suffix.is_empty() {
        spec.suffix = Some(suffix.join(" "));
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::error::ValidationErrorKind;
    use serde_json::json;

    #[test]
    fn intel_labels_parse() {
        let spec = parse_cpu_label(Some("Intel".into()), Some("i7 14th gen")).expect("label");
        assert_eq!(spec.family, Some(7));
        assert_eq!(spec.generation, Some(14));
        assert_eq!(spec.model, None);

        let spec = parse_cpu_label(None, Some("Intel Core i5-12450H")).expect("label");
        assert_eq!(spec.brand.as_deref(), Some("Intel"));
        assert_eq!(spec.family, Some(5));
        assert_eq!(spec.generation, Some(12));
        assert_eq!(spec.model, Some(450));
        assert_eq!(spec.suffix.as_deref(), Some("h"));

        let spec = parse_cpu_label(None, Some("i3 8130U")).expect("four digits");
        assert_eq!(spec.generation, Some(8));
        assert_eq!(spec.model, Some(130));
    }

    #[test]
    fn amd_and_apple_labels_parse() {
        let spec = parse_cpu_label(None, Some("Ryzen 5 7530U")).expect("ryzen");
        assert_eq!(spec.brand.as_deref(), Some("AMD"));
        assert_eq!(spec.family, Some(5));
        assert_eq!(spec.generation, Some(7));
        assert_eq!(spec.model, Some(530));

        let spec = parse_cpu_label(None, Some("M2 Pro")).expect("apple");
        assert_eq!(spec.brand.as_deref(), Some("Apple"));
        assert_eq!(spec.family, Some(2));
        assert_eq!(spec.suffix.as_deref(), Some("pro"));
    }

    #[test]
    fn garbled_cpu_label_is_a_type_mismatch() {
        let error = parse_cpu_label(None, Some("i7 @ 2.4GHz")).expect_err("garbled");
        assert_eq!(error.kind(), ValidationErrorKind::TypeMismatch);
        assert_eq!(error.field(), "cpu");
    }

    #[test]
    fn gpu_labels_split_model_number() {
        let spec = parse_gpu_label(Some("NVIDIA".into()), Some("RTX 3060 Ti")).expect("rtx");
        assert_eq!(spec.brand.as_deref(), Some("NVIDIA"));
        assert_eq!(spec.series.as_deref(), Some("RTX"));
        assert_eq!(spec.generation, Some(30));
        assert_eq!(spec.performance, Some(60));
        assert_eq!(spec.suffix.as_deref(), Some("Ti"));

        let spec = parse_gpu_label(Some("NVIDIA".into()), Some("Radeon RX 7600")).expect("rx");
        assert_eq!(spec.brand.as_deref(), Some("Radeon"));
        assert_eq!(spec.generation, Some(76));
        assert_eq!(spec.performance, Some(0));

        let spec = parse_gpu_label(Some("Intel".into()), Some("Iris Xe")).expect("iris");
        assert_eq!(spec.series.as_deref(), Some("Iris Xe"));
        assert_eq!(spec.generation, None);
    }

    #[test]
    fn product_row_converts_with_legacy_defaults() {
        let listing: ProductListing = serde_json::from_value(json!({
            "brand": "HP",
            "name": "Victus 15",
            "price": 653,
            "listPrice": 800,
            "size": 15.6,
            "refreshRate": 144,
            "keypad": 1,
            "webcam": "Yes",
            "cpuBrand": "Intel",
            "cpu": "i5 12th gen",
            "gpu": "RTX 3050",
            "ramType": "DDR4",
            "ram": 16,
            "storage": 512,
        }))
        .expect("row parses");
        let changes = listing.into_changes().expect("row converts");

        assert_eq!(changes.msrp, Some(Some(800.0)));
        assert_eq!(changes.screen, Some(Some(15.6)));
        assert_eq!(changes.refresh, Some(144));
        assert_eq!(changes.keypad, Some(true));
        assert_eq!(changes.webcam, Some(true));
        assert_eq!(changes.backlit, Some(false));
        assert_eq!(changes.resolution, Some(Resolution(1920, 1080)));
        let gpu = changes.gpu.expect("gpu");
        assert_eq!(gpu.brand.as_deref(), Some("NVIDIA"));
        assert_eq!(gpu.generation, Some(30));
        assert_eq!(
            changes.storage,
            Some(StorageSpec(Some(512), Some("SSD".to_string())))
        );
    }

    #[test]
    fn negative_counts_and_bad_styles_are_rejected() {
        let listing = ProductListing {
            reviews: -3,
            ..ProductListing::default()
        };
        let error = listing.into_changes().expect_err("negative reviews");
        assert_eq!(error.kind(), ValidationErrorKind::RangeViolation);
        assert_eq!(error.field(), "reviews");

        let listing = ProductListing {
            style: "All in One".to_string(),
            sale: 20,
            ..ProductListing::default()
        };
        let changes = listing.into_changes().expect("aio");
        assert_eq!(changes.style, Some(ComputerStyle::AllInOne));

        let listing = ProductListing {
            style: "Desk".to_string(),
            ..ProductListing::default()
        };
        assert!(listing.into_changes().is_err());
    }
}
