use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::hardware::{ComponentSpec, CpuSpec, GpuSpec};

pub const DEFAULT_RESOLUTION: Resolution = Resolution(1920, 1080);
pub const DEFAULT_REFRESH_HZ: u32 = 60;
pub const MAX_RATING: f64 = 5.0;
pub const MAX_SALE_PERCENT: u8 = 100;

/// Form factor of a listed computer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComputerStyle {
    #[default]
    Laptop,
    #[serde(rename = "All-in-One", alias = "All in One")]
    AllInOne,
    Tower,
    Mini,
}

impl ComputerStyle {
    pub const fn ordered() -> [Self; 4] {
        [Self::Laptop, Self::AllInOne, Self::Tower, Self::Mini]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Laptop => "Laptop",
            Self::AllInOne => "All-in-One",
            Self::Tower => "Tower",
            Self::Mini => "Mini",
        }
    }

    /// Case-insensitive lookup that also accepts `All in One` and `AIO`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value
            .trim()
            .to_ascii_lowercase()
            .replace(['-', '_'], " ");
        let normalized = normalized.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.as_str() {
            "laptop" | "notebook" => Some(Self::Laptop),
            "all in one" | "aio" => Some(Self::AllInOne),
            "tower" | "desktop tower" => Some(Self::Tower),
            "mini" | "mini pc" => Some(Self::Mini),
            _ => None,
        }
    }

    pub fn allowed_labels() -> String {
        Self::ordered()
            .iter()
            .map(|style| style.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Length, width, thickness in inches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions(pub Option<f64>, pub Option<f64>, pub Option<f64>);

impl Dimensions {
    pub fn length(&self) -> Option<f64> {
        self.0
    }

    pub fn width(&self) -> Option<f64> {
        self.1
    }

    pub fn thickness(&self) -> Option<f64> {
        self.2
    }

    fn named(&self) -> [(&'static str, Option<f64>); 3] {
        [
            ("dimensions.length", self.0),
            ("dimensions.width", self.1),
            ("dimensions.thickness", self.2),
        ]
    }
}

/// Panel width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution(pub u32, pub u32);

impl Resolution {
    pub fn width(&self) -> u32 {
        self.0
    }

    pub fn height(&self) -> u32 {
        self.1
    }

    pub fn pixels(&self) -> u64 {
        u64::from(self.0) * u64::from(self.1)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        DEFAULT_RESOLUTION
    }
}

/// Installed memory: size in GB and module type (`DDR4`, `LPDDR5X`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySpec(pub Option<u32>, pub Option<String>);

impl MemorySpec {
    pub fn size(&self) -> Option<u32> {
        self.0
    }

    pub fn kind(&self) -> Option<&str> {
        self.1.as_deref()
    }
}

/// Primary drive: size in GB and medium (`SSD`, `HDD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSpec(pub Option<u32>, pub Option<String>);

impl StorageSpec {
    pub fn size(&self) -> Option<u32> {
        self.0
    }

    pub fn medium(&self) -> Option<&str> {
        self.1.as_deref()
    }
}

/// Every caller-supplied attribute of a listing.
///
/// Values are plain data; [`ComputerFields::validate`] enforces the ranges and
/// canonicalizes the CPU and GPU sub-records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputerFields {
    pub brand: Option<String>,
    pub name: Option<String>,
    pub style: ComputerStyle,
    pub rating: Option<f64>,
    pub reviews: u32,
    pub price: Option<f64>,
    pub msrp: Option<f64>,
    pub sale: u8,
    pub weight: Option<f64>,
    pub dimensions: Dimensions,
    pub screen: Option<f64>,
    pub resolution: Resolution,
    pub refresh: u32,
    pub keypad: bool,
    pub webcam: bool,
    pub backlit: bool,
    pub cpu: CpuSpec,
    pub gpu: GpuSpec,
    pub ram: MemorySpec,
    pub storage: StorageSpec,
    pub url: Option<String>,
}

impl Default for ComputerFields {
    fn default() -> Self {
        Self {
            brand: None,
            name: None,
            style: ComputerStyle::default(),
            rating: None,
            reviews: 0,
            price: None,
            msrp: None,
            sale: 0,
            weight: None,
            dimensions: Dimensions::default(),
            screen: None,
            resolution: DEFAULT_RESOLUTION,
            refresh: DEFAULT_REFRESH_HZ,
            keypad: false,
            webcam: false,
            backlit: false,
            cpu: CpuSpec::default(),
            gpu: GpuSpec::default(),
            ram: MemorySpec::default(),
            storage: StorageSpec::default(),
            url: None,
        }
    }
}

impl ComputerFields {
    /// Check every invariant, stopping at the first violation.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if let Some(rating) = self.rating {
            if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
                return Err(ValidationError::range(
                    "rating",
                    rating,
                    "must be between 0 and 5",
                ));
            }
        }

        check_non_negative("price", self.price)?;
        check_non_negative("msrp", self.msrp)?;

        if self.sale > MAX_SALE_PERCENT {
            return Err(ValidationError::range(
                "sale",
                self.sale,
                "must be between 0 and 100",
            ));
        }

        check_non_negative("weight", self.weight)?;
        for (field, value) in self.dimensions.named() {
            check_non_negative(field, value)?;
        }
        check_non_negative("screen", self.screen)?;

        self.cpu.validate()?;
        self.gpu.validate()?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(value) if !value.is_finite() => {
            Err(ValidationError::range(field, value, "must be a finite number"))
        }
        Some(value) if value < 0.0 => Err(ValidationError::range(field, value, "must not be negative")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::error::ValidationErrorKind;

    #[test]
    fn defaults_match_listing_conventions() {
        let fields = ComputerFields::default();
        assert_eq!(fields.style, ComputerStyle::Laptop);
        assert_eq!(fields.resolution, Resolution(1920, 1080));
        assert_eq!(fields.refresh, 60);
        assert_eq!(fields.sale, 0);
        assert!(fields.rating.is_none());
    }

    #[test]
    fn style_parse_accepts_variants() {
        assert_eq!(ComputerStyle::parse("all in one"), Some(ComputerStyle::AllInOne));
        assert_eq!(ComputerStyle::parse(" All-in-One "), Some(ComputerStyle::AllInOne));
        assert_eq!(ComputerStyle::parse("TOWER"), Some(ComputerStyle::Tower));
        assert_eq!(ComputerStyle::parse("mini"), Some(ComputerStyle::Mini));
        assert_eq!(ComputerStyle::parse("Desk"), None);
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for rating in [0.0, 5.0] {
            let mut fields = ComputerFields {
                rating: Some(rating),
                ..ComputerFields::default()
            };
            assert!(fields.validate().is_ok(), "rating {rating} should pass");
        }

        for rating in [5.0001, -0.0001, f64::NAN] {
            let mut fields = ComputerFields {
                rating: Some(rating),
                ..ComputerFields::default()
            };
            let error = fields.validate().expect_err("rating out of range");
            assert_eq!(error.field(), "rating");
            assert_eq!(error.kind(), ValidationErrorKind::RangeViolation);
        }
    }

    #[test]
    fn sale_above_hundred_is_rejected() {
        let mut fields = ComputerFields {
            sale: 100,
            ..ComputerFields::default()
        };
        assert!(fields.validate().is_ok());

        fields.sale = 101;
        assert_eq!(fields.validate().expect_err("too large").field(), "sale");
    }

    #[test]
    fn negative_dimension_names_its_axis() {
        let mut fields = ComputerFields {
            dimensions: Dimensions(Some(10.0), Some(-1.0), None),
            ..ComputerFields::default()
        };
        let error = fields.validate().expect_err("negative width");
        assert_eq!(error.field(), "dimensions.width");
    }

    #[test]
    fn validate_delegates_to_components() {
        let mut fields = ComputerFields {
            cpu: CpuSpec {
                brand: Some("intel".to_string()),
                family: Some(6),
                ..CpuSpec::default()
            },
            ..ComputerFields::default()
        };
        let error = fields.validate().expect_err("family 6 is not a code");
        assert_eq!(error.field(), "cpu.family");
    }

    #[test]
    fn style_serializes_with_canonical_label() {
        let json = serde_json::to_string(&ComputerStyle::AllInOne).expect("serialize");
        assert_eq!(json, "\"All-in-One\"");
        let parsed: ComputerStyle = serde_json::from_str("\"All in One\"").expect("alias");
        assert_eq!(parsed, ComputerStyle::AllInOne);
    }
}
