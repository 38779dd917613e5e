use serde::{Deserialize, Serialize};

use super::brands::{self, GpuBrand, GpuBrandProfile, GpuLabel};
use super::{non_blank, normalize_suffix, ComponentSpec};
use crate::listings::error::ValidationError;

/// Graphics description, e.g. NVIDIA GeForce RTX 3050 is `(NVIDIA, GeForce RTX, 30, 50)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuSpec {
    pub brand: Option<String>,
    pub series: Option<String>,
    pub generation: Option<u32>,
    pub performance: Option<u32>,
    pub suffix: Option<String>,
}

impl GpuSpec {
    pub fn new(
        brand: Option<&str>,
        series: Option<&str>,
        generation: Option<u32>,
        performance: Option<u32>,
        suffix: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut spec = Self {
            brand: brand.map(str::to_string),
            series: series.map(str::to_string),
            generation,
            performance,
            suffix: suffix.map(str::to_string),
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn brand_kind(&self) -> Option<GpuBrand> {
        self.profile().map(|profile| profile.brand)
    }

    fn profile(&self) -> Option<&'static GpuBrandProfile> {
        self.brand.as_deref().and_then(brands::gpu_profile_for)
    }

    fn model_number(&self) -> Option<String> {
        match (self.generation, self.performance) {
            (Some(generation), Some(performance)) => Some(format!("{generation}{performance}")),
            (Some(generation), None) => Some(generation.to_string()),
            (None, Some(performance)) => Some(performance.to_string()),
            (None, None) => None,
        }
    }
}

impl ComponentSpec for GpuSpec {
    const KIND: &'static str = "gpu";

    fn validate(&mut self) -> Result<(), ValidationError> {
        let brand = non_blank(self.brand.as_deref());
        let profile = match brand.as_deref() {
            Some(name) => Some(brands::gpu_profile_for(name).ok_or_else(|| {
                ValidationError::range(
                    format!("{}.brand", Self::KIND),
                    name,
                    format!("must be one of {}", brands::gpu_brand_names().join(", ")),
                )
            })?),
            None => None,
        };

        let suffix_case = profile
            .map(|profile| profile.suffix_case)
            .unwrap_or(brands::SuffixCase::UpperUpTo(2));

        self.brand = profile.map(|profile| profile.canonical.to_string());
        self.series = non_blank(self.series.as_deref());
        self.suffix = normalize_suffix(self.suffix.as_deref(), suffix_case);
        Ok(())
    }

    fn render(&self) -> String {
        let Some(profile) = self.profile() else {
            return "Unknown GPU Brand".to_string();
        };

        match profile.label {
            GpuLabel::Discrete => {
                let mut parts = vec![profile.canonical.to_string()];
                parts.extend(self.series.clone());
                parts.extend(self.model_number());
                parts.extend(self.suffix.clone());
                parts.join(" ")
            }
            GpuLabel::Integrated { fallback } => format!(
                "{} {}",
                profile.canonical,
                self.series.as_deref().unwrap_or(fallback)
            ),
        }
    }

    fn is_branded(&self) -> bool {
        self.profile().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_discrete_label() {
        let spec = GpuSpec::new(Some("nvidia"), Some("GeForce  RTX"), Some(30), Some(50), Some(""))
            .expect("valid gpu");
        assert_eq!(spec.brand.as_deref(), Some("NVIDIA"));
        assert_eq!(spec.series.as_deref(), Some("GeForce RTX"));
        assert_eq!(spec.suffix, None);
        assert_eq!(spec.render(), "NVIDIA GeForce RTX 3050");
    }

    #[test]
    fn short_suffixes_upper_case_long_ones_title_case() {
        let spec = GpuSpec::new(Some("NVIDIA"), Some("GeForce RTX"), Some(40), Some(70), Some("ti"))
            .expect("valid gpu");
        assert_eq!(spec.render(), "NVIDIA GeForce RTX 4070 TI");

        let spec = GpuSpec::new(Some("amd"), Some("RX"), Some(76), Some(0), Some("XT"))
            .expect("valid gpu");
        assert_eq!(spec.brand.as_deref(), Some("Radeon"));
        assert_eq!(spec.brand_kind(), Some(GpuBrand::Radeon));
        assert_eq!(spec.render(), "Radeon RX 760 XT");

        let spec = GpuSpec::new(Some("NVIDIA"), Some("GeForce RTX"), Some(40), Some(80), Some("SUPER"))
            .expect("valid gpu");
        assert_eq!(spec.suffix.as_deref(), Some("Super"));
    }

    #[test]
    fn model_number_joins_generation_and_performance_unpadded() {
        let spec = GpuSpec::new(Some("NVIDIA"), Some("GeForce GTX"), Some(10), Some(5), None)
            .expect("valid gpu");
        assert_eq!(spec.render(), "NVIDIA GeForce GTX 105");

        let spec = GpuSpec::new(Some("NVIDIA"), Some("GeForce GTX"), Some(16), Some(50), None)
            .expect("valid gpu");
        assert_eq!(spec.render(), "NVIDIA GeForce GTX 1650");
    }

    #[test]
    fn integrated_brands_use_series_or_fallback() {
        let spec = GpuSpec::new(Some("intel"), Some("Iris Xe"), None, None, None)
            .expect("valid gpu");
        assert_eq!(spec.render(), "Intel Iris Xe");

        let spec = GpuSpec::new(Some("Apple"), None, None, None, Some("pro")).expect("valid gpu");
        assert_eq!(spec.suffix.as_deref(), Some("Pro"));
        assert_eq!(spec.render(), "Apple Integrated");
    }

    #[test]
    fn rejects_unknown_brand() {
        let error = GpuSpec::new(Some("Matrox"), None, None, None, None)
            .expect_err("brand outside allowed set");
        assert_eq!(error.field(), "gpu.brand");
    }

    #[test]
    fn unbranded_gpu_renders_fallback() {
        assert_eq!(GpuSpec::default().render(), "Unknown GPU Brand");
    }
}
