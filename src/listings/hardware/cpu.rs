use serde::{Deserialize, Serialize};

use super::brands::{self, CpuBrand, CpuBrandProfile, CpuLabel, UNBRANDED_CPU_FAMILIES};
use super::{non_blank, normalize_suffix, ordinal, ComponentSpec};
use crate::listings::error::ValidationError;

/// Processor description, e.g. Intel i5-12450H is `(Intel, 5, 12, 450, H)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuSpec {
    pub brand: Option<String>,
    pub family: Option<u8>,
    pub generation: Option<u32>,
    pub model: Option<u32>,
    pub suffix: Option<String>,
}

impl CpuSpec {
    pub fn new(
        brand: Option<&str>,
        family: Option<u8>,
        generation: Option<u32>,
        model: Option<u32>,
        suffix: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut spec = Self {
            brand: brand.map(str::to_string),
            family,
            generation,
            model,
            suffix: suffix.map(str::to_string),
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn brand_kind(&self) -> Option<CpuBrand> {
        self.profile().map(|profile| profile.brand)
    }

    fn profile(&self) -> Option<&'static CpuBrandProfile> {
        self.brand.as_deref().and_then(brands::cpu_profile_for)
    }
}

impl ComponentSpec for CpuSpec {
    const KIND: &'static str = "cpu";

    fn validate(&mut self) -> Result<(), ValidationError> {
        let brand = non_blank(self.brand.as_deref());
        let profile = match brand.as_deref() {
            Some(name) => Some(brands::cpu_profile_for(name).ok_or_else(|| {
                ValidationError::range(
                    format!("{}.brand", Self::KIND),
                    name,
                    format!("must be one of {}", brands::cpu_brand_names().join(", ")),
                )
            })?),
            None => None,
        };

        if let Some(family) = self.family {
            let allowed = profile
                .map(|profile| profile.families)
                .unwrap_or(UNBRANDED_CPU_FAMILIES);
            if !allowed.contains(&family) {
                let codes = allowed
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(ValidationError::range(
                    format!("{}.family", Self::KIND),
                    family,
                    format!("must be one of {codes}"),
                ));
            }
        }

        let suffix_case = profile
            .map(|profile| profile.suffix_case)
            .unwrap_or(brands::SuffixCase::Upper);

        self.brand = profile.map(|profile| profile.canonical.to_string());
        self.suffix = normalize_suffix(self.suffix.as_deref(), suffix_case);
        Ok(())
    }

    fn render(&self) -> String {
        let Some(profile) = self.profile() else {
            return "Unknown CPU Brand".to_string();
        };
        let suffix = self.suffix.as_deref().unwrap_or("");

        match profile.label {
            CpuLabel::Numbered {
                family_prefix,
                separator,
            } => {
                let family = self
                    .family
                    .map(|family| format!("{family_prefix}{family}"));
                match (self.generation, self.model) {
                    (Some(generation), Some(model)) => match family {
                        Some(family) => format!(
                            "{} {family}{separator}{generation}{model}{suffix}",
                            profile.canonical
                        ),
                        None => format!("{} {generation}{model}{suffix}", profile.canonical),
                    },
                    (Some(generation), None) => match family {
                        Some(family) => {
                            format!("{} {family} {} Gen", profile.canonical, ordinal(generation))
                        }
                        None => format!("{} {} Gen", profile.canonical, ordinal(generation)),
                    },
                    _ => match family {
                        Some(family) => format!("{} {family}", profile.canonical),
                        None => profile.canonical.to_string(),
                    },
                }
            }
            CpuLabel::Chip { family_prefix } => {
                let mut parts = vec![profile.canonical.to_string()];
                if let Some(family) = self.family {
                    parts.push(format!("{family_prefix}{family}"));
                }
                if !suffix.is_empty() {
                    parts.push(suffix.to_string());
                }
                parts.join(" ")
            }
        }
    }

    fn is_branded(&self) -> bool {
        self.profile().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::error::ValidationErrorKind;

    #[test]
    fn canonicalizes_brand_and_suffix() {
        let spec = CpuSpec::new(Some("intel"), Some(5), Some(12), Some(450), Some("h"))
            .expect("valid cpu");
        assert_eq!(spec.brand.as_deref(), Some("Intel"));
        assert_eq!(spec.suffix.as_deref(), Some("H"));
        assert_eq!(spec.brand_kind(), Some(CpuBrand::Intel));
        assert_eq!(spec.render(), "Intel i5-12450H");
    }

    #[test]
    fn apple_suffixes_are_title_cased() {
        let spec =
            CpuSpec::new(Some("APPLE"), Some(2), None, None, Some("pro")).expect("valid cpu");
        assert_eq!(spec.suffix.as_deref(), Some("Pro"));
        assert_eq!(spec.render(), "Apple M2 Pro");
    }

    #[test]
    fn amd_renders_ryzen_label() {
        let spec = CpuSpec::new(Some("amd"), Some(7), Some(7), Some(840), Some("hs"))
            .expect("valid cpu");
        assert_eq!(spec.render(), "AMD Ryzen 7 7840HS");
    }

    #[test]
    fn generation_only_renders_ordinal() {
        let spec = CpuSpec::new(Some("Intel"), None, Some(13), None, None).expect("valid cpu");
        assert_eq!(spec.render(), "Intel 13th Gen");

        let spec = CpuSpec::new(Some("AMD"), Some(5), Some(2), None, None).expect("valid cpu");
        assert_eq!(spec.render(), "AMD Ryzen 5 2nd Gen");
    }

    #[test]
    fn family_codes_depend_on_brand() {
        assert!(CpuSpec::new(Some("Intel"), Some(5), None, None, None).is_ok());

        let error = CpuSpec::new(Some("Intel"), Some(4), None, None, None)
            .expect_err("4 is reserved for Apple");
        assert_eq!(error.kind(), ValidationErrorKind::RangeViolation);
        assert_eq!(error.field(), "cpu.family");

        assert!(CpuSpec::new(Some("Apple"), Some(4), None, None, None).is_ok());
        assert!(CpuSpec::new(Some("Apple"), Some(5), None, None, None).is_err());
        assert!(CpuSpec::new(None, Some(6), None, None, None).is_err());
    }

    #[test]
    fn rejects_unknown_brand() {
        let error = CpuSpec::new(Some("Qualcomm"), None, None, None, None)
            .expect_err("brand outside allowed set");
        assert_eq!(error.field(), "cpu.brand");
        assert_eq!(error.value(), Some("Qualcomm"));
    }

    #[test]
    fn validate_is_idempotent() {
        let mut spec = CpuSpec {
            brand: Some("  amd ".to_string()),
            family: Some(9),
            generation: Some(7),
            model: Some(945),
            suffix: Some("hx3d".to_string()),
        };
        spec.validate().expect("first pass");
        let once = spec.clone();
        spec.validate().expect("second pass");
        assert_eq!(spec, once);
        assert_eq!(spec.suffix.as_deref(), Some("HX3D"));
    }

    #[test]
    fn unbranded_cpu_renders_fallback() {
        let spec = CpuSpec::default();
        assert_eq!(spec.render(), "Unknown CPU Brand");
        assert!(!spec.is_branded());
    }
}
