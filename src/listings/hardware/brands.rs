use std::collections::HashMap;
use std::sync::OnceLock;

/// Processor vendors accepted on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpuBrand {
    Intel,
    Amd,
    Apple,
}

/// Graphics vendors accepted on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpuBrand {
    Nvidia,
    Radeon,
    Intel,
    Apple,
}

/// How a vendor writes model suffixes (`HX`, `Pro`, `Ti`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixCase {
    Upper,
    Title,
    /// Upper-case short suffixes, title-case anything longer.
    UpperUpTo(usize),
}

/// Upper bound on casing passes; expanding case mappings settle after one extra pass.
const MAX_CASE_PASSES: usize = 4;

impl SuffixCase {
    /// Case a suffix. The result is a fixed point: applying the rule again returns it
    /// unchanged, including for letters such as `ß` whose case mapping expands.
    pub fn apply(self, value: &str) -> String {
        let mut current = self.apply_once(value);
        for _ in 0..MAX_CASE_PASSES {
            let next = self.apply_once(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    fn apply_once(self, value: &str) -> String {
        match self {
            SuffixCase::Upper => value.to_uppercase(),
            SuffixCase::Title => title_case(value),
            SuffixCase::UpperUpTo(limit) => {
                let upper = value.to_uppercase();
                if upper.chars().count() <= limit {
                    upper
                } else {
                    title_case(value)
                }
            }
        }
    }
}

/// How a CPU brand lays out its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuLabel {
    /// `<Brand> <prefix><family><separator><generation><model><suffix>`
    Numbered {
        family_prefix: &'static str,
        separator: &'static str,
    },
    /// `<Brand> <prefix><family> <suffix>`
    Chip { family_prefix: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct CpuBrandProfile {
    pub brand: CpuBrand,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub families: &'static [u8],
    pub suffix_case: SuffixCase,
    pub label: CpuLabel,
}

/// How a GPU brand lays out its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuLabel {
    /// `<Brand> <series> <generation><performance> <suffix>`
    Discrete,
    /// `<Brand> <series or fallback>`
    Integrated { fallback: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct GpuBrandProfile {
    pub brand: GpuBrand,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub suffix_case: SuffixCase,
    pub label: GpuLabel,
}

/// Family codes accepted when no CPU brand is recorded.
pub const UNBRANDED_CPU_FAMILIES: &[u8] = &[3, 5, 7, 9];

const CPU_PROFILES: &[CpuBrandProfile] = &[
    CpuBrandProfile {
        brand: CpuBrand::Intel,
        canonical: "Intel",
        aliases: &["intel", "intel core"],
        families: &[3, 5, 7, 9],
        suffix_case: SuffixCase::Upper,
        label: CpuLabel::Numbered {
            family_prefix: "i",
            separator: "-",
        },
    },
    CpuBrandProfile {
        brand: CpuBrand::Amd,
        canonical: "AMD",
        aliases: &["amd", "advanced micro devices", "amd ryzen"],
        families: &[3, 5, 7, 9],
        suffix_case: SuffixCase::Upper,
        label: CpuLabel::Numbered {
            family_prefix: "Ryzen ",
            separator: " ",
        },
    },
    CpuBrandProfile {
        brand: CpuBrand::Apple,
        canonical: "Apple",
        aliases: &["apple", "apple silicon"],
        families: &[1, 2, 4],
        suffix_case: SuffixCase::Title,
        label: CpuLabel::Chip { family_prefix: "M" },
    },
];

const GPU_PROFILES: &[GpuBrandProfile] = &[
    GpuBrandProfile {
        brand: GpuBrand::Nvidia,
        canonical: "NVIDIA",
        aliases: &["nvidia", "nvidia geforce"],
        suffix_case: SuffixCase::UpperUpTo(2),
        label: GpuLabel::Discrete,
    },
    GpuBrandProfile {
        brand: GpuBrand::Radeon,
        canonical: "Radeon",
        aliases: &["radeon", "amd", "amd radeon"],
        suffix_case: SuffixCase::UpperUpTo(2),
        label: GpuLabel::Discrete,
    },
    GpuBrandProfile {
        brand: GpuBrand::Intel,
        canonical: "Intel",
        aliases: &["intel"],
        suffix_case: SuffixCase::UpperUpTo(2),
        label: GpuLabel::Integrated {
            fallback: "Integrated",
        },
    },
    GpuBrandProfile {
        brand: GpuBrand::Apple,
        canonical: "Apple",
        aliases: &["apple"],
        suffix_case: SuffixCase::Title,
        label: GpuLabel::Integrated {
            fallback: "Integrated",
        },
    },
];

static CPU_ALIASES: OnceLock<HashMap<String, &'static CpuBrandProfile>> = OnceLock::new();
static GPU_ALIASES: OnceLock<HashMap<String, &'static GpuBrandProfile>> = OnceLock::new();

pub fn cpu_profile_for(name: &str) -> Option<&'static CpuBrandProfile> {
    cpu_aliases().get(&normalize_token(name)).copied()
}

pub fn gpu_profile_for(name: &str) -> Option<&'static GpuBrandProfile> {
    gpu_aliases().get(&normalize_token(name)).copied()
}

pub fn cpu_brand_names() -> Vec<&'static str> {
    CPU_PROFILES.iter().map(|profile| profile.canonical).collect()
}

pub fn gpu_brand_names() -> Vec<&'static str> {
    GPU_PROFILES.iter().map(|profile| profile.canonical).collect()
}

fn cpu_aliases() -> &'static HashMap<String, &'static CpuBrandProfile> {
    CPU_ALIASES.get_or_init(|| {
        let mut map = HashMap::new();
        for profile in CPU_PROFILES {
            for alias in profile.aliases {
                map.insert(normalize_token(alias), profile);
            }
        }
        map
    })
}

fn gpu_aliases() -> &'static HashMap<String, &'static GpuBrandProfile> {
    GPU_ALIASES.get_or_init(|| {
        let mut map = HashMap::new();
        for profile in GPU_PROFILES {
            for alias in profile.aliases {
                map.insert(normalize_token(alias), profile);
            }
        }
        map
    })
}

/// Lower-cased, whitespace-collapsed form used for alias lookups.
pub(crate) fn normalize_token(value: &str) -> String {
    collapse_whitespace(value).to_lowercase()
}

pub(crate) fn collapse_whitespace(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Capitalizes the first letter of every alphabetic run and lower-cases the rest.
pub(crate) fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                let mut upper = ch.to_uppercase();
                output.extend(upper.next());
                output.extend(upper.flat_map(char::to_lowercase));
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }
    output
}
