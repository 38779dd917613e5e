use super::{ScoreComponent, ScoreFactor};
use crate::listings::domain::{ComputerFields, DEFAULT_RESOLUTION};

const SCORE_CEILING: f64 = 100.0;

const RATING_MULTIPLIER: f64 = 20.0;
const RATING_FALLBACK: f64 = 90.0;

const PRICE_DIVISOR: f64 = 5.0;
const PRICE_FALLBACK: f64 = 0.0;

const RESOLUTION_WEIGHT: f64 = 50.0;
const REFRESH_DIVISOR: f64 = 2.4;
const FEATURE_WEIGHT: f64 = 33.4;

const CPU_FAMILY_STEP: f64 = 12.5;
const CPU_FALLBACK: f64 = 0.0;

const GPU_OFFSET: f64 = 40.0;
const GPU_FALLBACK: f64 = 20.0;

const RAM_MULTIPLIER: f64 = 1.5625;
const RAM_FALLBACK: f64 = 6.25;

const STORAGE_DIVISOR: f64 = 20.0;
const STORAGE_FALLBACK: f64 = 6.0;

pub(crate) fn score_fields(fields: &ComputerFields) -> Vec<ScoreComponent> {
    vec![
        rating(fields),
        price(fields),
        resolution(fields),
        refresh(fields),
        features(fields),
        cpu(fields),
        gpu(fields),
        ram(fields),
        storage(fields),
    ]
}

fn rating(fields: &ComputerFields) -> ScoreComponent {
    match fields.rating {
        Some(rating) => ScoreComponent::new(
            ScoreFactor::Rating,
            rating * RATING_MULTIPLIER,
            format!("{rating} star rating"),
        ),
        None => ScoreComponent::new(
            ScoreFactor::Rating,
            RATING_FALLBACK,
            "no rating recorded, assuming average".to_string(),
        ),
    }
}

fn price(fields: &ComputerFields) -> ScoreComponent {
    match (fields.msrp, fields.price) {
        (Some(msrp), Some(price)) => ScoreComponent::new(
            ScoreFactor::Price,
            ((msrp - price) / PRICE_DIVISOR).clamp(0.0, SCORE_CEILING),
            format!("${price} against an MSRP of ${msrp}"),
        ),
        _ => ScoreComponent::new(
            ScoreFactor::Price,
            PRICE_FALLBACK,
            "price or MSRP missing".to_string(),
        ),
    }
}

fn resolution(fields: &ComputerFields) -> ScoreComponent {
    let ratio = fields.resolution.pixels() as f64 / DEFAULT_RESOLUTION.pixels() as f64;
    ScoreComponent::new(
        ScoreFactor::Resolution,
        (ratio * RESOLUTION_WEIGHT).min(SCORE_CEILING),
        format!(
            "{} x {} px",
            fields.resolution.width(),
            fields.resolution.height()
        ),
    )
}

fn refresh(fields: &ComputerFields) -> ScoreComponent {
    ScoreComponent::new(
        ScoreFactor::Refresh,
        (f64::from(fields.refresh) / REFRESH_DIVISOR).min(SCORE_CEILING),
        format!("{} Hz panel", fields.refresh),
    )
}

fn features(fields: &ComputerFields) -> ScoreComponent {
    let present = [fields.keypad, fields.webcam, fields.backlit]
        .into_iter()
        .filter(|flag| *flag)
        .count();
    ScoreComponent::new(
        ScoreFactor::Features,
        present as f64 * FEATURE_WEIGHT,
        format!("{present} of 3 convenience features"),
    )
}

fn cpu(fields: &ComputerFields) -> ScoreComponent {
    match fields.cpu.family {
        Some(family) => ScoreComponent::new(
            ScoreFactor::Cpu,
            ((f64::from(family) - 1.0) * CPU_FAMILY_STEP).clamp(0.0, SCORE_CEILING),
            format!("family code {family}"),
        ),
        None => ScoreComponent::new(
            ScoreFactor::Cpu,
            CPU_FALLBACK,
            "cpu family missing".to_string(),
        ),
    }
}

fn gpu(fields: &ComputerFields) -> ScoreComponent {
    match fields.gpu.generation {
        Some(generation) => {
            let performance = fields.gpu.performance.unwrap_or(0);
            ScoreComponent::new(
                ScoreFactor::Gpu,
                (f64::from(generation) + f64::from(performance) - GPU_OFFSET)
                    .clamp(0.0, SCORE_CEILING),
                format!("generation {generation}, performance tier {performance}"),
            )
        }
        None => ScoreComponent::new(
            ScoreFactor::Gpu,
            GPU_FALLBACK,
            "gpu generation missing, assuming integrated graphics".to_string(),
        ),
    }
}

fn ram(fields: &ComputerFields) -> ScoreComponent {
    match fields.ram.size() {
        Some(size) => ScoreComponent::new(
            ScoreFactor::Memory,
            (f64::from(size) * RAM_MULTIPLIER).min(SCORE_CEILING),
            format!("{size} GB memory"),
        ),
        None => ScoreComponent::new(
            ScoreFactor::Memory,
            RAM_FALLBACK,
            "memory size missing".to_string(),
        ),
    }
}

fn storage(fields: &ComputerFields) -> ScoreComponent {
    match fields.storage.size() {
        Some(size) => ScoreComponent::new(
            ScoreFactor::Storage,
            (f64::from(size) / STORAGE_DIVISOR).min(SCORE_CEILING),
            format!("{size} GB storage"),
        ),
        None => ScoreComponent::new(
            ScoreFactor::Storage,
            STORAGE_FALLBACK,
            "storage size missing".to_string(),
        ),
    }
}
