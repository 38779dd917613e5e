use serde_json::{Map, Value};

use crate::listings::domain::{ComputerStyle, Dimensions, MemorySpec, Resolution, StorageSpec};
use crate::listings::error::ValidationError;
use crate::listings::hardware::{CpuSpec, GpuSpec};

/// Prefixes stripped from textual CPU family codes (`i7`, `Ryzen 7`, `M2`).
const FAMILY_PREFIXES: &[&str] = &["intel core i", "core i", "ryzen", "i", "m"];

static NULL: Value = Value::Null;

fn describe(value: &Value) -> String {
    value.to_string()
}

fn mismatch(field: &str, value: &Value, expected: &'static str) -> ValidationError {
    ValidationError::type_mismatch(field, describe(value), expected)
}

fn unexpected(field: &str, value: &Value) -> ValidationError {
    ValidationError::edge_case(field, describe(value))
}

pub(crate) fn optional_text(field: &str, value: &Value) -> Result<Option<String>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(_) => Err(mismatch(field, value, "text")),
        Value::Array(_) | Value::Object(_) => Err(unexpected(field, value)),
    }
}

pub(crate) fn optional_float(field: &str, value: &Value) -> Result<Option<f64>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| mismatch(field, value, "number")),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite())
            .map(Some)
            .ok_or_else(|| mismatch(field, value, "number")),
        Value::Bool(_) => Err(mismatch(field, value, "number")),
        Value::Array(_) | Value::Object(_) => Err(unexpected(field, value)),
    }
}

/// Whole, non-negative number. Negative input is a range violation, fractions a type
/// mismatch.
pub(crate) fn optional_count(field: &str, value: &Value) -> Result<Option<u64>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => {
            if let Some(count) = number.as_u64() {
                return Ok(Some(count));
            }
            if let Some(signed) = number.as_i64() {
                return Err(ValidationError::range(field, signed, "must not be negative"));
            }
            whole_from_float(field, value, number.as_f64())
        }
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => {
            let trimmed = text.trim();
            if let Ok(signed) = trimmed.parse::<i64>() {
                return u64::try_from(signed)
                    .map(Some)
                    .map_err(|_| ValidationError::range(field, signed, "must not be negative"));
            }
            whole_from_float(field, value, trimmed.parse::<f64>().ok())
        }
        Value::Bool(_) => Err(mismatch(field, value, "whole number")),
        Value::Array(_) | Value::Object(_) => Err(unexpected(field, value)),
    }
}

fn whole_from_float(
    field: &str,
    value: &Value,
    parsed: Option<f64>,
) -> Result<Option<u64>, ValidationError> {
    match parsed {
        Some(float) if float.is_finite() && float.fract() == 0.0 => {
            if float < 0.0 {
                Err(ValidationError::range(field, float, "must not be negative"))
            } else if float > u64::MAX as f64 {
                Err(ValidationError::range(field, float, "is too large"))
            } else {
                Ok(Some(float as u64))
            }
        }
        _ => Err(mismatch(field, value, "whole number")),
    }
}

pub(crate) fn required_count(field: &str, value: &Value) -> Result<u64, ValidationError> {
    optional_count(field, value)?.ok_or_else(|| mismatch(field, value, "whole number"))
}

pub(crate) fn narrow<T: TryFrom<u64>>(field: &str, value: u64) -> Result<T, ValidationError> {
    T::try_from(value).map_err(|_| ValidationError::range(field, value, "is too large"))
}

pub(crate) fn optional_narrow<T: TryFrom<u64>>(
    field: &str,
    value: &Value,
) -> Result<Option<T>, ValidationError> {
    optional_count(field, value)?
        .map(|count| narrow(field, count))
        .transpose()
}

pub(crate) fn flag(field: &str, value: &Value) -> Result<bool, ValidationError> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::Number(number) => match number.as_u64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(mismatch(field, value, "boolean")),
        },
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Ok(true),
            "false" | "no" | "n" | "0" => Ok(false),
            _ => Err(mismatch(field, value, "boolean")),
        },
        Value::Null => Err(mismatch(field, value, "boolean")),
        Value::Array(_) | Value::Object(_) => Err(unexpected(field, value)),
    }
}

pub(crate) fn style(field: &str, value: &Value) -> Result<ComputerStyle, ValidationError> {
    match value {
        Value::String(text) => ComputerStyle::parse(text).ok_or_else(|| {
            ValidationError::range(
                field,
                text,
                format!("must be one of {}", ComputerStyle::allowed_labels()),
            )
        }),
        Value::Null | Value::Bool(_) | Value::Number(_) => {
            Err(mismatch(field, value, "style name"))
        }
        Value::Array(_) | Value::Object(_) => Err(unexpected(field, value)),
    }
}

/// Fixed-arity tuple given either as an array or as an object keyed by `names`.
fn tuple_slots<'a, const N: usize>(
    field: &str,
    value: &'a Value,
    names: [&str; N],
    expected: &'static str,
) -> Result<Option<[&'a Value; N]>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) if items.len() == N => {
            let mut slots = [&NULL; N];
            for (slot, item) in slots.iter_mut().zip(items) {
                *slot = item;
            }
            Ok(Some(slots))
        }
        Value::Object(object) => Ok(Some(names.map(|name| object_slot(object, name)))),
        _ => Err(mismatch(field, value, expected)),
    }
}

fn object_slot<'a>(object: &'a Map<String, Value>, name: &str) -> &'a Value {
    object.get(name).unwrap_or(&NULL)
}

pub(crate) fn dimensions(field: &str, value: &Value) -> Result<Dimensions, ValidationError> {
    let names = ["length", "width", "thickness"];
    let Some(slots) = tuple_slots(field, value, names, "[length, width, thickness]")? else {
        return Ok(Dimensions::default());
    };
    let [length, width, thickness] = slots;
    Ok(Dimensions(
        optional_float(&format!("{field}.length"), length)?,
        optional_float(&format!("{field}.width"), width)?,
        optional_float(&format!("{field}.thickness"), thickness)?,
    ))
}

pub(crate) fn resolution(field: &str, value: &Value) -> Result<Resolution, ValidationError> {
    if let Value::String(text) = value {
        return parse_resolution_text(text).ok_or_else(|| mismatch(field, value, "WIDTHxHEIGHT"));
    }
    let Some([width, height]) = tuple_slots(field, value, ["width", "height"], "[width, height]")?
    else {
        return Err(mismatch(field, value, "[width, height]"));
    };
    let width_field = format!("{field}.width");
    let height_field = format!("{field}.height");
    Ok(Resolution(
        narrow(&width_field, required_count(&width_field, width)?)?,
        narrow(&height_field, required_count(&height_field, height)?)?,
    ))
}

fn parse_resolution_text(text: &str) -> Option<Resolution> {
    let lowered = text.trim().to_ascii_lowercase();
    let (width, height) = lowered.split_once(['x', '\u{d7}'])?;
    Some(Resolution(
        width.trim().parse().ok()?,
        height.trim().parse().ok()?,
    ))
}

pub(crate) fn memory(field: &str, value: &Value) -> Result<MemorySpec, ValidationError> {
    let Some([size, kind]) = tuple_slots(field, value, ["size", "type"], "[size, type]")? else {
        return Ok(MemorySpec::default());
    };
    Ok(MemorySpec(
        optional_narrow(&format!("{field}.size"), size)?,
        optional_text(&format!("{field}.type"), kind)?,
    ))
}

pub(crate) fn storage(field: &str, value: &Value) -> Result<StorageSpec, ValidationError> {
    let Some([size, medium]) = tuple_slots(field, value, ["size", "medium"], "[size, medium]")?
    else {
        return Ok(StorageSpec::default());
    };
    Ok(StorageSpec(
        optional_narrow(&format!("{field}.size"), size)?,
        optional_text(&format!("{field}.medium"), medium)?,
    ))
}

/// CPU family code given as a number or as `7`, `i7`, `Ryzen 7`, `M2`.
pub(crate) fn cpu_family(field: &str, value: &Value) -> Result<Option<u8>, ValidationError> {
    let Value::String(text) = value else {
        return optional_narrow(field, value);
    };
    let lowered = text.trim().to_ascii_lowercase();
    if lowered.is_empty() {
        return Ok(None);
    }
    let digits = FAMILY_PREFIXES
        .iter()
        .find_map(|prefix| lowered.strip_prefix(prefix))
        .unwrap_or(lowered.as_str())
        .trim();
    if let Ok(family) = digits.parse::<u8>() {
        return Ok(Some(family));
    }
    optional_narrow(field, &Value::String(digits.to_string()))
}

pub(crate) fn cpu(field: &str, value: &Value) -> Result<CpuSpec, ValidationError> {
    let names = ["brand", "family", "generation", "model", "suffix"];
    let Some([brand, family, generation, model, suffix]) = tuple_slots(
        field,
        value,
        names,
        "cpu object or [brand, family, generation, model, suffix]",
    )?
    else {
        return Ok(CpuSpec::default());
    };
    Ok(CpuSpec {
        brand: optional_text(&format!("{field}.brand"), brand)?,
        family: cpu_family(&format!("{field}.family"), family)?,
        generation: optional_narrow(&format!("{field}.generation"), generation)?,
        model: optional_narrow(&format!("{field}.model"), model)?,
        suffix: optional_text(&format!("{field}.suffix"), suffix)?,
    })
}

pub(crate) fn gpu(field: &str, value: &Value) -> Result<GpuSpec, ValidationError> {
    let names = ["brand", "series", "generation", "performance", "suffix"];
    let Some([brand, series, generation, performance, suffix]) = tuple_slots(
        field,
        value,
        names,
        "gpu object or [brand, series, generation, performance, suffix]",
    )?
    else {
        return Ok(GpuSpec::default());
    };
    Ok(GpuSpec {
        brand: optional_text(&format!("{field}.brand"), brand)?,
        series: optional_text(&format!("{field}.series"), series)?,
        generation: optional_narrow(&format!("{field}.generation"), generation)?,
        performance: optional_narrow(&format!("{field}.performance"), performance)?,
        suffix: optional_text(&format!("{field}.suffix"), suffix)?,
    })
}
