//! Conversion between raw point values and display values.
//!
//! Decoding never fails: a missing or empty raw value decodes to `None` and a
//! payload that is not a number is handed back unchanged as text. Encoding
//! fails only when the descriptor carries no type data.

use std::fmt;

use serde::Serialize;

use crate::{DataType, Descriptor, Error, OnValue, Result};

/// Decimal digits kept when writing `DataType::Decimal` values.
const WIRE_DECIMALS: u8 = 6;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Label(&'static str),
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("on"),
            Value::Bool(false) => f.write_str("off"),
            Value::Number(number) => write!(f, "{number}"),
            Value::Label(label) => f.write_str(label),
            Value::Text(text) => f.write_str(text),
        }
    }
}

pub fn decode(raw: Option<&str>, descriptor: &Descriptor) -> Option<Value> {
    let raw = raw.filter(|raw| !raw.is_empty())?;

    match raw.trim().parse::<f64>() {
        Ok(number) => {
            let scaled = number * descriptor.scale;
            if !scaled.is_finite() {
                return Some(Value::Text(raw.to_string()));
            }

            let value = match descriptor.precision {
                Some(precision) => round_to(scaled, precision),
                None => scaled,
            };
            Some(Value::Number(value))
        }
        Err(_) => Some(Value::Text(raw.to_string())),
    }
}

pub fn decode_bool(raw: Option<&str>, on_value: &OnValue) -> Option<bool> {
    let raw = raw.filter(|raw| !raw.is_empty())?;
    Some(on_value.matches(raw))
}

/// Looks `raw` up in `map`; values with no entry decode to `None`.
pub fn decode_enum<T: Copy>(raw: Option<&str>, map: &[(&str, T)]) -> Option<T> {
    let raw = raw?;

    map.iter()
        .find(|(key, _)| *key == raw)
        .map(|(_, value)| *value)
}

pub fn encode(value: f64, descriptor: &Descriptor) -> Result<String> {
    let data_type = descriptor
        .data_type
        .ok_or(Error::MissingTypeData(descriptor.resource_key))?;

    let raw = value / descriptor.scale;

    let encoded = match data_type {
        DataType::Integer | DataType::Enum => format!("{}", raw.round_ties_even() as i64),
        DataType::Decimal => format!("{}", round_to(raw, WIRE_DECIMALS)),
        DataType::Boolean => encode_bool(raw != 0.0, descriptor).to_string(),
    };

    Ok(encoded)
}

pub fn encode_bool(on: bool, descriptor: &Descriptor) -> &'static str {
    if on {
        descriptor.on_value.wire()
    } else {
        descriptor.off_value
    }
}

/// Reverse lookup of [`decode_enum`].
pub fn encode_label<T: PartialEq + fmt::Display>(
    label: T,
    map: &[(&'static str, T)],
) -> Result<&'static str> {
    map.iter()
        .find(|(_, value)| *value == label)
        .map(|(key, _)| *key)
        .ok_or_else(|| Error::UnknownLabel(label.to_string()))
}

/// Rounds the exact binary value of `value` half to even, keeping
/// `precision` digits after the decimal point.
pub fn round_to(value: f64, precision: u8) -> f64 {
    if precision == 0 {
        return value.round_ties_even();
    }

    format!("{:.*}", precision as usize, value)
        .parse()
        .unwrap_or(value)
}
