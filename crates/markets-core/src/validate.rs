// crates/markets-core/src/validate.rs

//! # Record Validation
//!
//! Checks one element of a region file against the source-form market schema.
//! Works on an untyped [`serde_json::Value`] rather than deriving
//! `Deserialize`, so a bad record reports *every* offending field instead of
//! the first serde trips over.

use crate::model::{Hours, LatLng, SourceMarket};
use serde_json::{Map, Value};
use std::fmt;

/// The six required fields of a source record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Coordinates,
    Address,
    PostalCode,
    City,
    Hours,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::Coordinates,
        Field::Address,
        Field::PostalCode,
        Field::City,
        Field::Hours,
    ];

    /// The key used in source files.
    pub fn key(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Coordinates => "coordinates",
            Field::Address => "address",
            Field::PostalCode => "postalCode",
            Field::City => "city",
            Field::Hours => "hours",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single field that failed its type/shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub reason: String,
}

impl FieldError {
    fn new(field: Field, reason: impl Into<String>) -> Self {
        FieldError {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The {} is invalid: {}", self.field, self.reason)
    }
}

/// Validates one record, returning the typed record or every failing field.
///
/// An element that is not a JSON object fails all six fields.
pub fn validate_market(value: &Value) -> Result<SourceMarket, Vec<FieldError>> {
    let Some(obj) = value.as_object() else {
        let found = kind_of(value);
        return Err(Field::ALL
            .iter()
            .map(|&f| FieldError::new(f, format!("record is {found}, expected an object")))
            .collect());
    };

    let mut errors = Vec::new();

    let title = text(obj, Field::Title, &mut errors).filter(|t| {
        if t.is_empty() {
            errors.push(FieldError::new(Field::Title, "expected non-empty text"));
            false
        } else {
            true
        }
    });
    let coordinates = coordinates(obj, &mut errors);
    let address = text(obj, Field::Address, &mut errors);
    let postal_code = postal_code(obj, &mut errors);
    let city = text(obj, Field::City, &mut errors);
    let hours = hours(obj, &mut errors);

    match (title, coordinates, address, postal_code, city, hours) {
        (Some(title), Some(coordinates), Some(address), Some(postal_code), Some(city), Some(hours))
            if errors.is_empty() =>
        {
            Ok(SourceMarket {
                title,
                coordinates,
                address,
                postal_code,
                city,
                hours,
            })
        }
        _ => Err(errors),
    }
}

// -----------------------------------------------------------------------------
// FIELD CHECKS
// -----------------------------------------------------------------------------

fn text(obj: &Map<String, Value>, field: Field, errors: &mut Vec<FieldError>) -> Option<String> {
    match obj.get(field.key()) {
        Some(Value::String(s)) => Some(s.clone()),
        other => {
            errors.push(FieldError::new(
                field,
                format!("expected text, found {}", kind_of_opt(other)),
            ));
            None
        }
    }
}

fn coordinates(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<LatLng> {
    let field = Field::Coordinates;
    match obj.get(field.key()) {
        Some(Value::Array(pair)) if pair.len() == 2 => {
            match (pair[0].as_f64(), pair[1].as_f64()) {
                (Some(lat), Some(lng)) => Some(LatLng(lat, lng)),
                _ => {
                    errors.push(FieldError::new(field, "expected two numbers"));
                    None
                }
            }
        }
        Some(Value::Array(pair)) => {
            errors.push(FieldError::new(
                field,
                format!("expected a [latitude, longitude] pair, found {} elements", pair.len()),
            ));
            None
        }
        other => {
            errors.push(FieldError::new(
                field,
                format!("expected a [latitude, longitude] pair, found {}", kind_of_opt(other)),
            ));
            None
        }
    }
}

fn postal_code(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<i64> {
    let field = Field::PostalCode;
    match obj.get(field.key()) {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(code) => Some(code),
            None => {
                errors.push(FieldError::new(field, format!("expected an integer, found {n}")));
                None
            }
        },
        other => {
            errors.push(FieldError::new(
                field,
                format!("expected an integer, found {}", kind_of_opt(other)),
            ));
            None
        }
    }
}

fn hours(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<Hours> {
    let field = Field::Hours;
    let map = match obj.get(field.key()) {
        Some(Value::Object(map)) => map,
        other => {
            errors.push(FieldError::new(
                field,
                format!("expected a weekday mapping, found {}", kind_of_opt(other)),
            ));
            return None;
        }
    };

    let mut hours = Hours::with_capacity(map.len());
    for (day, desc) in map {
        match desc {
            Value::String(s) => {
                hours.insert(day.clone(), s.clone());
            }
            other => {
                errors.push(FieldError::new(
                    field,
                    format!("entry \"{day}\" must be text, found {}", kind_of(other)),
                ));
                return None;
            }
        }
    }
    Some(hours)
}

fn kind_of_opt(v: Option<&Value>) -> &'static str {
    v.map_or("nothing", kind_of)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
