//! Schema-driven response normalization.
//!
//! Every record type declares a static [`Schema`]: its field names and, per
//! field, either a scalar kind (with the coercion that kind implies) or an
//! embedded record with a one/many cardinality. A single generic routine walks
//! that table over a decoded JSON body, checks and coerces each declared value,
//! drops undeclared keys, and hands the cleaned object to serde to build the
//! typed record.
//!
//! Absent keys and explicit `null`s are left out of the cleaned object, so the
//! record's `#[serde(default)]` fills them in (`None`, empty `Vec`, empty
//! string).

mod epoch;

pub use epoch::coerce_epoch;

use chrono::SecondsFormat;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::NormalizeError;

/// How a scalar field is checked and converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
    /// String or number, kept as its display string.
    Display,
    /// Unix epoch seconds, converted to a UTC date-time.
    Epoch,
    /// String restricted to a closed set of values.
    OneOf(&'static [&'static str]),
    StringList,
    /// Passed through untouched.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Scalar(ScalarKind),
    Embedded {
        schema: &'static Schema,
        cardinality: Cardinality,
    },
}

/// One entry of a record's field table.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn scalar(name: &'static str, kind: ScalarKind) -> Self {
        Field {
            name,
            kind: FieldKind::Scalar(kind),
        }
    }

    pub const fn one(name: &'static str, schema: &'static Schema) -> Self {
        Field {
            name,
            kind: FieldKind::Embedded {
                schema,
                cardinality: Cardinality::One,
            },
        }
    }

    pub const fn many(name: &'static str, schema: &'static Schema) -> Self {
        Field {
            name,
            kind: FieldKind::Embedded {
                schema,
                cardinality: Cardinality::Many,
            },
        }
    }
}

/// Declared field set of a record type.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A record type that can be built from a raw API body.
pub trait Normalizable: DeserializeOwned {
    const SCHEMA: &'static Schema;
}

/// Result of [`normalize_body`]: one record for a mapping, an ordered list for
/// a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Normalized<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Normalized::One(item) => vec![item],
            Normalized::Many(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Normalized::One(_) => 1,
            Normalized::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalize a single mapping into `T`.
pub fn normalize<T: Normalizable>(raw: &Value) -> Result<T, NormalizeError> {
    normalize_at(raw, T::SCHEMA.name.to_string())
}

/// Normalize a sequence of mappings into `Vec<T>`, preserving order.
///
/// Fails as a whole if any element fails.
pub fn normalize_many<T: Normalizable>(raw: &Value) -> Result<Vec<T>, NormalizeError> {
    let name = T::SCHEMA.name;
    let items = raw
        .as_array()
        .ok_or_else(|| NormalizeError::shape_mismatch(name, format!("array of {}", name), raw))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| normalize_at(item, format!("{}[{}]", name, i)))
        .collect()
}

/// Normalize either shape: a mapping yields one record, a sequence many.
pub fn normalize_body<T: Normalizable>(raw: &Value) -> Result<Normalized<T>, NormalizeError> {
    match raw {
        Value::Object(_) => normalize(raw).map(Normalized::One),
        Value::Array(_) => normalize_many(raw).map(Normalized::Many),
        other => Err(NormalizeError::shape_mismatch(
            T::SCHEMA.name,
            "object or array",
            other,
        )),
    }
}

fn normalize_at<T: Normalizable>(raw: &Value, path: String) -> Result<T, NormalizeError> {
    let cleaned = normalize_record(T::SCHEMA, raw, &path)?;
    serde_json::from_value(cleaned).map_err(|e| NormalizeError::ShapeMismatch {
        path,
        expected: format!("{} record", T::SCHEMA.name),
        found: e.to_string(),
    })
}

/// Walk `schema` over `raw` and return the cleaned, coerced object.
pub fn normalize_record(schema: &Schema, raw: &Value, path: &str) -> Result<Value, NormalizeError> {
    let source = raw
        .as_object()
        .ok_or_else(|| NormalizeError::shape_mismatch(path, "object", raw))?;

    let mut cleaned = Map::with_capacity(schema.fields.len());
    for field in schema.fields {
        let value = match source.get(field.name) {
            None | Some(Value::Null) => continue,
            Some(value) => value,
        };
        let field_path = format!("{}.{}", path, field.name);
        let normalized = normalize_field(&field.kind, value, &field_path)?;
        cleaned.insert(field.name.to_string(), normalized);
    }

    Ok(Value::Object(cleaned))
}

fn normalize_field(kind: &FieldKind, raw: &Value, path: &str) -> Result<Value, NormalizeError> {
    match kind {
        FieldKind::Scalar(scalar) => coerce_scalar(*scalar, raw, path),
        FieldKind::Embedded {
            schema,
            cardinality: Cardinality::One,
        } => normalize_record(schema, raw, path),
        FieldKind::Embedded {
            schema,
            cardinality: Cardinality::Many,
        } => {
            let items = raw.as_array().ok_or_else(|| {
                NormalizeError::shape_mismatch(path, format!("array of {}", schema.name), raw)
            })?;
            items
                .iter()
                .enumerate()
                .map(|(i, item)| normalize_record(schema, item, &format!("{}[{}]", path, i)))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
    }
}

fn coerce_scalar(kind: ScalarKind, raw: &Value, path: &str) -> Result<Value, NormalizeError> {
    if matches!(raw, Value::Object(_) | Value::Array(_))
        && !matches!(kind, ScalarKind::StringList | ScalarKind::Json)
    {
        return Err(NormalizeError::shape_mismatch(path, "scalar", raw));
    }

    match kind {
        ScalarKind::String => match raw {
            Value::String(_) => Ok(raw.clone()),
            _ => Err(NormalizeError::shape_mismatch(path, "string", raw)),
        },
        ScalarKind::Integer => {
            if raw.is_i64() {
                Ok(raw.clone())
            } else {
                Err(NormalizeError::shape_mismatch(path, "integer", raw))
            }
        }
        ScalarKind::Float => {
            if raw.is_number() {
                Ok(raw.clone())
            } else {
                Err(NormalizeError::shape_mismatch(path, "number", raw))
            }
        }
        ScalarKind::Boolean => {
            if raw.is_boolean() {
                Ok(raw.clone())
            } else {
                Err(NormalizeError::shape_mismatch(path, "boolean", raw))
            }
        }
        ScalarKind::Display => match raw {
            Value::String(_) => Ok(raw.clone()),
            Value::Number(n) => Ok(Value::String(n.to_string())),
            _ => Err(NormalizeError::shape_mismatch(path, "string or number", raw)),
        },
        ScalarKind::Epoch => coerce_epoch(raw)
            .map(|dt| Value::String(dt.to_rfc3339_opts(SecondsFormat::Secs, true)))
            .map_err(|e| e.at(path)),
        ScalarKind::OneOf(allowed) => match raw {
            Value::String(s) if allowed.contains(&s.as_str()) => Ok(raw.clone()),
            Value::String(_) => Err(NormalizeError::type_coercion(
                path,
                format!("one of [{}]", allowed.join(", ")),
                raw,
            )),
            _ => Err(NormalizeError::shape_mismatch(path, "string", raw)),
        },
        ScalarKind::StringList => {
            let items = raw
                .as_array()
                .ok_or_else(|| NormalizeError::shape_mismatch(path, "array of strings", raw))?;
            for (i, item) in items.iter().enumerate() {
                if !item.is_string() {
                    return Err(NormalizeError::shape_mismatch(
                        format!("{}[{}]", path, i),
                        "string",
                        item,
                    ));
                }
            }
            Ok(raw.clone())
        }
        ScalarKind::Json => Ok(raw.clone()),
    }
}
