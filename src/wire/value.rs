use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;

/// Largest integer magnitude the wire number format carries exactly.
///
/// The generic structured value stores every number as a double, so integers
/// beyond 2^53 would silently lose precision. Marshaling rejects them instead.
const WIRE_SAFE_INTEGER: i64 = 1 << 53;

/// Failure while converting caller data into wire form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarshalError {
    #[error("number {0} cannot be carried exactly by the wire number format")]
    UnrepresentableNumber(String),
}

/// One node of the backend's generic structured value.
///
/// This is the wire analogue of a JSON value: the notification backend
/// accepts free-form, string-keyed message payloads in this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Struct(StructValue),
}

/// String-keyed generic structure, the top-level form of [`Value`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructValue {
    pub fields: BTreeMap<String, Value>,
}

impl StructValue {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts back to `serde_json` form, mainly for logging and assertions.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl Value {
    /// Converts back to `serde_json` form. Non-finite numbers, which JSON
    /// cannot express, become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(flag) => serde_json::Value::Bool(*flag),
            Value::Number(float) => serde_json::Number::from_f64(*float)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(text) => serde_json::Value::String(text.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Struct(fields) => fields.to_json(),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = MarshalError;

    fn try_from(value: serde_json::Value) -> Result<Self, MarshalError> {
        Ok(match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => Value::Number(number_to_f64(&number)?),
            serde_json::Value::String(text) => Value::String(text),
            serde_json::Value::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(map) => Value::Struct(StructValue::try_from(map)?),
        })
    }
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for StructValue {
    type Error = MarshalError;

    fn try_from(map: serde_json::Map<String, serde_json::Value>) -> Result<Self, MarshalError> {
        let mut fields = BTreeMap::new();
        for (key, value) in map {
            fields.insert(key, Value::try_from(value)?);
        }
        Ok(Self { fields })
    }
}

fn number_to_f64(number: &serde_json::Number) -> Result<f64, MarshalError> {
    if let Some(int) = number.as_i64() {
        if !(-WIRE_SAFE_INTEGER..=WIRE_SAFE_INTEGER).contains(&int) {
            return Err(MarshalError::UnrepresentableNumber(number.to_string()));
        }
        return Ok(int as f64);
    }
    if let Some(int) = number.as_u64() {
        if int > WIRE_SAFE_INTEGER as u64 {
            return Err(MarshalError::UnrepresentableNumber(number.to_string()));
        }
        return Ok(int as f64);
    }
    number
        .as_f64()
        .filter(|float| float.is_finite())
        .ok_or_else(|| MarshalError::UnrepresentableNumber(number.to_string()))
}
