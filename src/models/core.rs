// src/models/core.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{VerifyError, VerifyResult};

/// Boolean gate or graded [0, 100] scoring. Chosen by the caller, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Pass,
    Score,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Pass => "pass",
            MatchMode::Score => "score",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pass" | "bool" | "boolean" => Ok(MatchMode::Pass),
            "score" | "numeric" => Ok(MatchMode::Score),
            other => Err(VerifyError::InvalidMode(other.to_string())),
        }
    }
}

/// Values asserted by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    pub name: String,
    pub address: String,
    pub uid: String,
}

/// Values recognised from the document, keyed by field class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub name: String,
    pub address: String,
    pub uid: String,
}

impl IdentityClaim {
    pub fn new(name: impl Into<String>, address: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            uid: uid.into(),
        }
    }

    /// Validates an untyped JSON object at the API boundary.
    pub fn from_json(value: &Value) -> VerifyResult<Self> {
        let (name, address, uid) = read_identity_fields(value, "claim")?;
        Ok(Self { name, address, uid })
    }
}

impl ExtractedRecord {
    pub fn new(name: impl Into<String>, address: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            uid: uid.into(),
        }
    }

    pub fn from_json(value: &Value) -> VerifyResult<Self> {
        let (name, address, uid) = read_identity_fields(value, "extracted")?;
        Ok(Self { name, address, uid })
    }
}

fn read_identity_fields(value: &Value, context: &str) -> VerifyResult<(String, String, String)> {
    let object = value.as_object().ok_or_else(|| {
        VerifyError::invalid_input(context, format!("expected an object, found {}", json_type_name(value)))
    })?;

    let field = |key: &str| -> VerifyResult<String> {
        let path = format!("{}.{}", context, key);
        match object.get(key) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(VerifyError::invalid_input(
                path,
                format!("expected a string, found {}", json_type_name(other)),
            )),
            None => Err(VerifyError::invalid_input(path, "missing field")),
        }
    };

    Ok((field("name")?, field("address")?, field("uid")?))
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
