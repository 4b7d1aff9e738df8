// src/ingestion/cases.rs
use anyhow::{bail, Context, Result};
use log::info;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{VerifyError, VerifyResult};
use crate::ingestion::extracted_fields::DetectedField;
use crate::models::core::{json_type_name, ExtractedRecord, IdentityClaim};

/// A claim paired with what was read off the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationCase {
    pub id: String,
    /// Image-classifier label for the document (e.g. "aadhar"). Reported only.
    pub document_class: Option<String>,
    pub claim: IdentityClaim,
    pub extracted: ExtractedRecord,
}

impl VerificationCase {
    pub fn new(id: impl Into<String>, claim: IdentityClaim, extracted: ExtractedRecord) -> Self {
        Self {
            id: id.into(),
            document_class: None,
            claim,
            extracted,
        }
    }

    /// Parses `{ "id"?, "document_class"?, "claim", "extracted" | "detections" }`.
    /// `index` names cases that carry no id.
    pub fn from_json(value: &Value, index: usize) -> VerifyResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            VerifyError::invalid_input("case", format!("expected an object, found {}", json_type_name(value)))
        })?;

        let id = match object.get("id") {
            None | Some(Value::Null) => format!("case-{}", index + 1),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => {
                return Err(VerifyError::invalid_input(
                    "id",
                    format!("expected a string, found {}", json_type_name(other)),
                ))
            }
        };

        let document_class = match object.get("document_class") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(VerifyError::invalid_input(
                    "document_class",
                    format!("expected a string, found {}", json_type_name(other)),
                ))
            }
        };

        let claim = match object.get("claim") {
            Some(v) => IdentityClaim::from_json(v)?,
            None => return Err(VerifyError::invalid_input("claim", "missing field")),
        };

        let extracted = match (object.get("extracted"), object.get("detections")) {
            (Some(v), _) => ExtractedRecord::from_json(v)?,
            (None, Some(v)) => {
                let detections: Vec<DetectedField> = serde_json::from_value(v.clone())
                    .map_err(|e| VerifyError::invalid_input("detections", e.to_string()))?;
                ExtractedRecord::from_detections(&detections)
            }
            (None, None) => {
                return Err(VerifyError::invalid_input(
                    "extracted",
                    "missing field (provide `extracted` or `detections`)",
                ))
            }
        };

        Ok(Self {
            id,
            document_class,
            claim,
            extracted,
        })
    }
}

/// Parses a JSON array of cases.
pub fn parse_cases(json: &str) -> Result<Vec<VerificationCase>> {
    let value: Value = serde_json::from_str(json).context("Cases file is not valid JSON")?;
    let items = match value {
        Value::Array(items) => items,
        other => bail!("Cases file must contain a JSON array, found {}", json_type_name(&other)),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            VerificationCase::from_json(item, i).with_context(|| format!("Invalid case at index {}", i))
        })
        .collect()
}

/// Reads and parses a cases file.
pub fn load_cases(path: &Path) -> Result<Vec<VerificationCase>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cases file {}", path.display()))?;
    let cases = parse_cases(&raw).with_context(|| format!("Failed to parse {}", path.display()))?;
    info!("📄 Loaded {} verification cases from {}", cases.len(), path.display());
    Ok(cases)
}
