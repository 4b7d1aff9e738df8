// src/ingestion/extracted_fields.rs
//
// Turns field-detector boxes plus recogniser text into an ExtractedRecord.
// Confidence and box coordinates are carried through untouched.
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::core::ExtractedRecord;

/// Document field classes the matchers consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldClass {
    Name,
    Address,
    Uid,
}

impl FieldClass {
    /// Resolves a detector label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "name" => Some(FieldClass::Name),
            "address" => Some(FieldClass::Address),
            "uid" | "aadhaar" | "aadhar" | "aadhaar number" | "aadhar number" => Some(FieldClass::Uid),
            _ => None,
        }
    }
}

impl fmt::Display for FieldClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldClass::Name => "Name",
            FieldClass::Address => "Address",
            FieldClass::Uid => "UID",
        };
        f.write_str(label)
    }
}

/// One detected region with the text lines recognised inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedField {
    pub label: String,
    #[serde(default)]
    pub confidence: f32,
    /// `[x1, y1, x2, y2]` in image pixels.
    #[serde(default)]
    pub bbox: [i32; 4],
    #[serde(default)]
    pub lines: Vec<String>,
}

impl DetectedField {
    pub fn new(label: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            label: label.into(),
            confidence: 0.0,
            bbox: [0; 4],
            lines,
        }
    }

    /// Recognised lines joined with single spaces.
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }
}

impl ExtractedRecord {
    /// Builds a record from detections in order; a later detection of the
    /// same class replaces an earlier one. Classes never seen stay empty.
    pub fn from_detections(detections: &[DetectedField]) -> Self {
        let mut record = ExtractedRecord::default();
        for detection in detections {
            let Some(class) = FieldClass::from_label(&detection.label) else {
                debug!(
                    "Skipping detection with unmapped label {:?} (confidence {:.2})",
                    detection.label, detection.confidence
                );
                continue;
            };
            let text = detection.text();
            debug!(
                "{} field from box {:?} (confidence {:.2}): {:?}",
                class, detection.bbox, detection.confidence, text
            );
            match class {
                FieldClass::Name => record.name = text,
                FieldClass::Address => record.address = text,
                FieldClass::Uid => record.uid = text,
            }
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_label_resolution() {
        assert_eq!(FieldClass::from_label("Name"), Some(FieldClass::Name));
        assert_eq!(FieldClass::from_label(" ADDRESS "), Some(FieldClass::Address));
        assert_eq!(FieldClass::from_label("UID"), Some(FieldClass::Uid));
        assert_eq!(FieldClass::from_label("Aadhaar Number"), Some(FieldClass::Uid));
        assert_eq!(FieldClass::from_label("DOB"), None);
    }

    #[test]
    fn test_lines_joined_with_single_space() {
        let detections = vec![
            DetectedField::new("Address", lines(&["kphb colony entrance,Tower,", "hyderabad,Telangana,500001"])),
            DetectedField::new("Name", lines(&["Rahul", "D"])),
            DetectedField::new("UID", lines(&["9860 0355 9198"])),
        ];
        let record = ExtractedRecord::from_detections(&detections);
        assert_eq!(record.name, "Rahul D");
        assert_eq!(
            record.address,
            "kphb colony entrance,Tower, hyderabad,Telangana,500001"
        );
        assert_eq!(record.uid, "9860 0355 9198");
    }

    #[test]
    fn test_later_detection_wins_and_unknown_skipped() {
        let detections = vec![
            DetectedField::new("Name", lines(&["Kumar"])),
            DetectedField::new("Gender", lines(&["Male"])),
            DetectedField::new("name", lines(&["Pushpam", "Kumar"])),
        ];
        let record = ExtractedRecord::from_detections(&detections);
        assert_eq!(record.name, "Pushpam Kumar");
        assert_eq!(record.address, "");
        assert_eq!(record.uid, "");
    }

    #[test]
    fn test_detection_deserializes_with_defaults() {
        let detection: DetectedField =
            serde_json::from_str(r#"{"label": "UID", "lines": ["8028 5266 0990"]}"#).unwrap();
        assert_eq!(detection.confidence, 0.0);
        assert_eq!(detection.bbox, [0, 0, 0, 0]);
        assert_eq!(detection.text(), "8028 5266 0990");
    }
}
