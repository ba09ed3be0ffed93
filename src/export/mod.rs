//! Versioned export of simulation traces.
//!
//! A presentation layer that renders traces elsewhere (another process, a
//! browser) receives them through this envelope, either as JSON or as a
//! compact binary encoding.

use crate::core::{MachineKind, SimulationResult};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ExportError;

/// Version identifier for the export format
pub const EXPORT_VERSION: u32 = 1;

/// Serializable record of one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceExport {
    /// Export format version
    pub version: u32,

    /// Machine that produced the trace
    pub machine: MachineKind,

    /// The symbols the machine consumed, as `0`/`1` text
    pub input: String,

    /// The run itself
    pub result: SimulationResult,
}

impl TraceExport {
    /// Wrap a run at the current export version.
    ///
    /// # Example
    ///
    /// ```
    /// use seqdetect::core::MachineKind;
    /// use seqdetect::export::TraceExport;
    /// use seqdetect::simulate_moore;
    ///
    /// let result = simulate_moore("01").unwrap();
    /// let export = TraceExport::new(MachineKind::Moore, "01", result);
    ///
    /// let json = export.to_json().unwrap();
    /// assert_eq!(TraceExport::from_json(&json).unwrap(), export);
    /// ```
    pub fn new(machine: MachineKind, input: impl Into<String>, result: SimulationResult) -> Self {
        Self {
            version: EXPORT_VERSION,
            machine,
            input: input.into(),
            result,
        }
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }

    /// Encode as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let export: Self = serde_json::from_str(json)
            .map_err(|e| ExportError::DeserializationFailed(e.to_string()))?;
        export.validate()
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        bincode::serialize(self).map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }

    /// Decode from bincode and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        let export: Self = bincode::deserialize(bytes)
            .map_err(|e| ExportError::DeserializationFailed(e.to_string()))?;
        export.validate()
    }

    fn validate(self) -> Result<Self, ExportError> {
        if self.version != EXPORT_VERSION {
            return Err(ExportError::UnsupportedVersion {
                found: self.version,
                supported: EXPORT_VERSION,
            });
        }

        let consumed = self.input.chars().count();
        let steps = self.result.steps();
        if steps.len() != consumed + 1 {
            return Err(ExportError::ValidationFailed(format!(
                "expected {} steps for {} input symbols, found {}",
                consumed + 1,
                consumed,
                steps.len()
            )));
        }

        let inputs = std::iter::once(None).chain(self.input.chars().map(Some));
        for (index, (record, expected)) in steps.iter().zip(inputs).enumerate() {
            if record.step != index {
                return Err(ExportError::ValidationFailed(format!(
                    "step {} recorded at position {}",
                    record.step, index
                )));
            }
            if record.input.map(|s| s.as_char()) != expected {
                return Err(ExportError::ValidationFailed(format!(
                    "step {} does not consume the matching input symbol",
                    index
                )));
            }
        }

        let expected_output = match self.machine {
            MachineKind::Mealy => consumed,
            MachineKind::Moore => consumed + 1,
        };
        if self.result.output().chars().count() != expected_output {
            return Err(ExportError::ValidationFailed(format!(
                "{} output should have {} symbols",
                self.machine, expected_output
            )));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{simulate_mealy, simulate_moore};

    fn mealy_export(input: &str) -> TraceExport {
        TraceExport::new(MachineKind::Mealy, input, simulate_mealy(input).unwrap())
    }

    #[test]
    fn json_roundtrip_preserves_trace() {
        let export = mealy_export("0110101");
        let json = export.to_json_pretty().unwrap();
        let decoded = TraceExport::from_json(&json).unwrap();
        assert_eq!(decoded, export);
    }

    #[test]
    fn binary_roundtrip_preserves_trace() {
        let export = TraceExport::new(MachineKind::Moore, "0011", simulate_moore("0011").unwrap());
        let bytes = export.to_bytes().unwrap();
        let decoded = TraceExport::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, export);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut export = mealy_export("01");
        export.version = EXPORT_VERSION + 1;
        let json = export.to_json().unwrap();

        let err = TraceExport::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ExportError::UnsupportedVersion {
                found: 2,
                supported: 1
            }
        ));
    }

    #[test]
    fn mismatched_input_fails_validation() {
        let export = TraceExport::new(MachineKind::Mealy, "011", simulate_mealy("01").unwrap());
        let json = export.to_json().unwrap();
        assert!(matches!(
            TraceExport::from_json(&json),
            Err(ExportError::ValidationFailed(_))
        ));

        let export = TraceExport::new(MachineKind::Mealy, "11", simulate_mealy("01").unwrap());
        let json = export.to_json().unwrap();
        assert!(matches!(
            TraceExport::from_json(&json),
            Err(ExportError::ValidationFailed(_))
        ));
    }

    #[test]
    fn wrong_machine_kind_fails_validation() {
        let export = TraceExport::new(MachineKind::Moore, "01", simulate_mealy("01").unwrap());
        let json = export.to_json().unwrap();
        assert!(matches!(
            TraceExport::from_json(&json),
            Err(ExportError::ValidationFailed(_))
        ));
    }

    #[test]
    fn garbage_fails_deserialization() {
        assert!(matches!(
            TraceExport::from_json("{not json"),
            Err(ExportError::DeserializationFailed(_))
        ));
        assert!(matches!(
            TraceExport::from_bytes(&[0xff]),
            Err(ExportError::DeserializationFailed(_))
        ));
    }
}
