//! Core types for the dive log decoder library
//!
//! This module defines the values a parser hands back to its caller: the
//! error taxonomy, the typed dive fields and the per-sample events. Parsers
//! never keep a list of samples; they push `SampleEvent`s into a sink.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dive start time as recorded by the device (local time, no zone)
pub type Datetime = NaiveDateTime;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Errors that can occur during decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecoderError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Out of memory: {0}")]
    OutOfMemory(String),

    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl DecoderError {
    /// True for the "field not provided" outcome callers use to probe fields
    pub fn is_unsupported(&self) -> bool {
        matches!(self, DecoderError::Unsupported(_))
    }

    /// True when the buffer is malformed or inconsistent
    pub fn is_data_format(&self) -> bool {
        matches!(self, DecoderError::DataFormat(_))
    }
}

/// Kind of dive-level field that can be queried from a parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Total dive time in seconds
    DiveTime,
    /// Maximum depth in metres
    MaxDepth,
    /// Average depth in metres
    AvgDepth,
    /// Number of distinct gas mixes
    GasMixCount,
    /// One gas mix, selected by index
    GasMix,
    /// Water type and density
    Salinity,
    /// Surface atmospheric pressure in bar
    Atmospheric,
    /// Open-circuit / closed-circuit mode
    DiveMode,
    /// Descriptive string, selected by index
    String,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::DiveTime => "dive time",
            FieldType::MaxDepth => "max depth",
            FieldType::AvgDepth => "average depth",
            FieldType::GasMixCount => "gas mix count",
            FieldType::GasMix => "gas mix",
            FieldType::Salinity => "salinity",
            FieldType::Atmospheric => "atmospheric pressure",
            FieldType::DiveMode => "dive mode",
            FieldType::String => "string",
        };
        write!(f, "{}", name)
    }
}

/// Value returned by a field query, tagged like the `FieldType` that asked for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldValue {
    DiveTime(u32),
    MaxDepth(f64),
    AvgDepth(f64),
    GasMixCount(usize),
    GasMix(GasMix),
    Salinity(Salinity),
    Atmospheric(f64),
    DiveMode(DiveMode),
    String(FieldString),
}

impl FieldValue {
    /// Numeric view of scalar fields (None for structured values)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::DiveTime(v) => Some(*v as f64),
            FieldValue::MaxDepth(v) | FieldValue::AvgDepth(v) | FieldValue::Atmospheric(v) => {
                Some(*v)
            }
            FieldValue::GasMixCount(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_gasmix(&self) -> Option<&GasMix> {
        match self {
            FieldValue::GasMix(mix) => Some(mix),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&FieldString> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Breathing gas as fractions (0.0 - 1.0); nitrogen is the remainder
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GasMix {
    pub oxygen: f64,
    pub helium: f64,
    pub nitrogen: f64,
}

impl GasMix {
    /// Build a mix from integer percentages as stored by most devices
    pub fn from_percent(oxygen: u8, helium: u8) -> Self {
        let oxygen = oxygen as f64 / 100.0;
        let helium = helium as f64 / 100.0;
        Self {
            oxygen,
            helium,
            nitrogen: 1.0 - oxygen - helium,
        }
    }
}

impl fmt::Display for GasMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}/{:.0}",
            self.oxygen * 100.0,
            self.helium * 100.0
        )
    }
}

/// Water type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterType {
    Fresh,
    Salt,
}

/// Water type plus density in kg/m³
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Salinity {
    pub water: WaterType,
    pub density: f64,
}

/// Breathing-loop configuration of the dive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiveMode {
    /// Open circuit
    #[default]
    OpenCircuit,
    /// Closed-circuit rebreather
    ClosedCircuit,
}

impl fmt::Display for DiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiveMode::OpenCircuit => write!(f, "OC"),
            DiveMode::ClosedCircuit => write!(f, "CCR"),
        }
    }
}

/// Descriptive (description, value) pair such as ("Serial", "0000abcd")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldString {
    pub desc: &'static str,
    pub value: String,
}

/// Kind of decompression information carried by a `SampleEvent::Deco`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecoKind {
    /// No stop required; `time` is the no-decompression limit
    Ndl,
    /// Mandatory stop at `depth` for `time`
    DecoStop,
}

/// Severity attached to device-reported events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventSeverity {
    State,
    Notify,
    Warning,
    Alarm,
}

/// One decoded observation from the sample stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SampleEvent {
    /// Elapsed dive time in seconds; starts every sample group
    Time(u32),
    /// Depth in metres
    Depth(f64),
    /// Temperature in °C
    Temperature(f64),
    /// Partial pressure of oxygen in bar; `sensor` is None for a voted/averaged value
    Ppo2 { sensor: Option<usize>, value: f64 },
    /// Active setpoint in bar
    Setpoint(f64),
    /// CNS oxygen toxicity as a fraction
    Cns(f64),
    /// Switch to the gas mix with this index
    GasMix(usize),
    /// Decompression ceiling or NDL; depth in metres, time in seconds
    Deco { kind: DecoKind, depth: f64, time: u32 },
    /// Tank pressure in bar
    Pressure { tank: usize, value: f64 },
    /// Remaining bottom time in minutes
    Rbt(u32),
    /// Time to surface in seconds
    Tts(u32),
    /// Device-reported alert or state change
    Event {
        name: &'static str,
        severity: EventSeverity,
    },
}

impl SampleEvent {
    /// Short tag used in logs and summaries
    pub fn kind(&self) -> &'static str {
        match self {
            SampleEvent::Time(_) => "time",
            SampleEvent::Depth(_) => "depth",
            SampleEvent::Temperature(_) => "temperature",
            SampleEvent::Ppo2 { .. } => "ppo2",
            SampleEvent::Setpoint(_) => "setpoint",
            SampleEvent::Cns(_) => "cns",
            SampleEvent::GasMix(_) => "gasmix",
            SampleEvent::Deco { .. } => "deco",
            SampleEvent::Pressure { .. } => "pressure",
            SampleEvent::Rbt(_) => "rbt",
            SampleEvent::Tts(_) => "tts",
            SampleEvent::Event { .. } => "event",
        }
    }
}
