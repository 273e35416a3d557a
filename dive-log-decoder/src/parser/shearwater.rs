//! Shearwater Predator / Petrel log decoder
//!
//! A Shearwater dive is a 0x80-byte header block, a run of fixed-size sample
//! records (0x10 bytes on the Predator, 0x20 on the Petrel family) and one or
//! two 0x80-byte footer blocks. All multi-byte values are big-endian.
//!
//! The first read runs a caching pass over the samples (dive mode, gas mixes,
//! transmitter battery states, sensor calibration, descriptive strings). The
//! sample pass then re-walks the records and checks its gas switches against
//! that cache.

use super::strings::StringList;
use super::{datetime_from_ticks, DiveParser, ParserState, ParserStatus};
use crate::config::ParserConfig;
use crate::descriptor::Family;
use crate::types::{
    Datetime, DecoKind, DecoderError, DiveMode, FieldType, FieldValue, GasMix, Result,
    SampleEvent, Salinity, WaterType,
};
use crate::units::{fahrenheit_to_celsius, psi_to_bar, FEET};
use bitflags::bitflags;
use byteorder::{BigEndian, ByteOrder};

const SZ_BLOCK: usize = 0x80;
const SZ_SAMPLE_PREDATOR: usize = 0x10;
const SZ_SAMPLE_PETREL: usize = 0x20;

/// Seconds between two sample records
const SAMPLE_INTERVAL: u32 = 10;

/// Marks an extra footer block on Predator logs
const FOOTER_MARKER: u16 = 0xFFFD;

const MAX_GASMIXES: usize = 10;

/// Model number of the first-generation Predator
const PREDATOR: u32 = 2;

/// Factory-default O2 sensor calibration value
const DEFAULT_CALIBRATION: u16 = 2100;

/// Oldest log version we decode; older logs did not store it reliably
const MIN_LOG_VERSION: u8 = 6;

bitflags! {
    /// Per-sample status byte
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct SampleStatus: u8 {
        const GASSWITCH = 0x01;
        const PPO2_EXTERNAL = 0x02;
        const SETPOINT_HIGH = 0x04;
        const SC = 0x08;
        const OC = 0x10;
    }
}

bitflags! {
    /// Transmitter battery states seen during a dive
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BatteryState: u8 {
        const NORMAL = 0b001;
        const CRITICAL = 0b010;
        const WARNING = 0b100;
    }
}

impl BatteryState {
    /// Decode the state nibble of a transmitter word
    ///
    /// 0xFFF0..=0xFFFF are "no data" codes (not paired, no comms). Otherwise
    /// the top four bits hold 0 = normal, 1 = critical, 2 = warning.
    pub fn from_word(word: u16) -> Self {
        if word & 0xFFF0 == 0xFFF0 {
            return Self::empty();
        }

        match word >> 12 {
            0 => Self::NORMAL,
            1 => Self::CRITICAL,
            2 => Self::WARNING,
            _ => Self::empty(),
        }
    }

    /// Most serious state in the set, as reported to the user
    pub fn describe(self) -> Option<&'static str> {
        const STATES: [&str; 8] = [
            "",
            "normal",
            "critical",
            "critical",
            "warning",
            "warning",
            "critical",
            "critical",
        ];

        if self.is_empty() {
            None
        } else {
            STATES.get(self.bits() as usize).copied()
        }
    }
}

/// Unit system byte in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Units {
    Metric,
    Imperial,
}

impl Units {
    fn from_header(data: &[u8]) -> Self {
        if data[8] == 1 {
            Units::Imperial
        } else {
            Units::Metric
        }
    }

    fn depth(self, raw: f64) -> f64 {
        match self {
            Units::Metric => raw,
            Units::Imperial => raw * FEET,
        }
    }

    fn temperature(self, raw: f64) -> f64 {
        match self {
            Units::Metric => raw,
            Units::Imperial => fahrenheit_to_celsius(raw),
        }
    }
}

/// Borrowed view of one sample record
///
/// Sample records are always followed by at least one footer block, so the
/// fixed offsets read here never run past the buffer.
#[derive(Clone, Copy)]
struct Sample<'b> {
    data: &'b [u8],
}

impl<'b> Sample<'b> {
    fn u8(&self, offset: usize) -> u8 {
        self.data[offset]
    }

    fn u16(&self, offset: usize) -> u16 {
        BigEndian::read_u16(&self.data[offset..])
    }

    fn status(&self) -> SampleStatus {
        SampleStatus::from_bits_retain(self.u8(11))
    }

    fn mix(&self) -> (u8, u8) {
        (self.u8(7), self.u8(8))
    }
}

/// Non-empty sample records between header and footer
fn sample_records(
    data: &[u8],
    start: usize,
    end: usize,
    size: usize,
) -> impl Iterator<Item = Sample<'_>> {
    (start..end)
        .step_by(size)
        .map(move |offset| Sample {
            data: &data[offset..],
        })
        .filter(move |sample| sample.data[..size].iter().any(|&b| b != 0))
}

/// Everything derived from one buffer by the caching pass
#[derive(Debug, Clone)]
struct ShearwaterCache {
    log_version: u8,
    header_size: usize,
    footer_size: usize,
    /// (O2 %, He %) in order of first appearance
    gasmixes: Vec<(u8, u8)>,
    /// Sensor-enable mask, or 0 when the sensors look uncalibrated
    calibrated: u8,
    calibration: [f64; 3],
    mode: DiveMode,
    strings: StringList,
}

/// Parser for Shearwater Predator and Petrel family logs
pub struct ShearwaterParser<'a> {
    petrel: bool,
    model: u32,
    serial: u32,
    state: ParserState<'a, ShearwaterCache>,
}

impl<'a> ShearwaterParser<'a> {
    /// Create a parser for the given family
    ///
    /// Fails with `InvalidArgument` for a non-Shearwater family.
    pub fn new(family: Family, config: &ParserConfig) -> Result<Self> {
        match family {
            Family::ShearwaterPredator => Ok(Self::predator(config)),
            Family::ShearwaterPetrel => Ok(Self::petrel(config)),
            other => Err(DecoderError::InvalidArgument(format!(
                "Family {} is not a Shearwater family",
                other
            ))),
        }
    }

    pub fn predator(config: &ParserConfig) -> Self {
        Self::with_layout(false, config)
    }

    /// Petrel, Petrel 2, Nerd, Perdix and later models
    pub fn petrel(config: &ParserConfig) -> Self {
        Self::with_layout(true, config)
    }

    fn with_layout(petrel: bool, config: &ParserConfig) -> Self {
        Self {
            petrel,
            model: config.model,
            serial: config.serial,
            state: ParserState::Unloaded,
        }
    }

    fn sample_size(&self) -> usize {
        if self.petrel {
            SZ_SAMPLE_PETREL
        } else {
            SZ_SAMPLE_PREDATOR
        }
    }

    /// Log format version of the attached dive (6 for anything older)
    pub fn log_version(&mut self) -> Result<u8> {
        let (_, cache) = self.cached()?;
        Ok(cache.log_version)
    }

    fn cached(&mut self) -> Result<(&'a [u8], &ShearwaterCache)> {
        let layout = Layout {
            petrel: self.petrel,
            sample_size: self.sample_size(),
            model: self.model,
            serial: self.serial,
        };
        self.state.ensure_cached(|data| layout.build_cache(data))
    }
}

/// Parser settings the caching pass depends on
#[derive(Debug, Clone, Copy)]
struct Layout {
    petrel: bool,
    sample_size: usize,
    model: u32,
    serial: u32,
}

impl Layout {
    fn build_cache(&self, data: &[u8]) -> Result<ShearwaterCache> {
        let header_size = SZ_BLOCK;
        let mut footer_size = SZ_BLOCK;
        check_length(data, header_size + footer_size)?;

        let log_version = data[127].max(MIN_LOG_VERSION);
        log::info!("Shearwater log version {}", log_version);

        if self.petrel
            || BigEndian::read_u16(&data[data.len() - footer_size..]) == FOOTER_MARKER
        {
            footer_size += SZ_BLOCK;
            check_length(data, header_size + footer_size)?;
        }

        let mut mode = DiveMode::OpenCircuit;
        let mut gasmixes: Vec<(u8, u8)> = Vec::new();
        let mut previous = (0u8, 0u8);
        let mut t1_battery = BatteryState::empty();
        let mut t2_battery = BatteryState::empty();

        let end = data.len() - footer_size;
        for sample in sample_records(data, header_size, end, self.sample_size) {
            if !sample.status().contains(SampleStatus::OC) {
                mode = DiveMode::ClosedCircuit;
            }

            // Only a change from the previous record is looked up
            let mix = sample.mix();
            if mix != previous {
                if !gasmixes.contains(&mix) {
                    if gasmixes.len() >= MAX_GASMIXES {
                        log::error!("Maximum number of gas mixes reached");
                        return Err(DecoderError::OutOfMemory(format!(
                            "More than {} gas mixes",
                            MAX_GASMIXES
                        )));
                    }
                    gasmixes.push(mix);
                }
                previous = mix;
            }

            if log_version >= 7 {
                t1_battery |= BatteryState::from_word(sample.u16(27));
                t2_battery |= BatteryState::from_word(sample.u16(19));
            }
        }

        let sensors = data[86];
        let mut calibration = [0.0; 3];
        let mut enabled = 0;
        let mut defaults = 0;
        for (i, factor) in calibration.iter_mut().enumerate() {
            let raw = BigEndian::read_u16(&data[87 + i * 2..]);
            *factor = raw as f64 / 100_000.0;
            if self.model == PREDATOR {
                // Predator cells read 30-70 mV in pure O2; 2.2 lines them up
                *factor *= 2.2;
            }
            if sensors & (1 << i) != 0 {
                enabled += 1;
                if raw == DEFAULT_CALIBRATION {
                    defaults += 1;
                }
            }
        }

        let mut strings = StringList::new();
        let calibrated = if enabled > 0 && enabled == defaults {
            log::warn!("Disabled all O2 sensors due to a default calibration value");
            if mode != DiveMode::OpenCircuit {
                strings.push("PPO2 source", "voted/averaged");
            }
            0
        } else {
            if mode != DiveMode::OpenCircuit {
                strings.push("PPO2 source", "cells");
            }
            sensors
        };

        strings.push("Serial", format!("{:08x}", self.serial));
        strings.push("FW Version", format!("{:2x}", data[19]));
        strings.push("Deco model", deco_model(data));
        if log_version >= 7 {
            strings.push("Battery type", battery_type(data[120]));
        }
        strings.push("Battery at end", format!("{:.1} V", data[9] as f64 / 10.0));
        if let Some(state) = t1_battery.describe() {
            strings.push("T1 battery", state);
        }
        if let Some(state) = t2_battery.describe() {
            strings.push("T2 battery", state);
        }

        Ok(ShearwaterCache {
            log_version,
            header_size,
            footer_size,
            gasmixes,
            calibrated,
            calibration,
            mode,
            strings,
        })
    }
}

fn check_length(data: &[u8], minimum: usize) -> Result<()> {
    if data.len() < minimum {
        log::error!(
            "Invalid data length: {} bytes, need at least {}",
            data.len(),
            minimum
        );
        return Err(DecoderError::DataFormat(format!(
            "Invalid data length {}",
            data.len()
        )));
    }
    Ok(())
}

fn deco_model(data: &[u8]) -> String {
    match data[67] {
        0 => format!("GF {}/{}", data[4], data[5]),
        1 => format!("VPM-B +{}", data[68]),
        2 => format!("VPM-B/GFS +{} {}%", data[68], data[85]),
        other => format!("Unknown model {}", other),
    }
}

fn battery_type(id: u8) -> String {
    match id {
        1 => "1.5V Alkaline".to_string(),
        2 => "1.5V Lithium".to_string(),
        3 => "1.2V NiMH".to_string(),
        4 => "3.6V Saft".to_string(),
        5 => "3.7V Li-Ion".to_string(),
        other => format!("unknown type {}", other),
    }
}

/// 12-bit tank pressure in 2 psi steps; 0xFFF0 and up are status codes
fn tank_pressure(word: u16) -> Option<f64> {
    if word >= 0xFFF0 {
        return None;
    }
    Some(psi_to_bar((word & 0x0FFF) as f64 * 2.0))
}

impl<'a> DiveParser<'a> for ShearwaterParser<'a> {
    fn family(&self) -> Family {
        if self.petrel {
            Family::ShearwaterPetrel
        } else {
            Family::ShearwaterPredator
        }
    }

    fn status(&self) -> ParserStatus {
        self.state.status()
    }

    fn set_data(&mut self, data: &'a [u8]) -> Result<()> {
        self.state.attach(data);
        Ok(())
    }

    fn datetime(&mut self) -> Result<Datetime> {
        let data = self.state.data()?;
        check_length(data, 2 * SZ_BLOCK)?;

        let ticks = BigEndian::read_u32(&data[12..]);
        datetime_from_ticks(ticks as i64)
    }

    fn field(&mut self, kind: FieldType, selector: usize) -> Result<FieldValue> {
        let (data, cache) = self.cached()?;

        let footer = data.len() - cache.footer_size;
        let units = Units::from_header(data);

        let value = match kind {
            FieldType::DiveTime => {
                FieldValue::DiveTime(BigEndian::read_u16(&data[footer + 6..]) as u32 * 60)
            }
            FieldType::MaxDepth => {
                FieldValue::MaxDepth(units.depth(BigEndian::read_u16(&data[footer + 4..]) as f64))
            }
            FieldType::GasMixCount => FieldValue::GasMixCount(cache.gasmixes.len()),
            FieldType::GasMix => {
                let (oxygen, helium) = cache.gasmixes.get(selector).copied().ok_or_else(|| {
                    DecoderError::Unsupported(format!("No gas mix at index {}", selector))
                })?;
                FieldValue::GasMix(GasMix::from_percent(oxygen, helium))
            }
            FieldType::Salinity => {
                let density = BigEndian::read_u16(&data[83..]);
                let water = if density == 1000 {
                    WaterType::Fresh
                } else {
                    WaterType::Salt
                };
                FieldValue::Salinity(Salinity {
                    water,
                    density: density as f64,
                })
            }
            FieldType::Atmospheric => {
                FieldValue::Atmospheric(BigEndian::read_u16(&data[47..]) as f64 / 1000.0)
            }
            FieldType::DiveMode => FieldValue::DiveMode(cache.mode),
            FieldType::String => FieldValue::String(cache.strings.get(selector)?),
            FieldType::AvgDepth => {
                return Err(DecoderError::Unsupported(format!("Field {}", kind)));
            }
        };

        Ok(value)
    }

    fn samples_foreach(&mut self, sink: &mut dyn FnMut(SampleEvent)) -> Result<()> {
        let petrel = self.petrel;
        let sample_size = self.sample_size();
        let (data, cache) = self.cached()?;

        let units = Units::from_header(data);
        let end = data.len() - cache.footer_size;

        let mut previous = (0u8, 0u8);
        let mut time = 0u32;

        for sample in sample_records(data, cache.header_size, end, sample_size) {
            time += SAMPLE_INTERVAL;
            sink(SampleEvent::Time(time));

            // Depth in 1/10 m or ft
            let depth = units.depth(sample.u16(0) as f64) / 10.0;
            sink(SampleEvent::Depth(depth));

            let mut temperature = sample.u8(13) as i8 as i32;
            if temperature < 0 {
                temperature += 102;
                if temperature > 0 {
                    temperature = 0;
                }
            }
            sink(SampleEvent::Temperature(units.temperature(temperature as f64)));

            let status = sample.status();
            if !status.contains(SampleStatus::OC) {
                if !status.contains(SampleStatus::PPO2_EXTERNAL) {
                    if cache.calibrated == 0 {
                        sink(SampleEvent::Ppo2 {
                            sensor: None,
                            value: sample.u8(6) as f64 / 100.0,
                        });
                    } else {
                        for (i, offset) in [12, 14, 15].into_iter().enumerate() {
                            if cache.calibrated & (1 << i) != 0 {
                                sink(SampleEvent::Ppo2 {
                                    sensor: Some(i),
                                    value: sample.u8(offset) as f64 * cache.calibration[i],
                                });
                            }
                        }
                    }
                }

                // The Predator only logs which of the two header setpoints is active
                let setpoint = if petrel {
                    sample.u8(18)
                } else if status.contains(SampleStatus::SETPOINT_HIGH) {
                    data[18]
                } else {
                    data[17]
                };
                sink(SampleEvent::Setpoint(setpoint as f64 / 100.0));
            }

            if petrel {
                sink(SampleEvent::Cns(sample.u8(22) as f64 / 100.0));
            }

            let mix = sample.mix();
            if mix != previous {
                let index = cache
                    .gasmixes
                    .iter()
                    .position(|&m| m == mix)
                    .ok_or_else(|| {
                        log::error!("Invalid gas mix {}/{}", mix.0, mix.1);
                        DecoderError::DataFormat(format!("Invalid gas mix {}/{}", mix.0, mix.1))
                    })?;
                sink(SampleEvent::GasMix(index));
                previous = mix;
            }

            let stop = sample.u16(2);
            let (kind, stop_depth) = if stop != 0 {
                (DecoKind::DecoStop, units.depth(stop as f64))
            } else {
                (DecoKind::Ndl, 0.0)
            };
            sink(SampleEvent::Deco {
                kind,
                depth: stop_depth,
                time: sample.u8(9) as u32 * 60,
            });

            if cache.log_version >= 7 {
                if let Some(value) = tank_pressure(sample.u16(27)) {
                    sink(SampleEvent::Pressure { tank: 0, value });
                }
                if let Some(value) = tank_pressure(sample.u16(19)) {
                    sink(SampleEvent::Pressure { tank: 1, value });
                }

                // 0xF0 and up: not paired, no comms, unavailable in deco or not set up
                let rbt = sample.u8(21);
                if rbt < 0xF0 {
                    sink(SampleEvent::Rbt(rbt as u32));
                }
            }
        }

        Ok(())
    }
}
