//! Garmin Descent Mk1 decoder
//!
//! The watch stores each activity as a FIT file, prefixed here by the
//! 24-byte file name the download layer read it from. The caching pass walks
//! all records once for the dive summary, gas table and GPS positions; the
//! sample pass walks them again and turns RECORD and EVENT messages into
//! sample events.

use super::fit::{BaseType, FitField, FitFile, FitVisitor};
use super::strings::StringList;
use super::{datetime_from_ticks, DiveParser, ParserState, ParserStatus};
use crate::descriptor::Family;
use crate::types::{
    Datetime, DecoKind, DecoderError, EventSeverity, FieldType, FieldValue, GasMix, Result,
    SampleEvent,
};

/// Seconds between the Unix epoch and the FIT epoch (1989-12-31 00:00 UTC)
const FIT_EPOCH: i64 = 631_065_600;

const MAX_GASMIXES: usize = 16;

// Global message numbers
const DEVICE_SETTINGS: u16 = 2;
const SPORT: u16 = 12;
const SESSION: u16 = 18;
const LAP: u16 = 19;
const RECORD: u16 = 20;
const EVENT: u16 = 21;
const DIVE_GAS: u16 = 259;
const DIVE_SUMMARY: u16 = 268;

/// FIT event number for dive alerts
const EVENT_DIVE_ALERT: u8 = 56;
/// FIT event number for a gas switch
const EVENT_GAS_SWITCH: u8 = 57;

const DIVE_ALERTS: &[(u32, &str, EventSeverity)] = &[
    (0, "Deco required", EventSeverity::Notify),
    (3, "First ceiling", EventSeverity::Notify),
    (4, "ppO2 violation", EventSeverity::Warning),
    (7, "Time alert", EventSeverity::Notify),
    (8, "Depth alert", EventSeverity::Notify),
    (11, "Safety stop ceiling broken", EventSeverity::Warning),
    (12, "Safety stop completed", EventSeverity::State),
    (17, "Ascent speed too high", EventSeverity::Notify),
    (22, "Safety stop begin", EventSeverity::State),
];

/// Where a GPS position was recorded, in string order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GpsSlot {
    SessionEntry,
    SessionExit,
    SessionNe,
    SessionSw,
    LapEntry,
    LapExit,
    LapSome,
    LapOther,
    Record,
}

impl GpsSlot {
    const COUNT: usize = 9;

    fn label(self) -> &'static str {
        match self {
            GpsSlot::SessionEntry => "GPS1",
            GpsSlot::SessionExit => "GPS2",
            GpsSlot::SessionNe => "Session NE corner GPS",
            GpsSlot::SessionSw => "Session SW corner GPS",
            GpsSlot::LapEntry => "Lap entry GPS",
            GpsSlot::LapExit => "Lap exit GPS",
            GpsSlot::LapSome => "Lap some GPS",
            GpsSlot::LapOther => "Lap other GPS",
            GpsSlot::Record => "Record GPS",
        }
    }

    fn all() -> [GpsSlot; Self::COUNT] {
        [
            GpsSlot::SessionEntry,
            GpsSlot::SessionExit,
            GpsSlot::SessionNe,
            GpsSlot::SessionSw,
            GpsSlot::LapEntry,
            GpsSlot::LapExit,
            GpsSlot::LapSome,
            GpsSlot::LapOther,
            GpsSlot::Record,
        ]
    }
}

/// Position in semicircles (2^31 = 180 degrees)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Position {
    lat: i32,
    lon: i32,
}

impl Position {
    /// `[-]d.dddddd, [-]d.dddddd`, or None unless both coordinates are set
    fn format(self) -> Option<String> {
        if self.lat == 0 || self.lon == 0 {
            return None;
        }
        Some(format!("{}, {}", degrees(self.lat), degrees(self.lon)))
    }
}

fn degrees(semicircles: i32) -> String {
    let sign = if semicircles < 0 { "-" } else { "" };
    let scaled = 360 * (semicircles as i64).abs();
    let whole = scaled >> 32;
    let micro = ((scaled & 0xffff_ffff) * 1_000_000) >> 32;
    format!("{}{}.{:06}", sign, whole, micro)
}

/// One recognised (message, field) pair
#[derive(Debug, Clone, Copy, PartialEq)]
enum DiveField {
    Timestamp(u32),
    MessageIndex(u32),
    UtcOffset(i32),
    TimeOffset(i32),
    SubSport(u8),
    SessionStart(u32),
    Latitude(GpsSlot, i32),
    Longitude(GpsSlot, i32),
    Temperature(i8),
    Depth(u32),
    NextStopDepth(u32),
    NextStopTime(u32),
    Tts(u32),
    Ndl(u32),
    Cns(u8),
    EventNumber(u8),
    EventType(u8),
    EventData(u32),
    EventGroup(u8),
    GasHelium(u8),
    GasOxygen(u8),
    GasStatus(u8),
    AvgDepth(u32),
    MaxDepth(u32),
    BottomTime(u32),
}

/// Map a raw field onto the fields the decoder understands
///
/// Invalid sentinels come back as None, same as unknown fields.
fn decode_field(field: &FitField<'_>) -> Option<DiveField> {
    let u8_ = |ty| field.read(ty).map(|v| v as u8);
    let u32_ = || field.read(BaseType::Uint32).map(|v| v as u32);
    let i32_ = || field.read(BaseType::Sint32).map(|v| v as u32 as i32);
    let uint32_offset = || field.read(BaseType::Uint32).map(|v| v as u32 as i32);

    let value = match (field.message, field.number) {
        (_, 253) => DiveField::Timestamp(u32_()?),
        (_, 254) => DiveField::MessageIndex(field.read(BaseType::Uint16)? as u32),
        (_, 250) => DiveField::MessageIndex(u32_()?),

        (DEVICE_SETTINGS, 1) => DiveField::UtcOffset(uint32_offset()?),
        (DEVICE_SETTINGS, 2) => DiveField::TimeOffset(uint32_offset()?),

        (SPORT, 1) => DiveField::SubSport(u8_(BaseType::Enum)?),

        (SESSION, 2) => DiveField::SessionStart(u32_()?),
        (SESSION, 3) => DiveField::Latitude(GpsSlot::SessionEntry, i32_()?),
        (SESSION, 4) => DiveField::Longitude(GpsSlot::SessionEntry, i32_()?),
        (SESSION, 29) => DiveField::Latitude(GpsSlot::SessionNe, i32_()?),
        (SESSION, 30) => DiveField::Longitude(GpsSlot::SessionNe, i32_()?),
        (SESSION, 31) => DiveField::Latitude(GpsSlot::SessionSw, i32_()?),
        (SESSION, 32) => DiveField::Longitude(GpsSlot::SessionSw, i32_()?),
        (SESSION, 38) => DiveField::Latitude(GpsSlot::SessionExit, i32_()?),
        (SESSION, 39) => DiveField::Longitude(GpsSlot::SessionExit, i32_()?),

        (LAP, 3) => DiveField::Latitude(GpsSlot::LapEntry, i32_()?),
        (LAP, 4) => DiveField::Longitude(GpsSlot::LapEntry, i32_()?),
        (LAP, 5) => DiveField::Latitude(GpsSlot::LapExit, i32_()?),
        (LAP, 6) => DiveField::Longitude(GpsSlot::LapExit, i32_()?),
        (LAP, 27) => DiveField::Latitude(GpsSlot::LapSome, i32_()?),
        (LAP, 28) => DiveField::Longitude(GpsSlot::LapSome, i32_()?),
        (LAP, 29) => DiveField::Latitude(GpsSlot::LapOther, i32_()?),
        (LAP, 30) => DiveField::Longitude(GpsSlot::LapOther, i32_()?),

        (RECORD, 0) => DiveField::Latitude(GpsSlot::Record, i32_()?),
        (RECORD, 1) => DiveField::Longitude(GpsSlot::Record, i32_()?),
        (RECORD, 13) => DiveField::Temperature(u8_(BaseType::Sint8)? as i8),
        (RECORD, 92) => DiveField::Depth(u32_()?),
        (RECORD, 93) => DiveField::NextStopDepth(u32_()?),
        (RECORD, 94) => DiveField::NextStopTime(u32_()?),
        (RECORD, 95) => DiveField::Tts(u32_()?),
        (RECORD, 96) => DiveField::Ndl(u32_()?),
        (RECORD, 97) => DiveField::Cns(u8_(BaseType::Uint8)?),

        (EVENT, 0) => DiveField::EventNumber(u8_(BaseType::Enum)?),
        (EVENT, 1) => DiveField::EventType(u8_(BaseType::Enum)?),
        (EVENT, 3) => DiveField::EventData(u32_()?),
        (EVENT, 4) => DiveField::EventGroup(u8_(BaseType::Uint8)?),

        (DIVE_GAS, 0) => DiveField::GasHelium(u8_(BaseType::Uint8)?),
        (DIVE_GAS, 1) => DiveField::GasOxygen(u8_(BaseType::Uint8)?),
        (DIVE_GAS, 2) => DiveField::GasStatus(u8_(BaseType::Enum)?),

        (DIVE_SUMMARY, 2) => DiveField::AvgDepth(u32_()?),
        (DIVE_SUMMARY, 3) => DiveField::MaxDepth(u32_()?),
        (DIVE_SUMMARY, 11) => DiveField::BottomTime(u32_()?),

        (message, number) => {
            log::trace!(
                "Unknown field {}/{} ({:?}, {} bytes)",
                message,
                number,
                field.base_type,
                field.raw.len()
            );
            return None;
        }
    };

    Some(value)
}

/// Everything the caching pass pulls out of one file
#[derive(Debug, Clone, Default)]
struct GarminCache {
    protocol: u8,
    profile: u16,
    sub_sport: Option<u8>,
    start_time: u32,
    utc_offset: i32,
    time_offset: i32,
    bottom_time: Option<u32>,
    max_depth: Option<f64>,
    avg_depth: Option<f64>,
    gasmix_count: Option<usize>,
    gasmixes: [GasMix; MAX_GASMIXES],
    strings: StringList,
}

/// Caching-pass visitor
#[derive(Default)]
struct SummaryVisitor {
    cache: GarminCache,
    positions: [Position; GpsSlot::COUNT],
    index: u32,
    // DIVE_GAS values persist across records, like the device writes them
    helium: u8,
    oxygen: u8,
    status: u8,
    gas_pending: bool,
}

impl FitVisitor for SummaryVisitor {
    fn field(&mut self, field: &FitField<'_>) {
        let Some(value) = decode_field(field) else {
            return;
        };

        match value {
            DiveField::MessageIndex(index) => self.index = index,
            DiveField::UtcOffset(offset) => self.cache.utc_offset = offset,
            DiveField::TimeOffset(offset) => self.cache.time_offset = offset,
            DiveField::SubSport(sport) => self.cache.sub_sport = Some(sport),
            DiveField::SessionStart(start) => self.cache.start_time = start,
            DiveField::Latitude(slot, lat) => self.positions[slot as usize].lat = lat,
            DiveField::Longitude(slot, lon) => self.positions[slot as usize].lon = lon,
            DiveField::AvgDepth(mm) => self.cache.avg_depth = Some(mm as f64 / 1000.0),
            DiveField::MaxDepth(mm) => self.cache.max_depth = Some(mm as f64 / 1000.0),
            DiveField::BottomTime(ms) => self.cache.bottom_time = Some(ms / 1000),
            DiveField::GasHelium(he) => {
                self.helium = he;
                self.gas_pending = true;
            }
            DiveField::GasOxygen(o2) => {
                self.oxygen = o2;
                self.gas_pending = true;
            }
            DiveField::GasStatus(status) => self.status = status,
            _ => {}
        }
    }

    fn end_record(&mut self) {
        if !std::mem::take(&mut self.gas_pending) {
            return;
        }

        // A gas table exists from the first slot on, even if every slot is off
        let mut count = self.cache.gasmix_count.unwrap_or(0);
        let index = self.index as usize;
        // 0 disabled, 1 enabled, 2 backup
        if self.status > 0 && index < MAX_GASMIXES {
            self.cache.gasmixes[index] = GasMix::from_percent(self.oxygen, self.helium);
            count = index + 1;
        }
        self.cache.gasmix_count = Some(count);
    }
}

impl SummaryVisitor {
    fn finish(mut self) -> GarminCache {
        for slot in GpsSlot::all() {
            if let Some(text) = self.positions[slot as usize].format() {
                self.cache.strings.push(slot.label(), text);
            }
        }
        self.cache
    }
}

/// Sample-pass visitor
struct SampleVisitor<'s> {
    sink: &'s mut dyn FnMut(SampleEvent),
    start_time: u32,
    next_time: u32,
    ceiling: u32,
    stop_time: u32,
    deco_pending: bool,
    event: u8,
    event_type: u8,
    event_data: u32,
    event_group: u8,
    event_pending: bool,
}

impl<'s> SampleVisitor<'s> {
    fn new(start_time: u32, sink: &'s mut dyn FnMut(SampleEvent)) -> Self {
        Self {
            sink,
            start_time,
            next_time: 0,
            ceiling: 0,
            stop_time: 0,
            deco_pending: false,
            event: 0,
            event_type: 0,
            event_data: 0,
            event_group: 0,
            event_pending: false,
        }
    }

    fn timestamp(&mut self, timestamp: u32) {
        // Before the dive, or not after the last emitted time
        let Some(time) = timestamp.checked_sub(self.start_time) else {
            return;
        };
        if time < self.next_time {
            return;
        }
        self.next_time = time + 1;
        (self.sink)(SampleEvent::Time(time));
    }

    fn flush_event(&mut self) {
        log::debug!(
            "Event {} type {} group {} data {}",
            self.event,
            self.event_type,
            self.event_group,
            self.event_data
        );

        match self.event {
            EVENT_DIVE_ALERT => {
                if let Some(&(_, name, severity)) = DIVE_ALERTS
                    .iter()
                    .find(|(data, ..)| *data == self.event_data)
                {
                    (self.sink)(SampleEvent::Event { name, severity });
                }
            }
            EVENT_GAS_SWITCH => {
                if let Some(index) = self.event_data.checked_sub(1) {
                    (self.sink)(SampleEvent::GasMix(index as usize));
                }
            }
            _ => {}
        }
    }
}

impl FitVisitor for SampleVisitor<'_> {
    fn field(&mut self, field: &FitField<'_>) {
        let Some(value) = decode_field(field) else {
            return;
        };

        match value {
            DiveField::Timestamp(timestamp) => self.timestamp(timestamp),
            DiveField::Temperature(celsius) => {
                (self.sink)(SampleEvent::Temperature(celsius as f64))
            }
            DiveField::Depth(mm) => (self.sink)(SampleEvent::Depth(mm as f64 / 1000.0)),
            DiveField::NextStopDepth(mm) => {
                self.ceiling = mm;
                self.deco_pending = true;
            }
            DiveField::NextStopTime(seconds) => {
                self.stop_time = seconds;
                self.deco_pending = true;
            }
            DiveField::Tts(seconds) => (self.sink)(SampleEvent::Tts(seconds)),
            DiveField::Ndl(seconds) => (self.sink)(SampleEvent::Deco {
                kind: DecoKind::Ndl,
                depth: 0.0,
                time: seconds,
            }),
            DiveField::Cns(percent) => (self.sink)(SampleEvent::Cns(percent as f64 / 100.0)),
            DiveField::EventNumber(event) => {
                self.event = event;
                self.event_pending = true;
            }
            DiveField::EventType(event_type) => {
                self.event_type = event_type;
                self.event_pending = true;
            }
            DiveField::EventData(data) => self.event_data = data,
            DiveField::EventGroup(group) => self.event_group = group,
            _ => {}
        }
    }

    fn end_record(&mut self) {
        if std::mem::take(&mut self.deco_pending) {
            (self.sink)(SampleEvent::Deco {
                kind: DecoKind::DecoStop,
                depth: self.ceiling as f64 / 1000.0,
                time: self.stop_time,
            });
        }
        if std::mem::take(&mut self.event_pending) {
            self.flush_event();
        }
    }
}

fn build_cache(data: &[u8]) -> Result<GarminCache> {
    let file = FitFile::parse(data)?;
    log::debug!(
        "FIT protocol {:02x} profile {} data size {}",
        file.header.protocol,
        file.header.profile,
        file.header.data_size
    );

    let mut visitor = SummaryVisitor::default();
    if let Err(err) = file.walk(&mut visitor) {
        log::warn!("Keeping partial dive summary: {}", err);
    }

    let mut cache = visitor.finish();
    cache.protocol = file.header.protocol;
    cache.profile = file.header.profile;
    Ok(cache)
}

fn unsupported(kind: FieldType) -> DecoderError {
    DecoderError::Unsupported(format!("Field {}", kind))
}

/// Parser for Garmin Descent FIT activities
#[derive(Debug, Default)]
pub struct GarminParser<'a> {
    state: ParserState<'a, GarminCache>,
}

impl<'a> GarminParser<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the activity's sub sport is one of the dive modes
    pub fn is_dive(&mut self) -> Result<bool> {
        let (_, cache) = self.state.ensure_cached(build_cache)?;
        Ok(matches!(cache.sub_sport, Some(53..=57)))
    }

    /// Raw UTC offset from the device settings, in seconds
    pub fn utc_offset(&mut self) -> Result<i32> {
        let (_, cache) = self.state.ensure_cached(build_cache)?;
        Ok(cache.utc_offset)
    }

    /// FIT protocol and profile versions of the attached file
    pub fn fit_version(&mut self) -> Result<(u8, u16)> {
        let (_, cache) = self.state.ensure_cached(build_cache)?;
        Ok((cache.protocol, cache.profile))
    }
}

impl<'a> DiveParser<'a> for GarminParser<'a> {
    fn family(&self) -> Family {
        Family::Garmin
    }

    fn status(&self) -> ParserStatus {
        self.state.status()
    }

    fn set_data(&mut self, data: &'a [u8]) -> Result<()> {
        self.state.attach(data);
        Ok(())
    }

    fn datetime(&mut self) -> Result<Datetime> {
        let (_, cache) = self.state.ensure_cached(build_cache)?;
        datetime_from_ticks(FIT_EPOCH + cache.start_time as i64 + cache.time_offset as i64)
    }

    fn field(&mut self, kind: FieldType, selector: usize) -> Result<FieldValue> {
        let (_, cache) = self.state.ensure_cached(build_cache)?;

        let value = match kind {
            FieldType::DiveTime => {
                FieldValue::DiveTime(cache.bottom_time.ok_or_else(|| unsupported(kind))?)
            }
            FieldType::MaxDepth => {
                FieldValue::MaxDepth(cache.max_depth.ok_or_else(|| unsupported(kind))?)
            }
            FieldType::AvgDepth => {
                FieldValue::AvgDepth(cache.avg_depth.ok_or_else(|| unsupported(kind))?)
            }
            FieldType::GasMixCount => {
                FieldValue::GasMixCount(cache.gasmix_count.ok_or_else(|| unsupported(kind))?)
            }
            FieldType::GasMix => {
                let count = cache.gasmix_count.ok_or_else(|| unsupported(kind))?;
                if selector >= count {
                    return Err(DecoderError::Unsupported(format!(
                        "No gas mix at index {}",
                        selector
                    )));
                }
                FieldValue::GasMix(cache.gasmixes[selector])
            }
            FieldType::String => FieldValue::String(cache.strings.get(selector)?),
            FieldType::Salinity | FieldType::Atmospheric | FieldType::DiveMode => {
                return Err(unsupported(kind));
            }
        };

        Ok(value)
    }

    fn samples_foreach(&mut self, sink: &mut dyn FnMut(SampleEvent)) -> Result<()> {
        let (data, cache) = self.state.ensure_cached(build_cache)?;
        let file = FitFile::parse(data)?;

        let mut visitor = SampleVisitor::new(cache.start_time, sink);
        file.walk(&mut visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::fit::FIT_NAME_SIZE;

    /// Minimal FIT writer: one definition per message, little-endian
    struct Writer {
        records: Vec<u8>,
    }

    impl Writer {
        fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        fn define(&mut self, local: u8, message: u16, fields: &[(u8, u8, u8)]) {
            self.records.push(0x40 | local);
            self.records.extend_from_slice(&[0, 0]);
            self.records.extend_from_slice(&message.to_le_bytes());
            self.records.push(fields.len() as u8);
            for &(number, size, base) in fields {
                self.records.extend_from_slice(&[number, size, base]);
            }
        }

        fn data(&mut self, local: u8, bytes: &[u8]) {
            self.records.push(local);
            self.records.extend_from_slice(bytes);
        }

        fn finish(self) -> Vec<u8> {
            let mut data = vec![0u8; FIT_NAME_SIZE];
            data[..23].copy_from_slice(b"2018-08-20-10-23-30.fit");
            data.extend_from_slice(&[12, 0x10]);
            data.extend_from_slice(&2093u16.to_le_bytes());
            data.extend_from_slice(&(self.records.len() as u32).to_le_bytes());
            data.extend_from_slice(b".FIT");
            data.extend_from_slice(&self.records);
            data.extend_from_slice(&[0, 0]);
            data
        }
    }

    #[test]
    fn test_degrees_format() {
        assert_eq!(degrees(1 << 30), "90.000000");
        assert_eq!(degrees(-(1 << 29)), "-45.000000");
        assert_eq!(
            Position {
                lat: 1 << 30,
                lon: -(1 << 29)
            }
            .format()
            .as_deref(),
            Some("90.000000, -45.000000")
        );
        assert_eq!(Position { lat: 1, lon: 0 }.format(), None);
    }

    #[test]
    fn test_dive_alert_and_gas_switch() {
        let mut fit = Writer::new();
        fit.define(0, EVENT, &[(0, 1, 0x00), (3, 4, 0x86)]);
        fit.data(0, &[EVENT_DIVE_ALERT, 4, 0, 0, 0]);
        fit.data(0, &[EVENT_GAS_SWITCH, 2, 0, 0, 0]);
        fit.data(0, &[EVENT_GAS_SWITCH, 0, 0, 0, 0]);
        let data = fit.finish();

        let mut parser = GarminParser::new();
        parser.set_data(&data).unwrap();
        assert_eq!(
            parser.samples().unwrap(),
            vec![
                SampleEvent::Event {
                    name: "ppO2 violation",
                    severity: EventSeverity::Warning
                },
                SampleEvent::GasMix(1),
            ]
        );
    }

    #[test]
    fn test_gas_table_slots() {
        let mut fit = Writer::new();
        fit.define(1, DIVE_GAS, &[(254, 2, 0x84), (0, 1, 0x02), (1, 1, 0x02), (2, 1, 0x00)]);
        fit.data(1, &[0, 0, 0, 21, 1]);
        fit.data(1, &[1, 0, 35, 18, 1]);
        fit.data(1, &[2, 0, 0, 50, 0]);
        let data = fit.finish();

        let mut parser = GarminParser::new();
        parser.set_data(&data).unwrap();
        assert_eq!(
            parser.field(FieldType::GasMixCount, 0).unwrap(),
            FieldValue::GasMixCount(2)
        );
        let mix = parser.field(FieldType::GasMix, 1).unwrap();
        assert_eq!(mix.as_gasmix().unwrap().to_string(), "18/35");
        assert!(parser.field(FieldType::GasMix, 2).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_disabled_gas_slots_report_zero() {
        let mut fit = Writer::new();
        fit.define(1, DIVE_GAS, &[(254, 2, 0x84), (0, 1, 0x02), (1, 1, 0x02), (2, 1, 0x00)]);
        fit.data(1, &[0, 0, 0, 21, 0]);
        fit.data(1, &[1, 0, 0, 32, 0]);
        let data = fit.finish();

        let mut parser = GarminParser::new();
        parser.set_data(&data).unwrap();
        assert_eq!(
            parser.field(FieldType::GasMixCount, 0).unwrap(),
            FieldValue::GasMixCount(0)
        );
        assert!(parser.field(FieldType::GasMix, 0).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_gas_status_alone_is_ignored() {
        let mut fit = Writer::new();
        fit.define(1, DIVE_GAS, &[(254, 2, 0x84), (2, 1, 0x00)]);
        fit.data(1, &[0, 0, 1]);
        let data = fit.finish();

        let mut parser = GarminParser::new();
        parser.set_data(&data).unwrap();
        assert!(parser
            .field(FieldType::GasMixCount, 0)
            .unwrap_err()
            .is_unsupported());
    }

    #[test]
    fn test_missing_fields_are_unsupported() {
        let data = Writer::new().finish();
        let mut parser = GarminParser::new();
        parser.set_data(&data).unwrap();

        for kind in [
            FieldType::DiveTime,
            FieldType::MaxDepth,
            FieldType::GasMixCount,
            FieldType::Salinity,
            FieldType::DiveMode,
            FieldType::String,
        ] {
            assert!(parser.field(kind, 0).unwrap_err().is_unsupported(), "{}", kind);
        }
        assert!(!parser.is_dive().unwrap());
        assert_eq!(parser.fit_version().unwrap(), (0x10, 2093));
    }

    #[test]
    fn test_bad_header_is_data_format() {
        let mut data = Writer::new().finish();
        data[FIT_NAME_SIZE + 9] = b'X';
        let mut parser = GarminParser::new();
        parser.set_data(&data).unwrap();
        assert!(parser.datetime().unwrap_err().is_data_format());
        assert_eq!(parser.status(), ParserStatus::Loaded);
    }
}
