//! Dive log parsers
//!
//! Every family parser implements [`DiveParser`]: attach a raw buffer, then
//! ask for the dive start time, typed fields and the sample stream.
//!
//! Parsers borrow the buffer they decode. Everything derived from it is
//! computed once, on the first read, and kept until a new buffer is
//! attached.

use crate::descriptor::Family;
use crate::types::{Datetime, DecoderError, FieldType, FieldValue, Result, SampleEvent};
use chrono::{DateTime, Utc};

pub mod fit;
pub mod garmin;
pub mod shearwater;
mod strings;

pub use garmin::GarminParser;
pub use shearwater::ShearwaterParser;

/// Where a parser is in its load/cache lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserStatus {
    /// No buffer attached
    Unloaded,
    /// Buffer attached, nothing derived yet (or the last derivation failed)
    Loaded,
    /// Derived fields computed for the attached buffer
    Cached,
}

/// Common interface of all family parsers
pub trait DiveParser<'a> {
    /// Protocol family this parser decodes
    fn family(&self) -> Family;

    fn status(&self) -> ParserStatus;

    /// Attach a new buffer, discarding anything derived from the previous one
    ///
    /// Never fails: validation happens on the first read.
    fn set_data(&mut self, data: &'a [u8]) -> Result<()>;

    /// Dive start time, in device local time
    fn datetime(&mut self) -> Result<Datetime>;

    /// Query one dive-level field
    ///
    /// `selector` picks an entry for indexed kinds (gas mix, string) and is
    /// ignored otherwise. Fields the family does not provide, and selectors
    /// out of range, fail with [`DecoderError::Unsupported`].
    fn field(&mut self, kind: FieldType, selector: usize) -> Result<FieldValue>;

    /// Decode the sample stream, pushing every event into `sink` in order
    fn samples_foreach(&mut self, sink: &mut dyn FnMut(SampleEvent)) -> Result<()>;

    /// Decode the sample stream into a vector
    fn samples(&mut self) -> Result<Vec<SampleEvent>> {
        let mut events = Vec::new();
        self.samples_foreach(&mut |event: SampleEvent| events.push(event))?;
        Ok(events)
    }
}

/// Buffer plus lazily derived cache
///
/// `C` is the family-specific cache. A failed derivation leaves the state
/// `Loaded`, so the next read retries and fails the same way.
#[derive(Debug, Default)]
pub(crate) enum ParserState<'a, C> {
    #[default]
    Unloaded,
    Loaded(&'a [u8]),
    Cached(&'a [u8], C),
}

impl<'a, C> ParserState<'a, C> {
    pub fn status(&self) -> ParserStatus {
        match self {
            ParserState::Unloaded => ParserStatus::Unloaded,
            ParserState::Loaded(_) => ParserStatus::Loaded,
            ParserState::Cached(..) => ParserStatus::Cached,
        }
    }

    pub fn attach(&mut self, data: &'a [u8]) {
        *self = ParserState::Loaded(data);
    }

    /// The attached buffer, without touching the cache
    pub fn data(&self) -> Result<&'a [u8]> {
        match *self {
            ParserState::Unloaded => Err(no_data()),
            ParserState::Loaded(data) | ParserState::Cached(data, _) => Ok(data),
        }
    }

    /// The attached buffer and its cache, running `build` if needed
    pub fn ensure_cached<F>(&mut self, build: F) -> Result<(&'a [u8], &C)>
    where
        F: FnOnce(&'a [u8]) -> Result<C>,
    {
        if let ParserState::Loaded(data) = *self {
            let cache = build(data)?;
            *self = ParserState::Cached(data, cache);
        }

        match self {
            ParserState::Cached(data, cache) => Ok((*data, &*cache)),
            _ => Err(no_data()),
        }
    }
}

fn no_data() -> DecoderError {
    DecoderError::DataFormat("No data attached".to_string())
}

/// Convert a device timestamp (seconds since 1970, local time) to a datetime
pub(crate) fn datetime_from_ticks(ticks: i64) -> Result<Datetime> {
    DateTime::<Utc>::from_timestamp(ticks, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| DecoderError::DataFormat(format!("Invalid timestamp {}", ticks)))
}
