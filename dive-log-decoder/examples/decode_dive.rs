//! Standalone dive dump decoder
//!
//! Decodes one raw dive (as downloaded from a Shearwater or Garmin device)
//! and prints the dive-level fields plus a summary of the sample stream.
//!
//! Usage:
//!   decode_dive <dump.bin> [--family <tag>] [--model <n>] [--serial <hex>] [--limit <count>]
//!
//! Example:
//!   decode_dive petrel.bin --family shearwater-petrel --serial 1a2b3c4d --limit 20

use anyhow::{bail, Context};
use dive_log_decoder::{
    descriptor, DiveParser, Family, FieldType, FieldValue, GarminParser, ParserConfig,
    SampleEvent, ShearwaterParser,
};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Offset of the ".FIT" signature in a Garmin dump (after the file name)
const FIT_SIGNATURE: std::ops::Range<usize> = 32..36;

#[derive(Default)]
struct SampleStats {
    samples: usize,
    events: HashMap<&'static str, usize>,
    max_depth: f64,
    min_temperature: Option<f64>,
    last_time: u32,
}

impl SampleStats {
    fn record(&mut self, event: &SampleEvent) {
        *self.events.entry(event.kind()).or_insert(0) += 1;
        match *event {
            SampleEvent::Time(t) => {
                self.samples += 1;
                self.last_time = t;
            }
            SampleEvent::Depth(d) => self.max_depth = self.max_depth.max(d),
            SampleEvent::Temperature(t) => {
                self.min_temperature = Some(self.min_temperature.map_or(t, |m| m.min(t)));
            }
            _ => {}
        }
    }

    fn print_summary(&self) {
        println!("\n=== SAMPLE SUMMARY ===");
        println!("Sample groups: {}", self.samples);
        println!("Duration: {}:{:02}", self.last_time / 60, self.last_time % 60);
        println!("Deepest sample: {:.1} m", self.max_depth);
        if let Some(t) = self.min_temperature {
            println!("Coldest sample: {:.1} °C", t);
        }

        let mut sorted: Vec<_> = self.events.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(a.1));
        for (kind, count) in sorted {
            println!("  {}: {}", kind, count);
        }
    }
}

fn family_from_tag(tag: &str) -> anyhow::Result<Family> {
    descriptor::iter()
        .map(|d| d.family())
        .find(|f| f.as_str() == tag)
        .with_context(|| format!("Unknown family tag {:?}", tag))
}

fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::DiveTime(s) => format!("{}:{:02} min", s / 60, s % 60),
        FieldValue::MaxDepth(m) | FieldValue::AvgDepth(m) => format!("{:.2} m", m),
        FieldValue::GasMixCount(n) => n.to_string(),
        FieldValue::GasMix(mix) => mix.to_string(),
        FieldValue::Salinity(s) => format!("{:?} ({} kg/m³)", s.water, s.density),
        FieldValue::Atmospheric(bar) => format!("{:.3} bar", bar),
        FieldValue::DiveMode(mode) => mode.to_string(),
        FieldValue::String(s) => format!("{}: {}", s.desc, s.value),
    }
}

fn print_fields(parser: &mut dyn DiveParser<'_>) -> anyhow::Result<()> {
    println!("\n=== DIVE ===");
    match parser.datetime() {
        Ok(dt) => println!("Start: {}", dt),
        Err(e) => println!("Start: unavailable ({})", e),
    }

    for kind in [
        FieldType::DiveTime,
        FieldType::MaxDepth,
        FieldType::AvgDepth,
        FieldType::GasMixCount,
        FieldType::Salinity,
        FieldType::Atmospheric,
        FieldType::DiveMode,
    ] {
        match parser.field(kind, 0) {
            Ok(value) => println!("{}: {}", kind, format_value(&value)),
            Err(e) if e.is_unsupported() => {}
            Err(e) => return Err(e).context(format!("Reading {}", kind)),
        }
    }

    for (kind, label) in [(FieldType::GasMix, "Gas"), (FieldType::String, "Info")] {
        for index in 0.. {
            match parser.field(kind, index) {
                Ok(value) => println!("{} {}: {}", label, index, format_value(&value)),
                Err(e) if e.is_unsupported() => break,
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <dump.bin> [--family <tag>] [--model <n>] [--serial <hex>] [--limit <count>]",
            args[0]
        );
        eprintln!("\nExample:");
        eprintln!("  {} petrel.bin --family shearwater-petrel --serial 1a2b3c4d", args[0]);
        std::process::exit(1);
    }

    let dump = PathBuf::from(&args[1]);
    let mut family: Option<Family> = None;
    let mut config = ParserConfig::new();
    let mut limit: Option<usize> = None;

    // Parse arguments
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--family" => {
                i += 1;
                if i < args.len() {
                    family = Some(family_from_tag(&args[i])?);
                }
            }
            "--model" => {
                i += 1;
                if i < args.len() {
                    config = config.with_model(args[i].parse()?);
                }
            }
            "--serial" => {
                i += 1;
                if i < args.len() {
                    config = config.with_serial(u32::from_str_radix(&args[i], 16)?);
                }
            }
            "--limit" => {
                i += 1;
                if i < args.len() {
                    limit = Some(args[i].parse()?);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    let data = std::fs::read(&dump).with_context(|| format!("Reading {:?}", dump))?;

    let family = match family {
        Some(family) => family,
        None if data.get(FIT_SIGNATURE) == Some(b".FIT".as_slice()) => Family::Garmin,
        None => Family::ShearwaterPetrel,
    };

    println!("=== Dive Log Decoder {} ===", dive_log_decoder::VERSION);
    println!("Dump: {:?} ({} bytes)", dump, data.len());
    println!("Family: {}", family);

    let mut parser: Box<dyn DiveParser<'_> + '_> = match family {
        Family::Garmin => Box::new(GarminParser::new()),
        Family::ShearwaterPredator | Family::ShearwaterPetrel => {
            if config.model == 0 {
                if let Some(row) = descriptor::iter().find(|d| d.family() == family) {
                    config = config.with_model(row.model());
                }
            }
            Box::new(ShearwaterParser::new(family, &config)?)
        }
        other => bail!("No parser for family {}", other),
    };
    parser.set_data(&data)?;

    print_fields(parser.as_mut())?;

    println!("\n=== SAMPLES ===");
    let mut stats = SampleStats::default();
    let mut printed = 0;
    parser.samples_foreach(&mut |event: SampleEvent| {
        stats.record(&event);
        if limit.map_or(true, |max| printed < max) {
            println!("{:?}", event);
            printed += 1;
        }
    })?;

    stats.print_summary();

    Ok(())
}
