// Shearwater decoding over synthetic dive buffers
use dive_log_decoder::{
    DecoKind, DiveMode, DiveParser, FieldType, FieldValue, ParserConfig, ParserStatus,
    SampleEvent, ShearwaterParser, WaterType,
};

const BLOCK: usize = 0x80;
const PETREL_SAMPLE: usize = 0x20;
const PREDATOR_SAMPLE: usize = 0x10;

const STATUS_OC: u8 = 0x10;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Header block with the fields every test reads
fn header(imperial: bool) -> Vec<u8> {
    let mut header = vec![0u8; BLOCK];
    header[4] = 30; // GF low
    header[5] = 85; // GF high
    header[8] = imperial as u8;
    header[9] = 41; // 4.1 V
    header[12..16].copy_from_slice(&1_500_000_000u32.to_be_bytes());
    header[19] = 0x51;
    header[47..49].copy_from_slice(&1013u16.to_be_bytes());
    header[83..85].copy_from_slice(&1030u16.to_be_bytes());
    header
}

fn sample(size: usize, depth: u16, o2: u8, he: u8, status: u8) -> Vec<u8> {
    let mut s = vec![0u8; size];
    s[0..2].copy_from_slice(&depth.to_be_bytes());
    s[7] = o2;
    s[8] = he;
    s[9] = 12; // NDL minutes
    s[11] = status;
    s[13] = 18;
    s
}

fn dive(header: Vec<u8>, samples: &[Vec<u8>], max_depth: u16, minutes: u16) -> Vec<u8> {
    let mut data = header;
    for s in samples {
        data.extend_from_slice(s);
    }
    let mut footer = vec![0u8; 2 * BLOCK];
    footer[4..6].copy_from_slice(&max_depth.to_be_bytes());
    footer[6..8].copy_from_slice(&minutes.to_be_bytes());
    data.extend_from_slice(&footer);
    data
}

fn strings(parser: &mut ShearwaterParser<'_>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for index in 0.. {
        match parser.field(FieldType::String, index) {
            Ok(FieldValue::String(s)) => out.push((s.desc.to_string(), s.value)),
            Ok(other) => panic!("unexpected value {:?}", other),
            Err(err) => {
                assert!(err.is_unsupported());
                break;
            }
        }
    }
    out
}

#[test]
fn empty_predator_dive() {
    init_logging();
    let data = vec![0u8; 2 * BLOCK];
    let mut parser = ShearwaterParser::predator(&ParserConfig::default());
    parser.set_data(&data).unwrap();

    assert_eq!(
        parser.field(FieldType::GasMixCount, 0).unwrap(),
        FieldValue::GasMixCount(0)
    );
    assert_eq!(
        parser.field(FieldType::DiveMode, 0).unwrap(),
        FieldValue::DiveMode(DiveMode::OpenCircuit)
    );
    assert_eq!(
        parser.field(FieldType::DiveTime, 0).unwrap(),
        FieldValue::DiveTime(0)
    );
    assert!(parser.samples().unwrap().is_empty());
    assert_eq!(parser.log_version().unwrap(), 6);
    assert_eq!(parser.status(), ParserStatus::Cached);
}

#[test]
fn short_buffer_fails_until_replaced() {
    init_logging();
    let short = vec![0u8; 100];
    let good = dive(header(false), &[], 0, 0);

    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&short).unwrap();
    assert!(parser.datetime().unwrap_err().is_data_format());
    assert!(parser.field(FieldType::MaxDepth, 0).unwrap_err().is_data_format());
    assert!(parser.samples().unwrap_err().is_data_format());
    assert_eq!(parser.status(), ParserStatus::Loaded);

    parser.set_data(&good).unwrap();
    assert_eq!(parser.datetime().unwrap().to_string(), "2017-07-14 02:40:00");
    assert!(parser.field(FieldType::MaxDepth, 0).is_ok());
}

#[test]
fn unloaded_parser_reports_data_format() {
    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    assert_eq!(parser.status(), ParserStatus::Unloaded);
    assert!(parser.datetime().unwrap_err().is_data_format());
    assert!(parser.field(FieldType::DiveTime, 0).unwrap_err().is_data_format());
}

#[test]
fn header_fields() {
    let data = dive(header(false), &[], 321, 47);
    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&data).unwrap();

    assert_eq!(
        parser.field(FieldType::DiveTime, 0).unwrap(),
        FieldValue::DiveTime(47 * 60)
    );
    assert_eq!(
        parser.field(FieldType::MaxDepth, 0).unwrap(),
        FieldValue::MaxDepth(321.0)
    );

    match parser.field(FieldType::Salinity, 0).unwrap() {
        FieldValue::Salinity(s) => {
            assert_eq!(s.water, WaterType::Salt);
            assert_eq!(s.density, 1030.0);
        }
        other => panic!("unexpected {:?}", other),
    }

    let atmospheric = parser.field(FieldType::Atmospheric, 0).unwrap();
    assert!((atmospheric.as_f64().unwrap() - 1.013).abs() < 1e-9);
    assert!(parser.field(FieldType::AvgDepth, 0).unwrap_err().is_unsupported());
}

#[test]
fn descriptive_strings_in_order() {
    let mut head = header(false);
    head[127] = 7;
    head[120] = 5;
    let data = dive(head, &[], 0, 0);

    let config = ParserConfig::new().with_serial(0x00c0_ffee);
    let mut parser = ShearwaterParser::petrel(&config);
    parser.set_data(&data).unwrap();

    let found = strings(&mut parser);
    let expected: Vec<(String, String)> = [
        ("Serial", "00c0ffee"),
        ("FW Version", "51"),
        ("Deco model", "GF 30/85"),
        ("Battery type", "3.7V Li-Ion"),
        ("Battery at end", "4.1 V"),
    ]
    .iter()
    .map(|(d, v)| (d.to_string(), v.to_string()))
    .collect();
    assert_eq!(found, expected);
}

#[test]
fn closed_circuit_flip() {
    let samples = vec![
        sample(PETREL_SAMPLE, 30, 21, 0, STATUS_OC),
        sample(PETREL_SAMPLE, 60, 21, 0, 0),
        sample(PETREL_SAMPLE, 30, 21, 0, STATUS_OC),
    ];
    let data = dive(header(false), &samples, 60, 1);

    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&data).unwrap();
    assert_eq!(
        parser.field(FieldType::DiveMode, 0).unwrap(),
        FieldValue::DiveMode(DiveMode::ClosedCircuit)
    );

    let found = strings(&mut parser);
    assert_eq!(found[0], ("PPO2 source".to_string(), "cells".to_string()));

    let setpoints = parser
        .samples()
        .unwrap()
        .into_iter()
        .filter(|e| matches!(e, SampleEvent::Setpoint(_)))
        .count();
    assert_eq!(setpoints, 1);
}

#[test]
fn depth_units() {
    let samples = vec![sample(PREDATOR_SAMPLE, 100, 21, 0, STATUS_OC)];

    let metric = dive(header(false), &samples, 0, 0);
    let mut parser = ShearwaterParser::predator(&ParserConfig::default());
    parser.set_data(&metric).unwrap();
    let events = parser.samples().unwrap();
    assert_eq!(events[0], SampleEvent::Time(10));
    assert_eq!(events[1], SampleEvent::Depth(10.0));

    let imperial = dive(header(true), &samples, 0, 0);
    parser.set_data(&imperial).unwrap();
    assert_eq!(parser.status(), ParserStatus::Loaded);
    match parser.samples().unwrap()[1] {
        SampleEvent::Depth(depth) => assert!((depth - 3.048).abs() < 1e-9),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn sample_group_layout() {
    let samples = vec![sample(PETREL_SAMPLE, 55, 32, 0, STATUS_OC)];
    let data = dive(header(false), &samples, 0, 0);

    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&data).unwrap();
    assert_eq!(
        parser.samples().unwrap(),
        vec![
            SampleEvent::Time(10),
            SampleEvent::Depth(5.5),
            SampleEvent::Temperature(18.0),
            SampleEvent::Cns(0.0),
            SampleEvent::GasMix(0),
            SampleEvent::Deco {
                kind: DecoKind::Ndl,
                depth: 0.0,
                time: 12 * 60,
            },
        ]
    );
}

#[test]
fn reads_are_idempotent() {
    let samples = vec![
        sample(PETREL_SAMPLE, 30, 21, 0, STATUS_OC),
        sample(PETREL_SAMPLE, 90, 18, 45, STATUS_OC),
        sample(PETREL_SAMPLE, 60, 50, 0, STATUS_OC),
    ];
    let data = dive(header(false), &samples, 90, 3);

    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&data).unwrap();

    let first = parser.samples().unwrap();
    let second = parser.samples().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        parser.field(FieldType::GasMix, 1).unwrap(),
        parser.field(FieldType::GasMix, 1).unwrap()
    );
}

#[test]
fn gas_switches_index_the_gas_table() {
    let samples = vec![
        sample(PETREL_SAMPLE, 30, 21, 0, STATUS_OC),
        sample(PETREL_SAMPLE, 90, 18, 45, STATUS_OC),
        sample(PETREL_SAMPLE, 60, 50, 0, STATUS_OC),
        sample(PETREL_SAMPLE, 30, 100, 0, STATUS_OC),
    ];
    let data = dive(header(false), &samples, 90, 4);

    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&data).unwrap();

    let count = match parser.field(FieldType::GasMixCount, 0).unwrap() {
        FieldValue::GasMixCount(count) => count,
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(count, 4);

    let mix = parser.field(FieldType::GasMix, 1).unwrap();
    assert_eq!(mix.as_gasmix().unwrap().to_string(), "18/45");
    assert!(parser.field(FieldType::GasMix, count).unwrap_err().is_unsupported());

    for event in parser.samples().unwrap() {
        if let SampleEvent::GasMix(index) = event {
            assert!(index < count);
        }
    }
}

#[test]
fn config_from_json() {
    let config: ParserConfig = serde_json::from_str(r#"{"model": 2, "serial": 305419896}"#).unwrap();
    assert_eq!(config.model, 2);

    let partial: ParserConfig = serde_json::from_str(r#"{"serial": 1}"#).unwrap();
    assert_eq!(partial.model, 0);

    let data = dive(header(false), &[], 0, 0);
    let mut parser = ShearwaterParser::predator(&config);
    parser.set_data(&data).unwrap();
    let found = strings(&mut parser);
    assert_eq!(found[0].1, "12345678");
}

/// Log version 7 header: adds transmitter words and battery type
fn header_v7() -> Vec<u8> {
    let mut head = header(false);
    head[127] = 7;
    head[120] = 5;
    head
}

fn transmitters(mut s: Vec<u8>, t1: u16, t2: u16, rbt: u8) -> Vec<u8> {
    s[27..29].copy_from_slice(&t1.to_be_bytes());
    s[19..21].copy_from_slice(&t2.to_be_bytes());
    s[21] = rbt;
    s
}

fn of_kind(events: Vec<SampleEvent>, kinds: &[&str]) -> Vec<SampleEvent> {
    events
        .into_iter()
        .filter(|e| kinds.contains(&e.kind()))
        .collect()
}

#[test]
fn tank_pressure_and_rbt() {
    let samples = vec![
        transmitters(sample(PETREL_SAMPLE, 100, 21, 0, STATUS_OC), 1000, 0xFFFF, 33),
        transmitters(
            sample(PETREL_SAMPLE, 100, 21, 0, STATUS_OC),
            0x2000 | 900,
            0xFFFF,
            0xF5,
        ),
    ];
    let data = dive(header_v7(), &samples, 10, 1);

    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&data).unwrap();
    assert_eq!(parser.log_version().unwrap(), 7);

    let events = of_kind(parser.samples().unwrap(), &["pressure", "rbt"]);
    assert_eq!(events.len(), 3, "{:?}", events);

    // 2 psi steps, state nibble masked off
    let expected = [(0, 137.895_145_863_36), (2, 124.105_631_277_024)];
    for (position, bar) in expected {
        match events[position] {
            SampleEvent::Pressure { tank, value } => {
                assert_eq!(tank, 0);
                assert!((value - bar).abs() < 1e-6, "{}", value);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
    assert_eq!(events[1], SampleEvent::Rbt(33));
}

#[test]
fn older_logs_have_no_transmitter_samples() {
    let samples = vec![transmitters(
        sample(PETREL_SAMPLE, 100, 21, 0, STATUS_OC),
        1000,
        1000,
        33,
    )];
    let data = dive(header(false), &samples, 10, 1);

    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&data).unwrap();
    assert!(of_kind(parser.samples().unwrap(), &["pressure", "rbt"]).is_empty());
    assert!(strings(&mut parser).iter().all(|(desc, _)| !desc.ends_with("battery")));
}

#[test]
fn transmitter_battery_is_worst_seen() {
    let samples = vec![
        transmitters(sample(PETREL_SAMPLE, 100, 21, 0, STATUS_OC), 0x0000, 0xFFFF, 0xFF),
        transmitters(sample(PETREL_SAMPLE, 100, 21, 0, STATUS_OC), 0x2000, 0xFFFF, 0xFF),
    ];
    let data = dive(header_v7(), &samples, 10, 1);

    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&data).unwrap();

    let found = strings(&mut parser);
    assert_eq!(
        found.last(),
        Some(&("T1 battery".to_string(), "warning".to_string()))
    );
    assert!(found.iter().all(|(desc, _)| desc != "T2 battery"));

    let t1 = parser.field(FieldType::String, found.len() - 1).unwrap();
    assert_eq!(t1.as_string().unwrap().desc, "T1 battery");
}

#[test]
fn negative_temperatures() {
    let mut cold = sample(PETREL_SAMPLE, 100, 21, 0, STATUS_OC);
    cold[13] = -5i8 as u8;
    let mut colder = sample(PETREL_SAMPLE, 100, 21, 0, STATUS_OC);
    colder[13] = -110i8 as u8;
    let data = dive(header(false), &[cold, colder.clone()], 10, 1);

    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&data).unwrap();
    assert_eq!(
        of_kind(parser.samples().unwrap(), &["temperature"]),
        vec![SampleEvent::Temperature(0.0), SampleEvent::Temperature(-8.0)]
    );

    let mut warm = sample(PETREL_SAMPLE, 100, 21, 0, STATUS_OC);
    warm[13] = 50;
    let data = dive(header(true), &[warm, colder], 10, 1);
    parser.set_data(&data).unwrap();
    let temperatures: Vec<f64> = of_kind(parser.samples().unwrap(), &["temperature"])
        .into_iter()
        .map(|e| match e {
            SampleEvent::Temperature(t) => t,
            other => panic!("unexpected {:?}", other),
        })
        .collect();
    // 50 °F and -8 °F
    assert!((temperatures[0] - 10.0).abs() < 1e-9);
    assert!((temperatures[1] + 22.222_222_222).abs() < 1e-6);
}

fn calibrated_header() -> Vec<u8> {
    let mut head = header(false);
    head[17] = 70; // low setpoint
    head[18] = 130; // high setpoint
    head[86] = 0b101;
    head[87..89].copy_from_slice(&2200u16.to_be_bytes());
    head[89..91].copy_from_slice(&2100u16.to_be_bytes());
    head[91..93].copy_from_slice(&2000u16.to_be_bytes());
    head
}

fn cells(size: usize, status: u8) -> Vec<u8> {
    let mut s = sample(size, 100, 21, 0, status);
    s[12] = 50;
    s[14] = 99;
    s[15] = 60;
    s
}

fn ppo2_values(events: Vec<SampleEvent>) -> Vec<(Option<usize>, f64)> {
    of_kind(events, &["ppo2"])
        .into_iter()
        .map(|e| match e {
            SampleEvent::Ppo2 { sensor, value } => (sensor, value),
            other => panic!("unexpected {:?}", other),
        })
        .collect()
}

#[test]
fn calibrated_cells() {
    let data = dive(calibrated_header(), &[cells(PETREL_SAMPLE, 0)], 10, 1);
    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&data).unwrap();

    let found = strings(&mut parser);
    assert_eq!(found[0], ("PPO2 source".to_string(), "cells".to_string()));

    let ppo2 = ppo2_values(parser.samples().unwrap());
    assert_eq!(ppo2.len(), 2);
    assert_eq!(ppo2[0].0, Some(0));
    assert!((ppo2[0].1 - 1.1).abs() < 1e-9);
    assert_eq!(ppo2[1].0, Some(2));
    assert!((ppo2[1].1 - 1.2).abs() < 1e-9);
}

#[test]
fn predator_cells_and_header_setpoints() {
    let samples = vec![
        cells(PREDATOR_SAMPLE, 0),
        cells(PREDATOR_SAMPLE, 0x04), // high setpoint selected
    ];
    // Predator footers are a single block here, keep it blank
    let data = dive(calibrated_header(), &samples, 0, 0);
    let mut parser = ShearwaterParser::predator(&ParserConfig::new().with_model(2));
    parser.set_data(&data).unwrap();
    let events = parser.samples().unwrap();

    let ppo2 = ppo2_values(events.clone());
    assert_eq!(ppo2.len(), 4);
    assert!((ppo2[0].1 - 50.0 * 0.022 * 2.2).abs() < 1e-9);
    assert!((ppo2[1].1 - 60.0 * 0.020 * 2.2).abs() < 1e-9);

    assert_eq!(
        of_kind(events, &["setpoint"]),
        vec![SampleEvent::Setpoint(0.7), SampleEvent::Setpoint(1.3)]
    );
}

#[test]
fn imperial_deco_stop() {
    let mut stop = sample(PETREL_SAMPLE, 600, 21, 0, STATUS_OC);
    stop[2..4].copy_from_slice(&20u16.to_be_bytes());
    let data = dive(header(true), &[stop], 60, 1);

    let mut parser = ShearwaterParser::petrel(&ParserConfig::default());
    parser.set_data(&data).unwrap();
    let deco = of_kind(parser.samples().unwrap(), &["deco"]);
    match deco.as_slice() {
        [SampleEvent::Deco { kind, depth, time }] => {
            assert_eq!(*kind, DecoKind::DecoStop);
            // Stop depth is whole feet
            assert!((depth - 6.096).abs() < 1e-9);
            assert_eq!(*time, 12 * 60);
        }
        other => panic!("unexpected {:?}", other),
    }
}
