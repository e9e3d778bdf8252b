
extern crate ca_acquisition;
extern crate clap;
extern crate colored;
extern crate serde;

use std::sync::Arc;

use clap::{Arg, App};
use colored::*;
use serde::Serialize;

use ca_acquisition::io::{self, SampleFormat};
use ca_acquisition::gnss::gps_l1_ca::{self, acquisition, CODE_LENGTH};
use ca_acquisition::gnss::gps_l1_ca::acquisition::SatelliteReport;

#[derive(Debug, Serialize)]
struct AcquisitionRecord {
	pub satellite:usize,
	pub taps:(u8, u8),
	pub nav_bit:u8,
	pub delta_bit:u8,
	pub delta:i32,
	pub code_phase_chips:usize,
	pub code_phase_sec:f64,
	pub correlation:i64,
}

impl AcquisitionRecord {

	fn from_report(report:&SatelliteReport) -> Option<Self> {
		use ca_acquisition::gnss::common::acquisition::CorrelationResult::*;
		match report.result {
			Detected{ code_phase, sum } => Some(Self {
				satellite:        report.satellite,
				taps:             report.taps,
				nav_bit:          report.result.nav_bit().unwrap_or(0),
				delta_bit:        report.result.delta_bit().unwrap_or(0),
				delta:            report.result.delta(),
				code_phase_chips: code_phase,
				code_phase_sec:   (code_phase as f64) / gps_l1_ca::CHIP_RATE_HZ,
				correlation:      sum,
			}),
			NotDetected => None,
		}
	}

}

#[tokio::main]
pub async fn main() -> Result<(), &'static str> {

	let matches = App::new("GPS L1 CA Acquisition")
		.version("0.1.0")
		.author("John Stanford (johnwstanford@gmail.com)")
		.about("Takes one code period of baseband samples and reports code phase and bit polarity for each L1 CA satellite found")
		.arg(Arg::with_name("filename")
			.short("f").long("filename")
			.help("Input filename")
			.required(true).takes_value(true))
		.arg(Arg::with_name("input_type")
			.short("t").long("type")
			.takes_value(true)
			.possible_values(&["text", "i8", "i16"])
			.default_value("text"))
		.arg(Arg::with_name("prn_table")
			.long("prn_table")
			.help("Which tap table to search: the 24 default satellites or all 32 PRNs")
			.takes_value(true)
			.possible_values(&["satellites", "all"])
			.default_value("satellites"))
		.arg(Arg::with_name("concurrent")
			.long("concurrent")
			.help("Search each satellite on its own task"))
		.arg(Arg::with_name("quiet")
			.short("q").long("quiet")
			.help("Suppress per-satellite output on stderr"))
		.get_matches();

	let fname:&str = matches.value_of("filename").unwrap();
	let format:SampleFormat = SampleFormat::from_name(matches.value_of("input_type").unwrap())?;
	let taps:&[(u8, u8)] = match matches.value_of("prn_table") {
		Some("all") => &gps_l1_ca::PRN_TAPS[..],
		_ => &gps_l1_ca::SATELLITE_TAPS[..],
	};
	let quiet:bool = matches.is_present("quiet");

	let signal:Vec<i32> = io::read_signal(fname, format)?;
	if !quiet {
		eprintln!("Read {} samples from {} ({:?}), searching {} satellites", signal.len(), &fname, format, taps.len());
		if signal.len() != CODE_LENGTH {
			eprintln!("{}", format!("Expected {} samples, got {}; samples past one code period are ignored", CODE_LENGTH, signal.len()).yellow());
		}
	}

	let results = if matches.is_present("concurrent") {
		acquisition::acquire_all_concurrent(Arc::new(signal), taps).await
	} else {
		acquisition::acquire_all(&signal, taps)
	};

	let mut all_records:Vec<AcquisitionRecord> = vec![];
	for result in results.iter() {
		match result {
			Ok(report) => match AcquisitionRecord::from_report(report) {
				Some(record) => {
					if !quiet {
						eprintln!("{}", format!("Satellite {:2}: {}  |  {}", record.satellite, record.delta_bit, record.delta).green());
					}
					all_records.push(record);
				},
				None => if !quiet {
					eprintln!("{}", format!("Satellite {:2}: not detected", report.satellite).yellow());
				}
			},
			Err((satellite, e)) => eprintln!("{}", format!("Satellite {:2}: Error, {:?}", satellite, e).red()),
		}
	}

	// Output data in JSON format
	println!("{}", serde_json::to_string_pretty(&all_records).map_err(|_| "Unable to serialize acquisition records")?);

	Ok(())

}
