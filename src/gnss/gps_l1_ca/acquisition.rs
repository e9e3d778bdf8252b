
use std::sync::Arc;

use serde::Serialize;
use tokio::task;

use crate::DigSigProcErr;
use crate::gnss::common::acquisition::CorrelationResult;
use crate::gnss::common::acquisition::serial_search::Correlator;

use super::signal_modulation;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SatelliteReport {
	pub satellite:usize,
	pub taps:(u8, u8),
	pub result:CorrelationResult,
}

/// A failed search, tagged with the 1-based satellite number it belongs to
pub type SatelliteError = (usize, DigSigProcErr);

fn acquire_one(correlator:&mut Correlator, signal:&[i32], satellite:usize, taps:(u8, u8)) -> Result<SatelliteReport, SatelliteError> {
	let code = signal_modulation::ca_code(taps.0, taps.1).map_err(|e| (satellite, e))?;
	let result = correlator.correlate(signal, &code).map_err(|e| (satellite, e))?;
	Ok(SatelliteReport{ satellite, taps, result })
}

/// Searches for every satellite in the table, in table order.  An error for one satellite doesn't
/// stop the search for the others.
pub fn acquire_all(signal:&[i32], taps:&[(u8, u8)]) -> Vec<Result<SatelliteReport, SatelliteError>> {
	let mut correlator = Correlator::new();
	taps.iter().enumerate()
		.map(|(idx, t)| acquire_one(&mut correlator, signal, idx + 1, *t))
		.collect()
}

/// Same output as `acquire_all`, but each satellite is searched on its own blocking task
pub async fn acquire_all_concurrent(signal:Arc<Vec<i32>>, taps:&[(u8, u8)]) -> Vec<Result<SatelliteReport, SatelliteError>> {
	let handles:Vec<(usize, task::JoinHandle<Result<SatelliteReport, SatelliteError>>)> = taps.iter().enumerate().map(|(idx, t)| {
		let satellite = idx + 1;
		let taps = *t;
		let signal = Arc::clone(&signal);
		(satellite, task::spawn_blocking(move || {
			let mut correlator = Correlator::new();
			acquire_one(&mut correlator, &signal, satellite, taps)
		}))
	}).collect();

	let mut ans = Vec::with_capacity(handles.len());
	for (satellite, handle) in handles {
		ans.push(match handle.await {
			Ok(result) => result,
			Err(_) => Err((satellite, DigSigProcErr::Other("Acquisition task failed to complete"))),
		});
	}
	ans
}

pub fn detections(results:&[Result<SatelliteReport, SatelliteError>]) -> Vec<&SatelliteReport> {
	results.iter().filter_map(|r| match r {
		Ok(report) if report.result.is_detected() => Some(report),
		_ => None,
	}).collect()
}
