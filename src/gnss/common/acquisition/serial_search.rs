
use crate::DigSigProcErr;
use crate::types::packed_chips::PackedChips;

use super::{CorrelationResult, MIN_CORRELATION};

/// Circular cross-correlation search over every code phase of one code period.  The unpacked code
/// lives in a buffer owned by the correlator so repeated searches don't reallocate it.
pub struct Correlator {
	unpacked: Vec<i32>,
}

impl Correlator {

	pub fn new() -> Self { Self{ unpacked: Vec::new() } }

	pub fn unpacked(&self) -> &[i32] { &self.unpacked }

	/// Returns the first code phase, in increasing order, whose correlation magnitude exceeds
	/// MIN_CORRELATION.  This is not a peak search; later and stronger shifts are never examined.
	pub fn correlate(&mut self, signal:&[i32], code:&PackedChips) -> Result<CorrelationResult, DigSigProcErr> {
		let n:usize = code.len();
		if n == 0 {
			return Err(DigSigProcErr::InvalidSignal("Cannot correlate against an empty code"));
		}
		if signal.len() < n {
			return Err(DigSigProcErr::InvalidSignal("Signal is shorter than one code period"));
		}

		code.unpack_into(&mut self.unpacked)?;
		let signal:&[i32] = &signal[..n];

		for shift in 0..n {
			let sum:i64 = correlation_at(signal, &self.unpacked, shift);
			if sum.abs() > MIN_CORRELATION {
				return Ok(CorrelationResult::Detected{ code_phase: shift, sum });
			}
		}

		Ok(CorrelationResult::NotDetected)
	}

}

impl Default for Correlator {
	fn default() -> Self { Self::new() }
}

/// Integer form of the search result, see `CorrelationResult::delta`
pub fn cross_correlate(signal:&[i32], code:&PackedChips) -> Result<i32, DigSigProcErr> {
	Correlator::new().correlate(signal, code).map(|result| result.delta())
}

/// sum over i of signal[(i + shift) % n] * unpacked[i], with n = unpacked.len().  The circular index
/// is split into two contiguous runs so the inner loop needs no modulo.
pub fn correlation_at(signal:&[i32], unpacked:&[i32], shift:usize) -> i64 {
	let n:usize = unpacked.len();
	let (head, tail) = unpacked.split_at(n - shift);
	dot(&signal[shift..n], head) + dot(&signal[..shift], tail)
}

// Unrolled by four
fn dot(a:&[i32], b:&[i32]) -> i64 {
	let mut a_chunks = a.chunks_exact(4);
	let mut b_chunks = b.chunks_exact(4);

	let mut sum:i64 = 0;
	for (x, y) in (&mut a_chunks).zip(&mut b_chunks) {
		sum += (x[0] as i64)*(y[0] as i64)
			 + (x[1] as i64)*(y[1] as i64)
			 + (x[2] as i64)*(y[2] as i64)
			 + (x[3] as i64)*(y[3] as i64);
	}

	sum + a_chunks.remainder().iter().zip(b_chunks.remainder().iter())
		.map(|(x, y)| (*x as i64)*(*y as i64))
		.sum::<i64>()
}
