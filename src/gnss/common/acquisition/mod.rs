
use serde::Serialize;

pub mod serial_search;


/// A shift is accepted once the magnitude of its correlation sum is strictly greater than this
pub const MIN_CORRELATION:i64 = 1023 - 3 * 65;

/// Integer encoding for "no shift crossed the threshold"; outside the valid range of signed shifts
pub const NOT_DETECTED:i32 = 10000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CorrelationResult {
	NotDetected,
	Detected { code_phase:usize, sum:i64 },
}

impl CorrelationResult {

	pub fn is_detected(&self) -> bool { self.code_phase().is_some() }

	pub fn code_phase(&self) -> Option<usize> {
		match self {
			Self::Detected{ code_phase, .. } => Some(*code_phase),
			Self::NotDetected => None,
		}
	}

	/// Signed shift: +code_phase for a non-negative sum and -code_phase for a negative one, or
	/// NOT_DETECTED.  At code phase zero both polarities encode as 0; use `nav_bit` there.
	pub fn delta(&self) -> i32 {
		match self {
			Self::Detected{ code_phase, sum } => if *sum < 0 { -(*code_phase as i32) } else { *code_phase as i32 },
			Self::NotDetected => NOT_DETECTED,
		}
	}

	/// Bit as read from the integer encoding: 1 when delta > 0, else 0.  Differs from `nav_bit` only
	/// for a positive detection at code phase zero.
	pub fn delta_bit(&self) -> Option<u8> {
		match self {
			Self::Detected{ .. } => Some(if self.delta() > 0 { 1 } else { 0 }),
			Self::NotDetected => None,
		}
	}

	pub fn nav_bit(&self) -> Option<u8> {
		match self {
			Self::Detected{ sum, .. } => Some(if *sum >= 0 { 1 } else { 0 }),
			Self::NotDetected => None,
		}
	}

}
