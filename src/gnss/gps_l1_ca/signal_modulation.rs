
use crate::DigSigProcErr;
use crate::types::packed_chips::PackedChips;

use super::{CODE_LENGTH, REGISTER_MASK, REGISTER_SIZE};

// Feedback taps, 0-indexed bit positions of the 10-bit register
const G1_FEEDBACK:[u8; 2] = [2, 9];
const G2_FEEDBACK:[u8; 6] = [1, 2, 5, 7, 8, 9];

pub struct ShiftRegister {
	pub state: u16,
	feedback: &'static [u8],
}

impl ShiftRegister {

	pub fn g1() -> Self { Self{ state: REGISTER_MASK, feedback: &G1_FEEDBACK } }
	pub fn g2() -> Self { Self{ state: REGISTER_MASK, feedback: &G2_FEEDBACK } }

	pub fn bit(&self, idx:u8) -> bool { (self.state >> idx) & 1 == 1 }

	pub fn output(&self) -> bool { self.bit((REGISTER_SIZE - 1) as u8) }

	pub fn shift(&mut self) {
		let feedback:bool = self.feedback.iter().fold(false, |acc, idx| acc ^ self.bit(*idx));
		self.state = ((self.state << 1) | (feedback as u16)) & REGISTER_MASK;
	}

}

/// Generates the 1023-chip Gold code selected by the G2 tap pair (t1, t2), 1-indexed.  The packed
/// bit for each chip is set when G1 ^ G2(t1) ^ G2(t2) is zero, i.e. the packed form holds the
/// inverted code bit and `1 - 2*bit` recovers the signed chip.
pub fn ca_code(t1:u8, t2:u8) -> Result<PackedChips, DigSigProcErr> {
	if t1 < 1 || t1 > REGISTER_SIZE as u8 || t2 < 1 || t2 > REGISTER_SIZE as u8 {
		return Err(DigSigProcErr::InvalidTapPair(t1, t2));
	}

	let mut ans = PackedChips::with_len(CODE_LENGTH)?;
	let mut g1 = ShiftRegister::g1();
	let mut g2 = ShiftRegister::g2();

	for idx in 0..CODE_LENGTH {
		let code_bit:bool = g1.output() ^ g2.bit(t1 - 1) ^ g2.bit(t2 - 1);
		if !code_bit { ans.set(idx, true); }

		g1.shift();
		g2.shift();
	}

	Ok(ans)
}

pub fn prn_code(prn:usize) -> Result<PackedChips, DigSigProcErr> {
	match super::prn_taps(prn) {
		Some((t1, t2)) => ca_code(t1, t2),
		None => Err(DigSigProcErr::Other("Invalid PRN number for C/A code generation")),
	}
}

pub fn ca_code_int(t1:u8, t2:u8) -> Result<Vec<i8>, DigSigProcErr> {
	let code = ca_code(t1, t2)?;
	Ok((0..code.len()).map(|idx| code.chip(idx)).collect())
}

pub fn prn_int(prn:usize) -> Result<Vec<i8>, DigSigProcErr> {
	let code = prn_code(prn)?;
	Ok((0..code.len()).map(|idx| code.chip(idx)).collect())
}

#[cfg(test)]
mod tests {

	use super::*;
	use crate::gnss::gps_l1_ca::SATELLITE_TAPS;

	// First ten chips of each code in octal, IS-GPS-200K Table 3-Ia
	const FIRST_TEN_CHIPS_OCTAL:[(usize, u16); 4] = [(1, 0o1440), (2, 0o1620), (3, 0o1710), (4, 0o1744)];

	#[test]
	fn generation_is_deterministic() {
		for (t1, t2) in SATELLITE_TAPS.iter() {
			assert_eq!(ca_code(*t1, *t2).unwrap(), ca_code(*t1, *t2).unwrap());
		}
	}

	#[test]
	fn every_code_is_one_period_long() {
		for (t1, t2) in SATELLITE_TAPS.iter() {
			let code = ca_code(*t1, *t2).unwrap();
			assert_eq!(code.len(), CODE_LENGTH);
			assert_eq!(code.unpack().unwrap().len(), CODE_LENGTH);
		}
	}

	#[test]
	fn first_chips_match_is_gps_200() {
		for (prn, octal) in FIRST_TEN_CHIPS_OCTAL.iter() {
			let chips = prn_int(*prn).unwrap();
			let first_ten:u16 = chips[..10].iter().fold(0u16, |acc, c| (acc << 1) | ((*c == 1) as u16));
			assert_eq!(first_ten, *octal, "PRN {}", prn);
		}
	}

	#[test]
	fn packed_bit_is_inverted_code_bit() {
		// PRN 1 starts 1100100000..., so the packed bits start 0011011111...
		let code = ca_code(2, 6).unwrap();
		assert_eq!(code.words()[0], 0x586d_63ec);
		assert!(!code.get(0) && !code.get(1) && code.get(2) && code.get(3));
	}

	#[test]
	fn codes_are_balanced() {
		// 512 code bits equal to one, i.e. 512 chips of +1 in the packed convention
		for (t1, t2) in SATELLITE_TAPS.iter() {
			let chips = ca_code_int(*t1, *t2).unwrap();
			assert_eq!(chips.iter().filter(|c| **c ==  1).count(), 512);
			assert_eq!(chips.iter().filter(|c| **c == -1).count(), 511);
		}
	}

	#[test]
	fn tap_pairs_are_validated() {
		assert_eq!(ca_code(0, 6),  Err(DigSigProcErr::InvalidTapPair(0, 6)));
		assert_eq!(ca_code(2, 11), Err(DigSigProcErr::InvalidTapPair(2, 11)));
		assert!(prn_code(33).is_err());
	}

	#[test]
	fn equal_taps_give_g1() {
		let code = ca_code(4, 4).unwrap();
		let mut g1 = ShiftRegister::g1();
		for idx in 0..CODE_LENGTH {
			assert_eq!(code.get(idx), !g1.output());
			g1.shift();
		}
	}

	#[test]
	fn registers_return_to_preset_after_one_period() {
		let mut g1 = ShiftRegister::g1();
		let mut g2 = ShiftRegister::g2();
		for _ in 0..CODE_LENGTH {
			g1.shift();
			g2.shift();
		}
		assert_eq!(g1.state, REGISTER_MASK);
		assert_eq!(g2.state, REGISTER_MASK);
	}

}
