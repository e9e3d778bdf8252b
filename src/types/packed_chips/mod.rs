
use crate::DigSigProcErr;

#[cfg(test)]
mod tests;

const BITS_PER_WORD:usize = 32;

/// A sequence of binary chips stored one bit per chip.  A set bit is the chip value -1 and a clear
/// bit is the chip value +1, so the signed view of bit `b` is always `1 - 2*b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedChips {
	words: Vec<u32>,
	len: usize,
}

impl PackedChips {

	/// All chips start out as +1 (every bit clear)
	pub fn with_len(len:usize) -> Result<Self, DigSigProcErr> {
		let num_words:usize = len / BITS_PER_WORD + (len % BITS_PER_WORD != 0) as usize;

		let mut words:Vec<u32> = Vec::new();
		words.try_reserve_exact(num_words).map_err(|_| DigSigProcErr::AllocationFailure("Unable to allocate packed chip storage"))?;
		words.resize(num_words, 0);

		Ok(Self{ words, len })
	}

	/// Packs a signed chip sequence; a bit is set iff the value is -1
	pub fn from_chips(chips:&[i32]) -> Result<Self, DigSigProcErr> {
		let mut ans = Self::with_len(chips.len())?;
		for (idx, chip) in chips.iter().enumerate() {
			if *chip == -1 { ans.set(idx, true); }
		}
		Ok(ans)
	}

	pub fn len(&self) -> usize { self.len }
	pub fn is_empty(&self) -> bool { self.len == 0 }
	pub fn words(&self) -> &[u32] { &self.words }

	pub fn get(&self, idx:usize) -> bool {
		assert!(idx < self.len, "Chip index {} out of range for length {}", idx, self.len);
		(self.words[idx / BITS_PER_WORD] >> (idx % BITS_PER_WORD)) & 1 == 1
	}

	pub fn set(&mut self, idx:usize, bit:bool) {
		assert!(idx < self.len, "Chip index {} out of range for length {}", idx, self.len);
		let mask:u32 = 1u32 << (idx % BITS_PER_WORD);
		if bit { self.words[idx / BITS_PER_WORD] |=  mask; }
		else   { self.words[idx / BITS_PER_WORD] &= !mask; }
	}

	pub fn chip(&self, idx:usize) -> i8 { 1 - 2*(self.get(idx) as i8) }

	/// Expands into a caller-owned buffer so the same scratch space can be reused between codes
	pub fn unpack_into(&self, out:&mut Vec<i32>) -> Result<(), DigSigProcErr> {
		out.clear();
		out.try_reserve_exact(self.len).map_err(|_| DigSigProcErr::AllocationFailure("Unable to allocate unpacked chip buffer"))?;
		out.extend((0..self.len).map(|idx| {
			let bit = (self.words[idx / BITS_PER_WORD] >> (idx % BITS_PER_WORD)) & 1;
			1 - 2*(bit as i32)
		}));
		Ok(())
	}

	pub fn unpack(&self) -> Result<Vec<i32>, DigSigProcErr> {
		let mut ans:Vec<i32> = Vec::new();
		self.unpack_into(&mut ans)?;
		Ok(ans)
	}

}
