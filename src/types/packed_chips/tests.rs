use crate::DigSigProcErr;

use super::PackedChips;

#[test]
fn new_sequence_is_all_positive() {
	let chips = PackedChips::with_len(1023).unwrap();
	assert_eq!(chips.len(), 1023);
	assert_eq!(chips.words().len(), 32);
	assert!((0..1023).all(|idx| chips.chip(idx) == 1));
}

#[test]
fn set_and_get_across_word_boundaries() {
	let mut chips = PackedChips::with_len(70).unwrap();
	for idx in &[0, 31, 32, 63, 64, 69] {
		chips.set(*idx, true);
		assert!(chips.get(*idx));
		assert_eq!(chips.chip(*idx), -1);
	}

	assert_eq!(chips.words(), &[0x8000_0001, 0x8000_0001, 0x0000_0021]);

	chips.set(31, false);
	assert!(!chips.get(31));
	assert_eq!(chips.words()[0], 0x0000_0001);
}

#[test]
fn unpack_follows_sign_convention() {
	let mut chips = PackedChips::with_len(5).unwrap();
	chips.set(1, true);
	chips.set(4, true);
	assert_eq!(chips.unpack().unwrap(), vec![1, -1, 1, 1, -1]);
}

#[test]
fn unpack_into_reuses_buffer() {
	let mut chips = PackedChips::with_len(3).unwrap();
	chips.set(2, true);

	let mut buffer:Vec<i32> = vec![7; 100];
	chips.unpack_into(&mut buffer).unwrap();
	assert_eq!(buffer, vec![1, 1, -1]);
}

#[test]
fn repacking_reproduces_bits() {
	// An irregular bit pattern that touches every word
	let mut chips = PackedChips::with_len(1023).unwrap();
	for idx in (0..1023).filter(|i| (i * 7 + i / 5) % 3 == 0) {
		chips.set(idx, true);
	}

	let unpacked = chips.unpack().unwrap();
	let repacked = PackedChips::from_chips(&unpacked).unwrap();

	assert_eq!(repacked, chips);
	for idx in 0..1023 {
		assert_eq!(repacked.get(idx), chips.get(idx));
	}
}

#[test]
fn empty_sequence() {
	let chips = PackedChips::with_len(0).unwrap();
	assert!(chips.is_empty());
	assert!(chips.unpack().unwrap().is_empty());
}

#[test]
#[should_panic]
fn get_past_end_panics() {
	let chips = PackedChips::with_len(1023).unwrap();
	chips.get(1023);
}

#[test]
fn huge_lengths_report_allocation_failure() {
	for len in &[std::usize::MAX, std::usize::MAX / 2] {
		match PackedChips::with_len(*len) {
			Err(DigSigProcErr::AllocationFailure(_)) => {},
			other => panic!("Expected AllocationFailure for len {}, got {:?}", len, other.map(|c| c.len())),
		}
	}
}
