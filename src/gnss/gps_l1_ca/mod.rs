
pub const CODE_LENGTH:usize = 1023;
pub const REGISTER_SIZE:usize = 10;
pub const REGISTER_MASK:u16 = 0x3FF;

pub const CHIP_RATE_HZ:f64 = 1.023e6;

pub mod acquisition;
pub mod signal_modulation;

// G2 tap pairs for the satellites searched by default, in reporting order
pub const SATELLITE_TAPS:[(u8, u8); 24] = [
	(2, 6), (3, 7), (4, 8), (5, 9), (1, 9), (2, 10), (1, 8), (2, 9), (3, 10), (2, 3), (3, 4), (5, 6),
	(6, 7), (7, 8), (8, 9), (9, 10), (1, 4), (2, 5), (3, 6), (4, 7), (5, 8), (6, 9), (1, 3), (4, 6),
];

// Given in IS-GPS-200K, Table 3-Ia (PRN 01 through 32)
pub const PRN_TAPS:[(u8, u8); 32] = [
	(2, 6), (3, 7), (4, 8), (5, 9), (1, 9), (2, 10), (1, 8), (2, 9), (3, 10), (2, 3), (3, 4), (5, 6),
	(6, 7), (7, 8), (8, 9), (9, 10), (1, 4), (2, 5), (3, 6), (4, 7), (5, 8), (6, 9), (1, 3), (4, 6),
	(5, 7), (6, 8), (7, 9), (8, 10), (1, 6), (2, 7), (3, 8), (4, 9),
];

pub fn prn_taps(prn:usize) -> Option<(u8, u8)> {
	if prn >= 1 && prn <= PRN_TAPS.len() { Some(PRN_TAPS[prn-1]) }
	else { None }
}

#[test]
fn satellite_table_is_prefix_of_prn_table() {
	assert_eq!(&SATELLITE_TAPS[..], &PRN_TAPS[..24]);
	assert_eq!(prn_taps(1),  Some((2, 6)));
	assert_eq!(prn_taps(32), Some((4, 9)));
	assert_eq!(prn_taps(0),  None);
	assert_eq!(prn_taps(33), None);
}
