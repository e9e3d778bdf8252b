
pub mod packed_chips;
