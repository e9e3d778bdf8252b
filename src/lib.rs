
pub mod gnss;
pub mod io;
pub mod types;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DigSigProcErr {
	AllocationFailure(&'static str),
	InvalidTapPair(u8, u8),
	InvalidSignal(&'static str),
	Other(&'static str),
}
