
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use byteorder::{LittleEndian, ReadBytesExt};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
	Text,
	I8,
	I16,
}

impl SampleFormat {

	pub fn from_name(name:&str) -> Result<Self, &'static str> {
		match name {
			"text" => Ok(Self::Text),
			"i8"   => Ok(Self::I8),
			"i16"  => Ok(Self::I16),
			_      => Err("Unrecognized sample format"),
		}
	}

}

/// Whitespace-separated integers, one sample each.  Iteration ends at end of input or at the first
/// token that isn't an integer.
pub struct TextSource<R: BufRead> {
	src: R,
	idx: usize,
	line: String,
	tokens: Vec<i32>,
	token_idx: usize,
	done: bool,
}

impl<R: BufRead> TextSource<R> {

	pub fn new(src:R) -> Self {
		Self { src, idx: 0, line: String::new(), tokens: vec![], token_idx: 0, done: false }
	}

	fn buffer_line(&mut self) -> Result<bool, &'static str> {
		self.line.clear();
		self.tokens.clear();
		self.token_idx = 0;

		let bytes_read:usize = self.src.read_line(&mut self.line).map_err(|_| "Unable to read from text source")?;
		if bytes_read == 0 { return Ok(false); }

		for token in self.line.split_whitespace() {
			match token.parse::<i32>() {
				Ok(x) => self.tokens.push(x),
				Err(_) => {
					// Keep what parsed before the bad token, then stop
					self.done = true;
					break;
				}
			}
		}
		Ok(true)
	}

}

impl<R: BufRead> Iterator for TextSource<R> {
	type Item = (i32, usize);

	fn next(&mut self) -> Option<(i32, usize)> {
		while self.token_idx >= self.tokens.len() {
			if self.done { return None; }
			match self.buffer_line() {
				Ok(true) => {},
				Ok(false) | Err(_) => {
					self.done = true;
					return None;
				}
			}
		}

		let ans = (self.tokens[self.token_idx], self.idx);
		self.token_idx += 1;
		self.idx += 1;
		Some(ans)
	}
}

/// Raw little-endian samples; a trailing partial sample is dropped
pub struct BinarySource<S: Read> {
	src: S,
	idx: usize,
	format: SampleFormat,
}

impl<S: Read> BinarySource<S> {

	pub fn new(src:S, format:SampleFormat) -> Result<Self, &'static str> {
		match format {
			SampleFormat::I8 | SampleFormat::I16 => Ok(Self { src, idx: 0, format }),
			SampleFormat::Text => Err("BinarySource requires a binary sample format"),
		}
	}

}

impl<S: Read> Iterator for BinarySource<S> {
	type Item = (i32, usize);

	fn next(&mut self) -> Option<(i32, usize)> {
		let val:i32 = match self.format {
			SampleFormat::I8  => self.src.read_i8().ok()? as i32,
			SampleFormat::I16 => self.src.read_i16::<LittleEndian>().ok()? as i32,
			SampleFormat::Text => return None,
		};

		let ans = (val, self.idx);
		self.idx += 1;
		Some(ans)
	}
}

pub fn source<R: 'static + Read>(src:R, format:SampleFormat) -> Result<Box<dyn Iterator<Item = (i32, usize)>>, &'static str> {
	match format {
		SampleFormat::Text => Ok(Box::new(TextSource::new(BufReader::new(src)))),
		_ => Ok(Box::new(BinarySource::new(BufReader::new(src), format)?)),
	}
}

pub fn read_signal(filename:&str, format:SampleFormat) -> Result<Vec<i32>, &'static str> {
	let file = File::open(filename).map_err(|_| "Unable to open signal file")?;
	Ok(source(file, format)?.map(|(x, _)| x).collect())
}
