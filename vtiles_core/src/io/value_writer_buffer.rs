use super::ValueWriter;
use anyhow::Result;
use byteorder::{ByteOrder, LittleEndian};
use std::io::Write;
use std::marker::PhantomData;

/// A [`ValueWriter`] that appends to a borrowed buffer.
///
/// Used to encode tiles straight into a reusable scratch buffer. Bytes that were
/// already in the buffer are kept and do not count towards [`ValueWriter::position`].
pub struct ValueWriterBuffer<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	buffer: &'a mut Vec<u8>,
	start: usize,
}

impl<'a> ValueWriterBuffer<'a, LittleEndian> {
	pub fn new_le(buffer: &'a mut Vec<u8>) -> Self {
		let start = buffer.len();
		ValueWriterBuffer {
			_phantom: PhantomData,
			buffer,
			start,
		}
	}
}

impl<E: ByteOrder> ValueWriter<E> for ValueWriterBuffer<'_, E> {
	fn get_writer(&mut self) -> &mut dyn Write {
		&mut *self.buffer
	}

	fn position(&mut self) -> Result<u64> {
		Ok((self.buffer.len() - self.start) as u64)
	}
}
