use byteorder::{BigEndian, ByteOrder};

use super::{address, overlaps, ByteWindow};

impl<'a> ByteWindow<'a> {
    /// Read one byte at the read index and advance it. Return 0 if nothing is left to read.
    pub fn read_u8(&mut self) -> u8 {
        self.take::<1>().map_or(0, |bytes| bytes[0])
    }

    /// Read a big-endian u16. Nothing is consumed unless both bytes are readable.
    pub fn read_u16(&mut self) -> u16 {
        self.take::<2>().map_or(0, |bytes| BigEndian::read_u16(&bytes))
    }

    /// Read a big-endian u32. Nothing is consumed unless all four bytes are readable.
    pub fn read_u32(&mut self) -> u32 {
        self.take::<4>().map_or(0, |bytes| BigEndian::read_u32(&bytes))
    }

    /// Rewind the read index to the start of the window.
    pub fn reset_read_index(&mut self) {
        self.read_index = 0;
    }

    /// Mark every written byte as read.
    pub fn mark_all_read(&mut self) {
        self.read_index = self.write_index;
    }

    /// Write one byte at the write index and advance it. Return the number of bytes written.
    pub fn write_u8(&mut self, value: u8) -> usize {
        if self.free_size() == 0 {
            return 0;
        }
        let written = self.poke(&[value], self.write_index);
        self.write_index += written;
        written
    }

    /// Write a big-endian u16, most significant byte first.
    ///
    /// Bytes are written one at a time: when only part of the value fits, the bytes that fit stay
    /// written and their count is returned.
    pub fn write_u16(&mut self, value: u16) -> usize {
        let mut bytes = [0; 2];
        BigEndian::write_u16(&mut bytes, value);
        self.write_each(&bytes)
    }

    /// Write a big-endian u32. See [write_u16](Self::write_u16) for partial writes.
    pub fn write_u32(&mut self, value: u32) -> usize {
        let mut bytes = [0; 4];
        BigEndian::write_u32(&mut bytes, value);
        self.write_each(&bytes)
    }

    /// Write a big-endian u64. See [write_u16](Self::write_u16) for partial writes.
    pub fn write_u64(&mut self, value: u64) -> usize {
        let mut bytes = [0; 8];
        BigEndian::write_u64(&mut bytes, value);
        self.write_each(&bytes)
    }

    /// Copy all of `data` at the write index.
    ///
    /// Writes nothing and returns 0 if `data` is empty, does not fit in the free space or overlaps
    /// the destination bytes. Otherwise returns `data.len()`.
    pub fn write_raw(&mut self, data: &[u8]) -> usize {
        if data.is_empty() || self.free_size() < data.len() {
            return 0;
        }
        let cells = match self.cells(self.write_index, data.len()) {
            Some(cells) => cells,
            None => return 0,
        };
        if overlaps(address(cells), data.as_ptr() as usize, data.len()) {
            log::trace!("rejecting raw write overlapping the window storage");
            return 0;
        }

        for (cell, byte) in cells.iter().zip(data) {
            cell.set(*byte);
        }
        self.write_index += data.len();
        data.len()
    }

    /// Copy the UTF-8 bytes of `text` at the write index, with the same rules as
    /// [write_raw](Self::write_raw).
    pub fn write_str(&mut self, text: &str) -> usize {
        self.write_raw(text.as_bytes())
    }

    /// Consume `N` bytes at the read index, or none at all.
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        if self.readable_size() < N {
            return None;
        }
        let bytes = self.peek::<N>(self.read_index)?;
        self.read_index += N;
        Some(bytes)
    }

    fn write_each(&mut self, bytes: &[u8]) -> usize {
        let mut written = 0;
        for byte in bytes {
            written += self.write_u8(*byte);
        }
        written
    }
}
