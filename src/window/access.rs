use byteorder::{BigEndian, ByteOrder};

use super::ByteWindow;

/// Positional access. Nothing here moves the read or write cursor.
impl<'a> ByteWindow<'a> {
    /// Return the byte at `index`, or 0 if `index` is out of the window.
    pub fn get_u8(&self, index: usize) -> u8 {
        self.peek::<1>(index).map_or(0, |bytes| bytes[0])
    }

    /// Return the big-endian u16 at `index`, or 0 if it does not fit in the window.
    pub fn get_u16(&self, index: usize) -> u16 {
        self.peek::<2>(index)
            .map_or(0, |bytes| BigEndian::read_u16(&bytes))
    }

    /// Return the big-endian u32 at `index`, or 0 if it does not fit in the window.
    pub fn get_u32(&self, index: usize) -> u32 {
        self.peek::<4>(index)
            .map_or(0, |bytes| BigEndian::read_u32(&bytes))
    }

    /// Return the last written byte, or 0 if nothing was written.
    pub fn last_u8(&self) -> u8 {
        match self.write_index.checked_sub(1) {
            Some(index) => self.get_u8(index),
            None => 0,
        }
    }

    /// Put a byte at `index`. Return the number of bytes written.
    pub fn put_u8(&mut self, value: u8, index: usize) -> usize {
        self.poke(&[value], index)
    }

    /// Put a big-endian u16 at `index`. Return the number of bytes written.
    pub fn put_u16(&mut self, value: u16, index: usize) -> usize {
        let mut bytes = [0; 2];
        BigEndian::write_u16(&mut bytes, value);
        self.poke(&bytes, index)
    }

    /// Put a big-endian u32 at `index`. Return the number of bytes written.
    pub fn put_u32(&mut self, value: u32, index: usize) -> usize {
        let mut bytes = [0; 4];
        BigEndian::write_u32(&mut bytes, value);
        self.poke(&bytes, index)
    }

    /// Copy `N` bytes starting at `index` out of the window.
    pub(super) fn peek<const N: usize>(&self, index: usize) -> Option<[u8; N]> {
        let cells = self.cells(index, N)?;
        let mut bytes = [0; N];
        for (byte, cell) in bytes.iter_mut().zip(cells) {
            *byte = cell.get();
        }
        Some(bytes)
    }

    /// Store all of `bytes` starting at `index`, or nothing at all.
    pub(super) fn poke(&self, bytes: &[u8], index: usize) -> usize {
        match self.cells(index, bytes.len()) {
            Some(cells) => {
                for (cell, byte) in cells.iter().zip(bytes) {
                    cell.set(*byte);
                }
                bytes.len()
            }
            None => 0,
        }
    }
}
