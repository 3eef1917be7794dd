use super::{address, overlaps, ByteWindow};

impl<'a> ByteWindow<'a> {
    /// Copy bytes from the read index of `src` to the write index of this window, and advance
    /// both cursors by the amount copied.
    ///
    /// The amount is the smallest of `size`, the free size of this window and the readable size
    /// of `src`. Nothing is copied if either window is unbound or if the two copy regions overlap
    /// in storage, which can happen when both windows are views over the same storage.
    pub fn write_copy(&mut self, src: &mut ByteWindow<'_>, size: usize) -> usize {
        let to_copy = self.free_size().min(src.readable_size()).min(size);

        let (dst_cells, src_cells) = match (
            self.cells(self.write_index, to_copy),
            src.cells(src.read_index, to_copy),
        ) {
            (Some(dst_cells), Some(src_cells)) => (dst_cells, src_cells),
            _ => return 0,
        };
        if overlaps(address(dst_cells), address(src_cells), to_copy) {
            log::trace!(
                "rejecting copy of {} bytes between overlapping regions",
                to_copy
            );
            return 0;
        }

        for (to, from) in dst_cells.iter().zip(src_cells) {
            to.set(from.get());
        }
        self.write_index += to_copy;
        src.read_index += to_copy;
        to_copy
    }

    /// Write `pattern` at the write index up to `size` times, limited by the free size.
    /// Return the number of bytes filled.
    pub fn fill_pattern(&mut self, pattern: u8, size: usize) -> usize {
        if size == 0 {
            return 0;
        }
        let to_fill = self.free_size().min(size);
        let cells = match self.cells(self.write_index, to_fill) {
            Some(cells) => cells,
            None => return 0,
        };

        for cell in cells {
            cell.set(pattern);
        }
        self.write_index += to_fill;
        to_fill
    }

    /// Compare the first `data.len()` bytes of the window with `data`, regardless of cursors.
    ///
    /// False if the window is unbound or smaller than `data`.
    pub fn compare(&self, data: &[u8]) -> bool {
        match self.cells(0, data.len()) {
            Some(cells) => cells.iter().zip(data).all(|(cell, byte)| cell.get() == *byte),
            None => false,
        }
    }
}
