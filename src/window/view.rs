use super::ByteWindow;

impl<'a> ByteWindow<'a> {
    /// Make a full window of `size` bytes aliasing this window's storage from `start`.
    ///
    /// The view has its own cursors: it starts full with nothing read, and later moves of either
    /// window are not seen by the other. The request is accepted when `start < capacity` and
    /// `size <= capacity`, otherwise an unbound window with no capacity is returned.
    ///
    /// `size` is checked against the whole capacity, not against what is left after `start`, so
    /// a view may nominally extend past the end of this window. Bytes of such a view that lie
    /// beyond the bound storage read as 0 and refuse writes. When `start` itself lies beyond the
    /// storage the view is bound to no bytes at all.
    pub fn make_full_view(&self, start: usize, size: usize) -> ByteWindow<'a> {
        match self.storage {
            Some(storage) if start < self.capacity && size <= self.capacity => {
                ByteWindow::full(Some(storage.get(start..).unwrap_or(&[])), size)
            }
            _ => {
                log::trace!(
                    "rejecting view of {} bytes at {} over capacity {}",
                    size,
                    start,
                    self.capacity
                );
                ByteWindow::unbound()
            }
        }
    }

    /// Make a full view over the bytes written to this window and not read yet.
    pub fn make_readable_view(&self) -> ByteWindow<'a> {
        self.make_full_view(self.read_index, self.readable_size())
    }
}

#[cfg(test)]
mod tests {
    use crate::window::{share, ByteWindow};

    #[test]
    fn test_full_view_whole_window() {
        let mut data = [1, 2, 3, 4, 5];
        let storage = share(&mut data);
        let window = ByteWindow::full(Some(storage), 5);

        let view = window.make_full_view(0, 5);
        assert_eq!(view.capacity(), 5);
        assert_eq!(view.write_index(), 5);
        assert_eq!(view.read_index(), 0);
        assert_eq!(
            view.storage().map(|s| s.as_ptr()),
            Some(storage.as_ptr()),
            "Expected the view to share the window storage"
        );
    }

    #[test]
    fn test_full_view_sub_ranges() {
        let mut data = [1, 2, 3, 4, 5];
        let window = ByteWindow::full(Some(share(&mut data)), 5);

        let view = window.make_full_view(1, 4);
        assert_eq!(view.capacity(), 4);
        assert_eq!(view.write_index(), 4);
        assert_eq!(view.get_u8(0), 2);

        let view = window.make_full_view(0, 4);
        assert_eq!(view.capacity(), 4);
        assert_eq!(view.get_u32(0), 0x01020304);

        let view = window.make_full_view(1, 3);
        assert_eq!(view.capacity(), 3);
        assert_eq!(view.readable_size(), 3);
        assert_eq!(view.last_u8(), 4);
    }

    #[test]
    fn test_view_aliases_storage() {
        let mut data = [0; 6];
        let mut window = ByteWindow::empty(Some(share(&mut data)), 6);
        let mut view = window.make_full_view(2, 4);

        view.put_u16(0xCAFE, 0);
        assert_eq!(window.get_u16(2), 0xCAFE);

        window.put_u8(0x42, 5);
        assert_eq!(view.read_u32(), 0xCAFE0042);
        assert_eq!(window.read_index(), 0, "Expected parent cursors to be independent");
    }

    #[test]
    fn test_full_view_rejected() {
        let mut data = [1, 2, 3, 4, 5];
        let window = ByteWindow::full(Some(share(&mut data)), 5);

        let view = window.make_full_view(5, 1);
        assert!(!view.is_bound());
        assert_eq!(view.capacity(), 0);
        assert_eq!(view.write_index(), 0);

        let view = window.make_full_view(0, 6);
        assert!(!view.is_bound());
        assert_eq!(view.capacity(), 0);

        let view = ByteWindow::full(None, 5).make_full_view(0, 5);
        assert!(!view.is_bound());
        assert_eq!(view.capacity(), 0);
    }

    #[test]
    fn test_full_view_past_parent_end() {
        let mut data = [1, 2, 3, 4, 5];
        let storage = share(&mut data);
        let window = ByteWindow::full(Some(storage), 5);

        // Accepted: start < 5 and size <= 5, although only 2 bytes are left after start.
        let mut view = window.make_full_view(3, 5);
        assert!(view.is_bound());
        assert_eq!(view.capacity(), 5);
        assert_eq!(view.write_index(), 5);

        assert_eq!(view.get_u16(0), 0x0405);
        assert_eq!(view.get_u8(2), 0, "Expected bytes past the storage to read as 0");
        assert_eq!(view.put_u8(0xFF, 2), 0);
        assert_eq!(view.read_u16(), 0x0405);
        assert_eq!(view.read_u8(), 0);
        assert_eq!(view.read_index(), 2);
        assert!(!view.compare(&[4, 5, 0]));
        assert_eq!(storage.len(), 5);
    }

    #[test]
    fn test_full_view_starting_past_storage() {
        let mut data = [1; 4];
        let storage = share(&mut data);
        let window = ByteWindow::full(Some(storage), 8);

        let mut view = window.make_full_view(6, 3);
        assert!(view.is_bound(), "Expected an accepted view to stay bound");
        assert_eq!(view.capacity(), 3);
        assert_eq!(view.write_index(), 3);
        assert_eq!(view.storage().map(|s| s.len()), Some(0));

        assert_eq!(view.read_u8(), 0);
        assert_eq!(view.read_index(), 0, "Expected a read past the storage to consume nothing");
        assert_eq!(view.get_u16(0), 0);
        assert_eq!(view.put_u8(0xFF, 0), 0);

        view.reset();
        assert_eq!(view.write_u8(0xFF), 0);
        assert_eq!(view.fill_pattern(0xFF, 3), 0);
        assert!(storage.iter().all(|cell| cell.get() == 1));
    }

    #[test]
    fn test_readable_view() {
        let mut data = [1, 2, 3, 4, 5];
        let mut window = ByteWindow::full(Some(share(&mut data)), 5);

        let view = window.make_readable_view();
        assert_eq!(view.capacity(), 5);
        assert!(view.compare(&[1, 2, 3, 4, 5]));

        window.read_u8();
        let view = window.make_readable_view();
        assert_eq!(view.capacity(), 4);
        assert_eq!(view.read_index(), 0);
        assert_eq!(view.write_index(), 4);
        assert!(view.compare(&[2, 3, 4, 5]));
    }

    #[test]
    fn test_readable_view_after_partial_write() {
        let mut data = [0; 5];
        let mut window = ByteWindow::empty(Some(share(&mut data)), 5);
        for value in 1..=4 {
            window.write_u8(value);
        }
        window.read_u8();

        let view = window.make_readable_view();
        assert_eq!(view.capacity(), 3);
        assert_eq!(view.read_index(), 0);
        assert_eq!(view.write_index(), 3);
        assert!(view.compare(&[2, 3, 4]));
    }

    #[test]
    fn test_readable_view_of_drained_window() {
        let mut data = [1, 2, 3];
        let mut window = ByteWindow::full(Some(share(&mut data)), 3);
        window.mark_all_read();

        let view = window.make_readable_view();
        assert!(!view.is_bound(), "Expected a drained full window to yield no view");
        assert_eq!(view.capacity(), 0);
    }
}
