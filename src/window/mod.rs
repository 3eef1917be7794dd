use core::cell::Cell;
use core::fmt;

mod access;
mod copy;
mod cursor;
mod view;

/// Byte storage owned by the caller and shared between a window and its views.
pub type Storage<'a> = &'a [Cell<u8>];

/// Convert exclusively borrowed bytes into storage that any number of windows can alias.
///
/// The bytes stay borrowed for as long as a window built over them is alive.
pub fn share(bytes: &mut [u8]) -> Storage<'_> {
    Cell::from_mut(bytes).as_slice_of_cells()
}

/// ByteWindow is a fixed capacity view over caller owned storage, accessed through a read cursor
/// and a write cursor.
///
/// Data layout is as follows:
///
/// ```text
/// 0.......R.......W.......C
/// ```
///
/// R: read index, W: write index, C: capacity.
///
/// `read_index <= write_index <= capacity` holds after every operation. Invalid requests
/// (unbound storage, out of range index, not enough space or data, overlapping regions) never
/// panic: they return 0 or false and leave the window untouched.
///
/// A window never allocates. Windows built over the same [Storage] alias each other and are
/// `!Sync`; sharing a window or an overlapping view across execution contexts needs external
/// synchronization.
#[derive(Clone, Default)]
pub struct ByteWindow<'a> {
    /// Backing storage, `None` while unbound.
    storage: Option<Storage<'a>>,

    /// Number of bytes the window may use.
    capacity: usize,

    /// Next position to write.
    write_index: usize,

    /// Next position to read.
    read_index: usize,
}

impl<'a> ByteWindow<'a> {
    /// Create an empty window over `storage`. Both cursors start at zero and storage contents are
    /// left as they are.
    ///
    /// A `None` storage keeps `capacity` but leaves the window unbound until [bind](Self::bind)
    /// is called.
    pub fn empty(storage: Option<Storage<'a>>, capacity: usize) -> Self {
        Self {
            storage,
            capacity,
            write_index: 0,
            read_index: 0,
        }
    }

    /// Create a window whose `capacity` bytes are all considered written and ready to be read.
    pub fn full(storage: Option<Storage<'a>>, capacity: usize) -> Self {
        let mut window = Self::empty(storage, capacity);
        window.write_index = capacity;
        window
    }

    /// Create an unbound window with no capacity.
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Bind storage to a window created unbound. Capacity and cursors are kept.
    pub fn bind(&mut self, storage: Storage<'a>) {
        self.storage = Some(storage);
    }

    pub fn is_bound(&self) -> bool {
        self.storage.is_some()
    }

    /// Return the bound storage, starting at the first byte of the window.
    pub fn storage(&self) -> Option<Storage<'a>> {
        self.storage
    }

    /// Shrink the window capacity. Cursors past the new capacity are clamped down to it.
    ///
    /// The capacity never grows: a `capacity` greater than or equal to the current one is
    /// ignored.
    pub fn set_capacity(&mut self, capacity: usize) {
        if capacity >= self.capacity {
            log::trace!(
                "ignoring capacity {} not below current capacity {}",
                capacity,
                self.capacity
            );
            return;
        }

        self.capacity = capacity;
        self.write_index = self.write_index.min(capacity);
        self.read_index = self.read_index.min(capacity);
    }

    /// Reset both cursors. Storage contents are untouched.
    pub fn reset(&mut self) {
        self.read_index = 0;
        self.write_index = 0;
    }

    /// Reset both cursors and zero every byte of the window.
    ///
    /// Does nothing on an unbound window.
    pub fn clear(&mut self) {
        if let Some(storage) = self.storage {
            self.reset();
            let end = self.capacity.min(storage.len());
            for cell in &storage[..end] {
                cell.set(0);
            }
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn read_index(&self) -> usize {
        self.read_index
    }

    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Nothing was written since the last reset.
    pub fn is_empty(&self) -> bool {
        self.write_index == 0
    }

    pub fn is_full(&self) -> bool {
        self.write_index == self.capacity
    }

    /// Number of bytes that can still be written.
    pub fn free_size(&self) -> usize {
        self.capacity - self.write_index
    }

    /// Number of bytes written.
    pub fn used_size(&self) -> usize {
        self.write_index
    }

    /// Number of written bytes not read yet.
    pub fn readable_size(&self) -> usize {
        self.write_index - self.read_index
    }

    /// Return the `len` storage cells starting at `index`.
    ///
    /// None if the window is unbound, if the range ends past the capacity or if it ends past the
    /// bound storage (a view may nominally extend beyond its parent).
    fn cells(&self, index: usize, len: usize) -> Option<Storage<'a>> {
        let storage = self.storage?;
        let end = index.checked_add(len)?;
        if end > self.capacity {
            return None;
        }
        storage.get(index..end)
    }
}

impl fmt::Debug for ByteWindow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteWindow")
            .field("bound", &self.is_bound())
            .field("capacity", &self.capacity)
            .field("write_index", &self.write_index)
            .field("read_index", &self.read_index)
            .finish()
    }
}

/// Address of the first byte of `cells`.
fn address(cells: &[Cell<u8>]) -> usize {
    cells.as_ptr() as usize
}

/// Half open ranges `[a, a + len)` and `[b, b + len)` overlap iff `a < b + len && b < a + len`.
fn overlaps(a: usize, b: usize, len: usize) -> bool {
    a < b.saturating_add(len) && b < a.saturating_add(len)
}
