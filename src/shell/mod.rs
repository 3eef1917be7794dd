use std::{fs, io, path::Path};

use anyhow::{anyhow, bail, Result};
use bytes::BytesMut;
use log::{debug, info, warn};

use crate::{
    errors::Error,
    window::{ByteWindow, Storage},
};

use self::output::{print_count, print_dump, print_status};

mod command;
mod output;

pub use command::{parse_hex, parse_number, Command, Value, Width};

/// Name of the window created over the whole shell storage.
pub const MAIN_WINDOW: &str = "main";

const HELP: &str = "\
init empty|full <capacity>       rebind the main window over the storage
status                           show every window
dump                             hex dump of the current window
reset | clear                    reset cursors, clear also zeroes bytes
capacity <n>                     shrink the current window
rewind | markread                move the read index to the start or the end
write u8|u16|u32|u64 <value>     write a big-endian value
write hex <hex> | write str <s>  write raw bytes
fill <pattern> <size>            write a repeated byte
read u8|u16|u32                  read a big-endian value
get u8|u16|u32 <index>           get a value without moving cursors
put u8|u16|u32 <value> <index>   put a value without moving cursors
last                             last written byte
view <name> <start> <size>       make a full view of the current window
view <name> readable             make a view of the unread bytes
use <name>                       select the current window
copy <src> <size>                copy unread bytes of src into the current window
compare <hex>                    compare the window start with bytes";

/// Allocate zeroed storage of `capacity` bytes for a shell.
pub fn new_storage(capacity: usize) -> BytesMut {
    BytesMut::zeroed(capacity)
}

/// Allocate storage of `capacity` bytes and pre-load it with the contents of the file at `path`.
///
/// Contents past the capacity are dropped. Return the storage and the number of bytes loaded.
pub fn load_storage(path: &Path, capacity: usize) -> Result<(BytesMut, usize)> {
    let contents = fs::read(path)?;
    if contents.len() > capacity {
        warn!(
            "{} holds {} bytes, keeping the first {}",
            path.display(),
            contents.len(),
            capacity
        );
    }

    let loaded = contents.len().min(capacity);
    let mut storage = new_storage(capacity);
    storage[..loaded].copy_from_slice(&contents[..loaded]);

    info!("Loaded {} bytes from {}", loaded, path.display());
    Ok((storage, loaded))
}

/// Shell runs text commands against a set of named windows sharing one storage.
///
/// The main window covers the whole storage; views made from the current window are added by
/// name and can be selected with `use`.
pub struct Shell<'a> {
    /// Storage backing every window of the shell.
    storage: Storage<'a>,

    /// Windows by name, the main window first.
    windows: Vec<(String, ByteWindow<'a>)>,

    /// Index of the window that commands apply to.
    current: usize,
}

impl<'a> Shell<'a> {
    /// Create a shell over `storage`. When `loaded` is not zero the main window starts full over
    /// the first `loaded` bytes, otherwise it starts empty over the whole storage.
    pub fn new(storage: Storage<'a>, loaded: usize) -> Self {
        let main = if loaded > 0 {
            ByteWindow::full(Some(storage), loaded)
        } else {
            ByteWindow::empty(Some(storage), storage.len())
        };

        Self {
            storage,
            windows: vec![(MAIN_WINDOW.to_string(), main)],
            current: 0,
        }
    }

    /// Return the window with the given name.
    pub fn window(&self, name: &str) -> Option<&ByteWindow<'a>> {
        self.windows
            .iter()
            .find(|(window_name, _)| window_name == name)
            .map(|(_, window)| window)
    }

    /// Return the name of the window that commands apply to.
    pub fn current_name(&self) -> &str {
        &self.windows[self.current].0
    }

    /// Parse and run a single command line, writing its result to `output`.
    pub fn exec(&mut self, output: &mut dyn io::Write, line: &str) -> Result<()> {
        if let Some(command) = Command::parse(line)? {
            self.exec_command(output, command)?;
        }
        Ok(())
    }

    fn exec_command(&mut self, output: &mut dyn io::Write, command: Command) -> Result<()> {
        debug!("Executing {:?} on window {}", command, self.current_name());

        match command {
            Command::Init { full, capacity } => {
                let main = if full {
                    ByteWindow::full(Some(self.storage), capacity)
                } else {
                    ByteWindow::empty(Some(self.storage), capacity)
                };
                self.windows[0].1 = main;
                self.current = 0;
            }
            Command::Status => print_status(output, &self.windows, self.current)?,
            Command::Dump => print_dump(output, self.current_name(), self.current())?,
            Command::Reset => self.current_mut().reset(),
            Command::Clear => self.current_mut().clear(),
            Command::Capacity(capacity) => self.current_mut().set_capacity(capacity),
            Command::Rewind => self.current_mut().reset_read_index(),
            Command::MarkRead => self.current_mut().mark_all_read(),
            Command::Write(value) => {
                let window = self.current_mut();
                let written = match value {
                    Value::U8(value) => window.write_u8(value),
                    Value::U16(value) => window.write_u16(value),
                    Value::U32(value) => window.write_u32(value),
                    Value::U64(value) => window.write_u64(value),
                };
                print_count(output, written)?;
            }
            Command::WriteHex(data) => print_count(output, self.current_mut().write_raw(&data))?,
            Command::WriteStr(text) => print_count(output, self.current_mut().write_str(&text))?,
            Command::Fill { pattern, size } => {
                print_count(output, self.current_mut().fill_pattern(pattern, size))?
            }
            Command::Read(width) => {
                let window = self.current_mut();
                let value = match width {
                    Width::U8 => Value::U8(window.read_u8()),
                    Width::U16 => Value::U16(window.read_u16()),
                    Width::U32 => Value::U32(window.read_u32()),
                    Width::U64 => bail!(Error::UnsupportedWidth(width.name().to_string())),
                };
                writeln!(output, "{}", value)?;
            }
            Command::Get { width, index } => {
                let window = self.current();
                let value = match width {
                    Width::U8 => Value::U8(window.get_u8(index)),
                    Width::U16 => Value::U16(window.get_u16(index)),
                    Width::U32 => Value::U32(window.get_u32(index)),
                    Width::U64 => bail!(Error::UnsupportedWidth(width.name().to_string())),
                };
                writeln!(output, "{}", value)?;
            }
            Command::Put { value, index } => {
                let window = self.current_mut();
                let written = match value {
                    Value::U8(value) => window.put_u8(value, index),
                    Value::U16(value) => window.put_u16(value, index),
                    Value::U32(value) => window.put_u32(value, index),
                    Value::U64(_) => bail!(Error::UnsupportedWidth(Width::U64.name().to_string())),
                };
                print_count(output, written)?;
            }
            Command::Last => writeln!(output, "{}", Value::U8(self.current().last_u8()))?,
            Command::View { name, start, size } => {
                let view = self.current().make_full_view(start, size);
                self.add_view(output, name, view)?;
            }
            Command::ReadableView { name } => {
                let view = self.current().make_readable_view();
                self.add_view(output, name, view)?;
            }
            Command::Use(name) => self.current = self.position(&name)?,
            Command::Copy { src, size } => {
                let src_idx = self.position(&src)?;
                if src_idx == self.current {
                    bail!(Error::SelfCopy(src));
                }

                let current = self.current;
                let (dst, src) = if current < src_idx {
                    let (head, tail) = self.windows.split_at_mut(src_idx);
                    (&mut head[current].1, &mut tail[0].1)
                } else {
                    let (head, tail) = self.windows.split_at_mut(current);
                    (&mut tail[0].1, &mut head[src_idx].1)
                };
                print_count(output, dst.write_copy(src, size))?;
            }
            Command::Compare(data) => {
                let result = if self.current().compare(&data) {
                    "equal"
                } else {
                    "not equal"
                };
                writeln!(output, "{}", result)?;
            }
            Command::Help => writeln!(output, "{}", HELP)?,
        }

        Ok(())
    }

    /// Add `view` under `name`, replacing any window already named so.
    fn add_view(
        &mut self,
        output: &mut dyn io::Write,
        name: String,
        view: ByteWindow<'a>,
    ) -> Result<()> {
        if view.is_bound() {
            info!("New view {} of {} bytes", name, view.capacity());
        } else {
            info!("View {} was refused, it is left unbound", name);
        }
        writeln!(output, "{}: {} bytes", name, view.capacity())?;

        match self.windows.iter().position(|(window_name, _)| *window_name == name) {
            Some(idx) => self.windows[idx].1 = view,
            None => self.windows.push((name, view)),
        }
        Ok(())
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.windows
            .iter()
            .position(|(window_name, _)| window_name == name)
            .ok_or_else(|| anyhow!(Error::UnknownWindow(name.to_string())))
    }

    fn current(&self) -> &ByteWindow<'a> {
        &self.windows[self.current].1
    }

    fn current_mut(&mut self) -> &mut ByteWindow<'a> {
        &mut self.windows[self.current].1
    }
}
