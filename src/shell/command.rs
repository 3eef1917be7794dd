use std::convert::TryFrom;
use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use crate::errors::Error;

/// Width of an integer moved in or out of a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Width {
    U8,
    U16,
    U32,
    U64,
}

impl Width {
    pub fn name(&self) -> &'static str {
        match self {
            Width::U8 => "u8",
            Width::U16 => "u16",
            Width::U32 => "u32",
            Width::U64 => "u64",
        }
    }
}

impl FromStr for Width {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u8" => Ok(Width::U8),
            "u16" => Ok(Width::U16),
            "u32" => Ok(Width::U32),
            "u64" => Ok(Width::U64),
            _ => Err(Error::UnsupportedWidth(s.to_string())),
        }
    }
}

/// An integer tagged with its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

impl Value {
    /// Parse `arg` as a number that must fit in `width`.
    pub fn parse(width: Width, arg: &str) -> Result<Self, Error> {
        let n = parse_number(arg)?;
        let out_of_range = |_| Error::ValueOutOfRange(n, width.name());
        match width {
            Width::U8 => u8::try_from(n).map(Value::U8).map_err(out_of_range),
            Width::U16 => u16::try_from(n).map(Value::U16).map_err(out_of_range),
            Width::U32 => u32::try_from(n).map(Value::U32).map_err(out_of_range),
            Width::U64 => Ok(Value::U64(n)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U8(v) => write!(f, "0x{:02X}", v),
            Value::U16(v) => write!(f, "0x{:04X}", v),
            Value::U32(v) => write!(f, "0x{:08X}", v),
            Value::U64(v) => write!(f, "0x{:016X}", v),
        }
    }
}

/// A single shell command line.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// `init empty|full <capacity>`
    Init { full: bool, capacity: usize },
    /// `status`
    Status,
    /// `dump`
    Dump,
    /// `reset`
    Reset,
    /// `clear`
    Clear,
    /// `capacity <n>`
    Capacity(usize),
    /// `rewind`
    Rewind,
    /// `markread`
    MarkRead,
    /// `write u8|u16|u32|u64 <value>`
    Write(Value),
    /// `write hex <hex>`
    WriteHex(Vec<u8>),
    /// `write str <text...>`
    WriteStr(String),
    /// `fill <pattern> <size>`
    Fill { pattern: u8, size: usize },
    /// `read u8|u16|u32`
    Read(Width),
    /// `get u8|u16|u32 <index>`
    Get { width: Width, index: usize },
    /// `put u8|u16|u32 <value> <index>`
    Put { value: Value, index: usize },
    /// `last`
    Last,
    /// `view <name> <start> <size>`
    View {
        name: String,
        start: usize,
        size: usize,
    },
    /// `view <name> readable`
    ReadableView { name: String },
    /// `use <name>`
    Use(String),
    /// `copy <src> <size>`
    Copy { src: String, size: usize },
    /// `compare <hex>`
    Compare(Vec<u8>),
    /// `help`
    Help,
}

impl Command {
    /// Parse a command line. Blank lines and `#` comments parse to None.
    pub fn parse(line: &str) -> Result<Option<Self>, Error> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut args = line.split_whitespace();
        let name = next(&mut args, "command")?;
        let command = match name {
            "init" => {
                let full = match next(&mut args, "mode")? {
                    "empty" => false,
                    "full" => true,
                    mode => return Err(Error::UnknownCommand(format!("init {}", mode))),
                };
                let capacity = next_size(&mut args, "capacity")?;
                Command::Init { full, capacity }
            }
            "status" => Command::Status,
            "dump" => Command::Dump,
            "reset" => Command::Reset,
            "clear" => Command::Clear,
            "capacity" => Command::Capacity(next_size(&mut args, "capacity")?),
            "rewind" => Command::Rewind,
            "markread" => Command::MarkRead,
            "write" => match next(&mut args, "width")? {
                "hex" => Command::WriteHex(parse_hex(next(&mut args, "data")?)?),
                "str" => {
                    let text = args.collect::<Vec<_>>().join(" ");
                    if text.is_empty() {
                        return Err(Error::MissingArgument("text"));
                    }
                    Command::WriteStr(text)
                }
                width => Command::Write(Value::parse(width.parse()?, next(&mut args, "value")?)?),
            },
            "fill" => {
                let pattern = parse_number(next(&mut args, "pattern")?)?;
                let pattern =
                    u8::try_from(pattern).map_err(|_| Error::ValueOutOfRange(pattern, "u8"))?;
                let size = next_size(&mut args, "size")?;
                Command::Fill { pattern, size }
            }
            "read" => Command::Read(next(&mut args, "width")?.parse()?),
            "get" => Command::Get {
                width: next(&mut args, "width")?.parse()?,
                index: next_size(&mut args, "index")?,
            },
            "put" => {
                let width = next(&mut args, "width")?.parse()?;
                let value = Value::parse(width, next(&mut args, "value")?)?;
                let index = next_size(&mut args, "index")?;
                Command::Put { value, index }
            }
            "last" => Command::Last,
            "view" => {
                let name = next(&mut args, "name")?.to_string();
                match next(&mut args, "start")? {
                    "readable" => Command::ReadableView { name },
                    start => Command::View {
                        name,
                        start: size_from(parse_number(start)?)?,
                        size: next_size(&mut args, "size")?,
                    },
                }
            }
            "use" => Command::Use(next(&mut args, "name")?.to_string()),
            "copy" => Command::Copy {
                src: next(&mut args, "src")?.to_string(),
                size: next_size(&mut args, "size")?,
            },
            "compare" => Command::Compare(parse_hex(next(&mut args, "data")?)?),
            "help" => Command::Help,
            _ => return Err(Error::UnknownCommand(name.to_string())),
        };
        Ok(Some(command))
    }
}

/// Parse a decimal or `0x` prefixed hex number.
pub fn parse_number(arg: &str) -> Result<u64, Error> {
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => arg.parse(),
    };
    parsed.map_err(|_| Error::InvalidNumber(arg.to_string()))
}

/// Parse a string of hex digit pairs, e.g. `0a0B10`.
pub fn parse_hex(arg: &str) -> Result<Vec<u8>, Error> {
    let digits = arg.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidHex(arg.to_string()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| Error::InvalidHex(arg.to_string()))
        })
        .collect()
}

fn next<'l>(args: &mut SplitWhitespace<'l>, name: &'static str) -> Result<&'l str, Error> {
    args.next().ok_or(Error::MissingArgument(name))
}

fn next_size(args: &mut SplitWhitespace<'_>, name: &'static str) -> Result<usize, Error> {
    size_from(parse_number(next(args, name)?)?)
}

fn size_from(n: u64) -> Result<usize, Error> {
    usize::try_from(n).map_err(|_| Error::ValueOutOfRange(n, "usize"))
}
