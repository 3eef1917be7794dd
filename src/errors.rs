/// Errors that the shell reports for a command line it can not run.
///
/// Window operations never fail: a request the window refuses is reported as a zero count.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Unknown command name.
    #[error("unknown command {0}")]
    UnknownCommand(String),

    /// A required argument is missing.
    #[error("missing argument {0}")]
    MissingArgument(&'static str),

    /// Argument is not a decimal or 0x prefixed hex number.
    #[error("invalid number {0}")]
    InvalidNumber(String),

    /// Number does not fit in the requested width.
    #[error("value {0} out of range for {1}")]
    ValueOutOfRange(u64, &'static str),

    /// Width is unknown or not supported by the command.
    #[error("unsupported width {0}")]
    UnsupportedWidth(String),

    /// Argument is not an even length string of hex digits.
    #[error("invalid hex string {0}")]
    InvalidHex(String),

    /// No window with this name.
    #[error("unknown window {0}")]
    UnknownWindow(String),

    /// Source and destination of a copy are the same window.
    #[error("can not copy window {0} into itself")]
    SelfCopy(String),
}
