use std::path::PathBuf;

use structopt::StructOpt;

/// Command line arguments
#[derive(StructOpt)]
#[structopt()]
pub struct Flags {
    /// Silence all output
    #[structopt(short = "q", long = "quiet")]
    pub quiet: bool,

    /// Verbose mode (-v, -vv, -vvv, etc)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    pub verbose: usize,

    /// Number of bytes of storage backing the main window.
    #[structopt(long = "capacity", default_value = "64")]
    pub capacity: usize,

    /// File whose contents pre-load the main window, truncated to the capacity.
    #[structopt(long = "load", parse(from_os_str))]
    pub load: Option<PathBuf>,

    /// Path of the interactive history file.
    #[structopt(long = "history", default_value = ".bytewindow_history")]
    pub history: String,

    /// Run the given command and exit, may be repeated.
    #[structopt(short = "c", long = "command")]
    pub commands: Vec<String>,
}
