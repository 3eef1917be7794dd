use std::io;

use anyhow::Result;
use bytewindow::{
    cli::Flags,
    share,
    shell::{self, Shell},
};
use rustyline::error::ReadlineError;
use rustyline::Editor;
use structopt::StructOpt;

fn main() -> Result<()> {
    let flags = Flags::from_args();

    stderrlog::new()
        .module(module_path!())
        .quiet(flags.quiet)
        .timestamp(stderrlog::Timestamp::Second)
        .verbosity(flags.verbose)
        .init()?;

    let (mut storage, loaded) = match &flags.load {
        Some(path) => shell::load_storage(path, flags.capacity)?,
        None => (shell::new_storage(flags.capacity), 0),
    };
    let mut shell = Shell::new(share(&mut storage[..]), loaded);
    let mut stdout = io::stdout();

    if !flags.commands.is_empty() {
        for command in &flags.commands {
            shell.exec(&mut stdout, command)?;
        }
        return Ok(());
    }

    let mut rl = Editor::<()>::new();
    if rl.load_history(&flags.history).is_err() {
        log::debug!("No previous history at {}", flags.history);
    }

    log::info!(
        "Window over {} bytes of storage, {} bytes loaded",
        flags.capacity,
        loaded
    );
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                if let Err(err) = shell.exec(&mut stdout, &line) {
                    eprintln!("Error: {:#}", err);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    rl.save_history(&flags.history)?;

    Ok(())
}
