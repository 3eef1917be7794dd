use std::io;

use anyhow::Result;

use crate::window::ByteWindow;

/// Number of bytes shown on each row of a dump.
const DUMP_ROW_SIZE: usize = 8;

/// Print the cursors and sizes of every window, marking the current one.
pub fn print_status(
    output: &mut dyn io::Write,
    windows: &[(String, ByteWindow<'_>)],
    current: usize,
) -> Result<()> {
    let columns = ["", "window", "bound", "capacity", "write", "read", "free", "readable"]
        .iter()
        .map(|column| column.to_string())
        .collect::<Vec<_>>();

    let mut table = tabled::builder::Builder::default().set_columns(columns);

    for (idx, (name, window)) in windows.iter().enumerate() {
        let marker = if idx == current { "*" } else { "" };
        table = table.add_record(vec![
            marker.to_string(),
            name.clone(),
            window.is_bound().to_string(),
            window.capacity().to_string(),
            window.write_index().to_string(),
            window.read_index().to_string(),
            window.free_size().to_string(),
            window.readable_size().to_string(),
        ]);
    }

    let table = table.build().with(tabled::Style::psql());

    writeln!(output, "{}", table)?;

    Ok(())
}

/// Print a hex dump of the window capacity backed by storage, regardless of cursors.
pub fn print_dump(output: &mut dyn io::Write, name: &str, window: &ByteWindow<'_>) -> Result<()> {
    if !window.is_bound() {
        writeln!(output, "window {} is not bound", name)?;
        return Ok(());
    }

    let columns = vec![
        String::from("offset"),
        String::from("hex"),
        String::from("ascii"),
    ];
    let mut table = tabled::builder::Builder::default().set_columns(columns);

    // Bytes past the bound storage always read as 0, stop at the storage end.
    let size = window
        .capacity()
        .min(window.storage().map_or(0, |storage| storage.len()));
    for start in (0..size).step_by(DUMP_ROW_SIZE) {
        let end = (start + DUMP_ROW_SIZE).min(size);
        let bytes = (start..end)
            .map(|index| window.get_u8(index))
            .collect::<Vec<_>>();

        let hex = bytes
            .iter()
            .map(|byte| format!("{:02X}", byte))
            .collect::<Vec<_>>()
            .join(" ");
        let ascii = bytes
            .iter()
            .map(|byte| {
                if byte.is_ascii_graphic() || *byte == b' ' {
                    *byte as char
                } else {
                    '.'
                }
            })
            .collect::<String>();

        table = table.add_record(vec![format!("0x{:04X}", start), hex, ascii]);
    }

    let table = table.build().with(tabled::Style::psql());

    writeln!(output, "{}", table)?;

    Ok(())
}

pub fn print_count(output: &mut dyn io::Write, count: usize) -> Result<()> {
    writeln!(output, "{} bytes", count)?;
    Ok(())
}
