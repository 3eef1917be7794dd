#![cfg(feature = "std")]

use std::io::Write;

use anyhow::Result;
use bytewindow::{
    errors::Error,
    share,
    shell::{self, Shell, MAIN_WINDOW},
};

/// Run every line of `script` and return what the shell printed.
fn run(shell: &mut Shell<'_>, script: &str) -> Result<String> {
    let mut output = Vec::new();
    for line in script.lines() {
        shell.exec(&mut output, line)?;
    }
    Ok(String::from_utf8(output)?)
}

#[test]
fn test_frame_encoding_session() -> Result<()> {
    let mut storage = shell::new_storage(16);
    let mut shell = Shell::new(share(&mut storage[..]), 0);

    let output = run(
        &mut shell,
        "
        # header, length placeholder, payload
        write u8 0x7E
        write u16 0
        write str hi
        put u16 2 1
        get u16 1
        last
        compare 7e000268
        compare 7e0000
        ",
    )?;

    assert_eq!(
        output,
        "1 bytes\n2 bytes\n2 bytes\n2 bytes\n0x0002\n0x69\nequal\nnot equal\n"
    );
    Ok(())
}

#[test]
fn test_views_and_copy() -> Result<()> {
    let mut storage = shell::new_storage(8);
    let mut shell = Shell::new(share(&mut storage[..]), 0);

    let output = run(
        &mut shell,
        "
        write hex 01020304
        read u8
        view unread readable
        view back 4 4
        use back
        reset
        copy unread 8
        get u32 0
        use unread
        read u8
        ",
    )?;

    assert_eq!(
        output,
        "4 bytes\n0x01\nunread: 3 bytes\nback: 4 bytes\n3 bytes\n0x02030400\n0x00\n"
    );
    assert_eq!(shell.current_name(), "unread");
    assert_eq!(shell.window("unread").map(|w| w.readable_size()), Some(0));
    assert_eq!(shell.window(MAIN_WINDOW).map(|w| w.read_index()), Some(1));
    Ok(())
}

#[test]
fn test_refused_operations_print_zero() -> Result<()> {
    let mut storage = shell::new_storage(4);
    let mut shell = Shell::new(share(&mut storage[..]), 0);

    let output = run(
        &mut shell,
        "
        write u64 0x1122334455667788
        write u8 1
        read u16
        rewind
        read u32
        read u8
        view nothing 4 1
        fill 0xFF 2
        ",
    )?;

    assert_eq!(
        output,
        "4 bytes\n0 bytes\n0x1122\n0x11223344\n0x00\nnothing: 0 bytes\n0 bytes\n"
    );
    assert_eq!(shell.window("nothing").map(|w| w.is_bound()), Some(false));
    Ok(())
}

#[test]
fn test_status_and_dump() -> Result<()> {
    let mut storage = shell::new_storage(10);
    let mut shell = Shell::new(share(&mut storage[..]), 0);

    let output = run(&mut shell, "write str Hello\nstatus\ndump")?;

    assert!(output.contains("readable"), "Expected status header: {}", output);
    assert!(output.contains("main"));
    assert!(output.contains("48 65 6C 6C 6F 00 00 00"));
    assert!(output.contains("Hello"));
    assert!(output.contains("0x0008"));
    Ok(())
}

#[test]
fn test_dump_stops_at_storage_end() -> Result<()> {
    let mut storage = shell::new_storage(16);
    let mut shell = Shell::new(share(&mut storage[..]), 0);

    let output = run(&mut shell, "init full 1000000000000\ndump")?;

    assert!(output.contains("0x0008"));
    assert!(
        !output.contains("0x0010"),
        "Expected no rows past the storage: {}",
        output
    );
    Ok(())
}

#[test]
fn test_init_capacity_and_clear() -> Result<()> {
    let mut storage = shell::new_storage(8);
    let mut shell = Shell::new(share(&mut storage[..]), 0);

    run(&mut shell, "fill 0xAA 8\ninit full 6\ncapacity 4\nread u32")?;
    let main = shell.window(MAIN_WINDOW).expect("main window");
    assert_eq!(main.capacity(), 4);
    assert_eq!(main.write_index(), 4);
    assert_eq!(main.read_index(), 4);

    run(&mut shell, "clear\ninit full 8")?;
    let output = run(&mut shell, "get u32 0\nget u32 4")?;
    assert_eq!(output, "0x00000000\n0xAAAAAAAA\n");
    Ok(())
}

#[test]
fn test_parse_errors_are_reported() {
    let mut storage = shell::new_storage(4);
    let mut shell = Shell::new(share(&mut storage[..]), 0);
    let mut output = Vec::new();

    let err = shell.exec(&mut output, "write u8 0x100").unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::ValueOutOfRange(0x100, "u8"))
    );

    let err = shell.exec(&mut output, "compare 0g").unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::InvalidHex("0g".to_string()))
    );

    assert!(output.is_empty(), "Expected nothing printed on parse errors");
}

#[test]
fn test_load_storage() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(&[0xCA, 0xFE, 0xBA, 0xBE, 0x01, 0x02])?;

    let (mut storage, loaded) = shell::load_storage(file.path(), 4)?;
    assert_eq!(loaded, 4, "Expected contents to be truncated to the capacity");
    assert_eq!(&storage[..], &[0xCA, 0xFE, 0xBA, 0xBE]);

    let mut shell = Shell::new(share(&mut storage[..]), loaded);
    let output = run(&mut shell, "read u32\nread u8")?;
    assert_eq!(output, "0xCAFEBABE\n0x00\n");

    let (storage, loaded) = shell::load_storage(file.path(), 16)?;
    assert_eq!(loaded, 6);
    assert_eq!(storage.len(), 16);
    assert_eq!(&storage[6..], &[0; 10]);
    Ok(())
}
