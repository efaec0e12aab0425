use clap::Parser;
use std::fs;
use std::io::{self, Read};

use conprint::{get_standard_output, print_scalar, Console, ConsoleWriter, NativeConsole};

mod buffered_char_reader;
use buffered_char_reader::BufferedCharReader;

mod cli;
use cli::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log.init_logger();

    let reader: Box<dyn Read> = match args.input.as_ref().filter(|_| !args.reads_stdin()) {
        Some(path) => {
            log::debug!("reading from {}", path.display());
            Box::new(fs::File::open(path)?)
        }
        None => {
            log::debug!("reading from stdin");
            Box::new(io::stdin())
        }
    };
    let mut char_reader = BufferedCharReader::new(reader);

    let console = NativeConsole::default();
    let handle = get_standard_output(&console);
    log::info!("standard output handle {:?}", handle);

    let mut writer = ConsoleWriter::new(&console, handle).ascii_only(args.ascii);
    process(&mut char_reader, &mut writer, args.per_char)?;

    for &scalar in &args.scalars {
        log::debug!("printing scalar U+{:04X}", scalar);
        print_scalar(&console, handle, scalar);
    }
    Ok(())
}

fn process<R: Read, C: Console + ?Sized>(
    reader: &mut BufferedCharReader<R>,
    output: &mut ConsoleWriter<'_, C>,
    per_char: bool,
) -> io::Result<()> {
    if per_char {
        while let Some(c) = reader.next_char()? {
            output.write_char(c);
        }
    } else {
        while let Some(line) = reader.next_chunk()? {
            output.write_str(line);
        }
    }
    Ok(())
}
