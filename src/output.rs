//! Writing sorted lines

use crate::config::SortConfig;
use crate::engine::strip_terminator;
use crate::error::{SortContext, SortResult};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Open the configured destination: the output file, or stdout
pub fn open_output(config: &SortConfig) -> SortResult<Box<dyn Write>> {
    let output: Box<dyn Write> = match &config.output_file {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_file_context(path)?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    Ok(output)
}

/// Write each line followed by a single newline, then flush
pub fn write_lines<W, S>(output: &mut W, lines: &[S]) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str>,
{
    for line in lines {
        output.write_all(strip_terminator(line.as_ref()).as_bytes())?;
        output.write_all(b"\n")?;
    }
    output.flush()
}
