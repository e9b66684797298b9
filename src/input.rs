//! Reading input files into memory as lines

use crate::config::SortConfig;
use crate::error::{SortContext, SortError, SortResult};
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read every input named in `config`, in order, as one sequence of lines
///
/// No files, or a lone `-`, means standard input.
pub fn read_input(config: &SortConfig) -> SortResult<Vec<String>> {
    if config.reading_from_stdin() {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        return Ok(split_lines(&buffer));
    }

    let mut lines = Vec::new();
    for file in &config.input_files {
        let file_lines = if file == "-" {
            let mut buffer = Vec::new();
            io::stdin().lock().read_to_end(&mut buffer)?;
            split_lines(&buffer)
        } else {
            read_file_lines(Path::new(file))?
        };
        log::debug!("read {} lines from {}", file_lines.len(), file);
        lines.extend(file_lines);
    }

    Ok(lines)
}

/// Read a single file through a memory map
pub fn read_file_lines(path: &Path) -> SortResult<Vec<String>> {
    let name = path.to_string_lossy();
    let file = File::open(path).with_file_context(&name)?;
    let metadata = file.metadata().with_file_context(&name)?;

    if metadata.is_dir() {
        return Err(SortError::is_directory(&name));
    }
    if metadata.len() == 0 {
        return Ok(Vec::new());
    }

    // SAFETY: the map is only read while `file` is open and is dropped
    // before this function returns; lines are copied out.
    let mmap = unsafe { Mmap::map(&file) }.with_file_context(&name)?;
    Ok(split_lines(&mmap))
}

/// Split raw bytes into lines without their terminators
///
/// Lines end at `\n`; a trailing `\r` is dropped as well. A last line with
/// no terminator is kept. Invalid UTF-8 is replaced.
pub fn split_lines(data: &[u8]) -> Vec<String> {
    if data.is_empty() {
        return Vec::new();
    }
    let data = data.strip_suffix(b"\n").unwrap_or(data);

    data.split(|&b| b == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect()
}
