use crate::PackError;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

pub type Lines = Box<dyn Iterator<Item = Result<String, PackError>>>;

/// Source of raw input lines.
pub trait Reader {
    fn read_lines(&self, source: &str) -> Result<Lines, PackError>;
}

/// Reads a file path, or stdin when the source is `-`. Lines are streamed, not buffered whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader;

impl Reader for FileReader {
    fn read_lines(&self, source: &str) -> Result<Lines, PackError> {
        let input: Box<dyn BufRead> = if source == "-" {
            Box::new(BufReader::new(io::stdin()))
        } else {
            let file = File::open(source).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => PackError::NotFound {
                    path: PathBuf::from(source),
                },
                _ => PackError::Io(e),
            })?;
            Box::new(BufReader::new(file))
        };
        Ok(Box::new(input.lines().map(|line| line.map_err(PackError::from))))
    }
}
