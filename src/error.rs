use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::reader::ParseError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed FASTA input in {} at line {line}: {msg}", .path.display())]
    MalformedInput {
        path: PathBuf,
        line: usize,
        msg: String,
    },
}

impl Error {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Error::Io { path: path.to_path_buf(), source }
    }

    // Attaches the input path to an error coming out of the reader.
    pub fn from_parse(path: &Path, e: ParseError) -> Self {
        match e {
            ParseError::Io(source) => Error::io(path, source),
            ParseError::MalformedInput { line, msg } => Error::MalformedInput {
                path: path.to_path_buf(),
                line,
                msg,
            },
        }
    }
}
