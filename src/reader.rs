use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;
use thiserror::Error;

use crate::error::Error;
use crate::record::Record;

#[derive(Debug, Error)]
pub enum ParseError{
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("malformed FASTA input at line {line}: {msg}")]
    MalformedInput{line: usize, msg: String},
}

pub struct FastaReader<R: BufRead>{
    input: R,
    line_buf: Vec<u8>,
    next_head: Option<Vec<u8>>, // Header read in the previous iteration
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> FastaReader<R>{

    pub fn new(input: R) -> Self{
        FastaReader{input,
                    line_buf: Vec::<u8>::new(),
                    next_head: None,
                    line_number: 0,
                    finished: false}
    }

    // Reads one line into line_buf without the line terminator.
    // Returns false at the end of the stream.
    fn read_line(&mut self) -> Result<bool, ParseError>{
        self.line_buf.clear();
        let bytes_read = self.input.read_until(b'\n', &mut self.line_buf)?;
        if bytes_read == 0 {return Ok(false)}
        self.line_number += 1;
        if self.line_buf.last() == Some(&b'\n') {self.line_buf.pop();}
        if self.line_buf.last() == Some(&b'\r') {self.line_buf.pop();}
        Ok(true)
    }

    // Skips leading blank lines and returns the first header. None if the
    // input has no non-blank lines at all.
    fn read_first_head(&mut self) -> Result<Option<Vec<u8>>, ParseError>{
        loop{
            if !self.read_line()? {return Ok(None)}
            if self.line_buf.iter().all(|c| c.is_ascii_whitespace()) {continue}
            return match self.line_buf.strip_prefix(b">"){
                Some(head) => Ok(Some(head.trim_ascii_end().to_vec())),
                None => Err(ParseError::MalformedInput{
                    line: self.line_number,
                    msg: format!("expected a header line starting with '>', found \"{}\"",
                                 String::from_utf8_lossy(&self.line_buf)),
                }),
            };
        }
    }

    pub fn read_next(&mut self) -> Result<Option<Record>, ParseError>{
        if self.finished {return Ok(None)}

        let head = match self.next_head.take(){
            Some(head) => head, // Stashed from the previous iteration
            None => match self.read_first_head(){
                Ok(Some(head)) => head,
                Ok(None) => {self.finished = true; return Ok(None)},
                Err(e) => {self.finished = true; return Err(e)},
            },
        };

        // Sequence lines up to the next header or the end of the stream
        let mut seq = Vec::<u8>::new();
        loop{
            match self.read_line(){
                Err(e) => {self.finished = true; return Err(e)},
                Ok(false) => {self.finished = true; break},
                Ok(true) => {}
            }
            if let Some(next) = self.line_buf.strip_prefix(b">"){
                self.next_head = Some(next.trim_ascii_end().to_vec());
                break;
            }
            seq.extend(self.line_buf.iter().filter(|c| !c.is_ascii_whitespace()));
        }

        Ok(Some(Record{head, seq}))
    }

    pub fn lines_read(&self) -> usize{
        self.line_number
    }
}

impl<R: BufRead> Iterator for FastaReader<R>{
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item>{
        self.read_next().transpose()
    }
}

pub fn is_gzipped(path: &Path) -> bool{
    path.extension().is_some_and(|ext| ext == "gz")
}

// Opens a FASTA file for reading. Files ending in .gz are decompressed on the fly,
// including concatenated and bgzip files made of several gzip members.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, Error>{
    let file = File::open(path).map_err(|e| match e.kind(){
        io::ErrorKind::NotFound => Error::FileNotFound{path: path.to_path_buf()},
        _ => Error::io(path, e),
    })?;
    if is_gzipped(path){
        debug!("Reading gzipped input {}", path.display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
