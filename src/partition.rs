use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::reader::{open_input, FastaReader};
use crate::record::Record;
use crate::validate::{classify, Classification};
use crate::writer::write_fasta_file;

pub const VALID_FILE_NAME: &str = "proteins_valid.fasta";
pub const INVALID_FILE_NAME: &str = "proteins_invalid.fasta";

// Records split by classification. Both lists keep input order.
#[derive(Debug, Default)]
pub struct Partition{
    pub valid: Vec<Record>,
    pub invalid: Vec<Record>,
}

impl Partition{

    pub fn push(&mut self, rec: Record){
        match classify(rec.seq()){
            Classification::Valid => self.valid.push(rec),
            Classification::Invalid => self.invalid.push(rec),
        }
    }

    // Stops at the first error from the record stream
    pub fn from_records<I, E>(records: I) -> std::result::Result<Self, E>
    where I: IntoIterator<Item = std::result::Result<Record, E>>
    {
        let mut partition = Partition::default();
        for rec in records{
            partition.push(rec?);
        }
        Ok(partition)
    }

    pub fn total(&self) -> usize{
        self.valid.len() + self.invalid.len()
    }

    // Writes each non-empty list to its fixed file name under out_dir,
    // overwriting existing files. Returns the paths that were written.
    pub fn write_outputs(&self, out_dir: &Path) -> Result<Vec<PathBuf>>{
        let mut written = vec![];
        for (records, name) in [(&self.valid, VALID_FILE_NAME), (&self.invalid, INVALID_FILE_NAME)]{
            if records.is_empty(){
                debug!("No records for {}, not writing it", name);
                continue;
            }
            let path = out_dir.join(name);
            write_fasta_file(&path, records)?;
            written.push(path);
        }
        Ok(written)
    }

    pub fn summary(&self) -> Summary{
        if self.invalid.is_empty(){
            Summary::AllValid
        } else {
            Summary::SomeInvalid{n_invalid: self.invalid.len()}
        }
    }
}

// The message printed at the end of a run. The wording names both output
// files whenever something was invalid, even if no valid file was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary{
    AllValid,
    SomeInvalid{n_invalid: usize},
}

impl fmt::Display for Summary{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        match self{
            Summary::AllValid => write!(f,
                "All protein sequences are valid. File '{}' has been created.", VALID_FILE_NAME),
            Summary::SomeInvalid{n_invalid} => write!(f,
                "{} invalid protein sequence(s) found.\nFiles '{}' and '{}' have been created.",
                n_invalid, VALID_FILE_NAME, INVALID_FILE_NAME),
        }
    }
}

// Reads the input, partitions its records and writes the output files into out_dir.
pub fn run(input: &Path, out_dir: &Path) -> Result<Summary>{
    info!("Validating {}", input.display());
    let mut reader = FastaReader::new(open_input(input)?);
    let partition = Partition::from_records(&mut reader).map_err(|e| Error::from_parse(input, e))?;
    debug!("Parsed {} lines from {}", reader.lines_read(), input.display());
    info!("Read {} records: {} valid, {} invalid",
          partition.total(), partition.valid.len(), partition.invalid.len());

    partition.write_outputs(out_dir)?;
    Ok(partition.summary())
}
