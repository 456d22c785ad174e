pub mod cli;
pub mod error;
pub mod partition;
pub mod reader;
pub mod record;
pub mod validate;
pub mod writer;

pub use error::{Error, Result};
pub use partition::{run, Partition, Summary, INVALID_FILE_NAME, VALID_FILE_NAME};
pub use reader::FastaReader;
pub use record::Record;
pub use validate::{is_valid, AMINO_ACIDS};
pub use writer::{FastaWriter, LINE_WIDTH};
