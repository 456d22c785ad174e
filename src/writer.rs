use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::record::Record;

// Residues per sequence line in written files
pub const LINE_WIDTH: usize = 60;

pub struct FastaWriter<W: Write>{
    output: BufWriter<W>,
}

impl<W: Write> FastaWriter<W>{

    // No need to give a buffered writer. Buffering is handled internally.
    pub fn new(output: W) -> Self{
        Self{output: BufWriter::<W>::new(output)}
    }

    // Header line, then the sequence wrapped at LINE_WIDTH. A record with an
    // empty sequence is written as a lone header line.
    pub fn write(&mut self, rec: &Record) -> io::Result<()>{
        self.output.write_all(b">")?;
        self.output.write_all(rec.description())?;
        self.output.write_all(b"\n")?;
        for line in rec.seq().chunks(LINE_WIDTH){
            self.output.write_all(line)?;
            self.output.write_all(b"\n")?;
        }
        Ok(())
    }

    // Flushes and hands back the underlying stream
    pub fn finish(self) -> io::Result<W>{
        self.output.into_inner().map_err(|e| e.into_error())
    }
}

// Creates (or truncates) the file at path and writes all records into it.
pub fn write_fasta_file(path: &Path, records: &[Record]) -> Result<(), Error>{
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = FastaWriter::new(file);
    for rec in records{
        writer.write(rec).map_err(|e| Error::io(path, e))?;
    }
    writer.finish().map_err(|e| Error::io(path, e))?;
    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests{
    use super::*;
    use crate::reader::FastaReader;

    fn to_string(records: &[Record]) -> String{
        let mut writer = FastaWriter::new(Vec::<u8>::new());
        for rec in records{
            writer.write(rec).unwrap();
        }
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_short_record(){
        let s = to_string(&[Record::new(b"seq1 some protein", b"MKVL")]);
        assert_eq!(s, ">seq1 some protein\nMKVL\n");
    }

    #[test]
    fn test_wrapping(){
        let seq: Vec<u8> = b"ACDEFGHIKLMNPQRSTVWY".iter().cycle().take(130).copied().collect();
        let s = to_string(&[Record::new(b"long", &seq)]);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], ">long");
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[2].len(), 60);
        assert_eq!(lines[3].len(), 10);
        assert!(s.ends_with('\n'));
    }

    #[test]
    fn test_exact_multiple_of_width_has_no_blank_line(){
        let seq = vec![b'A'; 120];
        let s = to_string(&[Record::new(b"a", &seq)]);
        assert_eq!(s.lines().count(), 3);
        assert!(!s.contains("\n\n"));
    }

    #[test]
    fn test_empty_sequence(){
        let s = to_string(&[Record::new(b"empty", b""), Record::new(b"next", b"MK")]);
        assert_eq!(s, ">empty\n>next\nMK\n");
    }

    #[test]
    fn test_written_records_read_back(){
        let records = vec![
            Record::new(b"p1 first protein", &[b'M'; 150]),
            Record::new(b"p2", b"mkvlX"),
            Record::new(b"p3", b""),
        ];
        let s = to_string(&records);
        let parsed: Vec<Record> = FastaReader::new(s.as_bytes())
            .collect::<Result<_, _>>().unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_file_is_overwritten(){
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.fasta");
        std::fs::write(&path, ">old\nAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA\n").unwrap();
        write_fasta_file(&path, &[Record::new(b"new", b"MK")]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ">new\nMK\n");
    }

    #[test]
    fn test_unwritable_path(){
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.fasta");
        match write_fasta_file(&path, &[Record::new(b"a", b"MK")]){
            Err(Error::Io{path: p, ..}) => assert_eq!(p, path),
            other => panic!("Expected an I/O error, got {:?}", other),
        }
    }
}
