// One FASTA entry. The header is kept verbatim (everything after '>'),
// the sequence has all line breaks and whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record{
    pub head: Vec<u8>,
    pub seq: Vec<u8>,
}

impl Record{
    pub fn new(head: &[u8], seq: &[u8]) -> Self{
        Record{head: head.to_vec(), seq: seq.to_vec()}
    }

    // Leading whitespace-delimited token of the header
    pub fn id(&self) -> &[u8]{
        let end = self.head.iter().position(|c| c.is_ascii_whitespace()).unwrap_or(self.head.len());
        &self.head[..end]
    }

    pub fn description(&self) -> &[u8]{
        self.head.as_slice()
    }

    pub fn seq(&self) -> &[u8]{
        self.seq.as_slice()
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn test_id_is_first_token(){
        let rec = Record::new(b"sp|P69905|HBA_HUMAN Hemoglobin subunit alpha", b"MVLS");
        assert_eq!(rec.id(), b"sp|P69905|HBA_HUMAN");
        assert_eq!(rec.description(), b"sp|P69905|HBA_HUMAN Hemoglobin subunit alpha");
    }

    #[test]
    fn test_id_without_description(){
        let rec = Record::new(b"seq1", b"");
        assert_eq!(rec.id(), b"seq1");
        assert_eq!(rec.description(), rec.id());
        assert!(rec.seq().is_empty());
    }

    #[test]
    fn test_tab_separated_header(){
        let rec = Record::new(b"seq1\tsome protein", b"MK");
        assert_eq!(rec.id(), b"seq1");
    }
}
