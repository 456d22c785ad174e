// The 20 standard single-letter amino acid codes
pub const AMINO_ACIDS: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

// Membership table indexed by byte value. Only uppercase letters are marked,
// callers uppercase before the lookup.
static IS_AMINO_ACID: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < AMINO_ACIDS.len() {
        table[AMINO_ACIDS[i] as usize] = true;
        i += 1;
    }
    table
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification{
    Valid,
    Invalid,
}

#[inline(always)]
pub fn is_amino_acid(c: u8) -> bool{
    IS_AMINO_ACID[c.to_ascii_uppercase() as usize]
}

// True iff every residue is a standard amino acid, ignoring case.
// An empty sequence is valid. Case folding is ASCII-only, unlike Unicode
// uppercasing, so non-ASCII letters such as 'ı' or 'ſ' are never accepted.
pub fn is_valid(seq: &[u8]) -> bool{
    seq.iter().all(|&c| is_amino_acid(c))
}

pub fn classify(seq: &[u8]) -> Classification{
    if is_valid(seq) {Classification::Valid} else {Classification::Invalid}
}
