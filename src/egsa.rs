use std::io::Read;

/// One row of the enhanced generalized suffix array: the read holding the
/// suffix, the suffix start within that read, the length of the common
/// prefix shared with the previous row, and the character preceding the
/// suffix (BWT).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GsaEntry {
    pub text: u64,
    pub suff: u64,
    pub lcp: u64,
    pub bwt: u8,
}

// On-disk record sizes, fields packed little-endian
const RECORD_SIZE: usize = 25; // text:u64 suff:u64 lcp:u64 bwt:u8
const RECORD_SIZE_BCR: usize = 13; // text:u32 suff:u32 lcp:u32 bwt:u8

/// Sequential reader over the packed suffix array file. `bcr` selects the
/// reduced record layout.
pub struct EgsaReader<R> {
    rdr: R,
    bcr: bool,
    row: u64,
    buf: [u8; RECORD_SIZE],
}

impl<R: Read> EgsaReader<R> {
    pub fn new(rdr: R, bcr: bool) -> Self {
        Self {
            rdr,
            bcr,
            row: 0,
            buf: [0; RECORD_SIZE],
        }
    }

    /// Index of the next row to be read
    pub fn row(&self) -> u64 {
        self.row
    }

    pub fn next_entry(&mut self) -> anyhow::Result<GsaEntry> {
        let n = if self.bcr { RECORD_SIZE_BCR } else { RECORD_SIZE };
        self.rdr
            .read_exact(&mut self.buf[..n])
            .map_err(|e| anyhow!("suffix array truncated at row {}: {}", self.row, e))?;
        self.row += 1;
        let b = &self.buf;
        Ok(if self.bcr {
            GsaEntry {
                text: u32::from_le_bytes(b[..4].try_into().unwrap()) as u64,
                suff: u32::from_le_bytes(b[4..8].try_into().unwrap()) as u64,
                lcp: u32::from_le_bytes(b[8..12].try_into().unwrap()) as u64,
                bwt: b[12],
            }
        } else {
            GsaEntry {
                text: u64::from_le_bytes(b[..8].try_into().unwrap()),
                suff: u64::from_le_bytes(b[8..16].try_into().unwrap()),
                lcp: u64::from_le_bytes(b[16..24].try_into().unwrap()),
                bwt: b[24],
            }
        })
    }

    /// Read and discard rows until the cursor reaches `row`
    pub fn skip_to(&mut self, row: u64) -> anyhow::Result<()> {
        while self.row < row {
            self.next_entry()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    fn pack(entries: &[(u64, u64, u64, u8)]) -> Vec<u8> {
        let mut v = Vec::with_capacity(entries.len() * RECORD_SIZE);
        for &(text, suff, lcp, bwt) in entries {
            v.extend_from_slice(&text.to_le_bytes());
            v.extend_from_slice(&suff.to_le_bytes());
            v.extend_from_slice(&lcp.to_le_bytes());
            v.push(bwt);
        }
        v
    }

    #[test]
    fn decode_canonical() {
        let bytes = pack(&[(3, 17, 29, b'A'), (4, 0, 30, b'T')]);
        let mut rdr = EgsaReader::new(Cursor::new(bytes), false);
        assert_eq!(
            rdr.next_entry().unwrap(),
            GsaEntry {
                text: 3,
                suff: 17,
                lcp: 29,
                bwt: b'A'
            }
        );
        assert_eq!(
            rdr.next_entry().unwrap(),
            GsaEntry {
                text: 4,
                suff: 0,
                lcp: 30,
                bwt: b'T'
            }
        );
        assert_eq!(rdr.row(), 2);
    }

    #[test]
    fn decode_bcr() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&7u32.to_le_bytes());
        bytes.extend_from_slice(&11u32.to_le_bytes());
        bytes.extend_from_slice(&13u32.to_le_bytes());
        bytes.push(b'G');
        let mut rdr = EgsaReader::new(Cursor::new(bytes), true);
        assert_eq!(
            rdr.next_entry().unwrap(),
            GsaEntry {
                text: 7,
                suff: 11,
                lcp: 13,
                bwt: b'G'
            }
        );
    }

    #[test]
    fn truncated_record_is_an_error() {
        let mut bytes = pack(&[(1, 2, 3, b'C')]);
        bytes.truncate(RECORD_SIZE - 1);
        let mut rdr = EgsaReader::new(Cursor::new(bytes), false);
        assert!(rdr.next_entry().is_err());
    }

    #[test]
    fn skip_to_advances_cursor() {
        let bytes = pack(&[(0, 0, 0, b'A'), (1, 1, 1, b'C'), (2, 2, 2, b'G')]);
        let mut rdr = EgsaReader::new(Cursor::new(bytes), false);
        rdr.skip_to(2).unwrap();
        assert_eq!(rdr.next_entry().unwrap().text, 2);
    }
}
