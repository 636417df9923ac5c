use std::io::BufRead;

/// Stream a multi-line fasta file once and return the DNA of the reads
/// whose ranks appear in `ranks`, in the same order.
///
/// `ranks` must be sorted ascending with no duplicates. Sequence lines of
/// unwanted reads are skipped without being copied.
pub fn fetch_reads<R: BufRead>(rdr: R, ranks: &[u64]) -> anyhow::Result<Vec<String>> {
    let mut out = Vec::with_capacity(ranks.len());
    if ranks.is_empty() {
        return Ok(out);
    }

    let mut want = ranks.iter().copied().peekable();
    let mut rank: u64 = 0; // rank of the record being assembled
    let mut in_record = false;
    let mut dna = String::new();

    for line in rdr.lines() {
        let line = line?;
        if line.starts_with('>') {
            if in_record {
                if want.peek() == Some(&rank) {
                    out.push(std::mem::take(&mut dna));
                    want.next();
                    if want.peek().is_none() {
                        return Ok(out);
                    }
                }
                rank += 1;
            }
            in_record = true;
        } else if in_record && want.peek() == Some(&rank) {
            dna.push_str(line.trim_end());
        }
    }

    // last record of the file
    if in_record && want.peek() == Some(&rank) {
        out.push(dna);
        want.next();
    }
    if let Some(&missing) = want.peek() {
        return Err(anyhow!(
            "read {} not found in the fasta file ({} reads present)",
            missing,
            rank + u64::from(in_record)
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    const FASTA: &str = ">r0\nACGT\nACGT\n>r1\nTTTT\n>r2\nGG\nGG\nGG\n>r3\nCCCC\n";

    #[test]
    fn multi_line_records_are_joined() {
        let reads = fetch_reads(Cursor::new(FASTA), &[0, 2]).unwrap();
        assert_eq!(reads, vec!["ACGTACGT".to_owned(), "GGGGGG".to_owned()]);
    }

    #[test]
    fn first_and_last_rank() {
        let reads = fetch_reads(Cursor::new(FASTA), &[0, 3]).unwrap();
        assert_eq!(reads, vec!["ACGTACGT".to_owned(), "CCCC".to_owned()]);
    }

    #[test]
    fn empty_plan_reads_nothing() {
        assert!(fetch_reads(Cursor::new(FASTA), &[]).unwrap().is_empty());
    }

    #[test]
    fn missing_rank_is_an_error() {
        assert!(fetch_reads(Cursor::new(FASTA), &[4]).is_err());
    }

    #[test]
    fn crlf_endings_are_trimmed() {
        let fasta = ">r0\r\nACGT\r\nACGT\r\n";
        let reads = fetch_reads(Cursor::new(fasta), &[0]).unwrap();
        assert_eq!(reads, vec!["ACGTACGT".to_owned()]);
    }
}
