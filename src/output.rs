use std::io::{self, Write};

use crate::{align::gapped_distance, cli::Config, variants::Variant};

// mismatches tolerated in the left contexts outside the main variant when
// accepting a pair; fixed cap, not tied to -v
const SNV_ACCEPT_LIMIT: usize = 2;

/// Classifies variant pairs and writes the accepted ones as paired fasta
/// records, `higher_path` for sample 0 and `lower_path` for sample 1.
pub struct VariantWriter<W: Write> {
    wrt: W,
    next_id: u64,
    n_snp: u64,
    n_indel: u64,
}

impl<W: Write> VariantWriter<W> {
    pub fn new(wrt: W) -> Self {
        Self {
            wrt,
            next_id: 1,
            n_snp: 0,
            n_indel: 0,
        }
    }

    pub fn n_snp(&self) -> u64 {
        self.n_snp
    }

    pub fn n_indel(&self) -> u64 {
        self.n_indel
    }

    /// Classify one variant pair and, if accepted, write its two records.
    /// Returns true when the pair was written.
    pub fn write_variant(&mut self, v: &Variant, cfg: &Config) -> io::Result<bool> {
        let (d, gap) = gapped_distance(v.left0.as_bytes(), v.left1.as_bytes(), cfg.max_gap());
        if d > SNV_ACCEPT_LIMIT {
            return Ok(false);
        }

        let kind = if gap == 0 { "SNP" } else { "INDEL" };
        let allele = allele_desc(v, gap);

        // both bodies end with the shared right context; with a gap, the
        // side carrying the insertion keeps it and the other side is
        // trimmed on the left so the anchors stay the same length
        let (l0, l1) = trimmed_contexts(v, gap);
        self.write_record(kind, "higher", &allele, l0, &v.right)?;
        self.write_record(kind, "lower", &allele, l1, &v.right)?;

        if gap == 0 {
            self.n_snp += 1
        } else {
            self.n_indel += 1
        }
        self.next_id += 1;
        Ok(true)
    }

    fn write_record(
        &mut self,
        kind: &str,
        path: &str,
        allele: &str,
        left: &str,
        right: &str,
    ) -> io::Result<()> {
        writeln!(
            self.wrt,
            ">{}_{}_path_{}|P_1:{}_{}|high|nb_pol_1",
            kind,
            path,
            self.next_id,
            right.len(),
            allele
        )?;
        writeln!(self.wrt, "{}{}", left, right)
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.wrt.flush()
    }
}

/// The allele field of the headers: `x/y` for a substitution, the inserted
/// bases on the side of the slash that carries them for an indel
fn allele_desc(v: &Variant, gap: isize) -> String {
    match gap {
        0 => format!(
            "{}/{}",
            *v.left0.as_bytes().last().unwrap() as char,
            *v.left1.as_bytes().last().unwrap() as char
        ),
        g if g > 0 => format!("{}/", &v.left0[v.left0.len() - g as usize..]),
        g => format!("/{}", &v.left1[v.left1.len() - (-g) as usize..]),
    }
}

fn trimmed_contexts(v: &Variant, gap: isize) -> (&str, &str) {
    match gap {
        0 => (v.left0.as_str(), v.left1.as_str()),
        g if g > 0 => (v.left0.as_str(), &v.left1[g as usize..]),
        g => (&v.left0[(-g) as usize..], v.left1.as_str()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn variant(left0: &str, left1: &str, right: &str) -> Variant {
        Variant {
            left0: left0.to_owned(),
            left1: left1.to_owned(),
            right: right.to_owned(),
        }
    }

    fn write_all(variants: &[Variant], cfg: &Config) -> String {
        let mut wrt = VariantWriter::new(Vec::new());
        for v in variants {
            wrt.write_variant(v, cfg).unwrap();
        }
        String::from_utf8(wrt.wrt).unwrap()
    }

    #[test]
    fn snp_pair() {
        let cfg = Config::for_tests(1, 3, 3, 2, 2, 150, 0.85);
        let out = write_all(&[variant("TTA", "TTC", "GGG")], &cfg);
        assert_eq!(
            out,
            ">SNP_higher_path_1|P_1:3_A/C|high|nb_pol_1\n\
             TTAGGG\n\
             >SNP_lower_path_1|P_1:3_A/C|high|nb_pol_1\n\
             TTCGGG\n"
        );
    }

    #[test]
    fn insertion_in_sample0() {
        let cfg = Config::for_tests(1, 6, 3, 2, 2, 150, 0.85);
        let out = write_all(&[variant("TTACGG", "ATTACG", "CCC")], &cfg);
        // sample 0 keeps its insertion; sample 1 loses one leading base
        assert_eq!(
            out,
            ">INDEL_higher_path_1|P_1:3_G/|high|nb_pol_1\n\
             TTACGGCCC\n\
             >INDEL_lower_path_1|P_1:3_G/|high|nb_pol_1\n\
             TTACGCCC\n"
        );
    }

    #[test]
    fn insertion_in_sample1() {
        let cfg = Config::for_tests(1, 6, 3, 2, 2, 150, 0.85);
        let out = write_all(&[variant("ATTACG", "TTACGG", "CCC")], &cfg);
        assert_eq!(
            out,
            ">INDEL_higher_path_1|P_1:3_/G|high|nb_pol_1\n\
             TTACGCCC\n\
             >INDEL_lower_path_1|P_1:3_/G|high|nb_pol_1\n\
             TTACGGCCC\n"
        );
    }

    #[test]
    fn noisy_contexts_are_rejected() {
        let cfg = Config::for_tests(1, 6, 3, 0, 2, 150, 0.85);
        let mut wrt = VariantWriter::new(Vec::new());
        // three mismatches beyond the variant site
        let v = variant("AAATTA", "CCCTTC", "GGG");
        assert!(!wrt.write_variant(&v, &cfg).unwrap());
        assert_eq!(wrt.n_snp(), 0);
    }

    #[test]
    fn ids_increment_only_on_accepted_pairs() {
        let cfg = Config::for_tests(1, 3, 3, 2, 2, 150, 0.85);
        let out = write_all(
            &[
                variant("TTA", "TTC", "GGG"),
                variant("AAA", "CCC", "GGG"), // rejected, 2 extra mismatches + variant
                variant("TGA", "TGC", "GGG"),
            ],
            &cfg,
        );
        assert!(out.contains(">SNP_higher_path_1|"));
        assert!(out.contains(">SNP_higher_path_2|P_1:3_A/C|"));
        assert!(!out.contains("path_3"));
    }
}
