use std::{fs, path::PathBuf};

use clap::ArgMatches;

use super::Config;

impl Config {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        let input_str = m.get_one::<String>("input").map(|s| s.as_str()).unwrap();
        let n_reads0 = *m.get_one::<u64>("n_reads0").unwrap();
        let k_left = *m.get_one::<usize>("k_left").unwrap();
        let k_right = *m.get_one::<usize>("k_right").unwrap();
        let max_gap = *m.get_one::<usize>("max_gap").unwrap();
        let max_snvs = *m.get_one::<usize>("max_snvs").unwrap();
        let mcov_out = *m.get_one::<usize>("mcov_out").unwrap();
        let max_clust_length = *m.get_one::<usize>("max_clust_length").unwrap();
        let pval = *m.get_one::<f64>("pval").unwrap();
        let bcr = m.get_flag("bcr");

        if !(pval > 0.0 && pval <= 1.0) {
            return Err(anyhow!("argument of -p must be in (0,1] (got {})", pval));
        }
        if k_left == 0 || k_right == 0 {
            return Err(anyhow!("context lengths (-L, -R) must be positive"));
        }
        if max_gap > k_left {
            return Err(anyhow!(
                "maximum gap length {} exceeds the left context length {}",
                max_gap,
                k_left
            ));
        }
        if mcov_out == 0 {
            return Err(anyhow!("minimum coverage (-m) must be positive"));
        }
        if 2 * mcov_out > max_clust_length {
            return Err(anyhow!(
                "minimum cluster length {} exceeds the maximum cluster length {}",
                2 * mcov_out,
                max_clust_length
            ));
        }

        let input = PathBuf::from(input_str);
        let egsa_path = PathBuf::from(format!("{}.gesa", input_str));
        let clusters_path = PathBuf::from(format!("{}.clusters", input_str));

        // the output name replaces any trailing ".fasta"/".fastq"/... part
        // of the input name
        let stem = input_str
            .rfind(".fast")
            .map(|i| &input_str[..i])
            .unwrap_or(input_str);
        let output_path = PathBuf::from(format!("{}.snp.fasta", stem));

        for path in [&input, &egsa_path, &clusters_path] {
            if !fs::metadata(path).map(|md| md.is_file()).unwrap_or(false) {
                return Err(anyhow!("could not find input file {}", path.display()));
            }
        }

        Ok(Config {
            input,
            egsa_path,
            clusters_path,
            output_path,
            n_reads0,
            k_left,
            k_right,
            max_gap,
            max_snvs,
            mcov_out,
            max_clust_length,
            pval,
            bcr,
        })
    }
}
