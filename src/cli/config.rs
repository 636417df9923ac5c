use std::path::PathBuf;

mod getters;
mod mk_config;

/// Immutable run configuration, resolved once from the command line
pub struct Config {
    input: PathBuf,
    egsa_path: PathBuf,
    clusters_path: PathBuf,
    output_path: PathBuf,
    n_reads0: u64,
    k_left: usize,
    k_right: usize,
    max_gap: usize,
    max_snvs: usize,
    mcov_out: usize,
    max_clust_length: usize,
    pval: f64,
    bcr: bool,
}

#[cfg(test)]
impl Config {
    pub(crate) fn for_tests(
        n_reads0: u64,
        k_left: usize,
        k_right: usize,
        max_gap: usize,
        mcov_out: usize,
        max_clust_length: usize,
        pval: f64,
    ) -> Self {
        Self {
            input: PathBuf::from("reads.fasta"),
            egsa_path: PathBuf::from("reads.fasta.gesa"),
            clusters_path: PathBuf::from("reads.fasta.clusters"),
            output_path: PathBuf::from("reads.snp.fasta"),
            n_reads0,
            k_left,
            k_right,
            max_gap,
            max_snvs: 2,
            mcov_out,
            max_clust_length,
            pval,
            bcr: false,
        }
    }
}
