use std::path::Path;

use super::Config;

impl Config {
    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn egsa_path(&self) -> &Path {
        &self.egsa_path
    }

    pub fn clusters_path(&self) -> &Path {
        &self.clusters_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn n_reads0(&self) -> u64 {
        self.n_reads0
    }

    pub fn k_left(&self) -> usize {
        self.k_left
    }

    pub fn k_right(&self) -> usize {
        self.k_right
    }

    pub fn max_gap(&self) -> usize {
        self.max_gap
    }

    pub fn max_snvs(&self) -> usize {
        self.max_snvs
    }

    pub fn mcov_out(&self) -> usize {
        self.mcov_out
    }

    pub fn max_clust_length(&self) -> usize {
        self.max_clust_length
    }

    pub fn min_clust_length(&self) -> usize {
        2 * self.mcov_out
    }

    pub fn pval(&self) -> f64 {
        self.pval
    }

    pub fn bcr(&self) -> bool {
        self.bcr
    }
}
