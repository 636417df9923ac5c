use std::io::{self, Read, Write};

use crate::{cli::Config, clusters::ClusterReader};

/// Cluster length distribution and the admissible length window derived
/// from it. Lengths above the configured bound are counted in the totals
/// but not in the histogram.
pub struct ClusterStats {
    hist: Vec<u64>,
    n_clust: u64,
    n_bases: u64,
    max_len: usize,
    lmin: usize,
    lmax: usize,
}

impl ClusterStats {
    /// Scan the cluster stream once and tabulate the length histogram
    pub fn from_reader<R: Read>(rdr: R, cfg: &Config) -> anyhow::Result<Self> {
        let bound = cfg.max_clust_length();
        let mut hist = vec![0u64; bound + 1];
        let mut n_clust = 0;
        let mut n_bases = 0;
        let mut max_len = 0;

        let mut clusters = ClusterReader::new(rdr);
        while let Some(rec) = clusters.next_record()? {
            n_clust += 1;
            n_bases += rec.len as u64;
            let len = rec.len as usize;
            if len <= bound {
                hist[len] += 1;
                max_len = max_len.max(len);
            }
        }

        let lmin = cfg.min_clust_length();
        let lmax = auto_tune(&hist, n_bases, lmin, bound, cfg.pval());

        Ok(Self {
            hist,
            n_clust,
            n_bases,
            max_len,
            lmin,
            lmax,
        })
    }

    pub fn lmin(&self) -> usize {
        self.lmin
    }

    pub fn lmax(&self) -> usize {
        self.lmax
    }

    pub fn n_clust(&self) -> u64 {
        self.n_clust
    }

    pub fn n_bases(&self) -> u64 {
        self.n_bases
    }

    /// Two-panel ASCII histogram of the length distribution
    pub fn write_report<W: Write>(&self, w: &mut W) -> io::Result<()> {
        fn bar<W: Write>(w: &mut W, units: u64, max: u64) -> io::Result<()> {
            for _ in 0..(100 * units) / max.max(1) {
                write!(w, "-")?;
            }
            Ok(())
        }

        writeln!(w, "\nDistribution of base coverage:")?;
        writeln!(
            w,
            "\ncluster length\t# bases in a cluster with this length\tcumulative fraction (from {})",
            self.lmin
        )?;
        let max_bases = self
            .hist
            .iter()
            .enumerate()
            .map(|(len, &n)| n * len as u64)
            .max()
            .unwrap_or(0);
        let mut cumulative = 0u64;
        for (len, &n) in self.hist[..=self.max_len].iter().enumerate() {
            let bases = n * len as u64;
            write!(w, "{}\t", len)?;
            bar(w, bases, max_bases)?;
            write!(w, "\t{}", bases)?;
            if len >= self.lmin {
                cumulative += bases;
                if self.n_bases > 0 {
                    write!(w, "\t{:.6}", cumulative as f64 / self.n_bases as f64)?;
                }
            }
            writeln!(w)?;
        }

        writeln!(w, "\nDistribution of cluster length:")?;
        writeln!(w, "\ncluster length\t# clusters with this length")?;
        let max_clust = self.hist.iter().copied().max().unwrap_or(0);
        for (len, &n) in self.hist[..=self.max_len].iter().enumerate() {
            write!(w, "{}\t", len)?;
            bar(w, n, max_clust)?;
            writeln!(w, "   {}", n)?;
        }

        writeln!(w, "\nCluster sizes allowed: [{},{}]", self.lmin, self.lmax)
    }
}

/// Smallest admissible upper bound catching at least `pval` of the
/// clustered bases, starting from `lmin` and clamped at `bound`
fn auto_tune(hist: &[u64], n_bases: u64, lmin: usize, bound: usize, pval: f64) -> usize {
    if n_bases == 0 {
        return lmin;
    }
    let mut lmax = lmin;
    let mut cumulative = hist[lmax] * lmax as u64;
    while (cumulative as f64) / (n_bases as f64) < pval && lmax < bound {
        lmax += 1;
        cumulative += hist[lmax] * lmax as u64;
    }
    lmax
}
