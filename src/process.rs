use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
};

use compress_io::compress::CompressIo;

use crate::{
    cli::Config,
    clusters::{ClusterReader, ClusterScan},
    egsa::EgsaReader,
    output::VariantWriter,
    reads::fetch_reads,
    stats::ClusterStats,
    variants::{access_plan, find_variants, materialize},
};

pub fn process_data(cfg: &Config) -> anyhow::Result<()> {
    info!("Input index file: {}", cfg.egsa_path().display());
    info!(
        "Left context length: {} bases, right context length: {} bases",
        cfg.k_left(),
        cfg.k_right()
    );
    debug!(
        "max gap: {}, mismatch option (-v): {}, min coverage per sample: {}",
        cfg.max_gap(),
        cfg.max_snvs(),
        cfg.mcov_out()
    );

    // Pass 1 over the cluster index: length distribution and the
    // admissible length window
    let stats = {
        let rdr = BufReader::new(File::open(cfg.clusters_path())?);
        ClusterStats::from_reader(rdr, cfg)?
    };
    let mut stdout = io::stdout().lock();
    stats.write_report(&mut stdout)?;
    info!(
        "{} clusters, {} clustered bases",
        stats.n_clust(),
        stats.n_bases()
    );
    info!(
        "Cluster sizes allowed: [{},{}]",
        stats.lmin(),
        stats.lmax()
    );

    // Pass 2: co-stream the cluster index and the suffix array, collecting
    // candidate variants from each admissible cluster
    let egsa = EgsaReader::new(BufReader::new(File::open(cfg.egsa_path())?), cfg.bcr());
    let clusters = ClusterReader::new(BufReader::new(File::open(cfg.clusters_path())?));
    let mut scan = ClusterScan::new(egsa, clusters, stats.lmin(), stats.lmax());

    let mut candidates = Vec::new();
    while let Some(cluster) = scan.next_cluster()? {
        candidates.extend(find_variants(&cluster, cfg));
    }
    info!(
        "{} candidate variants from {} of {} clusters (events on the forward and reverse strand are counted separately)",
        candidates.len(),
        scan.n_kept(),
        scan.n_seen()
    );

    // Extract the referenced reads in one pass over the fasta file
    let ranks = access_plan(&candidates);
    debug!("Fetching {} reads from {}", ranks.len(), cfg.input().display());
    let reads = {
        let rdr = CompressIo::new().path(cfg.input()).bufreader()?;
        fetch_reads(rdr, &ranks)?
    };
    let variants = materialize(&candidates, &ranks, &reads, cfg)?;
    drop(candidates);

    // Classify and emit the surviving pairs
    let mut wrt = VariantWriter::new(BufWriter::new(File::create(cfg.output_path())?));
    for v in &variants {
        wrt.write_variant(v, cfg)?;
    }
    let (n_snp, n_indel) = (wrt.n_snp(), wrt.n_indel());
    wrt.finish()?;
    info!(
        "Wrote {} SNPs and {} indels to {}",
        n_snp,
        n_indel,
        cfg.output_path().display()
    );

    Ok(())
}
