use crate::{cli::Config, egsa::GsaEntry};

const BASES: &[u8; 4] = b"ACGT";

/// A potential variant located on reads: one left-context window per
/// sample and the shared right-context window. The variant site is the
/// last position of each left context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateVariant {
    pub left_text0: u64,
    pub left_pos0: u64,
    pub left_text1: u64,
    pub left_pos1: u64,
    pub right_text: u64,
    pub right_pos: u64,
}

/// The same pair of segments materialized as DNA strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub left0: String,
    pub left1: String,
    pub right: String,
}

fn base_index(c: u8) -> Option<usize> {
    match c {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Scan one cluster and emit the candidate variants it supports.
///
/// A cluster survives only if its longest common prefix covers the right
/// context and each sample shows one or two frequent preceding bases, with
/// the two samples differing and at most three distinct bases overall.
pub fn find_variants(cluster: &[GsaEntry], cfg: &Config) -> Vec<CandidateVariant> {
    let mut out = Vec::new();

    let mut counts = [[0u32; 4]; 2];
    let mut max_lcp = 0u64;
    let mut right_anchor = (0u64, 0u64);

    for e in cluster {
        if e.lcp > max_lcp {
            max_lcp = e.lcp;
            right_anchor = (e.text, e.suff);
        }
        let s = usize::from(e.text >= cfg.n_reads0());
        if let Some(b) = base_index(e.bwt) {
            counts[s][b] += 1;
        }
    }

    // the shared right context must be fully inside the longest common
    // prefix of the cluster
    if max_lcp < cfg.k_right() as u64 {
        return out;
    }

    // frequent preceding bases per sample, in A<C<G<T order
    let frequent: Vec<Vec<u8>> = counts
        .iter()
        .map(|cnt| {
            (0..4)
                .filter(|&b| cnt[b] as usize >= cfg.mcov_out())
                .map(|b| BASES[b])
                .collect()
        })
        .collect();

    let mut all: Vec<u8> = frequent[0]
        .iter()
        .chain(frequent[1].iter())
        .copied()
        .collect();
    all.sort_unstable();
    all.dedup();

    // clusters that cannot witness a biallelic difference between the two
    // samples
    if frequent[0].is_empty()
        || frequent[1].is_empty()
        || frequent[0].len() > 2
        || frequent[1].len() > 2
        || frequent[0] == frequent[1]
        || all.len() > 3
    {
        return out;
    }

    let k_left = cfg.k_left() as u64;
    for &c0 in &frequent[0] {
        for &c1 in &frequent[1] {
            if c0 == c1 {
                continue;
            }
            // keep the last matching row on each side; later rows share
            // longer prefixes with their neighbours
            let mut left0 = None;
            let mut left1 = None;
            for e in cluster {
                if e.suff < k_left {
                    continue;
                }
                if e.text < cfg.n_reads0() {
                    if e.bwt == c0 {
                        left0 = Some((e.text, e.suff - k_left));
                    }
                } else if e.bwt == c1 {
                    left1 = Some((e.text, e.suff - k_left));
                }
            }
            if let (Some((t0, p0)), Some((t1, p1))) = (left0, left1) {
                out.push(CandidateVariant {
                    left_text0: t0,
                    left_pos0: p0,
                    left_text1: t1,
                    left_pos1: p1,
                    right_text: right_anchor.0,
                    right_pos: right_anchor.1,
                });
            }
        }
    }

    out
}

/// Sorted, deduplicated list of every read referenced by the candidates
pub fn access_plan(candidates: &[CandidateVariant]) -> Vec<u64> {
    let mut ranks: Vec<u64> = candidates
        .iter()
        .flat_map(|v| [v.left_text0, v.left_text1, v.right_text])
        .collect();
    ranks.sort_unstable();
    ranks.dedup();
    ranks
}

/// Turn candidates into DNA triples using the reads fetched for the access
/// plan. `ranks` must be the sorted, deduplicated list the reads were
/// fetched with.
pub fn materialize(
    candidates: &[CandidateVariant],
    ranks: &[u64],
    reads: &[String],
    cfg: &Config,
) -> anyhow::Result<Vec<Variant>> {
    let window = |rank: u64, pos: u64, len: usize| -> anyhow::Result<String> {
        let i = ranks
            .binary_search(&rank)
            .map_err(|_| anyhow!("read {} missing from the access plan", rank))?;
        let read = reads[i].as_str();
        let pos = pos as usize;
        read.get(pos..pos + len).map(str::to_owned).ok_or_else(|| {
            anyhow!(
                "read {} too short for window {}..{} ({} bases)",
                rank,
                pos,
                pos + len,
                read.len()
            )
        })
    };

    let mut out = Vec::with_capacity(candidates.len());
    for v in candidates {
        out.push(Variant {
            left0: window(v.left_text0, v.left_pos0, cfg.k_left())?,
            left1: window(v.left_text1, v.left_pos1, cfg.k_left())?,
            right: window(v.right_text, v.right_pos, cfg.k_right())?,
        });
    }
    Ok(out)
}
