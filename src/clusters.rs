use std::io::{ErrorKind, Read};

use crate::egsa::{EgsaReader, GsaEntry};

/// A maximal run of suffix array rows whose suffixes share a long prefix:
/// `start` is the first row, `len` the number of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterRecord {
    pub start: u64,
    pub len: u16,
}

const RECORD_SIZE: usize = 10; // start:u64 len:u16, little-endian

/// Sequential reader over the packed cluster index
pub struct ClusterReader<R> {
    rdr: R,
    n_read: u64,
}

impl<R: Read> ClusterReader<R> {
    pub fn new(rdr: R) -> Self {
        Self { rdr, n_read: 0 }
    }

    /// Next cluster record, or None at a clean end of stream
    pub fn next_record(&mut self) -> anyhow::Result<Option<ClusterRecord>> {
        let mut buf = [0u8; RECORD_SIZE];
        let mut filled = 0;
        while filled < RECORD_SIZE {
            match self.rdr.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        match filled {
            0 => Ok(None),
            RECORD_SIZE => {
                self.n_read += 1;
                Ok(Some(ClusterRecord {
                    start: u64::from_le_bytes(buf[..8].try_into().unwrap()),
                    len: u16::from_le_bytes(buf[8..].try_into().unwrap()),
                }))
            }
            n => Err(anyhow!(
                "cluster record {} truncated ({} of {} bytes)",
                self.n_read,
                n,
                RECORD_SIZE
            )),
        }
    }
}

/// Co-streams the cluster index and the suffix array, yielding each cluster
/// whose length falls within the admissible window `[lmin, lmax]`. Skipped
/// clusters still advance the suffix array cursor.
pub struct ClusterScan<R, S> {
    egsa: EgsaReader<R>,
    clusters: ClusterReader<S>,
    lmin: usize,
    lmax: usize,
    n_seen: u64,
    n_kept: u64,
}

impl<R: Read, S: Read> ClusterScan<R, S> {
    pub fn new(egsa: EgsaReader<R>, clusters: ClusterReader<S>, lmin: usize, lmax: usize) -> Self {
        Self {
            egsa,
            clusters,
            lmin,
            lmax,
            n_seen: 0,
            n_kept: 0,
        }
    }

    pub fn n_seen(&self) -> u64 {
        self.n_seen
    }

    pub fn n_kept(&self) -> u64 {
        self.n_kept
    }

    /// Next admissible cluster as a vector of suffix array rows
    pub fn next_cluster(&mut self) -> anyhow::Result<Option<Vec<GsaEntry>>> {
        while let Some(rec) = self.clusters.next_record()? {
            self.n_seen += 1;
            let len = rec.len as usize;
            if len < self.lmin || len > self.lmax {
                continue;
            }
            if rec.start < self.egsa.row() {
                return Err(anyhow!(
                    "cluster starting at row {} overlaps the previous cluster (cursor at {})",
                    rec.start,
                    self.egsa.row()
                ));
            }
            self.egsa.skip_to(rec.start)?;
            let mut cluster = Vec::with_capacity(len);
            for _ in 0..len {
                cluster.push(self.egsa.next_entry()?);
            }
            self.n_kept += 1;
            return Ok(Some(cluster));
        }
        Ok(None)
    }
}
