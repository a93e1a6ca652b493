//! Whole-graph reports built on top of the degree query and BFS.
use crate::error::GraphError;
use crate::graph::{BaseGraph, Graph};
use fxhash::FxHashMap;
use rand::prelude::StdRng;
use rand::SeedableRng;

#[cfg(feature = "handle-ctrlc")]
use crate::signals::received_ctrl_c;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegreeStatistics {
    order: usize,
    min: usize,
    max: usize,
    distribution: Vec<(usize, usize)>,
}

impl DegreeStatistics {
    pub fn of<G: BaseGraph + ?Sized>(graph: &G) -> Self {
        let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
        for v in graph.vertices() {
            *counts.entry(graph.degree(v)).or_insert(0) += 1;
        }
        let mut distribution: Vec<(usize, usize)> = counts.into_iter().collect();
        distribution.sort_unstable();
        let min = distribution.first().map_or(0, |(d, _)| *d);
        let max = distribution.last().map_or(0, |(d, _)| *d);
        Self {
            order: graph.order(),
            min,
            max,
            distribution,
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// `n - 1`, the largest degree possible without self-loops.
    pub fn max_possible(&self) -> usize {
        self.order.saturating_sub(1)
    }

    /// Largest degree as a percentage of [`max_possible`](Self::max_possible).
    pub fn max_degree_ratio(&self) -> f64 {
        match self.max_possible() {
            0 => 0.0,
            p => self.max as f64 * 100.0 / p as f64,
        }
    }

    /// `(degree, vertex count)` pairs by increasing degree, zero counts omitted.
    pub fn distribution(&self) -> &[(usize, usize)] {
        &self.distribution
    }
}

/// Largest BFS level reached from each source. Sources outside `[1, n]` are
/// skipped.
pub fn probe_max_levels(graph: &Graph, sources: &[usize]) -> Result<Vec<(usize, usize)>, GraphError> {
    let mut result = Vec::with_capacity(sources.len());
    for &s in sources {
        if s == 0 || s > graph.order() {
            continue;
        }
        let tree = graph.bfs(s)?;
        result.push((s, tree.max_level()));
    }
    Ok(result)
}

/// Longest shortest path found from the probed sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diameter {
    pub length: usize,
    pub from: usize,
    pub to: usize,
    pub probed: usize,
}

/// Runs BFS from every source and keeps the first pair with the largest
/// level. This is exact when `sources` covers every vertex, and a lower bound
/// otherwise. Returns `None` if no source is in range.
pub fn diameter(graph: &Graph, sources: &[usize]) -> Result<Option<Diameter>, GraphError> {
    let mut best: Option<Diameter> = None;
    let mut probed = 0;
    for &s in sources {
        #[cfg(feature = "handle-ctrlc")]
        if received_ctrl_c() {
            #[cfg(feature = "log")]
            log::info!("interrupted after {} sources", probed);
            break;
        }
        if s == 0 || s > graph.order() {
            continue;
        }
        let (far, level) = graph.bfs(s)?.farthest();
        probed += 1;
        match best {
            Some(d) if d.length >= level => {}
            _ => {
                best = Some(Diameter {
                    length: level,
                    from: s,
                    to: far,
                    probed: 0,
                })
            }
        }
    }
    Ok(best.map(|d| Diameter { probed, ..d }))
}

pub fn all_sources(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

/// `k` distinct vertices of `1..=n` drawn with a seeded rng, ascending.
pub fn sampled_sources(n: usize, k: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sources: Vec<usize> = rand::seq::index::sample(&mut rng, n, k.min(n))
        .into_iter()
        .map(|i| i + 1)
        .collect();
    sources.sort_unstable();
    sources
}
