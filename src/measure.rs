//! Load time and resident memory of the two storage variants.
use crate::graph::{BaseGraph, Representation};
use crate::io::load;
use core::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

const MIB: f64 = 1024.0 * 1024.0;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    Loaded { order: usize, edges: usize },
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct LoadMeasurement {
    pub representation: Representation,
    pub elapsed: Duration,
    pub rss_before: Option<f64>,
    pub rss_after: Option<f64>,
    pub rss_peak: Option<f64>,
    pub outcome: LoadOutcome,
}

impl LoadMeasurement {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, LoadOutcome::Loaded { .. })
    }

    pub fn rss_delta(&self) -> Option<f64> {
        Some(self.rss_after? - self.rss_before?)
    }
}

/// Loads `path` with `representation`, recording time and memory. The graph
/// is dropped before returning; a failed load is recorded, not raised.
pub fn measure_load<P: AsRef<Path>>(
    path: P,
    representation: Representation,
    directed: bool,
) -> LoadMeasurement {
    let rss_before = current_rss_mb();
    let start = Instant::now();
    let loaded = load(path, representation, directed);
    let elapsed = start.elapsed();
    let rss_after = current_rss_mb();
    let rss_peak = peak_rss_mb().or(rss_after);
    let outcome = match &loaded {
        Ok(graph) => LoadOutcome::Loaded {
            order: graph.order(),
            edges: graph.edge_count(),
        },
        Err(e) => LoadOutcome::Failed(e.to_string()),
    };
    drop(loaded);
    #[cfg(feature = "log")]
    log::info!("{} load took {:?}: {:?}", representation, elapsed, outcome);
    LoadMeasurement {
        representation,
        elapsed,
        rss_before,
        rss_after,
        rss_peak,
        outcome,
    }
}

pub fn compare_representations<P: AsRef<Path>>(path: P, directed: bool) -> MeasurementTable {
    let rows = [Representation::List, Representation::Matrix]
        .iter()
        .map(|&rep| measure_load(path.as_ref(), rep, directed))
        .collect();
    MeasurementTable(rows)
}

#[derive(Clone, Debug)]
pub struct MeasurementTable(pub Vec<LoadMeasurement>);

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("n/a"), |v| format!("{:.2}", v))
}

impl fmt::Display for MeasurementTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Memory / Time comparison ===")?;
        writeln!(
            f,
            "{:<14} | {:>10} | {:>12} | {:>12} | {:>8} | {:>10}",
            "Representation", "Time(s)", "RSS before", "RSS after", "Delta", "Peak"
        )?;
        writeln!(
            f,
            "---------------+------------+--------------+--------------+----------+-----------"
        )?;
        for row in &self.0 {
            if row.succeeded() {
                writeln!(
                    f,
                    "{:<14} | {:>10.2} | {:>12} | {:>12} | {:>8} | {:>10}",
                    row.representation.to_string(),
                    row.elapsed.as_secs_f64(),
                    cell(row.rss_before),
                    cell(row.rss_after),
                    cell(row.rss_delta()),
                    cell(row.rss_peak)
                )?;
            } else {
                writeln!(
                    f,
                    "{:<14} | {:>10} | {:>12} | {:>12} | {:>8} | {:>10}",
                    row.representation.to_string(),
                    "FAILED",
                    "-",
                    "-",
                    "-",
                    "-"
                )?;
            }
        }
        writeln!(f, "================================")
    }
}

/// Resident set size in MiB, from `/proc/self/statm`.
#[cfg(target_os = "linux")]
fn current_rss_mb() -> Option<f64> {
    let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
    let pages: f64 = statm.split_whitespace().nth(1)?.parse().ok()?;
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if page_size <= 0 {
        return None;
    }
    Some(pages * page_size as f64 / MIB)
}

#[cfg(not(target_os = "linux"))]
fn current_rss_mb() -> Option<f64> {
    peak_rss_mb()
}

/// Peak resident set size in MiB, from `getrusage`.
#[cfg(unix)]
fn peak_rss_mb() -> Option<f64> {
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    if unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) } != 0 {
        return None;
    }
    let max_rss = usage.ru_maxrss as f64;
    if cfg!(target_os = "macos") {
        // bytes on macOS, KiB elsewhere
        Some(max_rss / MIB)
    } else {
        Some(max_rss / 1024.0)
    }
}

#[cfg(not(unix))]
fn peak_rss_mb() -> Option<f64> {
    None
}
