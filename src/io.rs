//! Text formats.
//!
//! The edge-list input starts with the vertex count `n`, followed by
//! whitespace separated pairs `u v` of 1-based vertex ids until end of input.
//! Line breaks carry no meaning. A pair with a token that is not a vertex id
//! in `[1, n]` (including bytes that are not UTF-8) is skipped, and a
//! trailing unpaired token is ignored.
//!
//! The summary output is `# n = <n>`, `# m = <m>` and one `<id> <degree>`
//! line per vertex.
use crate::analysis::DegreeStatistics;
use crate::error::{GraphError, GraphErrorKind};
use crate::graph::{BaseGraph, Graph, Representation};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn parse_header(token: &str) -> Result<usize, GraphError> {
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => {
            let msg = format!("invalid vertex count '{}'", token);
            Err(GraphError::new(GraphErrorKind::InvalidArgument, &msg))
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeListReader {
    representation: Representation,
    directed: bool,
}

impl EdgeListReader {
    pub fn new(representation: Representation, directed: bool) -> Self {
        Self {
            representation,
            directed,
        }
    }

    pub fn read<R: BufRead>(&self, reader: R) -> Result<Graph, GraphError> {
        let mut graph: Option<Graph> = None;
        let mut pending: Option<Option<usize>> = None;
        let mut skipped = 0usize;

        for line in reader.split(b'\n') {
            let line = line?;
            for token in line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty()) {
                // a token that is not UTF-8 is treated like any other bad token
                let token = std::str::from_utf8(token).unwrap_or("");
                if graph.is_none() {
                    let n = parse_header(token)?;
                    graph = Some(Graph::new(n, self.representation, self.directed)?);
                    continue;
                }
                let g = match graph.as_mut() {
                    Some(g) => g,
                    None => continue,
                };
                let n = g.order();
                let value = token.parse::<usize>().ok().filter(|v| (1..=n).contains(v));
                match pending.take() {
                    None => pending = Some(value),
                    Some(first) => match (first, value) {
                        (Some(u), Some(v)) => {
                            g.insert_edge(u, v)?;
                        }
                        _ => skipped += 1,
                    },
                }
            }
        }

        let graph = graph.ok_or_else(|| {
            GraphError::new(GraphErrorKind::InvalidArgument, "missing vertex count")
        })?;
        #[cfg(feature = "log")]
        log::info!(
            "loaded graph with {} vertices and {} edges, skipped {} pairs",
            graph.order(),
            graph.edge_count(),
            skipped
        );
        #[cfg(not(feature = "log"))]
        let _ = skipped;
        Ok(graph)
    }

    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Graph, GraphError> {
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }
}

/// Loads an edge-list file into a graph with the given storage.
pub fn load<P: AsRef<Path>>(
    path: P,
    representation: Representation,
    directed: bool,
) -> Result<Graph, GraphError> {
    EdgeListReader::new(representation, directed).read_file(path)
}

pub struct SummaryWriter<'a, W: Write> {
    graph: &'a Graph,
    writer: W,
}

impl<'a, W: Write> SummaryWriter<'a, W> {
    pub fn new(graph: &'a Graph, writer: W) -> Self {
        Self { graph, writer }
    }

    pub fn output(mut self) -> Result<(), GraphError> {
        writeln!(self.writer, "# n = {}", self.graph.order())?;
        writeln!(self.writer, "# m = {}", self.graph.edge_count())?;
        for v in self.graph.vertices() {
            writeln!(self.writer, "{} {}", v + 1, BaseGraph::degree(self.graph, v))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the summary of `graph` to `path`, replacing any existing file.
pub fn write_summary<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<(), GraphError> {
    let file = File::create(path)?;
    SummaryWriter::new(graph, BufWriter::new(file)).output()
}

/// `<degree> <count>` lines by increasing degree, zero counts left out.
pub struct DegreeDistributionWriter<'a, W: Write> {
    statistics: &'a DegreeStatistics,
    writer: W,
}

impl<'a, W: Write> DegreeDistributionWriter<'a, W> {
    pub fn new(statistics: &'a DegreeStatistics, writer: W) -> Self {
        Self { statistics, writer }
    }

    pub fn output(mut self) -> Result<(), GraphError> {
        for (degree, count) in self.statistics.distribution() {
            writeln!(self.writer, "{} {}", degree, count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub fn write_degree_distribution<P: AsRef<Path>>(
    statistics: &DegreeStatistics,
    path: P,
) -> Result<(), GraphError> {
    let file = File::create(path)?;
    DegreeDistributionWriter::new(statistics, BufWriter::new(file)).output()
}
