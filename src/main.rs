use adjgraph::analysis::{
    all_sources, diameter, probe_max_levels, sampled_sources, DegreeStatistics,
};
use adjgraph::graph::BaseGraph;
use adjgraph::io::{load, write_degree_distribution, write_summary};
use adjgraph::log::{build_logger, build_logger_for_level, level_for_verbosity};
use adjgraph::measure::compare_representations;
use adjgraph::{ComponentSummary, Graph, GraphError, Representation, SearchTree};
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "adjgraph-cli",
    about = "Loads an edge-list graph and runs traversals, component and degree analyses on it."
)]
struct Opt {
    /// Input file: the vertex count followed by `u v` pairs (1-based).
    #[structopt(short, long, parse(from_os_str))]
    input: PathBuf,

    /// Summary output file (`# n`, `# m`, one `<id> <degree>` line per vertex).
    #[structopt(short, long, parse(from_os_str), default_value = "summary.txt")]
    output: PathBuf,

    /// Storage: list or matrix.
    #[structopt(short, long, default_value = "list")]
    representation: Representation,

    /// Run BFS from this vertex.
    #[structopt(short, long)]
    bfs: Option<usize>,

    /// Run DFS from this vertex.
    #[structopt(short, long)]
    dfs: Option<usize>,

    /// List connected components.
    #[structopt(short, long)]
    components: bool,

    /// Treat each `u v` pair as an arc u -> v.
    #[structopt(long)]
    directed: bool,

    /// Compare load time and memory of both representations first, then
    /// continue with the list representation.
    #[structopt(long)]
    measure: bool,

    /// Write the degree distribution to this file and print degree statistics.
    #[structopt(long, parse(from_os_str))]
    degrees: Option<PathBuf>,

    /// Print the largest BFS level reached from each of these vertices.
    #[structopt(long)]
    probe: Vec<usize>,

    /// Estimate the diameter with BFS from every vertex, or from `--sources` of them.
    #[structopt(long)]
    diameter: bool,

    /// Number of randomly chosen BFS sources for `--diameter`.
    #[structopt(long)]
    sources: Option<usize>,

    /// Seed for choosing `--sources`.
    #[structopt(long, default_value = "0")]
    seed: u64,

    /// Print the adjacency of every vertex.
    #[structopt(long)]
    print: bool,

    /// Verbosity, repeat for more.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn print_tree(name: &str, tree: &SearchTree) {
    println!("{} from {}:", name, tree.root());
    for (v, parent, level) in tree.reached() {
        match parent {
            Some(p) => println!("{}: parent={} level={}", v, p, level),
            None => println!("{}: parent=- level={}", v, level),
        }
    }
}

fn run_traversal(
    graph: &Graph,
    name: &str,
    start: usize,
    search: fn(&Graph, usize) -> Result<SearchTree, GraphError>,
) -> Result<(), GraphError> {
    if start == 0 || start > graph.order() {
        eprintln!(
            "{} start vertex {} is outside of [1, {}], skipping",
            name,
            start,
            graph.order()
        );
        return Ok(());
    }
    print_tree(name, &search(graph, start)?);
    Ok(())
}

fn run(opt: &Opt, graph: &Graph) -> Result<(), GraphError> {
    println!(
        "Graph loaded. n={} m={} rep={}",
        graph.order(),
        graph.edge_count(),
        graph.representation()
    );

    match write_summary(graph, &opt.output) {
        Ok(()) => println!("Summary written to '{}'", opt.output.display()),
        Err(e) => eprintln!("Could not write summary to '{}': {}", opt.output.display(), e),
    }

    if opt.print {
        print!("{}", graph);
    }

    if let Some(start) = opt.bfs {
        run_traversal(graph, "BFS", start, Graph::bfs)?;
    }

    if let Some(start) = opt.dfs {
        run_traversal(graph, "DFS", start, Graph::dfs)?;
    }

    if opt.components {
        let components = graph.connected_components()?;
        println!("{} components found:", components.len());
        for (i, c) in components.iter().enumerate() {
            let members: Vec<String> = c.members().iter().map(|v| v.to_string()).collect();
            println!("Component {} (size {}): {}", i + 1, c.size(), members.join(" "));
        }
        if let Some(summary) = ComponentSummary::of(&components) {
            println!(
                "Largest component: {}, smallest component: {}",
                summary.largest, summary.smallest
            );
        }
    }

    if let Some(path) = &opt.degrees {
        let stats = DegreeStatistics::of(graph);
        println!("Vertices (n): {}", stats.order());
        println!("Smallest degree: {}", stats.min());
        println!("Largest degree: {}", stats.max());
        println!("Largest possible degree (n-1): {}", stats.max_possible());
        println!(
            "Largest degree relative to n-1: {:.2}%",
            stats.max_degree_ratio()
        );
        match write_degree_distribution(&stats, path) {
            Ok(()) => println!("Degree distribution written to '{}'", path.display()),
            Err(e) => eprintln!(
                "Could not write degree distribution to '{}': {}",
                path.display(),
                e
            ),
        }
    }

    if !opt.probe.is_empty() {
        println!("Vertex\tLargest level");
        for (v, level) in probe_max_levels(graph, &opt.probe)? {
            println!("{}\t{}", v, level);
        }
    }

    if opt.diameter {
        let sources = match opt.sources {
            Some(k) => sampled_sources(graph.order(), k, opt.seed),
            None => all_sources(graph.order()),
        };
        let start = std::time::Instant::now();
        if let Some(d) = diameter(graph, &sources)? {
            println!("Diameter: {}", d.length);
            println!("Pair at that distance: {} -> {}", d.from, d.to);
            println!("Sources probed: {} of {}", d.probed, graph.order());
        }
        println!("Time: {:.3} seconds", start.elapsed().as_secs_f64());
    }

    Ok(())
}

/// A failed run, with the process exit code it maps to. Code 1 is left to
/// structopt's usage errors.
#[derive(Debug)]
enum Failure {
    Load(GraphError),
    Analysis(GraphError),
}

impl Failure {
    fn exit_code(&self) -> i32 {
        match self {
            Failure::Load(_) => 2,
            Failure::Analysis(_) => 3,
        }
    }
}

fn main() {
    let opt = Opt::from_args();
    match level_for_verbosity(opt.verbose) {
        Some(level) => build_logger_for_level(level),
        None => build_logger(),
    }

    #[cfg(feature = "handle-ctrlc")]
    if let Err(e) = adjgraph::signals::initialize() {
        eprintln!("Could not install Ctrl-C handler: {}", e);
    }

    let representation = if opt.measure {
        print!("{}", compare_representations(&opt.input, opt.directed));
        Representation::List
    } else {
        opt.representation
    };

    let graph = match load(&opt.input, representation, opt.directed) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Could not load graph from '{}': {}", opt.input.display(), e);
            process::exit(Failure::Load(e).exit_code());
        }
    };

    if let Err(e) = run(&opt, &graph) {
        eprintln!("{}", e);
        process::exit(Failure::Analysis(e).exit_code());
    }
}
