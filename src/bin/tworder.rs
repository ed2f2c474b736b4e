//! Command-line entry point: compute elimination orderings, benchmark
//! heuristics across a list of graphs, or (not yet) convert one to a tree
//! decomposition. See §6 of `SPEC_FULL.md` for the file formats and CSV
//! schema.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tworder::error::Result;
use tworder::{graph, heuristics, io, treedecomp, Heuristic};

/// Elimination-ordering heuristics and treewidth upper bounds.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Emit the elimination ordering for one adjacency-list file.
    #[arg(short = 'o', long = "order", value_name = "GRAPH_FILE")]
    order: Option<PathBuf>,

    /// Read a graph and an elimination ordering and convert to a tree
    /// decomposition (not implemented).
    #[arg(short = 't', long = "tree-decomp", value_name = "GRAPH_FILE", requires = "ordering_file")]
    tree_decomp: Option<PathBuf>,

    /// The ordering file paired with `--tree-decomp`.
    #[arg(long = "ordering-file", value_name = "ORDERING_FILE")]
    ordering_file: Option<PathBuf>,

    /// Benchmark every heuristic against every graph file listed (one path
    /// per line) in the given file, appending one CSV row per graph.
    #[arg(short = 'l', long = "list", value_name = "LIST_FILE")]
    list: Option<PathBuf>,

    /// Use the minimum-degree heuristic for `-o`.
    #[arg(short = 'D')]
    degree_flag: bool,

    /// Use the minimum-fill-in heuristic for `-o`.
    #[arg(short = 'F')]
    fillin_flag: bool,

    /// Use the MCS heuristic for `-o`.
    #[arg(short = 'C')]
    mcs_flag: bool,

    /// Which heuristic to run for `-o`, spelled out. Ignored by `-l`, which
    /// always runs all three.
    #[arg(long = "heuristic", value_enum)]
    heuristic: Option<Heuristic>,

    /// Raise the tracing verbosity (repeatable: -v, -vv, -vvv).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn resolved_heuristic(&self) -> Heuristic {
        if let Some(h) = self.heuristic {
            h
        } else if self.degree_flag {
            Heuristic::Degree
        } else if self.fillin_flag {
            Heuristic::FillIn
        } else if self.mcs_flag {
            Heuristic::Mcs
        } else {
            Heuristic::Degree
        }
    }
}

fn main() {
    let args = Args::parse();
    install_tracing(args.verbose);

    let result = run(&args);
    if let Err(err) = result {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn install_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: &Args) -> Result<()> {
    if let Some(path) = &args.order {
        return run_order(path, args.resolved_heuristic());
    }
    if let Some(path) = &args.tree_decomp {
        let ordering_path = args
            .ordering_file
            .as_ref()
            .expect("clap enforces --ordering-file alongside --tree-decomp");
        return run_tree_decomp(path, ordering_path);
    }
    if let Some(path) = &args.list {
        return run_list(path);
    }

    eprintln!("one of -o, -t, or -l is required; see --help");
    std::process::exit(1);
}

fn run_order(path: &Path, heuristic: Heuristic) -> Result<()> {
    let graph = io::read_graph_file(path)?;
    let (ordering, width) = heuristic.run(graph);
    print!("{}", io::print_ordering(&ordering));
    tracing::info!(%heuristic, width, "computed elimination ordering");
    Ok(())
}

fn run_tree_decomp(graph_path: &Path, ordering_path: &Path) -> Result<()> {
    let graph = io::read_graph_file(graph_path)?;
    let ordering = io::read_ordering_file(ordering_path, graph.nodes_len())?;
    treedecomp::eo_to_tree_decomposition(&graph, &ordering)?;
    Ok(())
}

fn run_list(list_path: &Path) -> Result<()> {
    let list_text = std::fs::read_to_string(list_path)
        .map_err(|e| error_stack::report!(tworder::ErrorKind::Io(e.to_string())))?;

    println!("Filename,Width Min-Degree,Time Min-Degree,Width Min-Fill-in,Time Min-Fill-in,Width MCS,Time MCS");
    for line in list_text.lines() {
        let path = line.trim();
        if path.is_empty() {
            continue;
        }
        match benchmark_one(Path::new(path)) {
            Ok(row) => println!("{row}"),
            Err(err) => {
                tracing::warn!(file = path, error = ?err, "skipping file that failed to benchmark");
            }
        }
    }
    Ok(())
}

fn benchmark_one(path: &Path) -> Result<String> {
    let graph: graph::Graph = io::read_graph_file(path)?;

    let (degree_width, degree_secs) = time_heuristic(graph.clone(), heuristics::order_degree);
    let (fillin_width, fillin_secs) = time_heuristic(graph.clone(), heuristics::order_fillin);
    let (mcs_width, mcs_secs) = time_heuristic(graph, heuristics::order_mcs);

    Ok(format!(
        "{},{degree_width},{degree_secs:.6},{fillin_width},{fillin_secs:.6},{mcs_width},{mcs_secs:.6}",
        path.display()
    ))
}

fn time_heuristic(graph: graph::Graph, f: impl FnOnce(graph::Graph) -> (tworder::Ordering, usize)) -> (usize, f64) {
    let start = Instant::now();
    let (_, width) = f(graph);
    (width, start.elapsed().as_secs_f64())
}
