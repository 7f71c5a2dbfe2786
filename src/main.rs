use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};
use veilgraph::{
    error::LoadError,
    fs::GraphDescription,
    graph::{Direction, DirectedGraph, EdgeId, Graph, NodeId, Traversable, random_graph},
    statistics::SearchStats,
    traversal::{BreadthFirstSearch, SearchOptions, find_path},
};

/// Breadth-first exploration of graphs with hidden nodes and edges
#[derive(Parser, Debug)]
#[command(name = "veilgraph")]
#[command(about = "Explore graphs whose nodes and edges can be hidden", long_about = None)]
struct Args {
    /// Path to a JSON graph description
    #[arg(short, long, conflicts_with = "random_nodes")]
    graph: Option<PathBuf>,

    /// Generate a random graph with this many nodes instead of loading one
    #[arg(long, requires = "random_edges")]
    random_nodes: Option<usize>,

    /// Number of edges of the random graph
    #[arg(long)]
    random_edges: Option<usize>,

    /// Seed of the random graph
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Nodes to start a search from, one search each (comma-separated list,
    /// defaults to the lowest visible node)
    #[arg(short, long, value_delimiter = ',')]
    start: Vec<usize>,

    /// Print the fewest-hops path from each start node to this node
    #[arg(short, long)]
    target: Option<usize>,

    /// Report edges to already visited nodes too
    #[arg(long)]
    all_edges: bool,

    /// Follow edges against their direction (directed graphs only)
    #[arg(long)]
    reverse: bool,

    /// Print edges as node pairs
    #[arg(long)]
    deep: bool,

    /// Edge ids to hide before searching (comma-separated list, e.g., "0,3,7")
    #[arg(long, value_delimiter = ',')]
    hide_edge: Vec<usize>,

    /// Write the graph, hidden edges included, to this JSON file before searching
    #[arg(long)]
    save: Option<PathBuf>,
}

enum Loaded {
    Undirected(Graph),
    Directed(DirectedGraph),
}

fn install_tracing_subscriber() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

fn load(args: &Args) -> Result<Loaded, LoadError> {
    if let Some(path) = &args.graph {
        let description = GraphDescription::load_from_path(path)?;
        return Ok(if description.directed {
            Loaded::Directed(description.build_directed()?)
        } else {
            Loaded::Undirected(description.build()?)
        });
    }
    let nodes = args.random_nodes.unwrap_or(10);
    let edges = args.random_edges.unwrap_or(nodes * 2);
    Ok(Loaded::Undirected(random_graph(nodes, edges, args.seed)?))
}

fn explore<G: Traversable>(graph: &G, start: Option<NodeId>, args: &Args) -> SearchStats {
    let direction = if args.reverse {
        Direction::Reverse
    } else {
        Direction::Forward
    };
    let options = SearchOptions {
        start,
        iterate_all_edges: args.all_edges,
        direction,
    };

    let mut search = BreadthFirstSearch::with_options(graph, options);
    if let Some(root) = start {
        println!("search from {root}");
    }
    for (node, edge) in search.by_ref() {
        if args.deep {
            println!("{node} via {}", edge.nodes_to_string());
        } else {
            println!("{node} via {edge}");
        }
    }

    if let Some(target) = args.target {
        let start = options.start.or_else(|| graph.first_visible_node());
        let route = start.and_then(|start| find_path(graph, start, NodeId::new(target), direction));
        match route {
            Some(edges) => {
                let rendered: Vec<_> = edges.iter().map(|edge| edge.nodes_to_string()).collect();
                println!("path to {target}: {}", rendered.join(" "));
            }
            None => println!("no path to {target}"),
        }
    }

    info!(reached = search.visited_count(), "search finished");
    *search.stats()
}

fn explore_all<G: Traversable>(graph: &G, args: &Args) -> SearchStats {
    if args.start.is_empty() {
        return explore(graph, None, args);
    }
    let mut total = SearchStats::new();
    for &start in &args.start {
        total.merge(&explore(graph, Some(NodeId::new(start)), args));
    }
    total
}

fn save(graph: &Graph, directed: bool, args: &Args) -> Result<(), LoadError> {
    if let Some(path) = &args.save {
        GraphDescription::from_graph(graph, directed).save_to_path(path)?;
        info!(path = %path.display(), "saved graph description");
    }
    Ok(())
}

fn print_graph(graph: &Graph, deep: bool) {
    if deep {
        println!("{}", graph.deep_to_string());
    } else {
        println!("{graph}");
    }
}

fn hide_edges(graph: &mut Graph, ids: &[usize]) {
    for &id in ids {
        if !graph.set_edge_hidden(EdgeId { internal: id }, true) {
            info!(id, "edge not hidden, unknown or already hidden");
        }
    }
}

fn main() -> ExitCode {
    install_tracing_subscriber();
    let args = Args::parse();

    let loaded = match load(&args) {
        Ok(loaded) => loaded,
        Err(err) => {
            error!(%err, "could not set up the graph");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match loaded {
        Loaded::Undirected(mut graph) => {
            hide_edges(&mut graph, &args.hide_edge);
            info!(
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                hidden_edges = graph.edge_count_all() - graph.edge_count(),
                "undirected graph ready"
            );
            print_graph(&graph, args.deep);
            save(&graph, false, &args).map(|()| explore_all(&graph, &args))
        }
        Loaded::Directed(mut graph) => {
            hide_edges(graph.as_graph_mut(), &args.hide_edge);
            info!(
                nodes = graph.as_graph().node_count(),
                edges = graph.as_graph().edge_count(),
                hidden_edges = graph.as_graph().edge_count_all() - graph.as_graph().edge_count(),
                "directed graph ready"
            );
            print_graph(graph.as_graph(), args.deep);
            save(graph.as_graph(), true, &args).map(|()| explore_all(&graph, &args))
        }
    };

    let stats = match outcome {
        Ok(stats) => stats,
        Err(err) => {
            error!(%err, "could not save the graph");
            return ExitCode::FAILURE;
        }
    };
    stats.report("breadth-first search");
    ExitCode::SUCCESS
}
