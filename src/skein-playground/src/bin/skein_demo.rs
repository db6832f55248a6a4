//! Skein Demo - end-to-end example
//!
//! This binary walks through both halves of Skein:
//! 1. Build the sample social graph and list its vertices and edges
//! 2. Run breadth-first and depth-first traversals from a start vertex
//! 3. Load a thesaurus and search it for a concept by preferred label
//!
//! # Usage
//!
//! ```bash
//! cargo run --package skein-playground --bin skein-demo -- --start 2 --goal Biochemistry
//! RUST_LOG=skein_engine=debug cargo run --package skein-playground --bin skein-demo
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use common_config::{LoggingConfig, SkeinConfig};
use common_error::SkeinResult;
use skein_core::{ConceptId, PropertyGraph, Vertex, VertexId};
use skein_engine::{pref_label_is, GoalSearch, SearchOutcome, Traversal, TraversalOutcome};
use skein_storage::{ConceptAccessor, ConceptView, MemoryAccessor};

use skein_playground::{
    create_social_graph_with, create_thesaurus, format_path, format_properties, print_divider,
    print_header,
};

/// Skein Demo CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "skein-demo")]
#[command(about = "Traverse a property graph and search a concept hypergraph")]
struct Args {
    /// Vertex to start BFS and DFS from
    #[arg(short, long, default_value_t = 1)]
    start: VertexId,

    /// Concept to start the goal search from
    #[arg(long, default_value_t = 1)]
    concept: ConceptId,

    /// Preferred label of the concept to search for
    #[arg(short, long, default_value = "Physical chemistry")]
    goal: String,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON thesaurus document to search instead of the built-in sample
    #[arg(long)]
    thesaurus: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> SkeinResult<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SkeinConfig::from_json_file(path)?,
        None => SkeinConfig::default(),
    };
    init_logging(&config.logging, args.verbose);
    info!("skein-demo {} starting", env!("CARGO_PKG_VERSION"));

    print_header("Step 1: Property Graph");
    let graph = create_social_graph_with(config.graph.edge_policy)?;
    list_graph(&graph, args.verbose);

    let traversal = Traversal::with_config(&graph, &config.traversal);

    print_header("Step 2: Breadth-First Search");
    report(traversal.bfs(args.start, &mut |v: &Vertex| print_visit(v)));

    print_header("Step 3: Depth-First Search");
    report(traversal.dfs(args.start, &mut |v: &Vertex| print_visit(v)));

    print_header("Step 4: Goal Search");
    let thesaurus = match &args.thesaurus {
        Some(path) => MemoryAccessor::from_json_file(path, &config.storage)?,
        None => create_thesaurus(&config.storage)?,
    };
    println!(
        "Thesaurus with {} concepts and {} hyperedges",
        thesaurus.concept_count(),
        thesaurus.hyperedge_count()
    );
    println!("Searching from concept {} for \"{}\"", args.concept, args.goal);
    print_divider();

    let search = GoalSearch::new(&thesaurus)
        .search_with_stats(args.concept, pref_label_is(&args.goal))?;
    match &search.outcome {
        SearchOutcome::Found(path) => {
            println!("Found after {} hops:", path.len() - 1);
            println!("  {}", format_path(path, |id| label_of(&thesaurus, id)));
        }
        SearchOutcome::NotFound => println!("No concept labelled \"{}\" is reachable.", args.goal),
    }
    if args.verbose {
        println!("  {:?}", search.stats);
        println!("  {:?}", thesaurus.lease_stats());
    }

    print_header("Demo Complete!");
    Ok(())
}

/// Install the fmt subscriber. `RUST_LOG` wins over the configured filter.
fn init_logging(config: &LoggingConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.filter.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();
}

fn list_graph(graph: &PropertyGraph, verbose: bool) {
    println!("Vertices:");
    for vertex in graph.vertices() {
        let name = vertex
            .properties
            .get("name")
            .map(ToString::to_string)
            .unwrap_or_default();
        println!("  ID: {}, Name: {}", vertex.id(), name);
        if verbose {
            println!("      {}", format_properties(&vertex.properties));
        }
    }

    print_divider();
    println!("Edges:");
    for edge in graph.edges() {
        let relationship = edge
            .properties
            .get("relationship")
            .map(ToString::to_string)
            .unwrap_or_default();
        println!(
            "  ID: {}, Source: {}, Target: {}, Relationship: {}",
            edge.id(),
            edge.source(),
            edge.target(),
            relationship
        );
    }
}

fn print_visit(vertex: &Vertex) {
    println!("  Visited vertex: {}", vertex.id());
}

fn report(outcome: TraversalOutcome) {
    match outcome {
        TraversalOutcome::Completed { visited } => println!("({visited} vertices reached)"),
        TraversalOutcome::StartNotFound => println!("The specified start vertex does not exist."),
    }
}

fn label_of(accessor: &MemoryAccessor, id: ConceptId) -> Option<String> {
    let concept = accessor.fetch_concept(id).ok()??;
    concept.pref_label().map(str::to_string)
}
