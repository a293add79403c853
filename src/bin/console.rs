use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use ordered_float::OrderedFloat;

use pathwave::graph::io::load_file;
use pathwave::graph::{Graph, SparseGraph};
use pathwave::{BellmanFord, Dijkstra, DistanceMap, SingleSourceShortestPaths, Wave};

type ConsoleGraph = SparseGraph<OrderedFloat<f64>>;

fn main() {
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: console <graph-file>");
            process::exit(1);
        }
    };

    let graph = match load_file(&path) {
        Ok(graph) => graph,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    println!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter command: ");
        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        dispatch(&graph, line.trim());
    }
    println!();
}

fn dispatch(graph: &ConsoleGraph, line: &str) {
    let mut words = line.split_whitespace();
    let command = match words.next() {
        Some(command) => command,
        None => return,
    };
    let args: Vec<&str> = words.collect();

    match command {
        "help" => help(),
        "Dijkstra" => run_single_source(&Dijkstra::new(), graph, &args),
        "Bellman-Ford" => run_single_source(&BellmanFord::new(), graph, &args),
        "Wave" => run_wave(graph, &args),
        _ => println!("Invalid command!"),
    }
}

fn help() {
    println!("List of all commands:");
    println!("1: help");
    println!("   Displays information about all commands on the screen");
    println!("2: Dijkstra <key>");
    println!("   Finds the shortest distances from a given node to all nodes using Dijkstra's algorithm");
    println!("3: Bellman-Ford <key>");
    println!("   Finds the shortest distances from a given node to all nodes using the Bellman-Ford algorithm");
    println!("4: Wave <origin> <destination>");
    println!("   Finds the shortest distance between nodes using the wave algorithm");
}

fn run_single_source<A>(algorithm: &A, graph: &ConsoleGraph, args: &[&str])
where
    A: SingleSourceShortestPaths<OrderedFloat<f64>, ConsoleGraph>,
{
    let origin = match parse_key(args, 0) {
        Some(key) => key,
        None => return,
    };

    match algorithm.shortest_distances(graph, origin) {
        Ok(distances) => print_distances(&distances),
        Err(error) => println!("Error: {}", error),
    }
}

fn run_wave(graph: &ConsoleGraph, args: &[&str]) {
    let (origin, destination) = match (parse_key(args, 0), parse_key(args, 1)) {
        (Some(origin), Some(destination)) => (origin, destination),
        _ => return,
    };

    match Wave::new().hop_count(graph, origin, destination) {
        Ok(hops) => println!("{}", hops),
        Err(error) => println!("Error: {}", error),
    }
}

fn parse_key(args: &[&str], index: usize) -> Option<usize> {
    match args.get(index).map(|arg| arg.parse::<usize>()) {
        Some(Ok(key)) => Some(key),
        _ => {
            println!("Expected a non-negative node key");
            None
        }
    }
}

fn print_distances(distances: &DistanceMap<OrderedFloat<f64>>) {
    let mut keys: Vec<usize> = distances.keys().copied().collect();
    keys.sort_unstable();

    for key in keys {
        if let Some(distance) = distances.get(&key) {
            println!("{}: {}", key, distance);
        }
    }
}
