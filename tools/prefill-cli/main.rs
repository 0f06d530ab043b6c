use clap::Parser;
use itertools::Itertools;
use prefill::prelude::*;
use std::fs;
use std::time::Instant;

/// A data-source resolution engine CLI for action blueprint graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the blueprint graph JSON file
    graph_path: String,
    /// Id of the node to inspect
    node_id: String,

    /// Resolve which data source the given field is currently mapped to
    #[arg(short, long)]
    field: Option<String>,

    /// Emit the aggregated data sources as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    let graph_json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            &cli.graph_path, e
        ))
    });

    let graph = prefill::api::parse_response(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load graph: {}", e)));

    let Some(node) = graph.node(&cli.node_id) else {
        exit_with_error(&format!("Node '{}' not found in graph", cli.node_id));
    };

    let aggregate_start = Instant::now();
    let sources = all_data_sources(&graph, &cli.node_id);
    let aggregate_duration = aggregate_start.elapsed();

    if cli.json {
        let rendered = serde_json::to_string_pretty(&sources)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to render JSON: {}", e)));
        println!("{}", rendered);
    } else {
        println!(
            "Data sources for node '{}' ({}):",
            node.name, cli.node_id
        );
        for (group, items) in &sources {
            println!(
                "  {} [{}]: {}",
                group,
                items.len(),
                items.iter().map(|i| i.label.as_str()).join(", ")
            );
        }
    }

    if let Some(field) = &cli.field {
        match find_selected_item(&node.input_mapping, Some(field.as_str()), &sources) {
            Some(selected) => println!(
                "\nField '{}' is mapped to '{}' from group '{}' ({})",
                field, selected.item.label, selected.group, selected.item.id
            ),
            None => println!("\nField '{}' has no prefill mapping", field),
        }
    }

    let item_count: usize = sources.values().map(|v| v.len()).sum();
    println!("\n--- Summary ---");
    println!("Groups:      {}", sources.len());
    println!("Items:       {}", item_count);
    println!("Aggregation: {:?}", aggregate_duration);
    println!("Total:       {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
