use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use attack_graph_schema::cli::{Cli, Commands, OutputFormat};
use attack_graph_schema::config::SchemaConfig;
use attack_graph_schema::schema::{self, Category, Domain, Entry};
use attack_graph_schema::{export, output, query};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SchemaConfig::load(Path::new("."));
    let pick_format = |explicit: Option<OutputFormat>| {
        explicit.or(config.format).unwrap_or_default()
    };

    match cli.command {
        Commands::Nodes {
            domain,
            filter,
            case_insensitive,
            format,
        } => {
            let entries = list_category(domain, Category::Node);
            let entries = query::filter_entries(entries, filter.as_deref(), case_insensitive)?;
            output::print_entries(&entries, "node kinds", pick_format(format));
        }

        Commands::Edges {
            domain,
            pathfinding,
            filter,
            case_insensitive,
            format,
        } => {
            let entries = if pathfinding {
                schema::pathfinding_entries(domain)
            } else {
                list_category(domain, Category::Relationship)
            };
            let entries = query::filter_entries(entries, filter.as_deref(), case_insensitive)?;
            let noun = if pathfinding {
                "pathfinding edges"
            } else {
                "relationship kinds"
            };
            output::print_entries(&entries, noun, pick_format(format));
        }

        Commands::Properties {
            domain,
            filter,
            case_insensitive,
            format,
        } => {
            let entries = list_category(domain, Category::Property);
            let entries = query::filter_entries(entries, filter.as_deref(), case_insensitive)?;
            output::print_entries(&entries, "properties", pick_format(format));
        }

        Commands::Resolve {
            identifier,
            domain,
            format,
        } => {
            let resolutions = query::resolve(&identifier, domain);
            output::print_resolutions(&identifier, &resolutions, pick_format(format));
        }

        Commands::Export {
            domain,
            format,
            output: output_path,
        } => {
            let domains: Vec<Domain> = match domain {
                Some(d) => vec![d],
                None => Domain::ALL.to_vec(),
            };
            let document = export::build_export(&domains);
            let rendered = export::render(&document, format)?;
            match output_path {
                Some(path) => {
                    std::fs::write(&path, &rendered)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("wrote {}", path.display());
                }
                None => {
                    print!("{rendered}");
                    if !rendered.ends_with('\n') {
                        println!();
                    }
                }
            }
        }
    }

    Ok(())
}

/// One category of a domain's schema, in declaration order.
fn list_category(domain: Domain, category: Category) -> Vec<Entry> {
    schema::entries(domain)
        .into_iter()
        .filter(|e| e.category == category)
        .collect()
}
