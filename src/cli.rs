use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::export::model::ExportFormat;
use crate::schema::Domain;

/// Inspect the attack graph schema: node kinds, relationship kinds,
/// property keys, and the pathfinding edge allow-lists.
///
/// The schema is compiled into the binary; every command is a pure lookup
/// over the registry and touches no graph data.
#[derive(Parser, Debug)]
#[command(
    name = "graph-schema",
    version,
    about,
    long_about = None,
    propagate_version = true,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for list and resolve results.
#[derive(Clone, Copy, Debug, ValueEnum, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact one-line-per-entry format (default).
    #[default]
    Compact,
    /// Human-readable columnar table with ANSI bold headers when stdout is a terminal.
    Table,
    /// Structured JSON array suitable for programmatic consumption.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the node kinds of a domain.
    Nodes {
        /// Graph domain to list (active-directory/ad, azure/az, common).
        #[arg(value_enum)]
        domain: Domain,

        /// Only show entries whose identifier or label matches this regex.
        #[arg(long)]
        filter: Option<String>,

        /// Case-insensitive filter matching.
        #[arg(short = 'i', long)]
        case_insensitive: bool,

        /// Output format (falls back to graph-schema.toml, then compact).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the relationship kinds of a domain.
    ///
    /// With --pathfinding, lists only the edges eligible for attack-path
    /// traversal, in curated allow-list order.
    Edges {
        /// Graph domain to list.
        #[arg(value_enum)]
        domain: Domain,

        /// Restrict to the pathfinding allow-list.
        #[arg(long)]
        pathfinding: bool,

        /// Only show entries whose identifier or label matches this regex.
        #[arg(long)]
        filter: Option<String>,

        /// Case-insensitive filter matching.
        #[arg(short = 'i', long)]
        case_insensitive: bool,

        /// Output format (falls back to graph-schema.toml, then compact).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the well-known property keys of a domain.
    Properties {
        /// Graph domain to list.
        #[arg(value_enum)]
        domain: Domain,

        /// Only show entries whose identifier or label matches this regex.
        #[arg(long)]
        filter: Option<String>,

        /// Case-insensitive filter matching.
        #[arg(short = 'i', long)]
        case_insensitive: bool,

        /// Output format (falls back to graph-schema.toml, then compact).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Resolve a canonical identifier to its display label.
    ///
    /// Lookups are exact and case-sensitive. An identifier not present in
    /// any searched domain is reported as unresolved with exit code 0 —
    /// unknown identifiers are expected from newer data producers.
    Resolve {
        /// Canonical identifier (e.g. "GenericAll", "AZGlobalAdmin", "haslaps").
        identifier: String,

        /// Restrict the lookup to one domain (default: search all three).
        #[arg(long, value_enum)]
        domain: Option<Domain>,

        /// Output format (falls back to graph-schema.toml, then compact).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Export the schema as a JSON or Markdown document.
    Export {
        /// Export a single domain (default: all three).
        #[arg(long, value_enum)]
        domain: Option<Domain>,

        /// Export format.
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_domain_aliases() {
        let cli = Cli::try_parse_from(["graph-schema", "nodes", "ad"]).unwrap();
        match cli.command {
            Commands::Nodes { domain, .. } => assert_eq!(domain, Domain::ActiveDirectory),
            _ => panic!("expected nodes command"),
        }
        let cli = Cli::try_parse_from(["graph-schema", "edges", "az", "--pathfinding"]).unwrap();
        match cli.command {
            Commands::Edges {
                domain,
                pathfinding,
                ..
            } => {
                assert_eq!(domain, Domain::Azure);
                assert!(pathfinding);
            }
            _ => panic!("expected edges command"),
        }
    }

    #[test]
    fn test_unknown_domain_rejected() {
        assert!(Cli::try_parse_from(["graph-schema", "nodes", "gcp"]).is_err());
    }
}
