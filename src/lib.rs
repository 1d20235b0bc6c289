//! Typed schema registry for directory-service attack graphs.
//!
//! The registry is the single source of truth for every node kind,
//! relationship kind, and well-known property key that can appear in an
//! identity attack graph, across three closed domains: on-premises Active
//! Directory, the Azure cloud directory, and a small cross-domain common
//! vocabulary.
//!
//! All schema data is compile-time constant and immutable; every lookup is
//! a pure function safe for concurrent readers. The one failure mode —
//! an identifier this build does not know — is expressed as `None`, never
//! as an error: data producers may ship kinds newer than this registry,
//! and consumers degrade to displaying the raw identifier.
//!
//! ```
//! use attack_graph_schema::schema::{self, Domain};
//!
//! assert_eq!(schema::label(Domain::ActiveDirectory, "GenericAll"), Some("GenericAll"));
//! assert_eq!(schema::label(Domain::ActiveDirectory, "haslaps"), Some("LAPS Enabled"));
//! assert_eq!(schema::label(Domain::ActiveDirectory, "NotARealKind"), None);
//! assert!(schema::pathfinding_edge_names(Domain::ActiveDirectory).contains(&"DCSync"));
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod output;
pub mod query;
pub mod schema;

pub use schema::{Category, Domain, Entry};
