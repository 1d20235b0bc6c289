use serde::Serialize;

/// Output format for schema export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Machine-readable JSON document (default). Stable field names.
    Json,
    /// Markdown tables, one section per domain. Best for docs and review.
    Markdown,
}

/// One exported node kind or property key.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LabeledExport {
    pub name: &'static str,
    pub label: &'static str,
}

/// One exported relationship kind, with its traversal eligibility.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RelationshipExport {
    pub name: &'static str,
    pub label: &'static str,
    /// Whether the kind is on the domain's pathfinding allow-list.
    pub pathfinding: bool,
}

/// The full schema of one domain.
#[derive(Debug, Clone, Serialize)]
pub struct DomainExport {
    pub domain: &'static str,
    pub node_kinds: Vec<LabeledExport>,
    pub relationship_kinds: Vec<RelationshipExport>,
    pub properties: Vec<LabeledExport>,
}

/// The exported schema document: one section per requested domain.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaExport {
    pub domains: Vec<DomainExport>,
}
