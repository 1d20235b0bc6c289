pub mod json;
pub mod markdown;
pub mod model;

use crate::schema::{self, Category, Domain};

use model::{DomainExport, ExportFormat, LabeledExport, RelationshipExport, SchemaExport};

/// Build the export document for the given domains, in the given order.
pub fn build_export(domains: &[Domain]) -> SchemaExport {
    SchemaExport {
        domains: domains.iter().map(|&d| export_domain(d)).collect(),
    }
}

/// Render the export document in the requested format.
pub fn render(export: &SchemaExport, format: ExportFormat) -> anyhow::Result<String> {
    match format {
        ExportFormat::Json => json::render_json(export),
        ExportFormat::Markdown => Ok(markdown::render_markdown(export)),
    }
}

fn export_domain(domain: Domain) -> DomainExport {
    let pathfinding = schema::pathfinding_edge_names(domain);

    let mut node_kinds = Vec::new();
    let mut relationship_kinds = Vec::new();
    let mut properties = Vec::new();
    for entry in schema::entries(domain) {
        match entry.category {
            Category::Node => node_kinds.push(LabeledExport {
                name: entry.name,
                label: entry.label,
            }),
            Category::Relationship => relationship_kinds.push(RelationshipExport {
                name: entry.name,
                label: entry.label,
                pathfinding: pathfinding.contains(&entry.name),
            }),
            Category::Property => properties.push(LabeledExport {
                name: entry.name,
                label: entry.label,
            }),
        }
    }

    DomainExport {
        domain: domain.name(),
        node_kinds,
        relationship_kinds,
        properties,
    }
}
