use std::fmt::Write;

use super::model::{DomainExport, SchemaExport};

/// Render the export document as Markdown, one section per domain.
///
/// Identifiers are code-formatted so underscored wire names (e.g. the
/// Azure Graph permission kinds) survive Markdown emphasis rules.
pub fn render_markdown(export: &SchemaExport) -> String {
    let mut out = String::from("# Attack Graph Schema\n");
    for domain in &export.domains {
        render_domain(&mut out, domain);
    }
    out
}

fn render_domain(out: &mut String, domain: &DomainExport) {
    let _ = write!(out, "\n## {}\n", domain.domain);

    if !domain.node_kinds.is_empty() {
        let _ = write!(out, "\n### Node kinds\n\n| Identifier | Label |\n| --- | --- |\n");
        for kind in &domain.node_kinds {
            let _ = writeln!(out, "| `{}` | {} |", kind.name, kind.label);
        }
    }

    if !domain.relationship_kinds.is_empty() {
        let _ = write!(
            out,
            "\n### Relationship kinds\n\n| Identifier | Label | Pathfinding |\n| --- | --- | --- |\n"
        );
        for kind in &domain.relationship_kinds {
            let _ = writeln!(
                out,
                "| `{}` | {} | {} |",
                kind.name,
                kind.label,
                if kind.pathfinding { "yes" } else { "no" }
            );
        }
    }

    if !domain.properties.is_empty() {
        let _ = write!(out, "\n### Properties\n\n| Identifier | Label |\n| --- | --- |\n");
        for prop in &domain.properties {
            let _ = writeln!(out, "| `{}` | {} |", prop.name, prop.label);
        }
    }
}
