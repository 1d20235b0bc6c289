use std::io::IsTerminal;

use crate::cli::OutputFormat;
use crate::query::Resolution;
use crate::schema::Entry;

/// Format and print schema entries to stdout according to the selected
/// output format. `noun` names what is being listed for the compact count
/// line (e.g. "node kinds").
pub fn print_entries(entries: &[Entry], noun: &str, format: OutputFormat) {
    match format {
        OutputFormat::Compact => {
            for e in entries {
                println!("{} {}", e.name, e.label);
            }
            println!("{} {}", entries.len(), noun);
        }

        OutputFormat::Table => {
            let use_color = std::io::stdout().is_terminal();

            // Column widths: auto-sized to data.
            let name_w = entries
                .iter()
                .map(|e| e.name.len())
                .max()
                .unwrap_or(10)
                .max(10);

            if use_color {
                println!("\x1b[1m{:<name_w$}  {}\x1b[0m", "IDENTIFIER", "LABEL");
            } else {
                println!("{:<name_w$}  {}", "IDENTIFIER", "LABEL");
            }
            println!("{}", "-".repeat(name_w + 7));

            for e in entries {
                println!("{:<name_w$}  {}", e.name, e.label);
            }
        }

        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(entries).unwrap_or_default()
            );
        }
    }
}

/// Format and print identifier resolutions to stdout.
///
/// An empty `resolutions` slice is the unresolved case: reported as data,
/// not as a failure, because the identifier may simply be newer than this
/// build's schema.
pub fn print_resolutions(raw: &str, resolutions: &[Resolution], format: OutputFormat) {
    match format {
        OutputFormat::Compact => {
            if resolutions.is_empty() {
                println!("unresolved {raw}");
                return;
            }
            for r in resolutions {
                println!("{} {} {}", r.domain, r.category.name(), r.label);
            }
        }

        OutputFormat::Table => {
            let use_color = std::io::stdout().is_terminal();
            if use_color {
                println!("\x1b[1m{:<8}  {:<12}  {}\x1b[0m", "DOMAIN", "CATEGORY", "LABEL");
            } else {
                println!("{:<8}  {:<12}  {}", "DOMAIN", "CATEGORY", "LABEL");
            }
            println!("{}", "-".repeat(32));
            if resolutions.is_empty() {
                println!("{:<8}  {:<12}  {}", "-", "unresolved", raw);
                return;
            }
            for r in resolutions {
                println!("{:<8}  {:<12}  {}", r.domain, r.category.name(), r.label);
            }
        }

        OutputFormat::Json => {
            let value = serde_json::json!({
                "identifier": raw,
                "resolved": !resolutions.is_empty(),
                "resolutions": resolutions,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_default()
            );
        }
    }
}
