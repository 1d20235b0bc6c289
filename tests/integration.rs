//! Integration test suite — drives the compiled `graph-schema` binary via
//! subprocess. The `CARGO_BIN_EXE_graph-schema` environment variable is set
//! by Cargo during `cargo test` to point to the compiled binary for the
//! current profile.

use std::path::PathBuf;
use std::process::Command;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_graph-schema"))
}

/// Run a graph-schema command and assert it exits successfully.
/// Returns stdout as a String.
fn run_success(args: &[&str]) -> String {
    let out = Command::new(binary())
        .args(args)
        .output()
        .expect("failed to invoke graph-schema binary");
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let stderr = String::from_utf8_lossy(&out.stderr).to_string();
    assert!(
        out.status.success(),
        "command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
        args,
        out.status,
        stdout,
        stderr
    );
    stdout
}

/// Run a graph-schema command and assert it exits with a non-zero status.
/// Returns (stdout, stderr) as Strings.
fn run_failure(args: &[&str]) -> (String, String) {
    let out = Command::new(binary())
        .args(args)
        .output()
        .expect("failed to invoke graph-schema binary");
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let stderr = String::from_utf8_lossy(&out.stderr).to_string();
    assert!(
        !out.status.success(),
        "command {:?} unexpectedly succeeded\nstdout: {}",
        args,
        stdout
    );
    (stdout, stderr)
}

// ---------------------------------------------------------------------------
// Listing commands
// ---------------------------------------------------------------------------

#[test]
fn test_nodes_ad_compact() {
    let stdout = run_success(&["nodes", "ad"]);
    assert!(stdout.contains("User User"));
    assert!(stdout.contains("Base Entity"));
    assert!(stdout.contains("ADLocalGroup LocalGroup"));
    assert!(stdout.trim_end().ends_with("10 node kinds"));
}

#[test]
fn test_nodes_domain_alias_matches_full_name() {
    let short = run_success(&["nodes", "az"]);
    let full = run_success(&["nodes", "azure"]);
    assert_eq!(short, full);
    assert!(short.contains("AZTenant Tenant"));
}

#[test]
fn test_edges_ad_lists_all_relationships() {
    let stdout = run_success(&["edges", "ad"]);
    assert!(stdout.contains("WriteDacl WriteDACL"));
    assert!(stdout.contains("GetChanges GetChanges"));
    assert!(stdout.trim_end().ends_with("37 relationship kinds"));
}

#[test]
fn test_edges_pathfinding_is_curated_subset() {
    let stdout = run_success(&["edges", "ad", "--pathfinding"]);
    assert!(stdout.contains("DCSync DCSync"));
    assert!(stdout.contains("MemberOf MemberOf"));
    // Structurally valid but excluded from traversal.
    assert!(!stdout.contains("GetChangesAll"));
    assert!(!stdout.contains("LocalToComputer"));
    assert!(stdout.trim_end().ends_with("31 pathfinding edges"));
}

#[test]
fn test_edges_pathfinding_azure_disjoint_from_ad() {
    let ad = run_success(&["edges", "ad", "--pathfinding"]);
    let azure = run_success(&["edges", "azure", "--pathfinding"]);
    assert!(azure.trim_end().ends_with("38 pathfinding edges"));
    for line in azure.lines() {
        let Some(name) = line.split_whitespace().next() else {
            continue;
        };
        if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            continue; // count line
        }
        assert!(
            !ad.lines().any(|l| l.split_whitespace().next() == Some(name)),
            "edge '{name}' appears in both domains"
        );
    }
}

#[test]
fn test_edges_common_is_empty() {
    let stdout = run_success(&["edges", "common"]);
    assert_eq!(stdout.trim_end(), "0 relationship kinds");
}

#[test]
fn test_properties_compact() {
    let stdout = run_success(&["properties", "ad"]);
    assert!(stdout.contains("haslaps LAPS Enabled"));
    assert!(stdout.trim_end().ends_with("27 properties"));

    let stdout = run_success(&["properties", "azure"]);
    // Frozen misspelled wire identifier.
    assert!(stdout.contains("trustype Trust Type"));
}

#[test]
fn test_filter_regex() {
    let stdout = run_success(&["edges", "ad", "--filter", "^Write"]);
    assert!(stdout.contains("WriteOwner"));
    assert!(stdout.contains("WriteDacl"));
    assert!(stdout.contains("WriteSPN"));
    assert!(stdout.contains("WriteAccountRestrictions"));
    assert!(!stdout.contains("GenericWrite"));
}

#[test]
fn test_filter_case_insensitive_flag() {
    let strict = run_success(&["edges", "ad", "--filter", "dcsync"]);
    assert!(strict.starts_with("0 "));
    let loose = run_success(&["edges", "ad", "--filter", "dcsync", "-i"]);
    assert!(loose.contains("DCSync DCSync"));
}

#[test]
fn test_invalid_filter_pattern_fails() {
    let (_, stderr) = run_failure(&["nodes", "ad", "--filter", "("]);
    assert!(stderr.contains("invalid filter pattern"));
}

#[test]
fn test_json_format_parses() {
    let stdout = run_success(&["nodes", "common", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "MigrationData");
    assert_eq!(entries[0]["category"], "node");
}

#[test]
fn test_table_format_has_header() {
    let stdout = run_success(&["properties", "common", "--format", "table"]);
    assert!(stdout.contains("IDENTIFIER"));
    assert!(stdout.contains("LABEL"));
    assert!(stdout.contains("objectid"));
}

// ---------------------------------------------------------------------------
// Resolve
// ---------------------------------------------------------------------------

#[test]
fn test_resolve_known_kind() {
    let stdout = run_success(&["resolve", "GenericAll"]);
    assert!(stdout.contains("AD relationship GenericAll"));
}

#[test]
fn test_resolve_property_label() {
    let stdout = run_success(&["resolve", "haslaps", "--domain", "ad"]);
    assert!(stdout.contains("AD property LAPS Enabled"));
}

#[test]
fn test_resolve_unknown_is_unresolved_not_error() {
    // Unknown identifiers exit 0: newer collectors may emit kinds this
    // build does not know.
    let stdout = run_success(&["resolve", "NotARealKind"]);
    assert!(stdout.contains("unresolved NotARealKind"));
}

#[test]
fn test_resolve_is_domain_scoped() {
    let stdout = run_success(&["resolve", "GenericAll", "--domain", "azure"]);
    assert!(stdout.contains("unresolved GenericAll"));
}

#[test]
fn test_resolve_is_case_sensitive() {
    let stdout = run_success(&["resolve", "genericall"]);
    assert!(stdout.contains("unresolved genericall"));
}

#[test]
fn test_resolve_json() {
    let stdout = run_success(&["resolve", "AZGlobalAdmin", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    assert_eq!(value["identifier"], "AZGlobalAdmin");
    assert_eq!(value["resolved"], true);
    assert_eq!(value["resolutions"][0]["domain"], "Azure");
    assert_eq!(value["resolutions"][0]["label"], "GlobalAdmin");

    let stdout = run_success(&["resolve", "NotARealKind", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    assert_eq!(value["resolved"], false);
    assert!(value["resolutions"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn test_export_json_all_domains() {
    let stdout = run_success(&["export"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON export");
    let domains = value["domains"].as_array().unwrap();
    assert_eq!(domains.len(), 3);
    assert_eq!(domains[0]["domain"], "AD");
    assert_eq!(domains[1]["domain"], "Azure");
    assert_eq!(domains[2]["domain"], "Common");

    let ad_rels = domains[0]["relationship_kinds"].as_array().unwrap();
    assert_eq!(ad_rels.len(), 37);
    let eligible = ad_rels
        .iter()
        .filter(|r| r["pathfinding"] == true)
        .count();
    assert_eq!(eligible, 31);
}

#[test]
fn test_export_markdown_single_domain() {
    let stdout = run_success(&["export", "--domain", "azure", "--format", "markdown"]);
    assert!(stdout.contains("## Azure"));
    assert!(!stdout.contains("## AD"));
    assert!(stdout.contains("| `AZScopedTo` | ScopedTo | no |"));
    assert!(stdout.contains("| `AZGlobalAdmin` | GlobalAdmin | yes |"));
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("schema.json");
    run_success(&["export", "--output", path.to_str().unwrap()]);
    let contents = std::fs::read_to_string(&path).expect("export file written");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON export");
    assert_eq!(value["domains"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn test_config_sets_default_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("graph-schema.toml"), "format = \"json\"").unwrap();
    let out = Command::new(binary())
        .args(["nodes", "common"])
        .current_dir(dir.path())
        .output()
        .expect("failed to invoke graph-schema binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    serde_json::from_str::<serde_json::Value>(&stdout).expect("config default made output JSON");
}

#[test]
fn test_explicit_format_overrides_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("graph-schema.toml"), "format = \"json\"").unwrap();
    let out = Command::new(binary())
        .args(["nodes", "common", "--format", "compact"])
        .current_dir(dir.path())
        .output()
        .expect("failed to invoke graph-schema binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("MigrationData MigrationData"));
}

#[test]
fn test_broken_config_warns_and_continues() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("graph-schema.toml"), "format = [nope").unwrap();
    let out = Command::new(binary())
        .args(["nodes", "common"])
        .current_dir(dir.path())
        .output()
        .expect("failed to invoke graph-schema binary");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("warning"));
}
