use anyhow::Result;
use regex::RegexBuilder;

use crate::schema::{self, Category, Domain, Entry};

/// A successful identifier resolution in one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Resolution {
    pub domain: &'static str,
    pub category: Category,
    pub label: &'static str,
}

/// Filter schema entries by a regex over identifier and display label.
///
/// A `None` pattern keeps everything. The regex is compiled once; an
/// invalid pattern is the caller's error, not an unresolved lookup.
pub fn filter_entries(
    entries: Vec<Entry>,
    pattern: Option<&str>,
    case_insensitive: bool,
) -> Result<Vec<Entry>> {
    let Some(pattern) = pattern else {
        return Ok(entries);
    };
    let re = RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|e| anyhow::anyhow!("invalid filter pattern '{}': {}", pattern, e))?;
    Ok(entries
        .into_iter()
        .filter(|e| re.is_match(e.name) || re.is_match(e.label))
        .collect())
}

/// Resolve a raw identifier against one domain, or all domains when
/// `domain` is `None`.
///
/// An empty result is the unresolved sentinel: the identifier is not part
/// of any searched enumeration. That is an expected outcome (data may be
/// newer than this build), never an error.
pub fn resolve(raw: &str, domain: Option<Domain>) -> Vec<Resolution> {
    let domains: &[Domain] = match domain {
        Some(ref d) => std::slice::from_ref(d),
        None => Domain::ALL,
    };

    let mut out = Vec::new();
    for &domain in domains {
        if let Some(entry) = schema::entries(domain).into_iter().find(|e| e.name == raw) {
            out.push(Resolution {
                domain: domain.name(),
                category: entry.category,
                label: entry.label,
            });
        }
    }
    out
}
