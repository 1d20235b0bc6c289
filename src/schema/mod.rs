//! The graph schema registry: every node kind, relationship kind, and
//! property key that can appear in an identity attack graph, grouped by
//! domain.
//!
//! All data here is compile-time constant. Lookups never fail — an
//! identifier the registry does not recognize resolves to `None`, and
//! callers fall back to displaying the raw identifier. Data collectors may
//! ship newer kinds than this build knows about; that must degrade, not
//! crash.

pub mod active_directory;
pub mod azure;
pub mod common;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Defines one closed, labeled set of schema identifiers as a fieldless
/// `Copy` enum.
///
/// Each variant maps to a canonical wire identifier (case-sensitive, stable
/// once published) and a human-readable display label. The generated
/// `name()`/`label()` matches are exhaustive, so every member of the set has
/// a label by construction. `parse` is the inverse of `name`: exact match
/// only, `None` for anything unrecognized.
macro_rules! labeled_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident => $ident:literal, $label:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every member of the set, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Canonical identifier, exactly as emitted by data collectors.
            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $ident, )+
                }
            }

            /// Human-readable display label.
            pub const fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            /// Exact, case-sensitive lookup by canonical identifier.
            /// `None` means the identifier is not part of this set.
            pub fn parse(raw: &str) -> Option<$name> {
                Self::ALL.iter().copied().find(|k| k.name() == raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&raw).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "unrecognized {} identifier '{raw}'",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

pub(crate) use labeled_set;

/// One independent namespace of graph entity kinds.
///
/// The set is closed: callers can never hand the registry a domain it does
/// not know, so domain-keyed lookups have no failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Domain {
    /// On-premises Active Directory.
    #[value(alias = "ad")]
    ActiveDirectory,
    /// Azure / Entra cloud directory.
    #[value(alias = "az")]
    Azure,
    /// Cross-domain vocabulary shared by every data source.
    Common,
}

impl Domain {
    pub const ALL: &'static [Domain] = &[Domain::ActiveDirectory, Domain::Azure, Domain::Common];

    /// Short display name for output headers.
    pub const fn name(self) -> &'static str {
        match self {
            Domain::ActiveDirectory => "AD",
            Domain::Azure => "Azure",
            Domain::Common => "Common",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which of a domain's three enumerations an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Node,
    Relationship,
    Property,
}

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Category::Node => "node",
            Category::Relationship => "relationship",
            Category::Property => "property",
        }
    }
}

/// One schema entry: a canonical identifier, its display label, and the
/// enumeration it came from. The row type behind listings and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: &'static str,
    pub label: &'static str,
    pub category: Category,
}

/// Every entry of a domain — node kinds, then relationship kinds, then
/// property keys, each in declaration order.
pub fn entries(domain: Domain) -> Vec<Entry> {
    match domain {
        Domain::ActiveDirectory => active_directory::entries(),
        Domain::Azure => azure::entries(),
        Domain::Common => common::entries(),
    }
}

/// Identifier → label tables for one domain, built once on first use.
/// Kinds (nodes + relationships) and properties are kept separate because
/// they are separate enumerations with separate lookup contracts.
struct DomainTable {
    kinds: HashMap<&'static str, &'static str>,
    properties: HashMap<&'static str, &'static str>,
}

impl DomainTable {
    fn build(domain: Domain) -> DomainTable {
        let mut kinds = HashMap::new();
        let mut properties = HashMap::new();
        for entry in entries(domain) {
            match entry.category {
                Category::Node | Category::Relationship => kinds.insert(entry.name, entry.label),
                Category::Property => properties.insert(entry.name, entry.label),
            };
        }
        DomainTable { kinds, properties }
    }
}

fn table(domain: Domain) -> &'static DomainTable {
    static AD: LazyLock<DomainTable> =
        LazyLock::new(|| DomainTable::build(Domain::ActiveDirectory));
    static AZURE: LazyLock<DomainTable> = LazyLock::new(|| DomainTable::build(Domain::Azure));
    static COMMON: LazyLock<DomainTable> = LazyLock::new(|| DomainTable::build(Domain::Common));
    match domain {
        Domain::ActiveDirectory => &AD,
        Domain::Azure => &AZURE,
        Domain::Common => &COMMON,
    }
}

/// Display label for a node or relationship kind identifier.
///
/// `None` is the unresolved sentinel: the identifier is not part of this
/// build's enumeration for the domain. Callers display the raw identifier
/// instead — unrecognized kinds are expected, not an error.
pub fn kind_label(domain: Domain, raw: &str) -> Option<&'static str> {
    table(domain).kinds.get(raw).copied()
}

/// Display label for a well-known property key. Same contract as
/// [`kind_label`].
pub fn property_label(domain: Domain, raw: &str) -> Option<&'static str> {
    table(domain).properties.get(raw).copied()
}

/// Display label for any schema identifier of a domain: kinds first, then
/// property keys.
pub fn label(domain: Domain, raw: &str) -> Option<&'static str> {
    kind_label(domain, raw).or_else(|| property_label(domain, raw))
}

/// Canonical identifiers of the relationship kinds eligible for attack-path
/// traversal in a domain, in curated order.
///
/// Same ordering as the typed `PATHFINDING_EDGES` constants. The order is
/// stable across calls; it carries no ranking semantics. Common has no
/// relationship kinds, so its slice is empty.
pub fn pathfinding_edge_names(domain: Domain) -> &'static [&'static str] {
    static AD: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
        active_directory::PATHFINDING_EDGES
            .iter()
            .map(|e| e.name())
            .collect()
    });
    static AZURE: LazyLock<Vec<&'static str>> =
        LazyLock::new(|| azure::PATHFINDING_EDGES.iter().map(|e| e.name()).collect());
    match domain {
        Domain::ActiveDirectory => AD.as_slice(),
        Domain::Azure => AZURE.as_slice(),
        Domain::Common => &[],
    }
}

/// The pathfinding allow-list of a domain as category-tagged entries, in
/// curated order. Used by listings and export; the typed constants remain
/// the source of truth.
pub fn pathfinding_entries(domain: Domain) -> Vec<Entry> {
    let to_entry = |name, label| Entry {
        name,
        label,
        category: Category::Relationship,
    };
    match domain {
        Domain::ActiveDirectory => active_directory::PATHFINDING_EDGES
            .iter()
            .map(|k| to_entry(k.name(), k.label()))
            .collect(),
        Domain::Azure => azure::PATHFINDING_EDGES
            .iter()
            .map(|k| to_entry(k.name(), k.label()))
            .collect(),
        Domain::Common => Vec::new(),
    }
}
