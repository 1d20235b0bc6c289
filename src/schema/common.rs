//! Cross-domain schema vocabulary shared by every data source.
//!
//! Small on purpose: one node kind and the property keys that apply to any
//! graph element regardless of which collector produced it. There are no
//! common relationship kinds, so this domain contributes nothing to
//! pathfinding.

use super::{labeled_set, Category, Entry};

labeled_set! {
    /// Node kinds that belong to no single directory.
    pub enum NodeKind {
        MigrationData => "MigrationData", "MigrationData";
    }
}

labeled_set! {
    /// Property keys attachable to nodes and edges of any domain.
    pub enum Property {
        ObjectId => "objectid", "Object ID";
        Name => "name", "Name";
        DisplayName => "displayname", "Display Name";
        Description => "description", "Description";
        OwnerObjectId => "owner_objectid", "Owner Object ID";
        Collected => "collected", "Collected";
        OperatingSystem => "operatingsystem", "Operating System";
        SystemTags => "system_tags", "Node System Tags";
        UserTags => "user_tags", "Node User Tags";
        LastSeen => "lastseen", "Last Collected";
        WhenCreated => "whencreated", "Created";
        Enabled => "enabled", "Enabled";
        PasswordLastSet => "pwdlastset", "Password Last Set";
        Title => "title", "Title";
        Email => "email", "Email";
        IsInherited => "isinherited", "Is Inherited";
    }
}

/// Any common graph element classifier. The domain has no relationship
/// kinds, so the union currently wraps nodes only; the shape matches the
/// other domains so calling code stays uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Node(NodeKind),
}

impl Kind {
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Node(k) => k.name(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Kind::Node(k) => k.label(),
        }
    }

    pub fn parse(raw: &str) -> Option<Kind> {
        NodeKind::parse(raw).map(Kind::Node)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Every common schema entry, category-tagged, in declaration order.
pub fn entries() -> Vec<Entry> {
    let mut out = Vec::with_capacity(NodeKind::ALL.len() + Property::ALL.len());
    out.extend(NodeKind::ALL.iter().map(|k| Entry {
        name: k.name(),
        label: k.label(),
        category: Category::Node,
    }));
    out.extend(Property::ALL.iter().map(|k| Entry {
        name: k.name(),
        label: k.label(),
        category: Category::Property,
    }));
    out
}
