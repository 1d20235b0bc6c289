//! On-premises Active Directory schema: node kinds, relationship kinds, and
//! well-known property keys.

use super::{labeled_set, Category, Entry};

labeled_set! {
    /// Classes of graph vertex in the AD domain.
    ///
    /// `Entity` is the base kind every AD node carries in addition to its
    /// concrete kind, which is why its wire identifier is `Base`.
    pub enum NodeKind {
        Entity => "Base", "Entity";
        User => "User", "User";
        Computer => "Computer", "Computer";
        Group => "Group", "Group";
        Gpo => "GPO", "GPO";
        Ou => "OU", "OU";
        Container => "Container", "Container";
        Domain => "Domain", "Domain";
        LocalGroup => "ADLocalGroup", "LocalGroup";
        LocalUser => "ADLocalUser", "LocalUser";
    }
}

labeled_set! {
    /// Classes of graph edge in the AD domain.
    ///
    /// Structurally valid edges only — whether an edge may be traversed by
    /// pathfinding is decided by [`PATHFINDING_EDGES`], not here.
    pub enum RelationshipKind {
        Owns => "Owns", "Owns";
        GenericAll => "GenericAll", "GenericAll";
        GenericWrite => "GenericWrite", "GenericWrite";
        WriteOwner => "WriteOwner", "WriteOwner";
        WriteDacl => "WriteDacl", "WriteDACL";
        MemberOf => "MemberOf", "MemberOf";
        ForceChangePassword => "ForceChangePassword", "ForceChangePassword";
        AllExtendedRights => "AllExtendedRights", "AllExtendedRights";
        AddMember => "AddMember", "AddMember";
        HasSession => "HasSession", "HasSession";
        Contains => "Contains", "Contains";
        GpLink => "GPLink", "GPLink";
        AllowedToDelegate => "AllowedToDelegate", "AllowedToDelegate";
        GetChanges => "GetChanges", "GetChanges";
        GetChangesAll => "GetChangesAll", "GetChangesAll";
        GetChangesInFilteredSet => "GetChangesInFilteredSet", "GetChangesInFilteredSet";
        TrustedBy => "TrustedBy", "TrustedBy";
        AllowedToAct => "AllowedToAct", "AllowedToAct";
        AdminTo => "AdminTo", "AdminTo";
        CanPsRemote => "CanPSRemote", "CanPSRemote";
        CanRdp => "CanRDP", "CanRDP";
        ExecuteDcom => "ExecuteDCOM", "ExecuteDCOM";
        HasSidHistory => "HasSIDHistory", "HasSIDHistory";
        AddSelf => "AddSelf", "AddSelf";
        DcSync => "DCSync", "DCSync";
        ReadLapsPassword => "ReadLAPSPassword", "ReadLAPSPassword";
        ReadGmsaPassword => "ReadGMSAPassword", "ReadGMSAPassword";
        DumpSmsaPassword => "DumpSMSAPassword", "DumpSMSAPassword";
        SqlAdmin => "SQLAdmin", "SQLAdmin";
        AddAllowedToAct => "AddAllowedToAct", "AddAllowedToAct";
        WriteSpn => "WriteSPN", "WriteSPN";
        AddKeyCredentialLink => "AddKeyCredentialLink", "AddKeyCredentialLink";
        LocalToComputer => "LocalToComputer", "LocalToComputer";
        MemberOfLocalGroup => "MemberOfLocalGroup", "MemberOfLocalGroup";
        RemoteInteractiveLogonPrivilege => "RemoteInteractiveLogonPrivilege", "RemoteInteractiveLogonPrivilege";
        SyncLapsPassword => "SyncLAPSPassword", "SyncLAPSPassword";
        WriteAccountRestrictions => "WriteAccountRestrictions", "WriteAccountRestrictions";
    }
}

labeled_set! {
    /// Well-known property keys attachable to AD nodes and edges.
    pub enum Property {
        AdminCount => "admincount", "Admin Count";
        DistinguishedName => "distinguishedname", "Distinguished Name";
        DomainFqdn => "domain", "Domain FQDN";
        DomainSid => "domainsid", "Domain SID";
        Sensitive => "sensitive", "Marked sensitive";
        HighValue => "highvalue", "High Value";
        BlocksInheritance => "blocksinheritance", "Blocks Inheritance";
        IsAcl => "isacl", "Is ACL";
        IsAclProtected => "isaclprotected", "ACL Inheritance Denied";
        Enforced => "enforced", "Enforced";
        Department => "department", "Department";
        HasSpn => "hasspn", "Has SPN";
        UnconstrainedDelegation => "unconstraineddelegation", "Allows Unconstrained Delegation";
        LastLogon => "lastlogon", "Last Logon";
        LastLogonTimestamp => "lastlogontimestamp", "Last Logon (Replicated)";
        IsPrimaryGroup => "isprimarygroup", "Is Primary Group";
        HasLaps => "haslaps", "LAPS Enabled";
        DontRequirePreAuth => "dontreqpreauth", "Do Not Require Pre-Authentication";
        LogonType => "logontype", "Logon Type";
        HasUra => "hasura", "Has User Rights Assignment Collection";
        PasswordNeverExpires => "pwdneverexpires", "Password Never Expires";
        PasswordNotRequired => "passwordnotreqd", "Password Not Required";
        FunctionalLevel => "functionallevel", "Functional Level";
        TrustType => "trusttype", "Trust Type";
        SidFiltering => "sidfiltering", "SID Filtering Enabled";
        TrustedToAuth => "trustedtoauth", "Trusted For Constrained Delegation";
        SamAccountName => "samaccountname", "SAM Account Name";
    }
}

/// Any AD graph element classifier — node or relationship — for code that
/// does not need to narrow further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Node(NodeKind),
    Relationship(RelationshipKind),
}

impl Kind {
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Node(k) => k.name(),
            Kind::Relationship(k) => k.name(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Kind::Node(k) => k.label(),
            Kind::Relationship(k) => k.label(),
        }
    }

    /// Node kinds take precedence, though the identifier spaces do not
    /// overlap in practice.
    pub fn parse(raw: &str) -> Option<Kind> {
        NodeKind::parse(raw)
            .map(Kind::Node)
            .or_else(|| RelationshipKind::parse(raw).map(Kind::Relationship))
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Relationship kinds eligible for attack-path traversal, in curated order.
///
/// This is a hand-maintained allow-list, not the relationship enumeration
/// minus a deny-list: a kind added to the schema stays out of pathfinding
/// until it is reviewed and added here. Absent by policy: the DCSync helper
/// edges (`GetChanges`, `GetChangesAll`, `GetChangesInFilteredSet`), the
/// local group edges (`LocalToComputer`, `MemberOfLocalGroup`), and
/// `RemoteInteractiveLogonPrivilege`.
pub const PATHFINDING_EDGES: &[RelationshipKind] = &[
    RelationshipKind::Owns,
    RelationshipKind::GenericAll,
    RelationshipKind::GenericWrite,
    RelationshipKind::WriteOwner,
    RelationshipKind::WriteDacl,
    RelationshipKind::MemberOf,
    RelationshipKind::ForceChangePassword,
    RelationshipKind::AllExtendedRights,
    RelationshipKind::AddMember,
    RelationshipKind::HasSession,
    RelationshipKind::Contains,
    RelationshipKind::GpLink,
    RelationshipKind::AllowedToDelegate,
    RelationshipKind::TrustedBy,
    RelationshipKind::AllowedToAct,
    RelationshipKind::AdminTo,
    RelationshipKind::CanPsRemote,
    RelationshipKind::CanRdp,
    RelationshipKind::ExecuteDcom,
    RelationshipKind::HasSidHistory,
    RelationshipKind::AddSelf,
    RelationshipKind::DcSync,
    RelationshipKind::ReadLapsPassword,
    RelationshipKind::ReadGmsaPassword,
    RelationshipKind::DumpSmsaPassword,
    RelationshipKind::SqlAdmin,
    RelationshipKind::AddAllowedToAct,
    RelationshipKind::WriteSpn,
    RelationshipKind::AddKeyCredentialLink,
    RelationshipKind::SyncLapsPassword,
    RelationshipKind::WriteAccountRestrictions,
];

/// Every AD schema entry, category-tagged, in declaration order.
pub fn entries() -> Vec<Entry> {
    let mut out =
        Vec::with_capacity(NodeKind::ALL.len() + RelationshipKind::ALL.len() + Property::ALL.len());
    out.extend(NodeKind::ALL.iter().map(|k| Entry {
        name: k.name(),
        label: k.label(),
        category: Category::Node,
    }));
    out.extend(RelationshipKind::ALL.iter().map(|k| Entry {
        name: k.name(),
        label: k.label(),
        category: Category::Relationship,
    }));
    out.extend(Property::ALL.iter().map(|k| Entry {
        name: k.name(),
        label: k.label(),
        category: Category::Property,
    }));
    out
}
