//! Azure / Entra cloud directory schema: node kinds, relationship kinds,
//! and well-known property keys.
//!
//! Every Azure wire identifier carries the `AZ` prefix, which keeps the
//! identifier space disjoint from the on-premises domain even where display
//! labels collide (both domains have a "Group").

use super::{labeled_set, Category, Entry};

labeled_set! {
    /// Classes of graph vertex in the Azure domain.
    pub enum NodeKind {
        Entity => "AZBase", "Entity";
        VmScaleSet => "AZVMScaleSet", "VMScaleSet";
        App => "AZApp", "App";
        Role => "AZRole", "Role";
        Device => "AZDevice", "Device";
        FunctionApp => "AZFunctionApp", "FunctionApp";
        Group => "AZGroup", "Group";
        KeyVault => "AZKeyVault", "KeyVault";
        ManagementGroup => "AZManagementGroup", "ManagementGroup";
        ResourceGroup => "AZResourceGroup", "ResourceGroup";
        ServicePrincipal => "AZServicePrincipal", "ServicePrincipal";
        Subscription => "AZSubscription", "Subscription";
        Tenant => "AZTenant", "Tenant";
        User => "AZUser", "User";
        Vm => "AZVM", "VM";
        ManagedCluster => "AZManagedCluster", "ManagedCluster";
        ContainerRegistry => "AZContainerRegistry", "ContainerRegistry";
        WebApp => "AZWebApp", "WebApp";
        LogicApp => "AZLogicApp", "LogicApp";
        AutomationAccount => "AZAutomationAccount", "AutomationAccount";
    }
}

labeled_set! {
    /// Classes of graph edge in the Azure domain.
    ///
    /// The `AZMG*_ReadWrite_*` kinds are Microsoft Graph app role
    /// assignments; their wire identifiers keep Graph's own underscored
    /// permission names.
    pub enum RelationshipKind {
        AvereContributor => "AZAvereContributor", "AvereContributor";
        Contains => "AZContains", "Contains";
        Contributor => "AZContributor", "Contributor";
        GetCertificates => "AZGetCertificates", "GetCertificates";
        GetKeys => "AZGetKeys", "GetKeys";
        GetSecrets => "AZGetSecrets", "GetSecrets";
        HasRole => "AZHasRole", "HasRole";
        MemberOf => "AZMemberOf", "MemberOf";
        Owner => "AZOwner", "Owner";
        RunsAs => "AZRunsAs", "RunsAs";
        VmContributor => "AZVMContributor", "VMContributor";
        AutomationContributor => "AZAutomationContributor", "AutomationContributor";
        KeyVaultContributor => "AZKeyVaultContributor", "KeyVaultContributor";
        VmAdminLogin => "AZVMAdminLogin", "VMAdminLogin";
        AddMembers => "AZAddMembers", "AddMembers";
        AddSecret => "AZAddSecret", "AddSecret";
        ExecuteCommand => "AZExecuteCommand", "ExecuteCommand";
        GlobalAdmin => "AZGlobalAdmin", "GlobalAdmin";
        PrivilegedAuthAdmin => "AZPrivilegedAuthAdmin", "PrivilegedAuthAdmin";
        Grant => "AZGrant", "Grant";
        GrantSelf => "AZGrantSelf", "GrantSelf";
        PrivilegedRoleAdmin => "AZPrivilegedRoleAdmin", "PrivilegedRoleAdmin";
        ResetPassword => "AZResetPassword", "ResetPassword";
        UserAccessAdministrator => "AZUserAccessAdministrator", "UserAccessAdministrator";
        Owns => "AZOwns", "Owns";
        ScopedTo => "AZScopedTo", "ScopedTo";
        CloudAppAdmin => "AZCloudAppAdmin", "CloudAppAdmin";
        AppAdmin => "AZAppAdmin", "AppAdmin";
        AddOwner => "AZAddOwner", "AddOwner";
        ManagedIdentity => "AZManagedIdentity", "ManagedIdentity";
        ApplicationReadWriteAll => "AZMGApplication_ReadWrite_All", "ApplicationReadWriteAll";
        AppRoleAssignmentReadWriteAll => "AZMGAppRoleAssignment_ReadWrite_All", "AppRoleAssignmentReadWriteAll";
        DirectoryReadWriteAll => "AZMGDirectory_ReadWrite_All", "DirectoryReadWriteAll";
        GroupReadWriteAll => "AZMGGroup_ReadWrite_All", "GroupReadWriteAll";
        GroupMemberReadWriteAll => "AZMGGroupMember_ReadWrite_All", "GroupMemberReadWriteAll";
        RoleManagementReadWriteDirectory => "AZMGRoleManagement_ReadWrite_Directory", "RoleManagementReadWriteDirectory";
        ServicePrincipalEndpointReadWriteAll => "AZMGServicePrincipalEndpoint_ReadWrite_All", "ServicePrincipalEndpointReadWriteAll";
        AksContributor => "AZAKSContributor", "AKSContributor";
        NodeResourceGroup => "AZNodeResourceGroup", "NodeResourceGroup";
        WebsiteContributor => "AZWebsiteContributor", "WebsiteContributor";
        LogicAppContributor => "AZLogicAppContributor", "LogicAppContributor";
        MgAddMember => "AZMGAddMember", "AZMGAddMember";
        MgAddOwner => "AZMGAddOwner", "AZMGAddOwner";
        MgAddSecret => "AZMGAddSecret", "AZMGAddSecret";
        MgGrantAppRoles => "AZMGGrantAppRoles", "AZMGGrantAppRoles";
        MgGrantRole => "AZMGGrantRole", "AZMGGrantRole";
    }
}

labeled_set! {
    /// Well-known property keys attachable to Azure nodes and edges.
    ///
    /// Two identifiers are frozen with historical misspellings
    /// (`trustype`, `templateid`); collectors emit them as-is and renaming
    /// a published identifier would orphan existing data.
    pub enum Property {
        AppOwnerOrganizationId => "appownerorganizationid", "App Owner Organization ID";
        AppDescription => "appdescription", "App Description";
        AppDisplayName => "appdisplayname", "App Display Name";
        ServicePrincipalType => "serviceprincipaltype", "Service Principal Type";
        UserType => "usertype", "User Type";
        TenantId => "tenantid", "Tenant ID";
        ServicePrincipalId => "service_principal_id", "Service Principal ID";
        ServicePrincipalNames => "service_principal_names", "Service Principal Names";
        OperatingSystemVersion => "operatingsystemversion", "Operating System Version";
        TrustType => "trustype", "Trust Type";
        IsBuiltIn => "isbuiltin", "Is Built In";
        AppId => "appid", "App ID";
        AppRoleId => "approleid", "App Role ID";
        DeviceId => "deviceid", "Device ID";
        NodeResourceGroupId => "noderesourcegroupid", "Node Resource Group ID";
        OnPremId => "onpremid", "On Prem ID";
        OnPremSyncEnabled => "onpremsyncenabled", "On Prem Sync Enabled";
        SecurityEnabled => "securityenabled", "Security Enabled";
        SecurityIdentifier => "securityidentifier", "Security Identifier";
        EnableRbacAuthorization => "enablerbacauthorization", "RBAC Authorization Enabled";
        Scope => "scope", "Scope";
        Offer => "offer", "Offer";
        MfaEnabled => "mfaenabled", "MFA Enabled";
        License => "license", "License";
        Licenses => "licenses", "Licenses";
        MfaEnforced => "mfaenforced", "MFA Enforced";
        UserPrincipalName => "userprincipalname", "User Principal Name";
        IsAssignableToRole => "isassignabletorole", "Is Role Assignable";
        PublisherDomain => "publisherdomain", "Publisher Domain";
        SignInAudience => "signinaudience", "Sign In Audience";
        RoleTemplateId => "templateid", "Role Template ID";
    }
}

/// Any Azure graph element classifier — node or relationship.
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
/// Allow-list, reviewed per kind. Absent by policy: `ScopedTo` (a
/// cross-reference, not a privilege) and the seven `AZMG*_ReadWrite_*`
/// Graph app role kinds, whose traversable effect is expressed by the
/// `AZMGAdd*`/`AZMGGrant*` edges instead.
pub const PATHFINDING_EDGES: &[RelationshipKind] = &[
    RelationshipKind::AvereContributor,
    RelationshipKind::Contains,
    RelationshipKind::Contributor,
    RelationshipKind::GetCertificates,
    RelationshipKind::GetKeys,
    RelationshipKind::GetSecrets,
    RelationshipKind::HasRole,
    RelationshipKind::MemberOf,
    RelationshipKind::Owner,
    RelationshipKind::RunsAs,
    RelationshipKind::VmContributor,
    RelationshipKind::AutomationContributor,
    RelationshipKind::KeyVaultContributor,
    RelationshipKind::VmAdminLogin,
    RelationshipKind::AddMembers,
    RelationshipKind::AddSecret,
    RelationshipKind::ExecuteCommand,
    RelationshipKind::GlobalAdmin,
    RelationshipKind::PrivilegedAuthAdmin,
    RelationshipKind::Grant,
    RelationshipKind::GrantSelf,
    RelationshipKind::PrivilegedRoleAdmin,
    RelationshipKind::ResetPassword,
    RelationshipKind::UserAccessAdministrator,
    RelationshipKind::Owns,
    RelationshipKind::CloudAppAdmin,
    RelationshipKind::AppAdmin,
    RelationshipKind::AddOwner,
    RelationshipKind::ManagedIdentity,
    RelationshipKind::AksContributor,
    RelationshipKind::NodeResourceGroup,
    RelationshipKind::WebsiteContributor,
    RelationshipKind::LogicAppContributor,
    RelationshipKind::MgAddMember,
    RelationshipKind::MgAddOwner,
    RelationshipKind::MgAddSecret,
    RelationshipKind::MgGrantAppRoles,
    RelationshipKind::MgGrantRole,
];

/// Every Azure schema entry, category-tagged, in declaration order.
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
