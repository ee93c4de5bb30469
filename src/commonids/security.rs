//! Key Vault and managed identity IDs.

use crate::resource_id;
use crate::resourceids::Segment;

resource_id! {
    /// A Key Vault.
    pub struct KeyVaultId("Key Vault") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        vault_name: "vaultName" => "Vault Name",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::fixed("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::fixed("staticProviders", "providers"),
        Segment::provider("staticMicrosoftKeyVault", "Microsoft.KeyVault"),
        Segment::fixed("staticVaults", "vaults"),
        Segment::user_specified("vaultName", "vaultName"),
    ];
}

resource_id! {
    /// A User Assigned Managed Identity.
    pub struct UserAssignedIdentityId("User Assigned Identity") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        user_assigned_identity_name: "userAssignedIdentityName" => "User Assigned Identity Name",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::fixed("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::fixed("staticProviders", "providers"),
        Segment::provider("staticMicrosoftManagedIdentity", "Microsoft.ManagedIdentity"),
        Segment::fixed("staticUserAssignedIdentities", "userAssignedIdentities"),
        Segment::user_specified("userAssignedIdentityName", "userAssignedIdentityName"),
    ];
}
