//! Storage IDs.

use crate::resource_id;
use crate::resourceids::Segment;

resource_id! {
    /// A Storage Account.
    pub struct StorageAccountId("Storage Account") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        storage_account_name: "storageAccountName" => "Storage Account Name",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::fixed("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::fixed("staticProviders", "providers"),
        Segment::provider("staticMicrosoftStorage", "Microsoft.Storage"),
        Segment::fixed("staticStorageAccounts", "storageAccounts"),
        Segment::user_specified("storageAccountName", "storageAccountName"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resourceids::ResourceId;

    #[test]
    fn test_storage_account_from_str() {
        let input = "/subscriptions/12345/resourceGroups/rg1/providers/Microsoft.Storage/storageAccounts/acct1";
        let id: StorageAccountId = input.parse().unwrap();
        assert_eq!(id.storage_account_name, "acct1");
        assert_eq!(id.id(), input);
    }
}
