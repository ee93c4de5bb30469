//! Subscription, resource group and scope IDs.

use crate::resource_id;
use crate::resourceids::Segment;

resource_id! {
    /// An Azure subscription.
    pub struct SubscriptionId("Subscription") {
        subscription_id: "subscriptionId" => "Subscription",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
    ];
}

resource_id! {
    /// A resource group within a subscription.
    pub struct ResourceGroupId("Resource Group") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::fixed("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
    ];
}

resource_id! {
    /// Any ARM path used as the parent of an extension resource.
    pub struct ScopeId("Scope") {
        scope: "scope" => "Scope",
    }
    segments = [
        Segment::scope("scope"),
    ];
}

resource_id! {
    /// A role assignment at an arbitrary scope.
    pub struct RoleAssignmentId("Role Assignment") {
        scope: "scope" => "Scope",
        role_assignment_name: "roleAssignmentName" => "Role Assignment Name",
    }
    segments = [
        Segment::scope("scope"),
        Segment::fixed("staticProviders", "providers"),
        Segment::provider("staticMicrosoftAuthorization", "Microsoft.Authorization"),
        Segment::fixed("staticRoleAssignments", "roleAssignments"),
        Segment::user_specified("roleAssignmentName", "roleAssignmentName"),
    ];
}

impl ResourceGroupId {
    /// The subscription this resource group belongs to.
    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(&self.subscription_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resourceids::ResourceId;

    const SUB: &str = "12345678-1234-9876-4563-123456789012";

    #[test]
    fn test_subscription_round_trip() {
        let input = format!("/subscriptions/{}", SUB);
        let id = SubscriptionId::parse(&input).unwrap();
        assert_eq!(id.subscription_id, SUB);
        assert_eq!(id.id(), input);
    }

    #[test]
    fn test_resource_group_insensitive_normalizes_keywords() {
        let input = format!("/SUBSCRIPTIONS/{}/RESOURCEGROUPS/Group1", SUB);
        assert!(ResourceGroupId::parse(&input).is_err());

        let id = ResourceGroupId::parse_insensitively(&input).unwrap();
        assert_eq!(id.resource_group_name, "Group1");
        assert_eq!(id.id(), format!("/subscriptions/{}/resourceGroups/Group1", SUB));
        assert_eq!(id.subscription().id(), format!("/subscriptions/{}", SUB));
    }

    #[test]
    fn test_scope_keeps_full_path() {
        let input = format!("/subscriptions/{}/resourceGroups/rg1", SUB);
        let id = ScopeId::parse(&input).unwrap();
        assert_eq!(id.scope, input);
        assert_eq!(id.id(), input);
    }

    #[test]
    fn test_role_assignment_at_resource_group_scope() {
        let input = format!(
            "/subscriptions/{}/resourceGroups/rg1/providers/Microsoft.Authorization/roleAssignments/ra1",
            SUB
        );
        let id: RoleAssignmentId = input.parse().unwrap();
        assert_eq!(id.scope, format!("/subscriptions/{}/resourceGroups/rg1", SUB));
        assert_eq!(id.role_assignment_name, "ra1");
        assert_eq!(id.id(), input);
    }

    #[test]
    fn test_display_lists_components() {
        let id = ResourceGroupId::new(SUB, "rg1");
        assert_eq!(
            id.to_string(),
            format!("Resource Group (Subscription: \"{}\"\nResource Group Name: \"rg1\")", SUB)
        );
    }
}
