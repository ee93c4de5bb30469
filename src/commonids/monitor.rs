//! Application Insights IDs.

use crate::resource_id;
use crate::resourceids::Segment;

resource_id! {
    /// An Application Insights component.
    pub struct ApplicationInsightsComponentId("Component") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        component_name: "componentName" => "Component Name",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::fixed("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::fixed("staticProviders", "providers"),
        Segment::provider("staticMicrosoftInsights", "Microsoft.Insights"),
        Segment::fixed("staticComponents", "components"),
        Segment::user_specified("componentName", "componentName"),
    ];
}
