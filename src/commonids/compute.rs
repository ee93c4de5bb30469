//! Compute, container and web hosting IDs.

use crate::resource_id;
use crate::resourceids::Segment;

resource_id! {
    /// A Virtual Machine.
    pub struct VirtualMachineId("Virtual Machine") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        virtual_machine_name: "virtualMachineName" => "Virtual Machine Name",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::fixed("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::fixed("staticProviders", "providers"),
        Segment::provider("staticMicrosoftCompute", "Microsoft.Compute"),
        Segment::fixed("staticVirtualMachines", "virtualMachines"),
        Segment::user_specified("virtualMachineName", "virtualMachineName"),
    ];
}

resource_id! {
    /// A managed Kubernetes (AKS) cluster.
    pub struct KubernetesClusterId("Kubernetes Cluster") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        managed_cluster_name: "managedClusterName" => "Managed Cluster Name",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::fixed("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::fixed("staticProviders", "providers"),
        Segment::provider("staticMicrosoftContainerService", "Microsoft.ContainerService"),
        Segment::fixed("staticManagedClusters", "managedClusters"),
        Segment::user_specified("managedClusterName", "managedClusterName"),
    ];
}

resource_id! {
    /// An App Service Plan (server farm).
    pub struct AppServicePlanId("App Service Plan") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        server_farm_name: "serverFarmName" => "Server Farm Name",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::fixed("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::fixed("staticProviders", "providers"),
        Segment::provider("staticMicrosoftWeb", "Microsoft.Web"),
        Segment::fixed("staticServerFarms", "serverFarms"),
        Segment::user_specified("serverFarmName", "serverFarmName"),
    ];
}
