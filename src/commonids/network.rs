//! Network IDs.

use crate::resource_id;
use crate::resourceids::Segment;

/// Record types accepted by a DNS record set ID.
pub const DNS_RECORD_TYPES: &[&str] = &[
    "A", "AAAA", "CAA", "CNAME", "MX", "NS", "PTR", "SOA", "SRV", "TXT",
];

resource_id! {
    /// A Virtual Network.
    pub struct VirtualNetworkId("Virtual Network") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        virtual_network_name: "virtualNetworkName" => "Virtual Network Name",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::fixed("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::fixed("staticProviders", "providers"),
        Segment::provider("staticMicrosoftNetwork", "Microsoft.Network"),
        Segment::fixed("staticVirtualNetworks", "virtualNetworks"),
        Segment::user_specified("virtualNetworkName", "virtualNetworkName"),
    ];
}

resource_id! {
    /// A Subnet within a Virtual Network.
    pub struct SubnetId("Subnet") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        virtual_network_name: "virtualNetworkName" => "Virtual Network Name",
        subnet_name: "subnetName" => "Subnet Name",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::fixed("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::fixed("staticProviders", "providers"),
        Segment::provider("staticMicrosoftNetwork", "Microsoft.Network"),
        Segment::fixed("staticVirtualNetworks", "virtualNetworks"),
        Segment::user_specified("virtualNetworkName", "virtualNetworkName"),
        Segment::fixed("staticSubnets", "subnets"),
        Segment::user_specified("subnetName", "subnetName"),
    ];
}

resource_id! {
    /// A record set within a public DNS zone.
    pub struct DnsRecordSetId("Record Set") {
        subscription_id: "subscriptionId" => "Subscription",
        resource_group_name: "resourceGroupName" => "Resource Group Name",
        dns_zone_name: "dnsZoneName" => "Dns Zone Name",
        record_type: "recordType" => "Record Type",
        relative_record_set_name: "relativeRecordSetName" => "Relative Record Set Name",
    }
    segments = [
        Segment::fixed("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::fixed("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::fixed("staticProviders", "providers"),
        Segment::provider("staticMicrosoftNetwork", "Microsoft.Network"),
        Segment::fixed("staticDnsZones", "dnsZones"),
        Segment::user_specified("dnsZoneName", "dnsZoneName"),
        Segment::constant("recordType", DNS_RECORD_TYPES),
        Segment::user_specified("relativeRecordSetName", "relativeRecordSetName"),
    ];
}

impl SubnetId {
    /// The Virtual Network containing this subnet.
    pub fn virtual_network(&self) -> VirtualNetworkId {
        VirtualNetworkId::new(
            &self.subscription_id,
            &self.resource_group_name,
            &self.virtual_network_name,
        )
    }
}
