//! Resource IDs shared across services.
//!
//! Service-specific IDs are declared the same way with
//! [`resource_id!`](crate::resource_id) next to the code that uses them.

pub mod compute;
pub mod management;
pub mod monitor;
pub mod network;
pub mod security;
pub mod storage;

pub use compute::{AppServicePlanId, KubernetesClusterId, VirtualMachineId};
pub use management::{ResourceGroupId, RoleAssignmentId, ScopeId, SubscriptionId};
pub use monitor::ApplicationInsightsComponentId;
pub use network::{DnsRecordSetId, SubnetId, VirtualNetworkId, DNS_RECORD_TYPES};
pub use security::{KeyVaultId, UserAssignedIdentityId};
pub use storage::StorageAccountId;
