//! Data Protection backup recovery points.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::models::discriminator::{decode_variant, discriminator, encode_variant};
use crate::models::resource::SystemData;

const OBJECT_TYPE: &str = "objectType";
const DISCRETE: &str = "AzureBackupDiscreteRecoveryPoint";

/// A point-in-time recovery point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureBackupDiscreteRecoveryPoint {
    pub recovery_point_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_point_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_point_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_point_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_tag_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_tag_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<String>,
    #[serde(
        default,
        rename = "recoveryPointDataStoresDetails",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub data_stores: Vec<RecoveryPointDataStoreDetails>,
}

/// Where a recovery point's data lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryPointDataStoreDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub store_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<String>,
}

/// A recovery point, discriminated by `objectType`.
#[derive(Debug, Clone, PartialEq)]
pub enum AzureBackupRecoveryPoint {
    Discrete(AzureBackupDiscreteRecoveryPoint),
    /// A recovery point of an unrecognised `objectType`, kept verbatim.
    Raw(Value),
}

impl AzureBackupRecoveryPoint {
    pub fn object_type(&self) -> Option<&str> {
        match self {
            AzureBackupRecoveryPoint::Discrete(_) => Some(DISCRETE),
            AzureBackupRecoveryPoint::Raw(v) => discriminator(v, OBJECT_TYPE),
        }
    }
}

impl<'de> Deserialize<'de> for AzureBackupRecoveryPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = Value::deserialize(deserializer)?;
        match discriminator(&payload, OBJECT_TYPE) {
            Some(t) if t.eq_ignore_ascii_case(DISCRETE) => {
                decode_variant(payload).map(AzureBackupRecoveryPoint::Discrete)
            }
            _ => Ok(AzureBackupRecoveryPoint::Raw(payload)),
        }
    }
}

impl Serialize for AzureBackupRecoveryPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AzureBackupRecoveryPoint::Discrete(p) => {
                encode_variant(p, OBJECT_TYPE, DISCRETE, serializer)
            }
            AzureBackupRecoveryPoint::Raw(v) => v.serialize(serializer),
        }
    }
}

/// The ARM resource wrapping a recovery point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureBackupRecoveryPointResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<AzureBackupRecoveryPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_data: Option<SystemData>,
}
