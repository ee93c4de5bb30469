//! Response models.
//!
//! # Responsibilities
//! - Common envelopes: [`GenericResource`], [`ListResult`]
//! - Discriminated unions decoded by switching on a type field
//!
//! # Design Decisions
//! - Polymorphic payloads are enums, one variant per known discriminator
//! - Unknown discriminators decode into a `Raw` variant holding the payload,
//!   which serializes back unchanged
//! - Known variants re-emit their discriminator on serialization

pub mod discriminator;
pub mod facet;
pub mod recovery_point;
pub mod resource;

pub use facet::{Facet, FacetError, FacetResult};
pub use recovery_point::{
    AzureBackupDiscreteRecoveryPoint, AzureBackupRecoveryPoint, AzureBackupRecoveryPointResource,
    RecoveryPointDataStoreDetails,
};
pub use resource::{GenericResource, ListResult, SystemData};
