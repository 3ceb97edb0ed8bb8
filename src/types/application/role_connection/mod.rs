//! Role connection metadata records, used for linked roles.

pub mod metadata;
mod metadata_type;

pub use self::{
    metadata::ApplicationRoleConnectionMetadata,
    metadata_type::ApplicationRoleConnectionMetadataType,
};
