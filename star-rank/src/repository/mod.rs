//! Repository descriptors and the metadata fetched for them.

mod descriptor;
mod metadata;

pub use descriptor::RepoDescriptor;
pub use metadata::{fallback_url, RepoMetadata, FETCH_FAILED_MARKER};
pub(crate) use metadata::RepoPayload;
