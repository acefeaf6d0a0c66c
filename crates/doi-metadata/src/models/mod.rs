//! Data models: the OpenAlex work subset and the service's own bodies.
//!
//! Upstream fields are optional and lenient; output fields are always present.

mod record;
mod work;

pub use record::{FetchRequest, MetadataRecord, PapersResponse};
pub use work::{Authorship, DehydratedEntity, Location, Work};
