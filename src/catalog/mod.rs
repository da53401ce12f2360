//! Catalog ingestion layer: parses delimited course files and feeds the
//! domain tree. Malformed input lines are this layer's concern; the
//! tree itself never sees unparsed data.

pub mod error;
pub mod loader;

pub use error::{CatalogError, CatalogResult};
pub use loader::load_catalog;
