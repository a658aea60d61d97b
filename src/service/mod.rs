pub mod fetch;
pub mod loader;

pub use fetch::Sources;
pub use loader::{LoadReport, PassReport, SchemaAction};
