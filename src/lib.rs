pub mod classify;
pub mod executor;
pub mod harvest;
pub mod model;
pub mod stats;
pub mod taxonomy;
pub mod traits;

// Re-export common types for convenience
pub use classify::*;
pub use executor::*;
pub use model::*;
pub use taxonomy::{Category, ProtectionLevel, Resolver, Taxonomy, TaxonomyEntry};
pub use traits::*;
