//! Harvest module - end-to-end permission analysis over a firmware tree.
//!
//! This module wires the classification core to the file system:
//! - **Discovery**: version folders and package files via [`discovery`]
//! - **Extraction**: the bundled [`ManifestDumpExtractor`]
//! - **Pipeline**: async executor via [`pipeline::HarvestPipeline`]

pub mod discovery;
pub mod manifest;
pub mod pipeline;

// Re-export commonly used types
pub use discovery::VersionFolder;
pub use manifest::{ManifestDumpExtractor, DEFAULT_DUMP_SUFFIX};
pub use pipeline::{HarvestPipeline, PipelineError, SeriesAnalysis};
