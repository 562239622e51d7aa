//! Run driver for the ktmap generator.
//!
//! [`generate`] writes one directory per Kotlin/Java pair containing a Java stub, a Kotlin stub
//! and the member correspondence report. [`build_index`] reads those directories back and
//! produces the aggregated mapped-types index.

mod error;
mod generate;
mod index;
mod write;

pub use error::GenError;
pub use generate::{
    generate, render_pair, GenerateOptions, GenerateSummary, GeneratedPair, PairArtifacts,
    JAVA_DEFINITION_FILE, KOTLIN_DEFINITION_FILE, MAPPING_DETAILS_FILE,
};
pub use index::{build_index, extract_type_info, write_index, IndexEntry, MappingIndex};
