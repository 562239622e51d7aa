//! Kotlin/Java mapped-type model.
//!
//! The crate is pure data plus text rendering: a read-only [`Registry`] of known type shapes,
//! renderers that turn a descriptor into a minimal Java or Kotlin stub, and
//! [`correspond`], which lines up Kotlin members with their Java counterparts.
//!
//! Nothing here touches the filesystem; see `ktmap-gen` for the run driver.

mod builtin;
mod correspond;
mod descriptor;
mod ident;
mod registry;
mod render;

pub use correspond::{
    correspond, AccessorStyle, CorrespondenceReport, MethodCorrespondence, PropertyCorrespondence,
    PropertyRule, INDEXED_ACCESS_JAVA_METHOD, INDEXED_ACCESS_KOTLIN_METHOD, PROPERTY_RULES,
};
pub use descriptor::{package_of, simple_name_of, TypeDescriptor, TypeInfo, TypeKind};
pub use ident::{pair_dir_name, sanitize_path_segment};
pub use registry::Registry;
pub use render::{render_java_stub, render_kotlin_stub};
