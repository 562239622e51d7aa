//! Aggregate generated mapping directories into a single mapped-types index.
//!
//! Each pair directory is identified by the declarations in its two stub files rather than by
//! its name, so directories edited or written by hand are indexed the same way.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use ktmap_core::{TypeInfo, TypeKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::GenError;
use crate::generate::{JAVA_DEFINITION_FILE, KOTLIN_DEFINITION_FILE};
use crate::write::atomic_write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub kotlin: TypeInfo,
    pub java: TypeInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MappingIndex {
    pub mappings: Vec<IndexEntry>,
}

fn package_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^package\s+([\w.]+)").expect("package regex should compile"))
}

fn declaration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:public\s+)?(?:final\s+|open\s+|abstract\s+)*(class|interface)\s+(\w+)")
            .expect("declaration regex should compile")
    })
}

/// Recover kind and qualified name from a Java or Kotlin stub.
///
/// Reads the `package` line (if any) and stops at the first class/interface declaration.
pub fn extract_type_info(source: &str) -> Option<TypeInfo> {
    let mut package: Option<&str> = None;
    for line in source.lines() {
        let line = line.trim();
        if let Some(caps) = package_re().captures(line) {
            package = caps.get(1).map(|m| m.as_str());
            continue;
        }
        if let Some(caps) = declaration_re().captures(line) {
            let kind = match &caps[1] {
                "interface" => TypeKind::Interface,
                _ => TypeKind::Class,
            };
            let simple = &caps[2];
            let name = match package {
                Some(package) => format!("{package}.{simple}"),
                None => simple.to_owned(),
            };
            return Some(TypeInfo { kind, name });
        }
    }
    None
}

fn read_type_info(path: &Path) -> Option<TypeInfo> {
    match std::fs::read_to_string(path) {
        Ok(text) => extract_type_info(&text),
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(
                    target: "ktmap.gen",
                    path = %path.display(),
                    error = %err,
                    "failed to read stub"
                );
            }
            None
        }
    }
}

/// Scan the immediate subdirectories of `output_dir`.
///
/// Directories missing either stub, or whose stubs have no declaration, are skipped. The result
/// is de-duplicated by (Kotlin name, Java name) and sorted by Kotlin name, then Java name.
pub fn build_index(output_dir: &Path) -> Result<MappingIndex, GenError> {
    let mut seen = HashSet::new();
    let mut mappings = Vec::new();

    for entry in WalkDir::new(output_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .unwrap_or(output_dir)
                .to_path_buf();
            GenError::Io {
                path,
                source: err.into(),
            }
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        let (Some(kotlin), Some(java)) = (
            read_type_info(&dir.join(KOTLIN_DEFINITION_FILE)),
            read_type_info(&dir.join(JAVA_DEFINITION_FILE)),
        ) else {
            tracing::debug!(
                target: "ktmap.gen",
                dir = %dir.display(),
                "skipping directory without both stubs"
            );
            continue;
        };

        if seen.insert((kotlin.name.clone(), java.name.clone())) {
            mappings.push(IndexEntry { kotlin, java });
        }
    }

    mappings.sort_by(|a, b| {
        a.kotlin
            .name
            .cmp(&b.kotlin.name)
            .then_with(|| a.java.name.cmp(&b.java.name))
    });
    Ok(MappingIndex { mappings })
}

pub fn write_index(path: &Path, index: &MappingIndex) -> Result<(), GenError> {
    let yaml = serde_yaml::to_string(index)?;
    atomic_write(path, yaml.as_bytes())
}
