use std::path::{Path, PathBuf};

use ktmap_config::MappingPair;
use ktmap_core::{pair_dir_name, render_java_stub, render_kotlin_stub, Registry};
use serde::Serialize;

use crate::error::GenError;
use crate::write::atomic_write;

pub const JAVA_DEFINITION_FILE: &str = "java-definition.java";
pub const KOTLIN_DEFINITION_FILE: &str = "kotlin-definition.kt";
pub const MAPPING_DETAILS_FILE: &str = "mapping-details.yaml";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPair {
    pub kotlin: String,
    pub java: String,
    pub dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateSummary {
    pub output_dir: PathBuf,
    pub pairs: Vec<GeneratedPair>,
}

/// The three artifacts for a single pair, rendered but not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairArtifacts {
    pub dir_name: String,
    pub java_stub: String,
    pub kotlin_stub: String,
    pub mapping_details: String,
}

/// Render everything for one pair without touching the filesystem.
pub fn render_pair(registry: &Registry, pair: &MappingPair) -> Result<PairArtifacts, GenError> {
    let java = registry.lookup(&pair.java);
    let kotlin = registry.lookup(&pair.kotlin);
    let report = registry.infer(&pair.kotlin, &pair.java);

    if !report.unmapped_properties().is_empty() || !report.unmapped_methods().is_empty() {
        tracing::debug!(
            target: "ktmap.gen",
            kotlin = %pair.kotlin,
            java = %pair.java,
            properties = ?report.unmapped_properties(),
            methods = ?report.unmapped_methods(),
            "kotlin members without a java counterpart"
        );
    }

    Ok(PairArtifacts {
        dir_name: pair_dir_name(&pair.kotlin, &pair.java),
        java_stub: render_java_stub(&pair.java, &java),
        kotlin_stub: render_kotlin_stub(&pair.kotlin, &kotlin),
        mapping_details: serde_yaml::to_string(&report)?,
    })
}

fn write_pair(output_dir: &Path, artifacts: &PairArtifacts) -> Result<PathBuf, GenError> {
    let dir = output_dir.join(&artifacts.dir_name);
    std::fs::create_dir_all(&dir).map_err(GenError::io(&dir))?;

    atomic_write(
        &dir.join(JAVA_DEFINITION_FILE),
        artifacts.java_stub.as_bytes(),
    )?;
    atomic_write(
        &dir.join(KOTLIN_DEFINITION_FILE),
        artifacts.kotlin_stub.as_bytes(),
    )?;
    atomic_write(
        &dir.join(MAPPING_DETAILS_FILE),
        artifacts.mapping_details.as_bytes(),
    )?;
    Ok(dir)
}

/// Generate the artifacts for every pair, in order.
///
/// `on_pair` is called after each pair's three files are on disk. The first error stops the
/// run; directories written for earlier pairs are left in place.
pub fn generate(
    registry: &Registry,
    pairs: &[MappingPair],
    options: &GenerateOptions,
    mut on_pair: impl FnMut(&GeneratedPair),
) -> Result<GenerateSummary, GenError> {
    std::fs::create_dir_all(&options.output_dir).map_err(GenError::io(&options.output_dir))?;

    let mut generated = Vec::with_capacity(pairs.len());
    for pair in pairs {
        if !registry.contains(&pair.kotlin) || !registry.contains(&pair.java) {
            tracing::warn!(
                target: "ktmap.gen",
                kotlin = %pair.kotlin,
                java = %pair.java,
                "unknown type in pair; rendering an empty class for it"
            );
        }

        let artifacts = render_pair(registry, pair)?;
        let dir = write_pair(&options.output_dir, &artifacts)?;
        tracing::info!(
            target: "ktmap.gen",
            kotlin = %pair.kotlin,
            java = %pair.java,
            dir = %dir.display(),
            "generated mapping"
        );

        let entry = GeneratedPair {
            kotlin: pair.kotlin.clone(),
            java: pair.java.clone(),
            dir,
        };
        on_pair(&entry);
        generated.push(entry);
    }

    Ok(GenerateSummary {
        output_dir: options.output_dir.clone(),
        pairs: generated,
    })
}
