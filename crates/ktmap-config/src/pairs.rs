use std::path::Path;

use ktmap_core::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One requested Kotlin ↔ Java mapping, both sides fully-qualified names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawMappingPair")]
pub struct MappingPair {
    pub kotlin: String,
    pub java: String,
}

impl MappingPair {
    pub fn new(kotlin: impl Into<String>, java: impl Into<String>) -> Self {
        Self {
            kotlin: kotlin.into(),
            java: java.into(),
        }
    }
}

/// Either side of a pair may be a bare name or a `{kind, name}` record as written by the index.
#[derive(Deserialize)]
#[serde(untagged)]
enum TypeRef {
    Name(String),
    Info(TypeInfo),
}

impl TypeRef {
    fn into_name(self) -> String {
        match self {
            TypeRef::Name(name) => name,
            TypeRef::Info(info) => info.name,
        }
    }
}

#[derive(Deserialize)]
struct RawMappingPair {
    kotlin: TypeRef,
    java: TypeRef,
}

impl From<RawMappingPair> for MappingPair {
    fn from(raw: RawMappingPair) -> Self {
        Self {
            kotlin: raw.kotlin.into_name(),
            java: raw.java.into_name(),
        }
    }
}

/// The mapped-types document as written back out (`mappings:` at the top level).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedTypesDocument {
    pub mappings: Vec<MappingPair>,
}

/// Parse a mapped-types document.
///
/// Accepts `mappings: [...]` or a bare top-level sequence. `origin` only labels errors.
pub fn parse_pairs(text: &str, origin: &str) -> Result<Vec<MappingPair>, ConfigError> {
    let yaml_error = |err: serde_yaml::Error| ConfigError::Yaml {
        path: origin.to_owned(),
        message: err.to_string(),
    };

    let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(yaml_error)?;
    let list = match value {
        serde_yaml::Value::Mapping(mut mapping) => {
            mapping
                .remove("mappings")
                .ok_or_else(|| ConfigError::Yaml {
                    path: origin.to_owned(),
                    message: "expected a top-level `mappings` list".to_owned(),
                })?
        }
        seq @ serde_yaml::Value::Sequence(_) => seq,
        serde_yaml::Value::Null => {
            return Err(ConfigError::Yaml {
                path: origin.to_owned(),
                message: "document is empty".to_owned(),
            })
        }
        _ => {
            return Err(ConfigError::Yaml {
                path: origin.to_owned(),
                message: "expected a mapping with `mappings` or a sequence of pairs".to_owned(),
            })
        }
    };

    serde_yaml::from_value(list).map_err(yaml_error)
}

/// Read and parse a mapped-types document from disk.
pub fn load_pairs(path: impl AsRef<Path>) -> Result<Vec<MappingPair>, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let pairs = parse_pairs(&text, &path.display().to_string())?;
    tracing::debug!(
        target: "ktmap.config",
        path = %path.display(),
        pairs = pairs.len(),
        "loaded mapped types"
    );
    Ok(pairs)
}

const BUILTIN_PAIRS: &[(&str, &str)] = &[
    ("kotlin.Any", "java.lang.Object"),
    ("kotlin.Byte", "java.lang.Byte"),
    ("kotlin.Short", "java.lang.Short"),
    ("kotlin.Int", "java.lang.Integer"),
    ("kotlin.Long", "java.lang.Long"),
    ("kotlin.Char", "java.lang.Character"),
    ("kotlin.Float", "java.lang.Float"),
    ("kotlin.Double", "java.lang.Double"),
    ("kotlin.Boolean", "java.lang.Boolean"),
    ("kotlin.String", "java.lang.String"),
    ("kotlin.CharSequence", "java.lang.CharSequence"),
    ("kotlin.Throwable", "java.lang.Throwable"),
    ("kotlin.Cloneable", "java.lang.Cloneable"),
    ("kotlin.Comparable", "java.lang.Comparable"),
    ("kotlin.Enum", "java.lang.Enum"),
    ("kotlin.Annotation", "java.lang.annotation.Annotation"),
    ("kotlin.collections.Iterator", "java.util.Iterator"),
    ("kotlin.collections.Iterable", "java.lang.Iterable"),
    ("kotlin.collections.Collection", "java.util.Collection"),
    ("kotlin.collections.Set", "java.util.Set"),
    ("kotlin.collections.List", "java.util.List"),
    ("kotlin.collections.ListIterator", "java.util.ListIterator"),
    ("kotlin.collections.Map", "java.util.Map"),
    ("kotlin.collections.Map.Entry", "java.util.Map.Entry"),
    ("kotlin.collections.MutableIterator", "java.util.Iterator"),
    ("kotlin.collections.MutableIterable", "java.lang.Iterable"),
    ("kotlin.collections.MutableCollection", "java.util.Collection"),
    ("kotlin.collections.MutableSet", "java.util.Set"),
    ("kotlin.collections.MutableList", "java.util.List"),
    ("kotlin.collections.MutableListIterator", "java.util.ListIterator"),
    ("kotlin.collections.MutableMap", "java.util.Map"),
    ("kotlin.collections.MutableMap.MutableEntry", "java.util.Map.Entry"),
];

/// The mapped types listed in Kotlin's Java interop documentation, in documentation order.
pub fn builtin_pairs() -> Vec<MappingPair> {
    BUILTIN_PAIRS
        .iter()
        .map(|(kotlin, java)| MappingPair::new(*kotlin, *java))
        .collect()
}
