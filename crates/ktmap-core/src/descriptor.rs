use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
}

impl TypeKind {
    /// Declaration keyword shared by Java and Kotlin (`class` / `interface`).
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
        }
    }
}

/// Shape of a single known type: its kind, an optional supertype and member names.
///
/// Member lists keep declaration order and are never de-duplicated. `properties` is `None` for
/// types that declare no property list at all, which renders the same as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Fully-qualified dotted name, e.g. `kotlin.collections.List`.
    pub name: String,
    pub kind: TypeKind,
    /// Rendered verbatim; never resolved against the registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supertype: Option<String>,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
}

impl TypeDescriptor {
    /// The descriptor used for names the registry does not know: an empty class.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Class,
            supertype: None,
            methods: Vec::new(),
            properties: None,
        }
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn properties(&self) -> &[String] {
        self.properties.as_deref().unwrap_or_default()
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m == name)
    }

    pub fn package_name(&self) -> Option<&str> {
        package_of(&self.name)
    }

    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.name)
    }
}

/// Kind and qualified name of a declaration, as recovered from a rendered stub.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeInfo {
    pub kind: TypeKind,
    pub name: String,
}

/// Everything before the last `.`, or `None` when that prefix is missing or empty.
pub fn package_of(name: &str) -> Option<&str> {
    name.rsplit_once('.')
        .map(|(p, _)| p)
        .filter(|p| !p.is_empty())
}

/// The last dotted segment of `name`.
pub fn simple_name_of(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, s)| s).unwrap_or(name)
}
