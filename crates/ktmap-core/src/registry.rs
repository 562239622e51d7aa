use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::builtin::BUILTIN_TYPES;
use crate::correspond::{correspond, CorrespondenceReport};
use crate::descriptor::TypeDescriptor;

/// Read-only table of known type descriptors keyed by fully-qualified name.
///
/// Lookups never fail: unknown names resolve to [`TypeDescriptor::empty`].
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: HashMap<String, TypeDescriptor>,
}

impl Registry {
    /// Build the table of Java and Kotlin standard types known to the generator.
    pub fn builtin() -> Self {
        Self::from_descriptors(BUILTIN_TYPES.iter().map(|ty| ty.to_descriptor()))
    }

    /// Process-wide builtin registry, built on first use.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::builtin)
    }

    /// Later descriptors replace earlier ones with the same name.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        let types = descriptors
            .into_iter()
            .map(|desc| (desc.name.clone(), desc))
            .collect();
        Self { types }
    }

    pub fn lookup(&self, name: &str) -> Cow<'_, TypeDescriptor> {
        match self.types.get(name) {
            Some(desc) => Cow::Borrowed(desc),
            None => Cow::Owned(TypeDescriptor::empty(name)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Known names in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Correspondence report for a Kotlin/Java pair, looking both names up in this registry.
    pub fn infer(&self, kotlin_name: &str, java_name: &str) -> CorrespondenceReport {
        let kotlin = self.lookup(kotlin_name);
        let java = self.lookup(java_name);
        correspond(&kotlin, &java)
    }
}
