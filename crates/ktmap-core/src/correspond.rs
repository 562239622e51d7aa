//! Kotlin member → Java member correspondences.
//!
//! Properties are matched through [`PROPERTY_RULES`]; methods match by identical name, with one
//! fallback for Kotlin's indexed access operator (`get` → `charAt`). Members that match nothing
//! are left out of the serialized report.

use serde::{Deserialize, Serialize};

use crate::descriptor::TypeDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorStyle {
    /// Java exposes the value through a method of the same shape (`size()`).
    Method,
    /// Java exposes the value through a `getX()` getter.
    Getter,
}

impl AccessorStyle {
    pub fn note(self) -> &'static str {
        match self {
            AccessorStyle::Method => "Kotlin property maps to Java method",
            AccessorStyle::Getter => "Kotlin property maps to Java getter method",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRule {
    pub property: &'static str,
    pub java_method: &'static str,
    pub style: AccessorStyle,
}

const fn rule(property: &'static str, java_method: &'static str, style: AccessorStyle) -> PropertyRule {
    PropertyRule {
        property,
        java_method,
        style,
    }
}

/// Property name translations, checked in order by exact name.
pub const PROPERTY_RULES: &[PropertyRule] = &[
    rule("size", "size", AccessorStyle::Method),
    rule("length", "length", AccessorStyle::Method),
    rule("message", "getMessage", AccessorStyle::Getter),
    rule("cause", "getCause", AccessorStyle::Getter),
    rule("stackTrace", "getStackTrace", AccessorStyle::Getter),
    rule("name", "name", AccessorStyle::Method),
    rule("ordinal", "ordinal", AccessorStyle::Method),
    rule("entries", "entrySet", AccessorStyle::Method),
    rule("keys", "keySet", AccessorStyle::Method),
    rule("values", "values", AccessorStyle::Method),
    rule("key", "getKey", AccessorStyle::Getter),
    rule("value", "getValue", AccessorStyle::Getter),
];

pub const INDEXED_ACCESS_KOTLIN_METHOD: &str = "get";
pub const INDEXED_ACCESS_JAVA_METHOD: &str = "charAt";

const DIRECT_METHOD_NOTE: &str = "Direct method mapping";
const INDEXED_ACCESS_NOTE: &str = "Kotlin operator fun get maps to Java charAt method";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyCorrespondence {
    pub kotlin_property: String,
    pub java_method: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCorrespondence {
    pub kotlin_method: String,
    pub java_method: String,
    pub note: String,
}

/// Derived per pair; field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrespondenceReport {
    pub kotlin_type: String,
    pub java_type: String,
    pub property_mappings: Vec<PropertyCorrespondence>,
    pub method_mappings: Vec<MethodCorrespondence>,
    #[serde(skip)]
    unmapped_properties: Vec<String>,
    #[serde(skip)]
    unmapped_methods: Vec<String>,
}

impl CorrespondenceReport {
    /// Kotlin properties no rule (or no Java method) accounted for.
    pub fn unmapped_properties(&self) -> &[String] {
        &self.unmapped_properties
    }

    /// Kotlin methods with neither a same-named Java method nor the indexed-access fallback.
    pub fn unmapped_methods(&self) -> &[String] {
        &self.unmapped_methods
    }
}

fn property_rule(property: &str) -> Option<&'static PropertyRule> {
    PROPERTY_RULES.iter().find(|rule| rule.property == property)
}

/// Line up the members of `kotlin` with those of `java`, preserving Kotlin declaration order.
pub fn correspond(kotlin: &TypeDescriptor, java: &TypeDescriptor) -> CorrespondenceReport {
    let mut report = CorrespondenceReport {
        kotlin_type: kotlin.name.clone(),
        java_type: java.name.clone(),
        property_mappings: Vec::new(),
        method_mappings: Vec::new(),
        unmapped_properties: Vec::new(),
        unmapped_methods: Vec::new(),
    };

    for property in kotlin.properties() {
        match property_rule(property).filter(|rule| java.has_method(rule.java_method)) {
            Some(rule) => report.property_mappings.push(PropertyCorrespondence {
                kotlin_property: property.clone(),
                java_method: rule.java_method.to_owned(),
                note: rule.style.note().to_owned(),
            }),
            None => report.unmapped_properties.push(property.clone()),
        }
    }

    for method in &kotlin.methods {
        let (java_method, note) = if java.has_method(method) {
            (method.as_str(), DIRECT_METHOD_NOTE)
        } else if method == INDEXED_ACCESS_KOTLIN_METHOD
            && java.has_method(INDEXED_ACCESS_JAVA_METHOD)
        {
            (INDEXED_ACCESS_JAVA_METHOD, INDEXED_ACCESS_NOTE)
        } else {
            report.unmapped_methods.push(method.clone());
            continue;
        };
        report.method_mappings.push(MethodCorrespondence {
            kotlin_method: method.clone(),
            java_method: java_method.to_owned(),
            note: note.to_owned(),
        });
    }

    report
}
