//! Minimal Java and Kotlin declarations for a [`TypeDescriptor`].
//!
//! Output is line-oriented, joined with `\n`, and carries no trailing newline. Both renderers
//! are deterministic: the same input always produces byte-identical text.

use crate::descriptor::{package_of, simple_name_of, TypeDescriptor};

/// Render a Java stub: optional `package` line, a `public` declaration, one comment per method.
///
/// Properties are not rendered; Java has no property syntax.
pub fn render_java_stub(name: &str, descriptor: &TypeDescriptor) -> String {
    let mut lines = Vec::with_capacity(descriptor.methods.len() + 4);

    if let Some(package) = package_of(name) {
        lines.push(format!("package {package};"));
        lines.push(String::new());
    }

    let extends = descriptor
        .supertype
        .as_deref()
        .map(|sup| format!(" extends {sup}"))
        .unwrap_or_default();
    lines.push(format!(
        "public {} {}{extends} {{",
        descriptor.kind.keyword(),
        simple_name_of(name)
    ));

    for method in &descriptor.methods {
        lines.push(format!("    // {method}()"));
    }

    lines.push("}".to_owned());
    lines.join("\n")
}

/// Render a Kotlin stub: properties first as `val <name>: Any`, then methods as `fun <name>()`.
pub fn render_kotlin_stub(name: &str, descriptor: &TypeDescriptor) -> String {
    let properties = descriptor.properties();
    let mut lines = Vec::with_capacity(properties.len() + descriptor.methods.len() + 4);

    if let Some(package) = package_of(name) {
        lines.push(format!("package {package}"));
        lines.push(String::new());
    }

    let supertypes = descriptor
        .supertype
        .as_deref()
        .map(|sup| format!(" : {sup}"))
        .unwrap_or_default();
    lines.push(format!(
        "{} {}{supertypes} {{",
        descriptor.kind.keyword(),
        simple_name_of(name)
    ));

    for property in properties {
        lines.push(format!("    val {property}: Any // property"));
    }
    for method in &descriptor.methods {
        lines.push(format!("    fun {method}() // method"));
    }

    lines.push("}".to_owned());
    lines.join("\n")
}
