use ktmap_core::{render_java_stub, render_kotlin_stub, Registry, TypeDescriptor, TypeKind};
use pretty_assertions::assert_eq;

fn descriptor(
    name: &str,
    kind: TypeKind,
    supertype: Option<&str>,
    methods: &[&str],
    properties: Option<&[&str]>,
) -> TypeDescriptor {
    TypeDescriptor {
        name: name.to_owned(),
        kind,
        supertype: supertype.map(str::to_owned),
        methods: methods.iter().map(|m| (*m).to_owned()).collect(),
        properties: properties.map(|props| props.iter().map(|p| (*p).to_owned()).collect()),
    }
}

#[test]
fn java_stub_for_builtin_list() {
    let registry = Registry::builtin();
    let text = render_java_stub("java.util.List", &registry.lookup("java.util.List"));
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("package java.util;"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(
        lines.next(),
        Some("public interface List extends java.util.Collection {")
    );
    assert_eq!(lines.next(), Some("    // add()"));
    assert!(text.ends_with("    // toArray()\n}"));
}

#[test]
fn java_stub_keeps_supertype_verbatim() {
    let desc = descriptor(
        "java.lang.Integer",
        TypeKind::Class,
        Some("java.lang.Number"),
        &["intValue"],
        None,
    );
    assert_eq!(
        render_java_stub(&desc.name, &desc),
        "package java.lang;\n\npublic class Integer extends java.lang.Number {\n    // intValue()\n}"
    );
}

#[test]
fn java_stub_ignores_properties() {
    let desc = descriptor("p.Q", TypeKind::Class, None, &[], Some(&["size"]));
    assert_eq!(render_java_stub("p.Q", &desc), "package p;\n\npublic class Q {\n}");
}

#[test]
fn unqualified_names_have_no_package_line() {
    let desc = TypeDescriptor::empty("Thing");
    assert_eq!(render_java_stub("Thing", &desc), "public class Thing {\n}");
    assert_eq!(render_kotlin_stub("Thing", &desc), "class Thing {\n}");
}

#[test]
fn leading_dot_names_have_no_package_line() {
    let desc = TypeDescriptor::empty(".Foo");
    assert_eq!(render_java_stub(".Foo", &desc), "public class Foo {\n}");
    assert_eq!(render_kotlin_stub(".Foo", &desc), "class Foo {\n}");
}

#[test]
fn kotlin_stub_for_builtin_list() {
    let registry = Registry::builtin();
    let text = render_kotlin_stub(
        "kotlin.collections.List",
        &registry.lookup("kotlin.collections.List"),
    );
    let expected = "\
package kotlin.collections

interface List : kotlin.collections.Collection {
    val size: Any // property
    fun contains() // method
    fun containsAll() // method
    fun get() // method
    fun indexOf() // method
    fun isEmpty() // method
    fun iterator() // method
    fun lastIndexOf() // method
    fun listIterator() // method
    fun subList() // method
}";
    assert_eq!(text, expected);
}

#[test]
fn kotlin_stub_lists_properties_before_methods() {
    let desc = descriptor(
        "a.b.C",
        TypeKind::Interface,
        None,
        &["m1", "m2", "m1"],
        Some(&["p1", "p2"]),
    );
    let text = render_kotlin_stub(&desc.name, &desc);
    let members: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("    "))
        .collect();
    assert_eq!(
        members,
        [
            "    val p1: Any // property",
            "    val p2: Any // property",
            "    fun m1() // method",
            "    fun m2() // method",
            "    fun m1() // method",
        ]
    );
}

#[test]
fn nested_type_names_split_on_last_segment() {
    let registry = Registry::builtin();
    let java = render_java_stub("java.util.Map.Entry", &registry.lookup("java.util.Map.Entry"));
    assert!(java.starts_with("package java.util.Map;\n\npublic interface Entry {\n"));

    let kotlin = render_kotlin_stub(
        "kotlin.collections.MutableMap.MutableEntry",
        &registry.lookup("kotlin.collections.MutableMap.MutableEntry"),
    );
    assert!(kotlin.starts_with(
        "package kotlin.collections.MutableMap\n\ninterface MutableEntry : kotlin.collections.Map.Entry {\n"
    ));
}

#[test]
fn rendering_is_deterministic() {
    let registry = Registry::builtin();
    for name in registry.names() {
        let desc = registry.lookup(name);
        assert_eq!(render_java_stub(name, &desc), render_java_stub(name, &desc));
        assert_eq!(render_kotlin_stub(name, &desc), render_kotlin_stub(name, &desc));

        let java = render_java_stub(name, &desc);
        let decl = java
            .lines()
            .find(|line| !line.starts_with("package") && !line.is_empty())
            .unwrap();
        assert!(
            decl.starts_with("public class ") || decl.starts_with("public interface "),
            "{decl}"
        );
    }
}
