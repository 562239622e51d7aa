//! The static table of known type shapes.
//!
//! Entries mirror the public surface of the JDK and Kotlin standard library types that take
//! part in Kotlin's mapped-type interop, reduced to member names. `java.lang.Number` is referenced
//! as a supertype but intentionally has no entry of its own.

use crate::descriptor::{TypeDescriptor, TypeKind};

#[derive(Debug, Clone, Copy)]
pub(crate) struct BuiltinType {
    pub(crate) name: &'static str,
    pub(crate) kind: TypeKind,
    pub(crate) supertype: Option<&'static str>,
    pub(crate) methods: &'static [&'static str],
    pub(crate) properties: Option<&'static [&'static str]>,
}

impl BuiltinType {
    const fn class(name: &'static str, methods: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: TypeKind::Class,
            supertype: None,
            methods,
            properties: None,
        }
    }

    const fn interface(name: &'static str, methods: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: TypeKind::Interface,
            supertype: None,
            methods,
            properties: None,
        }
    }

    const fn extends(mut self, supertype: &'static str) -> Self {
        self.supertype = Some(supertype);
        self
    }

    const fn properties(mut self, properties: &'static [&'static str]) -> Self {
        self.properties = Some(properties);
        self
    }

    pub(crate) fn to_descriptor(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name.to_owned(),
            kind: self.kind,
            supertype: self.supertype.map(str::to_owned),
            methods: self.methods.iter().map(|m| (*m).to_owned()).collect(),
            properties: self
                .properties
                .map(|props| props.iter().map(|p| (*p).to_owned()).collect()),
        }
    }
}

const COMPARABLE_VALUE: &[&str] = &["compareTo", "equals", "hashCode", "toString"];

const KOTLIN_NUMBER_CONVERSIONS: &[&str] = &[
    "toByte", "toShort", "toInt", "toLong", "toFloat", "toDouble", "toChar", "compareTo", "equals",
    "hashCode", "toString",
];

const KOTLIN_FLOATING_CONVERSIONS: &[&str] = &[
    "toByte", "toShort", "toInt", "toLong", "toFloat", "toDouble", "compareTo", "equals",
    "hashCode", "toString", "isNaN", "isInfinite",
];

const JAVA_COLLECTION: &[&str] = &[
    "add", "addAll", "clear", "contains", "containsAll", "equals", "hashCode", "isEmpty",
    "iterator", "remove", "removeAll", "retainAll", "size", "toArray",
];

const KOTLIN_READ_COLLECTION: &[&str] = &["contains", "containsAll", "isEmpty", "iterator"];

const KOTLIN_MUTABLE_COLLECTION: &[&str] = &[
    "add", "addAll", "clear", "contains", "containsAll", "isEmpty", "iterator", "remove",
    "removeAll", "retainAll",
];

const SIZE: &[&str] = &["size"];
const MAP_PROPERTIES: &[&str] = &["size", "entries", "keys", "values"];
const ENTRY_PROPERTIES: &[&str] = &["key", "value"];

pub(crate) const BUILTIN_TYPES: &[BuiltinType] = &[
    // java.lang
    BuiltinType::class(
        "java.lang.Object",
        &["equals", "hashCode", "toString", "getClass", "notify", "notifyAll", "wait"],
    ),
    BuiltinType::class(
        "java.lang.Byte",
        &["byteValue", "compareTo", "equals", "hashCode", "toString"],
    )
    .extends("java.lang.Number"),
    BuiltinType::class(
        "java.lang.Short",
        &["shortValue", "compareTo", "equals", "hashCode", "toString"],
    )
    .extends("java.lang.Number"),
    BuiltinType::class(
        "java.lang.Integer",
        &["intValue", "compareTo", "equals", "hashCode", "toString"],
    )
    .extends("java.lang.Number"),
    BuiltinType::class(
        "java.lang.Long",
        &["longValue", "compareTo", "equals", "hashCode", "toString"],
    )
    .extends("java.lang.Number"),
    BuiltinType::class(
        "java.lang.Character",
        &["charValue", "compareTo", "equals", "hashCode", "toString"],
    ),
    BuiltinType::class(
        "java.lang.Float",
        &[
            "floatValue", "compareTo", "equals", "hashCode", "toString", "isNaN", "isInfinite",
        ],
    )
    .extends("java.lang.Number"),
    BuiltinType::class(
        "java.lang.Double",
        &[
            "doubleValue", "compareTo", "equals", "hashCode", "toString", "isNaN", "isInfinite",
        ],
    )
    .extends("java.lang.Number"),
    BuiltinType::class(
        "java.lang.Boolean",
        &["booleanValue", "compareTo", "equals", "hashCode", "toString"],
    ),
    BuiltinType::class(
        "java.lang.String",
        &[
            "charAt", "compareTo", "concat", "contains", "equals", "equalsIgnoreCase", "hashCode",
            "indexOf", "isEmpty", "length", "replace", "split", "startsWith", "substring",
            "toLowerCase", "toUpperCase", "trim", "toString",
        ],
    ),
    BuiltinType::interface(
        "java.lang.CharSequence",
        &["charAt", "length", "subSequence", "toString"],
    ),
    BuiltinType::class(
        "java.lang.Throwable",
        &[
            "getMessage", "getLocalizedMessage", "getCause", "printStackTrace", "getStackTrace",
            "toString",
        ],
    ),
    BuiltinType::interface("java.lang.Cloneable", &[]),
    BuiltinType::interface("java.lang.Comparable", &["compareTo"]),
    BuiltinType::class(
        "java.lang.Enum",
        &["name", "ordinal", "compareTo", "equals", "hashCode", "toString"],
    ),
    BuiltinType::interface(
        "java.lang.annotation.Annotation",
        &["annotationType", "equals", "hashCode", "toString"],
    ),
    // java.util
    BuiltinType::interface("java.util.Iterator", &["hasNext", "next", "remove"]),
    BuiltinType::interface("java.lang.Iterable", &["iterator"]),
    BuiltinType::interface("java.util.Collection", JAVA_COLLECTION).extends("java.lang.Iterable"),
    BuiltinType::interface("java.util.Set", JAVA_COLLECTION).extends("java.util.Collection"),
    BuiltinType::interface(
        "java.util.List",
        &[
            "add", "addAll", "clear", "contains", "containsAll", "equals", "get", "hashCode",
            "indexOf", "isEmpty", "iterator", "lastIndexOf", "listIterator", "remove", "removeAll",
            "retainAll", "set", "size", "subList", "toArray",
        ],
    )
    .extends("java.util.Collection"),
    BuiltinType::interface(
        "java.util.ListIterator",
        &[
            "hasNext", "hasPrevious", "next", "nextIndex", "previous", "previousIndex", "remove",
            "set", "add",
        ],
    )
    .extends("java.util.Iterator"),
    BuiltinType::interface(
        "java.util.Map",
        &[
            "clear", "containsKey", "containsValue", "entrySet", "equals", "get", "hashCode",
            "isEmpty", "keySet", "put", "putAll", "remove", "size", "values",
        ],
    ),
    BuiltinType::interface(
        "java.util.Map.Entry",
        &["getKey", "getValue", "setValue", "equals", "hashCode"],
    ),
    // kotlin
    BuiltinType::class("kotlin.Any", &["equals", "hashCode", "toString"]),
    BuiltinType::class("kotlin.Byte", KOTLIN_NUMBER_CONVERSIONS),
    BuiltinType::class("kotlin.Short", KOTLIN_NUMBER_CONVERSIONS),
    BuiltinType::class("kotlin.Int", KOTLIN_NUMBER_CONVERSIONS),
    BuiltinType::class("kotlin.Long", KOTLIN_NUMBER_CONVERSIONS),
    BuiltinType::class(
        "kotlin.Char",
        &[
            "toChar", "toByte", "toShort", "toInt", "toLong", "toFloat", "toDouble", "compareTo",
            "equals", "hashCode", "toString",
        ],
    ),
    BuiltinType::class("kotlin.Float", KOTLIN_FLOATING_CONVERSIONS),
    BuiltinType::class("kotlin.Double", KOTLIN_FLOATING_CONVERSIONS),
    BuiltinType::class("kotlin.Boolean", COMPARABLE_VALUE),
    BuiltinType::class(
        "kotlin.String",
        &[
            "get", "compareTo", "equals", "hashCode", "toString", "substring", "startsWith",
            "endsWith", "indexOf", "lastIndexOf", "contains", "replace", "toLowerCase",
            "toUpperCase", "trim", "split",
        ],
    )
    .properties(&["length"]),
    BuiltinType::interface("kotlin.CharSequence", &["get", "subSequence", "toString"])
        .properties(&["length"]),
    BuiltinType::class("kotlin.Throwable", &["printStackTrace", "toString"])
        .properties(&["message", "cause", "stackTrace"]),
    BuiltinType::interface("kotlin.Cloneable", &[]),
    BuiltinType::interface("kotlin.Comparable", &["compareTo"]),
    BuiltinType::class("kotlin.Enum", COMPARABLE_VALUE).properties(&["name", "ordinal"]),
    BuiltinType::interface("kotlin.Annotation", &[]),
    // kotlin.collections
    BuiltinType::interface("kotlin.collections.Iterator", &["hasNext", "next"]),
    BuiltinType::interface("kotlin.collections.Iterable", &["iterator"]),
    BuiltinType::interface("kotlin.collections.Collection", KOTLIN_READ_COLLECTION)
        .extends("kotlin.collections.Iterable")
        .properties(SIZE),
    BuiltinType::interface("kotlin.collections.Set", KOTLIN_READ_COLLECTION)
        .extends("kotlin.collections.Collection")
        .properties(SIZE),
    BuiltinType::interface(
        "kotlin.collections.List",
        &[
            "contains", "containsAll", "get", "indexOf", "isEmpty", "iterator", "lastIndexOf",
            "listIterator", "subList",
        ],
    )
    .extends("kotlin.collections.Collection")
    .properties(SIZE),
    BuiltinType::interface(
        "kotlin.collections.ListIterator",
        &["hasNext", "hasPrevious", "next", "nextIndex", "previous", "previousIndex"],
    )
    .extends("kotlin.collections.Iterator"),
    BuiltinType::interface(
        "kotlin.collections.Map",
        &["containsKey", "containsValue", "get", "isEmpty"],
    )
    .properties(MAP_PROPERTIES),
    BuiltinType::interface("kotlin.collections.Map.Entry", &[]).properties(ENTRY_PROPERTIES),
    BuiltinType::interface(
        "kotlin.collections.MutableIterator",
        &["hasNext", "next", "remove"],
    )
    .extends("kotlin.collections.Iterator"),
    BuiltinType::interface("kotlin.collections.MutableIterable", &["iterator"])
        .extends("kotlin.collections.Iterable"),
    BuiltinType::interface("kotlin.collections.MutableCollection", KOTLIN_MUTABLE_COLLECTION)
        .extends("kotlin.collections.Collection")
        .properties(SIZE),
    BuiltinType::interface("kotlin.collections.MutableSet", KOTLIN_MUTABLE_COLLECTION)
        .extends("kotlin.collections.MutableCollection")
        .properties(SIZE),
    BuiltinType::interface(
        "kotlin.collections.MutableList",
        &[
            "add", "addAll", "clear", "contains", "containsAll", "get", "indexOf", "isEmpty",
            "iterator", "lastIndexOf", "listIterator", "remove", "removeAll", "removeAt",
            "retainAll", "set", "subList",
        ],
    )
    .extends("kotlin.collections.MutableCollection")
    .properties(SIZE),
    BuiltinType::interface(
        "kotlin.collections.MutableListIterator",
        &[
            "add", "hasNext", "hasPrevious", "next", "nextIndex", "previous", "previousIndex",
            "remove", "set",
        ],
    )
    .extends("kotlin.collections.ListIterator"),
    BuiltinType::interface(
        "kotlin.collections.MutableMap",
        &[
            "clear", "containsKey", "containsValue", "get", "isEmpty", "put", "putAll", "remove",
        ],
    )
    .properties(MAP_PROPERTIES),
    BuiltinType::interface("kotlin.collections.MutableMap.MutableEntry", &["setValue"])
        .extends("kotlin.collections.Map.Entry")
        .properties(ENTRY_PROPERTIES),
];
