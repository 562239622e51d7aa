use std::fs;

use ktmap_config::{builtin_pairs, parse_pairs, MappingPair};
use ktmap_core::{Registry, TypeKind};
use ktmap_gen::{build_index, generate, write_index, GenerateOptions, JAVA_DEFINITION_FILE};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn index_is_sorted_and_deduplicated() {
    let out = tempdir().unwrap();
    let options = GenerateOptions {
        output_dir: out.path().to_path_buf(),
    };
    let pairs = [
        MappingPair::new("kotlin.collections.List", "java.util.List"),
        MappingPair::new("kotlin.Any", "java.lang.Object"),
    ];
    generate(Registry::global(), &pairs, &options, |_| {}).unwrap();

    // Same declarations under a second directory name.
    let copy = out.path().join("copy_of_any");
    fs::create_dir(&copy).unwrap();
    let any_dir = out.path().join("kotlin_Any_to_java_lang_Object");
    for entry in fs::read_dir(&any_dir).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), copy.join(entry.file_name())).unwrap();
    }

    let index = build_index(out.path()).unwrap();
    let names: Vec<(&str, &str)> = index
        .mappings
        .iter()
        .map(|entry| (entry.kotlin.name.as_str(), entry.java.name.as_str()))
        .collect();
    assert_eq!(
        names,
        [
            ("kotlin.Any", "java.lang.Object"),
            ("kotlin.collections.List", "java.util.List"),
        ]
    );
    assert_eq!(index.mappings[0].kotlin.kind, TypeKind::Class);
    assert_eq!(index.mappings[1].java.kind, TypeKind::Interface);
}

#[test]
fn incomplete_directories_and_stray_files_are_skipped() {
    let out = tempdir().unwrap();
    fs::write(out.path().join("README"), "not a mapping").unwrap();
    let half = out.path().join("half");
    fs::create_dir(&half).unwrap();
    fs::write(half.join(JAVA_DEFINITION_FILE), "public class Half {\n}").unwrap();

    let index = build_index(out.path()).unwrap();
    assert!(index.mappings.is_empty());
}

#[test]
fn written_index_reads_back_as_input() {
    let out = tempdir().unwrap();
    let options = GenerateOptions {
        output_dir: out.path().join("mappings"),
    };
    generate(Registry::global(), &builtin_pairs(), &options, |_| {}).unwrap();

    let index = build_index(&options.output_dir).unwrap();
    // Mutable variants share Java sides but keep distinct Kotlin names.
    assert_eq!(index.mappings.len(), 32);

    let index_path = out.path().join("mapped-types-index.yaml");
    write_index(&index_path, &index).unwrap();
    let text = fs::read_to_string(&index_path).unwrap();
    assert!(text.starts_with(
        "mappings:\n- kotlin:\n    kind: interface\n    name: kotlin.Annotation\n  java:\n    kind: interface\n    name: java.lang.annotation.Annotation\n"
    ));

    let pairs = parse_pairs(&text, "index").unwrap();
    assert_eq!(pairs.len(), 32);
    assert!(pairs.contains(&MappingPair::new(
        "kotlin.collections.MutableMap.MutableEntry",
        "java.util.Map.Entry"
    )));
}
