use std::fs;

use ktmap_config::{builtin_pairs, MappingPair};
use ktmap_core::{CorrespondenceReport, Registry};
use ktmap_gen::{
    generate, render_pair, GenError, GenerateOptions, JAVA_DEFINITION_FILE,
    KOTLIN_DEFINITION_FILE, MAPPING_DETAILS_FILE,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn writes_three_artifacts_for_list_pair() {
    let out = tempdir().unwrap();
    let options = GenerateOptions {
        output_dir: out.path().join("mappings"),
    };
    let pairs = [MappingPair::new("kotlin.collections.List", "java.util.List")];

    let mut reported = Vec::new();
    let summary = generate(Registry::global(), &pairs, &options, |pair| {
        reported.push(pair.kotlin.clone());
    })
    .unwrap();

    assert_eq!(reported, ["kotlin.collections.List"]);
    let dir = options
        .output_dir
        .join("kotlin_collections_List_to_java_util_List");
    assert_eq!(summary.pairs.len(), 1);
    assert_eq!(summary.pairs[0].dir, dir);

    let java = fs::read_to_string(dir.join(JAVA_DEFINITION_FILE)).unwrap();
    assert!(java.starts_with("package java.util;\n\npublic interface List extends java.util.Collection {\n"));

    let kotlin = fs::read_to_string(dir.join(KOTLIN_DEFINITION_FILE)).unwrap();
    assert!(kotlin.starts_with(
        "package kotlin.collections\n\ninterface List : kotlin.collections.Collection {\n    val size: Any // property\n"
    ));

    let details = fs::read_to_string(dir.join(MAPPING_DETAILS_FILE)).unwrap();
    assert!(details.starts_with(
        "kotlin_type: kotlin.collections.List\njava_type: java.util.List\nproperty_mappings:\n- kotlin_property: size\n  java_method: size\n"
    ));
    let report: CorrespondenceReport = serde_yaml::from_str(&details).unwrap();
    assert_eq!(report.method_mappings.len(), 9);
}

#[test]
fn nested_types_get_a_single_flat_directory() {
    let registry = Registry::builtin();
    let artifacts = render_pair(
        &registry,
        &MappingPair::new("kotlin.collections.Map.Entry", "java.util.Map.Entry"),
    )
    .unwrap();
    assert_eq!(
        artifacts.dir_name,
        "kotlin_collections_Map_Entry_to_java_util_Map_Entry"
    );
    assert!(!artifacts.dir_name.contains('.'));
    assert!(!artifacts.dir_name.contains('/'));
}

#[test]
fn separator_laden_names_stay_inside_output_dir() {
    let out = tempdir().unwrap();
    let options = GenerateOptions {
        output_dir: out.path().join("mappings"),
    };
    let pairs = [
        MappingPair::new("/abs/kotlin", "java"),
        MappingPair::new("nested/kotlin", "java\\Win"),
    ];

    let summary = generate(Registry::global(), &pairs, &options, |_| {}).unwrap();

    let dirs: Vec<_> = summary.pairs.iter().map(|pair| pair.dir.clone()).collect();
    assert_eq!(
        dirs,
        [
            options.output_dir.join("_abs_kotlin_to_java"),
            options.output_dir.join("nested_kotlin_to_java_Win"),
        ]
    );
    for dir in &dirs {
        assert_eq!(dir.parent(), Some(options.output_dir.as_path()));
        assert!(dir.join(JAVA_DEFINITION_FILE).is_file(), "{}", dir.display());
    }
    assert_eq!(fs::read_dir(&options.output_dir).unwrap().count(), 2);
}

#[test]
fn unknown_types_render_as_empty_classes() {
    let registry = Registry::builtin();
    let artifacts =
        render_pair(&registry, &MappingPair::new("kotlin.Nothing", "java.lang.Void")).unwrap();
    assert_eq!(artifacts.java_stub, "package java.lang;\n\npublic class Void {\n}");
    assert_eq!(artifacts.kotlin_stub, "package kotlin\n\nclass Nothing {\n}");
    assert_eq!(
        artifacts.mapping_details,
        "kotlin_type: kotlin.Nothing\njava_type: java.lang.Void\nproperty_mappings: []\nmethod_mappings: []\n"
    );
}

#[test]
fn builtin_pairs_generate_one_directory_each() {
    let out = tempdir().unwrap();
    let options = GenerateOptions {
        output_dir: out.path().to_path_buf(),
    };
    let pairs = builtin_pairs();

    let summary = generate(Registry::global(), &pairs, &options, |_| {}).unwrap();
    assert_eq!(summary.pairs.len(), pairs.len());

    let dirs = fs::read_dir(out.path()).unwrap().count();
    assert_eq!(dirs, pairs.len());
    for pair in &summary.pairs {
        for file in [JAVA_DEFINITION_FILE, KOTLIN_DEFINITION_FILE, MAPPING_DETAILS_FILE] {
            assert!(pair.dir.join(file).is_file(), "{}", pair.dir.display());
        }
    }
}

#[test]
fn regenerating_is_byte_identical() {
    let out = tempdir().unwrap();
    let options = GenerateOptions {
        output_dir: out.path().to_path_buf(),
    };
    let pairs = [MappingPair::new("kotlin.String", "java.lang.String")];

    generate(Registry::global(), &pairs, &options, |_| {}).unwrap();
    let dir = out.path().join("kotlin_String_to_java_lang_String");
    let first = fs::read(dir.join(MAPPING_DETAILS_FILE)).unwrap();
    generate(Registry::global(), &pairs, &options, |_| {}).unwrap();
    assert_eq!(fs::read(dir.join(MAPPING_DETAILS_FILE)).unwrap(), first);
}

#[test]
fn unwritable_output_aborts_without_touching_later_pairs() {
    let out = tempdir().unwrap();
    // A plain file where the second pair's directory should go.
    fs::write(out.path().join("kotlin_Int_to_java_lang_Integer"), "blocker").unwrap();

    let options = GenerateOptions {
        output_dir: out.path().to_path_buf(),
    };
    let pairs = [
        MappingPair::new("kotlin.Any", "java.lang.Object"),
        MappingPair::new("kotlin.Int", "java.lang.Integer"),
        MappingPair::new("kotlin.Long", "java.lang.Long"),
    ];

    let mut completed = 0;
    let err = generate(Registry::global(), &pairs, &options, |_| completed += 1).unwrap_err();
    assert!(matches!(err, GenError::Io { .. }), "{err:?}");
    assert_eq!(completed, 1);
    assert!(out
        .path()
        .join("kotlin_Any_to_java_lang_Object")
        .join(JAVA_DEFINITION_FILE)
        .is_file());
    assert!(!out.path().join("kotlin_Long_to_java_lang_Long").exists());
}
