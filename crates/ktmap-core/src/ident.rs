/// Replace characters that would split or confuse a single path segment.
///
/// Package dots, `$` in nested binary names, and path separators all become `_`, so the
/// result always joins onto a directory as exactly one relative component.
pub fn sanitize_path_segment(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '.' | '$' | '/' | '\\' => '_',
            c if c == std::path::MAIN_SEPARATOR => '_',
            c => c,
        })
        .collect()
}

/// Directory name for a mapping pair, e.g. `kotlin_Int_to_java_lang_Integer`.
pub fn pair_dir_name(kotlin: &str, java: &str) -> String {
    sanitize_path_segment(&format!("{kotlin}_to_{java}"))
}
