//! Architecture contract tests.

mod support;

use support::architecture::{
    find_lines_containing, find_non_export_lines_in_mod_files, path_exists, read_relative,
};

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "reqwest::",
            "teloxide::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::", "reqwest::", "teloxide::"],
    );
    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn ports_depend_only_on_domain() {
    let hits = find_lines_containing(
        "src/port",
        &["crate::adapter", "crate::application", "crate::infrastructure"],
    );
    assert!(hits.is_empty(), "ports should only use domain types: {hits:#?}");
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}

#[test]
fn telegram_adapter_is_feature_gated() {
    let source = read_relative("src/adapter/outbound/notifier/mod.rs");
    assert!(
        source.contains("#[cfg(feature = \"telegram\")]\npub mod telegram;"),
        "telegram notifier module should be behind the telegram feature"
    );
}

#[test]
fn runtime_wiring_lives_in_infrastructure() {
    for file in [
        "src/infrastructure/bootstrap.rs",
        "src/infrastructure/orchestration/runtime.rs",
        "src/infrastructure/config/settings.rs",
    ] {
        assert!(path_exists(file), "expected infrastructure module `{file}`");
    }
}

#[test]
fn source_code_never_unwraps_outside_tests() {
    for (file, line, text) in find_lines_containing("src", &[".unwrap()", ".expect("]) {
        let content = read_relative(&file);
        let test_start = content
            .find("#[cfg(test)]")
            .map(|offset| content[..offset].lines().count());
        let in_tests = file.starts_with("src/testkit/")
            || test_start.is_some_and(|start| line > start);
        assert!(in_tests, "unwrap/expect outside tests at {file}:{line}: {text}");
    }
}
