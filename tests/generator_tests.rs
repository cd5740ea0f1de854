//! End-to-end generation tests
//!
//! Samples come from `tests/fixtures/programs`; templates are the ones shipped in
//! `build_tests/`. Output goes to scratch directories.
//!
//! Run with: `cargo test --test generator_tests`
//! Review snapshot changes: `cargo insta review`

use std::fs;
use std::path::{Path, PathBuf};

use golite_testgen::{CheckKind, GenerateError, GeneratorConfig, SuiteGenerator, build_class};

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Config reading the checked-in fixtures and templates, writing into `out`.
fn fixture_config(out: &Path) -> GeneratorConfig {
    let root = manifest_dir();
    GeneratorConfig::new()
        .with_valid_dir(root.join("tests/fixtures/programs/valid"))
        .with_invalid_dir(root.join("tests/fixtures/programs/invalid/syntax"))
        .with_class_template(root.join("build_tests/GoLiteTestTemplate.java"))
        .with_suite_template(root.join("build_tests/GoLiteTestSuiteTemplate.java"))
        .with_output_dir(out)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

// ============================================================================
// Class snapshots
// ============================================================================

#[cfg(unix)]
#[test]
fn test_valid_fixture_class_snapshot() {
    let template = "public class <<<INSERT NAME HERE>>> {\n\n<<<INSERT TESTS HERE>>>\n\n}\n";
    let class_source = build_class(
        "FixtureValidSyntaxTest",
        Path::new("tests/fixtures/programs/valid"),
        CheckKind::ParseValid,
        template,
    )
    .expect("build_class failed");
    insta::assert_snapshot!("valid_fixture_class", class_source);
}

// ============================================================================
// Full runs
// ============================================================================

#[test]
fn test_generate_writes_three_classes_and_suite() {
    let out = tempfile::tempdir().unwrap();
    let report = SuiteGenerator::new(fixture_config(out.path())).generate().unwrap();

    let counts: Vec<_> = report.classes.iter().map(|c| (c.name.as_str(), c.method_count)).collect();
    assert_eq!(
        counts,
        [
            ("GoLiteValidSyntaxTest", 3),
            ("GoLiteInvalidSyntaxTest", 2),
            ("GoLitePrettyPrintTest", 3),
        ]
    );
    assert_eq!(report.total_methods(), 8);

    for name in ["GoLiteValidSyntaxTest", "GoLiteInvalidSyntaxTest", "GoLitePrettyPrintTest", "GoLiteTestSuite"] {
        assert!(out.path().join(format!("{name}.java")).is_file(), "missing {name}.java");
    }
    assert_eq!(report.suite_path, out.path().join("GoLiteTestSuite.java"));
}

#[test]
fn test_generated_class_contents() {
    let out = tempfile::tempdir().unwrap();
    SuiteGenerator::new(fixture_config(out.path())).generate().unwrap();

    let valid = read(&out.path().join("GoLiteValidSyntaxTest.java"));
    assert!(valid.contains("public class GoLiteValidSyntaxTest extends GoLiteTestBase {"));
    assert!(valid.contains("public void gridTwoDimTest() throws IOException {"));
    assert!(!valid.contains("<<<"));
    assert!(!valid.contains("README"));

    let invalid = read(&out.path().join("GoLiteInvalidSyntaxTest.java"));
    assert_eq!(invalid.matches("assertFalse(parse(").count(), 2);
    assert!(invalid.contains("public void varNoTypeTest()"));

    let pretty = read(&out.path().join("GoLitePrettyPrintTest.java"));
    assert_eq!(pretty.matches("assertTrue(checkPrettyInvariant(").count(), 3);
}

#[test]
fn test_generated_suite_lists_classes_in_order() {
    let out = tempfile::tempdir().unwrap();
    SuiteGenerator::new(fixture_config(out.path())).generate().unwrap();

    let suite = read(&out.path().join("GoLiteTestSuite.java"));
    assert!(suite.contains(
        "@SuiteClasses({\n\tGoLiteValidSyntaxTest.class,\n\tGoLiteInvalidSyntaxTest.class,\n\tGoLitePrettyPrintTest.class\n})"
    ));
}

#[test]
fn test_generate_is_idempotent() {
    let out = tempfile::tempdir().unwrap();
    let generator = SuiteGenerator::new(fixture_config(out.path()));

    generator.generate().unwrap();
    let names = ["GoLiteValidSyntaxTest", "GoLiteInvalidSyntaxTest", "GoLitePrettyPrintTest", "GoLiteTestSuite"];
    let first: Vec<_> = names.iter().map(|n| read(&out.path().join(format!("{n}.java")))).collect();

    generator.generate().unwrap();
    let second: Vec<_> = names.iter().map(|n| read(&out.path().join(format!("{n}.java")))).collect();

    assert_eq!(first, second);
}

#[test]
fn test_existing_output_dir_is_reused() {
    let out = tempfile::tempdir().unwrap();
    fs::write(out.path().join("GoLiteTestSuite.java"), "stale").unwrap();

    SuiteGenerator::new(fixture_config(out.path())).generate().unwrap();
    assert_ne!(read(&out.path().join("GoLiteTestSuite.java")), "stale");
}

#[test]
fn test_empty_invalid_dir_yields_empty_class() {
    let out = tempfile::tempdir().unwrap();
    let empty = tempfile::tempdir().unwrap();
    let config = fixture_config(out.path()).with_invalid_dir(empty.path());

    let report = SuiteGenerator::new(config).generate().unwrap();
    assert_eq!(report.classes[1].method_count, 0);

    let invalid = read(&out.path().join("GoLiteInvalidSyntaxTest.java"));
    assert!(!invalid.contains("@Test"));
    assert!(invalid.contains("extends GoLiteTestBase {\n\n\n\n}\n"));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_invalid_dir_aborts_before_suite() {
    let out = tempfile::tempdir().unwrap();
    let config = fixture_config(out.path()).with_invalid_dir(out.path().join("no-such-dir"));

    let err = SuiteGenerator::new(config).generate().unwrap_err();
    assert!(matches!(err, GenerateError::Traversal { .. }));
    assert!(!out.path().join("GoLiteTestSuite.java").exists());
}

#[test]
fn test_missing_class_template_fails() {
    let out = tempfile::tempdir().unwrap();
    let config = fixture_config(out.path()).with_class_template(out.path().join("missing.java"));

    let err = SuiteGenerator::new(config).generate().unwrap_err();
    assert!(matches!(err, GenerateError::TemplateRead { .. }));
}

#[test]
fn test_missing_suite_template_fails() {
    let out = tempfile::tempdir().unwrap();
    let config = fixture_config(out.path()).with_suite_template(out.path().join("missing.java"));

    let err = SuiteGenerator::new(config).generate().unwrap_err();
    match err {
        GenerateError::TemplateRead { path, .. } => assert_eq!(path, out.path().join("missing.java")),
        other => panic!("expected TemplateRead, got {other:?}"),
    }
    assert!(!out.path().join("GoLiteTestSuite.java").exists());
}

#[test]
fn test_duplicate_sample_names_abort_generation() {
    let out = tempfile::tempdir().unwrap();
    let samples = tempfile::tempdir().unwrap();
    fs::write(samples.path().join("grid_2d.go"), "package main\n").unwrap();
    fs::create_dir_all(samples.path().join("more")).unwrap();
    fs::write(samples.path().join("more").join("grid-2d.go"), "package main\n").unwrap();

    let config = fixture_config(out.path()).with_valid_dir(samples.path());
    let err = SuiteGenerator::new(config).generate().unwrap_err();
    assert!(matches!(err, GenerateError::DuplicateTestName { ref name, .. } if name == "gridTwoDimTest"));
}

#[test]
fn test_sample_root_that_is_a_file_fails() {
    let out = tempfile::tempdir().unwrap();
    let lone = out.path().join("lone.go");
    fs::write(&lone, "package main\n").unwrap();
    let config = fixture_config(out.path()).with_valid_dir(&lone);

    let err = SuiteGenerator::new(config).generate().unwrap_err();
    assert!(matches!(err, GenerateError::Traversal { ref path, .. } if *path == lone));
    assert!(!out.path().join("GoLiteValidSyntaxTest.java").exists());
}
