//! End-to-end generation from fixture files into a temporary output tree.

use std::fs;
use std::path::{Path, PathBuf};

use framegen_define::ComputedOptionalRequired;
use framegen_gen::diff::{Change, CheckOutcome, check_specifications};
use framegen_gen::errors::GeneratorError;
use framegen_gen::output::{GENERATED_HEADER, GenerateOptions, generate_all, load_specification};
use framegen_gen::render::GoRenderer;
use tempfile::TempDir;

/// Helper returning the path of a fixture file.
fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn mixed_specification_writes_good_items_and_reports_bad_ones() {
    let spec = load_specification(&fixture_path("mixed.json")).unwrap();
    let out = TempDir::new().unwrap();

    let report = generate_all(
        &spec,
        out.path(),
        &GenerateOptions::default(),
        &GoRenderer::new(),
    );

    let generated: Vec<&str> = report.generated.iter().map(|f| f.item.as_str()).collect();
    assert_eq!(generated, vec!["provider/example", "resource/firewall"]);

    let failed: Vec<&str> = report.failures.iter().map(|f| f.item.as_str()).collect();
    assert_eq!(failed, vec!["resource/broken", "datasource/matrix"]);
    assert!(!report.is_success());
    assert!(matches!(
        report.failures[0].error,
        GeneratorError::UnknownKind { .. }
    ));
    assert!(matches!(
        report.failures[1].error,
        GeneratorError::UnresolvedElementConversion { .. }
    ));

    let firewall = out.path().join("resource_firewall/firewall_resource_gen.go");
    let code = fs::read_to_string(&firewall).unwrap();
    assert!(code.starts_with(GENERATED_HEADER), "{}", code);
    assert!(code.contains("package resource_firewall"), "{}", code);
    assert!(
        code.contains("func FirewallResourceSchema(ctx context.Context) schema.Schema {"),
        "{}",
        code
    );
    assert!(code.contains("type FirewallModel struct {"), "{}", code);
    assert!(code.contains("Tags TagsValue `tfsdk:\"tags\"`"), "{}", code);
    assert!(code.contains("type RulesValue struct {"), "{}", code);
    assert!(code.contains("type SourceValue struct {"), "{}", code);
    assert!(code.contains("Description: \"Manages a firewall\","), "{}", code);

    let provider = out.path().join("provider_example/example_provider_gen.go");
    let code = fs::read_to_string(&provider).unwrap();
    assert!(
        code.contains("func ExampleProviderSchema(ctx context.Context) schema.Schema {"),
        "{}",
        code
    );

    assert!(!out.path().join("resource_broken").exists());
    assert!(!out.path().join("datasource_matrix").exists());
}

#[test]
fn only_restricts_the_run_to_one_item() {
    let spec = load_specification(&fixture_path("mixed.json")).unwrap();
    let out = TempDir::new().unwrap();
    let options = GenerateOptions {
        only: Some("resource/firewall".to_string()),
        ..Default::default()
    };

    let report = generate_all(&spec, out.path(), &options, &GoRenderer::new());

    assert!(report.is_success());
    assert_eq!(report.generated.len(), 1);
    assert!(!out.path().join("provider_example").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let spec = load_specification(&fixture_path("configuration.json")).unwrap();
    let out = TempDir::new().unwrap();
    let options = GenerateOptions {
        dry_run: true,
        ..Default::default()
    };

    let report = generate_all(&spec, out.path(), &options, &GoRenderer::new());

    assert!(report.is_success());
    assert_eq!(report.generated.len(), 1);
    let code = &report.generated[0].content;
    assert!(code.contains("\"example.com/apisdk\""), "{}", code);
    assert!(code.contains("ToApisdkConfiguration"), "{}", code);
    assert!(!report.generated[0].path.exists());
}

#[test]
fn regenerating_replaces_previous_output() {
    let spec = load_specification(&fixture_path("configuration.json")).unwrap();
    let out = TempDir::new().unwrap();
    let path = out.path().join("resource_thing/thing_resource_gen.go");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "// stale").unwrap();

    let report = generate_all(
        &spec,
        out.path(),
        &GenerateOptions::default(),
        &GoRenderer::new(),
    );

    assert!(report.is_success());
    let code = fs::read_to_string(&path).unwrap();
    assert!(code.starts_with(GENERATED_HEADER), "{}", code);
    assert!(!path.with_extension("go.tmp").exists());
}

#[test]
fn missing_specification_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let result = load_specification(&dir.path().join("missing.json"));

    match result {
        Err(GeneratorError::ParseError { path, .. }) => assert!(path.ends_with("missing.json")),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn check_reports_deep_changes_between_fixtures() {
    let baseline = load_specification(&fixture_path("configuration.json")).unwrap();
    let mut fresh = baseline.clone();
    let configuration = fresh.resources[0].schema.attributes[0]
        .single_nested
        .as_mut()
        .unwrap();
    configuration.attributes[0]
        .string
        .as_mut()
        .unwrap()
        .computed_optional_required = ComputedOptionalRequired::Required;

    let checks = check_specifications(&baseline, &fresh);
    assert_eq!(checks.len(), 1);
    match &checks[0].outcome {
        CheckOutcome::Changed(changes) => assert_eq!(
            changes,
            &vec![Change::Modified("configuration.description".to_string())]
        ),
        other => panic!("expected changed item, got {:?}", other),
    }

    let other = load_specification(&fixture_path("list_nested_attribute_three.json")).unwrap();
    let checks = check_specifications(&baseline, &other);
    let outcomes: Vec<(&str, bool)> = checks
        .iter()
        .map(|check| (check.item.as_str(), matches!(check.outcome, CheckOutcome::Added)))
        .collect();
    assert_eq!(
        outcomes,
        vec![("datasource/nested", true), ("resource/thing", false)]
    );
    assert!(matches!(checks[1].outcome, CheckOutcome::Removed));
}
